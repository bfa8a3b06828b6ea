//! `verb Type [id] [name value | {mapping}]`

use super::{clean_arg, Attributes, Command, Syntax, Verb};

/// Split the first whitespace-delimited token off `input`.
pub fn next_token(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    Some((&trimmed[..end], &trimmed[end..]))
}

/// Build a command from the text following the verb word.
pub fn parse(verb: Verb, args: &str) -> Command {
    let mut command = Command::new(verb, Syntax::Classic);

    let Some((type_name, rest)) = next_token(args) else {
        return command;
    };
    command.type_name = Some(type_name.to_string());
    if matches!(verb, Verb::Create | Verb::All | Verb::Count) {
        return command;
    }

    let Some((instance_id, rest)) = next_token(rest) else {
        return command;
    };
    command.instance_id = Some(instance_id.to_string());
    if verb != Verb::Update {
        return command;
    }

    command.attributes = match rest.find('{') {
        Some(open) => Attributes::Mapping(rest[open..].trim_end().to_string()),
        None => {
            let (name, rest) = next_token(rest).unzip();
            let value = rest.and_then(next_token).map(|(value, _)| value);
            Attributes::Pair {
                name: clean_arg(name),
                value: clean_arg(value),
            }
        }
    };
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_skip_repeated_whitespace() {
        assert_eq!(next_token("  a   b"), Some(("a", "   b")));
        assert_eq!(next_token("a"), Some(("a", "")));
        assert_eq!(next_token("   "), None);
    }

    #[test]
    fn create_takes_only_the_type() {
        let cmd = parse(Verb::Create, "User extra tokens");
        assert_eq!(cmd.type_name.as_deref(), Some("User"));
        assert_eq!(cmd.instance_id, None);
        assert_eq!(cmd.attributes, Attributes::None);
    }

    #[test]
    fn missing_arguments_stay_absent() {
        let cmd = parse(Verb::Show, "");
        assert_eq!(cmd.type_name, None);

        let cmd = parse(Verb::Destroy, "City");
        assert_eq!(cmd.type_name.as_deref(), Some("City"));
        assert_eq!(cmd.instance_id, None);
    }

    #[test]
    fn update_pair_is_quote_stripped() {
        let cmd = parse(Verb::Update, "User 1234 \"email\" \"aibnb@mail.com\"");
        assert_eq!(
            cmd.attributes,
            Attributes::Pair {
                name: Some("email".into()),
                value: Some("aibnb@mail.com".into()),
            }
        );
    }

    #[test]
    fn update_with_partial_pair() {
        let cmd = parse(Verb::Update, "User 1234 first_name");
        assert_eq!(
            cmd.attributes,
            Attributes::Pair {
                name: Some("first_name".into()),
                value: None,
            }
        );

        let cmd = parse(Verb::Update, "User 1234 first_name \"\"");
        assert_eq!(
            cmd.attributes,
            Attributes::Pair {
                name: Some("first_name".into()),
                value: None,
            }
        );
    }

    #[test]
    fn update_value_is_a_single_token() {
        let cmd = parse(Verb::Update, "User 1 name \"Betty Holberton\"");
        assert_eq!(
            cmd.attributes,
            Attributes::Pair {
                name: Some("name".into()),
                value: Some("\"Betty".into()),
            }
        );
    }

    #[test]
    fn brace_after_id_selects_mapping() {
        let cmd = parse(Verb::Update, "Place 9 {'max_guest': 4, \"name\": \"Loft\"}  ");
        assert_eq!(
            cmd.attributes,
            Attributes::Mapping("{'max_guest': 4, \"name\": \"Loft\"}".into())
        );

        let cmd = parse(Verb::Update, "Place 9 name {oops");
        assert_eq!(cmd.attributes, Attributes::Mapping("{oops".into()));
    }
}
