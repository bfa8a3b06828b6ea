//! `Type.verb(arg1, arg2, arg3)`
//!
//! Up to three positional arguments. The second may be a `{...}` literal,
//! which extends to the last closing brace and so may contain commas. The
//! third takes everything that is left.

use super::{clean_arg, Attributes, Command, Line, Syntax, Verb};

const ALL_UNFILTERED: &str = ".all()";

pub fn parse(line: &str) -> Line {
    if line == ALL_UNFILTERED {
        // Same output as a bare classic `all`.
        return Line::Command(Command::new(Verb::All, Syntax::Classic));
    }

    let Some(open) = line.find('(') else {
        return Line::Malformed;
    };
    if !line.ends_with(')') {
        return Line::Malformed;
    }
    let Some((type_name, method)) = line[..open].rsplit_once('.') else {
        return Line::Malformed;
    };
    if type_name.is_empty() || method.is_empty() {
        return Line::Malformed;
    }

    let verb = match method {
        "all" => Verb::All,
        "count" => Verb::Count,
        "show" => Verb::Show,
        "destroy" => Verb::Destroy,
        "update" => Verb::Update,
        _ => {
            return Line::UnknownSyntax {
                type_name: type_name.to_string(),
                method: method.to_string(),
            }
        }
    };

    let (first, second, third) = split_args(&line[open + 1..line.len() - 1]);
    let mut command = Command::new(verb, Syntax::Dot);
    command.type_name = Some(type_name.to_string());
    if matches!(verb, Verb::All | Verb::Count) {
        return Line::Command(command);
    }

    command.instance_id = clean_arg(first);
    if verb == Verb::Update {
        let second = clean_arg(second);
        command.attributes = match second {
            Some(mapping) if mapping.starts_with('{') && mapping.ends_with('}') => {
                Attributes::Mapping(mapping)
            }
            name => Attributes::Pair {
                name,
                value: clean_arg(third),
            },
        };
    }
    Line::Command(command)
}

fn split_args(inner: &str) -> (Option<&str>, Option<&str>, Option<&str>) {
    let Some((first, rest)) = inner.split_once(',') else {
        return (Some(inner), None, None);
    };

    let rest = rest.trim_start();
    if rest.starts_with('{') {
        if let Some(close) = rest.rfind('}') {
            let tail = rest[close + 1..].trim_start();
            let tail = tail.strip_prefix(',').unwrap_or(tail);
            return (Some(first), Some(&rest[..=close]), Some(tail));
        }
    }

    match rest.split_once(',') {
        Some((second, third)) => (Some(first), Some(second), Some(third)),
        None => (Some(first), Some(rest), None),
    }
}
