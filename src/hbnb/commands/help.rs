use crate::commands::CmdResult;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const INDEX_HEADER: &str = "Documented commands (type help <topic>):";

static TOPICS: Lazy<BTreeMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut topics: BTreeMap<&'static str, &'static [&'static str]> = BTreeMap::new();
    topics.insert(
        "create",
        &["Usage: create <class_name>", "Create a new instance of a class"],
    );
    topics.insert(
        "show",
        &[
            "Usage: show <class_name> <id> or <class_name>.show(<id>)",
            "Print the string representation of an instance.",
        ],
    );
    topics.insert(
        "destroy",
        &[
            "Usage: destroy <class_name> <id> or <class_name>.destroy(<id>)",
            "Delete an instance based on the class name and id.",
        ],
    );
    topics.insert(
        "all",
        &[
            "Usage: all <class_name> or <class_name>.all()",
            "Usage: all or .all()",
            "Print string representation of all instances.",
        ],
    );
    topics.insert(
        "count",
        &[
            "Usage: count <class> or <class>.count()",
            "Retrieve the number of instances of a class.",
        ],
    );
    topics.insert(
        "update",
        &[
            "Usage: update <class_name> <id> <attribute_name> <attribute_value>",
            "Usage: update <class_name> <id> <dictionary>",
            "Usage: <class_name>.update(<id>, <attribute_name>, <attribute_value>)",
            "Usage: <class_name>.update(<id>, <dictionary>)",
            "Update an instance based on the class name and id.",
        ],
    );
    topics.insert("quit", &["Usage: quit", "Quit command to exit the program"]);
    topics.insert("EOF", &["Usage: EOF (or Ctrl-D)", "Exit the program"]);
    topics.insert(
        "help",
        &[
            "Usage: help [<topic>]",
            "List available commands with \"help\" or detailed help with \"help <topic>\".",
        ],
    );
    topics
});

pub fn run(topic: Option<&str>) -> CmdResult {
    match topic {
        None => index(),
        Some(name) => match TOPICS.get(name) {
            Some(lines) => lines
                .iter()
                .fold(CmdResult::default(), |result, line| result.with_output(*line)),
            None => CmdResult::default().with_output(format!("*** No help on {}", name)),
        },
    }
}

/// Topic names in sorted order.
pub fn topic_names() -> Vec<&'static str> {
    TOPICS.keys().copied().collect()
}

fn index() -> CmdResult {
    CmdResult::default()
        .with_output("")
        .with_output(INDEX_HEADER)
        .with_output("=".repeat(INDEX_HEADER.len()))
        .with_output(topic_names().join("  "))
        .with_output("")
}
