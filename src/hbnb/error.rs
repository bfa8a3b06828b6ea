use thiserror::Error;

/// Every failure the shell can report.
///
/// The first group are the user-facing validation errors; their `Display`
/// text is exactly what the interpreter prints. The rest wrap persistence
/// failures.
#[derive(Error, Debug)]
pub enum HbnbError {
    #[error("** class name missing **")]
    MissingTypeName,

    #[error("** class doesn't exist **")]
    UnknownTypeName(String),

    #[error("** instance id missing **")]
    MissingInstanceId,

    #[error("** no instance found **")]
    InstanceNotFound(String),

    #[error("** attribute name missing **")]
    MissingAttributeName,

    #[error("** value missing **")]
    MissingAttributeValue,

    #[error("*** Unknown syntax: {type_name}.{method}()")]
    UnknownSyntax { type_name: String, method: String },

    #[error("** malformed dictionary: {0} **")]
    MalformedMapping(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl HbnbError {
    /// True for errors caused by the input line rather than by storage.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            HbnbError::Io(_) | HbnbError::Serialization(_) | HbnbError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HbnbError>;
