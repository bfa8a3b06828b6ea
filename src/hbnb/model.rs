use crate::error::{HbnbError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Attribute names owned by the record itself. `update` never touches them.
pub const RESERVED_ATTRIBUTES: [&str; 4] = ["id", "created_at", "updated_at", "__class__"];

/// The closed set of object kinds the shell knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::BaseModel,
        Kind::User,
        Kind::State,
        Kind::City,
        Kind::Amenity,
        Kind::Place,
        Kind::Review,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::BaseModel => "BaseModel",
            Kind::User => "User",
            Kind::State => "State",
            Kind::City => "City",
            Kind::Amenity => "Amenity",
            Kind::Place => "Place",
            Kind::Review => "Review",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = HbnbError;

    fn from_str(s: &str) -> Result<Self> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HbnbError::UnknownTypeName(s.to_string()))
    }
}

/// `"Kind.id"`, the identity of a record inside the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub kind: Kind,
    pub id: String,
}

impl RecordKey {
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.id)
    }
}

impl FromStr for RecordKey {
    type Err = HbnbError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, id) = s
            .split_once('.')
            .ok_or_else(|| HbnbError::Store(format!("Malformed record key: {}", s)))?;
        if id.is_empty() {
            return Err(HbnbError::Store(format!("Malformed record key: {}", s)));
        }
        Ok(Self::new(kind.parse()?, id))
    }
}

/// A typed attribute value.
///
/// Untagged so the JSON file holds plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(n) => write!(f, "{}", n),
            // Debug keeps the trailing `.0` on whole floats.
            AttributeValue::Float(n) => write!(f, "{:?}", n),
            AttributeValue::String(s) => write_quoted(f, s),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("'")
}

/// A live domain object.
///
/// Serialized with the kind under `__class__` and the user attributes
/// flattened next to the fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "__class__")]
    pub kind: Kind,
    pub id: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Record {
    pub fn new(kind: Kind) -> Self {
        let now = Utc::now();
        Self {
            kind,
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.kind, self.id.clone())
    }

    /// Refresh `updated_at`. Callers persist the store afterwards.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Set a user attribute. Returns `false` (and changes nothing) for
    /// reserved names.
    pub fn set_attr(&mut self, name: &str, value: AttributeValue) -> bool {
        if RESERVED_ATTRIBUTES.contains(&name) {
            return false;
        }
        self.attributes.insert(name.to_string(), value);
        true
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {{'id': '{}', 'created_at': '{}', 'updated_at': '{}'",
            self.kind,
            self.id,
            self.id,
            self.created_at.format(timestamp::FORMAT),
            self.updated_at.format(timestamp::FORMAT),
        )?;
        for (name, value) in &self.attributes {
            write!(f, ", '{}': {}", name, value)?;
        }
        f.write_str("}")
    }
}

mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    // `%.f` also accepts timestamps written without a fraction.
    const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(
        ts: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, PARSE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(D::Error::custom)
    }
}
