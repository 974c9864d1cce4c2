//! Per-property metadata records.

use serde_json::Value;

/// Standardization status of a CSS property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Standard,
    Experimental,
    Nonstandard,
    Obsolete,
    /// Any status string this crate does not know about.
    Other,
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "standard" => Status::Standard,
            "experimental" => Status::Experimental,
            "nonstandard" => Status::Nonstandard,
            "obsolete" => Status::Obsolete,
            _ => Status::Other,
        }
    }
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Standard => "standard",
            Status::Experimental => "experimental",
            Status::Nonstandard => "nonstandard",
            Status::Obsolete => "obsolete",
            Status::Other => "other",
        }
    }
}

/// The declared initial value of a property.
///
/// Most properties declare a single token (`"none"`, `"0"`). Shorthands declare
/// the list of longhands they expand to, which is kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialValue {
    Text(String),
    Compound(Value),
}

impl Default for InitialValue {
    fn default() -> Self {
        InitialValue::Compound(Value::Null)
    }
}

impl InitialValue {
    /// The plain token, if this is not a compound value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InitialValue::Text(text) => Some(text),
            InitialValue::Compound(_) => None,
        }
    }
}

impl From<&Value> for InitialValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => InitialValue::Text(text.clone()),
            other => InitialValue::Compound(other.clone()),
        }
    }
}

/// Metadata for a single CSS property.
///
/// Only the fields the pipeline consumes are modelled; everything else in the
/// source record (`syntax`, `groups`, `mdn_url`, ...) is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub name: String,
    pub status: Option<Status>,
    pub initial: InitialValue,
    pub inherited: Option<bool>,
}

impl PropertyRecord {
    pub fn new(name: impl Into<String>, status: Status, initial: &str, inherited: bool) -> Self {
        Self {
            name: name.into(),
            status: Some(status),
            initial: InitialValue::Text(initial.to_string()),
            inherited: Some(inherited),
        }
    }

    /// Read a record out of raw catalog JSON.
    ///
    /// Never fails: a field of the wrong type reads as absent and a record
    /// that is not an object gets a compound initial, so the pipeline drops
    /// it like any other unsupported record.
    pub fn from_json(name: impl Into<String>, value: &Value) -> Self {
        let name = name.into();
        let Some(fields) = value.as_object() else {
            return Self {
                name,
                status: None,
                initial: InitialValue::Compound(value.clone()),
                inherited: None,
            };
        };

        Self {
            name,
            status: fields.get("status").and_then(Value::as_str).map(Status::from),
            initial: fields.get("initial").map(InitialValue::from).unwrap_or_default(),
            inherited: fields.get("inherited").and_then(Value::as_bool),
        }
    }
}
