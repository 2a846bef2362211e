use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A single value read by name from a submission's `data` object.
///
/// Forms send whatever they like, so a field holds any JSON value or
/// nothing at all. Rendering never fails: absent and `null` fields render
/// as empty text.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct Field(Option<Value>);

impl Field {
    pub fn new(value: impl Into<Value>) -> Field {
        Field(Some(value.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_ref().and_then(Value::as_str)
    }

    /// Form-style truthiness: empty strings, zero, `false`, `null` and
    /// missing values are falsy.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// The string entries of an array field, in order. Anything else yields
    /// an empty list.
    pub fn string_items(&self) -> Vec<&str> {
        match &self.0 {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Marks this field for verbatim insertion into an HTML document.
    pub fn raw_html(&self) -> RawHtml<'_> {
        RawHtml(self)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// The one place submitted text enters an HTML body.
///
/// Values are written out unescaped: markup or script in a submission ends
/// up in the email as-is. Every template goes through this wrapper so the
/// injection surface can be found with a single search.
pub struct RawHtml<'a>(&'a Field);

impl Display for RawHtml<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.0, f)
    }
}
