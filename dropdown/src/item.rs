//! Result items and the trait for anything that can become an option.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque identifier of a result item.
///
/// Fetched records carry either textual or numeric ids; both end up as the
/// option's string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl ItemId {
    /// Reads an id out of a JSON value.
    ///
    /// Integers that do not fit `i64` keep their exact digits as text instead
    /// of being rounded through `f64`. Returns `None` for null, arrays and
    /// objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Self::Text(u.to_string()))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| de::Error::custom("id must be a string, number or bool"))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write_number(f, *n),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// Number-to-string the way a browser does it: `3.0` -> `3`, `-0.0` -> `0`,
// exponent form outside [1e-6, 1e21) with an explicit `+` on positive
// exponents.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }

    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&sci),
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self::Int(id.into())
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self::Int(id.into())
    }
}

impl From<f64> for ItemId {
    fn from(id: f64) -> Self {
        Self::Float(id)
    }
}

impl From<bool> for ItemId {
    fn from(id: bool) -> Self {
        Self::Bool(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One fetched record: an identifier and a display name.
///
/// # Example
///
/// ```
/// use dropdown::ResultItem;
///
/// let alice = ResultItem::new(1, "Alice");
/// assert_eq!(alice.id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Identifier, becomes the option value.
    pub id: ItemId,
    /// Display string, becomes the option label.
    pub name: String,
}

impl ResultItem {
    /// Creates a new result item.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Anything that can be rendered as one option of a select control.
///
/// Implement this for record types so they can be passed to
/// [`Dropdown::build_from`](crate::Dropdown::build_from) without first being
/// converted into [`ResultItem`]s.
///
/// # Example
///
/// ```
/// use dropdown::OptionSource;
///
/// struct Species {
///     taxon: u32,
///     common_name: String,
/// }
///
/// impl OptionSource for Species {
///     fn option_value(&self) -> String {
///         self.taxon.to_string()
///     }
///
///     fn option_label(&self) -> String {
///         self.common_name.clone()
///     }
/// }
/// ```
pub trait OptionSource {
    /// Value stored in the option.
    fn option_value(&self) -> String;

    /// Text shown for the option.
    fn option_label(&self) -> String;
}

impl OptionSource for ResultItem {
    fn option_value(&self) -> String {
        self.id.to_string()
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

impl<T: OptionSource + ?Sized> OptionSource for &T {
    fn option_value(&self) -> String {
        (**self).option_value()
    }

    fn option_label(&self) -> String {
        (**self).option_label()
    }
}

// (value, label) pairs
impl<S1, S2> OptionSource for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn option_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn option_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
