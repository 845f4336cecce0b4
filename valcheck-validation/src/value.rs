// Raw input values

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// `i64::MIN` as a float; `-I64_MIN_F` is the first float above `i64::MAX`.
const I64_MIN_F: f64 = i64::MIN as f64;

/// Dynamically typed input value.
///
/// Checkers never mutate a `Value`; they inspect it and, on success,
/// reinterpret it into their canonical output type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean literal
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Text
    Text(String),
    /// Ordered list of values
    Sequence(Vec<Value>),
    /// String-keyed record
    Mapping(BTreeMap<String, Value>),
    /// Nominally typed reference value
    Object(Object),
}

impl Value {
    /// Name of the value's intrinsic type, as used in failure messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Object(object) => object.class(),
        }
    }

    /// Whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text or number: the values that have a canonical textual form.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Text(_) | Value::Integer(_) | Value::Float(_))
    }

    /// Numeric payload of `Integer` and `Float` values. Text is not parsed.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Integer(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Cross-type equality where numbers equal their textual rendering.
    ///
    /// Numbers compare numerically with each other (`5 == 5.0`). A number
    /// and a text compare by rendering (`5 == "5"`, `5.0 == "5"`, but
    /// `5 != "5.0"`). Any other pair of different variants is unequal.
    pub fn loosely_eq(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            (Some(_), None) | (None, Some(_)) => {
                let textual = matches!(self, Value::Text(_)) || matches!(other, Value::Text(_));
                textual && self.to_string() == other.to_string()
            }
            (None, None) => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&render_float(*x)),
            Value::Text(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
            Value::Object(object) => write!(f, "{}", object),
        }
    }
}

/// Renders a float the way it reads as a numeral: integral floats drop the
/// fraction and negative zero is `0`.
pub(crate) fn render_float(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        let sign = if x > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if x == 0.0 {
        "0".to_string()
    } else {
        x.to_string()
    }
}

/// Numeric value that keeps integers exact.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Nearest `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// The exact `i64` this number denotes, if it is integral and in range.
    pub fn to_i64_exact(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(f) => {
                let in_range = (I64_MIN_F..-I64_MIN_F).contains(&f);
                (in_range && f.fract() == 0.0).then_some(f as i64)
            }
        }
    }
}

/// Exact ordering of an integer against a float.
fn cmp_int_float(n: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= -I64_MIN_F {
        return Some(Ordering::Less);
    }
    if f < I64_MIN_F {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match n.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&f),
        ordering => Some(ordering),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => f.write_str(&render_float(*x)),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::Int(i64::from(n))
                }
            }

            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f64::from(f))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => Value::Integer(n),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Mapping(entries)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

/// Opaque reference value carrying its nominal type.
///
/// `ancestors` lists every class or interface the object is also an
/// instance of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    class: String,
    ancestors: Vec<String>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ancestors: Vec::new(),
        }
    }

    /// Declare a superclass or implemented interface.
    pub fn extends(mut self, ancestor: impl Into<String>) -> Self {
        self.ancestors.push(ancestor.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Whether the object's class or one of its ancestors is `name`.
    pub fn is_instance_of(&self, name: &str) -> bool {
        self.class == name || self.ancestors.iter().any(|a| a == name)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.class)
    }
}

/// Structural or nominal category a value can belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Boolean,
    /// Integers and floats
    Number,
    Text,
    Sequence,
    Mapping,
    /// Every non-primitive value: sequences, mappings and objects
    Object,
    /// Objects whose class or an ancestor has this name
    Class(String),
}

impl Category {
    pub fn class(name: impl Into<String>) -> Self {
        Category::Class(name.into())
    }

    /// Whether `value` belongs to this category.
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (Category::Boolean, Value::Bool(_)) => true,
            (Category::Number, Value::Integer(_) | Value::Float(_)) => true,
            (Category::Text, Value::Text(_)) => true,
            (Category::Sequence, Value::Sequence(_)) => true,
            (Category::Mapping, Value::Mapping(_)) => true,
            (Category::Object, Value::Sequence(_) | Value::Mapping(_) | Value::Object(_)) => true,
            (Category::Class(name), Value::Object(object)) => object.is_instance_of(name),
            _ => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Boolean => f.write_str("boolean"),
            Category::Number => f.write_str("number"),
            Category::Text => f.write_str("string"),
            Category::Sequence => f.write_str("sequence"),
            Category::Mapping => f.write_str("mapping"),
            Category::Object => f.write_str("object"),
            Category::Class(name) => f.write_str(name),
        }
    }
}

/// Builds a `Vec<Value>` from heterogeneous literals.
///
/// ```
/// use valcheck_validation::{values, Value};
///
/// let allowed = values![2, "5", 3.0];
/// assert_eq!(allowed[1], Value::Text("5".to_string()));
/// ```
#[macro_export]
macro_rules! values {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::Value::from($item)),*]
    };
}
