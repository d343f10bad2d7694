use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute type descriptor, as declared in a resource schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrType {
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// Ordered list of the element type.
    List(Box<AttrType>),
    /// Unordered set of unique elements.
    Set(Box<AttrType>),
    /// String-keyed map of the element type.
    Map(Box<AttrType>),
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrType::String => write!(f, "string"),
            AttrType::Bool => write!(f, "bool"),
            AttrType::Int32 => write!(f, "int32"),
            AttrType::Int64 => write!(f, "int64"),
            AttrType::Float32 => write!(f, "float32"),
            AttrType::Float64 => write!(f, "float64"),
            AttrType::List(elem) => write!(f, "list[{}]", elem),
            AttrType::Set(elem) => write!(f, "set[{}]", elem),
            AttrType::Map(elem) => write!(f, "map[{}]", elem),
        }
    }
}

/// Three-state attribute value.
///
/// `Unknown` only exists while planning; conversions treat it like `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Nullable<T> {
    /// Attribute intentionally absent.
    #[default]
    Null,
    /// Value not resolved yet.
    Unknown,
    /// Concrete payload.
    Known(T),
}

impl<T> Nullable<T> {
    /// Wraps a concrete payload.
    pub fn known(value: T) -> Self {
        Nullable::Known(value)
    }

    /// Builds a known value from `Some`, a null value from `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Known(v),
            None => Nullable::Null,
        }
    }

    /// True for the null state.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// True for the unknown state.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Nullable::Unknown)
    }

    /// Borrows the payload of a known value.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Nullable::Known(v) => Some(v),
            Nullable::Null | Nullable::Unknown => None,
        }
    }

    /// Consumes the value, returning the payload if known.
    pub fn into_known(self) -> Option<T> {
        match self {
            Nullable::Known(v) => Some(v),
            Nullable::Null | Nullable::Unknown => None,
        }
    }
}

impl Nullable<String> {
    /// Returns the string payload, or `""` when null or unknown.
    pub fn value_str(&self) -> &str {
        self.as_known().map(String::as_str).unwrap_or("")
    }
}

/// Terraform string value.
pub type StringValue = Nullable<String>;
/// Terraform bool value.
pub type BoolValue = Nullable<bool>;
/// Terraform int32 value.
pub type Int32Value = Nullable<i32>;
/// Terraform int64 value.
pub type Int64Value = Nullable<i64>;
/// Terraform float32 value.
pub type Float32Value = Nullable<f32>;
/// Terraform float64 value.
pub type Float64Value = Nullable<f64>;

/// Host scalar with a direct attribute counterpart.
pub trait Primitive: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Attribute type holding this scalar.
    fn attr_type() -> AttrType;
    /// Canonical text form, used for set identity.
    fn render(&self) -> String;
}

impl Primitive for String {
    fn attr_type() -> AttrType {
        AttrType::String
    }

    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl Primitive for bool {
    fn attr_type() -> AttrType {
        AttrType::Bool
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! numeric_primitive {
    ($ty:ty, $attr:ident) => {
        impl Primitive for $ty {
            fn attr_type() -> AttrType {
                AttrType::$attr
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

numeric_primitive!(i32, Int32);
numeric_primitive!(i64, Int64);
numeric_primitive!(f32, Float32);
numeric_primitive!(f64, Float64);

/// Any attribute value: scalar or container.
pub trait Attr: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Declared type of the value.
    fn attr_type() -> AttrType;
    /// True for the null state.
    fn is_null(&self) -> bool;
    /// True for the unknown state.
    fn is_unknown(&self) -> bool;
    /// Canonical text form (`<null>` / `<unknown>` for unset values).
    fn render(&self) -> String;
}

impl<T: Primitive> Attr for Nullable<T> {
    fn attr_type() -> AttrType {
        T::attr_type()
    }

    fn is_null(&self) -> bool {
        Nullable::is_null(self)
    }

    fn is_unknown(&self) -> bool {
        Nullable::is_unknown(self)
    }

    fn render(&self) -> String {
        match self {
            Nullable::Known(v) => v.render(),
            Nullable::Null => "<null>".to_string(),
            Nullable::Unknown => "<unknown>".to_string(),
        }
    }
}
