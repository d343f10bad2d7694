use std::collections::BTreeMap;

use ibmflex_types::{Date, DateTime, Diagnostics, ListValue, MapValue, StringValue, Uuid};
use serde::Serialize;
use serde_json::{Number, Value};

use crate::primitives::list_value_to_slice;

/// SDK value of no fixed type ("any" in the API definitions).
///
/// Rendering to text is decided once by the variant, see [`AnyValue::stringify`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyValue {
    /// Absent value.
    Null,
    /// Plain string, kept as-is.
    String(String),
    /// Boolean, rendered `true`/`false`.
    Bool(bool),
    /// Number, rendered as decimal text.
    Number(Number),
    /// Value that already knows its string form (dates, UUIDs, ...).
    Rendered(String),
    /// Array or object, rendered as JSON text.
    Structural(Value),
}

/// SDK "any object": a JSON object with arbitrary member values.
pub type AnyObject = BTreeMap<String, AnyValue>;

impl AnyValue {
    /// Builds a value from anything serializable, classifying the result.
    pub fn structural<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(AnyValue::from)
    }

    /// Text form of the value; `None` for [`AnyValue::Null`].
    pub fn stringify(&self) -> Option<String> {
        match self {
            AnyValue::Null => None,
            AnyValue::String(s) | AnyValue::Rendered(s) => Some(s.clone()),
            AnyValue::Bool(b) => Some(b.to_string()),
            AnyValue::Number(n) => Some(normalize_number(n.clone()).to_string()),
            AnyValue::Structural(v) => {
                let mut normalized = v.clone();
                normalize_numbers(&mut normalized);
                Some(normalized.to_string())
            }
        }
    }

    /// True for [`AnyValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    /// Borrows the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) | AnyValue::Rendered(s) => Some(s),
            _ => None,
        }
    }
}

/// Whole floats become integers so `2.0` renders as `2`.
fn normalize_number(number: Number) -> Number {
    match number.as_f64() {
        Some(float) if number.is_f64() => integral_number(float).unwrap_or(number),
        _ => number,
    }
}

fn integral_number(float: f64) -> Option<Number> {
    // 2^63 and 2^64 are exact in f64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
    if !float.is_finite() || float.fract() != 0.0 {
        return None;
    }
    if (-I64_BOUND..I64_BOUND).contains(&float) {
        Some(Number::from(float as i64))
    } else if (0.0..U64_BOUND).contains(&float) {
        Some(Number::from(float as u64))
    } else {
        None
    }
}

fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => *n = normalize_number(n.clone()),
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(members) => members.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

impl From<Value> for AnyValue {
    fn from(mut value: Value) -> Self {
        normalize_numbers(&mut value);
        match value {
            Value::Null => AnyValue::Null,
            Value::String(s) => AnyValue::String(s),
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Number(n) => AnyValue::Number(n),
            composite @ (Value::Array(_) | Value::Object(_)) => AnyValue::Structural(composite),
        }
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::String(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::String(value)
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Bool(value)
    }
}

macro_rules! integer_any {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AnyValue {
                fn from(value: $ty) -> Self {
                    AnyValue::Number(Number::from(value))
                }
            }
        )*
    };
}

integer_any!(i32, i64, u32, u64);

impl From<f64> for AnyValue {
    fn from(value: f64) -> Self {
        // JSON has no NaN or infinity.
        match integral_number(value).or_else(|| Number::from_f64(value)) {
            Some(number) => AnyValue::Number(number),
            None => AnyValue::Rendered(value.to_string()),
        }
    }
}

impl From<f32> for AnyValue {
    fn from(value: f32) -> Self {
        // Go through the shortest f32 text so 0.1f32 stays "0.1".
        let text = value.to_string();
        match text.parse::<f64>() {
            Ok(wide) => AnyValue::from(wide),
            Err(_) => AnyValue::Rendered(text),
        }
    }
}

impl From<Date> for AnyValue {
    fn from(value: Date) -> Self {
        AnyValue::Rendered(value.to_string())
    }
}

impl From<DateTime> for AnyValue {
    fn from(value: DateTime) -> Self {
        AnyValue::Rendered(value.to_string())
    }
}

impl From<Uuid> for AnyValue {
    fn from(value: Uuid) -> Self {
        AnyValue::Rendered(value.to_string())
    }
}

impl<T: Into<AnyValue>> From<Option<T>> for AnyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AnyValue::Null)
    }
}

/// Renders an any value; [`AnyValue::Null`] gives a null string value.
pub fn any_to_string_value(value: &AnyValue) -> StringValue {
    StringValue::from_option(value.stringify())
}

/// Reads a string value back as an any value (always a string, or null).
pub fn string_value_to_any(value: &StringValue) -> AnyValue {
    match value.as_known() {
        Some(s) => AnyValue::String(s.clone()),
        None => AnyValue::Null,
    }
}

/// Renders each any value into a list of strings; null elements become `""`.
pub fn any_slice_to_list_value(values: Option<&[AnyValue]>) -> ListValue<StringValue> {
    match values {
        Some(items) => items
            .iter()
            .map(|item| StringValue::known(item.stringify().unwrap_or_default()))
            .collect(),
        None => ListValue::null(),
    }
}

/// Reads a list of strings as any values.
pub fn list_value_to_any_slice(
    list: &ListValue<StringValue>,
) -> Result<Option<Vec<AnyValue>>, Diagnostics> {
    let strings = list_value_to_slice(list)?;
    Ok(strings.map(|items| items.into_iter().map(AnyValue::String).collect()))
}

/// Renders an any object into a map of strings; null members become `""`.
pub fn any_object_to_map_value(object: Option<&AnyObject>) -> MapValue<StringValue> {
    match object {
        Some(members) => members
            .iter()
            .map(|(key, value)| {
                let text = any_to_string_value(value).value_str().to_string();
                (key.clone(), StringValue::known(text))
            })
            .collect(),
        None => MapValue::null(),
    }
}

/// Reads a map of strings as an any object.
pub fn map_value_to_any_object(map: &MapValue<StringValue>) -> Option<AnyObject> {
    if map.is_null() || map.is_unknown() {
        return None;
    }
    Some(
        map.iter()
            .map(|(key, value)| (key.clone(), string_value_to_any(value)))
            .collect(),
    )
}

/// Renders a slice of any objects into a list of string maps.
pub fn any_object_slice_to_list_value(
    objects: Option<&[AnyObject]>,
) -> ListValue<MapValue<StringValue>> {
    match objects {
        Some(items) => items
            .iter()
            .map(|item| any_object_to_map_value(Some(item)))
            .collect(),
        None => ListValue::null(),
    }
}

/// Reads a list of string maps as any objects; a null element becomes an empty object.
pub fn list_value_to_any_object_slice(
    list: &ListValue<MapValue<StringValue>>,
) -> Option<Vec<AnyObject>> {
    if list.is_null() || list.is_unknown() {
        return None;
    }
    Some(
        list.elements()
            .iter()
            .map(|item| map_value_to_any_object(item).unwrap_or_default())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_stringify() {
        assert_eq!(AnyValue::from(true).stringify().as_deref(), Some("true"));
        assert_eq!(AnyValue::from(42).stringify().as_deref(), Some("42"));
        assert_eq!(AnyValue::from(0.1f32).stringify().as_deref(), Some("0.1"));
        assert_eq!(AnyValue::from(f64::NAN).stringify().as_deref(), Some("NaN"));
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(any_to_string_value(&AnyValue::from(42.0f64)).value_str(), "42");
        assert_eq!(AnyValue::from(3.0f32).stringify().as_deref(), Some("3"));
        assert_eq!(AnyValue::from(-7.0f64).stringify().as_deref(), Some("-7"));
        assert_eq!(AnyValue::from(2.5f64).stringify().as_deref(), Some("2.5"));
        assert_eq!(AnyValue::from(1e300f64).stringify().as_deref(), Some("1e300"));
    }

    #[test]
    fn whole_floats_inside_composites_render_as_integers() {
        let list = AnyValue::from(json!([1.0, 2.5]));
        assert_eq!(list.stringify().as_deref(), Some("[1,2.5]"));
        let obj = AnyValue::from(json!({"cpu": 2.0, "mem": {"gb": 4.0}}));
        assert_eq!(obj.stringify().as_deref(), Some(r#"{"cpu":2,"mem":{"gb":4}}"#));
        assert_eq!(AnyValue::from(json!(8.0)), AnyValue::Number(Number::from(8)));
        let built = AnyValue::Structural(json!([3.0]));
        assert_eq!(built.stringify().as_deref(), Some("[3]"));
    }

    #[test]
    fn composites_stringify_as_json() {
        let list = AnyValue::from(json!(["foo", "bar"]));
        assert_eq!(list.stringify().as_deref(), Some(r#"["foo","bar"]"#));
        let obj = AnyValue::from(json!({"foo": "bar"}));
        assert_eq!(obj.stringify().as_deref(), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn rendered_values_use_their_own_form() {
        let date = Date::parse("2024-02-29").unwrap();
        assert_eq!(AnyValue::from(date).stringify().as_deref(), Some("2024-02-29"));
    }

    #[test]
    fn null_is_a_null_string_value() {
        let v = any_to_string_value(&AnyValue::Null);
        assert!(v.is_null());
        assert_eq!(AnyValue::from(None::<String>), AnyValue::Null);
    }

    #[test]
    fn structural_classifies_serialized_values() {
        assert_eq!(AnyValue::structural(&"x").unwrap(), AnyValue::String("x".into()));
        assert!(matches!(AnyValue::structural(&vec![1, 2]).unwrap(), AnyValue::Structural(_)));
    }
}
