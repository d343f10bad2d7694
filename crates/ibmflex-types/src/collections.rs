use std::collections::BTreeMap;

use crate::diagnostics::Diagnostics;
use crate::value::{Attr, AttrType, Nullable, Primitive};

const CONVERSION_ERROR_SUMMARY: &str = "Value Conversion Error";

/// Ordered list attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue<E> {
    elements: Nullable<Vec<E>>,
}

/// Set attribute: elements are unique by canonical rendering and kept in
/// rendering order, so insertion order is not observable.
#[derive(Debug, Clone, PartialEq)]
pub struct SetValue<E> {
    elements: Nullable<BTreeMap<String, E>>,
}

/// String-keyed map attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue<E> {
    elements: Nullable<BTreeMap<String, E>>,
}

impl<E: Attr> ListValue<E> {
    /// Null list.
    pub fn null() -> Self {
        Self {
            elements: Nullable::Null,
        }
    }

    /// Unknown list.
    pub fn unknown() -> Self {
        Self {
            elements: Nullable::Unknown,
        }
    }

    /// Known list with the given elements (possibly empty).
    pub fn new(elements: Vec<E>) -> Self {
        Self {
            elements: Nullable::Known(elements),
        }
    }

    /// True for the null state.
    pub fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    /// True for the unknown state.
    pub fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    /// Elements of a known list; empty when null or unknown.
    pub fn elements(&self) -> &[E] {
        self.elements.as_known().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// True when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Declared element type.
    pub fn element_type(&self) -> AttrType {
        E::attr_type()
    }
}

impl<T: Primitive> ListValue<Nullable<T>> {
    /// Extracts the host values; `None` for a null or unknown list.
    ///
    /// Null or unknown elements cannot be held by `T` and are reported as
    /// errors, one per element.
    pub fn elements_as(&self) -> Result<Option<Vec<T>>, Diagnostics> {
        let Some(items) = self.elements.as_known() else {
            return Ok(None);
        };
        let mut diags = Diagnostics::new();
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if let Some(v) = element_as(item, &format!("list element [{}]", idx), &mut diags) {
                out.push(v);
            }
        }
        if diags.has_error() {
            return Err(diags);
        }
        Ok(Some(out))
    }
}

impl<E: Attr> SetValue<E> {
    /// Null set.
    pub fn null() -> Self {
        Self {
            elements: Nullable::Null,
        }
    }

    /// Unknown set.
    pub fn unknown() -> Self {
        Self {
            elements: Nullable::Unknown,
        }
    }

    /// Known set; duplicate elements collapse into one.
    pub fn new(elements: Vec<E>) -> Self {
        let unique = elements
            .into_iter()
            .map(|elem| (elem.render(), elem))
            .collect::<BTreeMap<_, _>>();
        Self {
            elements: Nullable::Known(unique),
        }
    }

    /// True for the null state.
    pub fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    /// True for the unknown state.
    pub fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    /// Iterates over the elements in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.elements.as_known().into_iter().flat_map(|m| m.values())
    }

    /// Number of unique elements.
    pub fn len(&self) -> usize {
        self.elements.as_known().map(BTreeMap::len).unwrap_or(0)
    }

    /// True when the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when an element with the same rendering is present.
    pub fn contains(&self, elem: &E) -> bool {
        self.elements
            .as_known()
            .map(|m| m.contains_key(&elem.render()))
            .unwrap_or(false)
    }

    /// Declared element type.
    pub fn element_type(&self) -> AttrType {
        E::attr_type()
    }
}

impl<T: Primitive> SetValue<Nullable<T>> {
    /// Extracts the host values in rendering order; `None` for a null or unknown set.
    pub fn elements_as(&self) -> Result<Option<Vec<T>>, Diagnostics> {
        let Some(items) = self.elements.as_known() else {
            return Ok(None);
        };
        let mut diags = Diagnostics::new();
        let mut out = Vec::with_capacity(items.len());
        for item in items.values() {
            if let Some(v) = element_as(item, "set element", &mut diags) {
                out.push(v);
            }
        }
        if diags.has_error() {
            return Err(diags);
        }
        Ok(Some(out))
    }
}

impl<E: Attr> MapValue<E> {
    /// Null map.
    pub fn null() -> Self {
        Self {
            elements: Nullable::Null,
        }
    }

    /// Unknown map.
    pub fn unknown() -> Self {
        Self {
            elements: Nullable::Unknown,
        }
    }

    /// Known map with the given entries (possibly empty).
    pub fn new(elements: BTreeMap<String, E>) -> Self {
        Self {
            elements: Nullable::Known(elements),
        }
    }

    /// True for the null state.
    pub fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    /// True for the unknown state.
    pub fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    /// Looks up one entry.
    pub fn get(&self, key: &str) -> Option<&E> {
        self.elements.as_known().and_then(|m| m.get(key))
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &E)> + '_ {
        self.elements.as_known().into_iter().flat_map(|m| m.iter())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.elements.as_known().map(BTreeMap::len).unwrap_or(0)
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared element type.
    pub fn element_type(&self) -> AttrType {
        E::attr_type()
    }
}

impl<T: Primitive> MapValue<Nullable<T>> {
    /// Extracts the host map; `None` for a null or unknown map.
    pub fn elements_as(&self) -> Result<Option<BTreeMap<String, T>>, Diagnostics> {
        let Some(items) = self.elements.as_known() else {
            return Ok(None);
        };
        let mut diags = Diagnostics::new();
        let mut out = BTreeMap::new();
        for (key, item) in items {
            if let Some(v) = element_as(item, &format!("map element {:?}", key), &mut diags) {
                out.insert(key.clone(), v);
            }
        }
        if diags.has_error() {
            return Err(diags);
        }
        Ok(Some(out))
    }
}

fn element_as<T: Primitive>(item: &Nullable<T>, at: &str, diags: &mut Diagnostics) -> Option<T> {
    match item {
        Nullable::Known(v) => Some(v.clone()),
        Nullable::Null => {
            diags.add_error(
                CONVERSION_ERROR_SUMMARY,
                format!(
                    "{} is null, however the target type {} cannot handle null values",
                    at,
                    T::attr_type()
                ),
            );
            None
        }
        Nullable::Unknown => {
            diags.add_error(
                CONVERSION_ERROR_SUMMARY,
                format!(
                    "{} is unknown, however the target type {} cannot handle unknown values",
                    at,
                    T::attr_type()
                ),
            );
            None
        }
    }
}

impl<E: Attr> FromIterator<E> for ListValue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E: Attr> FromIterator<E> for SetValue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E: Attr> FromIterator<(String, E)> for MapValue<E> {
    fn from_iter<I: IntoIterator<Item = (String, E)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn render_state<T>(state: &Nullable<T>, known: impl FnOnce(&T) -> String) -> String {
    match state {
        Nullable::Known(v) => known(v),
        Nullable::Null => "<null>".to_string(),
        Nullable::Unknown => "<unknown>".to_string(),
    }
}

impl<E: Attr> Attr for ListValue<E> {
    fn attr_type() -> AttrType {
        AttrType::List(Box::new(E::attr_type()))
    }

    fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    fn render(&self) -> String {
        render_state(&self.elements, |items| {
            let parts: Vec<String> = items.iter().map(Attr::render).collect();
            format!("[{}]", parts.join(","))
        })
    }
}

impl<E: Attr> Attr for SetValue<E> {
    fn attr_type() -> AttrType {
        AttrType::Set(Box::new(E::attr_type()))
    }

    fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    fn render(&self) -> String {
        render_state(&self.elements, |items| {
            let parts: Vec<&str> = items.keys().map(String::as_str).collect();
            format!("[{}]", parts.join(","))
        })
    }
}

impl<E: Attr> Attr for MapValue<E> {
    fn attr_type() -> AttrType {
        AttrType::Map(Box::new(E::attr_type()))
    }

    fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    fn render(&self) -> String {
        render_state(&self.elements, |items| {
            let parts: Vec<String> = items
                .iter()
                .map(|(k, v)| format!("{:?}:{}", k, v.render()))
                .collect();
            format!("{{{}}}", parts.join(","))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StringValue;

    fn s(v: &str) -> StringValue {
        StringValue::known(v.to_string())
    }

    #[test]
    fn set_collapses_duplicates() {
        let set = SetValue::new(vec![s("b"), s("a"), s("b")]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&s("a")));
        assert_eq!(set.render(), r#"["a","b"]"#);
    }

    #[test]
    fn set_equality_ignores_insertion_order() {
        let left = SetValue::new(vec![s("x"), s("y")]);
        let right = SetValue::new(vec![s("y"), s("x")]);
        assert_eq!(left, right);
    }

    #[test]
    fn null_element_is_reported() {
        let list = ListValue::new(vec![s("ok"), StringValue::Null, StringValue::Unknown]);
        let diags = list.elements_as().unwrap_err();
        assert_eq!(diags.error_count(), 2);
        let first = diags.iter().next().unwrap();
        assert_eq!(first.summary(), "Value Conversion Error");
        assert!(first.detail().contains("list element [1]"));
    }

    #[test]
    fn unknown_list_extracts_as_absent() {
        let list: ListValue<StringValue> = ListValue::unknown();
        assert_eq!(list.elements_as().unwrap(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn map_render_is_key_ordered() {
        let map: MapValue<StringValue> =
            vec![("b".to_string(), s("2")), ("a".to_string(), s("1"))]
                .into_iter()
                .collect();
        assert_eq!(map.render(), r#"{"a":"1","b":"2"}"#);
        assert_eq!(
            <MapValue<StringValue> as Attr>::attr_type(),
            AttrType::Map(Box::new(AttrType::String))
        );
    }
}
