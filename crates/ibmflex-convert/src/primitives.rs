use std::collections::BTreeMap;

use ibmflex_types::{Diagnostics, ListValue, MapValue, Nullable, Primitive, SetValue};

/// Host slice → list value. `None` gives a null list.
pub fn slice_to_list_value<T: Primitive>(values: Option<&[T]>) -> ListValue<Nullable<T>> {
    match values {
        Some(items) => items.iter().cloned().map(Nullable::Known).collect(),
        None => ListValue::null(),
    }
}

/// List value → host vector. Null or unknown gives `None`.
pub fn list_value_to_slice<T: Primitive>(
    list: &ListValue<Nullable<T>>,
) -> Result<Option<Vec<T>>, Diagnostics> {
    list.elements_as()
}

/// Host slice → set value; duplicates collapse.
pub fn slice_to_set_value<T: Primitive>(values: Option<&[T]>) -> SetValue<Nullable<T>> {
    match values {
        Some(items) => items.iter().cloned().map(Nullable::Known).collect(),
        None => SetValue::null(),
    }
}

/// Set value → host vector, in the set's rendering order.
pub fn set_value_to_slice<T: Primitive>(
    set: &SetValue<Nullable<T>>,
) -> Result<Option<Vec<T>>, Diagnostics> {
    set.elements_as()
}

/// Host map → map value. `None` gives a null map.
pub fn map_to_map_value<T: Primitive>(
    values: Option<&BTreeMap<String, T>>,
) -> MapValue<Nullable<T>> {
    match values {
        Some(items) => items
            .iter()
            .map(|(k, v)| (k.clone(), Nullable::Known(v.clone())))
            .collect(),
        None => MapValue::null(),
    }
}

/// Map value → host map. Null or unknown gives `None`.
pub fn map_value_to_map<T: Primitive>(
    map: &MapValue<Nullable<T>>,
) -> Result<Option<BTreeMap<String, T>>, Diagnostics> {
    map.elements_as()
}

macro_rules! primitive_conversions {
    (
        $host:ty, $label:literal,
        $slice_to_list:ident, $list_to_slice:ident,
        $slice_to_set:ident, $set_to_slice:ident,
        $map_to_value:ident, $value_to_map:ident
    ) => {
        #[doc = concat!("Converts a ", $label, " slice into a list value.")]
        pub fn $slice_to_list(values: Option<&[$host]>) -> ListValue<Nullable<$host>> {
            slice_to_list_value(values)
        }

        #[doc = concat!("Converts a list value into a ", $label, " vector.")]
        pub fn $list_to_slice(
            list: &ListValue<Nullable<$host>>,
        ) -> Result<Option<Vec<$host>>, Diagnostics> {
            list_value_to_slice(list)
        }

        #[doc = concat!("Converts a ", $label, " slice into a set value.")]
        pub fn $slice_to_set(values: Option<&[$host]>) -> SetValue<Nullable<$host>> {
            slice_to_set_value(values)
        }

        #[doc = concat!("Converts a set value into a ", $label, " vector.")]
        pub fn $set_to_slice(
            set: &SetValue<Nullable<$host>>,
        ) -> Result<Option<Vec<$host>>, Diagnostics> {
            set_value_to_slice(set)
        }

        #[doc = concat!("Converts a ", $label, " map into a map value.")]
        pub fn $map_to_value(
            values: Option<&BTreeMap<String, $host>>,
        ) -> MapValue<Nullable<$host>> {
            map_to_map_value(values)
        }

        #[doc = concat!("Converts a map value into a ", $label, " map.")]
        pub fn $value_to_map(
            map: &MapValue<Nullable<$host>>,
        ) -> Result<Option<BTreeMap<String, $host>>, Diagnostics> {
            map_value_to_map(map)
        }
    };
}

primitive_conversions!(
    String,
    "string",
    string_slice_to_list_value,
    list_value_to_string_slice,
    string_slice_to_set_value,
    set_value_to_string_slice,
    string_map_to_map_value,
    map_value_to_string_map
);
primitive_conversions!(
    bool,
    "bool",
    bool_slice_to_list_value,
    list_value_to_bool_slice,
    bool_slice_to_set_value,
    set_value_to_bool_slice,
    bool_map_to_map_value,
    map_value_to_bool_map
);
primitive_conversions!(
    i32,
    "int32",
    int32_slice_to_list_value,
    list_value_to_int32_slice,
    int32_slice_to_set_value,
    set_value_to_int32_slice,
    int32_map_to_map_value,
    map_value_to_int32_map
);
primitive_conversions!(
    i64,
    "int64",
    int64_slice_to_list_value,
    list_value_to_int64_slice,
    int64_slice_to_set_value,
    set_value_to_int64_slice,
    int64_map_to_map_value,
    map_value_to_int64_map
);
primitive_conversions!(
    f32,
    "float32",
    float32_slice_to_list_value,
    list_value_to_float32_slice,
    float32_slice_to_set_value,
    set_value_to_float32_slice,
    float32_map_to_map_value,
    map_value_to_float32_map
);
primitive_conversions!(
    f64,
    "float64",
    float64_slice_to_list_value,
    list_value_to_float64_slice,
    float64_slice_to_set_value,
    set_value_to_float64_slice,
    float64_map_to_map_value,
    map_value_to_float64_map
);
