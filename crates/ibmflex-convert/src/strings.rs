use std::collections::BTreeMap;

use ibmflex_types::{Date, DateTime, Diagnostics, ListValue, MapValue, SetValue, StringValue, Uuid};

use crate::codec::{encode_bytes, StringCodec};
use crate::primitives::{list_value_to_slice, map_value_to_map, set_value_to_slice};

fn decode_text<T: StringCodec>(text: &str, diags: &mut Diagnostics) -> Option<T> {
    match T::decode(text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(summary = T::DECODE_SUMMARY, error = %err, "string conversion failed");
            diags.add_error(T::DECODE_SUMMARY, err.to_string());
            None
        }
    }
}

fn decode_all<T: StringCodec>(texts: Vec<String>) -> Result<Vec<T>, Diagnostics> {
    let mut diags = Diagnostics::new();
    let decoded: Vec<T> = texts
        .iter()
        .filter_map(|text| decode_text(text, &mut diags))
        .collect();
    if diags.has_error() {
        return Err(diags);
    }
    Ok(decoded)
}

/// Encodes an optional domain value; `None` gives a null string.
pub fn codec_to_string_value<T: StringCodec>(value: Option<&T>) -> StringValue {
    StringValue::from_option(value.map(StringCodec::encode))
}

/// Decodes a string value; null or unknown gives `None`.
pub fn string_value_to_codec<T: StringCodec>(
    value: &StringValue,
) -> Result<Option<T>, Diagnostics> {
    let Some(text) = value.as_known() else {
        return Ok(None);
    };
    let mut diags = Diagnostics::new();
    match decode_text(text, &mut diags) {
        Some(decoded) => Ok(Some(decoded)),
        None => Err(diags),
    }
}

/// Encodes each element into a list of strings.
pub fn codec_slice_to_list_value<T: StringCodec>(values: Option<&[T]>) -> ListValue<StringValue> {
    match values {
        Some(items) => items
            .iter()
            .map(|item| StringValue::known(item.encode()))
            .collect(),
        None => ListValue::null(),
    }
}

/// Decodes every string of the list; all failures are reported together.
pub fn list_value_to_codec_slice<T: StringCodec>(
    list: &ListValue<StringValue>,
) -> Result<Option<Vec<T>>, Diagnostics> {
    match list_value_to_slice(list)? {
        Some(texts) => decode_all(texts).map(Some),
        None => Ok(None),
    }
}

/// Encodes each element into a set of strings.
pub fn codec_slice_to_set_value<T: StringCodec>(values: Option<&[T]>) -> SetValue<StringValue> {
    match values {
        Some(items) => items
            .iter()
            .map(|item| StringValue::known(item.encode()))
            .collect(),
        None => SetValue::null(),
    }
}

/// Decodes every string of the set.
pub fn set_value_to_codec_slice<T: StringCodec>(
    set: &SetValue<StringValue>,
) -> Result<Option<Vec<T>>, Diagnostics> {
    match set_value_to_slice(set)? {
        Some(texts) => decode_all(texts).map(Some),
        None => Ok(None),
    }
}

/// Encodes each map entry into a string.
pub fn codec_map_to_map_value<T: StringCodec>(
    values: Option<&BTreeMap<String, T>>,
) -> MapValue<StringValue> {
    match values {
        Some(items) => items
            .iter()
            .map(|(k, v)| (k.clone(), StringValue::known(v.encode())))
            .collect(),
        None => MapValue::null(),
    }
}

/// Decodes every entry of the map.
pub fn map_value_to_codec_map<T: StringCodec>(
    map: &MapValue<StringValue>,
) -> Result<Option<BTreeMap<String, T>>, Diagnostics> {
    let Some(texts) = map_value_to_map(map)? else {
        return Ok(None);
    };
    let mut diags = Diagnostics::new();
    let mut decoded = BTreeMap::new();
    for (key, text) in texts {
        if let Some(value) = decode_text(&text, &mut diags) {
            decoded.insert(key, value);
        }
    }
    if diags.has_error() {
        return Err(diags);
    }
    Ok(Some(decoded))
}

/// Renders a date as a string value.
pub fn date_to_string_value(date: Option<&Date>) -> StringValue {
    codec_to_string_value(date)
}

/// Parses a string value as a date.
pub fn string_value_to_date(value: &StringValue) -> Result<Option<Date>, Diagnostics> {
    string_value_to_codec(value)
}

/// Renders a date-time as a string value.
pub fn date_time_to_string_value(date_time: Option<&DateTime>) -> StringValue {
    codec_to_string_value(date_time)
}

/// Parses a string value as a date-time.
pub fn string_value_to_date_time(value: &StringValue) -> Result<Option<DateTime>, Diagnostics> {
    string_value_to_codec(value)
}

/// Renders a UUID as a string value.
pub fn uuid_to_string_value(uuid: Option<&Uuid>) -> StringValue {
    codec_to_string_value(uuid)
}

/// Reads a string value as a UUID. Never reports diagnostics.
pub fn string_value_to_uuid(value: &StringValue) -> Result<Option<Uuid>, Diagnostics> {
    string_value_to_codec(value)
}

/// Encodes bytes as a base64 string value.
pub fn byte_array_to_string_value(bytes: Option<&[u8]>) -> StringValue {
    StringValue::from_option(bytes.map(encode_bytes))
}

/// Decodes a base64 string value.
pub fn string_value_to_byte_array(value: &StringValue) -> Result<Option<Vec<u8>>, Diagnostics> {
    string_value_to_codec(value)
}

macro_rules! codec_collections {
    (
        $host:ty, $label:literal,
        $slice_to_list:ident, $list_to_slice:ident,
        $slice_to_set:ident, $set_to_slice:ident,
        $map_to_value:ident, $value_to_map:ident
    ) => {
        #[doc = concat!("Renders a ", $label, " slice as a list of strings.")]
        pub fn $slice_to_list(values: Option<&[$host]>) -> ListValue<StringValue> {
            codec_slice_to_list_value(values)
        }

        #[doc = concat!("Reads a list of strings as ", $label, " values.")]
        pub fn $list_to_slice(
            list: &ListValue<StringValue>,
        ) -> Result<Option<Vec<$host>>, Diagnostics> {
            list_value_to_codec_slice(list)
        }

        #[doc = concat!("Renders a ", $label, " slice as a set of strings.")]
        pub fn $slice_to_set(values: Option<&[$host]>) -> SetValue<StringValue> {
            codec_slice_to_set_value(values)
        }

        #[doc = concat!("Reads a set of strings as ", $label, " values.")]
        pub fn $set_to_slice(
            set: &SetValue<StringValue>,
        ) -> Result<Option<Vec<$host>>, Diagnostics> {
            set_value_to_codec_slice(set)
        }

        #[doc = concat!("Renders a ", $label, " map as a map of strings.")]
        pub fn $map_to_value(values: Option<&BTreeMap<String, $host>>) -> MapValue<StringValue> {
            codec_map_to_map_value(values)
        }

        #[doc = concat!("Reads a map of strings as ", $label, " values.")]
        pub fn $value_to_map(
            map: &MapValue<StringValue>,
        ) -> Result<Option<BTreeMap<String, $host>>, Diagnostics> {
            map_value_to_codec_map(map)
        }
    };
}

codec_collections!(
    Date,
    "date",
    date_slice_to_list_value,
    list_value_to_date_slice,
    date_slice_to_set_value,
    set_value_to_date_slice,
    date_map_to_map_value,
    map_value_to_date_map
);
codec_collections!(
    DateTime,
    "date-time",
    date_time_slice_to_list_value,
    list_value_to_date_time_slice,
    date_time_slice_to_set_value,
    set_value_to_date_time_slice,
    date_time_map_to_map_value,
    map_value_to_date_time_map
);
codec_collections!(
    Uuid,
    "UUID",
    uuid_slice_to_list_value,
    list_value_to_uuid_slice,
    uuid_slice_to_set_value,
    set_value_to_uuid_slice,
    uuid_map_to_map_value,
    map_value_to_uuid_map
);
codec_collections!(
    Vec<u8>,
    "byte-array",
    byte_array_slice_to_list_value,
    list_value_to_byte_array_slice,
    byte_array_slice_to_set_value,
    set_value_to_byte_array_slice,
    byte_array_map_to_map_value,
    map_value_to_byte_array_map
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_date_reports_one_error_per_element() {
        let lv = ListValue::new(vec![
            StringValue::known("2024-01-01".to_string()),
            StringValue::known("nope".to_string()),
            StringValue::known("2024-13-01".to_string()),
        ]);
        let diags = list_value_to_date_slice(&lv).unwrap_err();
        assert_eq!(diags.error_count(), 2);
        assert!(diags.iter().all(|d| d.summary() == "error parsing date string"));
    }

    #[test]
    fn unknown_string_is_absent() {
        assert_eq!(string_value_to_date_time(&StringValue::Unknown).unwrap(), None);
    }

    #[test]
    fn byte_array_detail_names_bad_text() {
        let diags =
            string_value_to_byte_array(&StringValue::known("%%%".to_string())).unwrap_err();
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary(), "error decoding byte-array string");
        assert!(diag.detail().contains("'%%%'"));
    }
}
