use std::collections::BTreeMap;

use ibmflex_convert::*;
use ibmflex_types::{Date, DateTime, StringValue, Uuid};

fn sorted<T: PartialOrd>(mut values: Vec<T>) -> Vec<T> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

fn keyed<T: Clone>(values: &[T]) -> BTreeMap<String, T> {
    values
        .iter()
        .enumerate()
        .map(|(idx, v)| (format!("k{}", idx), v.clone()))
        .collect()
}

macro_rules! shape_round_trips {
    (
        $test:ident, $host:ty, [$($sample:expr),+ $(,)?],
        $slice_to_list:ident, $list_to_slice:ident,
        $slice_to_set:ident, $set_to_slice:ident,
        $map_to_value:ident, $value_to_map:ident
    ) => {
        #[test]
        fn $test() {
            let values: Vec<$host> = vec![$($sample),+];

            let list = $slice_to_list(Some(values.as_slice()));
            assert_eq!($list_to_slice(&list).unwrap(), Some(values.clone()));
            let empty_list = $slice_to_list(Some(&[][..]));
            assert!(!empty_list.is_null());
            assert_eq!($list_to_slice(&empty_list).unwrap(), Some(vec![]));
            assert_eq!($list_to_slice(&$slice_to_list(None)).unwrap(), None);

            let set = $slice_to_set(Some(values.as_slice()));
            assert_eq!(set.len(), values.len());
            let back = $set_to_slice(&set).unwrap().unwrap();
            assert_eq!(sorted(back), sorted(values.clone()));
            let empty_set = $slice_to_set(Some(&[][..]));
            assert!(!empty_set.is_null());
            assert_eq!($set_to_slice(&empty_set).unwrap(), Some(vec![]));
            assert_eq!($set_to_slice(&$slice_to_set(None)).unwrap(), None);

            let map = keyed(&values);
            let map_value = $map_to_value(Some(&map));
            assert_eq!($value_to_map(&map_value).unwrap(), Some(map));
            let empty_map = $map_to_value(Some(&BTreeMap::new()));
            assert!(!empty_map.is_null());
            assert_eq!($value_to_map(&empty_map).unwrap(), Some(BTreeMap::new()));
            assert_eq!($value_to_map(&$map_to_value(None)).unwrap(), None);
        }
    };
}

shape_round_trips!(
    string_shapes_round_trip,
    String,
    ["".to_string(), "vpc".to_string(), "ünïcode \"quoted\"".to_string()],
    string_slice_to_list_value,
    list_value_to_string_slice,
    string_slice_to_set_value,
    set_value_to_string_slice,
    string_map_to_map_value,
    map_value_to_string_map
);
shape_round_trips!(
    bool_shapes_round_trip,
    bool,
    [true, false],
    bool_slice_to_list_value,
    list_value_to_bool_slice,
    bool_slice_to_set_value,
    set_value_to_bool_slice,
    bool_map_to_map_value,
    map_value_to_bool_map
);
shape_round_trips!(
    int32_shapes_round_trip,
    i32,
    [0, -1, i32::MAX, i32::MIN],
    int32_slice_to_list_value,
    list_value_to_int32_slice,
    int32_slice_to_set_value,
    set_value_to_int32_slice,
    int32_map_to_map_value,
    map_value_to_int32_map
);
shape_round_trips!(
    int64_shapes_round_trip,
    i64,
    [0, 42, i64::MAX, i64::MIN],
    int64_slice_to_list_value,
    list_value_to_int64_slice,
    int64_slice_to_set_value,
    set_value_to_int64_slice,
    int64_map_to_map_value,
    map_value_to_int64_map
);
shape_round_trips!(
    float32_shapes_round_trip,
    f32,
    [0.1, -2.5, 3.0, f32::MAX],
    float32_slice_to_list_value,
    list_value_to_float32_slice,
    float32_slice_to_set_value,
    set_value_to_float32_slice,
    float32_map_to_map_value,
    map_value_to_float32_map
);
shape_round_trips!(
    float64_shapes_round_trip,
    f64,
    [44.123456789, 74.9999999, -0.5, 1e300],
    float64_slice_to_list_value,
    list_value_to_float64_slice,
    float64_slice_to_set_value,
    set_value_to_float64_slice,
    float64_map_to_map_value,
    map_value_to_float64_map
);
shape_round_trips!(
    date_shapes_round_trip,
    Date,
    [
        Date::parse("2024-02-29").unwrap(),
        Date::parse("1970-01-01").unwrap(),
        Date::parse("9999-12-31").unwrap(),
    ],
    date_slice_to_list_value,
    list_value_to_date_slice,
    date_slice_to_set_value,
    set_value_to_date_slice,
    date_map_to_map_value,
    map_value_to_date_map
);
shape_round_trips!(
    date_time_shapes_round_trip,
    DateTime,
    [
        DateTime::parse("2025-01-20T12:00:00.198Z").unwrap(),
        DateTime::parse("2024-06-01T08:30:00.500+02:00").unwrap(),
        DateTime::parse("1999-12-31T23:59:59Z").unwrap(),
    ],
    date_time_slice_to_list_value,
    list_value_to_date_time_slice,
    date_time_slice_to_set_value,
    set_value_to_date_time_slice,
    date_time_map_to_map_value,
    map_value_to_date_time_map
);
shape_round_trips!(
    uuid_shapes_round_trip,
    Uuid,
    [
        Uuid::new("9fab83da-98cb-4f18-a7ba-b6f0435c9673"),
        Uuid::new("00000000-0000-0000-0000-000000000000"),
    ],
    uuid_slice_to_list_value,
    list_value_to_uuid_slice,
    uuid_slice_to_set_value,
    set_value_to_uuid_slice,
    uuid_map_to_map_value,
    map_value_to_uuid_map
);
shape_round_trips!(
    byte_array_shapes_round_trip,
    Vec<u8>,
    [(0u8..=255).collect(), vec![], vec![0xff, 0xfe, 0x00], b"text".to_vec()],
    byte_array_slice_to_list_value,
    list_value_to_byte_array_slice,
    byte_array_slice_to_set_value,
    set_value_to_byte_array_slice,
    byte_array_map_to_map_value,
    map_value_to_byte_array_map
);

#[test]
fn arbitrary_bytes_round_trip_as_scalars() {
    let all: Vec<u8> = (0u8..=255).collect();
    let value = byte_array_to_string_value(Some(all.as_slice()));
    assert_eq!(string_value_to_byte_array(&value).unwrap(), Some(all));

    let empty = byte_array_to_string_value(Some(&[][..]));
    assert_eq!(empty.value_str(), "");
    assert_eq!(string_value_to_byte_array(&empty).unwrap(), Some(vec![]));
    assert_eq!(string_value_to_byte_array(&StringValue::Null).unwrap(), None);
}

#[test]
fn codec_scalars_round_trip() {
    let date = Date::parse("2025-01-01").unwrap();
    assert_eq!(
        string_value_to_date(&date_to_string_value(Some(&date))).unwrap(),
        Some(date)
    );
    assert!(date_to_string_value(None).is_null());

    let dt = DateTime::parse("2024-06-01T08:30:00.500+02:00").unwrap();
    let text = date_time_to_string_value(Some(&dt));
    assert_eq!(text.value_str(), "2024-06-01T08:30:00.500+02:00");
    assert_eq!(string_value_to_date_time(&text).unwrap(), Some(dt));

    let id = Uuid::new("9fab83da-98cb-4f18-a7ba-b6f0435c9673");
    assert_eq!(
        string_value_to_uuid(&uuid_to_string_value(Some(&id))).unwrap(),
        Some(id)
    );
    assert_eq!(string_value_to_uuid(&StringValue::Unknown).unwrap(), None);
}

#[test]
fn any_shapes_keep_null_and_empty_apart() {
    assert!(any_slice_to_list_value(None).is_null());
    let empty = any_slice_to_list_value(Some(&[][..]));
    assert_eq!(list_value_to_any_slice(&empty).unwrap(), Some(vec![]));

    let values = vec![AnyValue::from(2.0), AnyValue::Null, AnyValue::from("x")];
    let list = any_slice_to_list_value(Some(values.as_slice()));
    assert_eq!(
        list_value_to_any_slice(&list).unwrap(),
        Some(vec![
            AnyValue::String("2".into()),
            AnyValue::String("".into()),
            AnyValue::String("x".into()),
        ])
    );

    assert!(any_object_to_map_value(None).is_null());
    assert_eq!(
        map_value_to_any_object(&any_object_to_map_value(Some(&AnyObject::new()))),
        Some(AnyObject::new())
    );
    assert!(any_object_slice_to_list_value(None).is_null());
    assert_eq!(
        list_value_to_any_object_slice(&any_object_slice_to_list_value(Some(&[][..]))),
        Some(vec![])
    );
}
