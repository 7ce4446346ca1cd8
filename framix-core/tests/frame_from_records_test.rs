use std::sync::Arc;

use framix_core::{records, value, CoreError, Frame, FrameBuilder, LookupError, Value, ValueType};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
#[allow(clippy::approx_constant)]
fn frame_from_records_two_rows() {
    init_logger();

    let records = records![
        {"Name" => "foo", "Stamp" => framix_core::datetime!(2014, 9, 23, 0, 0, 0), "ValF" => 3.14, "ValI" => 42i64},
        {"Name" => "bar", "Stamp" => framix_core::datetime!(2014, 9, 24, 0, 0, 0), "ValF" => 2.0, "ValI" => 43i64},
    ];
    let fx = Frame::from_records(&records, "Name", Some(2)).unwrap();

    assert_eq!(fx.width(), 3);
    assert_eq!(fx.height(), 2);
    assert_eq!(fx.get_column_names(), vec!["Name", "ValF", "ValI"]);
    assert_eq!(
        fx.dtypes(),
        vec![ValueType::String, ValueType::F64, ValueType::I64]
    );

    let vf = fx.column("ValF").unwrap().as_typed::<f64>().unwrap();
    assert_eq!(vf.data(), &[3.14, 2.0]);
    assert!(fx.column("Stamp").is_none());

    for s in fx.columns() {
        assert_eq!(s.len(), 2);
        assert!(Arc::ptr_eq(s.index(), fx.row_index()));
    }
}

#[test]
fn frame_from_records_duplicated_key() {
    init_logger();

    let records = records![
        {"Name" => "a", "ValI" => 1i64, "ValF" => 1.5},
        {"Name" => "a", "ValI" => 2i64, "ValF" => 2.5},
    ];
    let fx = Frame::from_records(&records, "Name", None).unwrap();

    assert_eq!(fx.height(), 1);
    assert_eq!(fx.get("a", "ValI"), Ok(value!(1i64)));
    assert_eq!(fx.get("a", "ValF"), Ok(value!(1.5)));
}

#[test]
fn frame_lookup_safety() {
    let records = records![
        {"Name" => "a", "ValI" => 1i64},
        {"Name" => "b", "ValI" => 2i64},
    ];
    let mut fx = Frame::from_records(&records, "Name", None).unwrap();
    let before = fx.clone();

    let idx = fx.row_index().clone();
    assert_eq!(
        idx.lookup(&value!(1i64)),
        Err(LookupError::WrongKeyType("1 (I64)".to_owned()))
    );
    assert_eq!(
        idx.reverse_lookup(idx.len()),
        Err(LookupError::PositionOutOfRange(2, 2))
    );

    let res = fx.set("missing", "ValI", value!(0i64));
    assert!(matches!(res, Err(e) if e.is_lookup_error()));
    assert_eq!(fx, before);
    assert_eq!(fx.column("ValI").unwrap().len(), fx.height());
}

#[test]
fn frame_builder_options() {
    let records = records![
        {"Name" => "a", "ValI" => 1i64},
        {"Other" => "b", "ValI" => 2i64},
    ];

    let fx = FrameBuilder::new("Name").capacity(8).build(&records).unwrap();
    assert_eq!(fx.height(), 2);
    assert_eq!(fx.get("", "Name"), Ok(Value::String(String::new())));
    assert_eq!(fx.get("", "Other"), Ok(value!("b")));
    assert_eq!(fx.get("a", "Other"), Ok(value!("")));

    let res = FrameBuilder::new("Name").strict_keys(true).build(&records);
    assert!(matches!(res, Err(CoreError::InvalidInput(_))));
}

#[test]
fn frame_iter_rows_rebuild() {
    let records = records![
        {"Name" => "a", "ValI" => 1i64},
        {"Name" => "b", "ValF" => 2.0},
    ];
    let fx = Frame::from_records(&records, "Name", None).unwrap();

    let rows = fx.iter_rows().collect::<Vec<_>>();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].index(), Some(&value!("b")));

    let json = serde_json::to_string(&rows[0]).unwrap();
    // the NaN placeholder has no JSON representation
    assert_eq!(json, r#"{"Name":"a","ValI":1,"ValF":null}"#);

    let rebuilt = Frame::from_records(&rows, "Name", None).unwrap();
    assert_eq!(rebuilt.get("a", "ValI"), fx.get("a", "ValI"));
    assert_eq!(rebuilt.schema(), fx.schema());
}
