use chrono::{FixedOffset, Month, TimeZone};
use indoc::indoc;
use json_recipes::{file, stream, Category, Item, Order, Rfc822zTime};
use serde_json::json;

const ORDER: &str = indoc! {r#"
    {
      "id": "12345",
      "items": [
        {
          "id": "xyz123",
          "name": "Thing 1"
        },
        {
          "id": "abc789",
          "name": "Thing 2"
        }
      ],
      "date_ordered": "01 May 20 13:01 +0000",
      "customer_id": "3"
    }"#};

fn expected() -> Order {
    let utc = FixedOffset::east_opt(0).unwrap();
    Order {
        id: "12345".to_owned(),
        items: vec![
            Item {
                id: "xyz123".to_owned(),
                name: "Thing 1".to_owned(),
            },
            Item {
                id: "abc789".to_owned(),
                name: "Thing 2".to_owned(),
            },
        ],
        date_ordered: Rfc822zTime::new(utc.with_ymd_and_hms(2020, 5, 1, 13, 1, 0).unwrap()),
        customer_id: "3".to_owned(),
    }
}

#[test]
fn test_decode_order() {
    let order: Order = serde_json::from_str(ORDER).unwrap();
    assert_eq!(order, expected());
    assert_eq!(order.date_ordered.month(), Some(Month::May));
    assert_eq!(order.date_ordered.month().unwrap().name(), "May");
}

#[test]
fn test_order_round_trip() {
    let order: Order = serde_json::from_str(ORDER).unwrap();
    assert_eq!(serde_json::to_string_pretty(&order).unwrap(), ORDER);
    assert_eq!(
        serde_json::to_string(&order).unwrap(),
        r#"{"id":"12345","items":[{"id":"xyz123","name":"Thing 1"},{"id":"abc789","name":"Thing 2"}],"date_ordered":"01 May 20 13:01 +0000","customer_id":"3"}"#,
    );
}

#[test]
fn test_order_field_is_plain_string() {
    let value = serde_json::to_value(expected()).unwrap();
    assert_eq!(value["date_ordered"], json!("01 May 20 13:01 +0000"));
}

#[test]
fn test_order_null_date() {
    let order: Order = serde_json::from_str(
        r#"{"id":"1","items":[],"date_ordered":null,"customer_id":"3"}"#,
    )
    .unwrap();
    assert!(order.date_ordered.is_unset());
    assert_eq!(
        serde_json::to_string(&order).unwrap(),
        r#"{"id":"1","items":[],"date_ordered":null,"customer_id":"3"}"#,
    );
}

#[test]
fn test_order_missing_date() {
    let order: Order = serde_json::from_str(r#"{"id":"1","items":[],"customer_id":"3"}"#).unwrap();
    assert!(order.date_ordered.is_unset());
}

#[test]
fn test_order_wrong_date_type() {
    let err = serde_json::from_str::<Order>(
        r#"{"id":"1","items":[],"date_ordered":20200501,"customer_id":"3"}"#,
    )
    .unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().starts_with("invalid type: number `20200501`"));
}

#[test]
fn test_order_wrong_date_layout() {
    let err = serde_json::from_str::<Order>(indoc! {r#"
        {
          "id": "1",
          "items": [],
          "date_ordered": "2020-05-01T13:01:00Z",
          "customer_id": "3"
        }"#})
    .unwrap_err();
    assert!(err.is_data());
    assert_eq!(err.line(), 4);
    assert!(err.to_string().contains("2020-05-01T13:01:00Z"));
}

#[test]
fn test_order_through_crate_error() {
    let err: json_recipes::Error = serde_json::from_str::<Order>("{\"id\":")
        .unwrap_err()
        .into();
    assert!(err.is_eof());
}

#[test]
fn test_order_date_errors_keep_category() {
    let cases = [
        ("\"2020-05-01T13:01:00Z\"", Category::FormatMismatch),
        ("\"01 may 20 13:01 +0000\"", Category::FormatMismatch),
        ("123", Category::TypeMismatch),
        ("true", Category::TypeMismatch),
        ("[\"01 May 20 13:01 +0000\"]", Category::TypeMismatch),
        ("{}", Category::TypeMismatch),
    ];
    for (date, category) in cases {
        let data = format!(
            r#"{{"id":"1","items":[],"date_ordered":{},"customer_id":"3"}}"#,
            date
        );

        let err = file::from_reader::<_, Order>(data.as_bytes()).unwrap_err();
        assert_eq!(err.classify(), category, "{}", date);

        let mut orders = stream::Decoder::<_, Order>::new(data.as_bytes());
        let err = orders.next().unwrap().unwrap_err();
        assert_eq!(err.classify(), category, "{}", date);
    }
}

#[test]
fn test_order_other_data_errors_stay_data() {
    let data = r#"{"id":1,"items":[],"date_ordered":null,"customer_id":"3"}"#;
    let err = file::from_reader::<_, Order>(data.as_bytes()).unwrap_err();
    assert_eq!(err.classify(), Category::Data);
}
