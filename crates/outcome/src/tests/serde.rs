prelude!();

#[test]
fn test_serialize() {
    let ok: Outcome<u32, String> = success(42);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Success":42}"#);

    let err: Outcome<u32, String> = failure(String::from("bad"));
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Failure":"bad"}"#);
}

#[test]
fn test_deserialize() {
    let ok: Outcome<u32, String> = serde_json::from_str(r#"{"Success":42}"#).unwrap();
    assert_eq!(ok, success(42));

    let err: Outcome<u32, String> = serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
    assert_eq!(err, failure(String::from("bad")));

    let bad = serde_json::from_str::<Outcome<u32, String>>(r#"{"Neither":1}"#);
    assert!(bad.is_err());
}
