use crate::Fix64;

#[test]
fn serializes_as_raw_integer() {
    let encoded = serde_json::to_string(&Fix64::ONE).expect("serialize");
    assert_eq!(encoded, "16777216");

    let encoded = serde_json::to_string(&Fix64::MIN).expect("serialize");
    assert_eq!(encoded, i64::MIN.to_string());
}

#[test]
fn deserializes_from_raw_integer() {
    let decoded: Fix64 = serde_json::from_str("-8388608").expect("deserialize");
    assert_eq!(decoded, -Fix64::HALF);
}

#[test]
fn rejects_float_tokens() {
    assert!(serde_json::from_str::<Fix64>("0.5").is_err());
}

#[test]
fn round_trips_inside_containers() {
    let values = vec![Fix64::MAX, Fix64::ZERO, Fix64::from_f64(-3.25)];
    let encoded = serde_json::to_string(&values).expect("serialize");
    let decoded: Vec<Fix64> = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, values);
}
