use fix64_core::Fix64;

fn main() {
    let actual = Fix64::determinism_vector_v1();
    let expected = Fix64::DETERMINISM_VECTOR_V1_EXPECTED;

    let values = actual
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let expected_values = expected
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let status = if actual == expected { "pass" } else { "fail" };

    println!("schema=fix64.determinism_vector.v1");
    println!("status={status}");
    println!("blake3={}", Fix64::determinism_digest());
    println!("raw_i64={values}");
    println!("expected_raw_i64={expected_values}");

    if status != "pass" {
        std::process::exit(2);
    }
}
