use fix64_core::Fix64;

pub fn describe_lines(value: Fix64) -> Vec<String> {
    vec![
        format!("raw={}", value.raw()),
        format!("value={}", value),
        format!("int={}", value.to_int()),
        format!("double={}", value.to_f64()),
        format!("sign={}", value.sign()),
        format!("abs={}", value.abs().raw()),
        format!("fast_abs={}", value.fast_abs().raw()),
    ]
}

pub fn run(literal: &str) -> Result<i32, String> {
    let value = literal
        .parse::<Fix64>()
        .map_err(|e| format!("E_FIX64_LITERAL '{}': {}", literal, e))?;
    tracing::debug!(literal, raw = value.raw(), "convert");
    for line in describe_lines(value) {
        println!("{line}");
    }
    Ok(0)
}

pub fn run_raw(raw: i64) -> Result<i32, String> {
    for line in describe_lines(Fix64::from_raw(raw)) {
        println!("{line}");
    }
    Ok(0)
}
