use std::path::PathBuf;

use fix64_core::Fix64;
use serde::Serialize;

use crate::cli::report::{sha256_hex, write_text};

const SCHEMA: &str = "fix64.determinism_vector.v1";

pub struct VectorArgs {
    pub json: bool,
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct VectorReport {
    pub schema: &'static str,
    pub status: &'static str,
    pub blake3: String,
    pub raw_i64: Vec<i64>,
    pub expected_raw_i64: Vec<i64>,
}

impl VectorReport {
    pub fn build() -> Self {
        let actual = Fix64::determinism_vector_v1();
        let expected = Fix64::DETERMINISM_VECTOR_V1_EXPECTED;
        Self {
            schema: SCHEMA,
            status: if actual == expected { "pass" } else { "fail" },
            blake3: Fix64::determinism_digest(),
            raw_i64: actual.to_vec(),
            expected_raw_i64: expected.to_vec(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == "pass"
    }

    fn to_lines(&self) -> String {
        let join = |values: &[i64]| {
            values
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "schema={}\nstatus={}\nblake3={}\nraw_i64={}\nexpected_raw_i64={}",
            self.schema,
            self.status,
            self.blake3,
            join(&self.raw_i64),
            join(&self.expected_raw_i64)
        )
    }
}

/// Exit code 2 when the vector does not match.
pub fn run(args: VectorArgs) -> Result<i32, String> {
    let report = VectorReport::build();
    tracing::debug!(status = report.status, digest = %report.blake3, "determinism vector");

    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    if args.json {
        println!("{json}");
    } else {
        println!("{}", report.to_lines());
    }

    if let Some(path) = args.out.as_deref() {
        let content = format!("{json}\n");
        write_text(path, &content)?;
        println!("report_sha256={}", sha256_hex(content.as_bytes()));
        tracing::info!(path = %path.display(), "wrote determinism report");
    }

    if report.passed() {
        Ok(0)
    } else {
        tracing::warn!("determinism vector mismatch");
        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_passes_on_this_platform() {
        let report = VectorReport::build();
        assert!(report.passed());
        assert_eq!(report.raw_i64, report.expected_raw_i64);
        assert_eq!(report.blake3, Fix64::determinism_digest());
    }

    #[test]
    fn report_lines_follow_schema() {
        let lines = VectorReport::build().to_lines();
        let keys: Vec<&str> = lines
            .lines()
            .filter_map(|line| line.split_once('=').map(|(key, _)| key))
            .collect();
        assert_eq!(keys, ["schema", "status", "blake3", "raw_i64", "expected_raw_i64"]);
        assert!(lines.starts_with("schema=fix64.determinism_vector.v1\nstatus=pass\n"));
    }

    #[test]
    fn report_serializes_to_json() {
        let value = serde_json::to_value(VectorReport::build()).expect("json");
        assert_eq!(value["schema"], SCHEMA);
        assert_eq!(value["raw_i64"][7], i64::MIN);
    }
}
