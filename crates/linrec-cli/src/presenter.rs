//! Result presenters for human-readable and JSON output.

use std::fmt::Write as _;
use std::time::Duration;

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::output::{digit_count, format_duration, format_number, format_result};

/// Everything needed to present one evaluated term.
#[derive(Debug, Clone, Serialize)]
pub struct TermReport {
    /// Preset name, or `custom` for user-supplied coefficients.
    pub recurrence: String,
    pub order: usize,
    #[serde(serialize_with = "serialize_display_seq")]
    pub coefficients: Vec<BigInt>,
    #[serde(serialize_with = "serialize_display_seq")]
    pub seeds: Vec<BigInt>,
    #[serde(serialize_with = "serialize_display_opt")]
    pub modulus: Option<BigInt>,
    pub index: u64,
    #[serde(serialize_with = "serialize_display")]
    pub value: BigInt,
    #[serde(rename = "duration_us", serialize_with = "serialize_micros")]
    pub duration: Duration,
}

/// One entry of a listed sequence prefix.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceEntry {
    pub index: u64,
    #[serde(serialize_with = "serialize_display")]
    pub value: BigInt,
}

// Big integers are emitted as decimal strings so JSON consumers never
// lose precision.
fn serialize_display<S: Serializer>(value: &BigInt, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

fn serialize_display_opt<S: Serializer>(value: &Option<BigInt>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.collect_str(v),
        None => s.serialize_none(),
    }
}

fn serialize_display_seq<S: Serializer>(values: &[BigInt], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(values.iter().map(ToString::to_string))
}

fn serialize_micros<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a single evaluated term.
    fn present_term(&self, report: &TermReport);

    /// Present a listed prefix of the sequence.
    fn present_sequence(&self, entries: &[SequenceEntry]);

    /// Present an error.
    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}

/// Human-readable presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Render a term report as it would be printed.
    #[must_use]
    pub fn render_term(&self, report: &TermReport) -> String {
        if self.quiet {
            return report.value.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Recurrence: {} (order {})",
            report.recurrence, report.order
        );
        if let Some(m) = &report.modulus {
            let _ = writeln!(out, "Modulus: {m}");
        }
        let _ = writeln!(out, "N: {}", format_number(report.index));
        let _ = writeln!(out, "Duration: {}", format_duration(report.duration));

        if self.details {
            let join = |values: &[BigInt]| {
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = writeln!(out, "Coefficients: [{}]", join(&report.coefficients));
            let _ = writeln!(out, "Seeds: [{}]", join(&report.seeds));
            let _ = writeln!(out, "Result bits: {}", report.value.bits());
            let _ = writeln!(out, "Result digits: {}", digit_count(&report.value));
        }

        let _ = write!(
            out,
            "a({}) = {}",
            format_number(report.index),
            format_result(&report.value, self.verbose)
        );
        out
    }

    /// Render a sequence listing as it would be printed.
    #[must_use]
    pub fn render_sequence(&self, entries: &[SequenceEntry]) -> String {
        entries
            .iter()
            .map(|e| {
                if self.quiet {
                    e.value.to_string()
                } else {
                    format!("a({}) = {}", e.index, format_result(&e.value, self.verbose))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_term(&self, report: &TermReport) {
        println!("{}", self.render_term(report));
    }

    fn present_sequence(&self, entries: &[SequenceEntry]) {
        if !entries.is_empty() {
            println!("{}", self.render_sequence(entries));
        }
    }
}

/// JSON presenter: one pretty-printed document per result.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    fn print<T: Serialize + ?Sized>(value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize result"),
        }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_term(&self, report: &TermReport) {
        Self::print(report);
    }

    fn present_sequence(&self, entries: &[SequenceEntry]) {
        Self::print(entries);
    }

    fn present_error(&self, error: &str) {
        Self::print(&serde_json::json!({ "error": error }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> TermReport {
        TermReport {
            recurrence: "fibonacci".into(),
            order: 2,
            coefficients: vec![BigInt::from(1), BigInt::from(1)],
            seeds: vec![BigInt::from(1), BigInt::from(1)],
            modulus: None,
            index: 10,
            value: BigInt::from(55),
            duration: Duration::from_micros(12),
        }
    }

    #[test]
    fn quiet_renders_value_only() {
        let presenter = CLIResultPresenter::new(false, true, false);
        assert_eq!(presenter.render_term(&report()), "55");
    }

    #[test]
    fn normal_render() {
        let presenter = CLIResultPresenter::new(false, false, false);
        let s = presenter.render_term(&report());
        assert!(s.contains("Recurrence: fibonacci (order 2)"));
        assert!(s.contains("N: 10"));
        assert!(s.ends_with("a(10) = 55"));
        assert!(!s.contains("Modulus"));
        assert!(!s.contains("Result digits"));
    }

    #[test]
    fn details_render() {
        let presenter = CLIResultPresenter::new(false, false, true);
        let mut r = report();
        r.modulus = Some(BigInt::from(7));
        r.value = BigInt::from(6);
        let s = presenter.render_term(&r);
        assert!(s.contains("Modulus: 7"));
        assert!(s.contains("Coefficients: [1, 1]"));
        assert!(s.contains("Result bits: 3"));
        assert!(s.contains("Result digits: 1"));
    }

    #[test]
    fn sequence_render() {
        let entries: Vec<SequenceEntry> = [1, 1, 2]
            .iter()
            .zip(1u64..)
            .map(|(&v, index)| SequenceEntry {
                index,
                value: BigInt::from(v),
            })
            .collect();
        let normal = CLIResultPresenter::new(false, false, false);
        assert_eq!(
            normal.render_sequence(&entries),
            "a(1) = 1\na(2) = 1\na(3) = 2"
        );
        let quiet = CLIResultPresenter::new(false, true, false);
        assert_eq!(quiet.render_sequence(&entries), "1\n1\n2");
    }

    #[test]
    fn report_serializes_values_as_strings() {
        let mut r = report();
        r.modulus = Some(BigInt::from(1_000_000_007u64));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["value"], "55");
        assert_eq!(json["modulus"], "1000000007");
        assert_eq!(json["coefficients"], serde_json::json!(["1", "1"]));
        assert_eq!(json["duration_us"], 12);
        assert_eq!(json["index"], 10);
    }

    #[test]
    fn report_without_modulus_serializes_null() {
        let json = serde_json::to_value(report()).unwrap();
        assert!(json["modulus"].is_null());
    }
}
