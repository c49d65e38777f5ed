//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use num_bigint::BigInt;

use linrec_core::constants::DEFAULT_INDEX;
use linrec_core::LinRecError;
use linrec_core::Preset;

/// linrec: evaluate the N-th term of a linear recurrence in O(k³·log N).
///
/// The recurrence is a(n) = c[0]*a(n-1) + ... + c[k-1]*a(n-k) with seeds
/// a(1..=k). Terms are numbered from 1.
#[derive(Parser, Debug)]
#[command(name = "linrec", version, about)]
pub struct AppConfig {
    /// Term index to compute.
    #[arg(short = 'n', long, default_value_t = DEFAULT_INDEX, env = "LINREC_INDEX")]
    pub index: u64,

    /// Named recurrence, used when --coefficients/--seeds are absent:
    /// fibonacci, lucas, pell, tribonacci, jacobsthal, or padovan.
    #[arg(short, long, default_value = "fibonacci")]
    pub preset: String,

    /// Comma-separated coefficients; the first multiplies a(n-1).
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        requires = "seeds"
    )]
    pub coefficients: Vec<BigInt>,

    /// Comma-separated seeds a(1), ..., a(k).
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        requires = "coefficients"
    )]
    pub seeds: Vec<BigInt>,

    /// Recurrence order; defaults to the number of coefficients.
    #[arg(short = 'k', long)]
    pub order: Option<usize>,

    /// Reduce all arithmetic modulo M (M >= 2).
    #[arg(short, long, env = "LINREC_MODULUS")]
    pub modulus: Option<BigInt>,

    /// List every term a(1..=N) instead of only a(N).
    #[arg(short, long)]
    pub sequence: bool,

    /// Verbose output (full values, debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// A recurrence resolved from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub order: usize,
    pub coefficients: Vec<BigInt>,
    pub seeds: Vec<BigInt>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the recurrence to evaluate: explicit coefficients and seeds
    /// win over the preset.
    pub fn definition(&self) -> Result<Definition, LinRecError> {
        let (name, coefficients, seeds) = if self.coefficients.is_empty() {
            let preset: Preset = self.preset.parse()?;
            let to_big = |values: &[i64]| -> Vec<BigInt> {
                values.iter().map(|&v| BigInt::from(v)).collect()
            };
            (
                preset.name().to_string(),
                to_big(preset.coefficients()),
                to_big(preset.seeds()),
            )
        } else {
            (
                "custom".to_string(),
                self.coefficients.clone(),
                self.seeds.clone(),
            )
        };

        Ok(Definition {
            name,
            order: self.order.unwrap_or(coefficients.len()),
            coefficients,
            seeds,
        })
    }
}
