//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use linrec_cli::completion::generate_completion;
use linrec_cli::output::write_to_file;
use linrec_cli::presenter::{
    CLIResultPresenter, JsonResultPresenter, ResultPresenter, SequenceEntry, TermReport,
};
use linrec_core::constants::MAX_SEQUENCE_TERMS;

use crate::config::{AppConfig, Definition};

/// Run the application. Errors are reported through the selected
/// presenter before being returned.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(
            config.verbose,
            config.quiet,
            config.details,
        ))
    };

    let outcome = if config.sequence {
        run_sequence(config, presenter.as_ref())
    } else {
        run_term(config, presenter.as_ref())
    };

    if let Err(err) = &outcome {
        presenter.present_error(&format!("{err:#}"));
    }
    outcome
}

fn run_term(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let Definition {
        name,
        order,
        coefficients,
        seeds,
    } = config.definition()?;
    info!(recurrence = %name, order, index = config.index, "evaluating term");

    let start = Instant::now();
    let value = linrec_core::nth_term(
        order,
        &coefficients,
        &seeds,
        config.modulus.as_ref(),
        config.index,
    )?;
    let duration = start.elapsed();
    debug!(?duration, "evaluation finished");

    if let Some(path) = &config.output {
        write_to_file(path, &value)
            .with_context(|| format!("failed to write result to {}", path.display()))?;
    }

    presenter.present_term(&TermReport {
        recurrence: name,
        order,
        coefficients,
        seeds,
        modulus: config.modulus.clone(),
        index: config.index,
        value,
        duration,
    });
    Ok(())
}

fn run_sequence(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    if config.index > MAX_SEQUENCE_TERMS {
        anyhow::bail!(
            "sequence listing is limited to {MAX_SEQUENCE_TERMS} terms, got {}",
            config.index
        );
    }

    let def = config.definition()?;
    info!(recurrence = %def.name, order = def.order, count = config.index, "listing terms");
    let terms = linrec_core::sequence_prefix(
        def.order,
        &def.coefficients,
        &def.seeds,
        config.modulus.as_ref(),
        config.index,
    )?;

    if let Some(path) = &config.output {
        if let Some((_, last)) = terms.last() {
            write_to_file(path, last)
                .with_context(|| format!("failed to write result to {}", path.display()))?;
        }
    }

    let entries: Vec<SequenceEntry> = terms
        .into_iter()
        .map(|(index, value)| SequenceEntry { index, value })
        .collect();
    presenter.present_sequence(&entries);
    Ok(())
}
