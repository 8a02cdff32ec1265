//! `raygen generate` command

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::GenerateArgs;
use raygen::ops::{generate_all, FormatStatus, GenerateOptions, GenerateResult};
use raygen::util::diagnostic::{emit, Diagnostic};
use raygen::Config;

pub fn execute(args: GenerateArgs, config_path: Option<&Path>, color: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(config_path, &cwd)?;
    let opts = GenerateOptions::from_config(&config, args.no_fmt);

    let reports = generate_all(&config, &args.modules, &opts)?;

    let mut failed = 0;
    for report in &reports {
        match &report.result {
            Ok(result) => print_result(&report.job.module, result, color),
            Err(e) => {
                failed += 1;
                emit(
                    &e.to_diagnostic()
                        .with_context(format!("module {}", report.job.module)),
                    color,
                );
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} modules failed", failed, reports.len());
    }

    Ok(())
}

pub(crate) fn print_result(module: &str, result: &GenerateResult, color: bool) {
    eprintln!(
        "   Generated {} ({}, {} functions)",
        result.output.display(),
        module,
        result.summary.functions
    );

    match &result.format {
        FormatStatus::Formatted => eprintln!("   Formatted {}", result.output.display()),
        FormatStatus::Skipped(_) => {}
        FormatStatus::Failed(reason) => emit(
            &Diagnostic::warning("formatter failed; the file is left unformatted")
                .with_location(&result.output)
                .with_context(reason.clone())
                .with_suggestion("Run the formatter by hand or pass `--no-fmt`"),
            color,
        ),
    }
}
