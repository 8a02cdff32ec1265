//! `raygen bind` command
//!
//! Runs one module job from explicit paths, bypassing the configured jobs.

use std::path::Path;

use anyhow::Result;

use crate::cli::BindArgs;
use crate::commands::generate::print_result;
use raygen::ops::{run_job, GenerateOptions};
use raygen::util::config::JobConfig;
use raygen::Config;

pub fn execute(args: BindArgs, config_path: Option<&Path>, color: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(config_path, &cwd)?;
    let opts = GenerateOptions::from_config(&config, args.no_fmt);

    let mut job = JobConfig::new(args.module, args.input, args.output);
    job.name = args.name;

    let result = run_job(&job, &opts)?;
    print_result(&job.module, &result, color);

    Ok(())
}
