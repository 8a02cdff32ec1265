//! `raygen convert-name` command

use anyhow::Result;

use crate::cli::ConvertNameArgs;
use raygen::to_snake_case;

pub fn execute(args: ConvertNameArgs) -> Result<()> {
    println!("{}", to_snake_case(&args.identifier));
    Ok(())
}
