//! `raygen map-type` command

use anyhow::Result;

use crate::cli::MapTypeArgs;
use raygen::{to_snake_case, ModuleConfig, TypeMapper};

pub fn execute(args: MapTypeArgs) -> Result<()> {
    let module = ModuleConfig::lookup(&args.module)?;
    let mapper = TypeMapper::for_module(module);

    // Overrides are keyed by the converted name; accept either form.
    let function = args.function.as_deref().map(to_snake_case);
    let mapped = mapper.map(&args.descriptor, function.as_deref())?;

    if mapped.is_empty() {
        println!("(none)");
    } else {
        println!("{}", mapped);
    }

    Ok(())
}
