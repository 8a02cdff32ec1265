//! `raygen modules` command

use anyhow::Result;

use raygen::bindings::MODULES;

pub fn execute() -> Result<()> {
    for module in MODULES {
        println!("{}", module.name);

        if let Some(boilerplate) = module.boilerplate {
            println!("  header: {}", boilerplate.trim_end());
        }
        if !module.ignored_structs.is_empty() {
            println!("  skips structs: {}", module.ignored_structs.join(", "));
        }
        if !module.ignored_aliases.is_empty() {
            println!("  skips aliases: {}", module.ignored_aliases.join(", "));
        }
        if !module.renames.is_empty() {
            let renames: Vec<String> = module
                .renames
                .iter()
                .map(|(old, new)| format!("{} -> {}", old, new))
                .collect();
            println!("  renames: {}", renames.join(", "));
        }
        for (function, ty) in module.variadic_overrides {
            println!("  variadic: {} {}", function, ty);
        }
    }

    Ok(())
}
