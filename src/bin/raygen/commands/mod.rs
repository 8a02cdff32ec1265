//! Command implementations

pub mod bind;
pub mod completions;
pub mod convert_name;
pub mod generate;
pub mod map_type;
pub mod modules;
