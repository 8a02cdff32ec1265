//! raygen - V binding generator for raylib
//!
//! This crate turns the JSON API descriptions produced by raylib's
//! `raylib_parser` into V `.c.v` binding modules for raylib, raymath and
//! raygui.

pub mod bindings;
pub mod ops;
pub mod util;

/// Test utilities for raygen unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides sample API descriptions and a scratch directory to write them to.
#[cfg(test)]
pub mod test_support;

pub use bindings::{
    to_snake_case, ApiDescription, BindgenError, BindingEmitter, ModuleConfig, TypeMapper,
};
pub use util::config::Config;
