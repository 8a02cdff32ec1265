//! V binding generation for raylib API descriptions.
//!
//! This module turns a parsed API description into the text of a `.c.v`
//! module: identifier conversion, C to V type mapping, the string and
//! variadic adaptations for function wrappers, and the emitter that puts
//! them together.

pub mod adapter;
pub mod emitter;
pub mod error;
pub mod modules;
pub mod naming;
pub mod type_map;
pub mod types;

pub use adapter::{BoundParam, FunctionBinding, ParamAdapter, ReturnAdapter};
pub use emitter::{BindingEmitter, EmitSummary, EmittedModule};
pub use error::BindgenError;
pub use modules::{ModuleConfig, MODULES};
pub use naming::to_snake_case;
pub use type_map::{CTypeDescriptor, TypeMapper};
pub use types::{Alias, ApiDescription, Callback, Enum, EnumValue, Field, Function, Param, Struct};
