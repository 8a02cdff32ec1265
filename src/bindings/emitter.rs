//! V binding emitter.
//!
//! Produces the text of one `.c.v` file from an [`ApiDescription`]. Output
//! order is fixed: module header, boilerplate, then structs, aliases,
//! callbacks, enums and functions, each category in input order with a blank
//! line between items.

use tracing::debug;

use super::adapter::{FunctionBinding, ReturnAdapter};
use super::error::BindgenError;
use super::modules::ModuleConfig;
use super::naming::to_snake_case;
use super::type_map::{CTypeDescriptor, TypeMapper};
use super::types::{Alias, ApiDescription, Callback, Enum, Struct};

/// Number of items emitted per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub structs: usize,
    pub aliases: usize,
    pub callbacks: usize,
    pub enums: usize,
    pub functions: usize,
    /// Structs and aliases dropped by the module's ignore sets
    pub skipped: usize,
}

/// Generated module text plus what went into it.
#[derive(Debug, Clone)]
pub struct EmittedModule {
    pub source: String,
    pub summary: EmitSummary,
}

/// Emits V bindings for one module.
#[derive(Debug, Clone, Copy)]
pub struct BindingEmitter<'a> {
    module_name: &'a str,
    config: &'a ModuleConfig,
    mapper: TypeMapper<'static>,
}

impl<'a> BindingEmitter<'a> {
    /// Create an emitter writing `module <module_name>` with the given config.
    pub fn new(module_name: &'a str, config: &'a ModuleConfig) -> Self {
        BindingEmitter {
            module_name,
            config,
            mapper: TypeMapper::for_module(config),
        }
    }

    /// Generate the module source.
    pub fn emit(&self, api: &ApiDescription) -> Result<EmittedModule, BindgenError> {
        let mut summary = EmitSummary::default();
        let mut blocks = Vec::with_capacity(api.item_count());

        for s in &api.structs {
            if self.config.ignores_struct(&s.name) {
                debug!("skipping struct {} (provided by boilerplate)", s.name);
                summary.skipped += 1;
                continue;
            }
            blocks.push(self.emit_struct(s)?);
            summary.structs += 1;
        }

        for alias in &api.aliases {
            if self.config.ignores_alias(&alias.name) {
                debug!("skipping alias {}", alias.name);
                summary.skipped += 1;
                continue;
            }
            blocks.push(self.emit_alias(alias)?);
            summary.aliases += 1;
        }

        for callback in &api.callbacks {
            blocks.push(self.emit_callback(callback)?);
            summary.callbacks += 1;
        }

        for e in &api.enums {
            blocks.push(emit_enum(e));
            summary.enums += 1;
        }

        for function in &api.functions {
            let binding = FunctionBinding::from_function(function, &self.mapper)?;
            blocks.push(emit_function(&binding));
            summary.functions += 1;
        }

        let mut source = format!("module {}\n", self.module_name);
        if let Some(boilerplate) = self.config.boilerplate {
            source.push_str(boilerplate);
            if !boilerplate.ends_with('\n') {
                source.push('\n');
            }
        }
        if !blocks.is_empty() {
            source.push('\n');
            source.push_str(&blocks.join("\n"));
        }

        debug!(
            "module {}: {} structs, {} aliases, {} callbacks, {} enums, {} functions, {} skipped",
            self.module_name,
            summary.structs,
            summary.aliases,
            summary.callbacks,
            summary.enums,
            summary.functions,
            summary.skipped
        );

        Ok(EmittedModule { source, summary })
    }

    fn emit_struct(&self, s: &Struct) -> Result<String, BindgenError> {
        let mut out = String::new();

        out.push_str(&format!("pub type {} = C.{}\n", self.config.rename(&s.name), s.name));
        push_comment(&mut out, "", &s.description);
        out.push_str(&format!("pub struct C.{} {{\n", s.name));
        for field in &s.fields {
            push_comment(&mut out, "\t", &field.description);
            out.push_str(&format!(
                "\t{} {}\n",
                to_snake_case(&field.name),
                self.mapper.map(&field.field_type, None)?
            ));
        }
        out.push_str("}\n");

        Ok(out)
    }

    fn emit_alias(&self, alias: &Alias) -> Result<String, BindgenError> {
        let target = CTypeDescriptor::parse(&alias.underlying_type)?;
        if target.pointers > 0 || !target.dimensions.is_empty() {
            return Err(BindgenError::MalformedType {
                descriptor: alias.underlying_type.clone(),
                reason: format!("alias `{}` must name a plain type", alias.name),
            });
        }

        let mut out = String::new();
        push_comment(&mut out, "", &alias.description);
        out.push_str(&format!(
            "pub type {} = C.{}\n",
            self.config.rename(&alias.name),
            target.base
        ));
        Ok(out)
    }

    fn emit_callback(&self, callback: &Callback) -> Result<String, BindgenError> {
        let context = to_snake_case(&callback.name);
        let params = callback
            .params
            .iter()
            .map(|p| {
                let ty = self.mapper.map(&p.param_type, Some(context.as_str()))?;
                Ok(format!("{} {}", to_snake_case(&p.name), ty))
            })
            .collect::<Result<Vec<_>, BindgenError>>()?;
        let ret = self.mapper.map(&callback.return_type, None)?;

        let mut out = String::new();
        push_comment(&mut out, "", &callback.description);
        out.push_str(&signature_line(
            &format!("pub type {} = fn ({})", callback.name, params.join(", ")),
            &ret,
        ));
        out.push('\n');

        Ok(out)
    }
}

fn emit_enum(e: &Enum) -> String {
    let mut out = String::new();
    push_comment(&mut out, "", &e.description);
    out.push_str(&format!("pub enum {} {{\n", e.name));
    for value in &e.values {
        out.push_str(&format!("\t{} = {}", value.name.to_lowercase(), value.value));
        if !value.description.is_empty() {
            out.push_str(&format!(" // {}", value.description));
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn emit_function(binding: &FunctionBinding) -> String {
    let mut out = String::new();

    let raw_params: Vec<&str> = binding.params.iter().map(|p| p.raw_type.as_str()).collect();
    out.push_str(&signature_line(
        &format!("fn C.{}({})", binding.c_name, raw_params.join(", ")),
        &binding.raw_return,
    ));
    out.push('\n');

    push_comment(&mut out, "", &binding.description);

    let public_params: Vec<String> = binding
        .params
        .iter()
        .map(|p| format!("{} {}", p.name, p.public_type()))
        .collect();
    out.push_str("@[inline]\n");
    out.push_str(&signature_line(
        &format!("pub fn {}({})", binding.v_name, public_params.join(", ")),
        binding.public_return(),
    ));
    out.push_str(" {\n");

    let call = binding.raw_call();
    match binding.return_adapter {
        ReturnAdapter::Void => out.push_str(&format!("\t{}\n", call)),
        ReturnAdapter::Direct => out.push_str(&format!("\treturn {}\n", call)),
        ReturnAdapter::CString => {
            out.push_str("\tunsafe {\n");
            out.push_str(&format!("\t\treturn {}.vstring()\n", call));
            out.push_str("\t}\n");
        }
    }
    out.push_str("}\n");

    out
}

/// `head` followed by ` <ret>` unless the return type is empty.
fn signature_line(head: &str, ret: &str) -> String {
    if ret.is_empty() {
        head.to_string()
    } else {
        format!("{} {}", head, ret)
    }
}

fn push_comment(out: &mut String, indent: &str, text: &str) {
    if !text.is_empty() {
        out.push_str(&format!("{}// {}\n", indent, text));
    }
}
