//! Binding generation error types and diagnostics.

use std::path::PathBuf;

use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error while generating bindings for one module.
#[derive(Debug, Error)]
pub enum BindgenError {
    #[error("API description not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed API description {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed type descriptor `{descriptor}`: {reason}")]
    MalformedType { descriptor: String, reason: String },

    #[error("no variadic type override for `{function}`")]
    UnresolvedVariadic { function: String },

    #[error("unknown module `{name}`")]
    UnknownModule { name: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BindgenError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BindgenError::MissingInput { path } => {
                Diagnostic::error(format!("API description `{}` does not exist", path.display()))
                    .with_location(path)
                    .with_suggestion(
                        "Generate it with raylib's parser: `raylib_parser -i raylib.h -o raylib_api.json -f JSON -d RLAPI`",
                    )
                    .with_suggestion("Point the job at the right file in Raygen.toml")
            }

            BindgenError::MalformedInput { path, source } => {
                Diagnostic::error(format!("could not read API description `{}`", path.display()))
                    .with_location(path)
                    .with_context(source.to_string())
                    .with_suggestion("Regenerate the file with `raylib_parser -f JSON`")
            }

            BindgenError::MalformedType { descriptor, reason } => {
                Diagnostic::error(format!("cannot map C type `{}`", descriptor))
                    .with_context(reason.clone())
            }

            BindgenError::UnresolvedVariadic { function } => Diagnostic::error(format!(
                "function `{}` takes variadic arguments with no configured type",
                function
            ))
            .with_suggestion(format!(
                "Add `{}` to the module's variadic overrides",
                function
            )),

            BindgenError::UnknownModule { name } => {
                Diagnostic::error(format!("no module configuration named `{}`", name))
                    .with_suggestion("Run `raygen modules` to list the built-in modules")
            }

            BindgenError::Io { path, source } => {
                Diagnostic::error(format!("I/O error on `{}`", path.display()))
                    .with_location(path)
                    .with_context(source.to_string())
            }
        }
    }
}
