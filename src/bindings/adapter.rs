//! Raw and public signatures for bound functions.
//!
//! Every C function gets two V declarations: the raw `fn C.Name(...)` with
//! mapped types, and an `@[inline] pub fn` wrapper. The wrapper takes
//! `string` where C takes `char *`, returns `string` where C returns
//! `char *`, and spreads variadic arguments into the raw call. Building the
//! [`FunctionBinding`] up front keeps the emitter free of those rules.

use super::error::BindgenError;
use super::naming::to_snake_case;
use super::type_map::{is_variadic, TypeMapper, BYTE_POINTER, STRING_TYPE};
use super::types::Function;

/// How a parameter crosses from the wrapper into the raw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamAdapter {
    /// Passed through unchanged
    Direct,
    /// V `string` passed as its `.str` byte pointer
    CString,
    /// Variadic list spread with `...`
    Spread,
}

/// How the raw return value reaches the wrapper's caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAdapter {
    /// No return value
    Void,
    /// Returned unchanged
    Direct,
    /// `char *` converted with `.vstring()`.
    ///
    /// The pointer must reference NUL-terminated memory for the duration of
    /// the call.
    CString,
}

/// A parameter of a bound function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParam {
    /// snake_case name
    pub name: String,
    /// Type in the raw declaration
    pub raw_type: String,
    /// Conversion applied by the wrapper
    pub adapter: ParamAdapter,
}

impl BoundParam {
    /// Type in the public wrapper signature.
    pub fn public_type(&self) -> &str {
        match self.adapter {
            ParamAdapter::CString => STRING_TYPE,
            ParamAdapter::Direct | ParamAdapter::Spread => &self.raw_type,
        }
    }

    /// Argument expression in the raw call.
    pub fn call_arg(&self) -> String {
        match self.adapter {
            ParamAdapter::Direct => self.name.clone(),
            ParamAdapter::CString => format!("{}.str", self.name),
            ParamAdapter::Spread => format!("...{}", self.name),
        }
    }
}

/// A C function with its raw and public V signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBinding {
    /// C symbol name
    pub c_name: String,
    /// snake_case wrapper name
    pub v_name: String,
    /// Parameters in declaration order
    pub params: Vec<BoundParam>,
    /// Return type of the raw declaration (empty for void)
    pub raw_return: String,
    /// Conversion applied to the return value
    pub return_adapter: ReturnAdapter,
    /// Doc comment text
    pub description: String,
}

impl FunctionBinding {
    /// Build the binding for a parsed function.
    pub fn from_function(function: &Function, mapper: &TypeMapper<'_>) -> Result<Self, BindgenError> {
        let v_name = to_snake_case(&function.name);
        let raw_return = mapper.map(&function.return_type, None)?;

        let params = function
            .params
            .iter()
            .map(|param| {
                let raw_type = mapper.map(&param.param_type, Some(v_name.as_str()))?;
                let adapter = if raw_type == BYTE_POINTER {
                    ParamAdapter::CString
                } else if is_variadic(&raw_type) {
                    ParamAdapter::Spread
                } else {
                    ParamAdapter::Direct
                };

                Ok(BoundParam {
                    name: to_snake_case(&param.name),
                    raw_type,
                    adapter,
                })
            })
            .collect::<Result<Vec<_>, BindgenError>>()?;

        let return_adapter = if raw_return.is_empty() {
            ReturnAdapter::Void
        } else if raw_return == BYTE_POINTER {
            ReturnAdapter::CString
        } else {
            ReturnAdapter::Direct
        };

        Ok(FunctionBinding {
            c_name: function.name.clone(),
            v_name,
            params,
            raw_return,
            return_adapter,
            description: function.description.clone(),
        })
    }

    /// Return type of the public wrapper (empty for void).
    pub fn public_return(&self) -> &str {
        match self.return_adapter {
            ReturnAdapter::CString => STRING_TYPE,
            ReturnAdapter::Void | ReturnAdapter::Direct => &self.raw_return,
        }
    }

    /// The raw call expression, e.g. `C.InitWindow(width, height, title.str)`.
    pub fn raw_call(&self) -> String {
        let args: Vec<String> = self.params.iter().map(BoundParam::call_arg).collect();
        format!("C.{}({})", self.c_name, args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::modules::VARIADIC_OVERRIDES;
    use crate::bindings::types::Param;

    fn function(name: &str, ret: &str, params: &[(&str, &str)]) -> Function {
        Function {
            name: name.to_string(),
            return_type: ret.to_string(),
            params: params.iter().map(|(n, t)| Param::new(*n, *t)).collect(),
            description: String::new(),
        }
    }

    fn bind(f: &Function) -> FunctionBinding {
        FunctionBinding::from_function(f, &TypeMapper::new(VARIADIC_OVERRIDES)).unwrap()
    }

    #[test]
    fn test_string_param() {
        let f = function(
            "InitWindow",
            "void",
            &[("width", "int"), ("height", "int"), ("title", "const char *")],
        );
        let b = bind(&f);

        assert_eq!(b.v_name, "init_window");
        assert_eq!(b.params[2].raw_type, "&u8");
        assert_eq!(b.params[2].public_type(), "string");
        assert_eq!(b.raw_call(), "C.InitWindow(width, height, title.str)");
        assert_eq!(b.return_adapter, ReturnAdapter::Void);
        assert_eq!(b.public_return(), "");
    }

    #[test]
    fn test_string_return() {
        let b = bind(&function("GetClipboardText", "const char *", &[]));

        assert_eq!(b.raw_return, "&u8");
        assert_eq!(b.public_return(), "string");
        assert_eq!(b.return_adapter, ReturnAdapter::CString);
        assert_eq!(b.raw_call(), "C.GetClipboardText()");
    }

    #[test]
    fn test_char_pointer_param_of_clipboard_setter() {
        let b = bind(&function("SetClipboardText", "void", &[("text", "char *")]));
        assert_eq!(b.params[0].public_type(), "string");
        assert_eq!(b.params[0].call_arg(), "text.str");
    }

    #[test]
    fn test_variadic_spread() {
        let b = bind(&function(
            "TraceLog",
            "void",
            &[("logLevel", "int"), ("text", "const char *"), ("args", "...")],
        ));

        assert_eq!(b.params[0].name, "log_level");
        assert_eq!(b.params[2].raw_type, "...TraceLogLevel");
        assert_eq!(b.params[2].public_type(), "...TraceLogLevel");
        assert_eq!(b.raw_call(), "C.TraceLog(log_level, text.str, ...args)");
    }

    #[test]
    fn test_unresolved_variadic_fails() {
        let f = function("LogSomething", "void", &[("args", "...")]);
        let err = FunctionBinding::from_function(&f, &TypeMapper::new(&[])).unwrap_err();
        assert!(matches!(err, BindgenError::UnresolvedVariadic { ref function } if function == "log_something"));
    }

    #[test]
    fn test_direct_return() {
        let b = bind(&function("GetScreenWidth", "int", &[]));
        assert_eq!(b.return_adapter, ReturnAdapter::Direct);
        assert_eq!(b.public_return(), "int");
    }
}
