//! C type descriptor to V type mapping.
//!
//! Descriptors come straight from the parser JSON (`const char *`,
//! `float[4][4]`, `unsigned int`, `...`). Mapping order matters:
//!
//! 1. variadic marker, resolved through the module's override table
//! 2. `void *` / `const void *`, which become `voidptr`
//! 3. array dimensions are captured and stripped
//! 4. pointer markers are counted, `const` is dropped
//! 5. the base type is substituted through [`BASE_TYPES`]
//! 6. `&` per pointer, then `[N]` per dimension in written order

use super::error::BindgenError;
use super::modules::ModuleConfig;

/// V's untyped pointer.
pub const VOIDPTR: &str = "voidptr";

/// Descriptor for C variadic arguments.
pub const VARIADIC_MARKER: &str = "...";

/// What `char *` maps to. Public wrappers expose it as [`STRING_TYPE`].
pub const BYTE_POINTER: &str = "&u8";

/// V's string type.
pub const STRING_TYPE: &str = "string";

/// C base types that do not pass through unchanged.
pub const BASE_TYPES: &[(&str, &str)] = &[
    ("void", ""),
    ("char", "u8"),
    ("float", "f32"),
    ("double", "f64"),
    ("unsigned int", "u32"),
    ("unsigned short", "u16"),
    ("unsigned char", "u8"),
    ("long", "i64"),
    ("size_t", "C.size_t"),
    // TraceLogCallback in raylib.h
    ("va_list", "C.va_list"),
    // raudio internals referenced from raylib.h
    ("rAudioBuffer", "AudioBuffer"),
    ("rAudioProcessor", "AudioProcessor"),
    ("ma_context", "C.ma_context"),
    ("ma_device", "C.ma_device"),
    ("ma_mutex", "C.ma_mutex"),
    // raymath.h
    ("float3", "Float3"),
    ("float16", "Float16"),
];

/// Look up the V spelling of a C base type, passing unknown names through.
pub fn map_base_type(base: &str) -> &str {
    BASE_TYPES
        .iter()
        .find(|(c, _)| *c == base)
        .map_or(base, |(_, v)| *v)
}

/// Whether a mapped V type is a variadic argument list.
pub fn is_variadic(mapped: &str) -> bool {
    mapped.starts_with(VARIADIC_MARKER)
}

/// A C type descriptor split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CTypeDescriptor {
    /// Base identifier, e.g. `unsigned int`
    pub base: String,
    /// Whether a leading `const` was present
    pub is_const: bool,
    /// Number of `*` markers
    pub pointers: usize,
    /// Array dimensions in written order
    pub dimensions: Vec<String>,
}

impl CTypeDescriptor {
    /// Parse a descriptor such as `const char *` or `float[4][4]`.
    pub fn parse(descriptor: &str) -> Result<Self, BindgenError> {
        let malformed = |reason: String| BindgenError::MalformedType {
            descriptor: descriptor.to_string(),
            reason,
        };

        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Err(malformed("empty type".to_string()));
        }

        let (head, dimensions) = match trimmed.find('[') {
            Some(idx) => (&trimmed[..idx], parse_dimensions(&trimmed[idx..]).map_err(malformed)?),
            None => (trimmed, Vec::new()),
        };

        if head.contains(']') {
            return Err(malformed("unbalanced `]`".to_string()));
        }

        let (base_part, pointer_part) = match head.find('*') {
            Some(idx) => (&head[..idx], &head[idx..]),
            None => (head, ""),
        };

        if let Some(c) = pointer_part.chars().find(|c| *c != '*' && !c.is_whitespace()) {
            return Err(malformed(format!("unexpected `{}` after pointer markers", c)));
        }
        let pointers = pointer_part.matches('*').count();

        let base_part = base_part.trim();
        let (is_const, base) = match base_part.strip_prefix("const") {
            Some(rest) if rest.starts_with(char::is_whitespace) || rest.is_empty() => {
                (true, rest.trim())
            }
            _ => (false, base_part),
        };

        if base.is_empty() {
            return Err(malformed("missing base type".to_string()));
        }

        let words: Vec<&str> = base.split_whitespace().collect();
        if let Some(bad) = words.iter().find(|w| !is_identifier(w)) {
            return Err(malformed(format!("`{}` is not an identifier", bad)));
        }

        Ok(CTypeDescriptor {
            base: words.join(" "),
            is_const,
            pointers,
            dimensions,
        })
    }

    /// Whether this is `void *` or `const void *`.
    pub fn is_void_pointer(&self) -> bool {
        self.base == "void" && self.pointers == 1 && self.dimensions.is_empty()
    }
}

fn is_identifier(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a run of `[N]` suffixes.
fn parse_dimensions(mut rest: &str) -> Result<Vec<String>, String> {
    let mut dimensions = Vec::new();

    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return Err(format!("unexpected `{}` after array dimensions", rest));
        };
        let Some(close) = inner.find(']') else {
            return Err("unclosed `[`".to_string());
        };

        let size = inner[..close].trim();
        if size.is_empty() {
            return Err("empty array dimension".to_string());
        }
        if !is_identifier(size) {
            return Err(format!("invalid array dimension `{}`", size));
        }

        dimensions.push(size.to_string());
        rest = inner[close + 1..].trim_start();
    }

    Ok(dimensions)
}

/// Maps C type descriptors to V types for one module.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    variadic_overrides: &'a [(&'a str, &'a str)],
}

impl<'a> TypeMapper<'a> {
    /// Create a mapper with the given variadic overrides
    /// (converted function name to replacement V type).
    pub fn new(variadic_overrides: &'a [(&'a str, &'a str)]) -> Self {
        TypeMapper { variadic_overrides }
    }

    /// Create a mapper for a module configuration.
    pub fn for_module(config: &ModuleConfig) -> TypeMapper<'static> {
        TypeMapper::new(config.variadic_overrides)
    }

    /// Map a C type descriptor to a V type.
    ///
    /// `context` is the snake_case name of the function whose parameter is
    /// being mapped; it is only consulted for variadic arguments.
    pub fn map(&self, descriptor: &str, context: Option<&str>) -> Result<String, BindgenError> {
        if descriptor.trim() == VARIADIC_MARKER {
            return self.resolve_variadic(context);
        }

        let parsed = CTypeDescriptor::parse(descriptor)?;

        if parsed.is_void_pointer() {
            return Ok(VOIDPTR.to_string());
        }

        let mut mapped = "&".repeat(parsed.pointers);
        mapped.push_str(map_base_type(&parsed.base));

        if !parsed.dimensions.is_empty() {
            let prefix: String = parsed
                .dimensions
                .iter()
                .map(|size| format!("[{}]", size))
                .collect();
            mapped.insert_str(0, &prefix);
        }

        Ok(mapped)
    }

    fn resolve_variadic(&self, context: Option<&str>) -> Result<String, BindgenError> {
        let function = context.unwrap_or_default();
        self.variadic_overrides
            .iter()
            .find(|(name, _)| *name == function)
            .map(|(_, ty)| (*ty).to_string())
            .ok_or_else(|| BindgenError::UnresolvedVariadic {
                function: function.to_string(),
            })
    }
}
