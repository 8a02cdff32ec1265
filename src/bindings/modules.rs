//! Built-in module configurations.
//!
//! raymath and raygui can be compiled in "standalone" mode, in which they
//! redeclare the raylib types they use. Those redeclarations show up in their
//! API descriptions, so each module lists the items to skip together with
//! the import that brings the real types in from raylib. Adding a module only
//! takes a new entry in [`MODULES`].

use super::error::BindgenError;

/// Per-module generation settings. Fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Module name, also used as the default `module` header
    pub name: &'static str,

    /// Structs that are not emitted
    pub ignored_structs: &'static [&'static str],

    /// Aliases that are not emitted
    pub ignored_aliases: &'static [&'static str],

    /// Emitted V names for C types (old name, new name)
    pub renames: &'static [(&'static str, &'static str)],

    /// Text emitted right after the module header
    pub boilerplate: Option<&'static str>,

    /// V type for variadic arguments, keyed by snake_case function name
    pub variadic_overrides: &'static [(&'static str, &'static str)],
}

/// Variadic functions across the raylib API surface.
pub const VARIADIC_OVERRIDES: &[(&str, &str)] = &[
    ("trace_log", "...TraceLogLevel"),
    ("text_format", "...any"),
];

pub const RAYLIB: ModuleConfig = ModuleConfig {
    name: "raylib",
    ignored_structs: &[],
    ignored_aliases: &[],
    renames: &[],
    boilerplate: None,
    variadic_overrides: VARIADIC_OVERRIDES,
};

pub const RAYMATH: ModuleConfig = ModuleConfig {
    name: "raymath",
    ignored_structs: &["Vector2", "Vector3", "Vector4", "Matrix"],
    ignored_aliases: &["Quaternion"],
    renames: &[("float3", "Float3"), ("float16", "Float16")],
    boilerplate: Some("import raylib { Vector2, Vector3, Vector4, Matrix }\n"),
    variadic_overrides: VARIADIC_OVERRIDES,
};

pub const RAYGUI: ModuleConfig = ModuleConfig {
    name: "raygui",
    ignored_structs: &[
        "Vector2",
        "Vector3",
        "Color",
        "Rectangle",
        "Texture2D",
        "Image",
        "GlyphInfo",
        "Font",
    ],
    ignored_aliases: &[],
    renames: &[],
    boilerplate: Some("import raylib { Color, Font, Rectangle, Vector2, Vector3 }\n"),
    variadic_overrides: VARIADIC_OVERRIDES,
};

/// All built-in modules.
pub const MODULES: &[ModuleConfig] = &[RAYLIB, RAYMATH, RAYGUI];

impl ModuleConfig {
    /// Find a built-in module by name.
    pub fn lookup(name: &str) -> Result<&'static ModuleConfig, BindgenError> {
        MODULES
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| BindgenError::UnknownModule {
                name: name.to_string(),
            })
    }

    /// Whether a struct is skipped in this module.
    pub fn ignores_struct(&self, name: &str) -> bool {
        self.ignored_structs.contains(&name)
    }

    /// Whether an alias is skipped in this module.
    pub fn ignores_alias(&self, name: &str) -> bool {
        self.ignored_aliases.contains(&name)
    }

    /// The emitted name for a C type.
    pub fn rename<'a>(&self, name: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(old, _)| *old == name)
            .map_or(name, |(_, new)| *new)
    }
}
