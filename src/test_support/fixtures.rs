//! Test fixtures for common test scenarios.
//!
//! Trimmed-down API descriptions in the shape `raylib_parser -f JSON`
//! produces, covering every item category and the edge cases the emitter
//! has rules for.

/// raylib-like description: every category, string params/returns, a
/// variadic function, fixed arrays and an enum with a gap.
pub const RAYLIB_SAMPLE: &str = r#"{
  "defines": [
    {"name": "RAYLIB_VERSION", "type": "STRING", "value": "5.5", "description": ""}
  ],
  "structs": [
    {
      "name": "Vector2",
      "description": "Vector2, 2 components",
      "fields": [
        {"type": "float", "name": "x", "description": "Vector x component"},
        {"type": "float", "name": "y", "description": "Vector y component"}
      ]
    },
    {
      "name": "Model",
      "description": "",
      "fields": [
        {"type": "int", "name": "boneCount", "description": ""}
      ]
    },
    {
      "name": "BoneInfo",
      "description": "Bone, skeletal animation bone",
      "fields": [
        {"type": "char[32]", "name": "name", "description": "Bone name"},
        {"type": "float[4][4]", "name": "offsets", "description": ""}
      ]
    }
  ],
  "aliases": [
    {"type": "Vector4", "name": "Quaternion", "description": "Quaternion, 4 components (Vector4 alias)"}
  ],
  "enums": [
    {
      "name": "GapEnum",
      "description": "Values with a gap",
      "values": [
        {"name": "FIRST_VALUE", "value": 0, "description": "The first"},
        {"name": "SECOND_VALUE", "value": 1, "description": ""},
        {"name": "FIFTH_VALUE", "value": 5, "description": "After a gap"}
      ]
    }
  ],
  "callbacks": [
    {
      "name": "TraceLogCallback",
      "description": "Logging: Redirect trace log messages",
      "returnType": "void",
      "params": [
        {"type": "int", "name": "logLevel"},
        {"type": "const char *", "name": "text"},
        {"type": "va_list", "name": "args"}
      ]
    },
    {
      "name": "AudioCallback",
      "description": "",
      "returnType": "void",
      "params": [
        {"type": "void *", "name": "bufferData"},
        {"type": "unsigned int", "name": "frames"}
      ]
    },
    {
      "name": "FrameCallback",
      "description": "",
      "returnType": "int"
    }
  ],
  "functions": [
    {
      "name": "InitWindow",
      "description": "Initialize window and OpenGL context",
      "returnType": "void",
      "params": [
        {"type": "int", "name": "width"},
        {"type": "int", "name": "height"},
        {"type": "const char *", "name": "title"}
      ]
    },
    {
      "name": "GetClipboardText",
      "description": "Get clipboard text content",
      "returnType": "const char *"
    },
    {
      "name": "GetFPS",
      "description": "Get current FPS",
      "returnType": "int"
    },
    {
      "name": "TraceLog",
      "description": "Show trace log messages (LOG_DEBUG, LOG_INFO, LOG_WARNING, LOG_ERROR...)",
      "returnType": "void",
      "params": [
        {"type": "int", "name": "logLevel"},
        {"type": "const char *", "name": "text"},
        {"type": "...", "name": "args"}
      ]
    }
  ]
}"#;

/// raymath-like description: standalone redeclarations of raylib types
/// next to raymath's own `float3`.
pub const RAYMATH_SAMPLE: &str = r#"{
  "structs": [
    {
      "name": "Vector2",
      "description": "Vector2 type",
      "fields": [
        {"type": "float", "name": "x", "description": ""},
        {"type": "float", "name": "y", "description": ""}
      ]
    },
    {
      "name": "float3",
      "description": "",
      "fields": [
        {"type": "float[3]", "name": "v", "description": ""}
      ]
    }
  ],
  "aliases": [
    {"type": "Vector4", "name": "Quaternion", "description": "Quaternion type"}
  ],
  "functions": [
    {
      "name": "Vector3ToFloatV",
      "description": "Get Vector3 as float array",
      "returnType": "float3",
      "params": [
        {"type": "Vector3", "name": "v"}
      ]
    }
  ]
}"#;

/// A description whose only function has an unconfigured variadic parameter.
pub const UNRESOLVED_VARIADIC_SAMPLE: &str = r#"{
  "functions": [
    {
      "name": "LogEverything",
      "description": "",
      "returnType": "void",
      "params": [{"type": "...", "name": "args"}]
    }
  ]
}"#;
