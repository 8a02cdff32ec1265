//! Identifier case conversion.
//!
//! raylib names are PascalCase (functions) or camelCase (fields, params);
//! V wants snake_case. Acronyms are substituted first so that `FPS` becomes
//! `_fps` rather than `_f_p_s`.

/// Acronyms that must stay in one segment, applied in this order.
///
/// Matching is plain substring replacement. Capital runs absent from this
/// table still split one letter per segment.
pub const ACRONYMS: &[(&str, &str)] = &[
    ("UTF8", "_utf8"),
    ("FPS", "_fps"),
    ("DPI", "_dpi"),
    ("2D", "_2d"),
    ("3D", "_3d"),
    ("URL", "_url"),
    ("CRC32", "_crc32"),
    ("MD5", "_md5"),
    ("SHA1", "_sha1"),
    ("POT", "_pot"),
    ("NN", "_nn"),
    ("CW", "_cw"),
    ("CCW", "_ccw"),
    ("NPatch", "_npatch"),
    ("HSV", "_hsv"),
];

/// Convert a PascalCase or camelCase identifier to snake_case.
pub fn to_snake_case(name: &str) -> String {
    let mut replaced = name.to_string();
    for (acronym, segment) in ACRONYMS {
        replaced = replaced.replace(acronym, segment);
    }

    let mut out = String::with_capacity(replaced.len() + 8);
    for (i, c) in replaced.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }

    out.to_lowercase()
}
