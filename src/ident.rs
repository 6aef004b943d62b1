//! Utility functions for working with Go identifiers.

/// Go keywords; an identifier matching one of these is not usable as a name.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Converts a Protobuf message name to the `CamelCase` name protoc-gen-go gives its Go struct.
///
/// A `.` or `_` followed by a lowercase letter is dropped and the letter upper cased, a leading
/// `_` becomes `X`, and the first letter of every word is upper cased.
pub fn to_go_camel(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut ident = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let next_is_lower = bytes.get(i + 1).map_or(false, u8::is_ascii_lowercase);
        match c {
            b'.' if next_is_lower => {}
            b'.' => ident.push('_'),
            b'_' if i == 0 || bytes[i - 1] == b'.' => ident.push('X'),
            b'_' if next_is_lower => {}
            c if c.is_ascii_digit() => ident.push(c as char),
            c => {
                ident.push(c.to_ascii_uppercase() as char);
                while bytes.get(i + 1).map_or(false, u8::is_ascii_lowercase) {
                    i += 1;
                    ident.push(bytes[i] as char);
                }
            }
        }
        i += 1;
    }
    ident
}

/// Converts an arbitrary string into a valid Go identifier.
///
/// Every rune that is neither a letter nor a digit becomes `_`. The result is prefixed with `_`
/// if it would otherwise start with a non-letter or collide with a Go keyword.
pub fn to_go_sanitized(s: &str) -> String {
    let ident: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    let starts_with_letter = ident.chars().next().map_or(false, char::is_alphabetic);
    if !starts_with_letter || is_go_keyword(&ident) {
        format!("_{}", ident)
    } else {
        ident
    }
}

/// Whether `s` is a Go keyword.
pub fn is_go_keyword(s: &str) -> bool {
    GO_KEYWORDS.contains(&s)
}

/// Whether `s` can be used verbatim as a Go type name.
pub fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_') && !is_go_keyword(s)
}
