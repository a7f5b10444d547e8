//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `camelCase` |
//! | `snake_case` / `kebab-case` | [`to_pascal_case`] | `PascalCase` |
//! | `camelCase` / `kebab-case` | [`to_snake_case`] | `snake_case` |
//! | any of the above | [`Case::ScreamingSnake`] | `SCREAMING_SNAKE` |
//! | `word` | [`capitalize`] | `Word` |
//! | primitive kind | [`wrapper_class_name`] | `Notnull<Kind>` |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Prefix of every generated nullable wrapper class.
pub const WRAPPER_PREFIX: &str = "Notnull";

/// A target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Camel,
    Pascal,
    Snake,
    ScreamingSnake,
}

impl Case {
    /// Apply the convention to a schema identifier.
    pub fn apply(self, s: &str) -> String {
        match self {
            Case::Camel => to_camel_case(&s.replace('-', "_")),
            Case::Pascal => to_pascal_case(s),
            Case::Snake => to_snake_case(s),
            Case::ScreamingSnake => to_snake_case(s).to_uppercase(),
        }
    }
}

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use polygen_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("display_name"), "displayName");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push_str(&c.to_uppercase().to_string());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
///
/// # Examples
///
/// ```
/// use polygen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("notnull_string"), "NotnullString");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("Address"), "Address");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Convert camelCase, PascalCase or kebab-case to snake_case.
///
/// # Examples
///
/// ```
/// use polygen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("displayName"), "display_name");
/// assert_eq!(to_snake_case("user-id"), "user_id");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            result.push('_');
        } else if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let after_word = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            // Last capital of an acronym starts the next word: `HTTPServer`.
            let ends_acronym = prev.is_some_and(char::is_uppercase)
                && next.is_some_and(|n| n.is_lowercase());
            if (after_word || ends_acronym) && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use polygen_core::naming::capitalize;
///
/// assert_eq!(capitalize("string"), "String");
/// assert_eq!(capitalize("int32"), "Int32");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Name of the wrapper class for a nullable primitive kind.
///
/// Fixed template `Notnull<Capitalize(kind)>`, independent of any field name.
///
/// ```
/// use polygen_core::naming::wrapper_class_name;
///
/// assert_eq!(wrapper_class_name("string"), "NotnullString");
/// ```
pub fn wrapper_class_name(kind: &str) -> String {
    format!("{WRAPPER_PREFIX}{}", capitalize(kind))
}

/// Append `_` to an identifier that collides with a reserved word.
pub fn avoid_keyword(name: String, keywords: &BTreeSet<String>) -> String {
    if keywords.contains(&name) {
        format!("{name}_")
    } else {
        name
    }
}
