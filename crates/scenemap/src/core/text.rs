//! Shared text utilities for scene processing
//!
//! Class-name normalization for scene paths and quoted field extraction from
//! single scene-file lines.

use std::path::Path;

/// Extension identifying Godot scene files
pub const SCENE_EXTENSION: &str = ".tscn";

/// Key of the resource path field on an `ext_resource` line
pub const PATH_KEY: &str = "path=";

/// Key of the resource type field on an `ext_resource` line
pub const TYPE_KEY: &str = "type=";

/// Marker prefixed to project-relative resource paths
pub const RESOURCE_ROOT: &str = "res://";

/// Derive a diagram-safe class name from a scene path.
///
/// Takes the final path segment, removes every occurrence of the scene
/// extension, title-cases the rest and removes hyphens.
///
/// # Example
/// ```
/// use scenemap::core::class_name_from_path;
///
/// assert_eq!(class_name_from_path("scenes/enemy-boss.tscn"), "EnemyBoss");
/// assert_eq!(class_name_from_path("Player.tscn"), "Player");
/// ```
pub fn class_name_from_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let stem = file_name.replace(SCENE_EXTENSION, "");

    title_case(&stem).replace('-', "")
}

/// Uppercase every letter that starts a word.
///
/// A word starts at the beginning of the text or after a separator. ASCII
/// letters, digits and `_` never separate; other ASCII characters do. Outside
/// ASCII only whitespace separates. Characters that do not start a word keep
/// their case.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous = ' ';

    for c in text.chars() {
        if is_word_separator(previous) {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous = c;
    }

    result
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphabetic() || c.is_numeric() {
        return false;
    }
    c.is_whitespace()
}

/// Extract the quoted value of `key` from a single line.
///
/// Finds the first whitespace-delimited token containing `key`, removes the
/// key and then one leading and one trailing character (the quotes). For
/// [`PATH_KEY`] the [`RESOURCE_ROOT`] marker is removed as well. Returns an
/// empty string when no token matches or the token is too short to carry
/// quotes.
///
/// # Example
/// ```
/// use scenemap::core::{extract_field, PATH_KEY, TYPE_KEY};
///
/// let line = r#"[ext_resource path="res://player.gd" type="Script" id=1]"#;
/// assert_eq!(extract_field(line, PATH_KEY), "player.gd");
/// assert_eq!(extract_field(line, TYPE_KEY), "Script");
/// ```
pub fn extract_field(line: &str, key: &str) -> String {
    let Some(token) = line.split_whitespace().find(|token| token.contains(key)) else {
        return String::new();
    };

    let mut value = token.replace(key, "");
    if key == PATH_KEY {
        value = value.replace(RESOURCE_ROOT, "");
    }

    strip_quotes(&value).to_string()
}

fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str(),
        _ => "",
    }
}
