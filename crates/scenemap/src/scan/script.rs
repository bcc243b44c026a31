//! GDScript declaration extractor
//!
//! Finds public fields and methods with line-prefix heuristics. This is not a
//! GDScript parser: declarations split over several lines, nested scopes and
//! commented-out code all look the same to it.

use tracing::{debug, span, trace, Level};

use crate::diagram::MemberDeclaration;

const VAR_PREFIX: &str = "var";
const VAR_KEYWORD: &str = "var ";
const EXPORT_PREFIXES: [&str; 2] = ["export", "@export"];
const FUNC_PREFIX: &str = "func ";

/// Script declaration extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptParser;

impl ScriptParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract the public members declared in `source`, in line order
    ///
    /// - `var` lines yield a field when the name does not start with `_` and
    ///   its first character is unchanged by uppercasing.
    /// - `export` / `@export` lines yield a field when the name does not start
    ///   with `_`. No case check is applied to exported names.
    /// - `func ` lines yield a method when the name does not start with `_`.
    ///
    /// Field names and method names are deduplicated separately.
    ///
    /// # Example
    /// ```
    /// use scenemap::scan::ScriptParser;
    /// use scenemap::diagram::MemberDeclaration;
    ///
    /// let members = ScriptParser::new().parse("var Health = 100\nfunc Attack():\n\tpass");
    /// assert_eq!(
    ///     members,
    ///     vec![MemberDeclaration::field("Health"), MemberDeclaration::method("Attack")]
    /// );
    /// ```
    pub fn parse(&self, source: &str) -> Vec<MemberDeclaration> {
        let parse_span = span!(Level::DEBUG, "parse_script", input_len = source.len());
        let _enter = parse_span.enter();

        let mut fields: Vec<&str> = Vec::new();
        let mut methods: Vec<&str> = Vec::new();
        let mut members = Vec::new();

        for line in source.lines() {
            if line.len() > VAR_PREFIX.len() && line.starts_with(VAR_PREFIX) {
                if let Some(name) = declared_name(line) {
                    if !name.starts_with('_') && starts_uppercase(name) && !fields.contains(&name) {
                        trace!(name, "Accepted field");
                        fields.push(name);
                        members.push(MemberDeclaration::field(name));
                    }
                }
            }

            if is_export_line(line) {
                if let Some(name) = declared_name(line) {
                    if !name.starts_with('_') && !fields.contains(&name) {
                        trace!(name, "Accepted exported field");
                        fields.push(name);
                        members.push(MemberDeclaration::field(name));
                    }
                }
            }

            if line.len() > FUNC_PREFIX.len() && line.starts_with(FUNC_PREFIX) {
                if let Some(name) = function_name(line) {
                    if !name.starts_with('_') && !methods.contains(&name) {
                        trace!(name, "Accepted method");
                        methods.push(name);
                        members.push(MemberDeclaration::method(name));
                    }
                }
            }
        }

        debug!(
            fields = fields.len(),
            methods = methods.len(),
            "Extracted script members"
        );
        members
    }
}

fn is_export_line(line: &str) -> bool {
    EXPORT_PREFIXES
        .iter()
        .any(|prefix| line.len() > prefix.len() && line.starts_with(prefix))
}

/// Name declared by a `var` or exported line: the text after `var `, cut at
/// the first `=` and the first `:`
fn declared_name(line: &str) -> Option<&str> {
    let declaration = line.split('=').next()?;
    let (_, rest) = declaration.split_once(VAR_KEYWORD)?;
    let name = rest.split(':').next()?.trim();
    (!name.is_empty()).then_some(name)
}

/// Name declared by a `func` line: the text between `func ` and `(`
fn function_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(FUNC_PREFIX)?;
    let name = rest.split('(').next()?.trim();
    (!name.is_empty()).then_some(name)
}

fn starts_uppercase(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.to_uppercase().eq(std::iter::once(c)))
}
