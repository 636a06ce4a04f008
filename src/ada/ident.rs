use std::collections::HashMap;

use regex::Regex;

use crate::error::TransformError;
use crate::models::Registry;

/// Ada 2012 reserved words; none of them may name an enumeration literal.
const RESERVED_WORDS: &[&str] = &[
    "abort", "abs", "abstract", "accept", "access", "aliased", "all", "and", "array", "at",
    "begin", "body", "case", "constant", "declare", "delay", "delta", "digits", "do", "else",
    "elsif", "end", "entry", "exception", "exit", "for", "function", "generic", "goto", "if",
    "in", "interface", "is", "limited", "loop", "mod", "new", "not", "null", "of", "or",
    "others", "out", "overriding", "package", "pragma", "private", "procedure", "protected",
    "raise", "range", "record", "rem", "renames", "requeue", "return", "reverse", "select",
    "separate", "some", "subtype", "synchronized", "tagged", "task", "terminate", "then",
    "type", "until", "use", "when", "while", "with", "xor",
];

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*$";

/// Map an SPDX id onto an Ada enumeration literal.
///
/// A leading digit gets an `Id_` prefix, `-` and `.` become `_`, and `+` becomes `p`.
/// Any other character is left alone; [`IdentValidator`] catches what that lets through.
pub fn to_ada_id(id: &str) -> String {
    let prefixed = if id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Id_{}", id)
    } else {
        id.to_string()
    };
    prefixed.replace('-', "_").replace('.', "_").replace('+', "p")
}

/// Checks transformed ids against Ada identifier rules.
pub struct IdentValidator {
    pattern: Regex,
}

impl IdentValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(IDENTIFIER_PATTERN)?,
        })
    }

    fn check(&self, ident: &str) -> Result<(), &'static str> {
        if !self.pattern.is_match(ident) {
            return Err("must start with a letter and contain only letters, digits and underscores");
        }
        if ident.contains("__") {
            return Err("consecutive underscores");
        }
        if ident.ends_with('_') {
            return Err("trailing underscore");
        }
        if RESERVED_WORDS.contains(&ident.to_ascii_lowercase().as_str()) {
            return Err("reserved word");
        }
        Ok(())
    }

    /// Transform every id of `registry`, in order, rejecting invalid or colliding names.
    ///
    /// Ada identifiers are case-insensitive, so `Foo` and `FOO` collide.
    pub fn validate(&self, registry: &Registry) -> Result<Vec<String>, TransformError> {
        if registry.entries.is_empty() {
            return Err(TransformError::Empty {
                registry: registry.kind.to_string(),
            });
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut names = Vec::with_capacity(registry.entries.len());

        for entry in &registry.entries {
            let ident = to_ada_id(&entry.id);

            self.check(&ident).map_err(|reason| TransformError::Invalid {
                id: entry.id.clone(),
                ident: ident.clone(),
                reason,
            })?;

            if let Some(first) = seen.insert(ident.to_ascii_lowercase(), &entry.id) {
                return Err(TransformError::Collision {
                    first: first.to_string(),
                    second: entry.id.clone(),
                    ident,
                });
            }

            names.push(ident);
        }

        Ok(names)
    }
}
