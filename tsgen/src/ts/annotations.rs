//! Documentation-embedded type annotations.
//!
//! A field's inline documentation can override its mapped type with either a
//! doc-style marker (`@type { Foo }`) or a bracketed marker at the start of
//! a line (`[Foo]`). A leading `!` on the bracketed form marks the content
//! as a literal type, emitted verbatim instead of being qualified by the
//! configured namespace.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::GeneratorConfig;

static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*!?\[(.*?)\]").expect("bracket pattern is valid"));

static JSDOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@type\s*\{\s*(.*?)\s*\}").expect("doc pattern is valid"));

static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*!").expect("literal pattern is valid"));

/// A recognized type annotation extracted from field documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnnotation {
    /// `@type { T }` — always emitted verbatim, parenthesized.
    JsDoc(String),
    /// `[T]` or `![T]` — qualified through the configured namespace unless
    /// marked literal.
    Bracketed { ty: String, literal: bool },
}

impl TypeAnnotation {
    /// Extract an annotation from documentation, if one is present.
    ///
    /// The doc-style marker wins when both forms appear.
    pub fn parse(documentation: &str) -> Option<Self> {
        if let Some(captures) = JSDOC_RE.captures(documentation) {
            return Some(TypeAnnotation::JsDoc(captures[1].to_string()));
        }
        let captures = BRACKET_RE.captures(documentation)?;
        Some(TypeAnnotation::Bracketed {
            ty: captures[1].to_string(),
            literal: LITERAL_RE.is_match(documentation),
        })
    }

    /// Resolve the annotation to a type string under `config`.
    ///
    /// The result is parenthesized wherever the content is used verbatim so
    /// that later array/nullable suffixes bind to the whole annotation.
    pub fn resolve(&self, config: &GeneratorConfig) -> String {
        match self {
            TypeAnnotation::JsDoc(ty) => format!("({ty})"),
            TypeAnnotation::Bracketed { ty, literal } => {
                let Some(namespace_type) = config.namespace_type.as_deref() else {
                    return format!("({ty})");
                };
                if *literal {
                    return format!("({ty})");
                }
                if ty.is_empty() {
                    return "unknown".to_string();
                }
                if let Some(use_type) = config.use_type.as_deref() {
                    let namespace = config.namespace.as_deref().unwrap_or(namespace_type);
                    return format!("{namespace}.{use_type}[\"{ty}\"]");
                }
                format!("{namespace_type}.{ty}")
            }
        }
    }
}
