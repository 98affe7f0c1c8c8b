//! Names a resource may not take because the stamped file would not parse or
//! would rebind something the template relies on.

/// Reserved words and strict-mode restricted names of JavaScript, plus the
/// bindings of the CommonJS module wrapper.
pub(crate) const JAVASCRIPT: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // CommonJS wrapper parameters
    "require", "module", "exports", "__filename", "__dirname",
];

/// Strict, reserved and edition-2024 keywords of Rust, plus `_`.
pub(crate) const RUST: &[&str] = &[
    "_", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Identifiers declared by `templates/express_router.js.tmpl`.
pub(crate) const EXPRESS_BINDINGS: &[&str] = &["express", "router", "req", "res"];

/// Type-namespace names imported by `templates/axum_router.rs.tmpl`.
pub(crate) const AXUM_BINDINGS: &[&str] = &["axum", "Router", "Path", "Request"];

/// Scripting language a stencil produces, judged by its output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    JavaScript,
    Rust,
    Plain,
}

impl Dialect {
    pub fn for_extension(extension: &str) -> Self {
        match extension {
            "js" | "mjs" | "cjs" | "ts" | "mts" | "cts" | "jsx" | "tsx" => Dialect::JavaScript,
            "rs" => Dialect::Rust,
            _ => Dialect::Plain,
        }
    }

    pub(crate) fn keywords(self) -> &'static [&'static str] {
        match self {
            Dialect::JavaScript => JAVASCRIPT,
            Dialect::Rust => RUST,
            Dialect::Plain => &[],
        }
    }
}
