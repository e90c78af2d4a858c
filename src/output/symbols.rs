// Status glyph translation.
//
// Reporters write plain ASCII markers ("*" for pass, "x" for fail) and this
// module upgrades them to Unicode glyphs where the terminal can show them.

/// Reports whether the host can be trusted to render Unicode glyphs.
pub trait SymbolSupport {
    fn supports_unicode_symbols(&self) -> bool;
}

/// The real host. Windows consoles are treated as unable to render the glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl SymbolSupport for HostPlatform {
    fn supports_unicode_symbols(&self) -> bool {
        !cfg!(windows)
    }
}

/// A fixed answer, for tests and for callers that detect support themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedSupport(pub bool);

impl SymbolSupport for FixedSupport {
    fn supports_unicode_symbols(&self) -> bool {
        self.0
    }
}

/// ASCII marker to Unicode glyph.
pub const SYMBOL_TABLE: [(&str, &str); 5] = [
    ("*", "\u{2714}"),  // ✔ success
    ("x", "\u{2718}"),  // ✘ failure
    (">", "\u{25B6}"),  // ▶ pointer
    ("->", "\u{219D}"), // ↝ transition
    ("<>", "\u{2601}"), // ☁ remote
];

/// Apply the substitution table unconditionally. Unknown input is returned as-is.
pub fn translate(input: &str) -> &str {
    SYMBOL_TABLE
        .iter()
        .find(|(ascii, _)| *ascii == input)
        .map_or(input, |&(_, glyph)| glyph)
}

/// Translate `input` only when symbols are enabled and the platform supports them.
pub fn translate_if<'a>(input: &'a str, enabled: bool, support: &dyn SymbolSupport) -> &'a str {
    if !enabled || !support.supports_unicode_symbols() {
        return input;
    }
    translate(input)
}
