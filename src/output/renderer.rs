// The echo primitive: one styled line to the output stream.

use std::io::{self, Write};

use super::style::{EchoError, TextStyle};
use super::symbols::{self, HostPlatform, SymbolSupport};
use crate::config::ReporterConfig;

/// Per-call layout and styling options. Every field defaults to "off".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoOptions {
    /// Use the write primitive that does not terminate the line.
    pub no_newline: bool,
    /// Append one space to the message before anything else.
    pub ensure_trailing_space: bool,
    /// Emit an empty line before the message.
    pub preceding_blank_line: bool,
    pub foreground: Option<String>,
    pub style: Option<String>,
    pub background: Option<String>,
    /// Number of leading spaces.
    pub indent: Option<usize>,
}

impl EchoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_newline(mut self) -> Self {
        self.no_newline = true;
        self
    }

    pub fn trailing_space(mut self) -> Self {
        self.ensure_trailing_space = true;
        self
    }

    pub fn blank_line_before(mut self) -> Self {
        self.preceding_blank_line = true;
        self
    }

    pub fn foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }
}

/// Writes reporter output, honoring the instance's color and symbol switches.
///
/// The target defaults to stdout; tests pass a `Vec<u8>` through
/// [`Renderer::with_target`] and inspect what was written.
pub struct Renderer<W: Write = io::Stdout> {
    target: W,
    config: ReporterConfig,
    symbol_support: Box<dyn SymbolSupport>,
}

impl Renderer<io::Stdout> {
    /// A renderer writing to standard output on the real host platform.
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_target(config, io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn with_target(config: ReporterConfig, target: W) -> Self {
        Self {
            target,
            config,
            symbol_support: Box::new(HostPlatform),
        }
    }

    /// Replace the platform check used by [`Renderer::symbol`].
    pub fn with_symbol_support(mut self, support: impl SymbolSupport + 'static) -> Self {
        self.symbol_support = Box::new(support);
        self
    }

    pub fn config(&self) -> ReporterConfig {
        self.config
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn into_target(self) -> W {
        self.target
    }

    /// Render `message` and write it, returning `self` for chaining.
    ///
    /// Style names are resolved before anything is written, so an unknown
    /// name leaves the stream untouched. With color disabled the names are
    /// never looked at.
    pub fn echo(&mut self, message: &str, options: &EchoOptions) -> Result<&mut Self, EchoError> {
        let mut message = if options.ensure_trailing_space {
            format!("{message} ")
        } else {
            message.to_string()
        };

        let style = if self.config.no_color {
            None
        } else {
            Some(TextStyle::resolve(options)?)
        };

        if options.preceding_blank_line {
            writeln!(self.target)?;
        }

        if let Some(width) = options.indent {
            message.insert_str(0, &" ".repeat(width));
        }

        match style {
            None => self.emit(&message, options.no_newline)?,
            Some(style) => {
                let styled = style.apply(&message).to_string();
                self.emit(&styled, options.no_newline)?;
            }
        }

        Ok(self)
    }

    /// Translate an ASCII status marker to its Unicode glyph when allowed.
    pub fn symbol<'a>(&self, input: &'a str) -> &'a str {
        symbols::translate_if(input, !self.config.no_symbols, self.symbol_support.as_ref())
    }

    fn emit(&mut self, text: &str, no_newline: bool) -> io::Result<()> {
        if no_newline {
            write!(self.target, "{text}")?;
            self.target.flush()
        } else {
            writeln!(self.target, "{text}")
        }
    }
}
