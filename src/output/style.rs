// Color and font-style name tables.
//
// Reporters ask for styling by name ("green", "bold", "bgRed"). Names are
// resolved here against fixed tables, and a miss is an error rather than a
// silent fallback to white or plain text.

use std::fmt;

use colored::{Color, ColoredString, Colorize};
use thiserror::Error;

use super::renderer::EchoOptions;

/// Which slot of the options an unrecognized name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Foreground,
    FontStyle,
    Background,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StyleKind::Foreground => "foreground color",
            StyleKind::FontStyle => "font style",
            StyleKind::Background => "background color",
        };
        f.write_str(label)
    }
}

/// Errors raised by a single `echo` call.
#[derive(Debug, Error)]
pub enum EchoError {
    #[error("unrecognized {kind} name `{name}`")]
    InvalidStyleName { kind: StyleKind, name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Look up a color by name.
///
/// Accepts the eight base colors plus bright variants spelled `redBright`,
/// `brightRed` or `bright_red`.
pub fn parse_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "blackBright" | "brightBlack" | "bright_black" => Color::BrightBlack,
        "redBright" | "brightRed" | "bright_red" => Color::BrightRed,
        "greenBright" | "brightGreen" | "bright_green" => Color::BrightGreen,
        "yellowBright" | "brightYellow" | "bright_yellow" => Color::BrightYellow,
        "blueBright" | "brightBlue" | "bright_blue" => Color::BrightBlue,
        "magentaBright" | "brightMagenta" | "bright_magenta" => Color::BrightMagenta,
        "cyanBright" | "brightCyan" | "bright_cyan" => Color::BrightCyan,
        "whiteBright" | "brightWhite" | "bright_white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Look up a background color. `bgRed` and `red` name the same color.
pub fn parse_background(name: &str) -> Option<Color> {
    match name.strip_prefix("bg") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => {
            let mut lowered = rest[..1].to_ascii_lowercase();
            lowered.push_str(&rest[1..]);
            parse_color(&lowered)
        }
        _ => parse_color(name),
    }
}

/// Font styles the colorizer can apply on top of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Inverse,
    Hidden,
    Strike,
}

impl FontStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name {
            "bold" => FontStyle::Bold,
            "dim" | "dimmed" => FontStyle::Dim,
            "italic" => FontStyle::Italic,
            "underline" => FontStyle::Underline,
            "blink" => FontStyle::Blink,
            "inverse" | "reversed" => FontStyle::Inverse,
            "hidden" => FontStyle::Hidden,
            "strike" | "strikethrough" => FontStyle::Strike,
            _ => return None,
        };
        Some(style)
    }

    fn apply(self, text: ColoredString) -> ColoredString {
        match self {
            FontStyle::Bold => text.bold(),
            FontStyle::Dim => text.dimmed(),
            FontStyle::Italic => text.italic(),
            FontStyle::Underline => text.underline(),
            FontStyle::Blink => text.blink(),
            FontStyle::Inverse => text.reversed(),
            FontStyle::Hidden => text.hidden(),
            FontStyle::Strike => text.strikethrough(),
        }
    }
}

/// A fully resolved set of styling choices for one `echo` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStyle {
    pub foreground: Option<Color>,
    pub font: Option<FontStyle>,
    pub background: Option<Color>,
}

impl TextStyle {
    /// Resolve the names carried by `options`, failing on the first unknown one.
    pub fn resolve(options: &EchoOptions) -> Result<Self, EchoError> {
        let foreground = options
            .foreground
            .as_deref()
            .map(|name| parse_color(name).ok_or_else(|| invalid(StyleKind::Foreground, name)))
            .transpose()?;
        let font = options
            .style
            .as_deref()
            .map(|name| FontStyle::from_name(name).ok_or_else(|| invalid(StyleKind::FontStyle, name)))
            .transpose()?;
        let background = options
            .background
            .as_deref()
            .map(|name| parse_background(name).ok_or_else(|| invalid(StyleKind::Background, name)))
            .transpose()?;

        Ok(Self {
            foreground,
            font,
            background,
        })
    }

    /// Narrow the identity transform: foreground, then font style, then background.
    pub fn apply(&self, text: &str) -> ColoredString {
        let mut styled = text.normal();
        if let Some(color) = self.foreground {
            styled = styled.color(color);
        }
        if let Some(font) = self.font {
            styled = font.apply(styled);
        }
        if let Some(color) = self.background {
            styled = styled.on_color(color);
        }
        styled
    }
}

fn invalid(kind: StyleKind, name: &str) -> EchoError {
    tracing::debug!(%kind, name, "rejected style name");
    EchoError::InvalidStyleName {
        kind,
        name: name.to_string(),
    }
}
