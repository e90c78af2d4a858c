// Output formatting: the echo renderer, style name tables, symbol translation.

pub mod renderer;
pub mod style;
pub mod symbols;

pub use renderer::{EchoOptions, Renderer};
pub use style::{EchoError, StyleKind};
pub use symbols::{FixedSupport, HostPlatform, SymbolSupport};
