// console-reporter: the formatting layer under a test runner's console reporters.
//
// `output` renders single lines (color, style, indentation, symbol glyphs),
// `hooks` defines the lifecycle events a runner fires, and `reporters` holds
// reporters built from the two.

pub mod config;
pub mod hooks;
pub mod output;
pub mod reporters;

pub use config::ReporterConfig;
pub use hooks::{HookEvent, ReporterHooks};
pub use output::{EchoError, EchoOptions, Renderer};
pub use reporters::{BaseReporter, DotReporter};
