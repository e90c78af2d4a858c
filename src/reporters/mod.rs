// Concrete reporters built on the renderer and the hook trait.

pub mod base;
pub mod dot;

pub use base::BaseReporter;
pub use dot::DotReporter;
