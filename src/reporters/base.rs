use std::io::{self, Write};

use crate::config::ReporterConfig;
use crate::hooks::ReporterHooks;
use crate::output::Renderer;

/// The base reporter: owns a renderer and keeps every hook at its default.
///
/// Useful on its own as a silent reporter, and as the core concrete
/// reporters wrap: hold a `BaseReporter`, override the hooks you need.
pub struct BaseReporter<W: Write = io::Stdout> {
    renderer: Renderer<W>,
}

impl BaseReporter<io::Stdout> {
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_renderer(Renderer::new(config))
    }
}

impl<W: Write> BaseReporter<W> {
    pub fn with_renderer(renderer: Renderer<W>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<W> {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }
}

impl<W: Write> ReporterHooks for BaseReporter<W> {}
