// Dot reporter: one glyph per finished test, all on one line.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use anyhow::Result;

use super::base::BaseReporter;
use crate::config::ReporterConfig;
use crate::hooks::events::TestFinished;
use crate::hooks::ReporterHooks;
use crate::output::{EchoError, EchoOptions, Renderer};

/// Renderer access comes from the wrapped [`BaseReporter`] through `Deref`.
pub struct DotReporter<W: Write = io::Stdout> {
    base: BaseReporter<W>,
    /// Glyphs written since the line was last terminated.
    dots: usize,
}

impl DotReporter<io::Stdout> {
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_renderer(Renderer::new(config))
    }
}

impl<W: Write> DotReporter<W> {
    pub fn with_renderer(renderer: Renderer<W>) -> Self {
        Self {
            base: BaseReporter::with_renderer(renderer),
            dots: 0,
        }
    }

    pub fn dots(&self) -> usize {
        self.dots
    }

    /// End the glyph line, if one was started.
    pub fn finish_line(&mut self) -> Result<&mut Self, EchoError> {
        if self.dots > 0 {
            self.base.renderer_mut().echo("", &EchoOptions::new())?;
            self.dots = 0;
        }
        Ok(self)
    }

    pub fn into_renderer(self) -> Renderer<W> {
        self.base.into_renderer()
    }
}

impl<W: Write> Deref for DotReporter<W> {
    type Target = BaseReporter<W>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<W: Write> DerefMut for DotReporter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl<W: Write> ReporterHooks for DotReporter<W> {
    fn test_finished(&mut self, data: &TestFinished) -> Result<&mut Self> {
        let (marker, color) = if data.status {
            ("*", "green")
        } else {
            ("x", "red")
        };
        let renderer = self.base.renderer_mut();
        let glyph = renderer.symbol(marker);
        renderer.echo(glyph, &EchoOptions::new().foreground(color).no_newline())?;
        self.dots += 1;
        Ok(self)
    }
}
