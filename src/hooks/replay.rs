// Feed a recorded JSON-lines event stream through a reporter.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::info;

use super::events::HookEvent;
use super::traits::ReporterHooks;

/// Dispatch every event in `input` to `reporter`, in order.
///
/// Blank lines are skipped. Stops at the first malformed line or failing
/// hook, reporting the 1-based line number. Returns the number of events
/// dispatched.
pub fn replay<R: ReporterHooks, I: BufRead>(reporter: &mut R, input: I) -> Result<usize> {
    let mut dispatched = 0;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let event = HookEvent::parse_line(&line).with_context(|| format!("line {line_no}"))?;
        reporter
            .dispatch(&event)
            .with_context(|| format!("{} hook failed at line {line_no}", event.name()))?;
        dispatched += 1;
    }

    info!(events = dispatched, "replay complete");
    Ok(dispatched)
}
