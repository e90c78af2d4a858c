// Lifecycle event payloads.
//
// A runner reports progress as a stream of events. Each one is serialized as
// {"event": "<camelCaseName>", "data": <payload>}, one per line when replayed
// from a file. Payload fields are camelCase and default when missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerStarted {
    pub browsers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerFinished {
    /// Human-readable duration as measured by the runner.
    pub elapsed_time: String,
    pub assertions: u32,
    pub assertions_passed: u32,
    pub assertions_failed: u32,
    /// True when the whole run passed.
    pub status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestStarted {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestFinished {
    pub name: String,
    pub assertions: u32,
    pub passed_assertions: u32,
    pub failed_assertions: u32,
    pub status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssertionResult {
    pub success: bool,
    /// Assertion kind, e.g. "title" or "exists".
    #[serde(rename = "type")]
    pub kind: String,
    pub message: Option<String>,
    pub expected: Option<Value>,
    pub value: Option<Value>,
}

/// Declared vs. executed assertion count for a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssertionExpectation {
    pub expected: u32,
    pub actual: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Option<String>,
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogUser {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportWritten {
    /// Report format, e.g. "junit" or "html".
    #[serde(rename = "type")]
    pub kind: String,
    pub dest: String,
}

/// One lifecycle event with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum HookEvent {
    RunnerStarted(RunnerStarted),
    RunnerFinished(RunnerFinished),
    TestStarted(TestStarted),
    TestFinished(TestFinished),
    AssertionResult(AssertionResult),
    AssertionExpectation(AssertionExpectation),
    RunBrowser(String),
    Action(Action),
    LogUser(LogUser),
    BrowserVersion(String),
    OsVersion(String),
    ReportWritten(ReportWritten),
}

impl HookEvent {
    /// Every event name, in lifecycle order.
    pub const NAMES: [&'static str; 12] = [
        "runnerStarted",
        "runnerFinished",
        "testStarted",
        "testFinished",
        "assertionResult",
        "assertionExpectation",
        "runBrowser",
        "action",
        "logUser",
        "browserVersion",
        "osVersion",
        "reportWritten",
    ];

    /// The wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            HookEvent::RunnerStarted(_) => "runnerStarted",
            HookEvent::RunnerFinished(_) => "runnerFinished",
            HookEvent::TestStarted(_) => "testStarted",
            HookEvent::TestFinished(_) => "testFinished",
            HookEvent::AssertionResult(_) => "assertionResult",
            HookEvent::AssertionExpectation(_) => "assertionExpectation",
            HookEvent::RunBrowser(_) => "runBrowser",
            HookEvent::Action(_) => "action",
            HookEvent::LogUser(_) => "logUser",
            HookEvent::BrowserVersion(_) => "browserVersion",
            HookEvent::OsVersion(_) => "osVersion",
            HookEvent::ReportWritten(_) => "reportWritten",
        }
    }

    /// Parse a single JSON line.
    pub fn parse_line(line: &str) -> Result<Self> {
        serde_json::from_str(line.trim()).with_context(|| {
            format!(
                "Failed to parse hook event: {}",
                truncate_chars(line.trim(), 80)
            )
        })
    }
}

/// Shorten `text` to `max_chars` characters for error messages.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
