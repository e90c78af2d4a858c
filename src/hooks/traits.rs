// Reporter hook trait: the lifecycle vocabulary a runner drives.
//
// Every hook has a default that does nothing and hands the reporter back, so
// a reporter implements only the events its output format cares about and
// still survives a runner that fires all of them.

use anyhow::Result;
use tracing::debug;

use super::events::{
    Action, AssertionExpectation, AssertionResult, HookEvent, LogUser, ReportWritten,
    RunnerFinished, RunnerStarted, TestFinished, TestStarted,
};

/// Lifecycle hooks invoked by the test runner.
///
/// Hooks return the reporter so calls chain. An override that fails returns
/// the error; nothing here catches it.
pub trait ReporterHooks {
    fn runner_started(&mut self, _data: &RunnerStarted) -> Result<&mut Self> {
        Ok(self)
    }

    fn runner_finished(&mut self, _data: &RunnerFinished) -> Result<&mut Self> {
        Ok(self)
    }

    fn test_started(&mut self, _data: &TestStarted) -> Result<&mut Self> {
        Ok(self)
    }

    fn test_finished(&mut self, _data: &TestFinished) -> Result<&mut Self> {
        Ok(self)
    }

    fn assertion_result(&mut self, _data: &AssertionResult) -> Result<&mut Self> {
        Ok(self)
    }

    fn assertion_expectation(&mut self, _data: &AssertionExpectation) -> Result<&mut Self> {
        Ok(self)
    }

    fn run_browser(&mut self, _browser: &str) -> Result<&mut Self> {
        Ok(self)
    }

    fn action(&mut self, _data: &Action) -> Result<&mut Self> {
        Ok(self)
    }

    fn log_user(&mut self, _data: &LogUser) -> Result<&mut Self> {
        Ok(self)
    }

    fn browser_version(&mut self, _version: &str) -> Result<&mut Self> {
        Ok(self)
    }

    fn os_version(&mut self, _version: &str) -> Result<&mut Self> {
        Ok(self)
    }

    fn report_written(&mut self, _data: &ReportWritten) -> Result<&mut Self> {
        Ok(self)
    }

    /// Route an event to the hook of the same name.
    fn dispatch(&mut self, event: &HookEvent) -> Result<&mut Self> {
        debug!(event = event.name(), "dispatching hook");
        match event {
            HookEvent::RunnerStarted(data) => self.runner_started(data),
            HookEvent::RunnerFinished(data) => self.runner_finished(data),
            HookEvent::TestStarted(data) => self.test_started(data),
            HookEvent::TestFinished(data) => self.test_finished(data),
            HookEvent::AssertionResult(data) => self.assertion_result(data),
            HookEvent::AssertionExpectation(data) => self.assertion_expectation(data),
            HookEvent::RunBrowser(browser) => self.run_browser(browser),
            HookEvent::Action(data) => self.action(data),
            HookEvent::LogUser(data) => self.log_user(data),
            HookEvent::BrowserVersion(version) => self.browser_version(version),
            HookEvent::OsVersion(version) => self.os_version(version),
            HookEvent::ReportWritten(data) => self.report_written(data),
        }
    }
}
