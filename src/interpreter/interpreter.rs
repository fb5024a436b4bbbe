//! Interpreter
//!
//! Runs one line of input against a [`VirtualFs`]:
//! 1. record the line in history
//! 2. expand a leading alias and tokenize
//! 3. dispatch the first token to a built-in command
//! 4. mirror the working directory and report usage

use std::sync::Arc;

use tracing::{debug, warn};

use super::alias_expansion::expand_and_tokenize;
use super::collaborators::{DestructiveActionReporter, NoopReporter, NoopStats, UsageStatsRecorder};
use super::errors::ShellError;
use super::prompt::build_prompt;
use super::types::{ExecResult, ShellOptions, ShellState};
use crate::commands::registry::{create_builtin_registry, CommandRegistry};
use crate::commands::{CommandContext, CommandOutput, CommandResult};
use crate::fs::VirtualFs;

/// The one input line that triggers the scripted catastrophic-command
/// demonstration.
pub const CATASTROPHIC_INPUT: &str = "rm -rf /";

/// Integrity delta reported for [`CATASTROPHIC_INPUT`].
pub const CATASTROPHIC_DELTA: i32 = -50;

/// The shell interpreter. The file system is passed to every call, so one
/// shell never owns the tree it works on.
pub struct Shell {
    registry: CommandRegistry,
    state: ShellState,
    options: ShellOptions,
    reporter: Arc<dyn DestructiveActionReporter>,
    stats: Arc<dyn UsageStatsRecorder>,
}

impl Shell {
    /// Create a shell with no-op collaborators.
    pub fn new(options: ShellOptions, cwd: &str) -> Self {
        Self::with_collaborators(options, cwd, Arc::new(NoopReporter), Arc::new(NoopStats))
    }

    pub fn with_collaborators(
        options: ShellOptions,
        cwd: &str,
        reporter: Arc<dyn DestructiveActionReporter>,
        stats: Arc<dyn UsageStatsRecorder>,
    ) -> Self {
        Self {
            registry: create_builtin_registry(),
            state: ShellState::new(&options, cwd),
            options,
            reporter,
            stats,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute one line of input.
    pub fn exec(&mut self, fs: &mut VirtualFs, input: &str) -> ExecResult {
        let line = input.trim();
        // the tree may have been replaced since the last call
        self.state.cwd = fs.current_directory().to_string();

        if line.is_empty() {
            self.state.history_cursor = None;
            return self.finish(fs, input, CommandResult::success(String::new()));
        }

        self.state.record_history(line, self.options.max_history);

        let (name, result) = if line == CATASTROPHIC_INPUT {
            warn!(delta = CATASTROPHIC_DELTA, "catastrophic command intercepted");
            self.reporter.report_destructive_action(CATASTROPHIC_DELTA);
            (
                "rm".to_string(),
                CommandResult::error(format!(
                    "rm: refusing to remove '/'\nWARNING: system integrity critically damaged ({})\n",
                    CATASTROPHIC_DELTA
                )),
            )
        } else {
            self.dispatch(fs, line)
        };

        debug!(command = %name, exit_code = result.exit_code, "command executed");
        self.state.set_cwd(fs.current_directory());
        self.state.history_cursor = None;
        self.stats.record_command(&name, result.exit_code);
        self.finish(fs, input, result)
    }

    fn dispatch(&mut self, fs: &mut VirtualFs, line: &str) -> (String, CommandResult) {
        let mut tokens = expand_and_tokenize(line, &self.state.aliases);
        if tokens.is_empty() {
            return (String::new(), CommandResult::success(String::new()));
        }
        let typed = tokens.remove(0);
        let name = typed.to_lowercase();

        let Some(cmd) = self.registry.get(&name) else {
            let err = ShellError::UnknownCommand(typed);
            return (name, CommandResult::with_exit_code(format!("{}\n", err), err.exit_code()));
        };

        let mut ctx = CommandContext {
            args: tokens,
            fs,
            state: &mut self.state,
            options: &self.options,
            reporter: self.reporter.as_ref(),
            registry: &self.registry,
        };
        let result = cmd.execute(&mut ctx);
        (name, result)
    }

    fn finish(&self, fs: &VirtualFs, input: &str, result: CommandResult) -> ExecResult {
        ExecResult {
            input: input.to_string(),
            output: result.output,
            exit_code: result.exit_code,
            cwd: fs.current_directory().to_string(),
        }
    }

    /// The prompt for the current session state.
    pub fn prompt(&self, fs: &VirtualFs) -> String {
        build_prompt(
            &self.options.user,
            &self.options.hostname,
            fs.current_directory(),
            fs.home_dir(),
        )
    }

    pub fn history_up(&mut self) -> String {
        self.state.history_up()
    }

    pub fn history_down(&mut self) -> String {
        self.state.history_down()
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.state.set_draft(draft);
    }

    /// Forget history, aliases and environment changes, keeping the options
    /// this shell was built with.
    pub fn reset_session(&mut self, cwd: &str) {
        self.state = ShellState::new(&self.options, cwd);
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("commands", &self.registry.len())
            .finish()
    }
}
