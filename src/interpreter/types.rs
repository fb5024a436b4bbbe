//! Interpreter Types
//!
//! Options, session state and results of the shell interpreter.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::commands::CommandOutput;
use crate::fs::HOME_DIR;

/// Default cap on the number of history entries.
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Shell configuration. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// User name shown by `whoami` and in the prompt
    pub user: String,
    /// Host name shown by `hostname`, `uname -a` and in the prompt
    pub hostname: String,
    /// Oldest entries are dropped past this many
    pub max_history: usize,
    /// Initial environment variables
    pub env: IndexMap<String, String>,
    /// Initial aliases
    pub aliases: IndexMap<String, String>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert("ll".to_string(), "ls -la".to_string());
        aliases.insert("la".to_string(), "ls -a".to_string());
        Self {
            user: "user".to_string(),
            hostname: "workstation".to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            env: IndexMap::new(),
            aliases,
        }
    }
}

/// Mutable session state.
#[derive(Debug, Clone)]
pub struct ShellState {
    /// Mirror of the file system's current directory
    pub cwd: String,
    /// Directory before the last successful `cd`, for `cd -`
    pub previous_dir: Option<String>,
    pub env: IndexMap<String, String>,
    pub aliases: IndexMap<String, String>,
    pub history: Vec<String>,
    pub history_cursor: Option<usize>,
    pub draft: String,
    pub started_at: DateTime<Utc>,
}

impl ShellState {
    pub fn new(options: &ShellOptions, cwd: &str) -> Self {
        let mut env = IndexMap::new();
        env.insert("HOME".to_string(), HOME_DIR.to_string());
        env.insert("USER".to_string(), options.user.clone());
        env.insert("HOSTNAME".to_string(), options.hostname.clone());
        env.insert("PWD".to_string(), cwd.to_string());
        for (k, v) in &options.env {
            env.insert(k.clone(), v.clone());
        }
        Self {
            cwd: cwd.to_string(),
            previous_dir: None,
            env,
            aliases: options.aliases.clone(),
            history: Vec::new(),
            history_cursor: None,
            draft: String::new(),
            started_at: Utc::now(),
        }
    }

    /// Update the directory mirror, remembering where we came from when it
    /// changes.
    pub fn set_cwd(&mut self, cwd: &str) {
        if self.cwd != cwd {
            let old = std::mem::replace(&mut self.cwd, cwd.to_string());
            self.env.insert("OLDPWD".to_string(), old.clone());
            self.env.insert("PWD".to_string(), cwd.to_string());
            self.previous_dir = Some(old);
        }
    }
}

/// Result of executing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub input: String,
    pub output: CommandOutput,
    pub exit_code: i32,
    /// Working directory after the command finished
    pub cwd: String,
}

impl ExecResult {
    pub fn text(&self) -> &str {
        self.output.text()
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
