//! Terminal
//!
//! One file system and one shell bundled together, plus the full-state blob
//! a storage collaborator persists between sessions.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::fs::{FsError, FsTree, VirtualFs};
use crate::interpreter::collaborators::{
    DestructiveActionReporter, NoopReporter, NoopStats, UsageStatsRecorder,
};
use crate::interpreter::{ExecResult, Shell, ShellOptions};

#[derive(Error, Debug)]
pub enum StateError {
    #[error("invalid state blob: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Options for creating a terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalOptions {
    pub shell: ShellOptions,
    /// Working directory to start in instead of the home directory
    pub start_dir: Option<String>,
}

impl TerminalOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, StateError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StateError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Session part of the persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub history: Vec<String>,
    pub aliases: IndexMap<String, String>,
    pub env: IndexMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TerminalState {
    filesystem: FsTree,
    session: SessionState,
}

#[derive(Debug)]
pub struct Terminal {
    fs: VirtualFs,
    shell: Shell,
    start_dir: Option<String>,
}

impl Terminal {
    pub fn new(options: TerminalOptions) -> Self {
        Self::with_collaborators(options, Arc::new(NoopReporter), Arc::new(NoopStats))
    }

    pub fn with_collaborators(
        options: TerminalOptions,
        reporter: Arc<dyn DestructiveActionReporter>,
        stats: Arc<dyn UsageStatsRecorder>,
    ) -> Self {
        let mut fs = VirtualFs::new();
        enter_start_dir(&mut fs, options.start_dir.as_deref());
        let shell = Shell::with_collaborators(options.shell, fs.current_directory(), reporter, stats);
        Self {
            fs,
            shell,
            start_dir: options.start_dir,
        }
    }

    pub fn exec(&mut self, input: &str) -> ExecResult {
        self.shell.exec(&mut self.fs, input)
    }

    pub fn prompt(&self) -> String {
        self.shell.prompt(&self.fs)
    }

    pub fn history_up(&mut self) -> String {
        self.shell.history_up()
    }

    pub fn history_down(&mut self) -> String {
        self.shell.history_down()
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.shell.set_draft(draft);
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Serialize the file system and the session.
    pub fn export_state(&self) -> Result<String, StateError> {
        let state = self.shell.state();
        let blob = TerminalState {
            filesystem: self.fs.tree().clone(),
            session: SessionState {
                history: state.history.clone(),
                aliases: state.aliases.clone(),
                env: state.env.clone(),
            },
        };
        Ok(serde_json::to_string(&blob)?)
    }

    /// Restore a blob produced by [`Terminal::export_state`]. On error
    /// nothing changes.
    pub fn import_state(&mut self, blob: &str) -> Result<(), StateError> {
        let decoded: TerminalState = serde_json::from_str(blob)?;
        self.fs.import_tree(decoded.filesystem)?;

        let cwd = self.fs.current_directory().to_string();
        self.shell.reset_session(&cwd);
        let max_history = self.shell.options().max_history;
        let state = self.shell.state_mut();
        for line in &decoded.session.history {
            state.record_history(line, max_history);
        }
        state.aliases = decoded.session.aliases;
        state.env = decoded.session.env;
        state.env.insert("PWD".to_string(), cwd);
        tracing::info!(history = state.history.len(), "terminal state restored");
        Ok(())
    }

    /// Back to the starter layout with a fresh session.
    pub fn reset(&mut self) {
        self.fs.reset_to_seed();
        enter_start_dir(&mut self.fs, self.start_dir.as_deref());
        let cwd = self.fs.current_directory().to_string();
        self.shell.reset_session(&cwd);
        tracing::info!("terminal reset");
    }
}

fn enter_start_dir(fs: &mut VirtualFs, start_dir: Option<&str>) {
    if let Some(dir) = start_dir {
        if let Err(e) = fs.set_current_directory(dir) {
            tracing::warn!(dir, error = %e, "start directory unavailable, staying home");
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(TerminalOptions::default())
    }
}

/// A terminal shared between tasks. Each call holds the lock for the whole
/// invocation, so commands never interleave.
#[derive(Debug, Clone)]
pub struct SharedTerminal {
    inner: Arc<Mutex<Terminal>>,
}

impl SharedTerminal {
    pub fn new(terminal: Terminal) -> Self {
        Self {
            inner: Arc::new(Mutex::new(terminal)),
        }
    }

    pub async fn exec(&self, input: &str) -> ExecResult {
        self.inner.lock().await.exec(input)
    }

    pub async fn prompt(&self) -> String {
        self.inner.lock().await.prompt()
    }

    pub async fn export_state(&self) -> Result<String, StateError> {
        self.inner.lock().await.export_state()
    }

    pub async fn import_state(&self, blob: &str) -> Result<(), StateError> {
        self.inner.lock().await.import_state(blob)
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset();
    }

    /// Run `f` with exclusive access to the terminal.
    pub async fn with<R>(&self, f: impl FnOnce(&mut Terminal) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
