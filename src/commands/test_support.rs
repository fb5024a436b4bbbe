// src/commands/test_support.rs
use super::registry::{create_builtin_registry, CommandRegistry};
use super::types::{Command, CommandContext, CommandResult};
use crate::fs::VirtualFs;
use crate::interpreter::collaborators::recording::RecordingReporter;
use crate::interpreter::types::{ShellOptions, ShellState};

/// A seeded file system plus session, for running single handlers.
pub(crate) struct TestEnv {
    pub fs: VirtualFs,
    pub state: ShellState,
    pub options: ShellOptions,
    pub reporter: RecordingReporter,
    pub registry: CommandRegistry,
}

impl TestEnv {
    pub fn new() -> Self {
        let fs = VirtualFs::new();
        let options = ShellOptions::default();
        let state = ShellState::new(&options, fs.current_directory());
        Self {
            fs,
            state,
            options,
            reporter: RecordingReporter::default(),
            registry: create_builtin_registry(),
        }
    }

    /// Seed a file at an absolute path, creating parent directories.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let parent = crate::fs::path::dirname(path);
        let name = crate::fs::path::basename(path);
        self.fs.create_dir_all(&parent).unwrap();
        self.fs.create_file(&name, &parent, content).unwrap();
        self
    }

    pub fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> CommandResult {
        let mut ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            fs: &mut self.fs,
            state: &mut self.state,
            options: &self.options,
            reporter: &self.reporter,
            registry: &self.registry,
        };
        cmd.execute(&mut ctx)
    }
}
