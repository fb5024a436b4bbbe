// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Look up a command; names are matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(&name.to_lowercase())
            .map(|c| c.as_ref())
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::alias_cmd::{AliasCommand, UnaliasCommand};
use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::env::{EnvCommand, ExportCommand};
use super::exit_cmd::ExitCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::hostname_cmd::HostnameCommand;
use super::ls::LsCommand;
use super::man_cmd::ManCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::uname_cmd::UnameCommand;
use super::uptime_cmd::UptimeCommand;
use super::wc::WcCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every built-in command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    // navigation
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    // file operations
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(EchoCommand));
    // introspection
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(HostnameCommand));
    registry.register(Box::new(UnameCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(UptimeCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(ManCommand));
    registry.register(Box::new(HelpCommand));
    // text utilities
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(GrepCommand));
    // session
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(AliasCommand));
    registry.register(Box::new(UnaliasCommand));
    registry.register(Box::new(ExportCommand));
    registry.register(Box::new(EnvCommand));
}

/// Create a registry holding every built-in command.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
