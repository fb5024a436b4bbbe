//! Starter layout
//!
//! The fixed tree every new environment begins with.

use super::types::NodeKind;
use super::virtual_fs::{VirtualFs, HOME_DIR};

const BOOT_CFG: &str = "\
# core boot configuration (managed by the system)
kernel=simcore-2.4
integrity_checks=enabled
";

const README_TXT: &str = "\
Welcome to your training workstation.

Use `ls`, `cd` and `cat` to look around, and `man <command>` to learn more.
Your missions are waiting in /missions.
";

const PROFILE: &str = "\
# ~/.profile: executed by the shell at login
export PATH=/bin:/usr/bin
alias ll=\"ls -la\"
alias la=\"ls -a\"
";

const SYSTEM_LOG: &str = "\
[boot] system initialized
[boot] mounting virtual filesystem
[info] user session opened
";

enum SeedEntry {
    Dir(&'static str),
    File(&'static str, &'static str),
}

struct Seed {
    parent: &'static str,
    entry: SeedEntry,
    read_only: bool,
}

const fn dir(parent: &'static str, name: &'static str) -> Seed {
    Seed { parent, entry: SeedEntry::Dir(name), read_only: false }
}

const fn file(parent: &'static str, name: &'static str, content: &'static str) -> Seed {
    Seed { parent, entry: SeedEntry::File(name, content), read_only: false }
}

const fn locked(seed: Seed) -> Seed {
    Seed { read_only: true, ..seed }
}

// Parents always precede their children.
const LAYOUT: &[Seed] = &[
    locked(dir("/", "system")),
    locked(file("/system", "boot.cfg", BOOT_CFG)),
    dir("/", "home"),
    dir("/home", "user"),
    file(HOME_DIR, "readme.txt", README_TXT),
    file(HOME_DIR, ".profile", PROFILE),
    dir("/", "missions"),
    dir("/", "data"),
    dir("/data", "logs"),
    file("/data/logs", "system.log", SYSTEM_LOG),
    dir("/", "snapshots"),
    dir("/", "tmp"),
];

impl VirtualFs {
    /// Replace the whole tree with the starter layout. The current directory
    /// becomes the home directory.
    pub fn reset_to_seed(&mut self) {
        let mut fresh = VirtualFs::empty();
        for seed in LAYOUT {
            let Some(parent_id) = fresh.get_node_by_path(seed.parent).map(|n| n.id().clone()) else {
                continue;
            };
            let (name, kind) = match seed.entry {
                SeedEntry::Dir(name) => (name, NodeKind::Directory { children: Vec::new() }),
                SeedEntry::File(name, content) => {
                    (name, NodeKind::File { content: content.to_string() })
                }
            };
            fresh.attach(&parent_id, seed.parent, name, kind, seed.read_only);
        }
        if let Some(home) = fresh.get_node_by_path(HOME_DIR).map(|n| n.id().clone()) {
            fresh.tree.cwd = home;
        }
        tracing::info!(nodes = fresh.len(), "filesystem reset to starter layout");
        *self = fresh;
    }
}
