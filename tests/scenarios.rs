//! End-to-end sessions driven through `Terminal`.

use std::sync::{Arc, Mutex};

use sim_terminal::fs::path::normalize_path;
use sim_terminal::{
    CommandOutput, DestructiveActionReporter, FsError, StateError, Terminal, TerminalOptions,
    UsageStatsRecorder,
};

#[derive(Default)]
struct Integrity(Mutex<Vec<i32>>);

impl DestructiveActionReporter for Integrity {
    fn report_destructive_action(&self, delta: i32) {
        self.0.lock().unwrap().push(delta);
    }
}

#[derive(Default)]
struct Usage(Mutex<Vec<(String, i32)>>);

impl UsageStatsRecorder for Usage {
    fn record_command(&self, name: &str, exit_code: i32) {
        self.0.lock().unwrap().push((name.to_string(), exit_code));
    }
}

fn terminal_with_project() -> Terminal {
    let mut terminal = Terminal::default();
    terminal.fs_mut().create_dir_all("/home/user/projects/app").unwrap();
    terminal
        .fs_mut()
        .create_file("main.txt", "/home/user/projects/app", "hello")
        .unwrap();
    terminal
}

#[test]
fn project_file_can_be_listed_read_and_counted() {
    let mut terminal = terminal_with_project();
    assert_eq!(terminal.exec("cd projects/app").exit_code, 0);

    let ls = terminal.exec("ls");
    assert_eq!(ls.exit_code, 0);
    assert!(ls.text().contains("main.txt"));

    assert_eq!(terminal.exec("cat main.txt").text(), "hello");
    assert_eq!(terminal.exec("wc main.txt").text(), "1 1 5 main.txt\n");
    assert_eq!(terminal.prompt(), "user@workstation:~/projects/app$ ");
}

#[test]
fn rm_needs_recursive_flag_for_directories() {
    let mut terminal = terminal_with_project();
    let before = terminal.fs().len();

    let refused = terminal.exec("rm /home/user/projects");
    assert_eq!(refused.exit_code, 1);
    assert_eq!(terminal.fs().len(), before);

    let removed = terminal.exec("rm -r /home/user/projects");
    assert_eq!(removed.exit_code, 0);
    assert_eq!(terminal.fs().len(), before - 3);
    assert!(!terminal.fs().exists("/home/user/projects/app/main.txt"));
}

#[test]
fn builtin_alias_lists_long_format() {
    let mut terminal = Terminal::default();
    terminal.exec("touch /tmp/notes.txt");
    let aliased = terminal.exec("ll /tmp");
    let direct = terminal.exec("ls -la /tmp");
    assert_eq!(aliased.exit_code, 0);
    assert_eq!(aliased.text(), direct.text());
    assert!(aliased.text().contains("notes.txt"));
}

#[test]
fn repeated_commands_move_to_end_of_history() {
    let mut terminal = Terminal::default();
    terminal.exec("cd /");
    terminal.exec("ls");
    terminal.exec("cd /");
    assert_eq!(terminal.shell().state().history, vec!["ls", "cd /"]);
    assert_eq!(terminal.history_up(), "cd /");
    assert_eq!(terminal.history_up(), "ls");
    assert_eq!(terminal.history_down(), "cd /");
}

#[test]
fn cd_to_missing_directory_keeps_cwd() {
    let mut terminal = Terminal::default();
    let result = terminal.exec("cd /nonexistent");
    assert_eq!(result.exit_code, 1);
    assert!(result.text().contains("No such file or directory"));
    assert_eq!(result.cwd, "/home/user");
    assert_eq!(terminal.exec("pwd").text(), "/home/user\n");
}

#[test]
fn moving_a_directory_carries_descendants() {
    let mut terminal = Terminal::default();
    terminal.exec("mkdir -p /tmp/a/b");
    terminal.exec("echo deep > /tmp/a/b/f.txt");
    terminal.exec("mkdir /tmp/dest");
    let id = terminal.fs().get_node_by_path("/tmp/a/b/f.txt").unwrap().id().clone();

    assert_eq!(terminal.exec("mv /tmp/a /tmp/dest").exit_code, 0);

    let moved = terminal.fs().get_node_by_path("/tmp/dest/a/b/f.txt").unwrap();
    assert_eq!(moved.id(), &id);
    assert_eq!(moved.content(), Some("deep\n"));
    assert!(!terminal.fs().exists("/tmp/a"));
    for node in terminal.fs().nodes() {
        assert!(!node.path().starts_with("/tmp/a/"), "stale path {}", node.path());
    }
}

#[test]
fn renaming_logs_directory_keeps_file_identity() {
    let mut terminal = Terminal::default();
    let log = terminal.fs().get_node_by_path("/data/logs/system.log").unwrap().clone();

    assert_eq!(terminal.exec("mv /data/logs /data/log").exit_code, 0);

    let moved = terminal.fs().get_node_by_path("/data/log/system.log").unwrap();
    assert_eq!(moved.id(), log.id());
    assert_eq!(moved.content(), log.content());
    assert!(!terminal.fs().exists("/data/logs"));
}

#[test]
fn deleting_a_tree_removes_every_descendant_once() {
    let mut terminal = Terminal::default();
    terminal.exec("mkdir -p /tmp/x/y/z");
    terminal.exec("touch /tmp/x/one /tmp/x/y/two");
    let tmp_children = terminal.fs().get_node_by_path("/tmp").unwrap().child_ids().len();
    let before = terminal.fs().len();

    let removed = terminal.fs_mut().delete_node("/tmp/x").unwrap();

    assert_eq!(removed, 5);
    assert_eq!(terminal.fs().len(), before - 5);
    let tmp = terminal.fs().get_node_by_path("/tmp").unwrap();
    assert_eq!(tmp.child_ids().len(), tmp_children - 1);
}

#[test]
fn state_round_trip_preserves_nodes() {
    let mut terminal = terminal_with_project();
    terminal.exec("cd /data/logs");
    let blob = terminal.export_state().unwrap();

    let mut restored = Terminal::default();
    restored.import_state(&blob).unwrap();

    for node in terminal.fs().nodes() {
        let twin = restored.fs().get_node(node.id()).unwrap();
        assert_eq!(twin.path(), node.path());
        assert_eq!(twin.parent(), node.parent());
        assert_eq!(twin.content(), node.content());
    }
    assert_eq!(restored.prompt(), "user@workstation:/data/logs$ ");
}

#[test]
fn invalid_snapshot_leaves_tree_unchanged() {
    let mut terminal = terminal_with_project();
    let before = terminal.fs().tree().clone();

    let mut blob: serde_json::Value =
        serde_json::from_str(&terminal.export_state().unwrap()).unwrap();
    let nodes = blob["filesystem"]["nodes"].as_object_mut().unwrap();
    let file_id = nodes
        .iter()
        .find(|(_, n)| n["name"] == "main.txt")
        .map(|(id, _)| id.clone())
        .unwrap();
    nodes[&file_id]["parent"] = serde_json::Value::String("nobody".to_string());

    let err = terminal.import_state(&blob.to_string()).unwrap_err();
    assert!(matches!(err, StateError::Fs(FsError::MalformedSnapshot { .. })));
    assert_eq!(terminal.fs().tree(), &before);
}

#[test]
fn destructive_commands_report_integrity_loss() {
    let integrity = Arc::new(Integrity::default());
    let usage = Arc::new(Usage::default());
    let mut terminal =
        Terminal::with_collaborators(TerminalOptions::default(), integrity.clone(), usage.clone());

    terminal.exec("rm /tmp/missing");
    terminal.exec("rm readme.txt");
    let blocked = terminal.exec("rm -r /system");
    assert_eq!(blocked.exit_code, 1);
    assert!(terminal.fs().exists("/system/boot.cfg"));
    terminal.exec("rm -rf /");

    assert_eq!(*integrity.0.lock().unwrap(), vec![-5, -15, -50]);
    let names: Vec<String> = usage.0.lock().unwrap().iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names, vec!["rm", "rm", "rm", "rm"]);
}

#[test]
fn control_commands_are_signals_not_text() {
    let mut terminal = Terminal::default();
    terminal.exec("echo hi > /tmp/a");
    let cleared = terminal.exec("clear");
    assert_eq!(cleared.output, CommandOutput::ClearScreen);
    assert_eq!(cleared.text(), "");
    assert_eq!(terminal.exec("exit").output, CommandOutput::RequestExit);
}

#[test]
fn resolved_paths_are_normal() {
    let terminal = Terminal::default();
    for input in ["", ".", "..", "~", "~/a/../b", "/x//y/./z/..", "../../..", "a/b/"] {
        let resolved = terminal.fs().resolve_path(input);
        assert!(resolved.starts_with('/'));
        assert!(!resolved.split('/').any(|s| s == "." || s == ".."));
        assert_eq!(normalize_path(&resolved), resolved);
        assert_eq!(terminal.fs().resolve_path(&resolved), resolved);
    }
}
