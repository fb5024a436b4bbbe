use crate::fs::path::tilde_path;

/// `user@host:dir$ ` with the home directory shown as `~`.
pub fn build_prompt(user: &str, hostname: &str, cwd: &str, home: &str) -> String {
    format!("{}@{}:{}$ ", user, hostname, tilde_path(cwd, home))
}
