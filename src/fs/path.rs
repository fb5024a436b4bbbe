//! Path utilities
//!
//! Pure string functions; none of these touch the node tree.

/// Normalize an absolute path: drop empty and `.` segments, apply `..`
/// (never above root), rejoin with a leading `/`.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve user input against a working directory and home directory.
pub fn resolve_path(cwd: &str, home: &str, input: &str) -> String {
    if input.is_empty() || input == "." {
        return cwd.to_string();
    }
    if input == "~" {
        return normalize_path(home);
    }
    if let Some(rest) = input.strip_prefix("~/") {
        return normalize_path(&format!("{}/{}", home, rest));
    }
    if input.starts_with('/') {
        return normalize_path(input);
    }
    normalize_path(&format!("{}/{}", cwd, input))
}

pub fn dirname(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => normalized[..pos].to_string(),
    }
}

pub fn basename(path: &str) -> String {
    let normalized = normalize_path(path);
    normalized.rsplit('/').next().unwrap_or("").to_string()
}

/// Join a parent path and a child name.
pub fn join(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// True when `path` equals `ancestor` or lies beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Render `path` relative to the home directory using `~`.
pub fn tilde_path(path: &str, home: &str) -> String {
    if path == home {
        return "~".to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{}", rest),
        _ => path.to_string(),
    }
}
