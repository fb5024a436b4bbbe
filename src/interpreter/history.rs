//! Input History
//!
//! Recording and up/down navigation over the session's history. Repeated
//! lines move to the end instead of being stored twice.

use super::types::ShellState;

impl ShellState {
    /// Append `input` (trimmed) to history. Blank input is ignored.
    pub fn record_history(&mut self, input: &str, max_history: usize) {
        let line = input.trim();
        if line.is_empty() {
            return;
        }
        self.history.retain(|entry| entry != line);
        self.history.push(line.to_string());
        if self.history.len() > max_history {
            let excess = self.history.len() - max_history;
            self.history.drain(..excess);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_cursor = None;
    }

    /// Step back toward older entries. The first step selects the newest
    /// entry; the oldest entry is sticky.
    pub fn history_up(&mut self) -> String {
        if self.history.is_empty() {
            return self.draft.clone();
        }
        let index = match self.history_cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        self.history[index].clone()
    }

    /// Step toward newer entries. Stepping past the newest entry clears the
    /// selection and the draft.
    pub fn history_down(&mut self) -> String {
        let Some(index) = self.history_cursor else {
            return self.draft.clone();
        };
        if self.history.is_empty() {
            return self.draft.clone();
        }
        if index + 1 >= self.history.len() {
            self.history_cursor = None;
            self.draft.clear();
            return String::new();
        }
        self.history_cursor = Some(index + 1);
        self.history[index + 1].clone()
    }

    pub fn set_draft(&mut self, draft: &str) {
        self.draft = draft.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::types::ShellOptions;

    fn state_with(lines: &[&str]) -> ShellState {
        let mut state = ShellState::new(&ShellOptions::default(), "/");
        for line in lines {
            state.record_history(line, 1000);
        }
        state
    }

    #[test]
    fn test_repeats_move_to_end() {
        let state = state_with(&["cd /", "ls", "cd /"]);
        assert_eq!(state.history, vec!["ls", "cd /"]);
    }

    #[test]
    fn test_blank_and_trimmed() {
        let state = state_with(&["   ", "  ls  ", "ls"]);
        assert_eq!(state.history, vec!["ls"]);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut state = state_with(&[]);
        for i in 0..5 {
            state.record_history(&format!("echo {}", i), 3);
        }
        assert_eq!(state.history, vec!["echo 2", "echo 3", "echo 4"]);
    }

    #[test]
    fn test_navigation() {
        let mut state = state_with(&["one", "two", "three"]);
        assert_eq!(state.history_up(), "three");
        assert_eq!(state.history_up(), "two");
        assert_eq!(state.history_up(), "one");
        assert_eq!(state.history_up(), "one");
        assert_eq!(state.history_down(), "two");
        assert_eq!(state.history_down(), "three");
        assert_eq!(state.history_down(), "");
        assert!(state.history_cursor.is_none());
    }

    #[test]
    fn test_empty_history_returns_draft() {
        let mut state = state_with(&[]);
        state.set_draft("partial");
        assert_eq!(state.history_up(), "partial");
        assert_eq!(state.history_down(), "partial");
        assert!(state.history_cursor.is_none());
    }

    #[test]
    fn test_down_without_selection_returns_draft() {
        let mut state = state_with(&["ls"]);
        state.set_draft("ca");
        assert_eq!(state.history_down(), "ca");
    }

    #[test]
    fn test_down_from_last_clears_draft() {
        let mut state = state_with(&["ls"]);
        state.set_draft("ca");
        assert_eq!(state.history_up(), "ls");
        assert_eq!(state.history_down(), "");
        assert_eq!(state.draft, "");
    }
}
