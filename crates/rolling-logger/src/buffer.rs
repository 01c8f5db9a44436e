//! Circular buffer of the most recent log lines

use std::collections::VecDeque;

/// Keeps the last `capacity` complete lines written through it
#[derive(Debug)]
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        }
    }

    /// Feed raw writer output; only newline-terminated lines are kept
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(bytes));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            self.push_line(line.trim_end_matches(['\n', '\r']).to_string());
        }
    }

    fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_complete_lines() {
        let mut recent = RecentLines::new(4);
        recent.push_bytes(b"first\nsec");
        assert_eq!(recent.lines(), vec!["first"]);

        recent.push_bytes(b"ond\r\n");
        assert_eq!(recent.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let mut recent = RecentLines::new(2);
        recent.push_bytes(b"a\nb\nc\n");
        assert_eq!(recent.lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut recent = RecentLines::new(0);
        recent.push_bytes(b"a\n");
        assert!(recent.lines().is_empty());
    }
}
