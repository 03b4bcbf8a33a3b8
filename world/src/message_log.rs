//! Bounded, insertion-ordered message log.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub(crate) struct MessageLog {
    capacity: usize,
    entries: VecDeque<String>,
}

impl MessageLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a line, evicting the oldest ones once the log is full.
    pub(crate) fn push(&mut self, text: String) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            let _ = self.entries.pop_front();
        }
        self.entries.push_back(text);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::MessageLog;

    #[test]
    fn evicts_oldest_entries_first() {
        let mut log = MessageLog::with_capacity(3);
        for index in 0..5 {
            log.push(format!("line {index}"));
        }
        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn zero_capacity_discards_everything() {
        let mut log = MessageLog::with_capacity(0);
        log.push("ignored".to_owned());
        assert_eq!(log.iter().count(), 0);
    }
}
