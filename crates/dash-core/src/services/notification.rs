//! Transient notices shown after a mutation

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

/// Notices waiting to be shown. Rendering drains the queue; the page script
/// dismisses each notice after a fixed delay.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.pending.push(Notice {
            message: message.into(),
            level,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, NoticeLevel::Success);
    }

    pub fn peek(&self) -> &[Notice] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = NoticeQueue::default();
        queue.success("User added successfully");
        queue.push("Heads up", NoticeLevel::Info);
        let notices = queue.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(queue.peek().is_empty());
    }
}
