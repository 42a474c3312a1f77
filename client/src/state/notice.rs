//! Transient toast notices raised by session operations.
//!
//! DESIGN
//! ======
//! Notices are plain data with a generated id. The session schedules their
//! removal; the toast stack only renders them.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Upper bound on simultaneously visible notices.
pub const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier for the toast element.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered list of live notices, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append a notice and return its id. Drops the oldest past [`MAX_NOTICES`].
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notice { id: id.clone(), kind, message: message.into() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}
