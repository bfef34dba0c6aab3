//! Notices
//!
//! Transient user-facing messages. Every recoverable failure ends up as one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Destructive,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice",
            NoticeKind::Success => "notice success",
            NoticeKind::Destructive => "notice destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind: NoticeKind::Info,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            ..Self::info(title)
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            ..Self::info(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}
