#![forbid(unsafe_code)]

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

// Structured outcome of an admin-facing write. The host renders it; on error
// the submitted text rides along so the form can re-render for retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminNotice {
    pub level: NoticeLevel,
    pub message: String,
    pub retained_text: Option<String>,
}

impl AdminNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            retained_text: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            retained_text: None,
        }
    }

    pub fn error_with_input(message: impl Into<String>, retained_text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            retained_text: Some(retained_text.into()),
        }
    }
}
