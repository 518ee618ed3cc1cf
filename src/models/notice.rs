use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// A status indicator shown above the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    /// Where to send the browser so the page shell shows this notice.
    pub fn redirect_url(&self) -> String {
        format!(
            "/?level={}&message={}",
            self.level.as_str(),
            urlencoding::encode(&self.message)
        )
    }

    pub fn css_class(&self) -> String {
        format!("notice notice-{}", self.level.as_str())
    }
}

/// Query string carried by the post/redirect/get flow.
#[derive(Deserialize, Debug, Default)]
pub struct NoticeQuery {
    pub level: Option<NoticeLevel>,
    pub message: Option<String>,
}

impl NoticeQuery {
    pub fn into_notice(self) -> Option<Notice> {
        match (self.level, self.message) {
            (Some(level), Some(message)) if !message.is_empty() => Some(Notice { level, message }),
            _ => None,
        }
    }
}
