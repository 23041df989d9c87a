//! In-app notifications shown in the bell overlay

/// Severity of a notification, controls its icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Info,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
            Severity::Error => "✘",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Relative display time, e.g. "15 minutes ago"
    pub time: String,
    pub read: bool,
    /// Optional call-to-action label
    pub action: Option<String>,
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            severity: Severity::Info,
            title: "t".to_string(),
            message: "m".to_string(),
            time: "now".to_string(),
            read,
            action: None,
        }
    }

    #[test]
    fn test_unread_count() {
        let items = vec![
            notification("1", false),
            notification("2", true),
            notification("3", false),
        ];
        assert_eq!(unread_count(&items), 2);
    }
}
