//! UI state - presentation types separate from domain data

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Analytics,
    Audience,
    Reports,
    Realtime,
    AiInsights,
    Automation,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 8] {
        [
            Page::Dashboard,
            Page::Analytics,
            Page::Audience,
            Page::Reports,
            Page::Realtime,
            Page::AiInsights,
            Page::Automation,
            Page::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analytics => "Analytics",
            Page::Audience => "Audience",
            Page::Reports => "Reports",
            Page::Realtime => "Real-time",
            Page::AiInsights => "AI Insights",
            Page::Automation => "Automation",
            Page::Settings => "Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Dashboard => "Overview of key metrics and performance indicators",
            Page::Analytics => "Deep dive into your data with advanced analytics",
            Page::Audience => "Understand your customers and their behavior",
            Page::Reports => "Generate comprehensive reports and insights",
            Page::Realtime => "Monitor live activity and real-time events",
            Page::AiInsights => "AI-powered recommendations and predictions",
            Page::Automation => "Automate your marketing workflows and processes",
            Page::Settings => "Configure your account and platform preferences",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pages_have_labels_and_descriptions() {
        for page in Page::all() {
            assert!(!page.label().is_empty());
            assert!(!page.description().is_empty());
        }
    }
}
