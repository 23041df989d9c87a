//! Global search over dashboard content
//!
//! The index covers metrics, campaigns, AI insights, and reports. It is
//! built once at startup and handed to the search overlay; nothing in
//! the app reaches for it ambiently.

use super::ui::Page;

/// Maximum results returned per query
const RESULT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Metric,
    Campaign,
    Insight,
    Report,
}

impl SearchCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            SearchCategory::Metric => "◫",
            SearchCategory::Campaign => "➤",
            SearchCategory::Insight => "✦",
            SearchCategory::Report => "≡",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::Metric => "metric",
            SearchCategory::Campaign => "campaign",
            SearchCategory::Insight => "insight",
            SearchCategory::Report => "report",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub category: SearchCategory,
    /// Page the result navigates to when selected
    pub page: Page,
}

/// Read-only search index
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Case-insensitive substring match against title and description.
    /// Blank queries match nothing; results are capped at eight.
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&query)
                    || entry.description.to_lowercase().contains(&query)
            })
            .take(RESULT_LIMIT)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the static dashboard search index
pub fn build_search_index() -> SearchIndex {
    use SearchCategory::*;

    let entry = |title, description, category, page| SearchEntry {
        title,
        description,
        category,
        page,
    };

    SearchIndex::new(vec![
        // Metrics
        entry("Total Revenue", "Current revenue metrics and trends", Metric, Page::Analytics),
        entry("Revenue Trends", "Monthly revenue performance analysis", Metric, Page::Analytics),
        entry("Active Users", "User engagement and activity data", Metric, Page::Audience),
        entry("Conversion Rate", "Conversion performance analytics", Metric, Page::Analytics),
        entry("Growth Rate", "Business growth indicators", Metric, Page::Analytics),
        entry("Live Users", "Real-time active user count", Metric, Page::Realtime),
        entry("Page Views", "Website page view analytics", Metric, Page::Analytics),
        entry("Sessions", "User session data and trends", Metric, Page::Analytics),
        // Campaigns
        entry("Summer Sale 2024", "Seasonal marketing campaign performance", Campaign, Page::Dashboard),
        entry("Brand Awareness Q4", "Brand visibility campaign metrics", Campaign, Page::Dashboard),
        entry("Product Launch", "New product introduction campaign", Campaign, Page::Dashboard),
        entry("Holiday Special", "Holiday season promotional campaign", Campaign, Page::Dashboard),
        entry("Campaign Performance", "Overall campaign analytics and metrics", Campaign, Page::Dashboard),
        // Insights
        entry("Google Ads Performance", "AI-powered Google Ads optimization insights", Insight, Page::AiInsights),
        entry("Facebook Campaign Analysis", "Social media campaign performance analysis", Insight, Page::AiInsights),
        entry("ROI Optimization", "Return on investment improvement suggestions", Insight, Page::AiInsights),
        entry("Audience Segmentation", "Customer segment analysis and recommendations", Insight, Page::Audience),
        entry("AI Insights", "Machine learning recommendations and predictions", Insight, Page::AiInsights),
        entry("Automation", "Marketing automation and workflow optimization", Insight, Page::Automation),
        // Reports
        entry("Monthly Performance Report", "Comprehensive monthly analytics report", Report, Page::Reports),
        entry("Channel Attribution Report", "Multi-channel attribution analysis", Report, Page::Reports),
        entry("Customer Journey Report", "End-to-end customer journey insights", Report, Page::Reports),
        entry("Competitive Analysis Report", "Market competition and positioning analysis", Report, Page::Reports),
        entry("Real-time Report", "Live performance monitoring and alerts", Report, Page::Realtime),
        entry("Audience Report", "Demographics and behavior analysis", Report, Page::Audience),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_nothing() {
        let index = build_search_index();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = build_search_index();
        let results = index.search("SUMMER");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Summer Sale 2024");
    }

    #[test]
    fn test_search_matches_descriptions() {
        let index = build_search_index();
        let results = index.search("attribution");
        assert!(results
            .iter()
            .any(|e| e.title == "Channel Attribution Report"));
    }

    #[test]
    fn test_results_are_capped_at_eight() {
        let index = build_search_index();
        // "a" appears in nearly every entry
        assert_eq!(index.search("a").len(), 8);
    }

    #[test]
    fn test_results_carry_target_page() {
        let index = build_search_index();
        let results = index.search("Live Users");
        assert_eq!(results[0].page, Page::Realtime);
    }
}
