//! Synthetic data generation
//!
//! Everything the dashboard shows is generated in-memory at startup (or
//! on demand via the regenerate action). Generation is seeded so a given
//! seed always produces the same dataset, which keeps the UI and tests
//! reproducible.

use super::campaign::{Campaign, Status};
use super::metrics::{ChannelPoint, Metric, MonthlyPoint, SourcePoint, Trend};
use super::notification::{Notification, Severity};

const CAMPAIGN_NAMES: [&str; 12] = [
    "Summer Sale 2024",
    "Brand Awareness Q4",
    "Product Launch",
    "Holiday Special",
    "Back to School",
    "Black Friday",
    "New Year Campaign",
    "Spring Collection",
    "Customer Retention",
    "Lead Generation",
    "Mobile App Install",
    "Video Campaign",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CHANNELS: [&str; 6] = [
    "Google Ads",
    "Facebook",
    "Instagram",
    "LinkedIn",
    "Twitter",
    "YouTube",
];

/// Small seeded generator (xorshift64*), enough for bounded mock values
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift state must be nonzero
        Self {
            state: if seed == 0 { 0x9E3779B97F4A7C15 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Integer in [lo, hi)
    pub fn range(&mut self, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo < hi);
        lo + self.next() % (hi - lo)
    }

    /// Decimal in [lo, hi) rounded to two places
    pub fn decimal(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next() >> 11) as f64 / (1u64 << 53) as f64;
        let value = lo + unit * (hi - lo);
        (value * 100.0).round() / 100.0
    }
}

/// Generate the twelve canonical campaign rows
pub fn generate_campaigns(rng: &mut Rng) -> Vec<Campaign> {
    let statuses = Status::all();

    CAMPAIGN_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let month = rng.range(1, 13);
            let day = rng.range(1, 29);
            Campaign {
                id: format!("campaign-{}", i + 1),
                name: name.to_string(),
                status: statuses[rng.range(0, 3) as usize],
                budget: rng.range(10_000, 60_000) as f64,
                spent: rng.range(5_000, 45_000) as f64,
                clicks: rng.range(1_000, 11_000),
                conversions: rng.range(50, 550),
                ctr: rng.decimal(1.0, 11.0),
                cpc: rng.decimal(0.5, 5.5),
                roas: rng.decimal(2.0, 7.0),
                date: format!("{}/{}/2024", month, day),
            }
        })
        .collect()
}

/// The four headline metric cards
pub fn generate_metrics() -> Vec<Metric> {
    let metric = |title: &str, value: &str, change: f64, trend| Metric {
        title: title.to_string(),
        value: value.to_string(),
        change,
        trend,
    };

    vec![
        metric("Total Revenue", "$847,629", 12.5, Trend::Up),
        metric("Active Users", "24,847", 8.2, Trend::Up),
        metric("Conversion Rate", "3.42%", -2.1, Trend::Down),
        metric("Growth Rate", "18.7%", 15.3, Trend::Up),
    ]
}

/// Nudge metric deltas to simulate a live feed (called on a slow tick)
pub fn refresh_metrics(rng: &mut Rng, metrics: &mut [Metric]) {
    for metric in metrics {
        metric.change = rng.decimal(-10.0, 10.0);
        metric.trend = if rng.range(0, 2) == 0 {
            Trend::Down
        } else {
            Trend::Up
        };
    }
}

/// Twelve months of revenue/users/conversions for the trend chart
pub fn generate_revenue_series(rng: &mut Rng) -> Vec<MonthlyPoint> {
    MONTHS
        .iter()
        .map(|month| MonthlyPoint {
            month: *month,
            revenue: rng.range(50_000, 150_000),
            users: rng.range(2_000, 7_000),
            conversions: rng.range(200, 700),
        })
        .collect()
}

/// Per-channel spend for the bar chart
pub fn generate_channels(rng: &mut Rng) -> Vec<ChannelPoint> {
    CHANNELS
        .iter()
        .map(|channel| ChannelPoint {
            channel: *channel,
            spend: rng.range(20_000, 100_000),
        })
        .collect()
}

/// Traffic source shares for the breakdown panel; percentages sum to 100
pub fn generate_traffic_sources() -> Vec<SourcePoint> {
    vec![
        SourcePoint {
            source: "Organic Search",
            share: 35,
        },
        SourcePoint {
            source: "Paid Ads",
            share: 28,
        },
        SourcePoint {
            source: "Social Media",
            share: 22,
        },
        SourcePoint {
            source: "Email",
            share: 10,
        },
        SourcePoint {
            source: "Direct",
            share: 5,
        },
    ]
}

/// The fixed set of seed notifications
pub fn seed_notifications() -> Vec<Notification> {
    let notification = |id: &str, severity, title: &str, message: &str, time: &str, read, action: Option<&str>| {
        Notification {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
            action: action.map(str::to_string),
        }
    };

    vec![
        notification(
            "1",
            Severity::Success,
            "Campaign Performance",
            "Summer Sale campaign exceeded target by 23%",
            "2 minutes ago",
            false,
            Some("View Details"),
        ),
        notification(
            "2",
            Severity::Warning,
            "Budget Alert",
            "Google Ads campaign is 85% through daily budget",
            "15 minutes ago",
            false,
            Some("Adjust Budget"),
        ),
        notification(
            "3",
            Severity::Info,
            "New Audience Segment",
            "AI discovered high-value audience segment",
            "1 hour ago",
            true,
            Some("Explore"),
        ),
        notification(
            "4",
            Severity::Success,
            "Conversion Milestone",
            "Reached 1,000 conversions this month",
            "2 hours ago",
            true,
            None,
        ),
        notification(
            "5",
            Severity::Error,
            "Integration Issue",
            "Facebook Ads connection needs attention",
            "3 hours ago",
            false,
            Some("Fix Now"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_data() {
        let a = generate_campaigns(&mut Rng::new(42));
        let b = generate_campaigns(&mut Rng::new(42));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.budget, y.budget);
            assert_eq!(x.date, y.date);
        }
    }

    #[test]
    fn test_twelve_campaigns_with_unique_ids() {
        let campaigns = generate_campaigns(&mut Rng::new(7));
        assert_eq!(campaigns.len(), 12);

        let ids: HashSet<&str> = campaigns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert!(campaigns.iter().any(|c| c.name == "Summer Sale 2024"));
    }

    #[test]
    fn test_generated_values_are_in_bounds() {
        let campaigns = generate_campaigns(&mut Rng::new(99));
        for c in campaigns {
            assert!((10_000.0..60_000.0).contains(&c.budget));
            assert!((5_000.0..45_000.0).contains(&c.spent));
            assert!((1_000..11_000).contains(&c.clicks));
            assert!((50..550).contains(&c.conversions));
            assert!((1.0..11.0).contains(&c.ctr));
            assert!((0.5..5.5).contains(&c.cpc));
            assert!((2.0..7.0).contains(&c.roas));
            assert!(c.date.ends_with("/2024"));
        }
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = Rng::new(1);
        for _ in 0..1000 {
            let v = rng.range(5, 8);
            assert!((5..8).contains(&v));
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = Rng::new(0);
        // Must not get stuck at zero state
        assert_ne!(rng.range(0, u64::MAX), rng.range(0, u64::MAX));
    }

    #[test]
    fn test_traffic_sources_cover_all_traffic() {
        let sources = generate_traffic_sources();
        assert_eq!(sources.len(), 5);
        assert_eq!(sources.iter().map(|s| s.share).sum::<u64>(), 100);
        assert_eq!(sources[0].source, "Organic Search");
        // Largest share first so the panel reads top-down
        assert!(sources.windows(2).all(|w| w[0].share >= w[1].share));
    }

    #[test]
    fn test_refresh_metrics_keeps_titles() {
        let mut rng = Rng::new(3);
        let mut metrics = generate_metrics();
        refresh_metrics(&mut rng, &mut metrics);
        assert_eq!(metrics[0].title, "Total Revenue");
        assert!((-10.0..=10.0).contains(&metrics[0].change));
    }
}
