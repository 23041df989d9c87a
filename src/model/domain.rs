//! Domain state - business/data state separate from UI concerns

use super::campaign::Campaign;
use super::metrics::{ChannelPoint, Metric, MonthlyPoint, SourcePoint};
use super::mock::{self, Rng};
use super::notification::Notification;
use super::search::{build_search_index, SearchIndex};

/// All data behind the dashboard, generated from a single seed
pub struct DomainState {
    pub campaigns: Vec<Campaign>,
    pub metrics: Vec<Metric>,
    pub revenue: Vec<MonthlyPoint>,
    pub channels: Vec<ChannelPoint>,
    pub traffic: Vec<SourcePoint>,
    pub notifications: Vec<Notification>,
    pub search_index: SearchIndex,
    /// Seed the current dataset was generated from
    pub seed: u64,
    /// Generator carried forward for live metric refreshes
    rng: Rng,
}

impl DomainState {
    pub fn generate(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        Self {
            campaigns: mock::generate_campaigns(&mut rng),
            metrics: mock::generate_metrics(),
            revenue: mock::generate_revenue_series(&mut rng),
            channels: mock::generate_channels(&mut rng),
            traffic: mock::generate_traffic_sources(),
            notifications: mock::seed_notifications(),
            search_index: build_search_index(),
            seed,
            rng,
        }
    }

    /// Replace the dataset with one generated from a fresh seed.
    /// Notifications, traffic shares, and the search index are static
    /// and survive as-is.
    pub fn regenerate(&mut self, seed: u64) {
        let mut rng = Rng::new(seed);
        self.campaigns = mock::generate_campaigns(&mut rng);
        self.revenue = mock::generate_revenue_series(&mut rng);
        self.channels = mock::generate_channels(&mut rng);
        self.seed = seed;
        self.rng = rng;
    }

    /// Simulate a live metrics feed tick
    pub fn refresh_metrics(&mut self) {
        mock::refresh_metrics(&mut self.rng, &mut self.metrics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_populates_everything() {
        let domain = DomainState::generate(11);
        assert_eq!(domain.campaigns.len(), 12);
        assert_eq!(domain.metrics.len(), 4);
        assert_eq!(domain.revenue.len(), 12);
        assert_eq!(domain.channels.len(), 6);
        assert_eq!(domain.traffic.len(), 5);
        assert_eq!(domain.notifications.len(), 5);
        assert!(!domain.search_index.is_empty());
    }

    #[test]
    fn test_regenerate_replaces_campaigns() {
        let mut domain = DomainState::generate(1);
        let before: Vec<f64> = domain.campaigns.iter().map(|c| c.budget).collect();
        domain.regenerate(2);
        let after: Vec<f64> = domain.campaigns.iter().map(|c| c.budget).collect();
        assert_ne!(before, after);
        assert_eq!(domain.seed, 2);
    }
}
