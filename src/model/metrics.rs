//! Headline metrics and chart series for the dashboard

/// Direction of a metric's change since the last period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// One headline metric card
#[derive(Debug, Clone)]
pub struct Metric {
    pub title: String,
    pub value: String,
    /// Percent change, signed
    pub change: f64,
    pub trend: Trend,
}

/// One month of the revenue trend series
#[derive(Debug, Clone)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub revenue: u64,
    pub users: u64,
    pub conversions: u64,
}

/// One labeled bar of the channel spend chart
#[derive(Debug, Clone)]
pub struct ChannelPoint {
    pub channel: &'static str,
    pub spend: u64,
}

/// One slice of the traffic sources breakdown, as a percent of total
#[derive(Debug, Clone)]
pub struct SourcePoint {
    pub source: &'static str,
    pub share: u64,
}
