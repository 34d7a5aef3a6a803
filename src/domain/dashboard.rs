// Dashboard view model - everything one load cycle puts on the page
use super::chart::ChartConfig;

/// One statistics field: the display element it targets and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct StatText {
    pub element_id: &'static str,
    pub text: String,
}

impl StatText {
    pub fn new(element_id: &'static str, text: String) -> Self {
        Self { element_id, text }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub statistics: Vec<StatText>,
    pub courses_chart: ChartConfig,
    pub fees_trend_chart: ChartConfig,
}

impl DashboardView {
    pub fn new(
        statistics: Vec<StatText>,
        courses_chart: ChartConfig,
        fees_trend_chart: ChartConfig,
    ) -> Self {
        Self {
            statistics,
            courses_chart,
            fees_trend_chart,
        }
    }
}
