// Dashboard page controller - one fetch, then statistics and chart updates
use crate::application::dashboard_service::DashboardService;
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::chart::ChartConfig;
use crate::domain::dashboard::StatText;
use crate::presentation::page::{ChartInstance, Page};
use crate::presentation::toast::{ToastKind, ToastTray};
use std::sync::Arc;

pub const COURSES_CANVAS: &str = "coursesChart";
pub const FEES_TREND_CANVAS: &str = "feesTrendChart";

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data. Please refresh the page.";

/// Element ids the statistics renderer targets.
pub const STAT_ELEMENT_IDS: [&str; 16] = [
    "total_students",
    "total_students_2",
    "total_male",
    "total_female",
    "total_day_scholars",
    "total_day_scholars_male",
    "total_day_scholars_female",
    "total_hostel",
    "total_hostel_male",
    "total_hostel_female",
    "total_courses",
    "new_admissions_this_month",
    "fees_collected_month",
    "fees_collected_month_2",
    "fees_pending_month",
    "attendance_percent",
];

/// Page with the full dashboard element contract registered.
pub fn dashboard_page() -> Page {
    let mut page = Page::new()
        .with_canvas(COURSES_CANVAS)
        .with_canvas(FEES_TREND_CANVAS);
    for id in STAT_ELEMENT_IDS {
        page = page.with_element(id);
    }
    page
}

pub struct DashboardController {
    service: DashboardService,
    page: Page,
    toasts: ToastTray,
    courses_chart: Option<ChartInstance>,
    fees_trend_chart: Option<ChartInstance>,
}

impl DashboardController {
    pub fn new(repository: Arc<dyn SnapshotRepository>, page: Page, toasts: ToastTray) -> Self {
        Self {
            service: DashboardService::new(repository),
            page,
            toasts,
            courses_chart: None,
            fees_trend_chart: None,
        }
    }

    /// One load cycle: fetch, then statistics and both charts. Any failure
    /// degrades to a single banner and leaves prior page state untouched.
    pub async fn load_dashboard(&mut self) {
        match self.service.load().await {
            Ok(view) => {
                self.update_statistics(&view.statistics);
                self.render_courses_chart(view.courses_chart);
                self.render_fees_trend_chart(view.fees_trend_chart);
            }
            Err(e) => {
                tracing::error!("Error loading dashboard data: {e:#}");
                self.page.insert_banner(LOAD_ERROR_MESSAGE);
            }
        }
    }

    fn update_statistics(&mut self, statistics: &[StatText]) {
        for stat in statistics {
            self.page.set_text(stat.element_id, &stat.text);
        }
    }

    fn render_courses_chart(&mut self, config: ChartConfig) {
        Self::swap_chart(&mut self.page, &mut self.courses_chart, COURSES_CANVAS, config);
    }

    fn render_fees_trend_chart(&mut self, config: ChartConfig) {
        Self::swap_chart(
            &mut self.page,
            &mut self.fees_trend_chart,
            FEES_TREND_CANVAS,
            config,
        );
    }

    // Destroy before recreate: at most one live instance per canvas.
    fn swap_chart(
        page: &mut Page,
        slot: &mut Option<ChartInstance>,
        canvas_id: &str,
        config: ChartConfig,
    ) {
        if let Some(previous) = slot.take() {
            page.destroy_chart(previous);
        }
        *slot = page.mount_chart(canvas_id, config);
    }

    pub fn copy_to_clipboard(&mut self, text: &str) {
        if self.page.copy_to_clipboard(text) {
            self.toasts.show("Copied to clipboard!", ToastKind::Success);
        } else {
            tracing::error!("Failed to copy to clipboard");
            self.toasts.show("Failed to copy", ToastKind::Error);
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn courses_chart(&self) -> Option<&ChartInstance> {
        self.courses_chart.as_ref()
    }

    pub fn fees_trend_chart(&self) -> Option<&ChartInstance> {
        self.fees_trend_chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Orientation;
    use crate::domain::snapshot::DashboardSnapshot;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FixedRepository(String);

    #[async_trait]
    impl SnapshotRepository for FixedRepository {
        async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot> {
            Ok(serde_json::from_str(&self.0)?)
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl SnapshotRepository for FailingRepository {
        async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot> {
            anyhow::bail!("connection refused")
        }
    }

    fn sample_json(courses: usize) -> String {
        let courses_data: Vec<String> = (0..courses)
            .map(|i| format!(r#"{{"name": "Course {i}", "students": {}}}"#, 10 + i))
            .collect();
        format!(
            r#"{{
                "total_students": 120, "total_male": 70, "total_female": 50,
                "total_day_scholars": 80, "total_day_scholars_male": 45,
                "total_day_scholars_female": 35, "total_hostel": 40,
                "total_hostel_male": 25, "total_hostel_female": 15,
                "total_courses": {courses}, "new_admissions_this_month": 9,
                "fees_collected_month": 150000.0, "fees_pending_month": 32000.0,
                "attendance_percent": 87.25,
                "courses_data": [{}],
                "fee_trend": [
                    {{"month": "Jan", "amount": 40000.0}},
                    {{"month": "Feb", "amount": 52000.0}}
                ]
            }}"#,
            courses_data.join(","),
        )
    }

    fn controller(repo: Arc<dyn SnapshotRepository>) -> DashboardController {
        DashboardController::new(repo, dashboard_page(), ToastTray::new(Duration::from_secs(5)))
    }

    #[tokio::test]
    async fn test_successful_load_updates_statistics_and_charts() {
        let mut controller = controller(Arc::new(FixedRepository(sample_json(3))));
        controller.load_dashboard().await;

        let page = controller.page();
        assert_eq!(page.text("total_students"), Some("120"));
        assert_eq!(page.text("total_students_2"), Some("120"));
        assert_eq!(page.text("fees_collected_month"), Some("Rs. 1,50,000.00"));
        assert_eq!(page.text("attendance_percent"), Some("87.2%"));
        assert_eq!(page.chart_count(COURSES_CANVAS), 1);
        assert_eq!(page.chart_count(FEES_TREND_CANVAS), 1);
        assert!(page.banners().is_empty());

        let courses = controller.courses_chart().unwrap();
        assert_eq!(courses.config.orientation, Orientation::Vertical);
        assert_eq!(courses.config.labels.len(), 3);
    }

    #[tokio::test]
    async fn test_reload_leaves_one_chart_instance_per_canvas() {
        let mut controller = controller(Arc::new(FixedRepository(sample_json(6))));
        controller.load_dashboard().await;
        controller.load_dashboard().await;

        let page = controller.page();
        assert_eq!(page.chart_count(COURSES_CANVAS), 1);
        assert_eq!(page.chart_count(FEES_TREND_CANVAS), 1);

        // Six courses: the rebuilt chart must be horizontal.
        let courses = controller.courses_chart().unwrap();
        assert_eq!(courses.config.orientation, Orientation::Horizontal);
    }

    #[tokio::test]
    async fn test_failed_load_inserts_one_banner_and_touches_nothing() {
        let mut controller = controller(Arc::new(FailingRepository));
        controller.load_dashboard().await;

        let page = controller.page();
        assert_eq!(page.banners(), [LOAD_ERROR_MESSAGE]);
        assert_eq!(page.text("total_students"), Some(""));
        assert_eq!(page.chart_count(COURSES_CANVAS), 0);
        assert_eq!(page.chart_count(FEES_TREND_CANVAS), 0);
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_prior_render() {
        let mut controller = controller(Arc::new(FixedRepository(sample_json(2))));
        controller.load_dashboard().await;

        controller.service =
            DashboardService::new(Arc::new(FailingRepository) as Arc<dyn SnapshotRepository>);
        controller.load_dashboard().await;

        let page = controller.page();
        assert_eq!(page.banners().len(), 1);
        assert_eq!(page.text("total_students"), Some("120"));
        assert_eq!(page.chart_count(COURSES_CANVAS), 1);
    }

    #[tokio::test]
    async fn test_clipboard_copy_toasts() {
        let mut controller = controller(Arc::new(FailingRepository));
        controller.copy_to_clipboard("REG-2024-001");

        assert_eq!(controller.page().clipboard(), Some("REG-2024-001"));
        let toasts = controller.toasts.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Copied to clipboard!");
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn test_clipboard_failure_toasts_error() {
        let page = dashboard_page().without_clipboard();
        let mut controller = DashboardController::new(
            Arc::new(FailingRepository),
            page,
            ToastTray::new(Duration::from_secs(5)),
        );
        controller.copy_to_clipboard("REG-2024-001");

        let toasts = controller.toasts.active();
        assert_eq!(toasts[0].message, "Failed to copy");
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }
}
