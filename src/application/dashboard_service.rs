// Dashboard service - Use case for building the dashboard view
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::chart::{ChartConfig, Dataset, Orientation, TickFormat};
use crate::domain::dashboard::{DashboardView, StatText};
use crate::domain::snapshot::{CourseEnrollment, DashboardSnapshot, FeeTrendPoint};
use crate::util::format::{format_currency, format_percent};
use std::sync::Arc;

/// Above this many courses the bar chart flips to horizontal so labels stay readable.
const HORIZONTAL_COURSE_THRESHOLD: usize = 4;

const BAR_PALETTE: [&str; 5] = [
    "rgba(102, 126, 234, 0.8)",
    "rgba(240, 147, 251, 0.8)",
    "rgba(5, 163, 74, 0.8)",
    "rgba(255, 159, 67, 0.8)",
    "rgba(238, 90, 111, 0.8)",
];

const MALE_COLOR: &str = "rgba(102, 126, 234, 0.8)";
const FEMALE_COLOR: &str = "rgba(240, 147, 251, 0.8)";
const TREND_LINE_COLOR: &str = "rgba(102, 126, 234, 1)";
const TREND_FILL_COLOR: &str = "rgba(102, 126, 234, 0.1)";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SnapshotRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SnapshotRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> anyhow::Result<DashboardView> {
        let snapshot = self.repository.fetch_snapshot().await?;

        Ok(DashboardView::new(
            build_statistics(&snapshot),
            build_courses_chart(&snapshot.courses_data),
            build_fees_trend_chart(&snapshot.fee_trend),
        ))
    }
}

/// Map snapshot fields to display-element texts. Two fields appear twice on
/// the page (summary card and sidebar), hence the `_2` ids.
pub fn build_statistics(snapshot: &DashboardSnapshot) -> Vec<StatText> {
    let fees_collected = format_currency(snapshot.fees_collected_month);
    let fees_pending = format_currency(snapshot.fees_pending_month);

    vec![
        StatText::new("total_students", snapshot.total_students.to_string()),
        StatText::new("total_students_2", snapshot.total_students.to_string()),
        StatText::new("total_male", snapshot.total_male.to_string()),
        StatText::new("total_female", snapshot.total_female.to_string()),
        StatText::new("total_day_scholars", snapshot.total_day_scholars.to_string()),
        StatText::new(
            "total_day_scholars_male",
            snapshot.total_day_scholars_male.to_string(),
        ),
        StatText::new(
            "total_day_scholars_female",
            snapshot.total_day_scholars_female.to_string(),
        ),
        StatText::new("total_hostel", snapshot.total_hostel.to_string()),
        StatText::new("total_hostel_male", snapshot.total_hostel_male.to_string()),
        StatText::new(
            "total_hostel_female",
            snapshot.total_hostel_female.to_string(),
        ),
        StatText::new("total_courses", snapshot.total_courses.to_string()),
        StatText::new(
            "new_admissions_this_month",
            snapshot.new_admissions_this_month.to_string(),
        ),
        StatText::new("fees_collected_month", fees_collected.clone()),
        StatText::new("fees_collected_month_2", fees_collected),
        StatText::new("fees_pending_month", fees_pending),
        StatText::new(
            "attendance_percent",
            format_percent(snapshot.attendance_percent),
        ),
    ]
}

/// Per-course enrollment bar chart. Stacked Male/Female datasets when every
/// row carries a gender split, one palette-cycled dataset otherwise.
pub fn build_courses_chart(courses: &[CourseEnrollment]) -> ChartConfig {
    let labels: Vec<String> = courses.iter().map(|c| c.name.clone()).collect();

    let gendered: Option<Vec<(i64, i64)>> = courses.iter().map(|c| c.by_gender()).collect();

    let (datasets, stacked) = match gendered {
        Some(split) if !split.is_empty() => {
            let male = Dataset::new(
                "Male".to_string(),
                split.iter().map(|&(m, _)| m as f64).collect(),
                vec![MALE_COLOR.to_string()],
            );
            let female = Dataset::new(
                "Female".to_string(),
                split.iter().map(|&(_, f)| f as f64).collect(),
                vec![FEMALE_COLOR.to_string()],
            );
            (vec![male, female], true)
        }
        _ => {
            let colors = courses
                .iter()
                .enumerate()
                .map(|(i, _)| BAR_PALETTE[i % BAR_PALETTE.len()].to_string())
                .collect();
            let totals = courses.iter().map(|c| c.total() as f64).collect();
            (
                vec![Dataset::new("Students Enrolled".to_string(), totals, colors)],
                false,
            )
        }
    };

    let mut config = ChartConfig::bar(labels, datasets);
    config.stacked = stacked;
    if courses.len() > HORIZONTAL_COURSE_THRESHOLD {
        config.orientation = Orientation::Horizontal;
    }
    config
}

/// Monthly fee-collection line chart with currency axis ticks.
pub fn build_fees_trend_chart(trend: &[FeeTrendPoint]) -> ChartConfig {
    let labels: Vec<String> = trend.iter().map(|p| p.month.clone()).collect();
    let amounts: Vec<f64> = trend.iter().map(|p| p.amount).collect();

    let dataset = Dataset::new(
        "Fees Collected (Rs.)".to_string(),
        amounts,
        vec![TREND_FILL_COLOR.to_string()],
    )
    .with_border(TREND_LINE_COLOR.to_string())
    .filled();

    let mut config = ChartConfig::line(labels, vec![dataset]);
    config.tick_format = TickFormat::Currency;
    config
}
