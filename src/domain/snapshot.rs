// Dashboard snapshot domain model - the JSON payload from /api/dashboard
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSnapshot {
    pub total_students: i64,
    pub total_male: i64,
    pub total_female: i64,
    pub total_day_scholars: i64,
    pub total_day_scholars_male: i64,
    pub total_day_scholars_female: i64,
    pub total_hostel: i64,
    pub total_hostel_male: i64,
    pub total_hostel_female: i64,
    pub total_courses: i64,
    pub new_admissions_this_month: i64,
    pub fees_collected_month: f64,
    pub fees_pending_month: f64,
    pub attendance_percent: f64,
    #[serde(default)]
    pub courses_data: Vec<CourseEnrollment>,
    #[serde(default)]
    pub fee_trend: Vec<FeeTrendPoint>,
}

/// One course row. The API serves either a plain student count or a
/// per-gender breakdown, depending on deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseEnrollment {
    pub name: String,
    #[serde(flatten)]
    pub enrollment: EnrollmentCount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnrollmentCount {
    ByGender { male: i64, female: i64 },
    Total { students: i64 },
}

impl CourseEnrollment {
    pub fn total(&self) -> i64 {
        match self.enrollment {
            EnrollmentCount::ByGender { male, female } => male + female,
            EnrollmentCount::Total { students } => students,
        }
    }

    pub fn by_gender(&self) -> Option<(i64, i64)> {
        match self.enrollment {
            EnrollmentCount::ByGender { male, female } => Some((male, female)),
            EnrollmentCount::Total { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeeTrendPoint {
    pub month: String,
    pub amount: f64,
}
