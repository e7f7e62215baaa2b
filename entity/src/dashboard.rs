use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard. Derived on request, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub departments_count: usize,
    pub roles_count: usize,
    /// Reviews dated within the trailing 30 days.
    pub recent_reviews: usize,
    /// Mean rating across all reviews; `None` when there are no reviews.
    pub avg_performance: Option<f64>,
}
