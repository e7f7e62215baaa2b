//! Dashboard aggregate, derived on request from current records.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use entity::{DashboardStats, Employee, PerformanceReview};

/// Window, counted back from `now`, in which a review is considered recent.
const RECENT_REVIEW_WINDOW_DAYS: i64 = 30;

pub fn dashboard_stats(
    employees: &[Employee],
    roles_count: usize,
    departments_count: usize,
    reviews: &[PerformanceReview],
    now: DateTime<Utc>,
) -> DashboardStats {
    let cutoff = now - Duration::days(RECENT_REVIEW_WINDOW_DAYS);
    let recent_reviews = reviews
        .iter()
        .filter(|review| review.date.and_time(NaiveTime::MIN).and_utc() > cutoff)
        .count();

    DashboardStats {
        total_employees: employees.len(),
        active_employees: employees.iter().filter(|e| e.is_active()).count(),
        departments_count,
        roles_count,
        recent_reviews,
        avg_performance: average_rating(reviews),
    }
}

/// Arithmetic mean of all ratings; `None` for no reviews.
pub fn average_rating(reviews: &[PerformanceReview]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: f64 = reviews.iter().map(|review| review.rating).sum();
    Some(total / reviews.len() as f64)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::seed::demo_dataset;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn seeded_stats_match_dashboard_numbers() {
        let seed = demo_dataset();
        let stats = dashboard_stats(
            &seed.employees,
            seed.roles.len(),
            seed.departments.len(),
            &seed.performance_reviews,
            at(2024, 1, 1),
        );
        assert_eq!(stats.total_employees, 5);
        assert_eq!(stats.active_employees, 4);
        assert_eq!(stats.departments_count, 4);
        assert_eq!(stats.roles_count, 5);
        assert_eq!(stats.recent_reviews, 0);
        assert_eq!(stats.avg_performance, Some(4.125));
    }

    #[test]
    fn recent_window_is_exclusive_at_the_cutoff() {
        let seed = demo_dataset();
        let count = |now| {
            dashboard_stats(&seed.employees, 0, 0, &seed.performance_reviews, now).recent_reviews
        };
        // Feb 5 and Mar 10 fall inside the window.
        assert_eq!(count(at(2023, 3, 6)), 2);
        // Feb 5 midnight sits exactly on the cutoff.
        assert_eq!(count(at(2023, 3, 7)), 1);
    }

    #[test]
    fn no_reviews_means_no_average() {
        assert_eq!(average_rating(&[]), None);
    }
}
