//! Read-side helpers over list snapshots.
//!
//! The store only expands employee reviews; everything else a directory view
//! needs (search, joins, per-department rollups, chart series) is computed
//! here from the lists the store returns.

use std::collections::HashMap;

use entity::{Department, Employee, EmployeeStatus, PerformanceReview, Role};
use serde::Serialize;

const STRENGTH_WEIGHT: f64 = 1.0;
const IMPROVEMENT_WEIGHT: f64 = -0.5;
const SKILL_BASELINE: f64 = 2.5;
const SKILL_SCALE: f64 = 5.0;
const SKILL_MAX: f64 = 5.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive substring over first name, last name and email.
    /// An empty string matches everyone.
    pub search: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub department_id: Option<String>,
    pub role_id: Option<String>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let matches_search = match normalized_needle(self.search.as_deref()) {
            Some(needle) => [&employee.first_name, &employee.last_name, &employee.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle)),
            None => true,
        };
        matches_search
            && self.status.is_none_or(|status| employee.status == status)
            && self
                .department_id
                .as_deref()
                .is_none_or(|id| employee.department_id == id)
            && self.role_id.as_deref().is_none_or(|id| employee.role_id == id)
    }

    pub fn apply(&self, employees: Vec<Employee>) -> Vec<Employee> {
        employees.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleFilter {
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
    pub department_id: Option<String>,
    pub level: Option<u8>,
}

impl RoleFilter {
    pub fn matches(&self, role: &Role) -> bool {
        let matches_search = match normalized_needle(self.search.as_deref()) {
            Some(needle) => {
                role.title.to_lowercase().contains(&needle)
                    || role.description.to_lowercase().contains(&needle)
            }
            None => true,
        };
        matches_search
            && self
                .department_id
                .as_deref()
                .is_none_or(|id| role.department_id == id)
            && self.level.is_none_or(|level| role.level == level)
    }

    pub fn apply(&self, roles: Vec<Role>) -> Vec<Role> {
        roles.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn normalized_needle(search: Option<&str>) -> Option<String> {
    search.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

pub fn find_role<'a>(roles: &'a [Role], id: &str) -> Option<&'a Role> {
    roles.iter().find(|role| role.id == id)
}

pub fn find_department<'a>(departments: &'a [Department], id: &str) -> Option<&'a Department> {
    departments.iter().find(|department| department.id == id)
}

/// One department with the employees assigned to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentOverview {
    pub department: Department,
    pub employees: Vec<Employee>,
    pub headcount: usize,
    /// First member (in insertion order) holding a manager role.
    pub manager: Option<Employee>,
}

pub fn department_overview(
    departments: &[Department],
    employees: &[Employee],
    roles: &[Role],
) -> Vec<DepartmentOverview> {
    departments
        .iter()
        .map(|department| {
            let members: Vec<Employee> = employees
                .iter()
                .filter(|e| e.department_id == department.id)
                .cloned()
                .collect();
            let manager = members
                .iter()
                .find(|e| find_role(roles, &e.role_id).is_some_and(|role| role.is_manager))
                .cloned();
            DepartmentOverview {
                department: department.clone(),
                headcount: members.len(),
                employees: members,
                manager,
            }
        })
        .collect()
}

/// The `limit` most recently hired employees, newest first.
pub fn recent_hires(employees: &[Employee], limit: usize) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));
    sorted.truncate(limit);
    sorted
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatingPoint {
    /// Month label such as `Jan 2023`.
    pub label: String,
    pub rating: f64,
}

pub fn rating_timeline(reviews: &[PerformanceReview]) -> Vec<RatingPoint> {
    reviews
        .iter()
        .map(|review| RatingPoint {
            label: review.date.format("%b %Y").to_string(),
            rating: review.rating,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillScore {
    pub skill: String,
    /// 0.0 to 5.0, 2.5 when strengths and improvement areas cancel out.
    pub value: f64,
}

/// Scores each skill mentioned across `reviews`.
///
/// A strength adds 1, an area to improve subtracts 0.5; the sum is divided by
/// the number of reviews, scaled by 5 around a baseline of 2.5 and clamped to
/// the 0 to 5 range. Skills keep the order they were first mentioned in.
pub fn skill_profile(reviews: &[PerformanceReview]) -> Vec<SkillScore> {
    if reviews.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for review in reviews {
        let weighted = review
            .strengths
            .iter()
            .map(|skill| (skill.as_str(), STRENGTH_WEIGHT))
            .chain(
                review
                    .areas_to_improve
                    .iter()
                    .map(|skill| (skill.as_str(), IMPROVEMENT_WEIGHT)),
            );
        for (skill, weight) in weighted {
            let total = totals.entry(skill).or_insert_with(|| {
                order.push(skill);
                0.0
            });
            *total += weight;
        }
    }

    let review_count = reviews.len() as f64;
    order
        .into_iter()
        .map(|skill| {
            let total = totals.get(skill).copied().unwrap_or_default();
            let value = (total / review_count * SKILL_SCALE + SKILL_BASELINE).clamp(0.0, SKILL_MAX);
            SkillScore {
                skill: skill.to_string(),
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_dataset;

    #[test]
    fn employee_search_is_case_insensitive_across_fields() {
        let seed = demo_dataset();
        let filter = EmployeeFilter {
            search: Some("SMITH".into()),
            ..EmployeeFilter::default()
        };
        let hits = filter.apply(seed.employees.clone());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Jane");

        // Whitespace is matched literally, only "" means no search.
        let spaces = EmployeeFilter {
            search: Some("  ".into()),
            ..EmployeeFilter::default()
        };
        assert!(spaces.apply(seed.employees.clone()).is_empty());

        let by_email = EmployeeFilter {
            search: Some("robert.brown@".into()),
            ..EmployeeFilter::default()
        };
        assert_eq!(by_email.apply(seed.employees).len(), 1);
    }

    #[test]
    fn employee_criteria_are_combined() {
        let seed = demo_dataset();
        let filter = EmployeeFilter {
            status: Some(EmployeeStatus::Active),
            department_id: Some("1".into()),
            ..EmployeeFilter::default()
        };
        let ids: Vec<String> = filter
            .apply(seed.employees.clone())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);

        let none = EmployeeFilter {
            status: Some(EmployeeStatus::OnLeave),
            role_id: Some("1".into()),
            ..EmployeeFilter::default()
        };
        assert!(none.apply(seed.employees).is_empty());
    }

    #[test]
    fn role_filter_matches_description_and_level() {
        let seed = demo_dataset();
        let filter = RoleFilter {
            search: Some("officer".into()),
            level: Some(4),
            ..RoleFilter::default()
        };
        let titles: Vec<String> = filter
            .apply(seed.roles)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["CTO"]);
    }

    #[test]
    fn overview_counts_members_and_finds_manager() {
        let seed = demo_dataset();
        let overview = department_overview(&seed.departments, &seed.employees, &seed.roles);
        assert_eq!(overview.len(), 4);
        let executive = &overview[0];
        assert_eq!(executive.headcount, 2);
        assert_eq!(executive.manager.as_ref().unwrap().first_name, "John");
        let engineering = &overview[1];
        assert_eq!(engineering.headcount, 1);
        // Senior Developer is not a manager role.
        assert!(engineering.manager.is_none());
    }

    #[test]
    fn recent_hires_are_newest_first() {
        let seed = demo_dataset();
        let names: Vec<String> = recent_hires(&seed.employees, 3)
            .into_iter()
            .map(|e| e.first_name)
            .collect();
        assert_eq!(names, vec!["Robert", "Michael", "John"]);
    }

    #[test]
    fn timeline_uses_month_labels() {
        let seed = demo_dataset();
        let points = rating_timeline(&seed.performance_reviews);
        assert_eq!(points[0].label, "Jan 2023");
        assert_eq!(points[3].label, "Mar 2023");
        assert_eq!(points[3].rating, 4.0);
    }

    #[test]
    fn skill_profile_scales_around_baseline() {
        let seed = demo_dataset();
        let jane: Vec<PerformanceReview> = seed
            .performance_reviews
            .into_iter()
            .filter(|r| r.employee_id == "2")
            .collect();
        let profile = skill_profile(&jane);
        assert_eq!(profile.len(), 4);
        assert_eq!(profile[0].skill, "Communication");
        // One strength over one review: 1 * 5 + 2.5, clamped to 5.
        assert_eq!(profile[0].value, 5.0);
        // One improvement area: -0.5 * 5 + 2.5.
        assert_eq!(profile[3].skill, "Work-life balance");
        assert_eq!(profile[3].value, 0.0);
        assert!(skill_profile(&[]).is_empty());
    }
}
