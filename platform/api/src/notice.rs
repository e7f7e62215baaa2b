//! User-facing notices for directory changes.
//!
//! The store only reports what changed; surfaces turn that into the toast a
//! user sees. Removals use the destructive tone.

use async_graphql::{Enum, SimpleObject};
use entity::{Department, Employee, Role};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Created,
    Updated,
    Removed,
}

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Destructive,
}

impl Change {
    fn tone(self) -> Tone {
        match self {
            Change::Removed => Tone::Destructive,
            Change::Created | Change::Updated => Tone::Neutral,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Change::Created => "created",
            Change::Updated => "updated",
            Change::Removed => "removed",
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    fn new(subject: &str, change: Change, description: String) -> Self {
        Self {
            title: format!("{subject} {}", change.verb()),
            description,
            tone: change.tone(),
        }
    }

    pub fn employee(change: Change, employee: &Employee) -> Self {
        let name = employee.full_name();
        let description = match change {
            Change::Created => format!("{name} has been added to the system."),
            Change::Updated => format!("{name}'s information has been updated."),
            Change::Removed => format!("{name} has been removed from the system."),
        };
        Self::new("Employee", change, description)
    }

    pub fn role(change: Change, role: &Role) -> Self {
        Self::new("Role", change, labelled(change, &role.title, "role"))
    }

    pub fn department(change: Change, department: &Department) -> Self {
        Self::new(
            "Department",
            change,
            labelled(change, &department.name, "department"),
        )
    }

    /// Notice for a review change; `None` when the reviewed employee is
    /// unknown, since the message names them.
    pub fn review(change: Change, reviewed: Option<&Employee>) -> Option<Self> {
        let name = reviewed?.full_name();
        let outcome = match change {
            Change::Created => "has been recorded",
            Change::Updated => "has been updated",
            Change::Removed => "has been removed",
        };
        Some(Self::new(
            "Performance review",
            change,
            format!("Review for {name} {outcome}."),
        ))
    }
}

fn labelled(change: Change, label: &str, noun: &str) -> String {
    match change {
        Change::Created => format!("{label} {noun} has been added to the system."),
        Change::Updated => format!("{label} {noun} has been updated."),
        Change::Removed => format!("{label} {noun} has been removed from the system."),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::EmployeeStatus;

    use super::*;

    fn employee() -> Employee {
        Employee {
            id: "7".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann.lee@company.com".into(),
            phone: None,
            avatar: None,
            role_id: "1".into(),
            department_id: "1".into(),
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: EmployeeStatus::Active,
            performance_reviews: None,
        }
    }

    #[test]
    fn removal_is_destructive() {
        let notice = Notice::employee(Change::Removed, &employee());
        assert_eq!(notice.title, "Employee removed");
        assert_eq!(notice.tone, Tone::Destructive);
        assert_eq!(
            Notice::employee(Change::Updated, &employee()).tone,
            Tone::Neutral
        );
    }

    #[test]
    fn review_notice_names_the_employee() {
        let notice = Notice::review(Change::Updated, Some(&employee())).unwrap();
        assert_eq!(notice.title, "Performance review updated");
        assert_eq!(notice.description, "Review for Ann Lee has been updated.");
        assert!(Notice::review(Change::Created, None).is_none());
    }
}
