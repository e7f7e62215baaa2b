use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::performance_review::PerformanceReview;
use crate::record::{Record, RecordKind, merge, nullable};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "on_leave",
            EmployeeStatus::Terminated => "terminated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role_id: String,
    pub department_id: String,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    /// Reviews of this employee. Only populated on single-record reads and
    /// never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_reviews: Option<Vec<PerformanceReview>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role_id: String,
    pub department_id: String,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub avatar: Option<Option<String>>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

impl Record for Employee {
    type New = NewEmployee;
    type Patch = EmployeePatch;

    const KIND: RecordKind = RecordKind::Employee;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            avatar: new.avatar,
            role_id: new.role_id,
            department_id: new.department_id,
            hire_date: new.hire_date,
            status: new.status,
            performance_reviews: None,
        }
    }

    fn apply(&mut self, patch: EmployeePatch) {
        merge(&mut self.first_name, patch.first_name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.avatar, patch.avatar);
        merge(&mut self.role_id, patch.role_id);
        merge(&mut self.department_id, patch.department_id);
        merge(&mut self.hire_date, patch.hire_date);
        merge(&mut self.status, patch.status);
    }
}
