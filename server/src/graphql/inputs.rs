//! GraphQL input objects and their conversion into store types.
//!
//! Nullable optional fields use `MaybeUndefined` so an update can tell
//! "leave as is" (field omitted) from "clear" (explicit `null`).

use async_graphql::{ID, InputObject, MaybeUndefined};
use chrono::NaiveDate;
use entity::{
    DepartmentPatch, EmployeePatch, NewDepartment, NewEmployee, NewPerformanceReview, NewRole,
    PerformanceReviewPatch, RolePatch, clean_responsibilities,
};
use platform_api::{ApiError, ApiResult};
use platform_db::directory::{EmployeeFilter, RoleFilter};

use super::nodes::EmployeeStatusValue;

const MIN_LEVEL: i32 = 1;
const MAX_LEVEL: i32 = 5;

fn level(value: i32) -> ApiResult<u8> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        return Err(ApiError::invalid(format!(
            "level must be between {MIN_LEVEL} and {MAX_LEVEL}, got {value}"
        )));
    }
    u8::try_from(value).map_err(|_| ApiError::invalid(format!("level {value} out of range")))
}

fn nullable<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(inner) => Some(Some(inner)),
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewEmployeeInput {
    #[graphql(name = "firstName")]
    pub first_name: String,
    #[graphql(name = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    #[graphql(name = "roleId")]
    pub role_id: ID,
    #[graphql(name = "departmentId")]
    pub department_id: ID,
    #[graphql(name = "hireDate")]
    pub hire_date: NaiveDate,
    pub status: EmployeeStatusValue,
}

impl From<NewEmployeeInput> for NewEmployee {
    fn from(input: NewEmployeeInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            avatar: input.avatar,
            role_id: input.role_id.to_string(),
            department_id: input.department_id.to_string(),
            hire_date: input.hire_date,
            status: input.status.into(),
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdateEmployeeInput {
    pub id: ID,
    #[graphql(name = "firstName")]
    pub first_name: Option<String>,
    #[graphql(name = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: MaybeUndefined<String>,
    pub avatar: MaybeUndefined<String>,
    #[graphql(name = "roleId")]
    pub role_id: Option<ID>,
    #[graphql(name = "departmentId")]
    pub department_id: Option<ID>,
    #[graphql(name = "hireDate")]
    pub hire_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatusValue>,
}

impl UpdateEmployeeInput {
    pub fn into_parts(self) -> (String, EmployeePatch) {
        let patch = EmployeePatch {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: nullable(self.phone),
            avatar: nullable(self.avatar),
            role_id: self.role_id.map(|id| id.to_string()),
            department_id: self.department_id.map(|id| id.to_string()),
            hire_date: self.hire_date,
            status: self.status.map(Into::into),
        };
        (self.id.to_string(), patch)
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewRoleInput {
    pub title: String,
    pub description: String,
    #[graphql(default)]
    pub responsibilities: Vec<String>,
    #[graphql(name = "departmentId")]
    pub department_id: ID,
    pub level: i32,
    #[graphql(name = "isManager", default)]
    pub is_manager: bool,
}

impl TryFrom<NewRoleInput> for NewRole {
    type Error = ApiError;

    fn try_from(input: NewRoleInput) -> ApiResult<Self> {
        Ok(Self {
            title: input.title,
            description: input.description,
            responsibilities: clean_responsibilities(input.responsibilities),
            department_id: input.department_id.to_string(),
            level: level(input.level)?,
            is_manager: input.is_manager,
        })
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdateRoleInput {
    pub id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    #[graphql(name = "departmentId")]
    pub department_id: Option<ID>,
    pub level: Option<i32>,
    #[graphql(name = "isManager")]
    pub is_manager: Option<bool>,
}

impl UpdateRoleInput {
    pub fn into_parts(self) -> ApiResult<(String, RolePatch)> {
        let patch = RolePatch {
            title: self.title,
            description: self.description,
            responsibilities: self.responsibilities.map(clean_responsibilities),
            department_id: self.department_id.map(|id| id.to_string()),
            level: self.level.map(level).transpose()?,
            is_manager: self.is_manager,
        };
        Ok((self.id.to_string(), patch))
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewDepartmentInput {
    pub name: String,
    pub description: String,
    #[graphql(name = "managerId")]
    pub manager_id: Option<ID>,
    #[graphql(name = "parentDepartmentId")]
    pub parent_department_id: Option<ID>,
    #[graphql(name = "createdAt")]
    pub created_at: NaiveDate,
}

impl From<NewDepartmentInput> for NewDepartment {
    fn from(input: NewDepartmentInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            manager_id: input.manager_id.map(|id| id.to_string()),
            parent_department_id: input.parent_department_id.map(|id| id.to_string()),
            created_at: input.created_at,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdateDepartmentInput {
    pub id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    #[graphql(name = "managerId")]
    pub manager_id: MaybeUndefined<ID>,
    #[graphql(name = "parentDepartmentId")]
    pub parent_department_id: MaybeUndefined<ID>,
    #[graphql(name = "createdAt")]
    pub created_at: Option<NaiveDate>,
}

impl UpdateDepartmentInput {
    pub fn into_parts(self) -> (String, DepartmentPatch) {
        let patch = DepartmentPatch {
            name: self.name,
            description: self.description,
            manager_id: nullable(self.manager_id.map_value(|id| id.to_string())),
            parent_department_id: nullable(
                self.parent_department_id.map_value(|id| id.to_string()),
            ),
            created_at: self.created_at,
        };
        (self.id.to_string(), patch)
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewPerformanceReviewInput {
    #[graphql(name = "employeeId")]
    pub employee_id: ID,
    #[graphql(name = "reviewerId")]
    pub reviewer_id: ID,
    pub date: NaiveDate,
    pub rating: f64,
    #[graphql(default)]
    pub comments: String,
    #[graphql(default)]
    pub strengths: Vec<String>,
    #[graphql(name = "areasToImprove", default)]
    pub areas_to_improve: Vec<String>,
    #[graphql(default)]
    pub goals: Vec<String>,
}

impl From<NewPerformanceReviewInput> for NewPerformanceReview {
    fn from(input: NewPerformanceReviewInput) -> Self {
        Self {
            employee_id: input.employee_id.to_string(),
            reviewer_id: input.reviewer_id.to_string(),
            date: input.date,
            rating: input.rating,
            comments: input.comments,
            strengths: input.strengths,
            areas_to_improve: input.areas_to_improve,
            goals: input.goals,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct UpdatePerformanceReviewInput {
    pub id: ID,
    #[graphql(name = "employeeId")]
    pub employee_id: Option<ID>,
    #[graphql(name = "reviewerId")]
    pub reviewer_id: Option<ID>,
    pub date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub comments: Option<String>,
    pub strengths: Option<Vec<String>>,
    #[graphql(name = "areasToImprove")]
    pub areas_to_improve: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
}

impl UpdatePerformanceReviewInput {
    pub fn into_parts(self) -> (String, PerformanceReviewPatch) {
        let patch = PerformanceReviewPatch {
            employee_id: self.employee_id.map(|id| id.to_string()),
            reviewer_id: self.reviewer_id.map(|id| id.to_string()),
            date: self.date,
            rating: self.rating,
            comments: self.comments,
            strengths: self.strengths,
            areas_to_improve: self.areas_to_improve,
            goals: self.goals,
        };
        (self.id.to_string(), patch)
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct EmployeeFilterInput {
    pub search: Option<String>,
    pub status: Option<EmployeeStatusValue>,
    #[graphql(name = "departmentId")]
    pub department_id: Option<ID>,
    #[graphql(name = "roleId")]
    pub role_id: Option<ID>,
}

impl From<EmployeeFilterInput> for EmployeeFilter {
    fn from(input: EmployeeFilterInput) -> Self {
        Self {
            search: input.search,
            status: input.status.map(Into::into),
            department_id: input.department_id.map(|id| id.to_string()),
            role_id: input.role_id.map(|id| id.to_string()),
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct RoleFilterInput {
    pub search: Option<String>,
    #[graphql(name = "departmentId")]
    pub department_id: Option<ID>,
    pub level: Option<i32>,
}

impl TryFrom<RoleFilterInput> for RoleFilter {
    type Error = ApiError;

    fn try_from(input: RoleFilterInput) -> ApiResult<Self> {
        Ok(Self {
            search: input.search,
            department_id: input.department_id.map(|id| id.to_string()),
            level: input.level.map(level).transpose()?,
        })
    }
}
