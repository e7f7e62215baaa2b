use async_graphql::{Enum, ID, SimpleObject};
use chrono::NaiveDate;
use entity::{DashboardStats, Department, Employee, EmployeeStatus, PerformanceReview, Role};
use platform_api::Notice;
use platform_db::directory::{DepartmentOverview, RatingPoint, SkillScore};

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "EmployeeStatus")]
pub enum EmployeeStatusValue {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl From<EmployeeStatus> for EmployeeStatusValue {
    fn from(value: EmployeeStatus) -> Self {
        match value {
            EmployeeStatus::Active => Self::Active,
            EmployeeStatus::Inactive => Self::Inactive,
            EmployeeStatus::OnLeave => Self::OnLeave,
            EmployeeStatus::Terminated => Self::Terminated,
        }
    }
}

impl From<EmployeeStatusValue> for EmployeeStatus {
    fn from(value: EmployeeStatusValue) -> Self {
        match value {
            EmployeeStatusValue::Active => Self::Active,
            EmployeeStatusValue::Inactive => Self::Inactive,
            EmployeeStatusValue::OnLeave => Self::OnLeave,
            EmployeeStatusValue::Terminated => Self::Terminated,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Employee")]
pub struct EmployeeNode {
    pub id: ID,
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
    /// Only populated when the employee is fetched by id.
    #[graphql(name = "performanceReviews")]
    pub performance_reviews: Option<Vec<PerformanceReviewNode>>,
}

impl From<Employee> for EmployeeNode {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.into(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            avatar: employee.avatar,
            role_id: employee.role_id.into(),
            department_id: employee.department_id.into(),
            hire_date: employee.hire_date,
            status: employee.status.into(),
            performance_reviews: employee
                .performance_reviews
                .map(|reviews| reviews.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Role")]
pub struct RoleNode {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    #[graphql(name = "departmentId")]
    pub department_id: ID,
    pub level: i32,
    #[graphql(name = "isManager")]
    pub is_manager: bool,
}

impl From<Role> for RoleNode {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.into(),
            title: role.title,
            description: role.description,
            responsibilities: role.responsibilities,
            department_id: role.department_id.into(),
            level: i32::from(role.level),
            is_manager: role.is_manager,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Department")]
pub struct DepartmentNode {
    pub id: ID,
    pub name: String,
    pub description: String,
    #[graphql(name = "managerId")]
    pub manager_id: Option<ID>,
    #[graphql(name = "parentDepartmentId")]
    pub parent_department_id: Option<ID>,
    #[graphql(name = "createdAt")]
    pub created_at: NaiveDate,
}

impl From<Department> for DepartmentNode {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.into(),
            name: department.name,
            description: department.description,
            manager_id: department.manager_id.map(Into::into),
            parent_department_id: department.parent_department_id.map(Into::into),
            created_at: department.created_at,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "PerformanceReview")]
pub struct PerformanceReviewNode {
    pub id: ID,
    #[graphql(name = "employeeId")]
    pub employee_id: ID,
    #[graphql(name = "reviewerId")]
    pub reviewer_id: ID,
    pub date: NaiveDate,
    pub rating: f64,
    pub comments: String,
    pub strengths: Vec<String>,
    #[graphql(name = "areasToImprove")]
    pub areas_to_improve: Vec<String>,
    pub goals: Vec<String>,
}

impl From<PerformanceReview> for PerformanceReviewNode {
    fn from(review: PerformanceReview) -> Self {
        Self {
            id: review.id.into(),
            employee_id: review.employee_id.into(),
            reviewer_id: review.reviewer_id.into(),
            date: review.date,
            rating: review.rating,
            comments: review.comments,
            strengths: review.strengths,
            areas_to_improve: review.areas_to_improve,
            goals: review.goals,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "DashboardStats")]
pub struct DashboardStatsNode {
    #[graphql(name = "totalEmployees")]
    pub total_employees: i32,
    #[graphql(name = "activeEmployees")]
    pub active_employees: i32,
    #[graphql(name = "departmentsCount")]
    pub departments_count: i32,
    #[graphql(name = "rolesCount")]
    pub roles_count: i32,
    #[graphql(name = "recentReviews")]
    pub recent_reviews: i32,
    /// Null until at least one review exists.
    #[graphql(name = "avgPerformance")]
    pub avg_performance: Option<f64>,
}

fn count(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl From<DashboardStats> for DashboardStatsNode {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_employees: count(stats.total_employees),
            active_employees: count(stats.active_employees),
            departments_count: count(stats.departments_count),
            roles_count: count(stats.roles_count),
            recent_reviews: count(stats.recent_reviews),
            avg_performance: stats.avg_performance,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "DepartmentOverview")]
pub struct DepartmentOverviewNode {
    pub department: DepartmentNode,
    pub employees: Vec<EmployeeNode>,
    pub headcount: i32,
    pub manager: Option<EmployeeNode>,
}

impl From<DepartmentOverview> for DepartmentOverviewNode {
    fn from(overview: DepartmentOverview) -> Self {
        Self {
            department: overview.department.into(),
            employees: overview.employees.into_iter().map(Into::into).collect(),
            headcount: count(overview.headcount),
            manager: overview.manager.map(Into::into),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "RatingPoint")]
pub struct RatingPointNode {
    pub label: String,
    pub rating: f64,
}

impl From<RatingPoint> for RatingPointNode {
    fn from(point: RatingPoint) -> Self {
        Self {
            label: point.label,
            rating: point.rating,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "SkillScore")]
pub struct SkillScoreNode {
    pub skill: String,
    pub value: f64,
}

impl From<SkillScore> for SkillScoreNode {
    fn from(score: SkillScore) -> Self {
        Self {
            skill: score.skill,
            value: score.value,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct EmployeePayload {
    pub record: Option<EmployeeNode>,
    pub notice: Option<Notice>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct RolePayload {
    pub record: Option<RoleNode>,
    pub notice: Option<Notice>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct DepartmentPayload {
    pub record: Option<DepartmentNode>,
    pub notice: Option<Notice>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PerformanceReviewPayload {
    pub record: Option<PerformanceReviewNode>,
    pub notice: Option<Notice>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct DeletePayload {
    pub deleted: bool,
    pub notice: Option<Notice>,
}
