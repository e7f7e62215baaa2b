//! Fixed demo dataset loaded into seeded stores.

use chrono::NaiveDate;
use entity::{Department, Employee, EmployeeStatus, PerformanceReview, Role};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
    pub departments: Vec<Department>,
    pub performance_reviews: Vec<PerformanceReview>,
}

pub fn demo_dataset() -> Dataset {
    Dataset {
        employees: seed_employees(),
        roles: seed_roles(),
        departments: seed_departments(),
        performance_reviews: seed_reviews(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
    avatar: u8,
    role_id: &str,
    department_id: &str,
    hire_date: NaiveDate,
    status: EmployeeStatus,
) -> Employee {
    Employee {
        id: id.into(),
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: Some(phone.into()),
        avatar: Some(format!("https://i.pravatar.cc/150?img={avatar}")),
        role_id: role_id.into(),
        department_id: department_id.into(),
        hire_date,
        status,
        performance_reviews: None,
    }
}

fn seed_employees() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "John",
            "Doe",
            "(555) 123-4567",
            1,
            "1",
            "1",
            date(2020, 1, 15),
            EmployeeStatus::Active,
        ),
        employee(
            "2",
            "Jane",
            "Smith",
            "(555) 987-6543",
            5,
            "2",
            "1",
            date(2019, 3, 22),
            EmployeeStatus::Active,
        ),
        employee(
            "3",
            "Michael",
            "Johnson",
            "(555) 555-1212",
            3,
            "3",
            "2",
            date(2021, 7, 10),
            EmployeeStatus::Active,
        ),
        employee(
            "4",
            "Emily",
            "Williams",
            "(555) 444-3333",
            9,
            "4",
            "3",
            date(2018, 11, 5),
            EmployeeStatus::OnLeave,
        ),
        employee(
            "5",
            "Robert",
            "Brown",
            "(555) 222-1111",
            8,
            "2",
            "4",
            date(2022, 2, 18),
            EmployeeStatus::Active,
        ),
    ]
}

fn role(
    id: &str,
    title: &str,
    description: &str,
    responsibilities: &[&str],
    department_id: &str,
    level: u8,
    is_manager: bool,
) -> Role {
    Role {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        responsibilities: strings(responsibilities),
        department_id: department_id.into(),
        level,
        is_manager,
    }
}

fn seed_roles() -> Vec<Role> {
    vec![
        role(
            "1",
            "CEO",
            "Chief Executive Officer",
            &["Company strategy", "Executive leadership", "Board management"],
            "1",
            5,
            true,
        ),
        role(
            "2",
            "CTO",
            "Chief Technology Officer",
            &["Technology strategy", "Engineering leadership", "Product vision"],
            "2",
            4,
            true,
        ),
        role(
            "3",
            "Senior Developer",
            "Experienced software engineer",
            &["Code architecture", "Mentoring", "Technical decisions"],
            "2",
            3,
            false,
        ),
        role(
            "4",
            "HR Manager",
            "Human Resources Manager",
            &["Recruitment", "Employee relations", "Policy development"],
            "3",
            4,
            true,
        ),
        role(
            "5",
            "Marketing Director",
            "Head of Marketing",
            &["Brand strategy", "Campaign management", "Market analysis"],
            "4",
            4,
            true,
        ),
    ]
}

fn department(
    id: &str,
    name: &str,
    description: &str,
    manager_id: &str,
    created_at: NaiveDate,
) -> Department {
    Department {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        manager_id: Some(manager_id.into()),
        parent_department_id: None,
        created_at,
    }
}

fn seed_departments() -> Vec<Department> {
    vec![
        department(
            "1",
            "Executive",
            "Company leadership and strategy",
            "1",
            date(2015, 1, 1),
        ),
        department(
            "2",
            "Engineering",
            "Software development and technical operations",
            "2",
            date(2015, 2, 15),
        ),
        department(
            "3",
            "Human Resources",
            "Employee management and development",
            "4",
            date(2015, 3, 10),
        ),
        department(
            "4",
            "Marketing",
            "Brand management and customer acquisition",
            "5",
            date(2016, 1, 20),
        ),
    ]
}

fn seed_reviews() -> Vec<PerformanceReview> {
    vec![
        PerformanceReview {
            id: "1".into(),
            employee_id: "2".into(),
            reviewer_id: "1".into(),
            date: date(2023, 1, 15),
            rating: 4.5,
            comments: "Exceptional performance and leadership".into(),
            strengths: strings(&["Communication", "Problem solving", "Team leadership"]),
            areas_to_improve: strings(&["Work-life balance"]),
            goals: strings(&["Lead a major project", "Mentor junior employees"]),
        },
        PerformanceReview {
            id: "2".into(),
            employee_id: "3".into(),
            reviewer_id: "2".into(),
            date: date(2023, 2, 5),
            rating: 4.2,
            comments: "Strong technical skills and contributions".into(),
            strengths: strings(&["Technical expertise", "Code quality", "Innovation"]),
            areas_to_improve: strings(&["Documentation", "Meeting deadlines"]),
            goals: strings(&["Improve documentation practices", "Learn a new technology"]),
        },
        PerformanceReview {
            id: "3".into(),
            employee_id: "4".into(),
            reviewer_id: "1".into(),
            date: date(2023, 1, 20),
            rating: 3.8,
            comments: "Good performer with room for growth".into(),
            strengths: strings(&["Organization", "Process improvement", "Employee advocacy"]),
            areas_to_improve: strings(&["Assertiveness", "Strategic thinking"]),
            goals: strings(&["Develop leadership skills", "Implement new HR process"]),
        },
        PerformanceReview {
            id: "4".into(),
            employee_id: "5".into(),
            reviewer_id: "1".into(),
            date: date(2023, 3, 10),
            rating: 4.0,
            comments: "Consistent performer with creative ideas".into(),
            strengths: strings(&["Creativity", "Market knowledge", "Project management"]),
            areas_to_improve: strings(&["Analytics", "Technical skills"]),
            goals: strings(&["Improve data analysis skills", "Lead a successful campaign"]),
        },
    ]
}
