//! Workforce directory records.
//!
//! Each record type comes with the input used to create it (`New*`) and a
//! partial update (`*Patch`) that the store shallow-merges over the stored
//! record. Foreign keys are plain string ids; nothing here checks that they
//! resolve.

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod performance_review;
pub mod record;
pub mod role;

pub use dashboard::DashboardStats;
pub use department::{Department, DepartmentPatch, NewDepartment};
pub use employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
pub use performance_review::{NewPerformanceReview, PerformanceReview, PerformanceReviewPatch};
pub use record::{Record, RecordKind};
pub use role::{NewRole, Role, RolePatch, clean_responsibilities};
