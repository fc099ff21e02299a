//! Database models
//!
//! One module per table plus shared serde helpers. Each entity carries its
//! create/update payloads and API representation alongside the stored model.

pub mod department;
pub mod employee;
pub mod serde_helpers;
pub mod user;

pub use department::{
    Department, DepartmentChanges, DepartmentCreate, DepartmentId, DepartmentResponse,
    DepartmentUpdate,
};
pub use employee::{
    Employee, EmployeeChanges, EmployeeCreate, EmployeeId, EmployeeResponse, EmployeeStatus,
    EmployeeUpdate,
};
pub use user::{User, UserId, UserRole};
