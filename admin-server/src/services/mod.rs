//! Business rule services
//!
//! The layer enforcing uniqueness, referential integrity and field parsing
//! before anything touches the repositories. Handlers stay thin; every
//! invariant lives here.

pub mod department;
pub mod employee;

pub use department::DepartmentService;
pub use employee::EmployeeService;
