//! Domain layer for the staffdesk plugin.
//!
//! Holds the employee record model and the crate-wide error type, independent
//! of Zellij APIs and of how records travel over the wire.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee record, request draft and sort columns
//!
//! # Examples
//!
//! ```
//! use staffdesk::domain::{Employee, SortColumn};
//!
//! let ann = Employee::new(1, "Ann", "Eng", "R&D", 50_000);
//! assert_eq!(ann.draft().salary, 50_000);
//! assert_eq!(SortColumn::Salary.as_str(), "salary");
//! ```

pub mod employee;
pub mod error;

pub use employee::{format_salary, Employee, EmployeeDraft, EmployeeId, SortColumn};
pub use error::{DirectoryError, Result};
