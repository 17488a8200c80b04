//! Employee record model.
//!
//! This module defines [`Employee`], the record the backend stores and the
//! table displays, together with [`EmployeeDraft`], the id-less body sent when
//! creating or updating a record, and [`SortColumn`], the set of columns the
//! backend can order by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned employee identifier.
pub type EmployeeId = u64;

/// A single employee record as served by the backend.
///
/// The JSON representation is exactly
/// `{"id", "name", "position", "department", "salary"}`. The `id` is assigned
/// by the backend on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: u64,
}

impl Employee {
    /// Creates an employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffdesk::domain::Employee;
    ///
    /// let bo = Employee::new(2, "Bo", "QA", "Ops", 40_000);
    /// assert_eq!(bo.name, "Bo");
    /// ```
    #[must_use]
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        salary: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            department: department.into(),
            salary,
        }
    }

    /// Returns the id-less body describing this record's editable fields.
    #[must_use]
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary,
        }
    }
}

/// Request body for `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: u64,
}

impl EmployeeDraft {
    /// Attaches a server-assigned id, producing a full record.
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            department: self.department,
            salary: self.salary,
        }
    }
}

/// Columns the backend can sort by.
///
/// The backend rejects any other column with `400 Bad Request`, so this enum
/// is the complete set of valid `/employees/sort/{column}` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Name,
    Position,
    Department,
    Salary,
}

impl SortColumn {
    /// All sortable columns in table order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Position, Self::Department, Self::Salary];

    /// Wire name used in the sort URL path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Position => "position",
            Self::Department => "department",
            Self::Salary => "salary",
        }
    }

    /// Column heading shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Position => "POSITION",
            Self::Department => "DEPARTMENT",
            Self::Salary => "SALARY",
        }
    }

    /// Maps the `1`–`4` sort keys to a column.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Name),
            '2' => Some(Self::Position),
            '3' => Some(Self::Department),
            '4' => Some(Self::Salary),
            _ => None,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort column: {s}"))
    }
}

/// Formats a salary as dollars with comma thousands separators.
///
/// # Examples
///
/// ```
/// use staffdesk::domain::format_salary;
///
/// assert_eq!(format_salary(85_000), "$85,000");
/// assert_eq!(format_salary(999), "$999");
/// assert_eq!(format_salary(1_234_567), "$1,234,567");
/// ```
#[must_use]
pub fn format_salary(salary: u64) -> String {
    let digits = salary.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_json_uses_backend_field_names() {
        let json = r#"{"id":1,"name":"John Doe","position":"Software Engineer","department":"Engineering","salary":85000}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::new(1, "John Doe", "Software Engineer", "Engineering", 85_000));
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = Employee::new(7, "Bo", "QA", "Ops", 40_000).draft();
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Bo", "position": "QA", "department": "Ops", "salary": 40000})
        );
    }

    #[test]
    fn negative_salary_is_rejected_on_decode() {
        let json = r#"{"id":1,"name":"A","position":"B","department":"C","salary":-5}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn sort_column_parses_case_insensitively() {
        assert_eq!("Salary".parse::<SortColumn>(), Ok(SortColumn::Salary));
        assert_eq!(" name ".parse::<SortColumn>(), Ok(SortColumn::Name));
        assert!("id".parse::<SortColumn>().is_err());
    }

    #[test]
    fn sort_keys_cover_every_column() {
        let mapped: Vec<SortColumn> = ['1', '2', '3', '4']
            .into_iter()
            .filter_map(SortColumn::from_key)
            .collect();
        assert_eq!(mapped, SortColumn::ALL);
        assert_eq!(SortColumn::from_key('5'), None);
    }

    #[test]
    fn salary_formatting_groups_thousands() {
        assert_eq!(format_salary(0), "$0");
        assert_eq!(format_salary(1_000), "$1,000");
        assert_eq!(format_salary(100_000), "$100,000");
    }
}
