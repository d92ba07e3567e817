//! Resource kinds and their schema descriptors.
//!
//! Every resource kind is described by a static [`Schema`]: the columns shown in
//! the table and the editor, the filters offered above the table, and the
//! summary cards. The resource manager is generic over this descriptor, so the
//! three HR tabs share one filter/CRUD/import/dialog implementation.

use std::fmt;
use std::str::FromStr;

/// The entity type a resource manager governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Employee,
    Department,
    Leave,
}

impl ResourceKind {
    /// All kinds in tab order.
    pub const ALL: [Self; 3] = [Self::Employee, Self::Department, Self::Leave];

    /// Singular label used in dialog titles ("Add Employee").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Department => "Department",
            Self::Leave => "Leave",
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::Employee => "Employees",
            Self::Department => "Departments",
            Self::Leave => "Leave / Off Days",
        }
    }

    /// Message shown when the filtered view is empty.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Employee => "No employees found.",
            Self::Department => "No departments found.",
            Self::Leave => "No leave records found.",
        }
    }

    /// Returns the static schema descriptor for this kind.
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Employee => &EMPLOYEE_SCHEMA,
            Self::Department => &DEPARTMENT_SCHEMA,
            Self::Leave => &LEAVE_SCHEMA,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    /// Accepts singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" | "employees" => Ok(Self::Employee),
            "department" | "departments" => Ok(Self::Department),
            "leave" | "leaves" => Ok(Self::Leave),
            other => Err(format!("unknown resource kind '{other}'")),
        }
    }
}

/// How a filter query is compared against a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive containment, for free-text fields.
    Substring,
    /// Case-insensitive equality, for enumerated fields.
    Exact,
    /// Inclusive lower date bound: the field's date is on or after the query.
    OnOrAfter,
    /// Inclusive upper date bound: the field's date is on or before the query.
    OnOrBefore,
}

/// Where the options of a choice field come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choices {
    Fixed(&'static [&'static str]),
    /// Names of the current departments.
    DepartmentNames,
    /// Names of the current employees.
    EmployeeNames,
}

/// Editor input kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Choice(Choices),
}

/// One column of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: InputKind,
}

/// One filter input of a resource.
///
/// `key` names the criterion; `field` names the record field it tests. They
/// differ only when one field has several filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub field: &'static str,
    pub predicate: Predicate,
}

/// A summary card computed over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Total,
    /// Records whose field equals the value exactly.
    CountEq {
        field: &'static str,
        value: &'static str,
    },
    /// Distinct values of a field.
    Distinct { field: &'static str },
}

/// A labelled summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySpec {
    pub label: &'static str,
    pub metric: Metric,
}

/// Static descriptor of one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub kind: ResourceKind,
    pub fields: &'static [FieldSpec],
    pub filters: &'static [FilterSpec],
    pub summary: &'static [SummarySpec],
}

impl Schema {
    /// Looks up a column by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a filter by criterion key.
    #[must_use]
    pub fn filter(&self, key: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|f| f.key == key)
    }

    /// Names of the required columns, in column order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// Employee status values offered by the editor.
pub const EMPLOYEE_STATUSES: &[&str] = &["active", "on leave", "resigned"];

static EMPLOYEE_SCHEMA: Schema = Schema {
    kind: ResourceKind::Employee,
    fields: &[
        FieldSpec { name: "name", label: "Name", required: true, input: InputKind::Text },
        FieldSpec {
            name: "department",
            label: "Department",
            required: true,
            input: InputKind::Choice(Choices::DepartmentNames),
        },
        FieldSpec { name: "role", label: "Role", required: true, input: InputKind::Text },
        FieldSpec {
            name: "status",
            label: "Status",
            required: true,
            input: InputKind::Choice(Choices::Fixed(EMPLOYEE_STATUSES)),
        },
        FieldSpec { name: "contact", label: "Contact", required: true, input: InputKind::Email },
    ],
    filters: &[
        FilterSpec { key: "name", label: "Name", field: "name", predicate: Predicate::Substring },
        FilterSpec {
            key: "department",
            label: "Department",
            field: "department",
            predicate: Predicate::Exact,
        },
        FilterSpec { key: "role", label: "Role", field: "role", predicate: Predicate::Substring },
        FilterSpec { key: "status", label: "Status", field: "status", predicate: Predicate::Exact },
    ],
    summary: &[
        SummarySpec { label: "Total Employees", metric: Metric::Total },
        SummarySpec {
            label: "Active Employees",
            metric: Metric::CountEq { field: "status", value: "active" },
        },
        SummarySpec {
            label: "On Leave",
            metric: Metric::CountEq { field: "status", value: "on leave" },
        },
        SummarySpec { label: "Departments", metric: Metric::Distinct { field: "department" } },
    ],
};

static DEPARTMENT_SCHEMA: Schema = Schema {
    kind: ResourceKind::Department,
    fields: &[
        FieldSpec { name: "name", label: "Department Name", required: true, input: InputKind::Text },
        FieldSpec {
            name: "description",
            label: "Description",
            required: false,
            input: InputKind::Text,
        },
    ],
    filters: &[
        FilterSpec { key: "name", label: "Name", field: "name", predicate: Predicate::Substring },
        FilterSpec {
            key: "description",
            label: "Description",
            field: "description",
            predicate: Predicate::Substring,
        },
    ],
    summary: &[],
};

static LEAVE_SCHEMA: Schema = Schema {
    kind: ResourceKind::Leave,
    fields: &[
        FieldSpec {
            name: "employeeName",
            label: "Employee Name",
            required: true,
            input: InputKind::Choice(Choices::EmployeeNames),
        },
        FieldSpec { name: "fromDate", label: "From Date", required: true, input: InputKind::Date },
        FieldSpec { name: "toDate", label: "To Date", required: true, input: InputKind::Date },
        FieldSpec { name: "reason", label: "Reason", required: false, input: InputKind::Text },
    ],
    filters: &[
        FilterSpec {
            key: "employeeName",
            label: "Employee Name",
            field: "employeeName",
            predicate: Predicate::Substring,
        },
        FilterSpec {
            key: "fromDate",
            label: "From Date",
            field: "fromDate",
            predicate: Predicate::OnOrAfter,
        },
        FilterSpec {
            key: "toDate",
            label: "To Date",
            field: "toDate",
            predicate: Predicate::OnOrBefore,
        },
    ],
    summary: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_singular_and_plural() {
        assert_eq!("employees".parse::<ResourceKind>(), Ok(ResourceKind::Employee));
        assert_eq!("Department".parse::<ResourceKind>(), Ok(ResourceKind::Department));
        assert_eq!(" leaves ".parse::<ResourceKind>(), Ok(ResourceKind::Leave));
        assert!("patients".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn every_filter_targets_a_declared_column() {
        for kind in ResourceKind::ALL {
            let schema = kind.schema();
            assert_eq!(schema.kind, kind);
            for filter in schema.filters {
                assert!(schema.field(filter.field).is_some(), "{kind}: {}", filter.field);
            }
        }
    }

    #[test]
    fn required_fields_follow_editor_rules() {
        let employee: Vec<_> = ResourceKind::Employee.schema().required_fields().collect();
        assert_eq!(employee, ["name", "department", "role", "status", "contact"]);

        let department: Vec<_> = ResourceKind::Department.schema().required_fields().collect();
        assert_eq!(department, ["name"]);

        let leave: Vec<_> = ResourceKind::Leave.schema().required_fields().collect();
        assert_eq!(leave, ["employeeName", "fromDate", "toDate"]);
    }

    #[test]
    fn leave_dates_use_range_predicates() {
        let schema = ResourceKind::Leave.schema();
        assert_eq!(schema.filter("fromDate").map(|f| f.predicate), Some(Predicate::OnOrAfter));
        assert_eq!(schema.filter("toDate").map(|f| f.predicate), Some(Predicate::OnOrBefore));
    }
}
