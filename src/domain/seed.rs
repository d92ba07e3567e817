//! Fixed sample data each session starts from.

use crate::domain::record::{text_fields, Record};
use crate::domain::schema::ResourceKind;

const EMPLOYEES: &[[(&str, &str); 5]] = &[
    [("name", "Alice Johnson"), ("department", "Nursing"), ("role", "Senior Nurse"), ("status", "active"), ("contact", "alice.johnson@hospital.com")],
    [("name", "Mark Smith"), ("department", "Administration"), ("role", "HR Manager"), ("status", "active"), ("contact", "mark.smith@hospital.com")],
    [("name", "Linda Brown"), ("department", "Laboratory"), ("role", "Lab Technician"), ("status", "on leave"), ("contact", "linda.brown@hospital.com")],
    [("name", "James Williams"), ("department", "Radiology"), ("role", "Radiology Technician"), ("status", "active"), ("contact", "james.williams@hospital.com")],
    [("name", "Sophia Davis"), ("department", "Pharmacy"), ("role", "Pharmacist"), ("status", "resigned"), ("contact", "sophia.davis@hospital.com")],
    [("name", "Robert Miller"), ("department", "Surgery"), ("role", "Surgeon"), ("status", "active"), ("contact", "robert.miller@hospital.com")],
    [("name", "Emily Wilson"), ("department", "Nursing"), ("role", "Nurse"), ("status", "active"), ("contact", "emily.wilson@hospital.com")],
    [("name", "Michael Taylor"), ("department", "Administration"), ("role", "Receptionist"), ("status", "on leave"), ("contact", "michael.taylor@hospital.com")],
    [("name", "Jessica Anderson"), ("department", "Laboratory"), ("role", "Lab Assistant"), ("status", "active"), ("contact", "jessica.anderson@hospital.com")],
    [("name", "David Thomas"), ("department", "Radiology"), ("role", "Radiologist"), ("status", "active"), ("contact", "david.thomas@hospital.com")],
];

const DEPARTMENTS: &[[(&str, &str); 2]] = &[
    [("name", "Nursing"), ("description", "Nursing staff and management")],
    [("name", "Administration"), ("description", "Administrative and HR")],
    [("name", "Laboratory"), ("description", "Lab staff and technicians")],
    [("name", "Radiology"), ("description", "Radiology specialists")],
    [("name", "Pharmacy"), ("description", "Pharmacists and medication management")],
    [("name", "Surgery"), ("description", "Surgeons and operating room staff")],
];

const LEAVES: &[[(&str, &str); 4]] = &[
    [("employeeName", "Linda Brown"), ("fromDate", "2024-07-01"), ("toDate", "2024-07-07"), ("reason", "Vacation")],
    [("employeeName", "Michael Taylor"), ("fromDate", "2024-06-15"), ("toDate", "2024-06-20"), ("reason", "Medical Leave")],
];

/// Returns the seed collection for a resource kind, identifiers `1..=n`.
///
/// # Examples
///
/// ```
/// use hrdesk::domain::{seed, ResourceKind};
///
/// let employees = seed::records(ResourceKind::Employee);
/// assert_eq!(employees.len(), 10);
/// assert_eq!(employees[0].id, 1);
/// ```
#[must_use]
pub fn records(kind: ResourceKind) -> Vec<Record> {
    match kind {
        ResourceKind::Employee => build(EMPLOYEES.iter().map(|row| &row[..])),
        ResourceKind::Department => build(DEPARTMENTS.iter().map(|row| &row[..])),
        ResourceKind::Leave => build(LEAVES.iter().map(|row| &row[..])),
    }
}

fn build<'a>(rows: impl Iterator<Item = &'a [(&'a str, &'a str)]>) -> Vec<Record> {
    rows.zip(1..)
        .map(|(row, id)| Record::from_fields(id, text_fields(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_have_sequential_ids() {
        for kind in ResourceKind::ALL {
            let rows = records(kind);
            let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
            let expected: Vec<_> = (1..=rows.len() as u64).collect();
            assert_eq!(ids, expected, "{kind}");
        }
    }

    #[test]
    fn seed_sizes() {
        assert_eq!(records(ResourceKind::Employee).len(), 10);
        assert_eq!(records(ResourceKind::Department).len(), 6);
        assert_eq!(records(ResourceKind::Leave).len(), 2);
    }

    #[test]
    fn employee_three_is_on_leave() {
        let employees = records(ResourceKind::Employee);
        assert_eq!(employees[2].text("name").as_deref(), Some("Linda Brown"));
        assert_eq!(employees[2].text("status").as_deref(), Some("on leave"));
    }
}
