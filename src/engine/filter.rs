//! Filter engine: per-field predicates and quick search.
//!
//! [`matches`] evaluates one record against a [`Criteria`] value using the
//! predicate kinds declared by the resource schema. It is a pure function:
//! filtering produces a derived view and never touches the collection.
//!
//! # Predicates
//!
//! - **Substring**: case-insensitive containment
//! - **Exact**: case-insensitive equality
//! - **`OnOrAfter` / `OnOrBefore`**: inclusive ISO date bounds (`YYYY-MM-DD`)
//!
//! A criterion with an empty value imposes no constraint. A record missing a
//! queried field fails that predicate instead of erroring.

use crate::domain::record::Record;
use crate::domain::schema::{FilterSpec, Predicate};
use chrono::NaiveDate;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeMap;

/// Date format accepted by range predicates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Active filter queries keyed by criterion name.
///
/// # Examples
///
/// ```
/// use hrdesk::engine::Criteria;
///
/// let mut criteria = Criteria::default();
/// criteria.set("department", "Nursing");
/// criteria.set("name", "");
/// assert_eq!(criteria.get("department"), "Nursing");
/// assert_eq!(criteria.active().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    values: BTreeMap<String, String>,
}

impl Criteria {
    /// Sets or replaces one query value. An empty value clears the criterion.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Returns the query for a key, `""` when unset.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Iterates the non-empty criteria.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` when no criterion constrains the view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every criterion.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Returns `true` when `record` satisfies every active criterion.
///
/// Keys are resolved against `filters`; a key the schema does not declare is
/// treated as a substring query on the field of the same name.
#[must_use]
pub fn matches(record: &Record, criteria: &Criteria, filters: &[FilterSpec]) -> bool {
    criteria.active().all(|(key, query)| {
        let (field, predicate) = filters
            .iter()
            .find(|f| f.key == key)
            .map_or((key, Predicate::Substring), |f| (f.field, f.predicate));

        let Some(value) = record.text(field) else {
            return false;
        };

        evaluate(predicate, &value, query)
    })
}

fn evaluate(predicate: Predicate, value: &str, query: &str) -> bool {
    match predicate {
        Predicate::Substring => value.to_lowercase().contains(&query.to_lowercase()),
        Predicate::Exact => value.to_lowercase() == query.to_lowercase(),
        Predicate::OnOrAfter => compare_dates(value, query).is_some_and(|(v, q)| v >= q),
        Predicate::OnOrBefore => compare_dates(value, query).is_some_and(|(v, q)| v <= q),
    }
}

fn compare_dates(value: &str, query: &str) -> Option<(NaiveDate, NaiveDate)> {
    let value = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()?;
    let query = NaiveDate::parse_from_str(query.trim(), DATE_FORMAT).ok()?;
    Some((value, query))
}

/// Narrows `records` to those matching `criteria`, preserving order.
///
/// Returns every record when `criteria` is empty.
#[must_use]
pub fn apply<'a>(records: &'a [Record], criteria: &Criteria, filters: &[FilterSpec]) -> Vec<&'a Record> {
    let _span = tracing::debug_span!(
        "apply_filters",
        total_records = records.len(),
        active_criteria = criteria.active().count()
    )
    .entered();

    let filtered: Vec<&Record> = records
        .iter()
        .filter(|record| matches(record, criteria, filters))
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filters applied");
    filtered
}

/// Multi-token fuzzy search over a set of record columns.
///
/// The query is split on whitespace and lowercased; a record passes when every
/// token fuzzy-matches the concatenation of its text columns.
pub struct QuickSearch {
    tokens: Vec<String>,
    matcher: SkimMatcherV2,
}

impl QuickSearch {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            tokens: query.split_whitespace().map(str::to_lowercase).collect(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Returns `true` when the query has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tests a record against every token.
    #[must_use]
    pub fn matches(&self, record: &Record, columns: &[&str]) -> bool {
        if self.tokens.is_empty() {
            return true;
        }

        let haystack = columns
            .iter()
            .filter_map(|column| record.text(column))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        self.tokens
            .iter()
            .all(|token| self.matcher.fuzzy_match(&haystack, token).is_some())
    }

    /// Character ranges of `text` matched by the tokens, coalesced and sorted.
    ///
    /// Each range is `(start, end)` in character indices with an exclusive end.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let lower = text.to_lowercase();
        if lower.chars().count() != text.chars().count() {
            return vec![];
        }

        let mut indices: Vec<usize> = self
            .tokens
            .iter()
            .filter_map(|token| self.matcher.fuzzy_indices(&lower, token))
            .flat_map(|(_score, indices)| indices)
            .collect();
        indices.sort_unstable();
        indices.dedup();

        coalesce(&indices)
    }
}

impl std::fmt::Debug for QuickSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickSearch")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

/// Turns sorted indices into `(start, end)` runs.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ResourceKind;
    use crate::domain::seed;

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r.text("name").unwrap_or_default().into_owned())
            .collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let employees = seed::records(ResourceKind::Employee);
        let filters = ResourceKind::Employee.schema().filters;

        let out = apply(&employees, &Criteria::default(), filters);
        assert_eq!(out.len(), employees.len());
        assert!(out.iter().zip(&employees).all(|(a, b)| *a == b));
    }

    #[test]
    fn exact_department_is_case_insensitive() {
        let employees = seed::records(ResourceKind::Employee);
        let mut criteria = Criteria::default();
        criteria.set("department", "nursing");

        let out = apply(&employees, &criteria, ResourceKind::Employee.schema().filters);
        assert_eq!(names(&out), ["Alice Johnson", "Emily Wilson"]);
    }

    #[test]
    fn exact_does_not_match_prefix() {
        let employees = seed::records(ResourceKind::Employee);
        let mut criteria = Criteria::default();
        criteria.set("department", "Nurs");

        let out = apply(&employees, &criteria, ResourceKind::Employee.schema().filters);
        assert!(out.is_empty());
    }

    #[test]
    fn substring_partitions_the_collection() {
        let employees = seed::records(ResourceKind::Employee);
        let filters = ResourceKind::Employee.schema().filters;
        let mut criteria = Criteria::default();
        criteria.set("role", "TECH");

        for record in &employees {
            let role = record.text("role").unwrap_or_default().to_lowercase();
            assert_eq!(matches(record, &criteria, filters), role.contains("tech"));
        }
    }

    #[test]
    fn criteria_combine_with_and() {
        let employees = seed::records(ResourceKind::Employee);
        let mut criteria = Criteria::default();
        criteria.set("department", "Administration");
        criteria.set("status", "on leave");

        let out = apply(&employees, &criteria, ResourceKind::Employee.schema().filters);
        assert_eq!(names(&out), ["Michael Taylor"]);
    }

    #[test]
    fn missing_field_does_not_match() {
        let record = Record::new(1);
        let mut criteria = Criteria::default();
        criteria.set("name", "a");

        assert!(!matches(&record, &criteria, ResourceKind::Employee.schema().filters));
    }

    #[test]
    fn leave_date_bounds_are_inclusive() {
        let leaves = seed::records(ResourceKind::Leave);
        let filters = ResourceKind::Leave.schema().filters;

        let mut criteria = Criteria::default();
        criteria.set("fromDate", "2024-07-01");
        let out = apply(&leaves, &criteria, filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);

        let mut criteria = Criteria::default();
        criteria.set("toDate", "2024-06-20");
        let out = apply(&leaves, &criteria, filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);

        let mut criteria = Criteria::default();
        criteria.set("fromDate", "2024-06-01");
        criteria.set("toDate", "2024-07-31");
        assert_eq!(apply(&leaves, &criteria, filters).len(), 2);
    }

    #[test]
    fn unparseable_dates_fail_the_predicate() {
        let leaves = seed::records(ResourceKind::Leave);
        let mut criteria = Criteria::default();
        criteria.set("fromDate", "July");

        assert!(apply(&leaves, &criteria, ResourceKind::Leave.schema().filters).is_empty());
    }

    #[test]
    fn undeclared_key_falls_back_to_substring() {
        let employees = seed::records(ResourceKind::Employee);
        let mut criteria = Criteria::default();
        criteria.set("contact", "@HOSPITAL.com");

        let out = apply(&employees, &criteria, ResourceKind::Employee.schema().filters);
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn setting_empty_value_clears_criterion() {
        let mut criteria = Criteria::default();
        criteria.set("name", "x");
        criteria.set("name", "");
        assert!(criteria.is_empty());
    }

    #[test]
    fn quick_search_requires_every_token() {
        let employees = seed::records(ResourceKind::Employee);
        let columns = ["name", "department", "role"];

        let search = QuickSearch::new("nursing emily");
        let hits: Vec<_> = employees.iter().filter(|r| search.matches(r, &columns)).collect();
        assert_eq!(names(&hits), ["Emily Wilson"]);

        let search = QuickSearch::new("zzzz");
        assert!(employees.iter().all(|r| !search.matches(r, &columns)));
    }

    #[test]
    fn quick_search_empty_query_matches_all() {
        let search = QuickSearch::new("   ");
        assert!(search.is_empty());
        assert!(search.matches(&Record::new(1), &["name"]));
    }

    #[test]
    fn coalesce_merges_adjacent_indices() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 6, 9]), vec![(0, 3), (5, 7), (9, 10)]);
        assert!(coalesce(&[]).is_empty());
    }
}
