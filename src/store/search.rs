//! Case-insensitive substring search over cached employees.
//!
//! A record matches when the query occurs in its name, position or
//! department. Salary and id are not searched. Filtering is pure and is
//! recomputed from scratch on every query change.

use crate::domain::Employee;

/// Returns `true` if `query` occurs case-insensitively in the employee's
/// name, position or department. An empty query matches everything.
#[must_use]
pub fn matches(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&employee.name, &employee.position, &employee.department]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns the records matching `query`, in their original order.
///
/// # Examples
///
/// ```
/// use staffdesk::domain::Employee;
/// use staffdesk::store::filter;
///
/// let records = vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)];
/// assert_eq!(filter(&records, "eng").len(), 1);
/// assert!(filter(&records, "zzz").is_empty());
/// ```
#[must_use]
pub fn filter(records: &[Employee], query: &str) -> Vec<Employee> {
    let _span = tracing::debug_span!("search_filter", total = records.len(), query_len = query.len())
        .entered();

    let filtered: Vec<Employee> = records
        .iter()
        .filter(|employee| matches(employee, query))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Character ranges of every case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end, suitable
/// for [`crate::ui::helpers::render_highlighted_text`]. Occurrences do not
/// overlap. Returns nothing for an empty query.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing can change the char count (e.g. 'İ'); highlight only when
    // indices still line up with the original text.
    if haystack.len() != text.chars().count() || needle.is_empty() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Employee> {
        vec![
            Employee::new(1, "John Doe", "Software Engineer", "Engineering", 85_000),
            Employee::new(2, "Jane Smith", "Product Manager", "Product", 95_000),
            Employee::new(3, "Mike Johnson", "UI Designer", "Design", 75_000),
            Employee::new(4, "Sarah Williams", "Data Analyst", "Analytics", 70_000),
            Employee::new(5, "Tom Brown", "DevOps Engineer", "Engineering", 88_000),
        ]
    }

    #[test]
    fn single_record_scenario() {
        let records = vec![Employee::new(1, "Ann", "Eng", "R&D", 50_000)];
        assert_eq!(filter(&records, "eng"), records);
        assert!(filter(&records, "zzz").is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = directory();
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn query_matches_any_of_the_three_text_fields() {
        let records = directory();

        let by_name: Vec<_> = filter(&records, "JOHN").iter().map(|e| e.id).collect();
        assert_eq!(by_name, vec![1, 3]);

        let by_position: Vec<_> = filter(&records, "engineer").iter().map(|e| e.id).collect();
        assert_eq!(by_position, vec![1, 5]);

        let by_department: Vec<_> = filter(&records, "analytics").iter().map(|e| e.id).collect();
        assert_eq!(by_department, vec![4]);
    }

    #[test]
    fn salary_is_not_searched() {
        assert!(filter(&directory(), "85000").is_empty());
    }

    #[test]
    fn filter_agrees_with_matches_for_every_record() {
        let records = directory();
        for query in ["", "e", "an", "DES", "ops", "x", "  "] {
            let expected: Vec<Employee> = records
                .iter()
                .filter(|e| {
                    let q = query.to_lowercase();
                    e.name.to_lowercase().contains(&q)
                        || e.position.to_lowercase().contains(&q)
                        || e.department.to_lowercase().contains(&q)
                })
                .cloned()
                .collect();
            assert_eq!(filter(&records, query), expected, "query {query:?}");
        }
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Engineering", "in"), vec![(5, 7), (8, 10)]);
        assert_eq!(match_ranges("Ann", "AN"), vec![(0, 2)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Ann", "").is_empty());
        assert!(match_ranges("Ann", "bob").is_empty());
    }
}
