//! Sorted, deduplicated indexes over every course, used for the page's filters.
use std::collections::BTreeSet;

use crate::CourseRecord;

/// Every concept taught, across all courses
pub fn concepts(records: &[CourseRecord]) -> Vec<String> {
    sorted_unique(records.iter().flat_map(|r| r.course_concepts.iter()))
}

/// Every tool used, across all courses
pub fn tools(records: &[CourseRecord]) -> Vec<String> {
    sorted_unique(records.iter().flat_map(|r| r.course_tools.iter()))
}

/// Every country with at least one course
pub fn countries(records: &[CourseRecord]) -> Vec<String> {
    sorted_unique(records.iter().filter_map(|r| r.course_country.as_ref()))
}

/// Ordered by plain string comparison, not locale
fn sorted_unique<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    items
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(concepts: &[&str], tools: &[&str], country: Option<&str>) -> CourseRecord {
        CourseRecord {
            course_code: None,
            course_institution: "Unknown".to_string(),
            course_contact: None,
            course_concepts: concepts.iter().map(|s| s.to_string()).collect(),
            course_tools: tools.iter().map(|s| s.to_string()).collect(),
            course_webpage: "#".to_string(),
            course_year_level: "Unknown".to_string(),
            course_reviewed: None,
            course_title: "A course".to_string(),
            course_country: country.map(str::to_string),
        }
    }

    #[test]
    fn test_concepts_union() {
        let rs = vec![
            record(&["SAT", "SAT", "SMT"], &[], None),
            record(&["LTL"], &[], None),
        ];
        assert_eq!(concepts(&rs), vec!["LTL", "SAT", "SMT"]);
    }

    #[test]
    fn test_tools_sort_bytewise() {
        let rs = vec![
            record(&[], &["jqwik", "Z3"], None),
            record(&[], &["Alloy", "Z3", "CBMC"], None),
        ];
        assert_eq!(tools(&rs), vec!["Alloy", "CBMC", "Z3", "jqwik"]);
    }

    #[test]
    fn test_countries_skip_missing() {
        let rs = vec![
            record(&[], &[], Some("Portugal")),
            record(&[], &[], None),
            record(&[], &[], Some("Germany")),
            record(&[], &[], Some("Portugal")),
        ];
        assert_eq!(countries(&rs), vec!["Germany", "Portugal"]);
    }

    #[test]
    fn test_empty() {
        assert!(concepts(&[]).is_empty());
        assert!(countries(&[]).is_empty());
    }
}
