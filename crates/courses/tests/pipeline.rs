use fmcourses::{build_courses, export::write_catalogue, Catalogue};
use fmcourses_client::issues::Issue;
use pretty_assertions::assert_eq;

const ISSUES: &str = include_str!("data/issues.json");
const EXPECTED: &str = include_str!("data/expected.js");

fn issues() -> Vec<Issue> {
    serde_json::from_str(ISSUES).unwrap()
}

#[test]
fn test_golden_output() {
    let courses = build_courses(&issues());
    let mut out = vec![];
    write_catalogue(&Catalogue::new(courses.records), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_emails_are_collected_not_exported() {
    let courses = build_courses(&issues());
    assert_eq!(courses.emails, vec!["jane@example.com"]);

    let mut out = vec![];
    write_catalogue(&Catalogue::new(courses.records), &mut out).unwrap();
    assert!(!String::from_utf8(out).unwrap().contains("jane@example.com"));
}

#[test]
fn test_aggregates() {
    let catalogue = Catalogue::new(build_courses(&issues()).records);
    assert_eq!(catalogue.tools, vec!["Dafny", "NuSMV", "Unknown"]);
    assert_eq!(catalogue.countries, vec!["Germany", "Portugal"]);
}
