use fmcourses_client::{issues::Issue, labels::Label};
use pretty_assertions::assert_eq;

#[test]
fn test_issue_payload() {
    let json = r#"[
        {
            "id": 1,
            "number": 12,
            "title": "Software Verification",
            "state": "open",
            "body": "Tools used: Z3",
            "labels": [
                { "id": 7, "name": "Portugal", "color": "1d76db", "default": false }
            ],
            "user": { "login": "someone" }
        },
        {
            "number": 13,
            "title": "Empty one",
            "body": null,
            "labels": []
        },
        {
            "number": 14,
            "title": "Add a course",
            "body": "",
            "labels": [],
            "pull_request": { "url": "https://api.github.com/repos/a/b/pulls/14" }
        }
    ]"#;

    let issues: Vec<Issue> = serde_json::from_str(json).unwrap();
    assert_eq!(issues.len(), 3);

    assert_eq!(issues[0].number, 12);
    assert_eq!(issues[0].body_text(), "Tools used: Z3");
    assert_eq!(
        issues[0].labels,
        vec![Label {
            name: "Portugal".to_string(),
            color: "1d76db".to_string()
        }]
    );
    assert!(!issues[0].is_pull_request());

    assert_eq!(issues[1].body_text(), "");
    assert!(issues[2].is_pull_request());
}

#[test]
fn test_label_payload() {
    let label: Label =
        serde_json::from_str(r#"{ "id": 3, "name": "Spain", "color": "ededed" }"#).unwrap();
    assert_eq!(label.name, "Spain");
    assert_eq!(label.color, "ededed");
}
