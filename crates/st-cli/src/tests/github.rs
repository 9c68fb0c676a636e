use crate::github::sample_issues;

#[test]
fn test_sample_issues_reference_the_requested_repository() {
    let issues = sample_issues("acme", "webapp");

    assert_eq!(issues.len(), 3);
    assert!(
        issues
            .iter()
            .all(|i| i.url.starts_with("https://github.com/acme/webapp/issues/"))
    );
    assert!(issues.iter().all(|i| i.state == "open"));
}

#[test]
fn test_sample_issue_titles_are_stable() {
    let issues = sample_issues("o", "r");

    assert_eq!(issues[0].title, "Fix login page");
    assert_eq!(issues[1].title, "Add user profile page");
    assert_eq!(issues[2].title, "Update database schema");
}
