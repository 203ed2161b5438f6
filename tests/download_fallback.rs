use claimcheck::download::{
    fetch_archive, MockArchiveSource, RepoReference, FALLBACK_BRANCH, PRIMARY_BRANCH,
};

#[test]
fn reference_accepts_plain_owner_repo_urls() {
    let reference = RepoReference::parse("https://github.com/acme/demo").expect("valid");
    assert_eq!(reference.as_str(), "https://github.com/acme/demo");
}

#[test]
fn reference_strips_git_suffix_and_trailing_slash() {
    let reference = RepoReference::parse("https://github.com/acme/demo.git").expect("valid");
    assert_eq!(reference.as_str(), "https://github.com/acme/demo");

    let reference = RepoReference::parse("https://github.com/acme/demo/").expect("valid");
    assert_eq!(reference.as_str(), "https://github.com/acme/demo");
}

#[test]
fn reference_rejects_malformed_locators() {
    for raw in [
        "",
        "acme/demo",
        "http://github.com/acme/demo",
        "https://gitlab.com/acme/demo",
        "https://github.com/acme",
        "https://github.com/acme/demo/tree/main",
    ] {
        let err = RepoReference::parse(raw).unwrap_err();
        assert!(
            err.to_string().contains("invalid repository reference"),
            "expected rejection for {raw:?}"
        );
    }
}

#[test]
fn archive_urls_follow_branch_candidates() {
    let reference = RepoReference::parse("https://github.com/acme/demo").unwrap();
    assert_eq!(
        reference.archive_url(PRIMARY_BRANCH),
        "https://github.com/acme/demo/archive/main.zip"
    );
    assert_eq!(
        reference.archive_url(FALLBACK_BRANCH),
        "https://github.com/acme/demo/archive/master.zip"
    );
}

#[tokio::test]
async fn primary_branch_success_makes_a_single_request() {
    let reference = RepoReference::parse("https://github.com/acme/demo").unwrap();
    let mut source = MockArchiveSource::new();
    source
        .expect_get()
        .withf(|url| url == "https://github.com/acme/demo/archive/main.zip")
        .times(1)
        .returning(|_| Ok(vec![0x50, 0x4b]));

    let bytes = fetch_archive(&source, &reference).await.expect("primary hit");
    assert_eq!(bytes, vec![0x50, 0x4b]);
}

#[tokio::test]
async fn fallback_branch_is_tried_after_primary_failure() {
    let reference = RepoReference::parse("https://github.com/acme/demo").unwrap();
    let mut source = MockArchiveSource::new();
    source
        .expect_get()
        .withf(|url| url.ends_with("/archive/main.zip"))
        .times(1)
        .returning(|_| Err("status 404".into()));
    source
        .expect_get()
        .withf(|url| url.ends_with("/archive/master.zip"))
        .times(1)
        .returning(|_| Ok(vec![1, 2, 3]));

    let bytes = fetch_archive(&source, &reference).await.expect("fallback hit");
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn two_failures_yield_one_error_naming_both_locations() {
    let reference = RepoReference::parse("https://github.com/acme/demo").unwrap();
    let mut source = MockArchiveSource::new();
    source
        .expect_get()
        .times(2)
        .returning(|_| Err("status 404".into()));

    let err = fetch_archive(&source, &reference).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("https://github.com/acme/demo/archive/main.zip"));
    assert!(message.contains("https://github.com/acme/demo/archive/master.zip"));
}
