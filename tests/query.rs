mod support;

use std::fs;

use pretty_assertions::assert_eq;
use support::{snss_image, write_aged};
use tab_recap::{
    detect_default_browser, query_all_browsers, query_tabs, BrowserKind, Platform, RecapError,
    SessionLocations,
};
use tempfile::{tempdir, TempDir};

fn linux_home() -> (TempDir, SessionLocations) {
    let home = tempdir().expect("tempdir");
    let locations = SessionLocations {
        platform: Platform::Linux,
        home: home.path().to_path_buf(),
        local_app_data: None,
    };
    (home, locations)
}

#[test]
fn query_reads_newest_snapshot_and_derives_domains() {
    let dir = tempdir().expect("tempdir");
    write_aged(
        dir.path(),
        "Session_1",
        &snss_image(&[(1, 1, 0, "https://stale.example/", "Stale")]),
        600,
    );
    write_aged(
        dir.path(),
        "Session_2",
        &snss_image(&[
            (1, 1, 1, "https://Second.Example/page", "Second"),
            (1, 2, 0, "https://first.example/", "First"),
        ]),
        5,
    );

    let snapshot = query_tabs(BrowserKind::Brave, dir.path()).expect("query should succeed");
    let summary = snapshot
        .entries
        .iter()
        .map(|entry| (entry.domain.as_str(), entry.title.as_str(), entry.browser.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("first.example", "First", "Brave"),
            ("second.example", "Second", "Brave"),
        ]
    );
}

#[test]
fn query_accepts_a_file_path() {
    let dir = tempdir().expect("tempdir");
    let file = write_aged(
        dir.path(),
        "anything.bin",
        &snss_image(&[(3, 9, 0, "https://file.example/", "File")]),
        1,
    );

    let snapshot = query_tabs(BrowserKind::Chrome, &file).expect("query should succeed");
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.entries[0].window_id, 1);
}

#[test]
fn corrupt_snapshot_surfaces_the_parse_error() {
    let dir = tempdir().expect("tempdir");
    write_aged(dir.path(), "Session_1", b"NOPE\x01\x00\x00\x00", 1);

    let error = query_tabs(BrowserKind::Chrome, dir.path())
        .err()
        .expect("bad magic must fail");
    assert!(matches!(error, RecapError::Session(_)));
}

#[test]
fn all_browsers_skips_unreadable_ones() {
    let (_home, locations) = linux_home();

    let chrome = locations.session_dir(BrowserKind::Chrome);
    fs::create_dir_all(&chrome).expect("chrome dir");
    write_aged(
        &chrome,
        "Session_1",
        &snss_image(&[(1, 1, 0, "https://chrome.example/", "C")]),
        1,
    );

    let edge = locations.session_dir(BrowserKind::Edge);
    fs::create_dir_all(&edge).expect("edge dir");
    write_aged(&edge, "Session_1", b"SNSS\x09\x00\x00\x00", 1);

    let vivaldi = locations.session_dir(BrowserKind::Vivaldi);
    fs::create_dir_all(&vivaldi).expect("vivaldi dir");
    write_aged(
        &vivaldi,
        "Tabs_1",
        &snss_image(&[(1, 1, 0, "https://vivaldi.example/", "V")]),
        1,
    );

    let browsers = query_all_browsers(&locations)
        .into_iter()
        .map(|entry| entry.browser)
        .collect::<Vec<_>>();
    assert_eq!(browsers, vec!["Chrome".to_string(), "Vivaldi".to_string()]);
}

#[test]
fn default_browser_is_first_detected() {
    let (_home, locations) = linux_home();
    assert!(matches!(
        detect_default_browser(&locations),
        Err(RecapError::NoBrowserDetected)
    ));

    let brave = locations.session_dir(BrowserKind::Brave);
    fs::create_dir_all(&brave).expect("brave dir");
    let chromium = locations.session_dir(BrowserKind::Chromium);
    fs::create_dir_all(&chromium).expect("chromium dir");

    let (kind, dir) = detect_default_browser(&locations).expect("a browser should be detected");
    assert_eq!(kind, BrowserKind::Chromium);
    assert_eq!(dir, chromium);
}
