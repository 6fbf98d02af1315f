//! Matcher integration tests
//!
//! Builds pairs of fixture trees and checks the full resolve/index/match
//! pipeline.

use dupname_scanner::{
    resolve_root, DirectoryMatcher, MatchError, MatchOptions, MatchReport, TreeSide,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty file, creating parent directories as needed
fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, relative).expect("Failed to write fixture file");
}

/// Create a tree containing the given relative file paths
fn tree(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    for file in files {
        touch(dir.path(), file);
    }
    dir
}

fn compare(left: &TempDir, right: &TempDir, options: MatchOptions) -> MatchReport {
    DirectoryMatcher::new(options)
        .compare(left.path(), right.path())
        .expect("Comparison should succeed")
}

fn names(report: &MatchReport) -> Vec<&str> {
    report.matches.iter().map(|m| m.filename.as_str()).collect()
}

#[test]
fn test_disjoint_trees_have_no_matches() {
    let left = tree(&["a.txt", "b.txt"]);
    let right = tree(&["c.txt", "d.txt"]);

    let report = compare(&left, &right, MatchOptions::new());
    assert!(report.is_empty());
}

#[test]
fn test_single_match_without_recursion() {
    let left = tree(&["a.txt", "sub/b.txt"]);
    let right = tree(&["a.txt"]);

    let report = compare(&left, &right, MatchOptions::new());
    assert_eq!(report.len(), 1);

    let record = &report.matches[0];
    assert_eq!(record.filename, "a.txt");
    assert_eq!(record.path1, left.path().join("a.txt"));
    assert_eq!(record.path2, right.path().join("a.txt"));
}

#[test]
fn test_subdirectories_ignored_without_recursion() {
    let left = tree(&["sub/shared.txt"]);
    let right = tree(&["other/shared.txt"]);

    let report = compare(&left, &right, MatchOptions::new());
    assert!(report.is_empty(), "Nested files must not match: {:?}", report.matches);

    let report = compare(&left, &right, MatchOptions::new().with_recursive(true));
    assert_eq!(names(&report), vec!["shared.txt"]);
    assert_eq!(report.matches[0].path1, left.path().join("sub").join("shared.txt"));
    assert_eq!(report.matches[0].path2, right.path().join("other").join("shared.txt"));
}

#[test]
fn test_ignore_case() {
    let left = tree(&["A.txt"]);
    let right = tree(&["a.txt"]);

    assert!(compare(&left, &right, MatchOptions::new()).is_empty());

    let report = compare(&left, &right, MatchOptions::new().with_ignore_case(true));
    assert_eq!(names(&report), vec!["a.txt"]);
    assert_eq!(report.matches[0].path1, left.path().join("A.txt"));
}

#[test]
fn test_ignore_extension() {
    let left = tree(&["report.csv"]);
    let right = tree(&["report.txt"]);

    assert!(compare(&left, &right, MatchOptions::new()).is_empty());

    let report = compare(&left, &right, MatchOptions::new().with_ignore_extension(true));
    assert_eq!(names(&report), vec!["report"]);
}

#[test]
fn test_dotfiles_share_the_empty_name_without_extension() {
    let left = tree(&[".bashrc"]);
    let right = tree(&[".profile"]);

    assert!(compare(&left, &right, MatchOptions::new()).is_empty());

    let report = compare(&left, &right, MatchOptions::new().with_ignore_extension(true));
    assert_eq!(names(&report), vec![""]);
    assert_eq!(report.matches[0].path1, left.path().join(".bashrc"));
    assert_eq!(report.matches[0].path2, right.path().join(".profile"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_utf8_names_are_compared_by_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let left = tree(&[]);
    let right = tree(&[]);
    fs::write(left.path().join(OsStr::from_bytes(b"\xff.txt")), "").unwrap();
    fs::write(right.path().join(OsStr::from_bytes(b"\xfe.txt")), "").unwrap();

    let all = MatchOptions::new()
        .with_ignore_case(true)
        .with_ignore_extension(true);
    for options in [MatchOptions::new(), all] {
        let report = compare(&left, &right, options);
        assert!(report.is_empty(), "Distinct bytes matched: {:?}", report.matches);
    }

    fs::write(right.path().join(OsStr::from_bytes(b"\xff.txt")), "").unwrap();
    let report = compare(&left, &right, MatchOptions::new());
    assert_eq!(names(&report), vec!["\u{fffd}.txt"]);
    assert_eq!(report.matches[0].path2, right.path().join(OsStr::from_bytes(b"\xff.txt")));
}

#[test]
fn test_all_flags_combined() {
    let left = tree(&["deep/nested/Report.CSV"]);
    let right = tree(&["report.txt"]);

    let options = MatchOptions::new()
        .with_recursive(true)
        .with_ignore_case(true)
        .with_ignore_extension(true);
    let report = compare(&left, &right, options);
    assert_eq!(names(&report), vec!["report"]);
}

#[test]
fn test_hidden_artifacts_never_match() {
    let hidden = [
        ".DS_Store",
        "._photo.jpg",
        "desktop.ini",
        "thumbs.db",
        "$MFT",
        "sub/.DS_Store",
    ];
    let left = tree(&hidden);
    let right = tree(&hidden);

    let all = MatchOptions::new()
        .with_recursive(true)
        .with_ignore_case(true)
        .with_ignore_extension(true);
    for options in [MatchOptions::new(), all] {
        let report = compare(&left, &right, options);
        assert!(report.is_empty(), "Hidden files matched: {:?}", report.matches);
    }
}

#[test]
fn test_cartesian_product() {
    let left = tree(&["f.txt", "x/f.txt"]);
    let right = tree(&["f.txt", "y/f.txt", "z/f.txt"]);

    let report = compare(&left, &right, MatchOptions::new().with_recursive(true));
    assert_eq!(report.len(), 6);
    assert!(report.matches.iter().all(|m| m.filename == "f.txt"));

    // first-tree paths form the outer loop
    let pairs: Vec<(&Path, &Path)> = report
        .matches
        .iter()
        .map(|m| (m.path1.as_path(), m.path2.as_path()))
        .collect();
    let l0 = left.path().join("f.txt");
    let l1 = left.path().join("x").join("f.txt");
    let r0 = right.path().join("f.txt");
    let r1 = right.path().join("y").join("f.txt");
    let r2 = right.path().join("z").join("f.txt");
    assert_eq!(
        pairs,
        vec![
            (l0.as_path(), r0.as_path()),
            (l0.as_path(), r1.as_path()),
            (l0.as_path(), r2.as_path()),
            (l1.as_path(), r0.as_path()),
            (l1.as_path(), r1.as_path()),
            (l1.as_path(), r2.as_path()),
        ]
    );
}

#[test]
fn test_shared_names_are_sorted() {
    let left = tree(&["zeta.txt", "alpha.txt", "mid.txt", "only-left.txt"]);
    let right = tree(&["mid.txt", "zeta.txt", "alpha.txt", "only-right.txt"]);

    let report = compare(&left, &right, MatchOptions::new());
    assert_eq!(names(&report), vec!["alpha.txt", "mid.txt", "zeta.txt"]);
}

#[test]
fn test_directories_are_not_indexed() {
    let left = tree(&["docs/readme.md"]);
    let right = tree(&["docs/other.md"]);

    let report = compare(&left, &right, MatchOptions::new().with_recursive(true));
    assert!(report.is_empty());
}

#[test]
fn test_report_carries_roots_and_options() {
    let left = tree(&["a.txt"]);
    let right = tree(&["a.txt"]);
    let options = MatchOptions::new().with_ignore_case(true);

    let report = compare(&left, &right, options);
    assert_eq!(report.root1, left.path());
    assert_eq!(report.root2, right.path());
    assert_eq!(report.options, options);
}

#[test]
fn test_missing_first_directory() {
    let right = tree(&["a.txt"]);
    let missing = right.path().join("does-not-exist");

    let err = DirectoryMatcher::default()
        .compare(&missing, right.path())
        .unwrap_err();
    assert!(matches!(err, MatchError::Resolve { side: TreeSide::First, .. }));
}

#[test]
fn test_missing_second_directory() {
    let left = tree(&["a.txt"]);
    let missing = left.path().join("does-not-exist");

    let err = DirectoryMatcher::default()
        .compare(left.path(), &missing)
        .unwrap_err();
    assert!(matches!(err, MatchError::Resolve { side: TreeSide::Second, .. }));
}

#[test]
fn test_first_tree_walk_error_wins() {
    for options in [MatchOptions::new(), MatchOptions::new().with_recursive(true)] {
        let left = tree(&["a.txt"]);
        let right = tree(&["a.txt"]);
        let root1 = resolve_root(left.path(), TreeSide::First).unwrap();
        let root2 = resolve_root(right.path(), TreeSide::Second).unwrap();

        // both trees vanish between resolution and traversal
        fs::remove_dir_all(&root1).unwrap();
        fs::remove_dir_all(&root2).unwrap();

        let err = DirectoryMatcher::new(options)
            .compare_roots(root1, root2)
            .unwrap_err();
        assert!(
            matches!(
                err,
                MatchError::Walk { side: TreeSide::First, .. }
                    | MatchError::ReadDir { side: TreeSide::First, .. }
            ),
            "Expected a walk error for tree 1, got {err:?}"
        );
        assert!(err.to_string().starts_with("遍历目录1出错"));
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_fatal_when_recursive() {
    use std::os::unix::fs::PermissionsExt;

    let left = tree(&["a.txt", "locked/b.txt"]);
    let right = tree(&["a.txt"]);
    let locked = left.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits, nothing to observe
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let flat = DirectoryMatcher::default().compare(left.path(), right.path());
    let deep = DirectoryMatcher::new(MatchOptions::new().with_recursive(true))
        .compare(left.path(), right.path());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(flat.expect("Flat walk never enters locked/").len(), 1);
    let err = deep.unwrap_err();
    assert!(matches!(err, MatchError::Walk { side: TreeSide::First, .. }));
    assert!(err.to_string().starts_with("遍历目录1出错"));
}
