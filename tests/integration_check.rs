// tests/integration_check.rs - Full check driver over real buildroots
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use sitelint_core::check::Checker;
use sitelint_core::config::Config;
use sitelint_core::probe::FsProbe;
use sitelint_core::types::{DeclaredRequire, Package, Severity};

const SITE: &str = "/usr/lib/python3.11/site-packages";

fn package(root: &TempDir, files: Vec<String>, requires: Vec<DeclaredRequire>) -> Package {
    Package {
        name: "demo".to_string(),
        root: root.path().to_path_buf(),
        files,
        requires,
    }
}

fn egg_dir(root: &TempDir, requires_text: Option<&str>) -> String {
    let rel = format!("{SITE}/demo-1.0.egg-info");
    let dir = root.path().join(rel.trim_start_matches('/'));
    fs::create_dir_all(&dir).unwrap();
    if let Some(text) = requires_text {
        fs::write(dir.join("requires.txt"), text).unwrap();
    }
    rel
}

fn declared(names: &[&str]) -> Vec<DeclaredRequire> {
    names.iter().map(|n| DeclaredRequire::new(*n)).collect()
}

#[test]
fn legacy_flat_file_metadata_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let rel = format!("{SITE}/demo-1.0.egg-info");
    let file = root.path().join(rel.trim_start_matches('/'));
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, "Metadata-Version: 1.0\nName: demo\n").unwrap();

    let pkg = package(&root, vec![rel.clone()], declared(&["foo"]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].code, "python-egg-info-distutils-style");
    assert_eq!(diags[0].path, rel);
}

#[test]
fn bundle_without_requires_is_silent() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, None);

    let pkg = package(&root, vec![rel], declared(&[]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);
    assert!(diags.is_empty());
}

#[test]
fn section_headers_do_not_suppress_following_requirements() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, Some("foo\nbar>=1.0\n[extra]\nbaz\n"));

    let pkg = package(&root, vec![rel], declared(&["foo", "bar"]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[0].code, "python-egginfo-require-not-in-spec");
    assert_eq!(diags[0].detail.as_deref(), Some("baz"));
    assert!(diags[0].path.ends_with("requires.txt"));
}

#[test]
fn declared_string_with_extras_satisfies_bare_name() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, Some("foo\n"));

    let pkg = package(&root, vec![rel], declared(&["foo[security]>=2.0"]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);
    assert!(diags.is_empty());
}

#[test]
fn malformed_requires_still_classifies_paths() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, Some(">= nonsense without a name\n"));

    let files = vec![rel, format!("{SITE}/demo/tests")];
    let pkg = package(&root, files, declared(&[]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    // The unparsable listing contributes nothing; path hygiene still fires.
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, "python-tests-in-package");
}

#[test]
fn check_run_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, Some("foo\nbaz\n"));

    let files = vec![
        format!("{SITE}/tests"),
        format!("{SITE}/demo/doc"),
        rel,
    ];
    let pkg = package(&root, files, declared(&["foo"]));
    let config = Config::default();
    let probe = FsProbe;
    let checker = Checker::new(&probe, &config);

    let first = checker.check_package(&pkg);
    let second = checker.check_package(&pkg);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn diagnostics_follow_file_list_order() {
    let root = tempfile::tempdir().unwrap();
    let files = vec![
        format!("{SITE}/demo/tests"),
        format!("{SITE}/src"),
    ];
    let pkg = package(&root, files, declared(&[]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    let codes: Vec<&str> = diags.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec!["python-tests-in-package", "python-src-in-site-packages"]
    );
}

#[test]
fn suppressed_codes_never_appear() {
    let root = tempfile::tempdir().unwrap();
    let files = vec![format!("{SITE}/demo/tests"), format!("{SITE}/tests")];
    let pkg = package(&root, files, declared(&[]));

    let config = Config {
        suppress: vec!["python-tests-in-package".to_string()],
        verbose: false,
    };
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, "python-tests-in-site-packages");
}

#[test]
fn non_metadata_files_skip_the_egg_cascade() {
    let root = tempfile::tempdir().unwrap();
    let files = vec![format!("{SITE}/demo/__init__.py")];
    let pkg = package(&root, files, declared(&[]));
    let config = Config::default();
    let probe = FsProbe;
    assert!(Checker::new(&probe, &config).check_package(&pkg).is_empty());
}

#[test]
fn requires_listing_path_is_resolved_under_buildroot() {
    let root = tempfile::tempdir().unwrap();
    let rel = egg_dir(&root, Some("ghost\n"));

    let pkg = package(&root, vec![rel], declared(&[]));
    let config = Config::default();
    let probe = FsProbe;
    let diags = Checker::new(&probe, &config).check_package(&pkg);

    assert_eq!(diags.len(), 1);
    let expected: PathBuf = root
        .path()
        .join(format!("{SITE}/demo-1.0.egg-info/requires.txt").trim_start_matches('/'));
    assert_eq!(diags[0].path, expected.to_string_lossy());
}
