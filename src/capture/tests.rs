use std::path::PathBuf;
use std::sync::Mutex;

use super::backends::{Backend, BackendOutput};
use super::{CommandRunner, capture_with_table};
use crate::error::PyazoError;

const FAKE_TABLE: &[Backend] = &[
    Backend {
        utility: "alpha",
        args: &["-s", "{file}"],
        output: BackendOutput::File,
    },
    Backend {
        utility: "beta",
        args: &["{file}"],
        output: BackendOutput::File,
    },
    Backend {
        utility: "gamma",
        args: &["--out", "{file}"],
        output: BackendOutput::File,
    },
];

/// Fake runner recording every spawn attempt. Utilities listed in
/// `succeeds` exit zero and write the temp file, mirroring what a real
/// capture utility would do.
struct FakeRunner {
    available: Vec<&'static str>,
    succeeds: Vec<&'static str>,
    invocations: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn new(available: &[&'static str], succeeds: &[&'static str]) -> Self {
        Self {
            available: available.to_vec(),
            succeeds: succeeds.to_vec(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.contains(&program)
    }

    fn run(&self, program: &str, args: &[String]) -> std::io::Result<bool> {
        self.invocations.lock().unwrap().push(program.to_string());

        if !self.succeeds.contains(&program) {
            return Ok(false);
        }

        // The backends under test pass the output path as an argument;
        // create it the way the real utility would.
        if let Some(path) = args.iter().find(|arg| arg.ends_with(".png")) {
            std::fs::write(path, b"png").unwrap();
        }
        Ok(true)
    }
}

fn temp_target() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("screenshot.png");
    (dir, path)
}

#[test]
fn probes_candidates_in_table_order() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&["beta", "gamma"], &["beta", "gamma"]);

    capture_with_table(None, &runner, &tmp, FAKE_TABLE).unwrap();

    // alpha is not on PATH so it is never spawned; beta wins and gamma is
    // never tried.
    assert_eq!(runner.invocations(), vec!["beta".to_string()]);
    assert!(tmp.is_file());
}

#[test]
fn skips_candidate_with_nonzero_exit() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&["alpha", "beta"], &["beta"]);

    capture_with_table(None, &runner, &tmp, FAKE_TABLE).unwrap();

    assert_eq!(
        runner.invocations(),
        vec!["alpha".to_string(), "beta".to_string()]
    );
}

#[test]
fn unknown_configured_utility_fails_before_any_spawn() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&["alpha"], &["alpha"]);

    let err = capture_with_table(Some("delta"), &runner, &tmp, FAKE_TABLE).unwrap_err();

    assert!(matches!(err, PyazoError::UnknownUtility(name) if name == "delta"));
    assert!(runner.invocations().is_empty());
}

#[test]
fn configured_utility_is_run_directly() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&[], &["gamma"]);

    capture_with_table(Some("gamma"), &runner, &tmp, FAKE_TABLE).unwrap();

    assert_eq!(runner.invocations(), vec!["gamma".to_string()]);
}

#[test]
fn configured_utility_nonzero_exit_is_capture_failure() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&["alpha"], &[]);

    let err = capture_with_table(Some("alpha"), &runner, &tmp, FAKE_TABLE).unwrap_err();

    assert!(matches!(err, PyazoError::CaptureFailed));
}

#[test]
fn missing_output_file_is_capture_failure() {
    let (_dir, tmp) = temp_target();

    // Runner claims success but never writes the file.
    struct LyingRunner;
    impl CommandRunner for LyingRunner {
        fn is_available(&self, _program: &str) -> bool {
            true
        }
        fn run(&self, _program: &str, _args: &[String]) -> std::io::Result<bool> {
            Ok(true)
        }
    }

    let err = capture_with_table(None, &LyingRunner, &tmp, FAKE_TABLE).unwrap_err();
    assert!(matches!(err, PyazoError::CaptureFailed));
}

#[test]
fn no_available_utility_is_capture_failure() {
    let (_dir, tmp) = temp_target();
    let runner = FakeRunner::new(&[], &[]);

    let err = capture_with_table(None, &runner, &tmp, FAKE_TABLE).unwrap_err();

    assert!(matches!(err, PyazoError::CaptureFailed));
    assert!(runner.invocations().is_empty());
}

#[test]
fn selection_is_deterministic_for_a_fixed_available_set() {
    for _ in 0..3 {
        let (_dir, tmp) = temp_target();
        let runner = FakeRunner::new(&["gamma", "beta"], &["beta", "gamma"]);
        capture_with_table(None, &runner, &tmp, FAKE_TABLE).unwrap();
        assert_eq!(runner.invocations(), vec!["beta".to_string()]);
    }
}
