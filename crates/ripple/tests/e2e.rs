//! End-to-end tests for the ripple CLI.
//!
//! These run the real binary and check what a user sees on stdout and
//! stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a Command for the ripple binary.
#[allow(deprecated)]
fn ripple_cmd() -> Command {
    Command::cargo_bin("ripple").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// =============================================================================
// probe
// =============================================================================

mod probe {
    use super::*;

    #[test]
    fn test_bisector_reinforcement() {
        // Defaults: separation 4, frequency 2, gain 0.5. Damping off.
        ripple_cmd()
            .args(["probe", "--x", "0", "--y", "0", "--damping", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-0.756802"))
            .stdout(predicate::str::contains("source 1"))
            .stdout(predicate::str::contains("source 2"));
    }

    #[test]
    fn test_json_output() {
        let stdout = stdout_of(ripple_cmd().args([
            "probe", "--x", "0", "--damping", "0", "--phase", "3.141592653589793", "--format",
            "json",
        ]));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let total = value["total"].as_f64().unwrap();
        assert!(total.abs() < 1e-12, "total {total}");
        assert_eq!(value["components"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_negative_coordinates() {
        ripple_cmd()
            .args(["probe", "--x", "-2", "--y", "-0.5", "--time", "1.5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("total"));
    }

    #[test]
    fn test_missing_x_fails() {
        ripple_cmd()
            .arg("probe")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--x"));
    }
}

// =============================================================================
// slice
// =============================================================================

mod slice {
    use super::*;

    #[test]
    fn test_plot_default() {
        let stdout = stdout_of(ripple_cmd().arg("slice"));
        let lines: Vec<&str> = stdout.lines().collect();
        // Title, 21 plot rows, legend.
        assert_eq!(lines.len(), 23);
        assert!(lines[0].starts_with("cross-section y = 0.00"));
        assert!(stdout.contains('#'));
    }

    #[test]
    fn test_csv_has_201_samples() {
        let stdout = stdout_of(ripple_cmd().args(["slice", "--format", "csv"]));
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "x,source1,source2,total");
        assert_eq!(lines.len(), 202);
        assert!(lines[1].starts_with("-10,"));
        assert!(lines[201].starts_with("10,"));
    }

    #[test]
    fn test_json_time_follows_frames_and_speed() {
        let stdout = stdout_of(ripple_cmd().args([
            "slice", "--frames", "10", "--speed", "2", "--format", "json",
        ]));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let time = value["time"].as_f64().unwrap();
        assert!((time - 0.2).abs() < 1e-12, "time {time}");
        assert_eq!(value["samples"].as_array().unwrap().len(), 201);
    }

    #[test]
    fn test_slice_y_is_clamped() {
        let stdout = stdout_of(ripple_cmd().args([
            "slice", "--slice-y", "-40", "--format", "json",
        ]));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["slice_y"].as_f64().unwrap(), -10.0);
    }

    #[test]
    fn test_clamped_override_warns() {
        ripple_cmd()
            .args(["slice", "--format", "csv", "--gain", "9"])
            .assert()
            .success()
            .stderr(predicate::str::contains("clamped"));
    }
}

// =============================================================================
// surface
// =============================================================================

mod surface {
    use super::*;

    #[test]
    fn test_summary_default_grid() {
        ripple_cmd()
            .args(["surface", "--segments", "50"])
            .assert()
            .success()
            .stdout(predicate::str::contains("vertices 2601"))
            .stdout(predicate::str::contains("max"));
    }

    #[test]
    fn test_csv_row_count() {
        let stdout = stdout_of(ripple_cmd().args([
            "surface", "--segments", "4", "--size", "8", "--format", "csv",
        ]));
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "x,y,z");
        assert_eq!(lines.len(), 26);
        assert!(lines[1].starts_with("-4,4,"));
    }

    #[test]
    fn test_json_stats_within_envelope() {
        let stdout = stdout_of(ripple_cmd().args([
            "surface", "--segments", "60", "--elapsed", "2.5", "--gain", "1.5", "--format", "json",
        ]));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert!(value["max"].as_f64().unwrap() <= 3.0);
        assert!(value["min"].as_f64().unwrap() >= -3.0);
    }
}

// =============================================================================
// Grid size limits
// =============================================================================

mod limits {
    use super::*;

    #[test]
    fn test_oversized_surface_is_rejected() {
        ripple_cmd()
            .args(["surface", "--segments", "4294967296"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--segments"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn test_oversized_slice_is_rejected() {
        ripple_cmd()
            .args(["slice", "--steps", "18446744073709551615", "--format", "csv"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--steps"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn test_zero_segments_is_rejected() {
        ripple_cmd()
            .args(["surface", "--segments", "0"])
            .assert()
            .failure()
            .code(2);
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_file_is_applied() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "slice_y = 4.0\n\n[controls]\nspeed = 3.0").unwrap();

        let stdout = stdout_of(ripple_cmd().args([
            "--config",
            file.path().to_str().unwrap(),
            "slice",
            "--format",
            "json",
        ]));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["slice_y"].as_f64().unwrap(), 4.0);
        assert!((value["time"].as_f64().unwrap() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_config_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[controls]\ndamping = 4.0").unwrap();

        ripple_cmd()
            .args(["--config", file.path().to_str().unwrap(), "probe", "--x", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("damping = 4 is outside [0, 1]"));
    }

    #[test]
    fn test_missing_config_fails() {
        ripple_cmd()
            .args(["--config", "/nonexistent/ripple.toml", "probe", "--x", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not load config"));
    }

    #[test]
    fn test_nan_override_fails() {
        ripple_cmd()
            .args(["probe", "--x", "0", "--gain", "NaN"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("gain must be a finite number"));
    }
}
