//! CSV Ingestion Integration Test
//!
//! Writes scenario series to a temporary data directory, loads a config that
//! points at them and runs the full pipeline: CSV -> reduction -> duty-cycle
//! combination -> life estimate.

use std::fs;
use std::path::Path;

use bearing_life::acquisition::{discover_series_files, CsvSeriesSource, IngestError};
use bearing_life::config::LifeConfig;
use bearing_life::pipeline::{run_pipeline, PipelineError};
use bearing_life::types::LifeError;

/// 60 one-second samples with constant loads and a 10° back-and-forth swing.
fn reference_series_csv(header_banner: bool) -> String {
    let mut csv = String::new();
    if header_banner {
        csv.push_str("Simulation export,flood tide,,,,\n");
    }
    csv.push_str("Time,Fxy,Fz,My,PS deg,Rotor speed\n");
    for t in 0..60 {
        let angle = if t % 2 == 0 { 0.0 } else { 10.0 };
        csv.push_str(&format!("{t},50000,-20000,100000,{angle},12.1\n"));
    }
    csv
}

fn config_for(data_dir: &Path, header_row: usize, scenarios: &str) -> LifeConfig {
    let toml_str = format!(
        r#"
[bearing]
kind = "roller"
rows = 1
elements_per_row = 20
element_diameter_mm = 30.0
contact_angle_deg = 35.0
outside_diameter_mm = 1000.0
bore_diameter_mm = 800.0
fatigue_limit_load_n = 500000.0
unit_height_mm = 150.0
manufacturer_rating_n = 2000000.0

[lubrication]
contamination_level = "normal cleanliness"

[life]
reliability_percent = 95.0
iso_correction = false

[ingestion]
data_dir = "{}"
header_row = {header_row}

{scenarios}
"#,
        data_dir.display()
    );
    LifeConfig::from_toml_str(&toml_str).unwrap()
}

fn source_for(config: &LifeConfig) -> CsvSeriesSource {
    CsvSeriesSource::new(
        config.ingestion.data_dir.clone(),
        config.ingestion.header_row,
        config.ingestion.columns.clone(),
    )
}

#[test]
fn csv_scenario_runs_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("flood.csv"), reference_series_csv(true)).unwrap();

    let config = config_for(
        dir.path(),
        1,
        r#"
[[scenarios]]
name = "flood"
duty_cycle = 1.0
file = "flood.csv"
"#,
    );
    let report = run_pipeline(&config, &source_for(&config)).unwrap();

    let case = &report.load_cases[0];
    // RMS of a negative constant is its magnitude
    assert!((case.axial_rms - 20_000.0).abs() < 1e-6);
    assert!((case.equivalent_load - 279_722.222_222_222_25).abs() < 1e-6);
    assert!((case.amplitude_deg - 10.0).abs() < 1e-12);
    // 59 steps of 10° over one minute
    assert!((case.speed_opm - 590.0).abs() < 1e-9);

    // Same P and θ as the reduced reference: L10 in oscillations matches it,
    // hours scale with the faster speed.
    let l10 = report.estimate.l10_million_oscillations;
    assert!((l10 - 7_243.497_714_151_902).abs() / l10 < 1e-9);
    let expected_hours = l10 * 1.0e6 / (590.0 * 60.0);
    assert!((report.estimate.l10_hours - expected_hours).abs() / expected_hours < 1e-12);
}

#[test]
fn mixed_file_and_reduced_scenarios_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ebb.csv"), reference_series_csv(false)).unwrap();

    let config = config_for(
        dir.path(),
        0,
        r#"
[[scenarios]]
name = "slack"
duty_cycle = 0.2
reduced = { radial_rms = 10000.0, axial_rms = 5000.0, moment_rms = 20000.0, amplitude_deg = 1.0, speed_opm = 0.5 }

[[scenarios]]
name = "ebb"
duty_cycle = 0.8
file = "ebb.csv"
"#,
    );
    let report = run_pipeline(&config, &source_for(&config)).unwrap();

    let names: Vec<_> = report.load_cases.iter().map(|c| c.scenario.as_str()).collect();
    assert_eq!(names, vec!["slack", "ebb"]);
    assert_eq!(report.duty_cycles, vec![0.2, 0.8]);
    assert!((report.combined.average_speed_opm - (0.5 * 0.2 + 590.0 * 0.8)).abs() < 1e-9);
}

#[test]
fn missing_column_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("flood.csv"), "Time,Fxy,Fz,My\n0,1,2,3\n1,1,2,3\n").unwrap();

    let config = config_for(
        dir.path(),
        0,
        r#"
[[scenarios]]
name = "flood"
duty_cycle = 1.0
file = "flood.csv"
"#,
    );
    let err = run_pipeline(&config, &source_for(&config)).unwrap_err();
    match err {
        PipelineError::Ingest(IngestError::MissingColumn { column, .. }) => {
            assert_eq!(column, "PS deg");
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn single_sample_series_is_insufficient() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("flood.csv"), "Fxy,Fz,My,PS deg\n1,2,3,4\n").unwrap();

    let config = config_for(
        dir.path(),
        0,
        r#"
[[scenarios]]
name = "flood"
duty_cycle = 1.0
file = "flood.csv"
"#,
    );
    let err = run_pipeline(&config, &source_for(&config)).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Life(LifeError::InsufficientData { needed: 2, available: 1, .. })
    ));
}

#[test]
fn custom_column_mapping() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("yaw.csv"),
        "radial,axial,tilt,yaw\n3,4,0,0\n3,4,0,2\n3,4,0,0\n",
    )
    .unwrap();

    let mut config = config_for(
        dir.path(),
        0,
        r#"
[[scenarios]]
name = "yaw"
duty_cycle = 1.0
file = "yaw.csv"
"#,
    );
    config.ingestion.columns.radial_force = "radial".to_string();
    config.ingestion.columns.axial_force = "axial".to_string();
    config.ingestion.columns.moment = "tilt".to_string();
    config.ingestion.columns.oscillation_angle = "yaw".to_string();

    let report = run_pipeline(&config, &source_for(&config)).unwrap();
    let case = &report.load_cases[0];
    assert!((case.radial_rms - 3.0).abs() < 1e-12);
    assert!((case.equivalent_load - (0.75 * 3.0 + 4.0)).abs() < 1e-12);
    assert!((case.amplitude_deg - 2.0).abs() < 1e-12);
}

#[test]
fn discover_lists_only_series_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ebb.csv"), "").unwrap();
    fs::write(dir.path().join("flood.csv"), "").unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();
    fs::create_dir(dir.path().join("archive.csv")).unwrap();

    let files = discover_series_files(dir.path()).unwrap();
    assert_eq!(files, vec![dir.path().join("ebb.csv"), dir.path().join("flood.csv")]);
}
