use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tm_app::*;
use tm_scenario::Preset;
use tm_sim::{SweepDefinition, SweepParameter};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn lab2_single_step() {
    let overrides = ScenarioOverrides {
        steps: Some(1),
        ..Default::default()
    };
    let scenario = resolve_scenario(Preset::Lab2, None, &overrides).unwrap();
    let response = execute_run(&scenario).unwrap();

    assert_eq!(response.output.linear.as_slice(), &[20.0, 16.5]);
    assert_eq!(response.rows.len(), 2);
    assert_eq!(response.export, ExportOutcome::Skipped);
    assert_eq!(response.summary.final_linear, 16.5);
}

#[test]
fn lab1_writes_csv() {
    let dir = unique_temp_dir("tm_app_lab1");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let csv = dir.join("simulation_results.csv");

    let overrides = ScenarioOverrides {
        csv: Some(csv.clone()),
        ..Default::default()
    };
    let scenario = resolve_scenario(Preset::Lab1, None, &overrides).unwrap();
    let response = execute_run(&scenario).unwrap();

    match &response.export {
        ExportOutcome::Written(receipt) => assert_eq!(receipt.rows_written, 101),
        other => panic!("expected export, got {:?}", other),
    }
    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(content.lines().count(), 102);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_failure_is_not_fatal() {
    let csv = unique_temp_dir("tm_app_no_such_dir").join("out.csv");
    let overrides = ScenarioOverrides {
        steps: Some(5),
        csv: Some(csv),
        ..Default::default()
    };
    let scenario = resolve_scenario(Preset::Lab1, None, &overrides).unwrap();
    let response = execute_run(&scenario).unwrap();

    assert!(matches!(response.export, ExportOutcome::Failed(_)));
    assert_eq!(response.output.linear.len(), 6);
}

#[test]
fn invalid_steps_are_rejected_before_running() {
    let mut scenario = Preset::Lab1.scenario();
    scenario.steps = 0;
    assert!(matches!(execute_run(&scenario), Err(AppError::Validation(_))));

    scenario.steps = 2_000_000;
    assert!(matches!(execute_run(&scenario), Err(AppError::Validation(_))));
}

#[test]
fn scenario_file_roundtrip_through_service() {
    let dir = unique_temp_dir("tm_app_scenario");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("scenario.yaml");

    save_scenario(&path, &Preset::Lab2.scenario()).unwrap();
    let overrides = ScenarioOverrides {
        steps: Some(25),
        ..Default::default()
    };
    let scenario = resolve_scenario(Preset::Lab1, Some(&path), &overrides).unwrap();
    assert_eq!(scenario.name, Preset::Lab2.scenario().name);
    assert_eq!(scenario.steps, 25);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sweep_returns_one_point_per_value() {
    let scenario = Preset::Lab1.scenario();
    let definition = SweepDefinition::new(SweepParameter::A, 0.9, 0.99, 4).unwrap();
    let response = execute_sweep(&scenario, definition, None).unwrap();

    assert_eq!(response.points.len(), 4);
    assert_eq!(response.points[0].value, 0.9);
    assert_eq!(response.points[3].value, 0.99);
    assert_eq!(response.export, ExportOutcome::Skipped);
}
