use std::fs;

use tempfile::tempdir;

use perimeter_cli::Args;

fn args(output: String) -> Args {
    Args {
        width: Some(1280.0),
        height: 800.0,
        seed: Some(42),
        output,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_writes_svg_preview() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.svg");

    perimeter_cli::run(&args(output.to_string_lossy().to_string())).expect("run should succeed");

    let svg = fs::read_to_string(&output).expect("output should exist");
    assert!(svg.contains("<svg"));
    assert!(svg.matches("<circle").count() >= 1);
}

#[test]
fn e2e_same_seed_same_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.svg");
    let second = temp_dir.path().join("second.svg");

    perimeter_cli::run(&args(first.to_string_lossy().to_string())).unwrap();
    perimeter_cli::run(&args(second.to_string_lossy().to_string())).unwrap();

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}

#[test]
fn e2e_custom_items_from_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r##"
[style]
show_exclusion_zone = true

[[items]]
name = "Ferris"
color = "#dea584"

[[items]]
name = "Cargo"
color = "#8b5a2b"
"##,
    )
    .unwrap();

    let output = temp_dir.path().join("custom.svg");
    let mut cli_args = args(output.to_string_lossy().to_string());
    cli_args.width = None;
    cli_args.config = Some(config_path.to_string_lossy().to_string());

    perimeter_cli::run(&cli_args).expect("run should succeed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Ferris"));
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.matches("<circle").count() <= 2);
}

#[test]
fn e2e_invalid_policy_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[placement]\nmax_attempts = 0\n").unwrap();

    let mut cli_args = args(temp_dir.path().join("x.svg").to_string_lossy().to_string());
    cli_args.config = Some(config_path.to_string_lossy().to_string());

    assert!(perimeter_cli::run(&cli_args).is_err());
}

#[test]
fn e2e_zero_width_outlines_narrow_zone() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nshow_exclusion_zone = true\n").unwrap();

    let output = temp_dir.path().join("zero.svg");
    let mut cli_args = args(output.to_string_lossy().to_string());
    cli_args.width = Some(0.0);
    cli_args.config = Some(config_path.to_string_lossy().to_string());

    perimeter_cli::run(&cli_args).expect("run should succeed");

    // Narrow zone {10, 90, 25, 75} on the default 1280 px wide preview.
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"x="128""#), "{svg}");
    assert!(svg.contains(r#"y="200""#), "{svg}");
}

#[test]
fn e2e_unwritable_output_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing").join("out.svg");

    assert!(perimeter_cli::run(&args(output.to_string_lossy().to_string())).is_err());
}
