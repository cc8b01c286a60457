use std::path::Path;
use std::process::{Command, Output};

use probchart::Encoding;
use tempfile::TempDir;

const SAMPLE: &str = "Prob,Cor,Miss,Fail,Ratio\n0.1,0.9,0.05,0.05,18\n0.2,0.8,0.1,0.1,8\n";

fn exe(name: &str) -> Command {
    let path = match name {
        "save-chart" => env!("CARGO_BIN_EXE_save-chart"),
        "show-chart" => env!("CARGO_BIN_EXE_show-chart"),
        "probchart" => env!("CARGO_BIN_EXE_probchart"),
        "generate-sample" => env!("CARGO_BIN_EXE_generate-sample"),
        other => panic!("unknown binary {other}"),
    };
    Command::new(path)
}

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn run_in(dir: &Path, cmd: &mut Command) -> Output {
    cmd.current_dir(dir).output().expect("binary should start")
}

#[test]
fn save_chart_writes_png() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data.csv", SAMPLE.as_bytes());

    let out = run_in(dir.path(), exe("save-chart").args(["data.csv", "out"]));
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let png = dir.path().join("out.png");
    assert!(std::fs::metadata(&png).unwrap().len() > 0);
    let img = image::open(&png).unwrap();
    assert_eq!((img.width(), img.height()), (1000, 600));
}

#[test]
fn save_chart_missing_column_fails_without_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data.csv", b"Prob,Cor,Miss,Fail\n0.1,0.9,0.05,0.05\n");

    let out = run_in(dir.path(), exe("save-chart").args(["data.csv", "out"]));
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Ratio"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn save_chart_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    let out = run_in(dir.path(), exe("save-chart").args(["nope.csv", "out"]));
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn save_chart_rejects_utf16_input_by_default() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data.csv", &Encoding::Utf16.encode(SAMPLE));

    let out = run_in(dir.path(), exe("save-chart").args(["data.csv", "out"]));
    assert!(!out.status.success());
    assert!(!dir.path().join("out.png").exists());

    let out = run_in(
        dir.path(),
        exe("save-chart").args(["data.csv", "out", "--encoding", "utf-16"]),
    );
    assert!(out.status.success());
    assert!(dir.path().join("out.png").exists());
}

#[test]
fn show_chart_prints_preview_before_rendering() {
    let dir = TempDir::new().unwrap();
    // No Ratio column: the preview is printed, then rendering fails before
    // any window is opened.
    let mut text = String::from("Prob,Cor,Miss,Fail\n");
    for i in 1..=7 {
        text.push_str(&format!("0.{i},0.9,0.05,0.05\n"));
    }
    write(&dir, "data.csv", &Encoding::Utf16.encode(&text));

    let out = run_in(dir.path(), exe("show-chart").arg("data.csv"));
    assert!(!out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Data preview:"));
    let header = lines.next().unwrap();
    assert!(header.contains("Prob") && header.contains("Fail"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with('0') && rows[4].starts_with('4'));
}

#[test]
fn generated_sample_round_trips_through_probchart() {
    let dir = TempDir::new().unwrap();

    let out = run_in(dir.path(), exe("generate-sample").arg("sweep.csv"));
    assert!(out.status.success());

    let out = run_in(
        dir.path(),
        exe("probchart").args([
            "sweep.csv",
            "--encoding",
            "utf-16",
            "--destination",
            "charts.v1",
        ]),
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("charts.v1.png").exists());
}

#[test]
fn probchart_reads_json_config() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data.tsv", SAMPLE.replace(',', "\t").as_bytes());
    write(
        &dir,
        "chart.json",
        br#"{ "delimiter": "\t", "output_mode": "file", "destination": "from_config" }"#,
    );

    let out = run_in(
        dir.path(),
        exe("probchart").args(["data.tsv", "--config", "chart.json"]),
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("from_config.png").exists());
}

#[test]
fn probchart_file_mode_without_destination_fails() {
    let dir = TempDir::new().unwrap();
    write(&dir, "data.csv", SAMPLE.as_bytes());

    let out = run_in(dir.path(), exe("probchart").arg("data.csv"));
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("destination"));
}
