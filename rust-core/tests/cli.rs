use assert_cmd::cargo::cargo_bin_cmd;
use serde::Deserialize;
use std::error::Error;
use std::fs;

#[derive(Deserialize)]
struct AxisSpectrum {
    axis: String,
    start_index: usize,
    end_index: usize,
    frequency: Vec<f64>,
    magnitude: Vec<f64>,
}

#[derive(Deserialize)]
struct AxisSummary {
    axis: String,
    rms: f64,
}

#[derive(Deserialize)]
struct Summary {
    samples: usize,
    axes: Vec<AxisSummary>,
}

#[test]
fn spectrum_command_on_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("3col.csv");
    fs::write(&path, "1,4,7\n2,5,8\n3,6,9\n4,7,10\n")?;

    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["spectrum", "--period", "0.25", "--axis", "y", "--input"])
        .arg(&path);
    let out = cmd.assert().success().get_output().stdout.clone();

    let spectra: Vec<AxisSpectrum> = serde_json::from_slice(&out)?;
    assert_eq!(spectra.len(), 1);
    assert_eq!(spectra[0].axis, "y");
    assert_eq!((spectra[0].start_index, spectra[0].end_index), (0, 4));
    assert_eq!(spectra[0].frequency, vec![0.0, 1.0]);
    assert_eq!(spectra[0].magnitude.len(), 2);
    Ok(())
}

#[test]
fn spectrum_command_axis_by_index() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["spectrum", "--seed", "3", "--axis", "2"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let spectra: Vec<AxisSpectrum> = serde_json::from_slice(&out)?;
    assert_eq!(spectra.len(), 1);
    assert_eq!(spectra[0].axis, "z");

    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["spectrum", "--seed", "3", "--axis", "3"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn spectrum_command_with_window() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["spectrum", "--seed", "1", "--start", "1.0", "--end", "2.0"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let spectra: Vec<AxisSpectrum> = serde_json::from_slice(&out)?;
    assert_eq!(spectra.len(), 3);
    for spectrum in &spectra {
        assert_eq!(spectrum.end_index - spectrum.start_index, 1000);
        assert_eq!(spectrum.frequency.len(), 500);
    }
    Ok(())
}

#[test]
fn spectrum_command_rejects_empty_window() {
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["spectrum", "--seed", "1", "--start", "2.0", "--end", "1.0"]);
    cmd.assert().failure();
}

#[test]
fn summary_command_rejects_two_columns() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("2col.csv");
    fs::write(&path, "1,2\n3,4\n")?;

    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["summary", "--input"]).arg(&path);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn summary_command_on_synthetic_data() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["summary", "--seed", "9"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let summary: Summary = serde_json::from_slice(&out)?;
    assert_eq!(summary.samples, 5000);
    let axes: Vec<&str> = summary.axes.iter().map(|a| a.axis.as_str()).collect();
    assert_eq!(axes, vec!["x", "y", "z"]);
    // Unit tone plus 0.5 sigma noise: sqrt(0.5 + 0.25)
    for axis in &summary.axes {
        assert!(axis.rms > 0.75 && axis.rms < 0.98, "{}: rms {}", axis.axis, axis.rms);
    }
    Ok(())
}

#[test]
fn summary_command_rejects_non_ascii_delimiter() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("3col.csv");
    fs::write(&path, "1\u{e9}2\u{e9}3\n4\u{e9}5\u{e9}6\n")?;

    // U+00E9 fits in a byte but is not ASCII
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["summary", "--delimiter", "\u{e9}", "--input"]).arg(&path);
    let out = cmd.assert().failure().get_output().stderr.clone();
    assert!(String::from_utf8(out)?.contains("ASCII"));
    Ok(())
}

#[test]
fn summary_command_rejects_tiny_period() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("triax");
    cmd.args(["summary", "--seed", "1", "--period", "1e-300"]);
    let out = cmd.assert().failure().get_output().stderr.clone();
    assert!(String::from_utf8(out)?.contains("placeholder samples"));
    Ok(())
}
