use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("peerpair_main_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn parse(args: &[&str]) -> Result<RunConfig, clap::Error> {
    let cli = Cli::try_parse_from(std::iter::once("peerpair").chain(args.iter().copied()))?;
    let Command::Run(run_args) = cli.command;
    Ok(RunConfig::from(run_args))
}

fn write_roster(dir: &Path) -> PathBuf {
    let path = dir.join("scores.tsv");
    fs::write(
        &path,
        "Player\tTotal Score (points)\nA\t100\nB\t90\nC\t80\nD\t70\nE\t60\n",
    )
    .unwrap();
    path
}

#[test]
fn test_parse_args_defaults() {
    let config = parse(&["run", "--input", "r.tsv", "--out", "out", "--alpha", "1.5"]).unwrap();
    assert_eq!(config.input_path, PathBuf::from("r.tsv"));
    assert_eq!(config.profile.alpha, 1.5);
    assert_eq!(config.profile.noise_factor, DEFAULT_NOISE_FACTOR);
    assert_eq!(config.seed, None);
    assert_eq!(config.report_mode, ReportMode::Full);
}

#[test]
fn test_parse_args_alpha_is_required() {
    assert!(parse(&["run", "--input", "r.tsv", "--out", "out"]).is_err());
}

#[test]
fn test_parse_args_no_noise_and_seed() {
    let config = parse(&[
        "run",
        "--input",
        "r.json",
        "--out",
        "out",
        "--alpha",
        "1",
        "--no-noise",
        "--seed",
        "42",
        "--report-mode",
        "json",
    ])
    .unwrap();
    assert_eq!(config.profile.noise_factor, 0.0);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.report_mode, ReportMode::Json);
}

#[test]
fn test_parse_args_no_noise_conflicts_with_factor() {
    let res = parse(&[
        "run",
        "--input",
        "r.tsv",
        "--out",
        "out",
        "--alpha",
        "1",
        "--no-noise",
        "--noise-factor",
        "0.3",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_resolve_output_dir() {
    assert_eq!(resolve_output_dir(Path::new("")), PathBuf::from("."));
    assert_eq!(
        resolve_output_dir(Path::new("/tmp/out")),
        PathBuf::from("/tmp/out")
    );
}

#[test]
fn test_run_end_to_end_noise_free() {
    let dir = make_temp_dir();
    let roster = write_roster(&dir);
    let out = dir.join("out");
    let config = RunConfig {
        input_path: roster,
        out_dir: out.clone(),
        profile: PairingProfile::noise_free(1.0),
        seed: Some(5),
        report_mode: ReportMode::Full,
    };
    run(&config).unwrap();

    let json = fs::read_to_string(out.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seed"], 5);
    assert_eq!(value["stats"]["mean"], 80.0);
    let pairs = value["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    let trio = pairs.iter().find(|p| p.get("student3").is_some()).unwrap();
    let mut trio_names = ["student1", "student2", "student3"]
        .iter()
        .map(|k| trio[*k]["name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    trio_names.sort();
    assert_eq!(trio_names, vec!["B", "C", "D"]);

    let pair = pairs.iter().find(|p| p.get("student3").is_none()).unwrap();
    assert_eq!(pair["mode"], "teacher-led");
    assert_eq!(pair["teacher"]["name"], "A");

    assert!(out.join("groups.tsv").exists());
    assert!(out.join("report.txt").exists());
}

#[test]
fn test_run_same_seed_same_summary() {
    let dir = make_temp_dir();
    let roster = write_roster(&dir);
    let mut outputs = Vec::new();
    for sub in ["a", "b"] {
        let out = dir.join(sub);
        let config = RunConfig {
            input_path: roster.clone(),
            out_dir: out.clone(),
            profile: PairingProfile::new(1.0),
            seed: Some(77),
            report_mode: ReportMode::Json,
        };
        run(&config).unwrap();
        outputs.push(fs::read_to_string(out.join("summary.json")).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_run_reports_invalid_rows() {
    let dir = make_temp_dir();
    let roster = dir.join("scores.csv");
    fs::write(&roster, "name,score\nA,10\nB,\n").unwrap();
    let config = RunConfig {
        input_path: roster,
        out_dir: dir.join("out"),
        profile: PairingProfile::new(1.0),
        seed: Some(1),
        report_mode: ReportMode::Full,
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(
        err,
        AppError::Engine(EngineError::MissingField { .. })
    ));
    assert!(err.to_string().contains("record 2 (B): missing score"));
    assert!(!dir.join("out").exists());
}
