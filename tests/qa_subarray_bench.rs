use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use subarray_bench::config::{AppConfig, BenchConfig};
use subarray_bench::{
    BenchError, Bounds, Lcg, PerfMetrics, Strategy, SubarrayMode, Total, TrialParams,
    max_subarray_for_seed, max_subarray_sum, run_benchmark, run_trials, run_trials_parallel,
    sample_vec, total_max_subarray_sum, trial_seeds,
};

/// Helper for the reference run: seed 42, N 10000, [-10, 10], 20 trials
fn reference_params() -> TrialParams {
    BenchConfig::default()
        .to_params()
        .expect("default config must be valid")
}

/// Fresh working directory for one CLI run, with optional `config/<env>.yaml`
fn cli_workdir(name: &str, env_yaml: Option<(&str, &str)>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "subarray_bench_qa_{}_{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("config")).unwrap();
    if let Some((env, yaml)) = env_yaml {
        std::fs::write(dir.join("config").join(format!("{}.yaml", env)), yaml).unwrap();
    }
    dir
}

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_subarray_bench"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch subarray_bench")
}

#[test]
fn qa_tc_reference_total_is_10980() {
    let total = total_max_subarray_sum(&reference_params()).unwrap();
    assert_eq!(total, Total::Narrow(10980));
}

#[test]
fn qa_tc_repeated_runs_are_identical() {
    // No hidden state between runs: the same inputs give the same totals
    let params = TrialParams::new(3_000, Bounds::new(-1_000, 1_000).unwrap(), 777);
    let first = total_max_subarray_sum(&params).unwrap();
    let second = total_max_subarray_sum(&params).unwrap();
    assert_eq!(first, second);

    let a = run_trials(&params, &mut PerfMetrics::new(1)).unwrap();
    let b = run_trials(&params, &mut PerfMetrics::new(1)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total, first);
}

#[test]
fn qa_tc_generator_is_deterministic() {
    let bounds = Bounds::new(-10, 10).unwrap();
    assert_eq!(sample_vec(42, bounds, 500), sample_vec(42, bounds, 500));

    // A longer sequence starts with the shorter one
    let long = sample_vec(42, bounds, 1_000);
    assert_eq!(&long[..500], sample_vec(42, bounds, 500).as_slice());
}

#[test]
fn qa_tc_each_trial_uses_next_seed() {
    // Trial i is seeded by the (i+1)-th step of the seed generator
    let params = TrialParams::new(64, Bounds::new(-9, 9).unwrap(), 5).with_trials(6);
    let report = run_trials(&params, &mut PerfMetrics::new(1)).unwrap();

    let mut seeds = Lcg::new(5);
    for (i, result) in report.results.iter().enumerate() {
        let seed = seeds.next_state();
        assert_eq!(result.index as usize, i);
        assert_eq!(result.seed, seed);
        assert_eq!(
            result.max_sum,
            max_subarray_for_seed(64, seed, params.bounds, SubarrayMode::NonEmpty).unwrap()
        );
    }

    // No seed repeats within a run
    let mut seen = trial_seeds(5, 6);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 6);
}

#[test]
fn qa_tc_solver_properties() {
    assert_eq!(max_subarray_sum([-5]), Ok(-5));
    assert_eq!(max_subarray_sum(vec![9; 250]), Ok(2_250));
    assert_eq!(max_subarray_sum(vec![-9, -2, -7, -2, -11]), Ok(-2));
    assert_eq!(max_subarray_sum(Vec::new()), Err(BenchError::EmptySequence));
}

#[test]
fn qa_tc_zero_length_is_rejected_everywhere() {
    let params = TrialParams::new(0, Bounds::new(-10, 10).unwrap(), 42);
    assert_eq!(
        total_max_subarray_sum(&params),
        Err(BenchError::EmptySequence)
    );
    assert_eq!(
        run_trials_parallel(&params, 4),
        Err(BenchError::EmptySequence)
    );

    let config = BenchConfig {
        length: 0,
        ..Default::default()
    };
    assert_eq!(config.to_params(), Err(BenchError::EmptySequence));
}

#[test]
fn qa_tc_invalid_config_fails_fast() {
    let yaml = "bench:\n  min_value: 5\n  max_value: -5\n";
    let config = AppConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(
        config.bench.to_params(),
        Err(BenchError::InvertedBounds { min: 5, max: -5 })
    );

    let yaml = "bench:\n  length: -100\n";
    let config = AppConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(
        config.bench.to_params(),
        Err(BenchError::NegativeLength(-100))
    );
}

#[test]
fn qa_tc_parallel_equals_sequential_on_reference() {
    let sequential = run_benchmark(&reference_params(), Strategy::Sequential, 1).unwrap();
    let parallel =
        run_benchmark(&reference_params(), Strategy::Parallel { workers: 4 }, 1).unwrap();
    assert_eq!(sequential.report, parallel.report);
    assert_eq!(parallel.report.total, 10980i128);
}

#[test]
fn qa_tc_extreme_bounds_do_not_wrap() {
    // Every sample near i64::MAX: totals run far past i64 and must stay exact
    let bounds = Bounds::new(i64::MAX - 3, i64::MAX).unwrap();
    let params = TrialParams::new(1_000, bounds, 3);
    let report = run_trials(&params, &mut PerfMetrics::new(1)).unwrap();

    for r in &report.results {
        let expected: i128 = sample_vec(r.seed, bounds, 1_000)
            .iter()
            .map(|&x| x as i128)
            .sum();
        assert_eq!(r.max_sum, expected, "all-positive run should take the whole array");
    }
    assert!(!report.total.is_wide());
    assert!(report.total.to_i128().unwrap() > i64::MAX as i128);
}

#[test]
fn qa_tc_allow_empty_mode_is_explicit() {
    let base = TrialParams::new(50, Bounds::new(-30, -1).unwrap(), 11);
    let strict = total_max_subarray_sum(&base).unwrap();
    let clamped =
        total_max_subarray_sum(&base.clone().with_mode(SubarrayMode::AllowEmpty)).unwrap();
    assert!(strict.to_i128().unwrap() < 0);
    assert_eq!(clamped, 0i128);
}

#[test]
fn qa_tc_cli_default_run_prints_two_lines() {
    let dir = cli_workdir("default_run", None);
    let out = run_cli(&dir, &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {:?}", stdout);
    assert_eq!(lines[0], "Total Maximum Subarray Sum (20 runs): 10980");

    let secs = lines[1]
        .strip_prefix("Execution Time: ")
        .and_then(|rest| rest.strip_suffix(" seconds"))
        .expect("second line should be the execution time");
    let (whole, frac) = secs.split_once('.').expect("time should have a decimal point");
    assert!(whole.parse::<u64>().is_ok());
    assert_eq!(frac.len(), 6);
    assert!(frac.bytes().all(|b| b.is_ascii_digit()));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn qa_tc_cli_invalid_bounds_exits_1() {
    let yaml = "bench:\n  min_value: 5\n  max_value: -5\n";
    let dir = cli_workdir("inverted_bounds", Some(("inverted", yaml)));
    let out = run_cli(&dir, &["--env", "inverted"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error:"), "stderr: {:?}", stderr);
    assert!(stderr.contains("Invalid bounds: min 5 is greater than max -5"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn qa_tc_cli_huge_trial_count_exits_1() {
    let yaml = "bench:\n  length: 1\n  trials: 4294967295\n";
    let dir = cli_workdir("huge_trials", Some(("huge", yaml)));
    let out = run_cli(&dir, &["-e", "huge"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error:"), "stderr: {:?}", stderr);
    assert!(stderr.contains("Invalid trial count"));

    let _ = std::fs::remove_dir_all(&dir);
}
