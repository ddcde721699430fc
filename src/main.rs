//! subarray_bench - Maximum Subarray Benchmark
//!
//! Runs the seeded trial loop and prints the total and elapsed time.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│   LCG    │───▶│  Kadane  │───▶│  Output  │
//! │  (YAML)  │    │ (seeds)  │    │ (trials) │    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `subarray_bench [--env|-e <name>] [--workers <n>] [--json]`

use anyhow::Context;

use subarray_bench::config::AppConfig;
use subarray_bench::runner::{self, BUILD_HASH, Strategy};

// ============================================================
// ARGUMENTS
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Worker override from command line (--workers argument)
fn get_workers_override() -> anyhow::Result<Option<usize>> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--workers" {
            let raw = args.get(i + 1).context("--workers requires a value")?;
            let workers = raw
                .parse()
                .with_context(|| format!("invalid --workers value: {}", raw))?;
            return Ok(Some(workers));
        }
    }
    Ok(None)
}

fn use_json_output() -> bool {
    std::env::args().any(|a| a == "--json")
}

// ============================================================
// MAIN
// ============================================================

fn run() -> anyhow::Result<()> {
    let env = get_env();
    let app_config =
        AppConfig::load(&env).with_context(|| format!("loading '{}' config", env))?;

    // Validate everything before touching the log directory or stdout
    let params = app_config
        .bench
        .to_params()
        .context("invalid benchmark parameters")?;
    let strategy = match get_workers_override()? {
        Some(0) => anyhow::bail!("--workers must be at least 1"),
        Some(workers) => Strategy::Parallel { workers },
        None => Strategy::from_workers(app_config.bench.workers),
    };

    let _log_guard = subarray_bench::logging::init_logging(&app_config);
    tracing::info!("Starting subarray_bench ({}) in {} mode", BUILD_HASH, env);

    let outcome = runner::run_benchmark(&params, strategy, app_config.sample_rate)?;

    if use_json_output() {
        println!("{}", runner::summary_json(&outcome)?);
    } else {
        for line in runner::summary_lines(&outcome) {
            println!("{}", line);
        }
    }

    let perf = &outcome.perf;
    if let (Some(p50), Some(p99)) = (perf.percentile(50.0), perf.percentile(99.0)) {
        let (generate_pct, solve_pct) = perf.breakdown_pct();
        tracing::info!(
            p50_us = p50 / 1_000,
            p99_us = p99 / 1_000,
            "trial latency (generate {:.1}%, solve {:.1}%)",
            generate_pct,
            solve_pct
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
