use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};

use fdm_wave1d::harness::DEFAULT_WORKERS;
use fdm_wave1d::initial::triangle;
use fdm_wave1d::{run_sequential, Error, Grid, Harness, Params, Progress, Scheduler};

/// 1-D wave equation: explicit finite differences, sequential and fork/join parallel.
#[derive(Parser, Debug)]
#[command(name = "wave1d", version)]
struct Cli {
    #[command(flatten)]
    setup: Setup,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Setup {
    /// Propagation speed
    #[arg(long, global = true, default_value_t = 1.0)]
    c: f64,

    /// Domain length L
    #[arg(long, global = true, default_value_t = 10.0)]
    length: f64,

    /// Simulated time T
    #[arg(long, global = true, default_value_t = 5.0)]
    duration: f64,

    /// Number of spatial points
    #[arg(long, global = true, default_value_t = 101)]
    nx: usize,

    /// Number of time levels
    #[arg(long, global = true, default_value_t = 200)]
    nt: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one simulation and print the final time level
    Simulate {
        /// Use the fork/join scheduler instead of the sequential sweep
        #[arg(long)]
        parallel: bool,

        /// Worker threads for --parallel (default: number of CPUs)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Time the sequential run against the parallel one for several pool sizes
    Bench {
        /// Pool sizes to measure
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_WORKERS)]
        workers: Vec<usize>,

        /// Results table, one `workers time speedup` row per pool size
        #[arg(long, default_value = "performance_data.dat")]
        output: PathBuf,

        /// Runs per variant; the median time is kept
        #[arg(long, default_value_t = 1)]
        repeat: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env()
                             .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let s = &cli.setup;
    let params = match Params::new(s.c, s.length, s.duration, s.nx, s.nt) {
        Ok(params) => params,
        Err(err @ Error::Cfl { .. }) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    debug!(?params, "parameters");

    let outcome = match cli.command {
        Command::Simulate { parallel, workers } => simulate(params, parallel, workers),
        Command::Bench { workers, output, repeat } => bench(params, &workers, output, repeat),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn simulate(params: Params, parallel: bool, workers: Option<usize>) -> Result<()> {
    let mut grid = Grid::new(params, triangle(params.length()));
    if parallel {
        let workers = workers.unwrap_or_else(|| {
            std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        });
        Scheduler::new(workers)
            .context("failed to start worker pool")?
            .run(&mut grid);
    } else {
        run_sequential(&mut grid);
    }

    println!("Resultados finales:");
    for (x, u) in grid.x().iter().zip(grid.final_level().iter()) {
        println!("x={:.2}, u={:.2}", x, u);
    }
    Ok(())
}

fn bench(params: Params, workers: &[usize], output: PathBuf, repeat: usize) -> Result<()> {
    let harness = Harness::new(params, triangle(params.length())).repeat(repeat);

    println!("Iniciando prueba secuencial...");
    let report = harness.run_with(workers, |event| match event {
            Progress::Sequential(baseline) => {
                println!("Tiempo secuencial: {:.4} segundos", baseline.time.as_secs_f64());
                println!("\nIniciando pruebas paralelas...");
            }
            Progress::Parallel(record) => {
                println!("Tiempo con {} hebras: {:.4} segundos",
                         record.workers,
                         record.parallel.as_secs_f64());
            }
        })
        .context("benchmark aborted")?;

    if let Err(err) = report.export(&output) {
        error!(path = %output.display(), %err, "failed to write results table");
    }
    Ok(())
}
