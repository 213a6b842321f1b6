//! Sequential vs. parallel timing and the speedup table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grid::Grid;
use crate::parallel::Scheduler;
use crate::params::Params;
use crate::sequential::run_sequential;

/// Worker counts measured when none are given.
pub const DEFAULT_WORKERS: [usize; 5] = [1, 2, 4, 8, 16];

/// One row of the results table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Record {
    pub workers: usize,
    pub parallel: Duration,
    /// `T_seq / T_par`
    pub speedup: f64,
    /// Whether the parallel grid equals the sequential grid bit for bit.
    pub matches_sequential: bool,
}

/// A timed sequential run: the baseline for every `Record`.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub time: Duration,
    pub grid: Grid,
}

/// A finished measurement, reported while `Harness::run_with` is still going.
#[derive(Debug, Copy, Clone)]
pub enum Progress<'a> {
    Sequential(&'a Baseline),
    Parallel(&'a Record),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sequential: Duration,
    pub records: Vec<Record>,
}

impl Report {
    /// Writes `"<workers> <seconds:.4> <speedup:.4>"` per record.
    pub fn write_table<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for r in &self.records {
            writeln!(out,
                     "{} {:.4} {:.4}",
                     r.workers,
                     r.parallel.as_secs_f64(),
                     r.speedup)?;
        }
        out.flush()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_table(BufWriter::new(file))?;
        Ok(())
    }
}

/// Drives both variants on fresh grids built from the same parameters and initial condition.
///
/// Only the time-stepping loop is timed; grid initialization and pool start-up are not.
pub struct Harness<F> {
    params: Params,
    initial: F,
    repeat: usize,
}

impl<F> Harness<F>
    where F: Fn(f64) -> f64
{
    pub fn new(params: Params, initial: F) -> Harness<F> {
        Harness {
            params,
            initial,
            repeat: 1,
        }
    }

    /// Measure every variant `repeat` times and keep the median. At least 1.
    pub fn repeat(mut self, repeat: usize) -> Harness<F> {
        self.repeat = repeat.max(1);
        self
    }

    fn fresh_grid(&self) -> Grid {
        Grid::new(self.params, &self.initial)
    }

    fn median<R>(&self, mut run: R) -> (Duration, Grid)
        where R: FnMut(&mut Grid)
    {
        let mut times = Vec::with_capacity(self.repeat);
        let mut grid = self.fresh_grid();
        for k in 0..self.repeat {
            if k > 0 {
                grid = self.fresh_grid();
            }
            let start = Instant::now();
            run(&mut grid);
            let elapsed = start.elapsed();
            debug!(attempt = k + 1, ?elapsed, "timed run");
            times.push(elapsed);
        }
        times.sort();
        (times[self.repeat / 2], grid)
    }

    pub fn sequential(&self) -> Baseline {
        let (time, grid) = self.median(run_sequential);
        info!(nx = self.params.nx(), nt = self.params.nt(), ?time, "sequential run");
        Baseline { time, grid }
    }

    pub fn parallel(&self, workers: usize, baseline: &Baseline) -> Result<Record> {
        let scheduler = Scheduler::new(workers)?;
        let (parallel, grid) = self.median(|g| scheduler.run(g));

        let speedup = baseline.time.as_secs_f64() / parallel.as_secs_f64();
        let matches_sequential = grid.values() == baseline.grid.values();
        if !matches_sequential {
            warn!(workers, "parallel grid differs from sequential grid");
        }
        info!(workers, ?parallel, speedup, "parallel run");

        Ok(Record {
            workers,
            parallel,
            speedup,
            matches_sequential,
        })
    }

    /// One sequential baseline, then one record per entry of `workers`, in order.
    pub fn run(&self, workers: &[usize]) -> Result<Report> {
        self.run_with(workers, |_| ())
    }

    /// Same as `run`, calling `progress` after the baseline and after every record.
    pub fn run_with<P>(&self, workers: &[usize], mut progress: P) -> Result<Report>
        where P: FnMut(Progress<'_>)
    {
        let baseline = self.sequential();
        progress(Progress::Sequential(&baseline));

        let mut records = Vec::with_capacity(workers.len());
        for &w in workers {
            let record = self.parallel(w, &baseline)?;
            progress(Progress::Parallel(&record));
            records.push(record);
        }
        Ok(Report {
            sequential: baseline.time,
            records,
        })
    }
}
