//! Divide-and-conquer evaluation of the stencil on a fixed-size thread pool.
//!
//! Each time level is one task tree: the root covers the interior `[1, nx - 1)`, a task wider
//! than the threshold is halved at its midpoint and both halves run through `rayon::join`, and
//! a task at or below the threshold evaluates its span directly. The mutable view of the next
//! level is split together with the range, so sibling tasks never write the same cell. Level
//! `n + 1` is only started after the root task of level `n` has returned.

use ndarray::{s, ArrayView1, ArrayViewMut1, Axis};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::stencil::update_span;

/// Widest span evaluated without splitting further.
pub const THRESHOLD: usize = 10;

/// The half-open spatial range `[start, end)` of time level `level` that one task computes.
///
/// Computing a task writes `u[level + 1][start..end]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Task {
    pub level: usize,
    pub start: usize,
    pub end: usize,
}

impl Task {
    /// The root task of a time level, covering every interior index.
    pub fn root(level: usize, nx: usize) -> Task {
        Task {
            level,
            start: 1,
            end: nx - 1,
        }
    }

    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Halves the task at `(start + end) / 2`, or returns `None` if it is a leaf.
    pub fn split(&self, threshold: usize) -> Option<(Task, Task)> {
        if self.width() <= threshold {
            return None;
        }
        let mid = (self.start + self.end) / 2;
        Some((Task { end: mid, ..*self }, Task { start: mid, ..*self }))
    }

    /// Leaves of the task tree rooted at `self`, left to right.
    pub fn leaves(&self, threshold: usize) -> Vec<Task> {
        match self.split(threshold) {
            None => vec![*self],
            Some((left, right)) => {
                let mut leaves = left.leaves(threshold);
                leaves.extend(right.leaves(threshold));
                leaves
            }
        }
    }
}

/// Computes `task`, where `next` is the part of level `task.level + 1` covering exactly
/// `[task.start, task.end)`.
fn compute(task: Task,
           prev: ArrayView1<f64>,
           cur: ArrayView1<f64>,
           next: ArrayViewMut1<f64>,
           cfl: f64,
           threshold: usize) {
    debug_assert_eq!(next.len(), task.width());
    match task.split(threshold) {
        None => update_span(prev, cur, next, task.start, cfl),
        Some((left, right)) => {
            let (next_left, next_right) = next.split_at(Axis(0), left.width());
            rayon::join(|| compute(left, prev, cur, next_left, cfl, threshold),
                        || compute(right, prev, cur, next_right, cfl, threshold));
        }
    }
}

/// A fixed-size worker pool running the stencil as recursively split tasks.
pub struct Scheduler {
    pool: ThreadPool,
    threshold: usize,
}

impl Scheduler {
    /// A pool of exactly `workers` threads using the default `THRESHOLD`.
    pub fn new(workers: usize) -> Result<Scheduler> {
        Scheduler::with_threshold(workers, THRESHOLD)
    }

    /// Same as `new`, with a different leaf width. A threshold of 0 is treated as 1.
    pub fn with_threshold(workers: usize, threshold: usize) -> Result<Scheduler> {
        if workers == 0 {
            return Err(Error::Workers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("wave1d-worker-{}", i))
            .build()?;
        Ok(Scheduler {
            pool,
            threshold: threshold.max(1),
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Fills levels `2..nt` of `grid`, one task tree per level.
    ///
    /// Level 1 comes from the grid bootstrap and is never recomputed here. The result is
    /// bit-identical to `run_sequential`.
    pub fn run(&self, grid: &mut Grid) {
        let nx = grid.params().nx();
        let nt = grid.params().nt();
        let cfl = grid.params().cfl();
        let threshold = self.threshold;

        self.pool.install(|| {
            for n in 1..nt - 1 {
                grid.with_step(n, |prev, cur, mut next| {
                    next[0] = 0.;
                    next[nx - 1] = 0.;
                    let interior = next.slice_move(s![1..nx - 1]);
                    compute(Task::root(n, nx), prev, cur, interior, cfl, threshold);
                });
            }
        });
    }
}
