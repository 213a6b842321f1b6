//! Finite difference method for the 1-D wave equation `u_tt = c² u_xx` with fixed ends.
//!
//! The scheme is the standard central 2nd order difference in space and time on an
//! `nt × nx` grid. Levels 0 and 1 come from the initial condition and a Taylor bootstrap;
//! every later level is computed either by a plain sequential sweep or by recursively split
//! tasks on a thread pool, and both give bit-identical grids.

pub mod error;
pub mod grid;
pub mod harness;
pub mod initial;
pub mod parallel;
pub mod params;
pub mod sequential;
pub mod stencil;

pub use error::{Error, Result};
pub use grid::Grid;
pub use harness::{Harness, Progress, Record, Report};
pub use parallel::{Scheduler, Task, THRESHOLD};
pub use params::Params;
pub use sequential::run_sequential;
pub use stencil::update;
