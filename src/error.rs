use thiserror::Error;

/// Errors reported by the simulation and the benchmark harness.
#[derive(Error, Debug)]
pub enum Error {
    /// `c·dt/dx > 1`: the explicit scheme would be unstable.
    #[error("Error: Condición CFL no cumplida.")]
    Cfl { cfl: f64 },

    #[error("unusable grid nx={nx}, nt={nt}: need nx >= 3, nt >= 2 and an addressable nx·nt array")]
    Dimensions { nx: usize, nt: usize },

    #[error("parameter `{name}` must be finite and positive, got {value}")]
    Parameter { name: &'static str, value: f64 },

    #[error("worker count must be at least 1")]
    Workers,

    #[error("failed to build thread pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
