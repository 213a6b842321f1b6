//! Simulation parameters and the CFL stability check.

use crate::error::{Error, Result};

/// Immutable parameter bundle of one simulation.
///
/// - `c`: propagation speed
/// - `length`: domain length `L`, the grid covers `[0, L]`
/// - `duration`: simulated time `T`
/// - `nx`: number of spatial points, `dx = L / (nx - 1)`
/// - `nt`: number of time levels, `dt = T / nt`
/// - `cfl`: Courant number `c·dt/dx`, never above 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
    c: f64,
    length: f64,
    duration: f64,
    nx: usize,
    nt: usize,
    dx: f64,
    dt: f64,
    cfl: f64,
}

impl Params {
    /// Derives `dx`, `dt` and `cfl` and rejects unstable or degenerate setups.
    pub fn new(c: f64, length: f64, duration: f64, nx: usize, nt: usize) -> Result<Params> {
        for &(name, value) in &[("c", c), ("length", length), ("duration", duration)] {
            if !value.is_finite() || value <= 0. {
                return Err(Error::Parameter { name, value });
            }
        }
        let size = nx.checked_mul(nt)
            .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize);
        if nx < 3 || nt < 2 || size.is_none() {
            return Err(Error::Dimensions { nx, nt });
        }

        let params = Params::derive(c, length, duration, nx, nt);
        if params.cfl > 1. {
            return Err(Error::Cfl { cfl: params.cfl });
        }
        Ok(params)
    }

    fn derive(c: f64, length: f64, duration: f64, nx: usize, nt: usize) -> Params {
        let dx = length / (nx - 1) as f64;
        let dt = duration / nt as f64;
        Params {
            c,
            length,
            duration,
            nx,
            nt,
            dx,
            dt,
            cfl: c * dt / dx,
        }
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn nt(&self) -> usize {
        self.nt
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn cfl(&self) -> f64 {
        self.cfl
    }
}

impl Default for Params {
    /// `c = 1`, `L = 10`, `T = 5`, `nx = 101`, `nt = 200`, giving `cfl = 0.25`.
    fn default() -> Params {
        Params::derive(1., 10., 5., 101, 200)
    }
}
