//! Space-time grid `u[n][i]` and its first two time levels.

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis};

use crate::params::Params;

/// The `nt × nx` array of displacements together with the parameters that produced it.
///
/// Levels 0 and 1 are filled on construction; the drivers fill levels `2..nt`.
#[derive(Debug, Clone)]
pub struct Grid {
    params: Params,
    x: Array1<f64>,
    u: Array2<f64>,
}

impl Grid {
    /// Allocates the grid, sets `u[0][i] = f(x[i])` and bootstraps level 1 with the
    /// second-order Taylor step
    /// `u[1][i] = u[0][i] + ½·cfl²·(u[0][i+1] − 2·u[0][i] + u[0][i−1])`.
    ///
    /// The boundary of level 1 and every later level is left at 0.
    pub fn new<F>(params: Params, f: F) -> Grid
        where F: Fn(f64) -> f64
    {
        let (nx, nt) = (params.nx(), params.nt());
        let dx = params.dx();
        let cfl = params.cfl();

        let x = Array1::from_shape_fn(nx, |i| i as f64 * dx);
        let mut u = Array2::zeros((nt, nx));

        u.row_mut(0).assign(&x.mapv(&f));

        let (first, mut rest) = u.view_mut().split_at(Axis(0), 1);
        let u0 = first.row(0);
        let mut u1 = rest.row_mut(0);
        for i in 1..nx - 1 {
            u1[i] = u0[i] + 0.5 * cfl * cfl * (u0[i + 1] - 2. * u0[i] + u0[i - 1]);
        }

        Grid { params, x, u }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Spatial coordinates `x[i] = i·dx`.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// The whole array, indexed `[time_level, spatial_index]`.
    pub fn values(&self) -> &Array2<f64> {
        &self.u
    }

    pub fn level(&self, n: usize) -> ArrayView1<'_, f64> {
        self.u.row(n)
    }

    /// Level `nt - 1`, the result of a completed run.
    pub fn final_level(&self) -> ArrayView1<'_, f64> {
        self.u.row(self.params.nt() - 1)
    }

    /// Largest `|u|` on level `n`.
    pub fn max_abs(&self, n: usize) -> f64 {
        self.u.row(n).fold(0., |m: f64, v| m.max(v.abs()))
    }

    /// Lends out levels `n - 1` and `n` for reading and level `n + 1` for writing.
    ///
    /// The split is along the time axis, so the writable row never aliases the rows being
    /// read.
    pub fn with_step<R, F>(&mut self, n: usize, f: F) -> R
        where F: FnOnce(ArrayView1<'_, f64>, ArrayView1<'_, f64>, ArrayViewMut1<'_, f64>) -> R
    {
        assert!(n >= 1 && n + 1 < self.params.nt(),
                "time level {} has no successor to compute",
                n);
        let (past, mut future) = self.u.view_mut().split_at(Axis(0), n + 1);
        f(past.row(n - 1), past.row(n), future.row_mut(0))
    }
}
