//! The explicit three-point update, shared by every driver.

use ndarray::{ArrayView1, ArrayViewMut1};

/// Computes `u[n + 1][i]` from the two previous levels.
///
/// - `prev`: level `n - 1`
/// - `cur`: level `n`
/// - `i`: interior index, `1 <= i <= nx - 2`
/// - `cfl`: Courant number c·dt/dx
///
/// Every driver evaluates exactly this expression, so sequential and parallel runs agree
/// bit for bit.
#[inline]
pub fn update(prev: ArrayView1<f64>, cur: ArrayView1<f64>, i: usize, cfl: f64) -> f64 {
    2. * cur[i] - prev[i] + cfl * cfl * (cur[i + 1] - 2. * cur[i] + cur[i - 1])
}

/// Applies `update` to the indices `start..start + next.len()`.
///
/// `next` is the part of level `n + 1` covering exactly that span, so `next[k]` receives the
/// value for index `start + k`.
pub fn update_span(prev: ArrayView1<f64>,
                   cur: ArrayView1<f64>,
                   mut next: ArrayViewMut1<f64>,
                   start: usize,
                   cfl: f64) {
    let nx = cur.len();
    debug_assert_eq!(prev.len(), nx);
    debug_assert!(start >= 1);
    debug_assert!(start + next.len() <= nx - 1);

    for (k, w) in next.iter_mut().enumerate() {
        *w = update(prev, cur, start + k, cfl);
    }
}
