use crate::grid::Grid;
use crate::stencil::update;

/// Fills levels `2..nt` one after another, sweeping the interior left to right.
///
/// Both boundary cells of every computed level are set to 0.
pub fn run_sequential(grid: &mut Grid) {
    let nx = grid.params().nx();
    let nt = grid.params().nt();
    let cfl = grid.params().cfl();

    for n in 1..nt - 1 {
        grid.with_step(n, |prev, cur, mut next| {
            for i in 1..nx - 1 {
                next[i] = update(prev, cur, i, cfl);
            }
            next[0] = 0.;
            next[nx - 1] = 0.;
        });
    }
}
