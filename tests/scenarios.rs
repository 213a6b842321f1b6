use fdm_wave1d::initial::triangle;
use fdm_wave1d::{run_sequential, Error, Grid, Harness, Params, Scheduler};

fn simulate_both(p: Params, workers: usize) -> (Grid, Grid) {
    let mut seq = Grid::new(p, triangle(p.length()));
    run_sequential(&mut seq);
    let mut par = Grid::new(p, triangle(p.length()));
    Scheduler::new(workers).unwrap().run(&mut par);
    (seq, par)
}

#[test]
fn cfl_exactly_one_runs() {
    let p = Params::new(1., 10., 5., 101, 50).unwrap();
    assert!(p.cfl() <= 1.);
    let (seq, par) = simulate_both(p, 4);
    assert_eq!(seq.values(), par.values());
    assert!(seq.final_level().iter().all(|v| v.is_finite()));
}

#[test]
fn doubled_time_step_produces_no_grid() {
    let err = Params::new(1., 10., 10., 101, 50).unwrap_err();
    assert!(matches!(err, Error::Cfl { .. }));
    assert_eq!(err.to_string(), "Error: Condición CFL no cumplida.");
}

#[test]
fn final_amplitude_stays_below_initial() {
    let p = Params::new(1., 10., 2., 101, 200).unwrap();
    let (seq, _) = simulate_both(p, 2);
    let initial = seq.max_abs(0);
    assert!(initial <= 1.);
    assert!(seq.max_abs(p.nt() - 1) <= initial);
}

#[test]
fn parallel_is_bit_identical_for_all_pool_sizes() {
    let p = Params::default();
    for &workers in &[1, 2, 4, 8, 16] {
        let (seq, par) = simulate_both(p, workers);
        assert_eq!(seq.values(), par.values(), "workers = {}", workers);
    }
}

#[test]
fn boundaries_are_zero_after_bootstrap() {
    for &(c, l, t, nx, nt) in &[(0.5, 10., 2., 201, 400), (1., 10., 2., 51, 100)] {
        let p = Params::new(c, l, t, nx, nt).unwrap();
        let (seq, par) = simulate_both(p, 3);
        for n in 1..nt {
            for g in &[&seq, &par] {
                assert_eq!(g.level(n)[0], 0.);
                assert_eq!(g.level(n)[nx - 1], 0.);
            }
        }
    }
}

#[test]
fn fast_wave_on_coarse_grid_is_rejected() {
    // c = 2, dx = 0.2, dt = 0.02: cfl = 0.2
    assert!(Params::new(2., 10., 2., 51, 100).is_ok());
    // c = 2, dx = 0.1, dt = 0.1: cfl = 2
    assert!(matches!(Params::new(2., 10., 2., 101, 20), Err(Error::Cfl { .. })));
}

#[test]
fn benchmark_table_has_one_row_per_pool_size() {
    let p = Params::default();
    let report = Harness::new(p, triangle(p.length())).run(&[1, 2, 4]).unwrap();

    let mut out = Vec::new();
    report.write_table(&mut out).unwrap();
    let table = String::from_utf8(out).unwrap();
    let rows: Vec<Vec<&str>> = table.lines().map(|l| l.split(' ').collect()).collect();

    assert_eq!(rows.len(), 3);
    for (row, workers) in rows.iter().zip(&["1", "2", "4"]) {
        assert_eq!(row.len(), 3);
        assert_eq!(&row[0], workers);
        assert_eq!(row[1].split('.').nth(1).map(str::len), Some(4));
        assert!(row[2].parse::<f64>().unwrap() > 0.);
    }
    assert!(table.ends_with('\n'));
}

#[test]
fn results_file_is_written() {
    let p = Params::new(1., 10., 2., 51, 40).unwrap();
    let report = Harness::new(p, triangle(p.length())).run(&[1, 2]).unwrap();
    let path = std::env::temp_dir().join(format!("wave1d-{}.dat", std::process::id()));
    report.export(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("1 "));
}

#[test]
fn export_to_missing_directory_fails_with_io_error() {
    let p = Params::new(1., 10., 2., 11, 4).unwrap();
    let report = Harness::new(p, triangle(p.length())).run(&[1]).unwrap();
    let path = std::env::temp_dir().join("wave1d-no-such-dir").join("out.dat");
    assert!(matches!(report.export(&path), Err(Error::Io(_))));
}
