//! Initial displacement profiles `f(x)` on `[0, L]`.

/// Triangular pulse of unit height peaking at `L / 2`, zero at both ends.
pub fn triangle(length: f64) -> impl Fn(f64) -> f64 + Copy {
    move |x| if x < length / 2. {
        2. * x / length
    } else {
        2. * (1. - x / length)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_shape() {
        let f = triangle(10.);
        assert_eq!(f(0.), 0.);
        assert_eq!(f(2.5), 0.5);
        assert_eq!(f(5.), 1.);
        assert_eq!(f(7.5), 0.5);
        assert_eq!(f(10.), 0.);
    }
}
