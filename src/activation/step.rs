/// Hard threshold: 1 for strictly positive input, 0 otherwise.
///
/// Used both as the node activation and as the derivative term during
/// training, so `step(0.0)` must stay `0.0`.
pub fn step(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_fires() {
        assert_eq!(step(1e-12), 1.0);
        assert_eq!(step(42.0), 1.0);
    }

    #[test]
    fn zero_and_negative_stay_off() {
        assert_eq!(step(0.0), 0.0);
        assert_eq!(step(-0.0), 0.0);
        assert_eq!(step(-3.5), 0.0);
    }

    #[test]
    fn nan_stays_off() {
        assert_eq!(step(f64::NAN), 0.0);
    }
}
