//! Random weight shaping.

use rand::Rng;

use crate::models::{GeneratorSettings, WeightDistribution};

/// Draws a factor in `[0, 1)` shaped by the distribution.
pub fn random_factor<R: Rng + ?Sized>(distribution: WeightDistribution, rng: &mut R) -> f64 {
    match distribution {
        WeightDistribution::Uniform => rng.gen::<f64>(),
        WeightDistribution::FavorLow => rng.gen::<f64>().powi(2),
        WeightDistribution::FavorHigh => 1.0 - (1.0 - rng.gen::<f64>()).powi(2),
        // Mean of two uniforms: triangular, peaking at 0.5
        WeightDistribution::Normal => (rng.gen::<f64>() + rng.gen::<f64>()) / 2.0,
    }
}

/// Draws a weight inside the settings' (normalized) weight range.
pub fn sample_weight<R: Rng + ?Sized>(settings: &GeneratorSettings, rng: &mut R) -> f64 {
    let (low, high) = settings.weight_bounds();
    random_factor(settings.distribution, rng).mul_add(high - low, low)
}

/// Formats a weight the way it appears in the annotation.
///
/// Two decimals. A value exactly halfway between two cents rounds away from
/// zero (`0.125` is `"0.13"`); `{:.2}` alone would round it to even.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if is_cent_tie(weight) {
        let rounded = (weight * 100.0).round() / 100.0;
        return format!("{rounded:.2}");
    }
    format!("{weight:.2}")
}

/// Exact cent midpoints are the odd multiples of 1/8; scaling by 8 is exact.
#[allow(clippy::float_cmp)]
fn is_cent_tie(weight: f64) -> bool {
    let eighths = weight * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mean_factor(distribution: WeightDistribution) -> f64 {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 4000;
        (0..samples)
            .map(|_| random_factor(distribution, &mut rng))
            .sum::<f64>()
            / f64::from(samples)
    }

    #[test]
    fn test_factors_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        for distribution in WeightDistribution::ALL {
            for _ in 0..500 {
                let factor = random_factor(distribution, &mut rng);
                assert!((0.0..1.0).contains(&factor), "{distribution}: {factor}");
            }
        }
    }

    #[test]
    fn test_distributions_skew_as_named() {
        let low = mean_factor(WeightDistribution::FavorLow);
        let uniform = mean_factor(WeightDistribution::Uniform);
        let high = mean_factor(WeightDistribution::FavorHigh);
        let normal = mean_factor(WeightDistribution::Normal);

        // Expected means: 1/3, 1/2, 2/3, 1/2
        assert!((low - 1.0 / 3.0).abs() < 0.05, "favor-low mean {low}");
        assert!((uniform - 0.5).abs() < 0.05, "uniform mean {uniform}");
        assert!((high - 2.0 / 3.0).abs() < 0.05, "favor-high mean {high}");
        assert!((normal - 0.5).abs() < 0.05, "normal mean {normal}");
    }

    #[test]
    fn test_sample_weight_handles_inverted_range() {
        let settings = GeneratorSettings {
            min_weight: 1.2,
            max_weight: 0.4,
            ..GeneratorSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let weight = sample_weight(&settings, &mut rng);
            assert!((0.4..=1.2).contains(&weight), "weight {weight}");
        }
    }

    #[test]
    fn test_format_weight_two_decimals() {
        assert_eq!(format_weight(1.0), "1.00");
        assert_eq!(format_weight(0.0), "0.00");
        assert_eq!(format_weight(0.004), "0.00");
        assert_eq!(format_weight(1.456), "1.46");
    }

    #[test]
    fn test_format_weight_rounds_exact_ties_up() {
        assert_eq!(format_weight(0.125), "0.13");
        assert_eq!(format_weight(0.625), "0.63");
        assert_eq!(format_weight(1.125), "1.13");
        assert_eq!(format_weight(2.875), "2.88");
        assert_eq!(format_weight(-0.125), "-0.13");
        // Not exact ties in binary: plain rounding applies
        assert_eq!(format_weight(1.005), "1.00");
        assert_eq!(format_weight(0.25), "0.25");
    }
}
