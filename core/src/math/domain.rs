/// Closed value interval mapped onto one chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The fixed `[0, 1]` domain used for rates and probabilities.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Smallest domain covering every finite value.
    ///
    /// Falls back to `unit()` when nothing is finite. A zero-width span is
    /// widened by half a unit on each side, or by a few ulps of the value when
    /// half a unit is below its precision.
    pub fn fit<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Self::unit();
        }
        if min < max {
            return Self::new(min, max);
        }
        let pad = (min.abs().max(1.0) * f64::EPSILON * 4.0).max(0.5);
        Self::new((min - pad).max(f64::MIN), (max + pad).min(f64::MAX))
    }

    /// Width of the domain. May be infinite for bounds near `f64::MAX`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` within the domain, `0.0` at `min` and `1.0` at `max`.
    ///
    /// Works on halved values so spans wider than `f64::MAX` stay finite, and
    /// returns the midpoint for an empty or non-finite domain.
    pub fn normalize(&self, value: f64) -> f64 {
        let half_span = self.max / 2.0 - self.min / 2.0;
        if !(half_span.is_finite() && half_span > 0.0) {
            return 0.5;
        }
        (value / 2.0 - self.min / 2.0) / half_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_covers_all_values() {
        let domain = AxisDomain::fit([0.5, -1.0, 3.0]);
        assert_eq!(domain, AxisDomain::new(-1.0, 3.0));
        assert_eq!(domain.normalize(-1.0), 0.0);
        assert_eq!(domain.normalize(3.0), 1.0);
        assert_eq!(domain.normalize(1.0), 0.5);
    }

    #[test]
    fn fit_widens_flat_series() {
        let domain = AxisDomain::fit([2.0, 2.0]);
        assert_eq!(domain, AxisDomain::new(1.5, 2.5));
        assert_eq!(domain.normalize(2.0), 0.5);
    }

    #[test]
    fn fit_widens_flat_series_beyond_half_unit_precision() {
        let domain = AxisDomain::fit([1e17, 1e17]);
        assert!(domain.min < 1e17 && domain.max > 1e17);
        assert_eq!(domain.normalize(1e17), 0.5);

        let top = AxisDomain::fit([f64::MAX, f64::MAX]);
        assert!(top.min < top.max);
        assert!(top.normalize(f64::MAX).is_finite());
    }

    #[test]
    fn extreme_span_normalizes_without_overflow() {
        let domain = AxisDomain::fit([-1e308, 1e308]);
        assert!(domain.span().is_infinite());
        assert_eq!(domain.normalize(-1e308), 0.0);
        assert_eq!(domain.normalize(0.0), 0.5);
        assert_eq!(domain.normalize(1e308), 1.0);
    }

    #[test]
    fn degenerate_domain_normalizes_to_midpoint() {
        assert_eq!(AxisDomain::new(3.0, 3.0).normalize(3.0), 0.5);
        assert_eq!(AxisDomain::new(0.0, f64::NAN).normalize(1.0), 0.5);
    }

    #[test]
    fn fit_without_finite_values_is_unit() {
        assert_eq!(AxisDomain::fit(Vec::<f64>::new()), AxisDomain::unit());
        assert_eq!(AxisDomain::fit([f64::NAN]), AxisDomain::unit());
    }
}
