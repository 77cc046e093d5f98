// ---------------------------------------------------------------------------
// Spectrum – the loaded (wavelength, power) table
// ---------------------------------------------------------------------------

/// A single spectrum read from the generator's data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Wavelength axis (x), in Angstroms.
    pub wavelengths: Vec<f64>,
    /// Power axis (y) – same length as `wavelengths`.
    pub power: Vec<f64>,
}

impl Spectrum {
    /// Number of (wavelength, power) samples.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Whether the spectrum holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Iterate over `(wavelength, power)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths.iter().copied().zip(self.power.iter().copied())
    }

    /// Smallest and largest finite wavelength, or `None` if there is none.
    pub fn wavelength_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.wavelengths)
    }

    /// Smallest and largest finite power value.
    pub fn power_bounds(&self) -> Option<(f64, f64)> {
        bounds(&self.power)
    }
}

/// Min/max over the finite values only; `NaN` and infinities are skipped.
fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|v| v.is_finite()).peekable();
    finite.peek()?;
    Some(finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_unsorted_values() {
        let sp = Spectrum {
            wavelengths: vec![2.0, 1.0, 3.0],
            power: vec![0.5, 0.9, 0.1],
        };
        assert_eq!(sp.wavelength_bounds(), Some((1.0, 3.0)));
        assert_eq!(sp.power_bounds(), Some((0.1, 0.9)));
    }

    #[test]
    fn test_empty_spectrum_has_no_bounds() {
        let sp = Spectrum::default();
        assert!(sp.is_empty());
        assert_eq!(sp.wavelength_bounds(), None);
        assert_eq!(sp.points().count(), 0);
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let sp = Spectrum {
            wavelengths: vec![1.0, f64::NAN, 2.0],
            power: vec![f64::INFINITY, 0.5, 0.25],
        };
        assert_eq!(sp.wavelength_bounds(), Some((1.0, 2.0)));
        assert_eq!(sp.power_bounds(), Some((0.25, 0.5)));

        let all_nan = Spectrum {
            wavelengths: vec![f64::NAN],
            power: vec![f64::NAN],
        };
        assert_eq!(all_nan.wavelength_bounds(), None);
    }
}
