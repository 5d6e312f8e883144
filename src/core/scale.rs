use crate::error::{CrafterError, CrafterResult};

/// Linear mapping from a value domain onto a pixel span.
///
/// The pixel span may be reversed (`pixel_start > pixel_end`), which is how
/// vertical axes map larger values upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> CrafterResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(CrafterError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(CrafterError::InvalidData(
                "scale pixel span must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64) -> CrafterResult<f64> {
        if !value.is_finite() {
            return Err(CrafterError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn reversed_pixel_span_maps_larger_values_upwards() {
        let scale = LinearScale::new(0.0, 10.0, 500.0, 100.0).expect("valid scale");
        assert_eq!(scale.domain_to_pixel(0.0).expect("px"), 500.0);
        assert_eq!(scale.domain_to_pixel(10.0).expect("px"), 100.0);
        assert_eq!(scale.domain_to_pixel(5.0).expect("px"), 300.0);
    }

    #[test]
    fn zero_width_domain_is_rejected() {
        assert!(LinearScale::new(3.0, 3.0, 0.0, 100.0).is_err());
        assert!(LinearScale::new(0.0, 1.0, 50.0, 50.0).is_err());
    }
}
