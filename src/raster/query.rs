use crate::core::geo::GeoBounds;
use crate::{RasterError, Result};
use serde::{Deserialize, Serialize};

/// A viewport query: the requested geographic box (upper-left and
/// lower-right corners, degrees) and the pixel size of the viewport it
/// will be displayed in.
///
/// Field names match the wire parameters of the map request
/// (`ullon`, `ullat`, `lrlon`, `lrlat`, `w`, `h`), so the struct
/// deserializes directly from the query mapping a host receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterQuery {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
    pub w: f64,
    pub h: f64,
}

impl RasterQuery {
    pub fn new(ullon: f64, ullat: f64, lrlon: f64, lrlat: f64, w: f64, h: f64) -> Self {
        Self {
            ullon,
            ullat,
            lrlon,
            lrlat,
            w,
            h,
        }
    }

    /// The requested box as a [`GeoBounds`]
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::new(self.ullon, self.ullat, self.lrlon, self.lrlat)
    }

    /// Longitudinal distance per pixel the viewport asks for
    pub fn lon_dpp(&self) -> f64 {
        self.bounds().lon_dpp(self.w)
    }

    /// Rejects malformed queries before any planning arithmetic runs.
    ///
    /// The viewport must be finite and strictly positive in both axes,
    /// and the box must be finite with its upper-left corner strictly
    /// north-west of the lower-right one.
    pub fn validate(&self) -> Result<()> {
        if !self.w.is_finite() || !self.h.is_finite() || self.w <= 0.0 || self.h <= 0.0 {
            return Err(RasterError::InvalidViewport(format!(
                "viewport must be finite and positive, got {}x{} px",
                self.w, self.h
            )));
        }
        let bounds = self.bounds();
        if !bounds.is_finite() {
            return Err(RasterError::InvalidBox(format!(
                "coordinates must be finite, got {:?}",
                bounds
            )));
        }
        if !bounds.is_well_formed() {
            return Err(RasterError::InvalidBox(format!(
                "upper-left corner must be strictly north-west of lower-right, got {:?}",
                bounds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_query() -> RasterQuery {
        RasterQuery::new(-122.25, 37.88, -122.23, 37.86, 800.0, 600.0)
    }

    #[test]
    fn test_valid_query_passes() {
        assert!(valid_query().validate().is_ok());
    }

    #[test]
    fn test_lon_dpp() {
        let q = valid_query();
        assert_eq!(q.lon_dpp(), (q.lrlon - q.ullon) / q.w);
    }

    #[test]
    fn test_rejects_non_positive_viewport() {
        for (w, h) in [(0.0, 600.0), (-800.0, 600.0), (800.0, 0.0)] {
            let q = RasterQuery { w, h, ..valid_query() };
            assert!(matches!(
                q.validate(),
                Err(RasterError::InvalidViewport(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_viewport() {
        let q = RasterQuery {
            w: f64::NAN,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidViewport(_))));
        let q = RasterQuery {
            h: f64::INFINITY,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidViewport(_))));
    }

    #[test]
    fn test_rejects_inverted_box() {
        let q = RasterQuery {
            ullon: -122.23,
            lrlon: -122.25,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidBox(_))));
        let q = RasterQuery {
            ullat: 37.86,
            lrlat: 37.88,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidBox(_))));
    }

    #[test]
    fn test_rejects_zero_area_box() {
        let q = RasterQuery {
            ullon: -122.24,
            lrlon: -122.24,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidBox(_))));
    }

    #[test]
    fn test_rejects_non_finite_coordinate() {
        let q = RasterQuery {
            ullat: f64::NAN,
            ..valid_query()
        };
        assert!(matches!(q.validate(), Err(RasterError::InvalidBox(_))));
    }
}
