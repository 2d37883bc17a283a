//! Single-scene band math over 2-D reflectance rasters.
use ndarray::{Array2, Zip};

use crate::error::{Error, Result};

/// Default soil-brightness correction for [`savi`].
pub const SAVI_SOIL_FACTOR: f64 = 0.5;

fn check_shapes(a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(Error::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(())
}

/// Normalized Difference Vegetation Index: `(nir - red) / (nir + red)`.
///
/// Both rasters must have the same shape. Pixels where both bands are zero
/// divide 0 by 0 and come out NaN.
pub fn ndvi(red: &Array2<f64>, nir: &Array2<f64>) -> Result<Array2<f64>> {
    check_shapes(red, nir)?;
    Ok(Zip::from(nir).and(red).map_collect(|&n, &r| (n - r) / (n + r)))
}

/// Soil-Adjusted Vegetation Index:
/// `((nir - red) / (nir + red + L)) * (1 + L)`.
///
/// `scale` is the soil-brightness correction L, defaulting to
/// [`SAVI_SOIL_FACTOR`] when `None`.
pub fn savi(nir: &Array2<f64>, red: &Array2<f64>, scale: Option<f64>) -> Result<Array2<f64>> {
    check_shapes(nir, red)?;
    let l = scale.unwrap_or(SAVI_SOIL_FACTOR);
    Ok(Zip::from(nir)
        .and(red)
        .map_collect(|&n, &r| (n - r) / (n + r + l) * (1.0 + l)))
}
