//! Labeled N-dimensional array container and the `NumericArray` capability
//! shared by labeled and plain `ndarray` inputs.
use chrono::NaiveDate;
use ndarray::{ArrayD, Zip};

use crate::error::{Error, Result};

/// An N-dimensional `f64` array with named axes, at most one of which carries
/// a calendar time coordinate. Index functions reduce along the time axis
/// only; spatial axes pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray {
    data: ArrayD<f64>,
    dims: Vec<String>,
    time: Option<TimeAxis>,
}

#[derive(Debug, Clone, PartialEq)]
struct TimeAxis {
    dim: String,
    stamps: Vec<NaiveDate>,
}

impl LabeledArray {
    /// Wrap raw data with one name per axis. Names must be unique and match
    /// the array rank.
    pub fn new<S: Into<String>>(data: ArrayD<f64>, dims: impl IntoIterator<Item = S>) -> Result<Self> {
        let dims: Vec<String> = dims.into_iter().map(Into::into).collect();
        if dims.len() != data.ndim() {
            return Err(Error::DimensionCount {
                expected: dims.len(),
                actual: data.ndim(),
            });
        }
        for (i, dim) in dims.iter().enumerate() {
            if dims[..i].contains(dim) {
                return Err(Error::DuplicateDimension { dim: dim.clone() });
            }
        }
        Ok(Self {
            data,
            dims,
            time: None,
        })
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Position of a named axis, if present.
    pub fn axis_of(&self, dim: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == dim)
    }

    /// Calendar coordinate attached to `dim`, if that axis is the time axis.
    pub fn time_coords(&self, dim: &str) -> Option<&[NaiveDate]> {
        self.time
            .as_ref()
            .filter(|t| t.dim == dim)
            .map(|t| t.stamps.as_slice())
    }

    /// Attach a calendar coordinate to `dim`, designating it the time axis.
    /// The coordinate length must match the axis length.
    pub fn with_time(mut self, dim: &str, stamps: Vec<NaiveDate>) -> Result<Self> {
        let axis = self.axis_of(dim).ok_or_else(|| Error::UnknownDimension {
            dim: dim.to_string(),
            available: self.dims.clone(),
        })?;
        let expected = self.data.shape()[axis];
        if stamps.len() != expected {
            return Err(Error::CoordinateLength {
                dim: dim.to_string(),
                expected,
                actual: stamps.len(),
            });
        }
        self.time = Some(TimeAxis {
            dim: dim.to_string(),
            stamps,
        });
        Ok(self)
    }

    /// Rename an axis, carrying its time coordinate along if it has one.
    pub fn rename_dim(&mut self, from: &str, to: &str) -> Result<()> {
        let axis = self.axis_of(from).ok_or_else(|| Error::UnknownDimension {
            dim: from.to_string(),
            available: self.dims.clone(),
        })?;
        if from == to {
            return Ok(());
        }
        if self.dims.iter().any(|d| d == to) {
            return Err(Error::DuplicateDimension { dim: to.to_string() });
        }
        self.dims[axis] = to.to_string();
        if let Some(time) = self.time.as_mut() {
            if time.dim == from {
                time.dim = to.to_string();
            }
        }
        Ok(())
    }

    /// Resolve the time axis for an index computation: `dim` names it
    /// explicitly, otherwise the first axis is assumed. The axis must exist
    /// and must carry a calendar coordinate.
    pub(crate) fn resolve_time_axis(&self, dim: Option<&str>) -> Result<(usize, &[NaiveDate])> {
        let dim = match dim {
            Some(d) => d,
            None => self.dims.first().map(String::as_str).unwrap_or_default(),
        };
        let axis = self.axis_of(dim).ok_or_else(|| Error::UnknownDimension {
            dim: dim.to_string(),
            available: self.dims.clone(),
        })?;
        let stamps = self
            .time_coords(dim)
            .ok_or_else(|| Error::MissingTimeCoordinate {
                dim: dim.to_string(),
            })?;
        Ok((axis, stamps))
    }

    /// Same labels and coordinates, new values. The replacement must keep
    /// the shape, which every index function does by construction.
    pub(crate) fn with_data(&self, data: ArrayD<f64>) -> Self {
        Self {
            data,
            dims: self.dims.clone(),
            time: self.time.clone(),
        }
    }
}

/// Capability shared by labeled and unlabeled numeric arrays: a shape and a
/// shape-preserving element-wise combination. `vhi` is generic over this,
/// so callers can blend either `LabeledArray`s or plain `ArrayD<f64>`s.
pub trait NumericArray: Sized {
    fn shape(&self) -> &[usize];

    /// Combine element-wise with `other`. Callers must have checked that the
    /// shapes match.
    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self;
}

impl NumericArray for ArrayD<f64> {
    fn shape(&self) -> &[usize] {
        ArrayD::shape(self)
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Zip::from(self).and(other).map_collect(|&a, &b| f(a, b))
    }
}

impl NumericArray for LabeledArray {
    fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| f(a, b));
        self.with_data(data)
    }
}
