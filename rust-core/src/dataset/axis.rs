//! Measurement axes and the fixed-shape per-axis record

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::Serialize;

use crate::error::SpectralError;

/// Measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in column order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Column position of the axis in an ingestion file
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Axis {
    type Err = SpectralError;

    /// Accepts a name (`x`, `y`, `z`, any case) or a column index (`0`..=`2`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Ok(index) = name.parse::<usize>() {
            return Axis::try_from(index);
        }
        match name.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(SpectralError::UnknownAxis(s.to_string())),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = SpectralError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SpectralError::UnknownAxis(index.to_string()))
    }
}

/// One value per axis
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisSeries<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> AxisSeries<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Build from a per-axis constructor
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
            z: f(Axis::Z),
        }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> AxisSeries<U> {
        AxisSeries {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Like [`AxisSeries::map`], stopping at the first error
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<AxisSeries<U>, E> {
        Ok(AxisSeries {
            x: f(self.x)?,
            y: f(self.y)?,
            z: f(self.z)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

impl<T> Index<Axis> for AxisSeries<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        self.get(axis)
    }
}

impl<T> IndexMut<Axis> for AxisSeries<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        self.get_mut(axis)
    }
}
