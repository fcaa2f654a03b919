// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.

use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// A row-major field of values addressed by `(x, y)`.  It holds the
/// energy field (plain `u32`s) and the cost table (a cost plus the
/// column of its parent in the row above).
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<T: Default + Copy> {
    pub width: u32,
    pub height: u32,
    pub(crate) data: Vec<T>,
}

impl<T: Default + Copy> TwoDimensionalMap<T> {
    /// A new map, every cell holding `T::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![T::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer is not exactly `width * height` long.
    pub fn from_raw(width: u32, height: u32, data: Vec<T>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    // Keep the index math in exactly one place.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One row of the map, left to right.
    pub fn row(&self, y: u32) -> &[T] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// The backing buffer, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<T: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// Render a map as a tab-separated table, one row per line.  Handy
/// for eyeballing small luminosity or energy fields.
pub fn format_table<T: Default + Copy + Display>(map: &TwoDimensionalMap<T>) -> String {
    (0..map.height)
        .map(|y| {
            map.row(y)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One cell of the cost table: the cheapest cumulative energy of any
/// seam reaching this pixel, and the column in the row above that it
/// came through.  Row 0 has no parent and keeps `0`.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostAndParent {
    pub cost: u32,
    pub parent: u32,
}
