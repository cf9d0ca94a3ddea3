// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt;

use once_cell::sync::Lazy;
use rand::{
    distributions::{Distribution, Standard, Uniform},
    Rng,
};

use crate::BOARD_SIZE;

/// Uniform distribution over a single axis of the board.
static AXIS: Lazy<Uniform<usize>> = Lazy::new(|| Uniform::new_inclusive(1, BOARD_SIZE));

/// Position of a cell on the board. Both axes are 1-based; `x` selects the column and
/// `y` the row. A coordinate may lie outside the board, it is up to the [`Board`] to
/// check bounds.
///
/// [`Board`]: crate::board::Board
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Iterate the up-to-8 cells touching this one, including diagonals. Neighbors
    /// that would fall below zero are skipped; neighbors past the far edge of the board
    /// are still produced and must be clipped by the caller.
    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            center: self,
            next: 0,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl Distribution<Coordinate> for Standard {
    /// Sample a coordinate uniformly from the whole board.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(rng.sample(&*AXIS), rng.sample(&*AXIS))
    }
}

/// Offsets of the 8 surrounding cells, row by row.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the neighbors of a [`Coordinate`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coordinate,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.next) {
            self.next += 1;
            let x = offset(self.center.x, dx);
            let y = offset(self.center.y, dy);
            if let (Some(x), Some(y)) = (x, y) {
                return Some(Coordinate::new(x, y));
            }
        }
        None
    }
}

/// Shift `base` by `delta`, failing on underflow.
fn offset(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(delta.unsigned_abs())
    } else {
        base.checked_add(delta as usize)
    }
}
