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
//! Ships and their placement on the board.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{board::Coordinate, MAX_SHIP_LEN};

/// Direction a ship extends in from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends towards increasing `x`.
    Horizontal,
    /// The ship extends towards increasing `y`.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship anchored at its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    bow: Coordinate,
    len: usize,
    orientation: Orientation,
    hitpoints: usize,
}

impl Ship {
    /// Construct an undamaged ship. Panics if `len` is 0 or longer than
    /// [`MAX_SHIP_LEN`].
    pub fn new(bow: Coordinate, len: usize, orientation: Orientation) -> Self {
        assert!(
            len > 0 && len <= MAX_SHIP_LEN,
            "ship length must be in 1..={}, got {}",
            MAX_SHIP_LEN,
            len
        );
        Self {
            bow,
            len,
            orientation,
            hitpoints: len,
        }
    }

    /// Coordinate the rest of the ship is derived from.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells of the ship that have not been hit yet.
    pub fn hitpoints(&self) -> usize {
        self.hitpoints
    }

    /// Check if every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hitpoints == 0
    }

    /// Get the cells covered by this ship, starting at the bow.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self.bow;
        let orientation = self.orientation;
        (0..self.len).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// Check whether `coord` is one of this ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.occupied_coordinates().any(|c| c == coord)
    }

    /// Take one hit. Only the board tracks which cells were hit, so this is not public.
    pub(crate) fn take_hit(&mut self) {
        self.hitpoints = self.hitpoints.saturating_sub(1);
    }
}
