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
//! Flat storage for the cells of a board.

use std::ops::{Index, IndexMut};

use crate::{
    board::{CellState, Coordinate},
    BOARD_SIZE,
};

/// A single cell in the grid.
#[derive(Debug, Copy, Clone)]
pub(super) struct GridCell {
    /// What currently occupies this cell.
    pub(super) state: CellState,

    /// Index of the ship covering this cell, if any.
    pub(super) ship: Option<usize>,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            state: CellState::Empty,
            ship: None,
        }
    }
}

/// Square grid of `BOARD_SIZE * BOARD_SIZE` cells stored row by row.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Check if the given [`Coordinate`] lies on the grid.
    pub(super) fn contains(coord: Coordinate) -> bool {
        (1..=BOARD_SIZE).contains(&coord.x) && (1..=BOARD_SIZE).contains(&coord.y)
    }

    /// Convert a coordinate to an index into `cells`, or `None` if out of bounds.
    fn try_linearize(coord: Coordinate) -> Option<usize> {
        if Self::contains(coord) {
            Some((coord.y - 1) * BOARD_SIZE + (coord.x - 1))
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&GridCell> {
        Self::try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut GridCell> {
        Self::try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
