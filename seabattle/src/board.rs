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
//! Types that make up the game board.

use std::fmt;

use log::trace;

use crate::{ships::Ship, BOARD_SIZE};

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, Neighbors},
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// State of a single cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water that has not been shot.
    Empty,
    /// Part of a ship that has not been shot.
    Ship,
    /// Water that was shot.
    Missed,
    /// Part of a ship that was shot.
    Hit,
    /// Open water next to a ship. No other ship may be placed here; for shooting it
    /// counts as plain water.
    DeadZone,
}

impl CellState {
    /// Whether a shot was already fired at this cell.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Missed | CellState::Hit)
    }
}

/// Reference to a particular cell in the board.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Current state of the cell.
    state: CellState,

    /// The ship covering this cell, if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// The ship that covers this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }
}

/// Result of a shot that landed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot fell into water.
    Miss,
    /// The shot struck a ship.
    Hit,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
        })
    }
}

/// A single side's board: the grid, the ships placed on it and how much of the fleet
/// is still afloat.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell states.
    grid: Grid,

    /// Every ship placed on this board, sunk or not. Grid cells refer to ships by their
    /// index here.
    ships: Vec<Ship>,

    /// Sum of the hitpoints of all ships. Kept alongside the ships so the defeat check
    /// does not have to walk the fleet.
    hitpoints: usize,

    /// Whether ships are shown when the board is displayed.
    reveal: bool,
}

impl Board {
    /// Construct an empty, revealed board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
            hitpoints: 0,
            reveal: true,
        }
    }

    /// Check if `coord` lies on the board.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        Grid::contains(coord)
    }

    /// Try to place a ship on the board. Every cell of the ship must be on the board and
    /// still open water; otherwise nothing is changed and the ship is handed back in the
    /// error. Placing a ship does not draw its contour, see [`Board::draw_contour`].
    pub fn place(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for coord in ship.occupied_coordinates() {
            match self.grid.get(coord) {
                None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship)),
                Some(cell) if cell.state != CellState::Empty => {
                    return Err(PlaceError::new(CannotPlaceReason::Collision, ship))
                }
                _ => {}
            }
        }
        let idx = self.ships.len();
        // Already ensured that every position is valid and empty.
        for coord in ship.occupied_coordinates() {
            let cell = &mut self.grid[coord];
            cell.state = CellState::Ship;
            cell.ship = Some(idx);
        }
        self.hitpoints += ship.len();
        self.ships.push(ship);
        trace!("placed ship of length {} at {}", ship.len(), ship.bow());
        Ok(())
    }

    /// Mark the open water around `ship` as [`CellState::DeadZone`] so that no other
    /// ship can be placed touching it, diagonals included. Cells off the board and cells
    /// that are not open water are left alone, so drawing the same contour twice is
    /// the same as drawing it once.
    pub fn draw_contour(&mut self, ship: &Ship) {
        for coord in ship.occupied_coordinates() {
            for neighbor in coord.neighbors() {
                if let Some(cell) = self.grid.get_mut(neighbor) {
                    if cell.state == CellState::Empty {
                        cell.state = CellState::DeadZone;
                    }
                }
            }
        }
    }

    /// Fire a shot at the given cell of this board.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) if cell.state.is_shot() => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
            Some(cell) => cell,
        };
        match cell.ship {
            Some(idx) => {
                cell.state = CellState::Hit;
                // Grid cells only ever hold indices of ships pushed in `place`.
                self.ships[idx].take_hit();
                self.hitpoints -= 1;
                Ok(ShotOutcome::Hit)
            }
            None => {
                cell.state = CellState::Missed;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Returns true once every ship on the board has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.hitpoints == 0
    }

    /// Total unhit ship cells left on the board.
    pub fn fleet_hitpoints(&self) -> usize {
        self.hitpoints
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Get the ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.ship)
            .map(|idx| &self.ships[idx])
    }

    /// Get the state of the cell at `coord`. Returns `None` if out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).map(|cell| cell.state)
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(coord).map(|cell| CellRef {
            coord,
            state: cell.state,
            ship: cell.ship.map(|idx| &self.ships[idx]),
        })
    }

    /// Get an iterator over the rows of the board, top to bottom. Each row is an
    /// iterator over its cells, left to right.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        (1..=BOARD_SIZE).map(move |y| {
            (1..=BOARD_SIZE).filter_map(move |x| self.get_coord(Coordinate::new(x, y)))
        })
    }

    /// Whether ships are shown when this board is displayed.
    pub fn reveal(&self) -> bool {
        self.reveal
    }

    /// Choose whether ships are shown when this board is displayed. Boards belonging to
    /// the opponent should normally be hidden.
    pub fn set_reveal(&mut self, reveal: bool) {
        self.reveal = reveal;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph shown for a cell.
struct Glyph(CellState, bool);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Glyph(CellState::Ship, true) => "■",
            Glyph(CellState::Missed, _) => "T",
            Glyph(CellState::Hit, _) => "X",
            _ => "O",
        })
    }
}

impl fmt::Display for Board {
    /// Draw the board as a labelled grid. Unshot ships only show up if the board is
    /// revealed; contour cells always look like water.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for x in 1..=BOARD_SIZE {
            write!(f, " | {}", x)?;
        }
        write!(f, " |")?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "\n{}", y + 1)?;
            for cell in row {
                write!(f, " | {}", Glyph(cell.state(), self.reveal))?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
