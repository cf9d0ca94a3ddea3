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
//! Sea Battle: a two-sided game on a fixed 6x6 grid where each side hides a fleet of
//! short ships and both take turns firing at the other's board until one fleet is gone.
//!
//! [`board`] holds the board model: coordinates, cells, placement with enforced spacing
//! between ships, and shot resolution. [`board::setup`] fills a board with the standard
//! fleet at random. [`game`] runs the turn protocol: a side keeps firing as long as it
//! hits and hands the turn over on a miss.

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{
        setup::{FleetPlacer, GenerationFailed},
        Board, CannotPlaceReason, CannotShootReason, CellRef, CellState, Coordinate,
        PlaceError, ShotError, ShotOutcome,
    },
    game::{FireError, GameState, Side, Step, Strategy, TargetInput, TurnController},
    ships::{Orientation, Ship},
};

/// Length of each side of the square board. Coordinates run from 1 to `BOARD_SIZE`
/// inclusive on both axes.
pub const BOARD_SIZE: usize = 6;

/// Lengths of the ships every side has to place, largest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Longest ship allowed on the board.
pub const MAX_SHIP_LEN: usize = 3;

/// Number of placement attempts, summed over the whole fleet, before a board generation
/// attempt is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
