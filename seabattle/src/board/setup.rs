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
//! Random placement of the standard fleet.
//!
//! Ships are placed greedily, largest first, at uniformly random positions. A greedy
//! placement can paint itself into a corner where the remaining ships no longer fit, so
//! each attempt at filling a board has a fixed budget of tries. Once the budget runs out
//! the board is thrown away and [`FleetPlacer::generate`] starts again from an empty
//! one.
use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, Coordinate},
    ships::{Orientation, Ship},
    FLEET, MAX_PLACEMENT_ATTEMPTS,
};

/// Error returned when a board could not be filled within the attempt budget.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("gave up placing the fleet after {attempts} attempts")]
pub struct GenerationFailed {
    attempts: usize,
}

impl GenerationFailed {
    /// Number of placements that were tried before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

/// Places the standard [`FLEET`] onto boards at random.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FleetPlacer {
    max_attempts: usize,
}

impl FleetPlacer {
    /// Construct a placer with the default budget of [`MAX_PLACEMENT_ATTEMPTS`].
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_PLACEMENT_ATTEMPTS)
    }

    /// Construct a placer that gives up a board after `max_attempts` placements. Panics
    /// if the budget is smaller than the fleet, since no board could ever be filled.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        assert!(
            max_attempts >= FLEET.len(),
            "placement budget {} cannot fit a fleet of {} ships",
            max_attempts,
            FLEET.len()
        );
        Self { max_attempts }
    }

    /// Placement budget for a single board.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Try to place the whole fleet on `board`. Every placed ship gets its contour drawn
    /// before the next one is tried. There is no backtracking: a rejected position is
    /// simply resampled, and when the budget is spent the partly filled board is dropped.
    pub fn place_fleet<R: Rng>(
        &self,
        mut board: Board,
        rng: &mut R,
    ) -> Result<Board, GenerationFailed> {
        let mut attempts = 0;
        for &len in FLEET.iter() {
            loop {
                if attempts == self.max_attempts {
                    return Err(GenerationFailed { attempts });
                }
                attempts += 1;
                let bow: Coordinate = rng.gen();
                let orientation: Orientation = rng.gen();
                let ship = Ship::new(bow, len, orientation);
                match board.place(ship) {
                    Ok(()) => {
                        board.draw_contour(&ship);
                        break;
                    }
                    Err(err) => trace!("{}", err),
                }
            }
        }
        Ok(board)
    }

    /// Produce a fully populated board, starting over with a fresh empty board as often
    /// as needed.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            match self.place_fleet(Board::new(), rng) {
                Ok(board) => {
                    debug!("fleet placed after {} restarts", restarts);
                    return board;
                }
                Err(err) => {
                    restarts += 1;
                    debug!("{}, starting over with an empty board", err);
                }
            }
        }
    }
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{board::CellState, BOARD_SIZE};

    #[test]
    fn generated_board_holds_whole_fleet() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = FleetPlacer::new().generate(&mut rng);
        let mut lens: Vec<_> = board.ships().map(|ship| ship.len()).collect();
        lens.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lens, FLEET.to_vec());
        assert_eq!(board.fleet_hitpoints(), FLEET.iter().sum::<usize>());
        assert!(!board.is_defeated());
    }

    #[test]
    fn generated_ships_are_inside_and_apart() {
        let mut rng = StdRng::seed_from_u64(99);
        let placer = FleetPlacer::new();
        for _ in 0..50 {
            let board = placer.generate(&mut rng);
            let ships: Vec<_> = board.ships().collect();
            for (i, a) in ships.iter().enumerate() {
                for coord in a.occupied_coordinates() {
                    assert!(board.in_bounds(coord));
                    assert_eq!(board.cell(coord), Some(CellState::Ship));
                    for b in &ships[i + 1..] {
                        assert!(!b.occupies(coord));
                        assert!(coord.neighbors().all(|n| !b.occupies(n)));
                    }
                }
            }
        }
    }

    #[test]
    fn full_board_exhausts_budget() {
        let mut board = Board::new();
        for x in 1..=BOARD_SIZE {
            for y in 1..=BOARD_SIZE {
                board.shoot(Coordinate::new(x, y)).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(3);
        let err = FleetPlacer::new().place_fleet(board, &mut rng).unwrap_err();
        assert_eq!(err.attempts(), MAX_PLACEMENT_ATTEMPTS);
    }

    #[test]
    #[should_panic]
    fn budget_must_cover_fleet() {
        FleetPlacer::with_max_attempts(FLEET.len() - 1);
    }

    #[test]
    fn tight_budget_still_generates() {
        let mut rng = StdRng::seed_from_u64(5);
        let placer = FleetPlacer::with_max_attempts(20);
        let board = placer.generate(&mut rng);
        assert_eq!(board.ships().count(), FLEET.len());
    }
}
