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
//! The turn protocol between the two sides.
//!
//! A side keeps firing for as long as it hits something and hands the turn to its
//! opponent on a miss. Targets that are off the board or were already shot are
//! rejected without costing the side its turn. The game ends as soon as one fleet has
//! no hitpoints left.
use std::{fmt, io};

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Coordinate, ShotError, ShotOutcome};

pub use self::strategy::{Strategy, TargetInput};

mod strategy;

/// One of the two sides of the game. Side `A` moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::A => "side A",
            Side::B => "side B",
        })
    }
}

/// State of the turn state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    AwaitingSideATurn,
    AwaitingSideBTurn,
    SideAWon,
    SideBWon,
}

impl GameState {
    fn awaiting(side: Side) -> Self {
        match side {
            Side::A => GameState::AwaitingSideATurn,
            Side::B => GameState::AwaitingSideBTurn,
        }
    }

    fn won(side: Side) -> Self {
        match side {
            Side::A => GameState::SideAWon,
            Side::B => GameState::SideBWon,
        }
    }

    /// The side whose turn it is, or `None` once the game is over.
    pub fn current(self) -> Option<Side> {
        match self {
            GameState::AwaitingSideATurn => Some(Side::A),
            GameState::AwaitingSideBTurn => Some(Side::B),
            GameState::SideAWon | GameState::SideBWon => None,
        }
    }

    /// The side that won, or `None` while the game is in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::SideAWon => Some(Side::A),
            GameState::SideBWon => Some(Side::B),
            GameState::AwaitingSideATurn | GameState::AwaitingSideBTurn => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// Reason a shot could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FireError {
    /// One of the fleets is already gone.
    #[error("the game is already over")]
    GameOver,
    /// The target board refused the shot. The turn does not pass.
    #[error(transparent)]
    Rejected(#[from] ShotError),
}

/// What happened during one [`TurnController::step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// The side picked a target the opponent's board refused. It picks again.
    Rejected { side: Side, error: ShotError },
    /// The side fired a shot. `state` is the state of the game after the shot.
    Fired {
        side: Side,
        target: Coordinate,
        outcome: ShotOutcome,
        state: GameState,
    },
}

/// Runs the game between two populated boards. Each side has a [`Strategy`] for choosing
/// targets and only ever changes the opponent's board, through [`Board::shoot`].
#[derive(Debug)]
pub struct TurnController<I> {
    /// Boards indexed by [`Side`].
    boards: [Board; 2],

    /// Strategies indexed by [`Side`].
    strategies: [Strategy<I>; 2],

    state: GameState,
}

impl<I> TurnController<I> {
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side whose turn it is, or `None` once the game is over.
    pub fn current(&self) -> Option<Side> {
        self.state.current()
    }

    /// The side that won, or `None` while the game is in progress.
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    /// Get the board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Get mutable access to the board belonging to `side`, e.g. to change whether it is
    /// revealed.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Get the strategy `side` uses to pick targets.
    pub fn strategy(&self, side: Side) -> &Strategy<I> {
        &self.strategies[side.index()]
    }
}

impl<I: TargetInput> TurnController<I> {
    /// Set up a game where side A moves first. If a board starts out without any ships,
    /// its opponent has already won.
    pub fn new(
        board_a: Board,
        strategy_a: Strategy<I>,
        board_b: Board,
        strategy_b: Strategy<I>,
    ) -> Self {
        let mut game = Self {
            boards: [board_a, board_b],
            strategies: [strategy_a, strategy_b],
            state: GameState::AwaitingSideATurn,
        };
        game.check_defeat(Side::A);
        game
    }

    /// Fire at `target` on behalf of the side whose turn it is. A hit keeps the turn, a
    /// miss passes it, and destroying the last ship of the opponent ends the game. A
    /// rejected shot leaves everything as it was.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, FireError> {
        let side = self.current().ok_or(FireError::GameOver)?;
        let outcome = self.boards[side.opponent().index()].shoot(target)?;
        debug!("{} fired at {}: {}", side, target, outcome);
        if outcome == ShotOutcome::Miss {
            self.state = GameState::awaiting(side.opponent());
        }
        self.check_defeat(side);
        Ok(outcome)
    }

    /// Ask the side whose turn it is for a target and fire at it. Returns `None` once the
    /// game is over.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> io::Result<Option<Step>> {
        let side = match self.current() {
            Some(side) => side,
            None => return Ok(None),
        };
        let own = &self.boards[side.index()];
        let enemy = &self.boards[side.opponent().index()];
        let target = self.strategies[side.index()].choose_target(side, own, enemy, rng)?;
        Ok(match self.fire(target) {
            Ok(outcome) => Some(Step::Fired {
                side,
                target,
                outcome,
                state: self.state,
            }),
            Err(FireError::Rejected(error)) => {
                debug!("{} picked a bad target: {}", side, error);
                Some(Step::Rejected { side, error })
            }
            Err(FireError::GameOver) => None,
        })
    }

    /// Play until one side wins, calling `observer` after every step. Returns the winner.
    pub fn run<R, F>(&mut self, rng: &mut R, mut observer: F) -> io::Result<Side>
    where
        R: Rng,
        F: FnMut(&Self, &Step),
    {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            if let Some(step) = self.step(rng)? {
                observer(self, &step);
            }
        }
    }

    /// Move to a won state if either fleet is gone. The fleet `shooter` just fired at is
    /// checked last, so it decides the game.
    fn check_defeat(&mut self, shooter: Side) {
        for &side in &[shooter, shooter.opponent()] {
            if self.board(side).is_defeated() {
                self.state = GameState::won(side.opponent());
            }
        }
        if let Some(winner) = self.winner() {
            info!("{} won", winner);
        }
    }
}
