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
//! How each side picks its next target.
use std::io;

use rand::Rng;

use crate::{
    board::{Board, Coordinate},
    game::Side,
};

/// Source of targets for a side played interactively. Implementations are expected to
/// block until they have a well-formed coordinate; whether it is on the board and not
/// yet shot is checked by the board.
pub trait TargetInput {
    /// Ask for the next target of `side`, given the side's own board and the board it is
    /// firing at.
    fn choose_target(&mut self, side: Side, own: &Board, enemy: &Board)
        -> io::Result<Coordinate>;
}

impl<T: TargetInput + ?Sized> TargetInput for &mut T {
    fn choose_target(
        &mut self,
        side: Side,
        own: &Board,
        enemy: &Board,
    ) -> io::Result<Coordinate> {
        (**self).choose_target(side, own, enemy)
    }
}

/// How a side picks its targets.
#[derive(Debug)]
pub enum Strategy<I> {
    /// Targets come from an interactive input, usually a human at a console.
    Interactive(I),
    /// Targets are drawn uniformly from the whole board with no memory of earlier shots.
    UniformRandom,
}

impl<I> Strategy<I> {
    /// Check if this side is played interactively.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Strategy::Interactive(_))
    }
}

impl<I: TargetInput> Strategy<I> {
    /// Produce the next target.
    pub(super) fn choose_target<R: Rng>(
        &mut self,
        side: Side,
        own: &Board,
        enemy: &Board,
        rng: &mut R,
    ) -> io::Result<Coordinate> {
        match self {
            Strategy::Interactive(input) => input.choose_target(side, own, enemy),
            Strategy::UniformRandom => Ok(rng.gen()),
        }
    }
}
