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
use std::io;

use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    Board, Coordinate, FleetPlacer, GameState, ShotOutcome, Side, Step, Strategy, TargetInput,
    TurnController, BOARD_SIZE,
};

/// Fires at every cell of the board in reading order, skipping cells already shot.
struct Sweep;

impl TargetInput for Sweep {
    fn choose_target(&mut self, _: Side, _: &Board, enemy: &Board) -> io::Result<Coordinate> {
        enemy
            .rows()
            .flatten()
            .find(|cell| !cell.state().is_shot())
            .map(|cell| cell.coord())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "nothing left to shoot"))
    }
}

#[test]
fn sweep_against_random_plays_out() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let placer = FleetPlacer::new();
        let mut game = TurnController::new(
            placer.generate(&mut rng),
            Strategy::Interactive(Sweep),
            placer.generate(&mut rng),
            Strategy::UniformRandom,
        );
        let mut a_shots = 0;
        let winner = game
            .run(&mut rng, |_, step| match *step {
                Step::Rejected { side, .. } => {
                    assert_eq!(side, Side::B, "sweeping side never repeats a target")
                }
                Step::Fired { side: Side::A, .. } => a_shots += 1,
                Step::Fired { .. } => {}
            })
            .unwrap();

        assert!(a_shots <= BOARD_SIZE * BOARD_SIZE);
        assert!(game.board(winner.opponent()).is_defeated());
        match winner {
            Side::A => assert_eq!(game.state(), GameState::SideAWon),
            Side::B => assert_eq!(game.state(), GameState::SideBWon),
        }
        assert!(game.strategy(Side::A).is_interactive());
        assert!(!game.strategy(Side::B).is_interactive());
    }
}

#[test]
fn hit_repeats_and_miss_alternates() {
    let mut rng = StdRng::seed_from_u64(8);
    let placer = FleetPlacer::new();
    let mut game = TurnController::new(
        placer.generate(&mut rng),
        Strategy::Interactive(Sweep),
        placer.generate(&mut rng),
        Strategy::Interactive(Sweep),
    );
    while let Some(step) = game.step(&mut rng).unwrap() {
        if let Step::Fired {
            side,
            outcome,
            state,
            ..
        } = step
        {
            match (outcome, state.current()) {
                (ShotOutcome::Hit, Some(next)) => assert_eq!(next, side),
                (ShotOutcome::Miss, Some(next)) => assert_eq!(next, side.opponent()),
                (outcome, None) => {
                    assert_eq!(outcome, ShotOutcome::Hit);
                    assert_eq!(state.winner(), Some(side));
                }
            }
        }
    }
    assert!(game.winner().is_some());
}
