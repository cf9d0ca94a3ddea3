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
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    Board, CannotShootReason, CellState, Coordinate, FleetPlacer, ShotOutcome, BOARD_SIZE,
    FLEET,
};

fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    FleetPlacer::new().generate(&mut rng)
}

fn cells(board: &Board) -> Vec<CellState> {
    board
        .rows()
        .flat_map(|row| row.map(|cell| cell.state()).collect::<Vec<_>>())
        .collect()
}

fn coord() -> impl Strategy<Value = Coordinate> {
    (1..=BOARD_SIZE, 1..=BOARD_SIZE).prop_map(Coordinate::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_is_inside_and_ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships: Vec<_> = board.ships().collect();
        prop_assert_eq!(ships.len(), FLEET.len());
        for (i, a) in ships.iter().enumerate() {
            for c in a.occupied_coordinates() {
                prop_assert!(board.in_bounds(c));
                for (j, b) in ships.iter().enumerate() {
                    if i != j {
                        prop_assert!(!b.occupies(c));
                        prop_assert!(c.neighbors().all(|n| !b.occupies(n)));
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_shot_is_rejected_without_change(seed in any::<u64>(), target in coord()) {
        let mut board = random_board(seed);
        board.shoot(target).unwrap();
        let before = cells(&board);
        let hitpoints = board.fleet_hitpoints();

        let err = board.shoot(target).unwrap_err();
        prop_assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        prop_assert_eq!(cells(&board), before);
        prop_assert_eq!(board.fleet_hitpoints(), hitpoints);
    }

    #[test]
    fn hitpoints_track_hits(seed in any::<u64>(), targets in prop::collection::vec(coord(), 0..80)) {
        let mut board = random_board(seed);
        for target in targets {
            let before = board.fleet_hitpoints();
            match board.shoot(target) {
                Ok(ShotOutcome::Hit) => prop_assert_eq!(board.fleet_hitpoints(), before - 1),
                Ok(ShotOutcome::Miss) => prop_assert_eq!(board.fleet_hitpoints(), before),
                Err(err) => {
                    prop_assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
                    prop_assert_eq!(board.fleet_hitpoints(), before);
                }
            }
            let afloat: usize = board.ships().map(|ship| ship.hitpoints()).sum();
            prop_assert_eq!(board.fleet_hitpoints(), afloat);
            prop_assert_eq!(board.is_defeated(), board.ships().all(|ship| ship.is_sunk()));
        }
    }
}

#[test]
fn clearing_the_board_defeats_it() {
    let mut board = random_board(2020);
    assert!(!board.is_defeated());
    for x in 1..=BOARD_SIZE {
        for y in 1..=BOARD_SIZE {
            board.shoot(Coordinate::new(x, y)).unwrap();
        }
    }
    assert!(board.is_defeated());
    assert!(cells(&board)
        .into_iter()
        .all(|cell| cell == CellState::Missed || cell == CellState::Hit));
}
