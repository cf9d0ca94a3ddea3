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
use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;

use seabattle::{
    Board, CannotShootReason, Coordinate, FleetPlacer, ShotOutcome, Side, Step, Strategy,
    TargetInput, TurnController,
};

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("Sea Battle")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sea Battle against the computer on a 6x6 board.")
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the random number generator for a reproducible game")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| format!("invalid seed {}: {}", seed, err))
                }),
        )
        .get_matches();

    let mut rng = match matches.value_of("seed").and_then(|seed| seed.parse().ok()) {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    greet();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let human = choose_side(&matches, &mut rng, &mut input)?;
    let computer = human.opponent();

    let placer = FleetPlacer::new();
    let human_board = placer.generate(&mut rng);
    let mut computer_board = placer.generate(&mut rng);
    computer_board.set_reveal(false);

    let mut game = match human {
        Side::A => TurnController::new(
            human_board,
            Strategy::Interactive(input),
            computer_board,
            Strategy::UniformRandom,
        ),
        Side::B => TurnController::new(
            computer_board,
            Strategy::UniformRandom,
            human_board,
            Strategy::Interactive(input),
        ),
    };

    let winner = game.run(&mut rng, |game, step| report(game, step, human))?;

    game.board_mut(computer).set_reveal(true);
    println!();
    show_fields(game.board(human), game.board(computer));
    println!();
    if winner == human {
        println!("You won!");
    } else {
        println!("You lost");
    }
    Ok(())
}

/// Print the greeting and input instructions.
fn greet() {
    println!("Welcome to Sea Battle!");
    println!("     Enter targets as: x,y");
    println!("       x - column, y - row");
    println!("---------------------------------------");
}

/// Choose which [`Side`] the human plays based on either args or cli input. Side A
/// moves first.
fn choose_side<B: BufRead>(
    matches: &ArgMatches,
    rng: &mut impl Rng,
    input: &mut InputReader<B>,
) -> io::Result<Side> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Side::A,
            "computer" | "bot" => Side::B,
            _ if rng.gen() => Side::A,
            _ => Side::B,
        }
    } else {
        input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
            "yes" | "y" | "first" | "1" | "1st" | "" => Some(Side::A),
            "no" | "n" | "second" | "2" | "2nd" => Some(Side::B),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Print the outcome of a single step of the game.
fn report<I>(game: &TurnController<I>, step: &Step, human: Side) {
    match *step {
        Step::Rejected { side, error } if side == human => match error.reason() {
            CannotShootReason::OutOfBounds => println!("You shot outside of game field!"),
            CannotShootReason::AlreadyShot => println!("You shot there before!"),
        },
        // The computer just picks again.
        Step::Rejected { .. } => {}
        Step::Fired {
            side,
            target,
            outcome,
            ..
        } => {
            if side != human {
                println!("Computer move: {}", target);
            }
            match outcome {
                ShotOutcome::Miss => println!("Miss!"),
                ShotOutcome::Hit => {
                    println!("Hit!");
                    let sunk = game
                        .board(side.opponent())
                        .ship_at(target)
                        .map_or(false, |ship| ship.is_sunk());
                    if sunk {
                        println!("Ship destroyed!");
                    }
                }
            }
        }
    }
}

/// Print both fields as the human sees them.
fn show_fields(own: &Board, enemy: &Board) {
    println!("  Your field:\n");
    println!("{}", own);
    println!();
    println!("  Computer field:\n");
    println!("{}", enemy);
}

/// Reasons a line of input is not a target.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum BadTarget {
    /// Not exactly two comma-separated values.
    Format,
    /// One of the values is not a number.
    NotNumeric,
}

impl BadTarget {
    fn message(self) -> &'static str {
        match self {
            BadTarget::Format => "Enter coordinates in the given format: x,y",
            BadTarget::NotNumeric => "Use numbers",
        }
    }
}

/// Parse a target given as `x,y`. Only the shape of the input is checked here; the
/// board decides whether the target is usable.
fn parse_target(input: &str) -> Result<Coordinate, BadTarget> {
    /// Two unsigned numbers separated by a comma.
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<x>[0-9]+)\s*,\s*(?P<y>[0-9]+)$").unwrap());

    if input.split(',').count() != 2 {
        return Err(BadTarget::Format);
    }
    let captures = TARGET.captures(input).ok_or(BadTarget::NotNumeric)?;
    // Digits that overflow can never be on the board; saturate so the board rejects
    // them as out of bounds.
    let axis = |name: &str| captures[name].parse().unwrap_or(usize::max_value());
    Ok(Coordinate::new(axis("x"), axis("y")))
}

impl<B: BufRead> TargetInput for InputReader<B> {
    fn choose_target(&mut self, _: Side, own: &Board, enemy: &Board) -> io::Result<Coordinate> {
        println!();
        show_fields(own, enemy);
        println!();
        self.read_input("Enter coordinates to shoot:", |input| {
            parse_target(input)
                .map_err(|err| println!("{}", err.message()))
                .ok()
        })
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
