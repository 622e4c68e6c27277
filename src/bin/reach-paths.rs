// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use serde::Serialize;
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use reach::core::{PieceKind, Square, SquareSet};
use reach::paths::{self, Path};

/// Finds every move sequence of bounded length connecting two squares on a
/// board with obstructed squares.
#[derive(Debug, StructOpt)]
struct Options {
    /// The piece to move: queen, rook, bishop, or knight (or q/r/b/n).
    #[structopt(name = "PIECE")]
    piece: PieceKind,
    /// The start square, in algebraic notation.
    #[structopt(name = "START")]
    start: Square,
    /// The target square, in algebraic notation.
    #[structopt(name = "TARGET")]
    target: Square,
    /// An obstructed square; may be repeated.
    #[structopt(short = "x", long = "obstruction")]
    obstructions: Vec<Square>,
    /// The maximum number of moves a path may contain.
    #[structopt(long = "max-moves", default_value = "3")]
    max_moves: usize,
    /// Emit a JSON report instead of one path per line.
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct PathReport {
    piece: &'static str,
    start: Square,
    target: Square,
    obstructions: Vec<Square>,
    max_moves: usize,
    paths: Vec<Path>,
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber")?;

    let obstructions: SquareSet = options.obstructions.iter().copied().collect();
    let paths = paths::find_paths(
        options.piece,
        options.start,
        options.target,
        obstructions,
        options.max_moves,
    );

    if options.json {
        let report = PathReport {
            piece: options.piece.name(),
            start: options.start,
            target: options.target,
            obstructions: obstructions.into_iter().collect(),
            max_moves: options.max_moves,
            paths,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if paths.is_empty() {
        println!(
            "no path from {} to {} within {} moves",
            options.start, options.target, options.max_moves
        );
    } else {
        for path in paths {
            println!("{}", path);
        }
    }

    Ok(())
}
