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
use reach::movegen;

/// Enumerates the squares a piece can reach in one move on a board with
/// obstructed squares.
#[derive(Debug, StructOpt)]
struct Options {
    /// The piece to move: queen, rook, bishop, or knight (or q/r/b/n).
    #[structopt(name = "PIECE")]
    piece: PieceKind,
    /// The piece's origin square, in algebraic notation.
    #[structopt(name = "SQUARE")]
    origin: Square,
    /// An obstructed square; may be repeated.
    #[structopt(short = "x", long = "obstruction")]
    obstructions: Vec<Square>,
    /// Emit a JSON report instead of one square per line.
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct MoveReport {
    piece: &'static str,
    origin: Square,
    obstructions: Vec<Square>,
    moves: Vec<Square>,
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber")?;

    let obstructions: SquareSet = options.obstructions.iter().copied().collect();
    let moves = movegen::moves(options.piece, options.origin, obstructions);
    if options.json {
        let report = MoveReport {
            piece: options.piece.name(),
            origin: options.origin,
            obstructions: obstructions.into_iter().collect(),
            moves: moves.into_iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for square in moves {
            println!("{}", square);
        }
    }

    Ok(())
}
