// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-move reachability for every piece kind the engine supports.
//!
//! Obstructions here are walls, not capture targets: a sliding piece's movement
//! line stops short of the first obstruction it meets, and no piece may land on
//! an obstructed square. This differs from ordinary chess move generation,
//! where the first occupied square along a ray is itself a legal destination.
//! The raw ray scans live in the core attack tables; this module applies the
//! wall semantics on top.
//!
//! The origin square's own obstruction status is never consulted. An origin
//! boxed in on all sides produces an empty set, which is a meaningful answer
//! rather than an error.

use crate::core::{self, PieceKind, Square, SquareSet};

/// The squares a queen at `origin` can reach in one move: all eight directions,
/// sliding until the board edge or an obstruction.
pub fn queen_moves(origin: Square, obstructions: SquareSet) -> SquareSet {
    core::queen_attacks(origin, obstructions).and(obstructions.not())
}

/// The squares a rook at `origin` can reach in one move along ranks and files.
pub fn rook_moves(origin: Square, obstructions: SquareSet) -> SquareSet {
    core::rook_attacks(origin, obstructions).and(obstructions.not())
}

/// The squares a bishop at `origin` can reach in one move along diagonals.
pub fn bishop_moves(origin: Square, obstructions: SquareSet) -> SquareSet {
    core::bishop_attacks(origin, obstructions).and(obstructions.not())
}

/// The squares a knight at `origin` can reach in one move. Knights have no
/// intermediate squares to block; only the destination's obstruction status
/// matters.
pub fn knight_moves(origin: Square, obstructions: SquareSet) -> SquareSet {
    core::knight_attacks(origin).and(obstructions.not())
}

/// The one-move destination set for a piece of the given kind at `origin`.
pub fn moves(kind: PieceKind, origin: Square, obstructions: SquareSet) -> SquareSet {
    match kind {
        PieceKind::Knight => knight_moves(origin, obstructions),
        PieceKind::Bishop => bishop_moves(origin, obstructions),
        PieceKind::Rook => rook_moves(origin, obstructions),
        PieceKind::Queen => queen_moves(origin, obstructions),
    }
}
