// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Precomputed reachability tables for the pieces the engine knows about.
//!
//! The functions here answer "which squares lie on this piece's movement lines"
//! against an occupancy set, using the classical ray-table formulation. A ray is
//! truncated at the first occupied square it meets, and that square is included
//! in the result. Callers that treat occupied squares as walls rather than
//! capture targets (see [`crate::movegen`]) mask them back out.

use crate::core::*;

const SS_RANK_12: SquareSet = SS_RANK_1.or(SS_RANK_2);
const SS_RANK_78: SquareSet = SS_RANK_7.or(SS_RANK_8);

const SS_FILE_AB: SquareSet = SS_FILE_A.or(SS_FILE_B);
const SS_FILE_GH: SquareSet = SS_FILE_G.or(SS_FILE_H);

struct KnightTable {
    table: [SquareSet; 64],
}

impl KnightTable {
    pub fn new() -> KnightTable {
        let mut kt = KnightTable {
            table: [SquareSet::empty(); 64],
        };

        for sq in squares() {
            let mut board = SquareSet::empty();
            if !SS_FILE_A.contains(sq) && !SS_RANK_78.contains(sq) {
                board.insert(sq.plus(15));
            }
            if !SS_FILE_H.contains(sq) && !SS_RANK_78.contains(sq) {
                board.insert(sq.plus(17));
            }
            if !SS_FILE_GH.contains(sq) && !SS_RANK_8.contains(sq) {
                board.insert(sq.plus(10));
            }
            if !SS_FILE_GH.contains(sq) && !SS_RANK_1.contains(sq) {
                board.insert(sq.plus(-6));
            }
            if !SS_FILE_H.contains(sq) && !SS_RANK_12.contains(sq) {
                board.insert(sq.plus(-15));
            }
            if !SS_FILE_A.contains(sq) && !SS_RANK_12.contains(sq) {
                board.insert(sq.plus(-17));
            }
            if !SS_FILE_AB.contains(sq) && !SS_RANK_1.contains(sq) {
                board.insert(sq.plus(-10));
            }
            if !SS_FILE_AB.contains(sq) && !SS_RANK_8.contains(sq) {
                board.insert(sq.plus(6));
            }
            kt.table[sq.as_u8() as usize] = board;
        }
        kt
    }

    pub fn attacks(&self, sq: Square) -> SquareSet {
        self.table[sq.as_u8() as usize]
    }
}

struct RayTable {
    table: [[SquareSet; 8]; 65],
}

impl RayTable {
    pub fn new() -> RayTable {
        let mut rt = RayTable {
            table: [[SquareSet::empty(); 8]; 65],
        };

        for sq in squares() {
            let mut populate_dir = |dir: Direction, edge: SquareSet| {
                let mut entry = SquareSet::empty();
                if edge.contains(sq) {
                    // Nothing to do here, there are no moves on this ray from this square.
                    rt.table[sq.as_u8() as usize][dir as usize] = entry;
                    return;
                }

                // Starting at the given square, cast a ray in the given direction and add all bits to the ray mask.
                let mut cursor = sq;
                loop {
                    cursor = cursor.towards(dir);
                    entry.insert(cursor);

                    // Did we reach the end of the board? If so, stop.
                    if edge.contains(cursor) {
                        break;
                    }
                }
                rt.table[sq.as_u8() as usize][dir as usize] = entry;
            };

            populate_dir(Direction::North, SS_RANK_8);
            populate_dir(Direction::NorthEast, SS_RANK_8.or(SS_FILE_H));
            populate_dir(Direction::East, SS_FILE_H);
            populate_dir(Direction::SouthEast, SS_RANK_1.or(SS_FILE_H));
            populate_dir(Direction::South, SS_RANK_1);
            populate_dir(Direction::SouthWest, SS_RANK_1.or(SS_FILE_A));
            populate_dir(Direction::West, SS_FILE_A);
            populate_dir(Direction::NorthWest, SS_RANK_8.or(SS_FILE_A));
        }
        rt
    }

    pub fn attacks(&self, sq: usize, dir: Direction) -> SquareSet {
        self.table[sq as usize][dir as usize]
    }
}

lazy_static::lazy_static! {
    static ref KNIGHT_TABLE: KnightTable = KnightTable::new();
    static ref RAY_TABLE: RayTable = RayTable::new();
}

fn positive_ray_attacks(sq: Square, occupancy: SquareSet, dir: Direction) -> SquareSet {
    debug_assert!(dir.as_vector() > 0);
    let attacks = RAY_TABLE.attacks(sq.as_u8() as usize, dir);
    let blocker = attacks.and(occupancy).bits();
    let blocking_square = blocker.trailing_zeros() as usize;
    let blocking_ray = RAY_TABLE.attacks(blocking_square, dir);
    attacks.xor(blocking_ray)
}

fn negative_ray_attacks(sq: Square, occupancy: SquareSet, dir: Direction) -> SquareSet {
    debug_assert!(dir.as_vector() < 0);
    let attacks = RAY_TABLE.attacks(sq.as_u8() as usize, dir);
    let blocker = attacks.and(occupancy).bits();
    let blocking_square = (64 - blocker.leading_zeros()).checked_sub(1).unwrap_or(64) as usize;
    let blocking_ray = RAY_TABLE.attacks(blocking_square, dir);
    attacks.xor(blocking_ray)
}

fn diagonal_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    positive_ray_attacks(sq, occupancy, Direction::NorthWest)
        | negative_ray_attacks(sq, occupancy, Direction::SouthEast)
}

fn antidiagonal_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    positive_ray_attacks(sq, occupancy, Direction::NorthEast)
        | negative_ray_attacks(sq, occupancy, Direction::SouthWest)
}

fn file_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    positive_ray_attacks(sq, occupancy, Direction::North)
        | negative_ray_attacks(sq, occupancy, Direction::South)
}

fn rank_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    positive_ray_attacks(sq, occupancy, Direction::East)
        | negative_ray_attacks(sq, occupancy, Direction::West)
}

pub fn bishop_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    diagonal_attacks(sq, occupancy) | antidiagonal_attacks(sq, occupancy)
}

pub fn knight_attacks(sq: Square) -> SquareSet {
    KNIGHT_TABLE.attacks(sq)
}

pub fn rook_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    file_attacks(sq, occupancy) | rank_attacks(sq, occupancy)
}

pub fn queen_attacks(sq: Square, occupancy: SquareSet) -> SquareSet {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

pub fn attacks(kind: PieceKind, sq: Square, occupancy: SquareSet) -> SquareSet {
    match kind {
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupancy),
        PieceKind::Rook => rook_attacks(sq, occupancy),
        PieceKind::Queen => queen_attacks(sq, occupancy),
    }
}

#[cfg(test)]
mod tests {
    use crate::core::*;

    #[test]
    fn ray_includes_first_blocker() {
        let occupancy: SquareSet = vec![D6].into_iter().collect();
        let attacks = rook_attacks(D4, occupancy);
        assert!(attacks.contains(D5));
        assert!(attacks.contains(D6));
        assert!(!attacks.contains(D7));
        assert!(!attacks.contains(D8));
    }

    #[test]
    fn knight_table_corner() {
        let attacks = knight_attacks(A1);
        assert_eq!(attacks.len(), 2);
        assert!(attacks.contains(B3));
        assert!(attacks.contains(C2));
    }
}
