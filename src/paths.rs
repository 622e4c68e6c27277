// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded-depth path search over the piece move graphs.
//!
//! Sliding pieces reach any open square on their movement lines in a single
//! move, so for them path finding collapses to a one-move reachability test.
//! Knights need a real search: a breadth-first enumeration of the knight move
//! graph, expanded one full frontier at a time so that shorter paths are always
//! discovered before longer ones.
//!
//! Finding no path is an ordinary outcome, reported as an empty vector. Callers
//! setting up puzzles branch on emptiness to decide whether a configuration is
//! usable at all.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::{PieceKind, Square, SquareSet};
use crate::movegen;

/// An ordered sequence of squares in which each consecutive pair is a legal
/// single move and no square appears twice. A path of a single square means the
/// piece is already standing on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    fn origin(start: Square) -> Path {
        Path {
            squares: vec![start],
        }
    }

    fn extended(&self, next: Square) -> Path {
        let mut squares = self.squares.clone();
        squares.push(next);
        Path { squares }
    }

    pub fn start(&self) -> Square {
        self.squares[0]
    }

    /// The square the path currently ends on.
    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// The number of moves in the path, one less than the number of squares.
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn contains(&self, square: Square) -> bool {
        self.squares.contains(&square)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", square)?;
        }

        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.squares.serialize(serializer)
    }
}

/// Finds every path of at most `max_moves` moves from `start` to `target`,
/// honoring the given obstruction set.
///
/// All qualifying paths are returned, not just the shortest ones; equal-length
/// paths appear in discovery order. If `start == target` the single
/// already-there path is the only result. The start square's own obstruction
/// status is never consulted.
pub fn find_paths(
    kind: PieceKind,
    start: Square,
    target: Square,
    obstructions: SquareSet,
    max_moves: usize,
) -> Vec<Path> {
    if start == target {
        return vec![Path::origin(start)];
    }

    if kind.is_sliding() {
        // One move suffices for a sliding piece whenever the target is
        // reachable at all, so there is nothing to search.
        if max_moves >= 1 && movegen::moves(kind, start, obstructions).contains(target) {
            return vec![Path::origin(start).extended(target)];
        }

        return Vec::new();
    }

    knight_paths(start, target, obstructions, max_moves)
}

/// Whether at least one path of at most `max_moves` moves connects `start` to
/// `target`. Puzzle setup uses this to reject configurations with no solution.
pub fn is_solvable(
    kind: PieceKind,
    start: Square,
    target: Square,
    obstructions: SquareSet,
    max_moves: usize,
) -> bool {
    !find_paths(kind, start, target, obstructions, max_moves).is_empty()
}

/// Breadth-first enumeration of the knight move graph, one frontier per move
/// depth. A path is extended only while it has fewer than `max_moves` moves and
/// never revisits one of its own squares; a move landing on the target
/// completes the path and is not extended further.
fn knight_paths(
    start: Square,
    target: Square,
    obstructions: SquareSet,
    max_moves: usize,
) -> Vec<Path> {
    let mut completed = Vec::new();
    let mut frontier = vec![Path::origin(start)];
    for depth in 1..=max_moves {
        let mut next_frontier = Vec::new();
        for path in &frontier {
            for dest in movegen::knight_moves(path.end(), obstructions) {
                if dest == target {
                    completed.push(path.extended(dest));
                } else if depth < max_moves && !path.contains(dest) {
                    next_frontier.push(path.extended(dest));
                }
            }
        }

        tracing::debug!(
            depth,
            frontier = next_frontier.len(),
            completed = completed.len(),
            "expanded knight search frontier"
        );
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    completed
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;
    use crate::core::*;

    fn path_of(squares: &[Square]) -> Path {
        let mut path = Path::origin(squares[0]);
        for &sq in &squares[1..] {
            path = path.extended(sq);
        }
        path
    }

    #[test]
    fn already_at_target() {
        let paths = find_paths(PieceKind::Knight, A1, A1, SquareSet::empty(), 3);
        assert_eq!(paths, vec![path_of(&[A1])]);
        assert_eq!(paths[0].moves(), 0);
    }

    #[test]
    fn direct_knight_move_is_found_first() {
        let paths = find_paths(PieceKind::Knight, A1, B3, SquareSet::empty(), 3);
        assert!(!paths.is_empty());
        assert_eq!(paths[0], path_of(&[A1, B3]));
        assert_eq!(paths[0].moves(), 1);
    }

    #[test]
    fn two_move_knight_paths_are_exact() {
        let paths = find_paths(PieceKind::Knight, A1, D4, SquareSet::empty(), 2);
        assert_eq!(
            paths,
            vec![path_of(&[A1, C2, D4]), path_of(&[A1, B3, D4])]
        );
    }

    #[test]
    fn paths_are_ordered_shortest_first() {
        let paths = find_paths(PieceKind::Knight, A1, D4, SquareSet::empty(), 3);
        assert!(paths.len() >= 2);
        for pair in paths.windows(2) {
            assert!(pair[0].moves() <= pair[1].moves());
        }
    }

    #[test]
    fn corner_to_adjacent_diagonal_needs_four_moves() {
        // The well-known anomaly of the knight graph: a1 to b2 cannot be done
        // in three moves.
        assert!(find_paths(PieceKind::Knight, A1, B2, SquareSet::empty(), 3).is_empty());
        assert!(!find_paths(PieceKind::Knight, A1, B2, SquareSet::empty(), 4).is_empty());
    }

    #[test]
    fn depth_bound_and_no_revisit_hold() {
        // b3 is one knight move from a1, and also reachable again at depth
        // three (a1 c2 d4 b3 among others), so both bounds get exercised.
        let paths = find_paths(PieceKind::Knight, A1, B3, SquareSet::empty(), 3);
        assert!(paths.len() > 1);
        assert!(paths.contains(&path_of(&[A1, C2, D4, B3])));
        for path in &paths {
            assert!(path.moves() <= 3);
            let unique: SquareSet = path.squares().iter().copied().collect();
            assert_eq!(unique.len() as usize, path.squares().len());
        }
    }

    #[test]
    fn obstructed_target_is_unreachable() {
        let obstructions: SquareSet = vec![B3].into_iter().collect();
        assert!(find_paths(PieceKind::Knight, A1, B3, obstructions, 3).is_empty());
    }

    #[test]
    fn obstructions_reroute_knight_paths() {
        let obstructions: SquareSet = vec![C2].into_iter().collect();
        let paths = find_paths(PieceKind::Knight, A1, D4, SquareSet::empty(), 2);
        let rerouted = find_paths(PieceKind::Knight, A1, D4, obstructions, 2);
        assert_eq!(paths.len(), 2);
        assert_eq!(rerouted, vec![path_of(&[A1, B3, D4])]);
    }

    #[test]
    fn sliding_piece_reaches_target_in_one_move() {
        let paths = find_paths(PieceKind::Rook, D4, D8, SquareSet::empty(), 3);
        assert_eq!(paths, vec![path_of(&[D4, D8])]);

        let obstructions: SquareSet = vec![D6].into_iter().collect();
        assert!(find_paths(PieceKind::Rook, D4, D8, obstructions, 3).is_empty());
    }

    #[test]
    fn sliding_piece_off_line_target_has_no_paths() {
        assert!(find_paths(PieceKind::Bishop, A1, A2, SquareSet::empty(), 3).is_empty());
        assert!(find_paths(PieceKind::Rook, A1, B2, SquareSet::empty(), 3).is_empty());
    }

    #[test]
    fn zero_move_bound_only_matches_already_there() {
        assert_eq!(
            find_paths(PieceKind::Queen, E4, E4, SquareSet::empty(), 0),
            vec![path_of(&[E4])]
        );
        assert!(find_paths(PieceKind::Queen, E4, E5, SquareSet::empty(), 0).is_empty());
        assert!(find_paths(PieceKind::Knight, A1, B3, SquareSet::empty(), 0).is_empty());
    }

    #[test]
    fn solvability_mirrors_path_existence() {
        assert!(is_solvable(PieceKind::Knight, A1, B3, SquareSet::empty(), 3));
        assert!(!is_solvable(PieceKind::Knight, A1, B2, SquareSet::empty(), 3));

        let obstructions: SquareSet = vec![D6].into_iter().collect();
        assert!(is_solvable(PieceKind::Rook, D4, D5, obstructions, 3));
        assert!(!is_solvable(PieceKind::Rook, D4, D7, obstructions, 3));
    }

    #[test]
    fn path_display_is_space_separated_notation() {
        assert_eq!(path_of(&[A1, B3, D4]).to_string(), "a1 b3 d4");
        assert_eq!(path_of(&[A1]).to_string(), "a1");
    }

    #[test]
    fn every_step_of_every_path_is_a_legal_move() {
        let mut rng = SmallRng::seed_from_u64(0xACE5);
        for _ in 0..50 {
            let start = Square::try_from(rng.gen_range(0..64u8)).unwrap();
            let target = Square::try_from(rng.gen_range(0..64u8)).unwrap();
            let mut obstructions = SquareSet::empty();
            for _ in 0..rng.gen_range(0..10) {
                obstructions.insert(Square::try_from(rng.gen_range(0..64u8)).unwrap());
            }
            obstructions.remove(start);
            obstructions.remove(target);

            for path in find_paths(PieceKind::Knight, start, target, obstructions, 3) {
                assert!(path.moves() <= 3);
                assert_eq!(path.start(), start);
                assert_eq!(path.end(), target);
                for step in path.squares().windows(2) {
                    assert!(crate::movegen::knight_moves(step[0], obstructions).contains(step[1]));
                }
            }
        }
    }
}
