//! Queen-line sweeps and legal-move enumeration over a bare `Board`.
//!
//! Enumeration order is fixed: pieces in row-major order, then the
//! directions in `Direction::ALL` order, then increasing distance. The
//! arrow leg uses the same order from the destination.

use crate::core::{Board, Direction, GameOutcome, Move, Side, Square};

/// True iff `to` is empty and reachable from `from` along one queen line
/// with every square strictly between them empty.
#[must_use]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let Some((dir, distance)) = from.line_to(to) else {
        return false;
    };
    board.is_empty(to) && from.ray(dir).take(distance - 1).all(|sq| board.is_empty(sq))
}

/// Empty squares reachable from `from`, stopping each direction at the
/// first blocked square. `vacated` is treated as empty.
pub fn reachable(
    board: &Board,
    from: Square,
    vacated: Option<Square>,
) -> impl Iterator<Item = Square> + '_ {
    Direction::ALL.into_iter().flat_map(move |dir| {
        from.ray(dir)
            .take_while(move |&sq| board.is_empty(sq) || Some(sq) == vacated)
    })
}

/// Every complete move (relocation plus arrow) available to `side`.
///
/// Lazy and restartable: calling again yields the same sequence. The arrow
/// leg is computed with the queen already standing on its destination, so
/// the square it left is a valid target.
pub fn legal_moves(board: &Board, side: Side) -> impl Iterator<Item = Move> + '_ {
    board.pieces(side).into_iter().flat_map(move |from| {
        reachable(board, from, None).flat_map(move |to| {
            reachable(board, to, Some(from)).map(move |arrow| Move::new(from, to, arrow))
        })
    })
}

/// Check if `side` has at least one complete move.
#[must_use]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    legal_moves(board, side).next().is_some()
}

/// Outcome if `side` were about to move on `board`.
#[must_use]
pub fn terminal_outcome(board: &Board, side: Side) -> GameOutcome {
    if has_legal_move(board, side) {
        GameOutcome::InProgress
    } else {
        GameOutcome::Won(side.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use std::collections::HashSet;

    fn sq(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_path_is_clear_lines() {
        let board = Board::starting();

        // Horizontal, vertical, diagonal
        assert!(path_is_clear(&board, sq(3, 0), sq(3, 5)));
        assert!(path_is_clear(&board, sq(0, 3), sq(5, 3)));
        assert!(path_is_clear(&board, sq(0, 3), sq(3, 6)));

        // Not a queen line, or no move at all
        assert!(!path_is_clear(&board, sq(0, 3), sq(2, 4)));
        assert!(!path_is_clear(&board, sq(5, 5), sq(5, 5)));
    }

    #[test]
    fn test_path_is_clear_blocked() {
        let board = Board::starting();

        // Destination occupied by own piece
        assert!(!path_is_clear(&board, sq(3, 0), sq(3, 9)));
        // Black queen on (6, 9) sits in the column below (3, 9)
        assert!(!path_is_clear(&board, sq(3, 9), sq(7, 9)));
        // Jumping over (0, 3) and (0, 6) along row 0
        assert!(!path_is_clear(&board, sq(0, 0), sq(0, 8)));
    }

    #[test]
    fn test_path_blocked_by_arrow() {
        let mut board = Board::starting();
        board.set(sq(3, 4), Cell::Arrow);

        assert!(path_is_clear(&board, sq(3, 0), sq(3, 3)));
        assert!(!path_is_clear(&board, sq(3, 0), sq(3, 4)));
        assert!(!path_is_clear(&board, sq(3, 0), sq(3, 5)));
    }

    #[test]
    fn test_reachable_stops_at_first_blocker() {
        let board = Board::starting();
        let from_corner: Vec<_> = reachable(&board, sq(3, 0), None)
            .filter(|s| s.row() == 3)
            .collect();
        // East along row 3 until the white queen on (3, 9)
        assert_eq!(from_corner.len(), 8);
        assert_eq!(from_corner.last(), Some(&sq(3, 8)));
    }

    #[test]
    fn test_reachable_through_vacated_square() {
        let mut board = Board::empty();
        board.set(sq(0, 0), Cell::Piece(Side::White));
        board.set(sq(0, 5), Cell::Piece(Side::White));

        // Pretend the queen moved (0, 0) -> (0, 5): the arrow may fly back
        // through and onto (0, 0).
        let west: Vec<_> = reachable(&board, sq(0, 5), Some(sq(0, 0)))
            .filter(|s| s.row() == 0 && s.col() < 5)
            .collect();
        assert_eq!(west.len(), 5);
        assert!(west.contains(&sq(0, 0)));
    }

    #[test]
    fn test_opening_move_count() {
        let board = Board::starting();
        assert_eq!(legal_moves(&board, Side::White).count(), 2176);
        assert_eq!(legal_moves(&board, Side::Black).count(), 2176);
    }

    #[test]
    fn test_moves_are_unique_and_doubly_valid() {
        let board = Board::starting();
        let mut seen = HashSet::new();

        for mv in legal_moves(&board, Side::White) {
            assert!(seen.insert(mv), "duplicate move {mv}");
            assert!(path_is_clear(&board, mv.from, mv.to));

            let mut after = board;
            after.set(mv.from, Cell::Empty);
            after.set(mv.to, Cell::Piece(Side::White));
            assert!(path_is_clear(&after, mv.to, mv.arrow), "bad arrow in {mv}");
        }
    }

    #[test]
    fn test_enumeration_order() {
        let board = Board::starting();
        let first = legal_moves(&board, Side::White).next().unwrap();

        // First piece row-major is (0, 3); North is off-board, so South first.
        assert_eq!(first.from, sq(0, 3));
        assert_eq!(first.to, sq(1, 3));
        // Arrow from (1, 3): North lands on the vacated (0, 3).
        assert_eq!(first.arrow, sq(0, 3));
    }

    #[test]
    fn test_restartable() {
        let board = Board::starting();
        let a: Vec<_> = legal_moves(&board, Side::Black).take(50).collect();
        let b: Vec<_> = legal_moves(&board, Side::Black).take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_walled_in_piece_has_no_moves() {
        let mut board = Board::empty();
        board.set(sq(9, 9), Cell::Piece(Side::Black));
        for (r, c) in [(8, 8), (8, 9), (9, 8)] {
            board.set(sq(r, c), Cell::Arrow);
        }
        board.set(sq(0, 0), Cell::Piece(Side::White));

        assert_eq!(legal_moves(&board, Side::Black).count(), 0);
        assert!(!has_legal_move(&board, Side::Black));
        assert_eq!(terminal_outcome(&board, Side::Black), GameOutcome::Won(Side::White));
        assert_eq!(terminal_outcome(&board, Side::White), GameOutcome::InProgress);
    }

    #[test]
    fn test_pocket_leaves_only_shot_back() {
        // The only step is into a pocket; the only shot is back onto the
        // square the queen left.
        let mut board = Board::empty();
        board.set(sq(0, 0), Cell::Piece(Side::White));
        for (r, c) in [(0, 2), (1, 0), (1, 1), (1, 2)] {
            board.set(sq(r, c), Cell::Arrow);
        }

        let moves: Vec<_> = legal_moves(&board, Side::White).collect();
        assert_eq!(moves, vec![Move::new(sq(0, 0), sq(0, 1), sq(0, 0))]);
    }
}
