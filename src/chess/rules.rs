//! Check and legality predicates over arbitrary boards.
//!
//! These take the board explicitly so they work the same on the live board and on the
//! throwaway copies used to try a move.

use log::{debug, trace};

use crate::chess::board::Board;
use crate::chess::mv::MoveSet;
use crate::chess::piece::{PieceKind, Team};
use crate::core::position::Position;

/// Union of the pseudo-legal moves of every piece of `team`.
pub fn pseudo_legal_moves_for_team(board: &Board, team: Team) -> MoveSet {
    let mut out = MoveSet::default();
    for (pos, piece) in board.pieces_of(team) {
        out.extend(piece.piece_moves(board, pos));
    }
    out
}

/// Square of `team`'s king, or `None` if it has none.
pub fn king_position(board: &Board, team: Team) -> Option<Position> {
    board
        .pieces_of(team)
        .find(|(_, p)| p.kind() == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// True iff some pseudo-legal move of the opponent ends on `team`'s king.
///
/// A board without a king for `team` is never in check.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    let Some(king) = king_position(board, team) else {
        debug!("no {team} king on the board; treating as not in check");
        return false;
    };
    board.pieces_of(team.other()).any(|(pos, piece)| {
        piece
            .piece_moves(board, pos)
            .iter()
            .any(|m| m.end() == king)
    })
}

/// Moves of the piece on `from` that don't leave its own king in check.
///
/// `None` if the square is empty (or off the board). An empty set means the piece exists
/// but cannot move.
pub fn legal_moves_from(board: &Board, from: Position) -> Option<MoveSet> {
    let piece = board.piece_at(from)?;
    let team = piece.team();

    let legal = piece
        .piece_moves(board, from)
        .into_iter()
        .filter(|&mv| {
            let mut trial = board.clone();
            trial.apply_move(mv);
            let exposed = is_in_check(&trial, team);
            if exposed {
                trace!("{mv} dropped: leaves {team} king in check");
            }
            !exposed
        })
        .collect();
    Some(legal)
}

/// Does `team` have at least one legal move anywhere on the board?
pub fn has_legal_move(board: &Board, team: Team) -> bool {
    board
        .pieces_of(team)
        .any(|(pos, _)| legal_moves_from(board, pos).is_some_and(|moves| !moves.is_empty()))
}

pub fn is_checkmate(board: &Board, team: Team) -> bool {
    is_in_check(board, team) && !has_legal_move(board, team)
}

pub fn is_stalemate(board: &Board, team: Team) -> bool {
    !is_in_check(board, team) && !has_legal_move(board, team)
}
