//! Pseudo-legal move generation.
//!
//! One generator per kind of geometry: rays for sliders, fixed targets for the king and
//! knight, and the team-relative pawn rules. Nothing here looks at check.

use crate::chess::board::Board;
use crate::chess::mv::{Move, MoveSet};
use crate::chess::piece::{Piece, PieceKind, Team, PROMOTION_KINDS};
use crate::core::position::{Direction, Position};

pub fn piece_moves(piece: Piece, board: &Board, from: Position) -> MoveSet {
    let mut out = MoveSet::default();
    if !from.is_on_board() {
        return out;
    }

    match piece.kind() {
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            slide(piece.team(), board, from, piece.kind().slide_dirs(), &mut out);
        }
        PieceKind::King => {
            leap(piece.team(), board, from, from.neighbours(), &mut out);
        }
        PieceKind::Knight => {
            leap(piece.team(), board, from, from.knight_jumps(), &mut out);
        }
        PieceKind::Pawn => pawn(piece.team(), board, from, &mut out),
    }

    out
}

/// Can a piece of `team` end its move on `to`: on the board, and empty or enemy-held.
#[inline]
fn can_land(team: Team, board: &Board, to: Position) -> bool {
    to.is_on_board() && board.piece_at(to).map_or(true, |p| p.team() != team)
}

fn slide(team: Team, board: &Board, from: Position, dirs: &[Direction], out: &mut MoveSet) {
    for &dir in dirs {
        let mut cur = from.step(dir);
        while cur.is_on_board() {
            match board.piece_at(cur) {
                None => {
                    out.insert(Move::new(from, cur));
                }
                Some(blocker) => {
                    if blocker.team() != team {
                        out.insert(Move::new(from, cur));
                    }
                    break;
                }
            }
            cur = cur.step(dir);
        }
    }
}

fn leap(team: Team, board: &Board, from: Position, targets: [Position; 8], out: &mut MoveSet) {
    for to in targets {
        if can_land(team, board, to) {
            out.insert(Move::new(from, to));
        }
    }
}

fn pawn(team: Team, board: &Board, from: Position, out: &mut MoveSet) {
    let (ahead, double, captures) = match team {
        Team::White => (from.north(), from.double_north(), [from.north_west(), from.north_east()]),
        Team::Black => (from.south(), from.double_south(), [from.south_west(), from.south_east()]),
    };

    if ahead.is_on_board() && board.is_empty_at(ahead) {
        push_pawn_move(team, from, ahead, out);

        if from.row() == team.pawn_row() && double.is_on_board() && board.is_empty_at(double) {
            out.insert(Move::new(from, double));
        }
    }

    for to in captures {
        let enemy = board.piece_at(to).is_some_and(|p| p.team() != team);
        if enemy {
            push_pawn_move(team, from, to, out);
        }
    }
}

/// A pawn landing on the far rank becomes one move per promotion choice.
fn push_pawn_move(team: Team, from: Position, to: Position, out: &mut MoveSet) {
    if to.row() == team.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.insert(Move::with_promotion(from, to, kind));
        }
    } else {
        out.insert(Move::new(from, to));
    }
}
