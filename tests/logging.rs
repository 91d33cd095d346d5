use std::sync::atomic::{AtomicUsize, Ordering};

use chess_core::chess::rules;
use chess_core::{Board, Piece, PieceKind, Position, Team};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Counts warnings and errors; everything else is dropped.
struct WarnCounter;

static WARNINGS: AtomicUsize = AtomicUsize::new(0);
static LOGGER: WarnCounter = WarnCounter;

impl Log for WarnCounter {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() <= Level::Warn {
            WARNINGS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

#[test]
fn kingless_board_move_generation_does_not_warn() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut board = Board::new();
    let rook = Position::new(4, 4);
    board
        .place(rook, Some(Piece::new(Team::White, PieceKind::Rook)))
        .unwrap();
    board
        .place(Position::new(6, 6), Some(Piece::new(Team::Black, PieceKind::Queen)))
        .unwrap();

    let legal = rules::legal_moves_from(&board, rook).unwrap();
    assert_eq!(legal.len(), 14);
    assert!(!rules::is_in_check(&board, Team::White));
    assert_eq!(WARNINGS.load(Ordering::SeqCst), 0);
}
