use crate::board::Board;
use crate::types::Position;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    Rejected,
}

/// A target is legal when it is inside the grid and orthogonally
/// adjacent to the blank. The blank itself is never a legal target.
pub fn is_legal_target(board: &Board, target: Position) -> bool {
    if target.row >= board.size() || target.col >= board.size() {
        return false;
    }
    target.is_adjacent(board.blank_position())
}

/// Slides the tile at `target` into the blank. Rejected moves leave the
/// board untouched. Session state (pause, move budget) is not consulted
/// here; callers gate on it.
pub fn attempt_move(board: &mut Board, target: Position) -> MoveOutcome {
    if !is_legal_target(board, target) {
        return MoveOutcome::Rejected;
    }

    let blank = board.blank_position();
    board.swap(target, blank);
    MoveOutcome::Moved
}
