use crate::board::Board;
use crate::moves::attempt_move;
use crate::session_rng::SessionRng;
use crate::types::BLANK;

/// Builds a level by walking the blank `min_steps..=max_steps` times
/// from the solved board, each step a uniformly chosen legal move.
/// Backtracking is allowed. Every output is reachable from the goal by
/// construction, so every output is solvable.
pub fn generate(size: usize, min_steps: u32, max_steps: u32, rng: &mut SessionRng) -> Board {
    let mut board = Board::solved(size);
    let steps = rng.random_range(min_steps..=max_steps);

    for _ in 0..steps {
        let neighbors = board.blank_neighbors();
        if let Some(&target) = rng.pick(&neighbors) {
            attempt_move(&mut board, target);
        }
    }

    board
}

/// Whether the board can reach the ascending goal. Odd grid widths
/// need an even inversion count; even widths add the blank's row
/// counted from the bottom, and the sum must be odd.
pub fn is_solvable(board: &Board) -> bool {
    let cells = board.cells();
    let mut inversions = 0usize;
    for i in 0..cells.len() {
        if cells[i] == BLANK {
            continue;
        }
        for j in (i + 1)..cells.len() {
            if cells[j] != BLANK && cells[j] < cells[i] {
                inversions += 1;
            }
        }
    }

    if board.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row_from_bottom = board.size() - board.blank_position().row;
        (inversions + blank_row_from_bottom) % 2 == 1
    }
}
