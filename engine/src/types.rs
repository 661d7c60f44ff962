pub const BLANK: u8 = 0;

pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 6;
pub const DEFAULT_GRID_SIZE: usize = 3;

pub const DEFAULT_MOVE_LIMIT: u32 = 50;
pub const DEFAULT_SHUFFLE_MIN_STEPS: u32 = 50;
pub const DEFAULT_SHUFFLE_MAX_STEPS: u32 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Orthogonal adjacency: Manhattan distance exactly 1.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Playing,
    Paused,
    Won,
    LimitReached,
}

/// Which level a session is playing: a built-in table entry or a
/// freshly shuffled board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LevelId {
    Catalog(usize),
    Random,
}

impl LevelId {
    /// Persisted form: catalog levels keep their index, random is -1.
    pub fn to_index(self) -> i32 {
        match self {
            LevelId::Catalog(index) => index as i32,
            LevelId::Random => -1,
        }
    }

    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            -1 => Some(LevelId::Random),
            i if i >= 0 => Some(LevelId::Catalog(i as usize)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoreBreakdown {
    pub bonus: u32,
    pub penalty: u32,
    pub score: u32,
    pub best_score: u32,
    pub moves_used: u32,
    pub elapsed_seconds: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged,
    MovesChanged {
        used: u32,
        remaining: u32,
    },
    ScoreChanged {
        score: u32,
        best_score: u32,
    },
    TimeChanged {
        elapsed_seconds: u32,
    },
    Paused,
    Resumed,
    Won {
        summary: ScoreBreakdown,
    },
    LimitReached {
        summary: ScoreBreakdown,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            for index in 0..size * size {
                let pos = Position::from_index(index, size);
                assert_eq!(pos.to_index(size), index);
            }
        }
    }

    #[test]
    fn test_is_adjacent_orthogonal_only() {
        let center = Position::new(1, 1);

        assert!(center.is_adjacent(Position::new(0, 1)));
        assert!(center.is_adjacent(Position::new(2, 1)));
        assert!(center.is_adjacent(Position::new(1, 0)));
        assert!(center.is_adjacent(Position::new(1, 2)));

        assert!(!center.is_adjacent(Position::new(0, 0)));
        assert!(!center.is_adjacent(Position::new(2, 2)));
        assert!(!center.is_adjacent(center));
        assert!(!center.is_adjacent(Position::new(1, 3)));
    }

    #[test]
    fn test_level_id_index_round_trip() {
        assert_eq!(LevelId::Random.to_index(), -1);
        assert_eq!(LevelId::Catalog(3).to_index(), 3);

        assert_eq!(LevelId::from_index(-1), Some(LevelId::Random));
        assert_eq!(LevelId::from_index(0), Some(LevelId::Catalog(0)));
        assert_eq!(LevelId::from_index(7), Some(LevelId::Catalog(7)));
        assert_eq!(LevelId::from_index(-2), None);
    }
}
