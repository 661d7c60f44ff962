use crate::types::{BLANK, MAX_GRID_SIZE, MIN_GRID_SIZE, Position};

/// Square sliding-tile grid. Cells hold the tile values `1..size*size`
/// plus exactly one [`BLANK`], stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    WrongLength { found: usize },
    InvalidSymbol { symbol: char },
    DuplicateTile { tile: u8 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::WrongLength { found } => {
                write!(
                    f,
                    "Configuration length {} does not match a grid size between {} and {}",
                    found, MIN_GRID_SIZE, MAX_GRID_SIZE
                )
            }
            ConfigError::InvalidSymbol { symbol } => {
                write!(f, "Invalid tile symbol '{}'", symbol)
            }
            ConfigError::DuplicateTile { tile } => {
                write!(f, "Duplicate tile {}", tile)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn size_for_cell_count(cell_count: usize) -> Option<usize> {
    (MIN_GRID_SIZE..=MAX_GRID_SIZE).find(|size| size * size == cell_count)
}

impl Board {
    /// Goal board: tiles ascending row-major, blank in the last cell.
    pub fn solved(size: usize) -> Self {
        let cell_count = size * size;
        let mut cells: Vec<u8> = (1..cell_count as u8).collect();
        cells.push(BLANK);
        Self { size, cells }
    }

    /// Parses a configuration string: one base-36 symbol per cell,
    /// row-major, `0` for the blank. The grid size is inferred from the
    /// length. The string must be a permutation of `0..size*size`.
    pub fn from_config(config: &str) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = config.chars().collect();
        let cell_count = symbols.len();
        let size = size_for_cell_count(cell_count)
            .ok_or(ConfigError::WrongLength { found: cell_count })?;

        let mut cells = Vec::with_capacity(cell_count);
        let mut seen = vec![false; cell_count];
        for &symbol in &symbols {
            let value = symbol
                .to_digit(36)
                .filter(|&v| (v as usize) < cell_count)
                .ok_or(ConfigError::InvalidSymbol { symbol })? as u8;
            if seen[value as usize] {
                return Err(ConfigError::DuplicateTile { tile: value });
            }
            seen[value as usize] = true;
            cells.push(value);
        }

        Ok(Self { size, cells })
    }

    /// Inverse of [`Board::from_config`]. Emits lowercase symbols, so
    /// the output is byte-for-byte stable.
    pub fn to_config(&self) -> String {
        self.cells
            .iter()
            .map(|&value| {
                char::from_digit(value as u32, 36).expect("tile values fit the base-36 alphabet")
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn value_at(&self, pos: Position) -> Option<u8> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells.get(pos.to_index(self.size)).copied()
    }

    pub fn blank_position(&self) -> Position {
        let index = self
            .cells
            .iter()
            .position(|&value| value == BLANK)
            .expect("board holds exactly one blank");
        Position::from_index(index, self.size)
    }

    /// Unconditional cell exchange. Legality is the move engine's
    /// concern; positions outside the grid are a caller bug.
    pub fn swap(&mut self, a: Position, b: Position) {
        let first = a.to_index(self.size);
        let second = b.to_index(self.size);
        self.cells.swap(first, second);
    }

    /// In-bounds orthogonal neighbors of the blank, row-major order.
    /// These are exactly the legal move targets.
    pub fn blank_neighbors(&self) -> Vec<Position> {
        let blank = self.blank_position();
        let mut neighbors = Vec::with_capacity(4);
        if blank.row > 0 {
            neighbors.push(Position::new(blank.row - 1, blank.col));
        }
        if blank.col > 0 {
            neighbors.push(Position::new(blank.row, blank.col - 1));
        }
        if blank.col + 1 < self.size {
            neighbors.push(Position::new(blank.row, blank.col + 1));
        }
        if blank.row + 1 < self.size {
            neighbors.push(Position::new(blank.row + 1, blank.col));
        }
        neighbors
    }

    pub fn is_solved(&self) -> bool {
        let cell_count = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .all(|(index, &value)| value as usize == (index + 1) % cell_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_multiset(board: &Board) -> Vec<u8> {
        let mut values = board.cells().to_vec();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_from_config_round_trip() {
        let board = Board::from_config("123456780").unwrap();

        assert_eq!(board.size(), 3);
        assert_eq!(board.to_config(), "123456780");
        assert_eq!(Board::from_config(&board.to_config()).unwrap(), board);
    }

    #[test]
    fn test_from_config_reads_row_major() {
        let board = Board::from_config("123804765").unwrap();

        assert_eq!(board.value_at(Position::new(0, 0)), Some(1));
        assert_eq!(board.value_at(Position::new(1, 0)), Some(8));
        assert_eq!(board.value_at(Position::new(1, 1)), Some(0));
        assert_eq!(board.value_at(Position::new(2, 2)), Some(5));
        assert_eq!(board.blank_position(), Position::new(1, 1));
    }

    #[test]
    fn test_from_config_rejects_wrong_length() {
        assert_eq!(
            Board::from_config("123"),
            Err(ConfigError::WrongLength { found: 3 })
        );
        assert_eq!(
            Board::from_config("1234567800"),
            Err(ConfigError::WrongLength { found: 10 })
        );
        assert_eq!(
            Board::from_config(""),
            Err(ConfigError::WrongLength { found: 0 })
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_symbol() {
        assert_eq!(
            Board::from_config("1234567#0"),
            Err(ConfigError::InvalidSymbol { symbol: '#' })
        );
    }

    #[test]
    fn test_from_config_rejects_tile_outside_range() {
        // '9' is a valid digit but 3x3 boards only hold 0..=8.
        assert_eq!(
            Board::from_config("123456789"),
            Err(ConfigError::InvalidSymbol { symbol: '9' })
        );
    }

    #[test]
    fn test_from_config_rejects_duplicate_tile() {
        assert_eq!(
            Board::from_config("113456780"),
            Err(ConfigError::DuplicateTile { tile: 1 })
        );
    }

    #[test]
    fn test_from_config_rejects_duplicate_blank() {
        assert_eq!(
            Board::from_config("123456700"),
            Err(ConfigError::DuplicateTile { tile: 0 })
        );
    }

    #[test]
    fn test_from_config_missing_blank_shows_as_duplicate() {
        assert_eq!(
            Board::from_config("123456788"),
            Err(ConfigError::DuplicateTile { tile: 8 })
        );
    }

    #[test]
    fn test_from_config_four_by_four_uses_letters() {
        let board = Board::from_config("123456789abcdef0").unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.value_at(Position::new(2, 1)), Some(10));
        assert_eq!(board.value_at(Position::new(3, 2)), Some(15));
        assert_eq!(board.to_config(), "123456789abcdef0");
    }

    #[test]
    fn test_from_config_accepts_uppercase_symbols() {
        let lower = Board::from_config("123456789abcdef0").unwrap();
        let upper = Board::from_config("123456789ABCDEF0").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(upper.to_config(), "123456789abcdef0");
    }

    #[test]
    fn test_value_at_out_of_bounds_returns_none() {
        let board = Board::solved(3);

        assert_eq!(board.value_at(Position::new(3, 0)), None);
        assert_eq!(board.value_at(Position::new(0, 3)), None);
        assert_eq!(board.value_at(Position::new(10, 10)), None);
    }

    #[test]
    fn test_swap_exchanges_cells_and_keeps_tiles() {
        let mut board = Board::solved(3);
        let before = tile_multiset(&board);

        board.swap(Position::new(0, 0), Position::new(2, 2));

        assert_eq!(board.value_at(Position::new(0, 0)), Some(0));
        assert_eq!(board.value_at(Position::new(2, 2)), Some(1));
        assert_eq!(tile_multiset(&board), before);
    }

    #[test]
    fn test_blank_neighbors_corner() {
        let board = Board::solved(3);

        assert_eq!(
            board.blank_neighbors(),
            vec![Position::new(1, 2), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_blank_neighbors_center() {
        let board = Board::from_config("123804765").unwrap();

        assert_eq!(
            board.blank_neighbors(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_blank_neighbors_edge() {
        let board = Board::from_config("103426785").unwrap();

        assert_eq!(board.blank_position(), Position::new(0, 1));
        assert_eq!(
            board.blank_neighbors(),
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_is_solved_exact_match_only() {
        assert!(Board::from_config("123456780").unwrap().is_solved());
        assert!(!Board::from_config("123456708").unwrap().is_solved());
        assert!(!Board::from_config("213456780").unwrap().is_solved());
        assert!(!Board::from_config("123804765").unwrap().is_solved());
    }

    #[test]
    fn test_solved_round_trips_for_all_sizes() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let board = Board::solved(size);

            assert!(board.is_solved());
            assert_eq!(board.blank_position(), Position::new(size - 1, size - 1));
            assert_eq!(Board::from_config(&board.to_config()).unwrap(), board);
        }
    }
}
