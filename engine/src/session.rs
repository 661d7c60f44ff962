use crate::board::Board;
use crate::catalog;
use crate::config::GameSettings;
use crate::log;
use crate::moves::{self, MoveOutcome};
use crate::save::{self, SaveError, SavedGame};
use crate::session_rng::SessionRng;
use crate::shuffle;
use crate::types::{GameEvent, LevelId, Position, ScoreBreakdown, SessionStatus};

/// One running game. Owns the board, the counters, the scoring state
/// and the level selection; hosts drive it through intent calls and
/// drain [`GameSession::take_events`] after each one.
pub struct GameSession {
    board: Board,
    initial_board: Board,
    level: LevelId,
    status: SessionStatus,
    moves_used: u32,
    score: u32,
    best_score: u32,
    elapsed_seconds: u32,
    settings: GameSettings,
    rng: SessionRng,
    pending_events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(settings: &GameSettings, rng: SessionRng) -> Self {
        let mut session = Self {
            board: Board::solved(settings.grid_size),
            initial_board: Board::solved(settings.grid_size),
            level: LevelId::Random,
            status: SessionStatus::Playing,
            moves_used: 0,
            score: 0,
            best_score: 0,
            elapsed_seconds: 0,
            settings: *settings,
            rng,
            pending_events: Vec::new(),
        };

        let first_level = if settings.grid_size == catalog::CATALOG_GRID_SIZE {
            LevelId::Catalog(0)
        } else {
            LevelId::Random
        };
        session.new_level(first_level);
        session
    }

    /// Installs a fresh level. Move and time counters reset, the score
    /// carries over, and any paused or terminal status is cleared.
    pub fn new_level(&mut self, level: LevelId) {
        let resolved = self.resolve_level(level);
        let board = match resolved {
            LevelId::Catalog(index) => {
                log!("Loading level {}", index + 1);
                catalog::board(index)
            }
            LevelId::Random => {
                log!("Generating random level (seed {})", self.rng.seed());
                shuffle::generate(
                    self.settings.grid_size,
                    self.settings.shuffle_min_steps,
                    self.settings.shuffle_max_steps,
                    &mut self.rng,
                )
            }
        };

        self.level = resolved;
        self.initial_board = board.clone();
        self.install_board(board);
    }

    /// Replays the current level from the configuration it started
    /// with, shuffle included.
    pub fn restart(&mut self) {
        let board = self.initial_board.clone();
        self.install_board(board);
    }

    pub fn request_move(&mut self, target: Position) -> MoveOutcome {
        if self.status != SessionStatus::Playing {
            return MoveOutcome::Rejected;
        }
        if moves::attempt_move(&mut self.board, target) == MoveOutcome::Rejected {
            return MoveOutcome::Rejected;
        }

        self.moves_used += 1;
        self.pending_events.push(GameEvent::BoardChanged);
        self.pending_events.push(GameEvent::MovesChanged {
            used: self.moves_used,
            remaining: self.moves_remaining(),
        });
        let next_score = self.settings.score_policy.apply_move_delta(self.score);
        self.apply_score(next_score);

        if self.board.is_solved() {
            self.finish_won();
        } else if self.moves_used >= self.settings.move_limit {
            self.finish_limit_reached();
        }

        MoveOutcome::Moved
    }

    /// Flips between playing and paused. Terminal sessions stay put
    /// and the call reports false.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            SessionStatus::Playing => {
                self.status = SessionStatus::Paused;
                self.pending_events.push(GameEvent::Paused);
                true
            }
            SessionStatus::Paused => {
                self.status = SessionStatus::Playing;
                self.pending_events.push(GameEvent::Resumed);
                true
            }
            SessionStatus::Won | SessionStatus::LimitReached => false,
        }
    }

    /// One second of play time. Ignored unless the session is playing.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Playing {
            return;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        self.pending_events.push(GameEvent::TimeChanged {
            elapsed_seconds: self.elapsed_seconds,
        });
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            current_config: self.board.to_config(),
            initial_config: self.initial_board.to_config(),
            level_index: self.level.to_index(),
            score: self.score,
            best_score: self.best_score,
            moves_used: self.moves_used,
            elapsed_seconds: self.elapsed_seconds,
            window: None,
        }
    }

    /// Rebuilds a session from a decoded snapshot. Both configurations
    /// must parse as boards of the configured size; counters must fit
    /// the move budget. A spent budget restores as `LimitReached`, any
    /// other state resumes playing.
    pub fn from_snapshot(
        settings: &GameSettings,
        save: &SavedGame,
        rng: SessionRng,
    ) -> Result<Self, SaveError> {
        let board = Self::board_from_save(settings, &save.current_config)?;
        let initial_board = Self::board_from_save(settings, &save.initial_config)?;

        let level = match LevelId::from_index(save.level_index) {
            Some(LevelId::Catalog(index))
                if settings.grid_size == catalog::CATALOG_GRID_SIZE
                    && index < catalog::level_count() =>
            {
                LevelId::Catalog(index)
            }
            Some(LevelId::Random) => LevelId::Random,
            _ => {
                return Err(SaveError::InvalidState(format!(
                    "Level index {} is out of range",
                    save.level_index
                )));
            }
        };

        if save.moves_used > settings.move_limit {
            return Err(SaveError::InvalidState(format!(
                "Moves used {} exceeds the move limit {}",
                save.moves_used, settings.move_limit
            )));
        }

        let status = if save.moves_used == settings.move_limit {
            SessionStatus::LimitReached
        } else {
            SessionStatus::Playing
        };

        let mut session = Self {
            board,
            initial_board,
            level,
            status,
            moves_used: save.moves_used,
            score: save.score,
            best_score: save.best_score.max(save.score),
            elapsed_seconds: save.elapsed_seconds,
            settings: *settings,
            rng,
            pending_events: Vec::new(),
        };
        session.push_refresh_events();
        Ok(session)
    }

    /// Restores from raw save bytes, falling back to a fresh session
    /// when the data is missing, corrupt, or fails validation.
    pub fn restore_or_default(settings: &GameSettings, bytes: &[u8], rng: SessionRng) -> Self {
        let seed = rng.seed();
        let restored = save::load_from_bytes(bytes)
            .and_then(|saved| Self::from_snapshot(settings, &saved, rng));

        match restored {
            Ok(session) => session,
            Err(err) => {
                log!("Discarding saved game: {}", err);
                Self::new(settings, SessionRng::new(seed))
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial_config(&self) -> String {
        self.initial_board.to_config()
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn move_limit(&self) -> u32 {
        self.settings.move_limit
    }

    pub fn moves_remaining(&self) -> u32 {
        self.settings.move_limit.saturating_sub(self.moves_used)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn resolve_level(&self, level: LevelId) -> LevelId {
        match level {
            LevelId::Catalog(index) if self.settings.grid_size == catalog::CATALOG_GRID_SIZE => {
                LevelId::Catalog(index % catalog::level_count())
            }
            LevelId::Catalog(_) => {
                log!(
                    "Built-in levels are {size}x{size} only; generating a random level instead",
                    size = catalog::CATALOG_GRID_SIZE
                );
                LevelId::Random
            }
            LevelId::Random => LevelId::Random,
        }
    }

    fn install_board(&mut self, board: Board) {
        self.board = board;
        self.moves_used = 0;
        self.elapsed_seconds = 0;
        self.status = SessionStatus::Playing;
        self.push_refresh_events();
    }

    fn push_refresh_events(&mut self) {
        self.pending_events.push(GameEvent::BoardChanged);
        self.pending_events.push(GameEvent::MovesChanged {
            used: self.moves_used,
            remaining: self.moves_remaining(),
        });
        self.pending_events.push(GameEvent::ScoreChanged {
            score: self.score,
            best_score: self.best_score,
        });
        self.pending_events.push(GameEvent::TimeChanged {
            elapsed_seconds: self.elapsed_seconds,
        });
    }

    fn apply_score(&mut self, next: u32) {
        if next == self.score {
            return;
        }
        self.score = next;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        self.pending_events.push(GameEvent::ScoreChanged {
            score: self.score,
            best_score: self.best_score,
        });
    }

    fn finish_won(&mut self) {
        let before = self.score;
        let bonus = self.settings.score_policy.win_bonus(self.elapsed_seconds);
        self.apply_score(before.saturating_add(bonus));
        self.status = SessionStatus::Won;

        let summary = self.score_summary(self.score - before, 0);
        self.pending_events.push(GameEvent::Won { summary });
        log!(
            "Level solved in {} moves and {} seconds",
            self.moves_used,
            self.elapsed_seconds
        );
    }

    fn finish_limit_reached(&mut self) {
        let before = self.score;
        let next = self.settings.score_policy.apply_lose_penalty(before);
        self.apply_score(next);
        self.status = SessionStatus::LimitReached;

        let summary = self.score_summary(0, before - self.score);
        self.pending_events.push(GameEvent::LimitReached { summary });
        log!("Move limit of {} reached", self.settings.move_limit);
    }

    fn score_summary(&self, bonus: u32, penalty: u32) -> ScoreBreakdown {
        ScoreBreakdown {
            bonus,
            penalty,
            score: self.score,
            best_score: self.best_score,
            moves_used: self.moves_used,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    fn board_from_save(settings: &GameSettings, config: &str) -> Result<Board, SaveError> {
        let board = Board::from_config(config)?;
        if board.size() != settings.grid_size {
            return Err(SaveError::InvalidState(format!(
                "Saved board is {}x{}, expected {}x{}",
                board.size(),
                board.size(),
                settings.grid_size,
                settings.grid_size
            )));
        }
        Ok(board)
    }
}
