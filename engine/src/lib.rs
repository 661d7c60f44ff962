pub mod board;
pub mod catalog;
pub mod config;
pub mod logger;
pub mod moves;
pub mod save;
pub mod score;
pub mod session;
pub mod session_rng;
pub mod shuffle;
pub mod types;

pub use board::{Board, ConfigError};
pub use config::GameSettings;
pub use moves::{MoveOutcome, attempt_move, is_legal_target};
pub use save::{DEFAULT_SAVE_FILE, SAVE_VERSION, SaveError, SavedGame, WindowGeometry};
pub use score::ScorePolicy;
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use types::{GameEvent, LevelId, Position, ScoreBreakdown, SessionStatus};
