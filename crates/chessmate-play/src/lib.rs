//! Interactive play on top of the chessmate rules engine.

pub mod command;
pub mod computer;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod save;
pub mod session;

pub use computer::Computer;
pub use config::{CONFIG_ENV, PlayConfig};
pub use error::PlayError;
pub use game::{Game, Outcome, Player, PlayerKind};
pub use render::PrettyBoard;
pub use save::{SaveStore, SavedGame};
pub use session::{Session, SessionEnd};
