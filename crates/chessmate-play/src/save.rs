//! Saving and restoring games as YAML documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use chessmate_core::{Board, Color, Owner};

use crate::command::validate_save_name;
use crate::error::PlayError;
use crate::game::{Game, Player};

const EXTENSION: &str = "yml";

/// Everything needed to resume a game.
///
/// The board is stored whole, including every piece's owner, location and
/// candidate list. `player1` plays White.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub player1: Player,
    pub player2: Player,
    pub turn: Owner,
    pub check: bool,
}

impl SavedGame {
    pub fn from_game(game: &Game) -> SavedGame {
        SavedGame {
            board: game.board().clone(),
            player1: game.player(Color::White).clone(),
            player2: game.player(Color::Black).clone(),
            turn: game.current().name.clone(),
            check: game.in_check(),
        }
    }

    /// Rebuild the game, validating the stored board first.
    ///
    /// Each player must have exactly one king of their color (`player1` White),
    /// so the restored game can always compute check.
    pub fn into_game(self) -> Result<Game, PlayError> {
        self.board.validate()?;

        if self.player1.name == self.player2.name {
            return Err(PlayError::InconsistentSave {
                reason: format!("both players are named {}", self.player1.name),
            });
        }
        for (player, color) in [(&self.player1, Color::White), (&self.player2, Color::Black)] {
            match self.board.find_king(&player.name) {
                Some(king) if king.color() == color => {}
                Some(_) => {
                    return Err(PlayError::InconsistentSave {
                        reason: format!("{} must play the {color} pieces", player.name),
                    });
                }
                None => {
                    return Err(PlayError::InconsistentSave {
                        reason: format!("{} has no king", player.name),
                    });
                }
            }
        }
        for owner in self.board.owners() {
            if owner != &self.player1.name && owner != &self.player2.name {
                return Err(PlayError::InconsistentSave {
                    reason: format!("pieces owned by unknown player {owner}"),
                });
            }
        }
        let turn = if self.turn == self.player1.name {
            Color::White
        } else if self.turn == self.player2.name {
            Color::Black
        } else {
            return Err(PlayError::InconsistentSave {
                reason: format!("turn belongs to unknown player {}", self.turn),
            });
        };

        Ok(Game::from_parts(self.board, self.player1, self.player2, turn))
    }

    pub fn to_yaml(&self) -> Result<String, PlayError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(content: &str) -> Result<SavedGame, PlayError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// A directory of `<name>.yml` save files.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of the saved games, sorted. A missing directory means no saves.
    pub fn list(&self) -> Result<Vec<String>, PlayError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Write `game` under a new name.
    pub fn save(&self, name: &str, game: &Game) -> Result<PathBuf, PlayError> {
        validate_save_name(name)?;
        let path = self.path(name);
        if path.exists() {
            return Err(PlayError::SaveExists {
                name: name.to_string(),
            });
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, SavedGame::from_game(game).to_yaml()?)?;
        info!(path = %path.display(), "game saved");
        Ok(path)
    }

    /// Read and restore the game saved under `name`.
    pub fn load(&self, name: &str) -> Result<Game, PlayError> {
        validate_save_name(name)?;
        let path = self.path(name);
        if !path.exists() {
            return Err(PlayError::SaveNotFound {
                name: name.to_string(),
            });
        }
        let content = fs::read_to_string(&path)?;
        let game = SavedGame::from_yaml(&content)?.into_game()?;
        info!(path = %path.display(), "game loaded");
        Ok(game)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }
}
