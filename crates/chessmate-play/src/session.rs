//! Interactive prompt loop: game setup, turns, saving and loading.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use chessmate_core::Move;

use crate::command::{Input, parse_choice, parse_input};
use crate::computer::Computer;
use crate::config::PlayConfig;
use crate::error::PlayError;
use crate::game::{Game, Player};
use crate::render::PrettyBoard;
use crate::save::SaveStore;

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game ended in checkmate.
    Checkmate {
        /// Name of the winning player.
        winner: String,
    },
    /// The game was saved under `name` and the session left.
    Saved {
        /// Save file name without extension.
        name: String,
    },
    /// The player left without saving.
    Quit,
    /// The computer found no legal move outside of check.
    NoLegalMove {
        /// Name of the stuck player.
        player: String,
    },
}

/// Outcome of one human turn.
enum TurnEnd {
    Moved,
    Saved(String),
    Quit,
}

/// A play session reading commands from `input` and writing prompts to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
    store: SaveStore,
    computer: Computer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            store: SaveStore::new(config.save_dir.clone()),
            computer: Computer::new(config.seed),
            config,
        }
    }

    /// Run setup and then turns until checkmate, save or quit.
    pub fn run(&mut self) -> Result<SessionEnd, PlayError> {
        writeln!(self.output, "Chessmate: classic chess against a friend or the computer.")?;
        writeln!(
            self.output,
            "Enter '1' to start a new game of chess or '2' to continue a saved game."
        )?;
        let game = match self.ask_choice()? {
            1 => self.new_game()?,
            _ => match self.load_game()? {
                Some(game) => game,
                None => self.new_game()?,
            },
        };
        let end = self.play(game)?;
        info!(end = ?end, "session finished");
        Ok(end)
    }

    fn new_game(&mut self) -> Result<Game, PlayError> {
        writeln!(self.output, "Enter '1' for a one player game or '2' for two players.")?;
        let (white, black) = if self.ask_choice()? == 1 {
            let computer = Player::computer(self.config.computer_name.clone());
            writeln!(self.output, "Enter '1' to play white or '2' to play black.")?;
            let color = self.ask_choice()?;
            let taken = [computer.name.to_string()];
            if color == 1 {
                let name = self.ask_name("You control the white pieces. Please enter your name:", &taken)?;
                (Player::human(name), computer)
            } else {
                let name = self.ask_name("You control the black pieces. Please enter your name:", &taken)?;
                (computer, Player::human(name))
            }
        } else {
            let first = self.ask_name("Player 1 controls the white pieces. Please enter your name:", &[])?;
            let second = self.ask_name(
                "Player 2 controls the black pieces. Please enter your name:",
                std::slice::from_ref(&first),
            )?;
            (Player::human(first), Player::human(second))
        };
        Ok(Game::new(white, black))
    }

    /// Ask for a save to resume. Returns `None` when there is nothing usable to load.
    fn load_game(&mut self) -> Result<Option<Game>, PlayError> {
        let names = self.store.list()?;
        if names.is_empty() {
            writeln!(self.output, "There are no saved games. Starting a new one.")?;
            return Ok(None);
        }

        writeln!(self.output, "Saved games:")?;
        for name in &names {
            writeln!(self.output, "  {name}")?;
        }
        writeln!(self.output, "Choose a saved game to load.")?;

        let name = loop {
            let line = self.read_line()?;
            if names.contains(&line) {
                break line;
            }
            writeln!(self.output, "Save not found. Please enter one of the names above.")?;
        };

        match self.store.load(&name) {
            Ok(game) => Ok(Some(game)),
            Err(err @ (PlayError::Io { .. } | PlayError::InputClosed)) => Err(err),
            Err(err) => {
                writeln!(self.output, "This saved game can't be loaded: {err}")?;
                Ok(None)
            }
        }
    }

    fn play(&mut self, mut game: Game) -> Result<SessionEnd, PlayError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", PrettyBoard(game.board()))?;

            if let Some(winner) = game.winner() {
                writeln!(self.output, "CHECKMATE! {} is the winner!", winner.name)?;
                return Ok(SessionEnd::Checkmate {
                    winner: winner.name.to_string(),
                });
            }
            if game.in_check() {
                writeln!(self.output, "CHECK!")?;
            }

            let current = game.current().clone();
            writeln!(self.output, "{}'s move ({}).", current.name, game.turn())?;

            if current.is_computer() {
                let Some(mv) = self.computer.choose(&game) else {
                    writeln!(self.output, "{} has no legal move.", current.name)?;
                    return Ok(SessionEnd::NoLegalMove {
                        player: current.name.to_string(),
                    });
                };
                game.play(mv)?;
                writeln!(self.output, "{} plays {mv}.", current.name)?;
                continue;
            }

            match self.human_turn(&mut game)? {
                TurnEnd::Moved => {}
                TurnEnd::Saved(name) => return Ok(SessionEnd::Saved { name }),
                TurnEnd::Quit => return Ok(SessionEnd::Quit),
            }
        }
    }

    fn human_turn(&mut self, game: &mut Game) -> Result<TurnEnd, PlayError> {
        'select: loop {
            writeln!(
                self.output,
                "1) Enter the coordinates of the piece you wish to move, 'save' to save the game or 'quit' to leave:"
            )?;
            let from = match parse_input(&self.read_line()?) {
                Ok(Input::Square(sq)) => sq,
                Ok(Input::Save) => return self.save(game),
                Ok(Input::Quit) => return Ok(TurnEnd::Quit),
                Ok(Input::Back) => continue,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            let kind = match game.select(from) {
                Ok(piece) => piece.kind(),
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            writeln!(
                self.output,
                "2) Enter the coordinates to move your {kind} to, or 'back' to choose another piece:"
            )?;
            loop {
                let to = match parse_input(&self.read_line()?) {
                    Ok(Input::Square(sq)) => sq,
                    Ok(Input::Back) => continue 'select,
                    Ok(Input::Save) => return self.save(game),
                    Ok(Input::Quit) => return Ok(TurnEnd::Quit),
                    Err(err) => {
                        self.report(&err)?;
                        continue;
                    }
                };

                match game.play(Move::new(from, to)) {
                    Ok(_) => return Ok(TurnEnd::Moved),
                    Err(err @ PlayError::Unreachable { .. }) => self.report(&err)?,
                    Err(err @ PlayError::LeavesKingInCheck { .. }) => {
                        writeln!(self.output, "Invalid move: {err}. Try again.")?;
                        continue 'select;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
    }

    fn save(&mut self, game: &Game) -> Result<TurnEnd, PlayError> {
        writeln!(self.output, "Enter save file name.")?;
        loop {
            let name = self.read_line()?;
            match self.store.save(&name, game) {
                Ok(path) => {
                    writeln!(self.output, "Game saved to {}.", path.display())?;
                    return Ok(TurnEnd::Saved(name));
                }
                Err(err @ (PlayError::InvalidSaveName { .. } | PlayError::SaveExists { .. })) => {
                    writeln!(self.output, "{err}. Please enter a new name.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn ask_choice(&mut self) -> Result<u8, PlayError> {
        loop {
            if let Some(choice) = parse_choice(&self.read_line()?) {
                return Ok(choice);
            }
            writeln!(self.output, "You must enter '1' or '2'.")?;
        }
    }

    fn ask_name(&mut self, prompt: &str, taken: &[String]) -> Result<String, PlayError> {
        writeln!(self.output, "{prompt}")?;
        loop {
            let name = self.read_line()?;
            if name.is_empty() {
                writeln!(self.output, "Please enter your name.")?;
            } else if taken.contains(&name) {
                writeln!(self.output, "The name {name} is already taken.")?;
            } else {
                return Ok(name);
            }
        }
    }

    fn report(&mut self, err: &PlayError) -> Result<(), PlayError> {
        debug!(error = %err, "input rejected");
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, PlayError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
