//! Parsing of user input: coordinates, prompt keywords, menu choices, save names.

use chessmate_core::Square;

use crate::error::PlayError;

/// A line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A board coordinate such as `g2`.
    Square(Square),
    /// `save` -- store the game and leave.
    Save,
    /// `back` -- pick a different piece.
    Back,
    /// `quit` -- leave without saving.
    Quit,
}

/// Parse a single line typed at the move prompt.
pub fn parse_input(line: &str) -> Result<Input, PlayError> {
    match line.trim() {
        "save" => Ok(Input::Save),
        "back" => Ok(Input::Back),
        "quit" => Ok(Input::Quit),
        other => parse_square(other).map(Input::Square),
    }
}

/// Parse a file-rank coordinate such as `g2` into a board square.
///
/// Rank 8 is row 0 and file a is column 0.
pub fn parse_square(input: &str) -> Result<Square, PlayError> {
    let invalid = || PlayError::InvalidSquare {
        input: input.to_string(),
    };

    let bytes = input.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(invalid)
}

/// Parse a two-way menu choice; only `1` and `2` are accepted.
pub fn parse_choice(line: &str) -> Option<u8> {
    match line.trim() {
        "1" => Some(1),
        "2" => Some(2),
        _ => None,
    }
}

/// Check that `name` can be used as a save file name.
pub fn validate_save_name(name: &str) -> Result<(), PlayError> {
    let valid = !name.trim().is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');
    if valid {
        Ok(())
    } else {
        Err(PlayError::InvalidSaveName {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn parse_square_corners() {
        assert_eq!(parse_square("a8").unwrap(), sq(0, 0));
        assert_eq!(parse_square("h8").unwrap(), sq(0, 7));
        assert_eq!(parse_square("a1").unwrap(), sq(7, 0));
        assert_eq!(parse_square("h1").unwrap(), sq(7, 7));
        assert_eq!(parse_square("g2").unwrap(), sq(6, 6));
    }

    #[test]
    fn parse_square_roundtrips_display() {
        for square in Square::all() {
            assert_eq!(parse_square(&square.to_string()).unwrap(), square);
        }
    }

    #[test]
    fn parse_square_invalid() {
        for input in ["", "a", "a9", "i1", "A1", "a0", "a1b", "11", "zz"] {
            assert!(
                matches!(parse_square(input), Err(PlayError::InvalidSquare { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_input_keywords() {
        assert_eq!(parse_input("save").unwrap(), Input::Save);
        assert_eq!(parse_input(" back ").unwrap(), Input::Back);
        assert_eq!(parse_input("quit").unwrap(), Input::Quit);
        assert_eq!(parse_input("e2").unwrap(), Input::Square(sq(6, 4)));
        assert!(parse_input("castle").is_err());
    }

    #[test]
    fn parse_choice_only_one_or_two() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice(" 2\n"), Some(2));
        assert_eq!(parse_choice("3"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn save_names() {
        assert!(validate_save_name("game 1").is_ok());
        assert!(validate_save_name("Friday").is_ok());
        assert!(validate_save_name("").is_err());
        assert!(validate_save_name("   ").is_err());
        assert!(validate_save_name("../etc").is_err());
        assert!(validate_save_name("a/b").is_err());
    }
}
