//! Integration tests driving whole sessions with scripted input.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use chessmate_core::{Color, Owner};
use chessmate_play::{PlayConfig, PlayError, SaveStore, Session, SessionEnd};

fn config(save_dir: PathBuf) -> PlayConfig {
    PlayConfig {
        save_dir,
        seed: Some(11),
        ..PlayConfig::default()
    }
}

fn run(script: &str, config: PlayConfig) -> (Result<SessionEnd, PlayError>, String) {
    let mut output = Vec::new();
    let result = Session::new(Cursor::new(script.to_string()), &mut output, config).run();
    (result, String::from_utf8(output).unwrap())
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chessmate-it-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn save_then_resume() {
    let dir = temp_dir("resume");

    let (result, output) = run("1\n2\nada\nbob\ne2\ne4\nsave\n../x\nopening\n", config(dir.clone()));
    assert_eq!(
        result.unwrap(),
        SessionEnd::Saved {
            name: "opening".to_string()
        }
    );
    assert!(output.contains("must be letters, digits and spaces"));
    assert!(dir.join("opening.yml").exists());

    let store = SaveStore::new(&dir);
    let game = store.load("opening").unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.current().name, Owner::from("bob"));

    let (result, output) = run("2\nmissing\nopening\ne7\ne5\nquit\n", config(dir.clone()));
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(output.contains("Saved games:"));
    assert!(output.contains("Save not found"));
    assert!(output.contains("bob's move (black)."));
    assert!(output.contains("ada's move (white)."));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn duplicate_save_name_is_reprompted() {
    let dir = temp_dir("duplicate");

    run("1\n2\nada\nbob\nsave\ntaken\n", config(dir.clone())).0.unwrap();
    let (result, output) = run("1\n2\ncy\ndee\nsave\ntaken\nother\n", config(dir.clone()));
    assert_eq!(
        result.unwrap(),
        SessionEnd::Saved {
            name: "other".to_string()
        }
    );
    assert!(output.contains("already exists"));
    assert_eq!(
        SaveStore::new(&dir).list().unwrap(),
        vec!["other".to_string(), "taken".to_string()]
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn loading_with_no_saves_starts_a_new_game() {
    let dir = temp_dir("empty");
    let (result, output) = run("2\n2\nada\nbob\nquit\n", config(dir));
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(output.contains("There are no saved games."));
}

#[test]
fn self_check_is_refused_then_corrected() {
    let dir = temp_dir("selfcheck");
    // e4 e5 d3 Bb4+, then a3 ignores the check and c3 blocks it.
    let script = "1\n2\nada\nbob\ne2\ne4\ne7\ne5\nd2\nd3\nf8\nb4\na2\na3\nc2\nc3\nquit\n";
    let (result, output) = run(script, config(dir));
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(output.contains("CHECK!"));
    assert!(output.contains("a2a3 would leave your king in check"));
    assert_eq!(output.matches("bob's move (black).").count(), 3);
}

#[test]
fn computer_opens_when_human_plays_black() {
    let dir = temp_dir("computer");
    let (result, output) = run("1\n1\n2\nada\nquit\n", config(dir));
    assert_eq!(result.unwrap(), SessionEnd::Quit);
    assert!(output.contains("You control the black pieces."));
    assert!(output.contains("Computer plays "));
    assert!(output.contains("ada's move (black)."));
}
