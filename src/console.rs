//! Line-oriented command session driving a single game.
//!
//! Each input line is an optional numeric id followed by a command and its
//! arguments. Responses are `=<id> <message>` on success and `?<id> <message>`
//! on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return the program name
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `play <x> <y> [player]` - Play at 1-indexed column `x`, row `y`; the
//!   player defaults to whoever is next
//! - `board` - Print the board
//! - `moves` - Print the move log
//! - `turn` - Print the player to move
//! - `quit` - End the session

use std::io::{self, BufRead, Write};

use crate::game::{Game, PlayerId};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "play",
    "quit",
    "turn",
];

pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands from `input` until `quit` or end of input, writing each
    /// response to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "board" => (true, format!("\n{}", self.game.board())),

            "moves" => {
                let log: Vec<String> = self
                    .game
                    .moves()
                    .iter()
                    .enumerate()
                    .map(|(i, m)| format!("{} {} {}", i + 1, m.player(), m.point()))
                    .collect();
                (true, log.join("\n"))
            }

            "turn" => (true, self.game.next_player().to_string()),

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let (Ok(x), Ok(y)) = (args[0].parse::<u8>(), args[1].parse::<u8>()) else {
                    return (false, "invalid coordinates".to_string());
                };
                let player = match args.get(2) {
                    Some(name) => PlayerId::from(*name),
                    None => self.game.next_player().clone(),
                };
                match self.game.submit_move(x, y, &player) {
                    Ok(outcome) if outcome.captured.is_empty() => (true, String::new()),
                    Ok(outcome) => (true, format!("captured {}", outcome.captured.len())),
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Game::new(1, "black", "white", 3).unwrap())
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = Session::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = Session::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_known_command() {
        let mut s = session();
        assert_eq!(s.execute("known_command", &["play"]), (true, "true".to_string()));
        assert_eq!(s.execute("known_command", &["genmove"]), (true, "false".to_string()));
        assert!(!s.execute("known_command", &[]).0);
    }

    #[test]
    fn test_play_infers_player() {
        let mut s = session();
        assert!(s.execute("play", &["1", "1"]).0);
        assert_eq!(s.execute("turn", &[]), (true, "white".to_string()));
        assert!(s.execute("play", &["2", "1"]).0);
        assert_eq!(s.game().board_codes()[0], vec![1, 2, 0]);
    }

    #[test]
    fn test_play_errors() {
        let mut s = session();
        assert_eq!(
            s.execute("play", &["1", "1", "white"]),
            (false, "Illegal move: not this player's turn".to_string())
        );
        assert_eq!(
            s.execute("play", &["4", "1"]),
            (false, "Illegal move: point is off the board".to_string())
        );
        assert!(!s.execute("play", &["x", "1"]).0);
        assert!(!s.execute("play", &["1"]).0);
    }

    #[test]
    fn test_play_reports_captures() {
        let mut s = session();
        s.execute("play", &["2", "1"]);
        s.execute("play", &["1", "1"]);
        assert_eq!(s.execute("play", &["1", "2"]), (true, "captured 1".to_string()));
    }

    #[test]
    fn test_run_session() {
        let mut s = session();
        let input = b"# comment\n\n1 play 2 2\nplay 2 2\n2 moves\nquit\nname\n";
        let mut out = Vec::new();
        s.run(&input[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "=1 \n\n? Illegal move: point not EMPTY\n\n=2 1 black (2,2)\n\n= \n\n"
        );
    }
}
