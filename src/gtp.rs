//! Go Text Protocol (GTP) front end.
//!
//! Drives a [`GameSession`] from a line-based command stream so the engine
//! can sit behind any GTP-speaking board GUI. Responses use the usual
//! `=`/`?` framing with optional numeric ids.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a board of that size
//! - `clear_board` - Reset the game
//! - `komi <value>` - Accepted and ignored (scoring counts captures only)
//! - `play <color> <vertex|pass|resign>` - Move for the player to move
//! - `showboard` - Render the board with capture counts
//! - `captures <color>` - Stones captured by a color
//! - `final_score` - Current or final result (`B+3`, `W+R`, `0`)
//!
//! There is no `genmove`: the engine only referees.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{debug, warn};

use crate::board::{Color, format_vertex, parse_vertex};
use crate::config::GameConfig;
use crate::game::{EndReason, FinalScore, GameSession, GameStatus, Verdict};

const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "final_score",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    session: GameSession,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new(GameSession::new())
    }
}

impl GtpEngine {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Serve commands from stdin until `quit` or end of input.
    pub fn run_stdio(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Serve commands from `input`, writing responses to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let mut parts = command_line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };
            let command = command.to_lowercase();
            let args: Vec<&str> = parts.collect();

            let (success, message) = self.execute(&command, &args);
            if !success {
                warn!(%command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional leading numeric id off a command line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let line = line.trim();
        let digits = line.find(|c: char| !c.is_ascii_digit()).unwrap_or(line.len());
        match line[..digits].parse::<u32>() {
            Ok(id) => (Some(id), line[digits..].trim()),
            Err(_) => (None, line),
        }
    }

    /// Execute a GTP command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "gtp command");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match GameSession::with_config(GameConfig::with_board_size(size)) {
                    Ok(session) => {
                        self.session = session;
                        (true, String::new())
                    }
                    Err(err) => (false, format!("unacceptable size: {err}")),
                }
            }

            "clear_board" => {
                self.session.reset();
                (true, String::new())
            }

            "komi" => match args.first().map(|a| a.parse::<f32>()) {
                Some(Ok(_)) => (true, String::new()),
                Some(Err(_)) => (false, "invalid komi".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => self.play(args),

            "showboard" => {
                let session = &self.session;
                let mut text = format!(
                    "\nBlack (X) captures: {}  White (O) captures: {}  {} to move\n",
                    session.captures(Color::Black),
                    session.captures(Color::White),
                    session.to_move(),
                );
                text.push_str(&session.board().to_string());
                (true, text.trim_end().to_string())
            }

            "captures" => match args.first().and_then(|a| Color::parse(a)) {
                Some(color) => (true, self.session.captures(color).to_string()),
                None => (false, "invalid color".to_string()),
            },

            "final_score" => {
                let score = match self.session.status() {
                    GameStatus::Ended(score) => score,
                    GameStatus::InProgress => self.session.score(EndReason::ConsecutivePasses),
                };
                (true, format_score(&score))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn play(&mut self, args: &[&str]) -> (bool, String) {
        if args.len() < 2 {
            return (false, "missing arguments".to_string());
        }
        let Some(color) = Color::parse(args[0]) else {
            return (false, "invalid color".to_string());
        };
        if self.session.is_ended() {
            return (false, "game is over".to_string());
        }
        if color != self.session.to_move() {
            return (false, format!("it is {}'s turn", self.session.to_move()));
        }

        let vertex = args[1].to_lowercase();
        match vertex.as_str() {
            "pass" => {
                self.session.pass();
                (true, String::new())
            }
            "resign" => {
                self.session.resign();
                (true, String::new())
            }
            _ => {
                let size = self.session.board().size();
                let Some((x, y)) = parse_vertex(&vertex, size) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.session.attempt_move(x, y) {
                    Ok(placed) if placed.captured > 0 => {
                        debug!(
                            vertex = %format_vertex(placed.point, size),
                            captured = placed.captured,
                            "capture"
                        );
                        (true, String::new())
                    }
                    Ok(_) => (true, String::new()),
                    Err(err) => (false, err.to_string()),
                }
            }
        }
    }
}

/// Format a result the way GTP `final_score` does: `B+3`, `W+R`, or `0`.
pub fn format_score(score: &FinalScore) -> String {
    let letter = |c: Color| match c {
        Color::Black => 'B',
        Color::White => 'W',
    };
    match (score.reason, score.verdict) {
        (EndReason::Resignation(_), Verdict::Winner(winner)) => format!("{}+R", letter(winner)),
        (_, Verdict::Winner(winner)) => {
            format!("{}+{}", letter(winner), score.black.abs_diff(score.white))
        }
        (_, Verdict::Tie) => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn engine(size: usize) -> GtpEngine {
        GtpEngine::new(GameSession::with_config(GameConfig::with_board_size(size)).unwrap())
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = GtpEngine::default();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "capture-go");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::default();
        assert_eq!(engine.execute("known_command", &["play"]), (true, "true".into()));
        assert_eq!(engine.execute("known_command", &["genmove"]), (true, "false".into()));
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::default();
        let (success, _) = engine.execute("boardsize", &["9"]);
        assert!(success);
        assert_eq!(engine.session().board().size(), 9);

        let (success, _) = engine.execute("boardsize", &["40"]);
        assert!(!success);
        assert_eq!(engine.session().board().size(), 9);
    }

    #[test]
    fn test_play_enforces_turn() {
        let mut engine = engine(9);
        let (success, response) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        assert_eq!(response, "it is Black's turn");

        assert!(engine.execute("play", &["b", "D4"]).0);
        assert_eq!(engine.session().board().get(3, 5), Ok(Cell::Black));

        let (success, response) = engine.execute("play", &["w", "D4"]);
        assert!(!success);
        assert_eq!(response, "illegal move: point not empty");
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = engine(9);
        assert!(engine.execute("play", &["black", "E5"]).0);
        assert!(engine.execute("clear_board", &[]).0);
        assert_eq!(engine.session().snapshot().board.stone_count(Color::Black), 0);
        assert_eq!(engine.session().to_move(), Color::Black);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut engine = engine(9);
        assert!(engine.execute("play", &["b", "pass"]).0);
        assert!(engine.execute("play", &["w", "pass"]).0);
        assert!(engine.session().is_ended());
        assert_eq!(engine.execute("final_score", &[]), (true, "0".into()));
        let (success, response) = engine.execute("play", &["w", "A1"]);
        assert!(!success);
        assert_eq!(response, "game is over");
    }

    #[test]
    fn test_resign_score() {
        let mut engine = engine(9);
        assert!(engine.execute("play", &["b", "resign"]).0);
        assert_eq!(engine.execute("final_score", &[]), (true, "W+R".into()));
    }

    #[test]
    fn test_run_frames_responses() {
        let mut engine = engine(9);
        let input = b"1 name\nplay black D4\n# comment\n2 captures b\nbogus\nquit\nname\n";
        let mut output = Vec::new();
        engine.run(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "=1 capture-go\n\n= \n\n=2 0\n\n? unknown command: bogus\n\n= \n\n"
        );
    }
}
