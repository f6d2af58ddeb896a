//! PGN export of a finished or running game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::san::to_san;
use crate::board::{Board, Color};
use crate::game::{GameRecord, GameResult};

const LINE_WIDTH: usize = 80;

/// Header tags written ahead of the move text.
///
/// The seven-tag roster is always written, using `?` for unknown values.
/// The `Result` tag comes from the game itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PgnMetadata {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    /// Additional tags, written after the roster in insertion order
    pub extra: Vec<(String, String)>,
}

impl Default for PgnMetadata {
    fn default() -> Self {
        PgnMetadata {
            event: "?".to_string(),
            site: "?".to_string(),
            date: "????.??.??".to_string(),
            round: "?".to_string(),
            white: "?".to_string(),
            black: "?".to_string(),
            extra: Vec::new(),
        }
    }
}

impl PgnMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    #[must_use]
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Date as `YYYY.MM.DD`, with `?` for unknown digits.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn round(mut self, round: impl Into<String>) -> Self {
        self.round = round.into();
        self
    }

    #[must_use]
    pub fn players(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.white = white.into();
        self.black = black.into();
        self
    }

    /// Set any tag by name. Roster names update the roster field; other
    /// names replace an existing extra tag or are appended.
    #[must_use]
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "Event" => self.event = value,
            "Site" => self.site = value,
            "Date" => self.date = value,
            "Round" => self.round = value,
            "White" => self.white = value,
            "Black" => self.black = value,
            _ => match self.extra.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => *slot = value,
                None => self.extra.push((name, value)),
            },
        }
        self
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    out.push('[');
    out.push_str(name);
    out.push_str(" \"");
    out.push_str(&escape(value));
    out.push_str("\"]\n");
}

/// Appends move text tokens, breaking lines before they pass the width.
struct MoveText {
    text: String,
    line_len: usize,
}

impl MoveText {
    fn push(&mut self, token: &str) {
        if self.line_len > 0 {
            if self.line_len + 1 + token.len() > LINE_WIDTH {
                self.text.push('\n');
                self.line_len = 0;
            } else {
                self.text.push(' ');
                self.line_len += 1;
            }
        }
        self.text.push_str(token);
        self.line_len += token.len();
    }
}

/// Render a game as PGN.
///
/// A game that did not start from the standard position gets `SetUp` and
/// `FEN` tags. Move numbers follow the fullmove number of the starting
/// position, and a game starting with Black to move opens with `N...`.
#[must_use]
pub fn write_pgn(record: &GameRecord, metadata: &PgnMetadata, result: GameResult) -> String {
    let mut out = String::new();
    push_tag(&mut out, "Event", &metadata.event);
    push_tag(&mut out, "Site", &metadata.site);
    push_tag(&mut out, "Date", &metadata.date);
    push_tag(&mut out, "Round", &metadata.round);
    push_tag(&mut out, "White", &metadata.white);
    push_tag(&mut out, "Black", &metadata.black);
    push_tag(&mut out, "Result", result.as_str());

    let start = record.starting_position();
    if *start != Board::new() {
        push_tag(&mut out, "SetUp", "1");
        push_tag(&mut out, "FEN", &start.to_fen());
    }
    for (name, value) in &metadata.extra {
        push_tag(&mut out, name, value);
    }
    out.push('\n');

    let mut moves = MoveText {
        text: String::new(),
        line_len: 0,
    };
    for (ply, (board, mv)) in record.replay().enumerate() {
        let number = board.fullmove_number();
        match board.side_to_move() {
            Color::White => moves.push(&format!("{number}.")),
            Color::Black if ply == 0 => moves.push(&format!("{number}...")),
            Color::Black => {}
        }
        moves.push(&to_san(&board, mv, &board.legal_moves()));
    }
    moves.push(result.as_str());

    out.push_str(&moves.text);
    out.push('\n');
    out
}
