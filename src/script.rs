//! # Command Scripts
//!
//! JSON-lines recordings of screen commands, replayed in real or simulated
//! time.
//!
//! Each line is one event:
//!
//! ```text
//! {"kind":"grid","opcode":"put","color":"black","x":3,"y":4}
//! {"kind":"grid","opcode":"flip","color":"white","x":3,"y":3,"delay":3}
//! {"kind":"message","id":"black","text":"4"}
//! {"kind":"pause","ms":800}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Grid opcodes stay
//! strings so that a bad opcode reaches `update_grid` and is dropped there.

use crate::animation::wave_delays;
use crate::board::{DiscColor, GridCell};
use crate::config::DEFAULT_WAVE_STEP;
use crate::rendering::Surface;
use crate::screen::Screen;
use crate::{FlipoutError, FlipoutResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

/// One line of a command script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// An `update_grid` call
    Grid {
        opcode: String,
        #[serde(default)]
        color: String,
        x: i32,
        y: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u32>,
    },
    /// A `show_message` call
    Message { id: String, text: String },
    /// Wait before the next event
    Pause { ms: u64 },
}

impl ScriptEvent {
    /// A grid event.
    pub fn grid(opcode: &str, color: &str, cell: GridCell, delay: Option<u32>) -> Self {
        ScriptEvent::Grid {
            opcode: opcode.to_string(),
            color: color.to_string(),
            x: cell.x,
            y: cell.y,
            delay,
        }
    }

    /// A message event.
    pub fn message(id: &str, text: &str) -> Self {
        ScriptEvent::Message {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

/// Parses a JSON-lines script.
pub fn parse_script(text: &str) -> FlipoutResult<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|e| FlipoutError::InvalidScript(format!("line {}: {}", number + 1, e)))?;
        events.push(event);
    }
    Ok(events)
}

/// Reads and parses a script file.
pub fn load_script(path: impl AsRef<Path>) -> FlipoutResult<Vec<ScriptEvent>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

/// Serializes events as JSON lines.
pub fn to_json_lines(events: &[ScriptEvent]) -> FlipoutResult<String> {
    let mut out = String::new();
    for event in events {
        out.push_str(&serde_json::to_string(event)?);
        out.push('\n');
    }
    Ok(out)
}

fn move_events(
    events: &mut Vec<ScriptEvent>,
    color: DiscColor,
    placed: GridCell,
    flipped: &[GridCell],
) {
    events.push(ScriptEvent::grid("put", color.as_str(), placed, None));
    for (cell, delay) in wave_delays(placed, flipped, DEFAULT_WAVE_STEP) {
        events.push(ScriptEvent::grid("flip", color.as_str(), cell, Some(delay)));
    }
}

/// A short game opening: the starting position with hints, then three moves.
pub fn demo_script() -> Vec<ScriptEvent> {
    let cell = GridCell::new;
    let mut events = Vec::new();

    for (color, at) in [
        ("white", cell(3, 3)),
        ("black", cell(4, 3)),
        ("black", cell(3, 4)),
        ("white", cell(4, 4)),
    ] {
        events.push(ScriptEvent::grid("put", color, at, None));
    }
    let hints = [cell(3, 2), cell(2, 3), cell(5, 4), cell(4, 5)];
    for at in hints {
        events.push(ScriptEvent::grid("hint", "black", at, None));
    }
    events.push(ScriptEvent::message("black", "2"));
    events.push(ScriptEvent::message("white", "2"));
    events.push(ScriptEvent::Pause { ms: 1000 });

    for at in &hints[1..] {
        events.push(ScriptEvent::grid("remove", "", *at, None));
    }
    move_events(&mut events, DiscColor::Black, cell(3, 2), &[cell(3, 3)]);
    events.push(ScriptEvent::message("black", "4"));
    events.push(ScriptEvent::message("white", "1"));
    events.push(ScriptEvent::message("you", "Move d3"));
    events.push(ScriptEvent::Pause { ms: 2000 });

    move_events(&mut events, DiscColor::White, cell(2, 4), &[cell(3, 4)]);
    events.push(ScriptEvent::message("black", "3"));
    events.push(ScriptEvent::message("white", "3"));
    events.push(ScriptEvent::message("com", "Move c5"));
    events.push(ScriptEvent::Pause { ms: 2000 });

    move_events(&mut events, DiscColor::Black, cell(5, 5), &[cell(4, 4)]);
    events.push(ScriptEvent::message("black", "5"));
    events.push(ScriptEvent::message("white", "2"));
    events.push(ScriptEvent::message("you", "Move f6"));

    events
}

/// Feeds script events to a screen as time passes.
#[derive(Debug, Clone, Default)]
pub struct ScriptPlayer {
    pending: VecDeque<ScriptEvent>,
    wait: Duration,
}

impl ScriptPlayer {
    /// Creates a player positioned at the first event.
    pub fn new(events: Vec<ScriptEvent>) -> Self {
        Self {
            pending: events.into(),
            wait: Duration::ZERO,
        }
    }

    /// Applies every event reached within `elapsed`, stopping at pauses that
    /// have not run out. Returns the number of events applied.
    pub fn advance<S: Surface>(&mut self, screen: &mut Screen<S>, elapsed: Duration) -> usize {
        let mut budget = elapsed;
        let mut applied = 0;

        loop {
            if self.wait > budget {
                self.wait -= budget;
                break;
            }
            budget -= self.wait;
            self.wait = Duration::ZERO;

            let Some(event) = self.pending.pop_front() else {
                break;
            };
            applied += 1;

            match event {
                ScriptEvent::Grid {
                    opcode,
                    color,
                    x,
                    y,
                    delay,
                } => screen.update_grid(&opcode, &color, x, y, delay),
                ScriptEvent::Message { id, text } => screen.show_message(&id, &text),
                ScriptEvent::Pause { ms } => {
                    debug!("Script pausing for {} ms", ms);
                    self.wait = Duration::from_millis(ms);
                }
            }
        }

        applied
    }

    /// Time left on the current pause.
    pub fn remaining_wait(&self) -> Duration {
        self.wait
    }

    /// Whether every event has been applied.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;
    use crate::rendering::{RecordingSurface, SpriteAtlas};

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let text = r#"
# opening
{"kind":"grid","opcode":"put","color":"black","x":3,"y":4}

{"kind":"pause","ms":10}
{"kind":"grid","opcode":"remove","x":3,"y":4}
"#;
        let events = parse_script(text).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[2],
            ScriptEvent::grid("remove", "", GridCell::new(3, 4), None)
        );
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_script("{\"kind\":\"pause\",\"ms\":1}\n{\"kind\":\"dance\"}").unwrap_err();
        match err {
            FlipoutError::InvalidScript(message) => assert!(message.starts_with("line 2")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        let line = r#"{"kind":"grid","opcode":"flip","color":"white","x":0,"y":0,"delay":-1}"#;
        assert!(parse_script(line).is_err());
    }

    #[test]
    fn test_demo_round_trips_through_json_lines() {
        let demo = demo_script();
        let text = to_json_lines(&demo).unwrap();
        assert_eq!(parse_script(&text).unwrap(), demo);
    }

    #[test]
    fn test_player_stops_at_pause() {
        let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
        let mut player = ScriptPlayer::new(vec![
            ScriptEvent::grid("put", "black", GridCell::new(0, 0), None),
            ScriptEvent::Pause { ms: 100 },
            ScriptEvent::grid("put", "white", GridCell::new(1, 0), None),
        ]);

        assert_eq!(player.advance(&mut screen, Duration::ZERO), 2);
        assert_eq!(player.remaining_wait(), Duration::from_millis(100));
        assert_eq!(screen.mirror().get(GridCell::new(1, 0)), CellState::Empty);

        assert_eq!(player.advance(&mut screen, Duration::from_millis(60)), 0);
        assert_eq!(player.advance(&mut screen, Duration::from_millis(40)), 1);
        assert!(player.is_finished());
        assert_eq!(
            screen.mirror().get(GridCell::new(1, 0)),
            CellState::Stone(DiscColor::White)
        );
    }

    #[test]
    fn test_player_passes_bad_opcodes_through() {
        let mut screen = Screen::init(RecordingSurface::new(), SpriteAtlas::generated());
        let mut player = ScriptPlayer::new(vec![ScriptEvent::grid(
            "explode",
            "black",
            GridCell::new(0, 0),
            None,
        )]);

        assert_eq!(player.advance(&mut screen, Duration::ZERO), 1);
        assert!(screen.surface().calls().is_empty());
    }
}
