//! Glyphs and ANSI styles used by the report.

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::outcome::Outcome;

pub const CHECK_MARK: &str = "✓";
pub const CROSS_MARK: &str = "✘";
pub const CIRCLE_SYM: &str = "○";

const GREEN: u8 = 42;
const RED: u8 = 196;
const GRAY: u8 = 246;
const DARK_GREEN: u8 = 28;
const DARK_RED: u8 = 160;

/// Escape sequences for each role in the report. Every field is empty when
/// colors are off, so the plain layout is identical to the colored one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub reset: String,
    pub passed: String,
    pub failed: String,
    pub muted: String,
    pub all_passed: String,
    pub some_failed: String,
}

impl Palette {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            return Self::default();
        }

        Self {
            reset: reset_sequence(),
            passed: escape(ColorSpec::new().set_fg(Some(Color::Ansi256(GREEN)))),
            failed: escape(ColorSpec::new().set_fg(Some(Color::Ansi256(RED)))),
            muted: escape(ColorSpec::new().set_fg(Some(Color::Ansi256(GRAY)))),
            all_passed: escape(
                ColorSpec::new()
                    .set_italic(true)
                    .set_fg(Some(Color::Ansi256(DARK_GREEN))),
            ),
            some_failed: escape(
                ColorSpec::new()
                    .set_italic(true)
                    .set_fg(Some(Color::Ansi256(DARK_RED))),
            ),
        }
    }

    /// Style and glyph for a task line.
    pub fn task_marker(&self, outcome: Outcome) -> (&str, &'static str) {
        match outcome {
            Outcome::Passed => (&self.passed, CHECK_MARK),
            Outcome::Failed => (&self.failed, CROSS_MARK),
            Outcome::NotRun => (&self.muted, CIRCLE_SYM),
        }
    }
}

fn escape(spec: &mut ColorSpec) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(spec.set_reset(false));
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

fn reset_sequence() -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}
