//! Report configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TestKitError};

/// Environment variable read by [`Options::from_env`] for the detail depth.
pub const DETAIL_DEPTH_ENV: &str = "TESTKIT_DETAIL_DEPTH";

/// How many nested levels the report expands before collapsing segments to
/// their summary line. Failed segments are expanded regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailDepth {
    #[default]
    Unlimited,
    Levels(u16),
}

impl DetailDepth {
    /// Converts the integer form: `-1` is unlimited, `n >= 0` is `n` levels.
    pub fn from_i64(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(DetailDepth::Unlimited),
            0..=0xFFFF => Ok(DetailDepth::Levels(value as u16)),
            _ => Err(TestKitError::InvalidDetailDepth { value }),
        }
    }

    /// Should children of a segment rendered at `depth` be expanded?
    /// The root pass renders at depth `-1`.
    pub fn expands(&self, depth: i32) -> bool {
        match self {
            DetailDepth::Unlimited => true,
            DetailDepth::Levels(levels) => depth < i32::from(*levels),
        }
    }
}

impl FromStr for DetailDepth {
    type Err = TestKitError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| TestKitError::InvalidEnvValue {
                name: DETAIL_DEPTH_ENV.to_string(),
                value: s.to_string(),
            })?;
        Self::from_i64(value)
    }
}

impl fmt::Display for DetailDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailDepth::Unlimited => write!(f, "-1"),
            DetailDepth::Levels(levels) => write!(f, "{}", levels),
        }
    }
}

/// Global display options for a [`crate::TestTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub detail_depth: DetailDepth,
    pub use_colors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            detail_depth: DetailDepth::Unlimited,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl Options {
    /// Plain-text options with unlimited expansion.
    pub fn plain() -> Self {
        Self {
            detail_depth: DetailDepth::Unlimited,
            use_colors: false,
        }
    }

    pub fn with_detail_depth(mut self, detail_depth: DetailDepth) -> Self {
        self.detail_depth = detail_depth;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Defaults, overridden by `TESTKIT_DETAIL_DEPTH` and `NO_COLOR`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();
        if let Some(depth) = lookup(DETAIL_DEPTH_ENV) {
            options.detail_depth = depth.parse()?;
        }
        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            options.use_colors = false;
        }
        Ok(options)
    }
}
