//! Per-node visual attributes: color and size.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fill color used when none is given.
pub const DEFAULT_COLOR: &str = "#1f78b4";
/// Node size used when none is given.
pub const DEFAULT_SIZE: u32 = 300;
/// Smallest size the interactive editor offers.
pub const MIN_EDITOR_SIZE: u32 = 100;
/// Largest size the interactive editor offers.
pub const MAX_EDITOR_SIZE: u32 = 1000;

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})|[a-zA-Z]{3,32})$")
        .expect("color pattern is valid")
});

// ── Color ────────────────────────────────────────────────────────────────────

/// A display color: `#rgb`, `#rrggbb` or a bare color name such as `red`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if COLOR_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("invalid color '{s}'; use #rgb, #rrggbb or a color name"))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── NodeSize ─────────────────────────────────────────────────────────────────

/// A strictly positive node size (drawn as the node's area).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeSize(u32);

impl NodeSize {
    pub fn new(size: u32) -> Option<Self> {
        (size > 0).then_some(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for NodeSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl TryFrom<u32> for NodeSize {
    type Error = String;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size).ok_or_else(|| "node size must be positive".to_string())
    }
}

impl From<NodeSize> for u32 {
    fn from(s: NodeSize) -> Self {
        s.0
    }
}

impl fmt::Display for NodeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── NodeStyle ────────────────────────────────────────────────────────────────

/// The attribute record carried by every mind-map node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeStyle {
    pub color: Color,
    pub size: NodeSize,
}

impl NodeStyle {
    pub fn new(color: Color, size: NodeSize) -> Self {
        Self { color, size }
    }
}
