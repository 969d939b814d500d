//! Box-drawing character sets and junction merging logic.

use crate::layout::Point;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode { Self::Unicode } else { Self::Ascii }
    }
}

// ─── BoxChars ─────────────────────────────────────────────────────────────────

/// Unicode or ASCII box-drawing character set.
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_right: char, // ├
    pub tee_left: char,  // ┤
    pub tee_down: char,  // ┬
    pub tee_up: char,    // ┴
    pub cross: char,     // ┼
    pub arrow_right: char,
    pub arrow_left: char,
    pub arrow_down: char,
    pub arrow_up: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            tee_right: '├',
            tee_left: '┤',
            tee_down: '┬',
            tee_up: '┴',
            cross: '┼',
            arrow_right: '►',
            arrow_left: '◄',
            arrow_down: '▼',
            arrow_up: '▲',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            tee_right: '+',
            tee_left: '+',
            tee_down: '+',
            tee_up: '+',
            cross: '+',
            arrow_right: '>',
            arrow_left: '<',
            arrow_down: 'v',
            arrow_up: '^',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Arrow head pointing in the direction of travel `from → to`.
    pub fn arrow(&self, from: Point, to: Point) -> char {
        if to.y < from.y {
            self.arrow_up
        } else if to.y > from.y {
            self.arrow_down
        } else if to.x > from.x {
            self.arrow_right
        } else {
            self.arrow_left
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which arms of a junction cell are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub const UP: Self = Self::new(true, false, false, false);
    pub const DOWN: Self = Self::new(false, true, false, false);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// The single arm of cell `from` that points at the neighbouring
    /// direction of `to`. Empty when the points coincide.
    pub fn toward(from: Point, to: Point) -> Self {
        Self::new(to.y < from.y, to.y > from.y, to.x < from.x, to.x > from.x)
    }

    /// Decode a box-drawing character into its arms. Returns None for non-junction chars.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '─' | '-' => Some(Self::new(false, false, true, true)),
            '│' | '|' => Some(Self::new(true, true, false, false)),
            '┌' => Some(Self::new(false, true, false, true)),
            '┐' => Some(Self::new(false, true, true, false)),
            '└' => Some(Self::new(true, false, false, true)),
            '┘' => Some(Self::new(true, false, true, false)),
            '├' => Some(Self::new(true, true, false, true)),
            '┤' => Some(Self::new(true, true, true, false)),
            '┬' => Some(Self::new(false, true, true, true)),
            '┴' => Some(Self::new(true, false, true, true)),
            '┼' | '+' => Some(Self::new(true, true, true, true)),
            _ => None,
        }
    }

    /// Merge two Arms by OR-ing each direction.
    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Convert Arms to the appropriate box-drawing character for the given CharSet.
    pub fn to_char(self, cs: CharSet) -> char {
        let bc = BoxChars::for_charset(cs);
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, true, true) => bc.horizontal,
            (true, true, false, false) => bc.vertical,
            (false, true, false, true) => bc.top_left,
            (false, true, true, false) => bc.top_right,
            (true, false, false, true) => bc.bottom_left,
            (true, false, true, false) => bc.bottom_right,
            (true, true, false, true) => bc.tee_right,
            (true, true, true, false) => bc.tee_left,
            (false, true, true, true) => bc.tee_down,
            (true, false, true, true) => bc.tee_up,
            (true, true, true, true) => bc.cross,
            // Single-arm fallbacks
            (true, false, false, false) | (false, true, false, false) => bc.vertical,
            (false, false, true, false) | (false, false, false, true) => bc.horizontal,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
