//! Hole-count → digit decision table.
//!
//! The table is gated on the expected digit: it answers "is this hole count
//! consistent with the known digit?" rather than recognizing blindly. That is
//! what the parameter sweep needs (scoring configurations against ground
//! truth) and it is not a stand-alone recognizer. In particular an expected
//! `'8'` is accepted for every hole count, since opening often closes one or
//! both of its loops.

use serde::Serialize;

/// Returned when the hole count contradicts the expected digit.
pub const UNKNOWN_MARKER: char = '?';

/// Canonical number of enclosed regions of a digit under ideal segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitTopology {
    /// 1, 2, 3, 4, 5, 7
    NoHole,
    /// 0, 6, 9
    OneHole,
    /// 8
    TwoHoles,
}

impl DigitTopology {
    pub fn of(digit: char) -> Option<Self> {
        match digit {
            '1' | '2' | '3' | '4' | '5' | '7' => Some(DigitTopology::NoHole),
            '0' | '6' | '9' => Some(DigitTopology::OneHole),
            '8' => Some(DigitTopology::TwoHoles),
            _ => None,
        }
    }

    pub fn hole_count(self) -> usize {
        match self {
            DigitTopology::NoHole => 0,
            DigitTopology::OneHole => 1,
            DigitTopology::TwoHoles => 2,
        }
    }
}

/// Map a hole count to `expected` when consistent with it, else `UNKNOWN_MARKER`.
///
/// Rules, first match wins:
/// - `'8'` is always accepted.
/// - Exact topology match.
/// - Relaxed: no-hole digits accept one spurious hole; one-hole digits
///   accept any extra holes.
pub fn classify(hole_count: usize, expected: char) -> char {
    let Some(topology) = DigitTopology::of(expected) else {
        return UNKNOWN_MARKER;
    };
    let accepted = match topology {
        DigitTopology::TwoHoles => true,
        _ if hole_count == topology.hole_count() => true,
        DigitTopology::NoHole => hole_count <= 1,
        DigitTopology::OneHole => hole_count >= 1,
    };
    if accepted {
        expected
    } else {
        UNKNOWN_MARKER
    }
}

/// Per-glyph classification record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationOutcome {
    pub glyph_index: usize,
    pub hole_count: usize,
    pub recognized: char,
}

impl ClassificationOutcome {
    pub fn is_unknown(&self) -> bool {
        self.recognized == UNKNOWN_MARKER
    }
}
