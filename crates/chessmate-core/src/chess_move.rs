//! A move as a (source, destination) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::square::Square;

/// A plain move from one square to another.
///
/// There are no special move kinds: castling, en passant and promotion are
/// not part of the rules implemented here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
