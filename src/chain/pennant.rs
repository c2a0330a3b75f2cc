use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Immutable colour tag. Cloning shares the string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(Arc<str>);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character, used for the compact `-r-b-r-` rendering.
    pub fn initial(&self) -> char {
        self.0.chars().next().unwrap_or('?')
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Link to the nearest same-colour pennant in one direction.
///
/// `neighbour` is a slot index into the owning chain and never leaves it.
/// `distance` counts the slots strictly between the two pennants; without a
/// neighbour it holds the chain's sentinel (`capacity - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub neighbour: Option<usize>,
    pub distance: usize,
}

impl Link {
    pub(crate) const UNPLACED: Link = Link {
        neighbour: None,
        distance: usize::MAX,
    };

    pub fn detached(sentinel: usize) -> Self {
        Self {
            neighbour: None,
            distance: sentinel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pennant {
    color: Color,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Pennant {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            left: Link::UNPLACED,
            right: Link::UNPLACED,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn left(&self) -> Link {
        self.left
    }

    pub fn right(&self) -> Link {
        self.right
    }

    pub fn link(&self, direction: Direction) -> Link {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Distance to the closer same-colour neighbour on either side.
    pub fn min_distance(&self) -> usize {
        self.left.distance.min(self.right.distance)
    }

    pub fn same_color(&self, other: &Pennant) -> bool {
        self.color == other.color
    }
}
