use crate::chain::Color;
use crate::error::{PennantError, PennantResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A multiset of pennants keyed by colour.
///
/// All writes go through [`Pile::set`], which keeps
/// `total` equal to the sum of the counts and drops colours whose count
/// reaches zero. Iteration order is the colour order, so seeded searches are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    counts: BTreeMap<Color, usize>,
    total: usize,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn demo() -> Self {
        let mut pile = Self::new();
        for (color, count) in [("rot", 4), ("grün", 3), ("weiß", 2), ("schwarz", 1)] {
            let stored = pile.set(color, count);
            debug_assert!(stored.is_ok());
        }
        pile
    }

    pub fn set(&mut self, color: impl Into<Color>, count: i64) -> PennantResult<()> {
        if count < 0 {
            return Err(PennantError::InvalidArgument(format!(
                "No negative amount of pennants (got {})",
                count
            )));
        }
        let color = color.into();
        if color.as_str().trim().is_empty() {
            return Err(PennantError::InvalidArgument(
                "Pennant colour must not be empty".to_string(),
            ));
        }
        let count = count as usize;

        let previous = self.counts.get(&color).copied().unwrap_or(0);
        self.total = self.total - previous + count;

        if count == 0 {
            self.counts.remove(&color);
        } else {
            self.counts.insert(color, count);
        }
        Ok(())
    }

    /// Consumes one pennant of `color`, removing the colour once it runs out.
    pub fn take_one(&mut self, color: &Color) -> PennantResult<()> {
        let current = self.get(color);
        if current == 0 {
            return Err(PennantError::InvalidArgument(format!(
                "No '{}' pennants left on the pile",
                color
            )));
        }
        self.set(color.clone(), current as i64 - 1)
    }

    pub fn get(&self, color: &Color) -> usize {
        self.counts.get(color).copied().unwrap_or(0)
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.counts.contains_key(color)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Color, usize)> {
        self.counts.iter().map(|(c, &n)| (c, n))
    }

    /// Loads a JSON object of `"colour": count` pairs.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PennantResult<Self> {
        let path = path.as_ref();
        debug!("Loading pile from {}", path.display());
        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<String, i64> = serde_json::from_str(&content)?;

        let mut pile = Self::new();
        for (color, count) in raw {
            pile.set(color.as_str(), count)?;
        }
        Ok(pile)
    }
}

/// Parses `"rot=4,grün=3"`.
impl FromStr for Pile {
    type Err = PennantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pile = Self::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (color, count) = part.split_once('=').ok_or_else(|| {
                PennantError::InvalidArgument(format!("Pile entry '{}' is not colour=count", part))
            })?;
            let color = color.trim();
            if color.is_empty() {
                return Err(PennantError::InvalidArgument(format!(
                    "Pile entry '{}' has no colour",
                    part
                )));
            }
            let count: i64 = count.trim().parse().map_err(|_| {
                PennantError::InvalidArgument(format!("Invalid number in pile entry '{}'", part))
            })?;
            pile.set(color, count)?;
        }
        Ok(pile)
    }
}
