pub mod pennant;
pub mod report;

pub use self::pennant::{Color, Direction, Link, Pennant};
pub use self::report::ChainReport;

use crate::error::{PennantError, PennantResult};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::trace;

/// Ordered so that `Greater` means better: a larger minimal distance always
/// wins, and at equal distance fewer pairs at that distance wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quality {
    pub minimal_distance: i64,
    pub frequency: usize,
}

impl Quality {
    /// Placeholder that compares worse than any real chain.
    pub const FLOOR: Quality = Quality {
        minimal_distance: -1,
        frequency: 0,
    };
}

impl Ord for Quality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minimal_distance
            .cmp(&other.minimal_distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
    }
}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A fixed-capacity arrangement of pennants.
///
/// Every pennant carries links to its nearest same-colour neighbours on both
/// sides. `quality` is kept consistent with those links by every mutation.
///
/// The minimal distance is the smallest left-link distance of any pennant and
/// the frequency is how many pennants have exactly that left-link distance.
/// Counting left links only counts each same-colour pair once, and a chain
/// without pairs reports every pennant at the sentinel distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pennants: Vec<Pennant>,
    capacity: usize,
    quality: Quality,
    // Placed pennants bucketed by left-link distance.
    left_histogram: Vec<usize>,
}

impl Chain {
    pub fn new(capacity: usize) -> Self {
        Self {
            pennants: Vec::with_capacity(capacity),
            capacity,
            quality: Quality {
                minimal_distance: capacity as i64,
                frequency: 0,
            },
            left_histogram: vec![0; capacity],
        }
    }

    pub fn dummy(capacity: usize) -> Self {
        let mut chain = Self::new(capacity);
        chain.quality = Quality::FLOOR;
        chain
    }

    pub fn from_colors<I, C>(colors: I) -> PennantResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        let mut chain = Self::new(colors.len());
        for color in colors {
            chain.push(color)?;
        }
        Ok(chain)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pennants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pennants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pennants.len() == self.capacity
    }

    pub fn pennants(&self) -> &[Pennant] {
        &self.pennants
    }

    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.pennants.iter().map(Pennant::color)
    }

    pub fn last_color(&self) -> Option<&Color> {
        self.pennants.last().map(Pennant::color)
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn minimal_distance(&self) -> i64 {
        self.quality.minimal_distance
    }

    pub fn frequency(&self) -> usize {
        self.quality.frequency
    }

    pub fn sentinel(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    pub fn compare(&self, other: &Chain) -> Ordering {
        self.quality.cmp(&other.quality)
    }

    pub fn is_worse_than(&self, other: &Chain) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn is_better_than(&self, other: &Chain) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Secondary score used by simulated annealing: the sum over all
    /// pennants of `sentinel - min_distance`. Closely packed colours raise it.
    pub fn quality_index(&self) -> usize {
        let sentinel = self.sentinel();
        self.pennants
            .iter()
            .map(|p| sentinel - p.min_distance().min(sentinel))
            .sum()
    }

    // --- Measurement ---

    fn check_index(&self, index: usize) -> PennantResult<()> {
        if index >= self.pennants.len() {
            return Err(PennantError::OutOfBounds {
                index,
                len: self.pennants.len(),
            });
        }
        Ok(())
    }

    fn nearest_same_color(&self, index: usize, direction: Direction) -> Option<usize> {
        let color = self.pennants[index].color();
        match direction {
            Direction::Left => (0..index)
                .rev()
                .find(|&k| self.pennants[k].color() == color),
            Direction::Right => {
                (index + 1..self.pennants.len()).find(|&k| self.pennants[k].color() == color)
            }
        }
    }

    pub fn measure_distance(&self, index: usize, direction: Direction) -> PennantResult<usize> {
        self.check_index(index)?;
        Ok(match self.nearest_same_color(index, direction) {
            Some(k) => index.abs_diff(k) - 1,
            None => self.sentinel(),
        })
    }

    // --- Neighbour maintenance ---

    fn set_left(&mut self, index: usize, link: Link) {
        let old = self.pennants[index].left.distance;
        if let Some(bucket) = self.left_histogram.get_mut(old) {
            *bucket -= 1;
        }
        self.left_histogram[link.distance] += 1;
        self.pennants[index].left = link;
    }

    fn set_right(&mut self, index: usize, link: Link) {
        self.pennants[index].right = link;
    }

    fn relink_after_placing(&mut self, index: usize) {
        let sentinel = self.sentinel();
        let link_to = |k: Option<usize>| match k {
            Some(k) => Link {
                neighbour: Some(k),
                distance: index.abs_diff(k) - 1,
            },
            None => Link::detached(sentinel),
        };

        let left = link_to(self.nearest_same_color(index, Direction::Left));
        let right = link_to(self.nearest_same_color(index, Direction::Right));

        self.set_left(index, left);
        self.set_right(index, right);

        if let Some(k) = left.neighbour {
            self.set_right(
                k,
                Link {
                    neighbour: Some(index),
                    distance: left.distance,
                },
            );
        }
        if let Some(k) = right.neighbour {
            self.set_left(
                k,
                Link {
                    neighbour: Some(index),
                    distance: right.distance,
                },
            );
        }
    }

    /// Bridges the same-colour neighbours of the pennant at `index` before it
    /// leaves its slot. With `swapped` the slot is refilled, so the gap it
    /// leaves still counts as one slot between the bridged pair.
    fn unlink_before_removing(&mut self, index: usize, swapped: bool) {
        let (left, right) = (self.pennants[index].left, self.pennants[index].right);

        let bridged = match (left.neighbour, right.neighbour) {
            (Some(_), Some(_)) => left.distance + right.distance + usize::from(swapped),
            _ => self.sentinel(),
        };

        if let Some(l) = left.neighbour {
            self.set_right(
                l,
                Link {
                    neighbour: right.neighbour,
                    distance: bridged,
                },
            );
        }
        if let Some(r) = right.neighbour {
            self.set_left(
                r,
                Link {
                    neighbour: left.neighbour,
                    distance: bridged,
                },
            );
        }
    }

    // --- Quality maintenance ---

    fn adjust_quality_after_adding(&mut self, distance: usize) {
        let distance = distance as i64;
        match distance.cmp(&self.quality.minimal_distance) {
            Ordering::Less => {
                self.quality.minimal_distance = distance;
                self.quality.frequency = 1;
            }
            Ordering::Equal => self.quality.frequency += 1,
            Ordering::Greater => {}
        }
    }

    fn adjust_quality_after_swapping(&mut self, before: (usize, usize), after: (usize, usize)) {
        let closest = after.0.min(after.1);

        if (closest as i64) < self.quality.minimal_distance {
            // One of the moved pennants landed closer than anything before.
            // Both of its sides may sit at the new minimum.
            self.quality.minimal_distance = closest as i64;
            self.quality.frequency = self.left_histogram[closest];
        } else {
            // Pennants that left or entered the minimum are already counted
            // in the histogram bucket.
            let minimal = self.quality.minimal_distance as usize;
            self.quality.frequency = self.left_histogram.get(minimal).copied().unwrap_or(0);
        }

        if self.quality.frequency == 0 {
            self.rescan_quality();
        }

        trace!(
            "swap quality: before={:?} after={:?} -> {:?}",
            before,
            after,
            self.quality
        );
    }

    fn rescan_quality(&mut self) {
        let mut minimal = self.capacity;
        let mut count = 0;
        for p in &self.pennants {
            // A mutual pair shows up as one pennant's left link and the
            // other's right link; only the left side is counted.
            let d = p.left.distance;
            match d.cmp(&minimal) {
                Ordering::Less => {
                    minimal = d;
                    count = 1;
                }
                Ordering::Equal => count += 1,
                Ordering::Greater => {}
            }
        }
        self.quality = Quality {
            minimal_distance: minimal as i64,
            frequency: count,
        };
    }

    // --- Movements ---

    pub fn push(&mut self, color: impl Into<Color>) -> PennantResult<()> {
        if self.pennants.len() >= self.capacity {
            return Err(PennantError::OutOfBounds {
                index: self.pennants.len(),
                len: self.capacity,
            });
        }
        self.pennants.push(Pennant::new(color.into()));
        let index = self.pennants.len() - 1;

        let distance = self.measure_distance(index, Direction::Left)?;
        self.relink_after_placing(index);
        self.adjust_quality_after_adding(distance);
        Ok(())
    }

    pub fn appended(&self, color: impl Into<Color>) -> PennantResult<Self> {
        let mut child = self.clone();
        child.push(color)?;
        Ok(child)
    }

    // Same-colour swaps change nothing.
    pub fn swap(&mut self, i: usize, j: usize) -> PennantResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        if i == j || self.pennants[i].same_color(&self.pennants[j]) {
            return Ok(());
        }

        let before = (
            self.pennants[i].min_distance(),
            self.pennants[j].min_distance(),
        );

        self.unlink_before_removing(i, true);
        self.unlink_before_removing(j, true);
        self.pennants.swap(i, j);
        self.relink_after_placing(j);
        self.relink_after_placing(i);

        let after = (
            self.pennants[j].min_distance(),
            self.pennants[i].min_distance(),
        );
        self.adjust_quality_after_swapping(before, after);
        Ok(())
    }
}
