use super::{Chain, Color, Quality};
use serde::Serialize;
use std::fmt;

/// Compact rendering: the first letter of each colour, dash separated.
/// `[red, blue, red]` renders as `-r-b-r-`.
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-")?;
        for color in self.colors() {
            write!(f, "{}-", color.initial())?;
        }
        Ok(())
    }
}

impl Chain {
    /// Human-readable block with the quality, slot indices, the compact
    /// rendering and the per-pennant nearest same-colour distance.
    pub fn describe(&self) -> String {
        let indices: String = (0..self.len()).map(|i| format!(" {}", i)).collect();
        let distances: String = self
            .pennants()
            .iter()
            .map(|p| format!(" {}", p.min_distance()))
            .collect();

        format!(
            "## CHAIN INFOS ##\n\
             Distance:  {}\n\
             Frequency: {}\n\
             Chain:     {}\n\
             \x20          {}\n\
             \x20          {}\n",
            self.minimal_distance(),
            self.frequency(),
            indices,
            self,
            distances
        )
    }

    pub fn report(&self) -> ChainReport {
        ChainReport {
            quality: self.quality(),
            rendering: self.to_string(),
            colors: self.colors().cloned().collect(),
            distances: self.pennants().iter().map(|p| p.min_distance()).collect(),
        }
    }
}

/// Serializable snapshot of a chain for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ChainReport {
    #[serde(flatten)]
    pub quality: Quality,
    pub rendering: String,
    pub colors: Vec<Color>,
    pub distances: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_compact() {
        let c = Chain::from_colors(["red", "blue", "red"]).unwrap();
        assert_eq!(c.to_string(), "-r-b-r-");
        assert_eq!(Chain::new(4).to_string(), "-");
    }

    #[test]
    fn test_describe_layout() {
        let c = Chain::from_colors(["red", "blue", "red"]).unwrap();
        let text = c.describe();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "## CHAIN INFOS ##");
        assert_eq!(lines[1], "Distance:  1");
        assert_eq!(lines[2], "Frequency: 1");
        assert_eq!(lines[3], "Chain:      0 1 2");
        assert_eq!(lines[4], "           -r-b-r-");
        assert_eq!(lines[5], "            1 2 1");
    }

    #[test]
    fn test_report_serializes() {
        let c = Chain::from_colors(["red", "blue"]).unwrap();
        let json = serde_json::to_value(c.report()).unwrap();
        assert_eq!(json["minimal_distance"], 1);
        assert_eq!(json["frequency"], 2);
        assert_eq!(json["rendering"], "-r-b-");
        assert_eq!(json["colors"][1], "blue");
    }
}
