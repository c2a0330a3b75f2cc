#![allow(dead_code)]

use pennant::chain::{Chain, Color, Quality};
use pennant::pile::Pile;

/// Quality recomputed from scratch: every pennant contributes the gap to its
/// nearest same-colour pennant on the left, or the capacity sentinel.
pub fn brute_force_quality(chain: &Chain) -> (i64, usize) {
    let colors: Vec<&Color> = chain.colors().collect();
    let sentinel = chain.sentinel();

    let gaps: Vec<usize> = (0..colors.len())
        .map(|i| {
            (0..i)
                .rev()
                .find(|&k| colors[k] == colors[i])
                .map(|k| i - k - 1)
                .unwrap_or(sentinel)
        })
        .collect();

    match gaps.iter().min() {
        Some(&min) => (min as i64, gaps.iter().filter(|&&g| g == min).count()),
        None => (chain.capacity() as i64, 0),
    }
}

/// Nearest same-colour gap on either side, or the sentinel.
pub fn brute_force_distances(chain: &Chain) -> Vec<usize> {
    let colors: Vec<&Color> = chain.colors().collect();
    let sentinel = chain.sentinel();
    (0..colors.len())
        .map(|i| {
            let left = (0..i).rev().find(|&k| colors[k] == colors[i]).map(|k| i - k - 1);
            let right = (i + 1..colors.len())
                .find(|&k| colors[k] == colors[i])
                .map(|k| k - i - 1);
            left.into_iter().chain(right).min().unwrap_or(sentinel)
        })
        .collect()
}

/// Every distinct arrangement of the pile.
pub fn all_arrangements(pile: &Pile) -> Vec<Vec<Color>> {
    fn walk(pile: &Pile, prefix: &mut Vec<Color>, out: &mut Vec<Vec<Color>>) {
        if pile.is_empty() {
            out.push(prefix.clone());
            return;
        }
        let colors: Vec<Color> = pile.colors().cloned().collect();
        for color in colors {
            let mut rest = pile.clone();
            rest.take_one(&color).unwrap();
            prefix.push(color);
            walk(&rest, prefix, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    walk(pile, &mut Vec::new(), &mut out);
    out
}

/// Renderings of all chains tied at the best quality, found by enumeration.
pub fn brute_force_best(pile: &Pile) -> Vec<String> {
    let chains: Vec<Chain> = all_arrangements(pile)
        .into_iter()
        .map(|colors| Chain::from_colors(colors).unwrap())
        .collect();
    let quality = |c: &Chain| {
        let (minimal_distance, frequency) = brute_force_quality(c);
        Quality {
            minimal_distance,
            frequency,
        }
    };
    let best = chains.iter().map(quality).max().unwrap();

    let mut rendered: Vec<String> = chains
        .iter()
        .filter(|c| quality(c) == best)
        .map(|c| c.to_string())
        .collect();
    rendered.sort();
    rendered
}

pub fn chain_of(s: &str) -> Chain {
    Chain::from_colors(s.chars().map(|c| c.to_string())).unwrap()
}
