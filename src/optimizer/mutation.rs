use crate::chain::{Chain, Color};
use crate::error::PennantResult;
use crate::pile::Pile;
use fastrand::Rng;

pub fn expand_pile(pile: &Pile) -> Vec<Color> {
    let mut pennants = Vec::with_capacity(pile.total());
    for (color, count) in pile.iter() {
        pennants.extend(std::iter::repeat(color.clone()).take(count));
    }
    pennants
}

pub fn generate_random_chain(pile: &Pile, rng: &mut Rng) -> PennantResult<Chain> {
    let mut pennants = expand_pile(pile);
    rng.shuffle(&mut pennants);

    let mut chain = Chain::new(pile.total());
    for color in pennants {
        chain.push(color)?;
    }
    Ok(chain)
}
