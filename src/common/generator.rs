use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::queue::piece::PieceKind;

pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

// Seeded once per session; `None` falls back to OS entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn same_seed_same_kinds() {
        let mut first = session_rng(Some(7));
        let mut second = session_rng(Some(7));

        let a: Vec<PieceKind> = (0..32).map(|_| random_kind(&mut first)).collect();
        let b: Vec<PieceKind> = (0..32).map(|_| random_kind(&mut second)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn every_kind_is_drawn() {
        let mut rng = session_rng(Some(42));

        let drawn: HashSet<PieceKind> = (0..1000).map(|_| random_kind(&mut rng)).collect();

        assert_eq!(drawn.len(), PieceKind::ALL.len());
    }
}
