//! Seed words a game can start from.

use shiritori_core::rng::DeterministicRng;

/// Fixed catalog of seed words. None of them ends in `ん`.
pub const SEED_WORDS: [&str; 30] = [
    "しりとり",
    "りんご",
    "ごま",
    "まりも",
    "もも",
    "もうし",
    "しんじ",
    "じんじ",
    "じゃがいも",
    "もうふ",
    "いす",
    "すいか",
    "あめ",
    "あさり",
    "いわ",
    "おみやげ",
    "うま",
    "うちわ",
    "わかめ",
    "わに",
    "にんにく",
    "くつ",
    "きのこ",
    "すし",
    "ねぎ",
    "はさみ",
    "のこぎり",
    "まぐろ",
    "ものさし",
    "めだか",
];

/// Picks a seed word uniformly at random.
///
/// An index outside the catalog (from a misbehaving RNG) is clamped to the
/// last entry.
#[allow(clippy::cast_possible_truncation)]
pub fn pick_random(rng: &mut dyn DeterministicRng) -> &'static str {
    let last = SEED_WORDS.len() - 1;
    let index = rng.next_u32_range(0, last as u32) as usize;
    SEED_WORDS[index.min(last)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiritori_core::rng::SystemRng;
    use shiritori_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_pick_random_uses_rng_index() {
        let mut rng = SequenceRng::new(vec![0, 1, 29]);
        assert_eq!(pick_random(&mut rng), "しりとり");
        assert_eq!(pick_random(&mut rng), "りんご");
        assert_eq!(pick_random(&mut rng), "めだか");
    }

    #[test]
    fn test_pick_random_clamps_out_of_range_index() {
        let mut rng = SequenceRng::new(vec![500]);
        assert_eq!(pick_random(&mut rng), "めだか");
    }

    #[test]
    fn test_pick_random_with_mock_rng_returns_first_entry() {
        assert_eq!(pick_random(&mut MockRng), "しりとり");
    }

    #[test]
    fn test_pick_random_always_returns_catalog_entry() {
        let mut rng = SystemRng::seeded(2024);
        for _ in 0..500 {
            let word = pick_random(&mut rng);
            assert!(SEED_WORDS.contains(&word));
        }
    }

    #[test]
    fn test_seed_words_never_end_in_n() {
        for word in SEED_WORDS {
            assert!(!word.ends_with('ん'), "{word} ends in ん");
        }
    }
}
