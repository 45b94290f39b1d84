use rand::Rng;

/// Fisher-Yates shuffle in place
///
/// Walks from the last index down to 1, swapping each element with one drawn
/// uniformly from `0..=i`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec!["only"]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<u32> = (0..50).collect();

        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_is_unbiased() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 60_000;
        let mut counts: HashMap<Vec<char>, usize> = HashMap::new();

        for _ in 0..trials {
            let mut items = vec!['a', 'b', 'c'];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials as f64 / 6.0;
        for (order, count) in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "ordering {:?} seen {} times, expected about {}",
                order,
                count,
                expected
            );
        }
    }
}
