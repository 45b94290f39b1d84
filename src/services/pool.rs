use crate::models::{Artist, ArtistPool};

/// Merges seed and resolved artists into a pool keyed by catalog id
///
/// Seeds go in first. Resolved records follow and replace any entry with the
/// same id, so the pool holds one record per id and every seed id survives.
pub fn assemble<I>(seeds: Vec<Artist>, resolved: I) -> ArtistPool
where
    I: IntoIterator<Item = Option<Artist>>,
{
    let mut pool = ArtistPool::new();

    for seed in seeds {
        pool.insert(seed);
    }

    for artist in resolved.into_iter().flatten() {
        pool.insert(artist);
    }

    pool
}
