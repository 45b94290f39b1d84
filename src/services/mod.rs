pub mod artist_pool;
pub mod expansion;
pub mod fan_out;
pub mod pool;
pub mod providers;
pub mod resolution;
pub mod shuffle;

pub use artist_pool::ArtistPoolService;
