//! Core booster-pack generation logic. Keep this crate free of IO and
//! platform concerns: the catalog is an explicit read-only parameter and the
//! random source is supplied by the caller.

pub mod catalog;
pub mod fallback;
pub mod family;
pub mod pack;
pub mod pool;
pub mod rarity;
pub mod reroll;
pub mod rng;

pub use catalog::*;
pub use fallback::*;
pub use family::*;
pub use pack::*;
pub use pool::*;
pub use rarity::*;
pub use reroll::*;
pub use rng::*;
