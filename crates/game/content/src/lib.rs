//! Static content for a run: levels, rewards, and the shop.
//!
//! Everything here is data. The runtime decides when levels are played and
//! rewards are granted; `game-core` resolves the battles.
//!
//! With the `loaders` feature the level catalog can be read from RON and the
//! game configuration from TOML; otherwise the built-in content is used.

pub mod levels;
pub mod rewards;
pub mod shop;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use levels::{CatalogError, LevelCatalog, LevelKind, LevelSpec};
pub use rewards::{COMPLETION_GOLD, EQUIPMENT_REWARDS, POTION_REWARDS, TREASURE_CHEST, draw};
pub use shop::ShopItem;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LevelFile, LevelLoader};
