//! Shop catalog.

use game_core::{ParseKindError, PotionEffect};

/// Items for sale between levels. Effects are permanent.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ShopItem {
    Hamburger,
    Coke,
}

impl ShopItem {
    pub const COUNT: usize = 2;

    pub const fn all() -> [ShopItem; Self::COUNT] {
        [ShopItem::Hamburger, ShopItem::Coke]
    }

    /// Price in gold.
    pub const fn price(self) -> u32 {
        match self {
            Self::Hamburger | Self::Coke => 1,
        }
    }

    /// Same shape as a potion: base max health first, then heal, then attack.
    pub const fn effect(self) -> PotionEffect {
        match self {
            Self::Hamburger => PotionEffect {
                max_health: 20,
                heal: 20,
                attack: 0,
            },
            Self::Coke => PotionEffect {
                max_health: 0,
                heal: 0,
                attack: 10,
            },
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Hamburger => "Permanently increase Max HP by 20",
            Self::Coke => "Permanently increase Attack by 10",
        }
    }

    pub fn parse(name: &str) -> Result<Self, ParseKindError> {
        name.trim()
            .parse()
            .map_err(|_| ParseKindError::new("shop item", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_prices_and_effects() {
        for item in ShopItem::all() {
            assert_eq!(item.price(), 1);
        }
        assert_eq!(ShopItem::Hamburger.effect().max_health, 20);
        assert_eq!(ShopItem::Coke.effect().attack, 10);
        assert_eq!(ShopItem::parse("coke"), Ok(ShopItem::Coke));
    }
}
