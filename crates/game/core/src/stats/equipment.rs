//! Equipment carried by the player.
//!
//! Equipment is a flat, ordered list of kinds with a hard capacity. Each piece
//! contributes a fixed bonus per copy owned; duplicates stack additively.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{EquipError, ParseKindError};

/// The four equipment kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EquipmentKind {
    /// Halves incoming damage per copy.
    Shield,
    /// Adds half of base attack per copy.
    Sword,
    /// Adds 100 max health per copy.
    Armor,
    /// Grants one extra action per battle per copy.
    Shoes,
}

impl EquipmentKind {
    /// Total number of equipment kinds.
    pub const COUNT: usize = 4;

    /// Returns all equipment kinds in reward-table order.
    pub const fn all() -> [EquipmentKind; Self::COUNT] {
        [
            EquipmentKind::Shield,
            EquipmentKind::Sword,
            EquipmentKind::Armor,
            EquipmentKind::Shoes,
        ]
    }

    /// Parse a kind by name (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, ParseKindError> {
        name.trim()
            .parse()
            .map_err(|_| ParseKindError::new("equipment", name))
    }
}

/// Ordered equipment list with a capacity of [`GameConfig::MAX_EQUIPMENT`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    items: ArrayVec<EquipmentKind, { GameConfig::MAX_EQUIPMENT }>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a piece of equipment.
    ///
    /// Fails without mutation once the loadout holds
    /// [`GameConfig::MAX_EQUIPMENT`] pieces.
    pub fn add(&mut self, kind: EquipmentKind) -> Result<(), EquipError> {
        self.items
            .try_push(kind)
            .map_err(|_| EquipError::InventoryFull {
                capacity: GameConfig::MAX_EQUIPMENT,
            })
    }

    /// Number of copies of `kind` owned.
    pub fn count(&self, kind: EquipmentKind) -> u32 {
        self.items.iter().filter(|&&owned| owned == kind).count() as u32
    }

    pub fn contains(&self, kind: EquipmentKind) -> bool {
        self.items.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn iter(&self) -> impl Iterator<Item = EquipmentKind> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[EquipmentKind] {
        &self.items
    }
}

/// The equipment kind disabled for a single battle, if any.
///
/// Suppression is a battle-setup parameter. It lives only as long as the
/// battle that was configured with it; nothing outside a battle stores one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suppression(Option<EquipmentKind>);

impl Suppression {
    /// No equipment disabled.
    pub const NONE: Self = Self(None);

    pub const fn of(kind: EquipmentKind) -> Self {
        Self(Some(kind))
    }

    pub const fn from_option(kind: Option<EquipmentKind>) -> Self {
        Self(kind)
    }

    pub const fn kind(self) -> Option<EquipmentKind> {
        self.0
    }

    pub fn suppresses(self, kind: EquipmentKind) -> bool {
        self.0 == Some(kind)
    }

    /// Number of copies of `kind` that actually take effect.
    pub fn effective_count(self, loadout: &Loadout, kind: EquipmentKind) -> u32 {
        if self.suppresses(kind) {
            0
        } else {
            loadout.count(kind)
        }
    }
}

impl From<Option<EquipmentKind>> for Suppression {
    fn from(kind: Option<EquipmentKind>) -> Self {
        Self(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadout_rejects_fourth_piece_without_mutation() {
        let mut loadout = Loadout::new();
        loadout.add(EquipmentKind::Shield).unwrap();
        loadout.add(EquipmentKind::Shield).unwrap();
        loadout.add(EquipmentKind::Sword).unwrap();

        let err = loadout.add(EquipmentKind::Armor).unwrap_err();
        assert_eq!(err, EquipError::InventoryFull { capacity: 3 });
        assert_eq!(
            loadout.as_slice(),
            &[
                EquipmentKind::Shield,
                EquipmentKind::Shield,
                EquipmentKind::Sword
            ]
        );
        assert_eq!(loadout.count(EquipmentKind::Shield), 2);
        assert!(!loadout.contains(EquipmentKind::Armor));
    }

    #[test]
    fn suppression_zeroes_only_its_kind() {
        let mut loadout = Loadout::new();
        loadout.add(EquipmentKind::Shoes).unwrap();
        loadout.add(EquipmentKind::Shoes).unwrap();
        loadout.add(EquipmentKind::Armor).unwrap();

        let shoes_off = Suppression::of(EquipmentKind::Shoes);
        assert_eq!(shoes_off.effective_count(&loadout, EquipmentKind::Shoes), 0);
        assert_eq!(shoes_off.effective_count(&loadout, EquipmentKind::Armor), 1);
        assert_eq!(
            Suppression::NONE.effective_count(&loadout, EquipmentKind::Shoes),
            2
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(EquipmentKind::parse("shoes"), Ok(EquipmentKind::Shoes));
        assert_eq!(EquipmentKind::parse(" Armor "), Ok(EquipmentKind::Armor));
        assert!(EquipmentKind::parse("Helmet").is_err());
        assert_eq!(EquipmentKind::Sword.to_string(), "Sword");
    }
}
