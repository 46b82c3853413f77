//! Stacked potion inventory.

use std::collections::BTreeMap;

use super::PotionKind;
use crate::error::SelectionError;

/// One line of the inventory listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionStack {
    pub kind: PotionKind,
    pub quantity: u32,
}

/// Potions owned by the player, keyed by kind.
///
/// Stacks that reach zero are removed, so [`PotionInventory::listing`] only
/// ever shows usable potions, in [`PotionKind`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionInventory {
    stacks: BTreeMap<PotionKind, u32>,
}

impl PotionInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PotionKind, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let stack = self.stacks.entry(kind).or_insert(0);
        *stack = stack.saturating_add(quantity);
    }

    /// Removes one potion of `kind`. Returns the quantity left.
    pub fn consume(&mut self, kind: PotionKind) -> Result<u32, SelectionError> {
        let Some(stack) = self.stacks.get_mut(&kind) else {
            return Err(SelectionError::PotionUnavailable);
        };
        *stack -= 1;
        let left = *stack;
        if left == 0 {
            self.stacks.remove(&kind);
        }
        Ok(left)
    }

    pub fn quantity(&self, kind: PotionKind) -> u32 {
        self.stacks.get(&kind).copied().unwrap_or(0)
    }

    pub fn contains(&self, kind: PotionKind) -> bool {
        self.quantity(kind) > 0
    }

    /// Ordered listing used for index-based selection.
    pub fn listing(&self) -> Vec<PotionStack> {
        self.stacks
            .iter()
            .map(|(&kind, &quantity)| PotionStack { kind, quantity })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Total number of potions across all stacks.
    pub fn total(&self) -> u32 {
        self.stacks.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_removes_empty_stacks() {
        let mut potions = PotionInventory::new();
        potions.add(PotionKind::Life, 2);

        assert_eq!(potions.consume(PotionKind::Life), Ok(1));
        assert_eq!(potions.consume(PotionKind::Life), Ok(0));
        assert!(potions.is_empty());
        assert_eq!(
            potions.consume(PotionKind::Life),
            Err(SelectionError::PotionUnavailable)
        );
    }

    #[test]
    fn listing_follows_kind_order() {
        let mut potions = PotionInventory::new();
        potions.add(PotionKind::Mystery, 1);
        potions.add(PotionKind::Strength, 2);
        potions.add(PotionKind::Life, 0);

        let kinds: Vec<_> = potions.listing().iter().map(|stack| stack.kind).collect();
        assert_eq!(kinds, vec![PotionKind::Strength, PotionKind::Mystery]);
        assert_eq!(potions.total(), 3);
        assert!(!potions.contains(PotionKind::Life));
    }
}
