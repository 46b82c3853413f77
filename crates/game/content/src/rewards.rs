//! Reward pools drawn from after battles and by events.

use game_core::{EquipmentKind, PotionKind, RandomSource};

/// Potions a won battle can award, one drawn uniformly.
pub const POTION_REWARDS: [PotionKind; PotionKind::COUNT] = PotionKind::all();

/// Equipment awarded by bonus levels and by the lucky-find event.
pub const EQUIPMENT_REWARDS: [EquipmentKind; EquipmentKind::COUNT] = EquipmentKind::all();

/// Contents of the treasure chest event, one of each.
pub const TREASURE_CHEST: [PotionKind; 3] =
    [PotionKind::Strength, PotionKind::Attacker, PotionKind::Life];

/// Gold awarded for clearing the final level.
pub const COMPLETION_GOLD: u32 = 1;

/// Uniform pick from a non-empty pool.
pub fn draw<T: Copy>(pool: &[T], rng: &mut impl RandomSource) -> Option<T> {
    let index = rng.below(pool.len() as u32) as usize;
    pool.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SequenceRng;

    #[test]
    fn draw_indexes_by_roll() {
        let mut rng = SequenceRng::new([2, 7]);
        assert_eq!(draw(&POTION_REWARDS, &mut rng), Some(PotionKind::Life));
        assert_eq!(draw(&EQUIPMENT_REWARDS, &mut rng), Some(EquipmentKind::Shoes));
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut rng = SequenceRng::new([0]);
        assert_eq!(draw::<PotionKind>(&[], &mut rng), None);
    }
}
