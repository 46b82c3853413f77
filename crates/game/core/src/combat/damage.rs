//! Damage mitigation and health arithmetic.
//!
//! All functions are pure and saturate instead of wrapping, so a health value
//! can never leave `[0, max]` through these helpers.

/// Reduce incoming damage by halving it once per effective shield.
///
/// # Formula
///
/// ```text
/// factor = 0.5 ^ halvings
/// dealt  = floor(incoming × factor)
/// ```
///
/// For non-negative integers `floor(x × 0.5^n)` is exactly `x >> n`.
pub fn mitigate(incoming: u32, halvings: u32) -> u32 {
    incoming.checked_shr(halvings).unwrap_or(0)
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to current HP.
///
/// Returns the new HP value, clamped to `max_hp`.
pub fn apply_heal(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(amount).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_shields_quarter_damage() {
        assert_eq!(mitigate(100, 2), 25);
    }

    #[test]
    fn mitigation_floors() {
        assert_eq!(mitigate(25, 1), 12);
        assert_eq!(mitigate(80, 3), 10);
        assert_eq!(mitigate(1, 1), 0);
        assert_eq!(mitigate(50, 0), 50);
        assert_eq!(mitigate(u32::MAX, 40), 0);
    }

    #[test]
    fn damage_clamps_to_zero() {
        assert_eq!(apply_damage(5, 25), 0);
        assert_eq!(apply_damage(30, 25), 5);
    }

    #[test]
    fn heal_clamps_to_max() {
        assert_eq!(apply_heal(80, 50, 100), 100);
        assert_eq!(apply_heal(80, 10, 100), 90);
        assert_eq!(apply_heal(u32::MAX - 1, 10, u32::MAX), u32::MAX);
    }
}
