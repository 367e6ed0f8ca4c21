//! Damage mitigation and application.

/// Damage left after defense absorbs its share.
///
/// # Formula
///
/// ```text
/// final_damage = max(0, incoming - defense)
/// ```
///
/// Negative defense does not amplify a hit beyond its raw value.
pub fn mitigate(incoming: i32, defense: i32) -> i32 {
    incoming.saturating_sub(defense.max(0)).max(0)
}

/// Apply damage to current health.
///
/// Negative damage is treated as no damage; the result is clamped to 0.
pub fn apply_damage(current_health: i32, damage: i32) -> i32 {
    current_health.saturating_sub(damage.max(0)).max(0)
}
