//! Time units of the simulation and the constants derived from them.
//!
//! Everything in this crate is expressed in game ticks (GT). A redstone tick
//! (RT) lasts two game ticks, and the server runs twenty game ticks per
//! real-time second.

/// Game ticks per redstone tick.
pub const GAME_TICKS_PER_REDSTONE_TICK: f64 = 2.0;

/// Game ticks per second; converts "items per game tick" into "items per second".
pub const BASE_SCALE: f64 = 20.0;

/// Faces of the crafter that could physically receive an input channel.
pub const PHYSICAL_MAX_CHANNELS: u32 = 6;

/// Faces usable in practice (output face and the powering face are taken).
pub const PRACTICAL_MAX_CHANNELS: u32 = 4;

/// Largest number of items a single craft can consume (3x3 grid).
pub const MAX_ITEMS_PER_CRAFT: u32 = 9;

/// Converts a duration in redstone ticks into game ticks.
#[must_use]
pub const fn redstone_ticks(value: f64) -> f64 {
    GAME_TICKS_PER_REDSTONE_TICK * value
}

/// Identity conversion, kept so call sites state their unit.
#[must_use]
pub const fn game_ticks(value: f64) -> f64 {
    value
}

/// Hopper transfer cooldown, GT/item.
pub const HOPPER_TRANSFER_PERIOD: f64 = redstone_ticks(4.0);

/// Dropper fed by a 1 RT clock pair, GT/item.
pub const DROPPER_TRANSFER_PERIOD: f64 = redstone_ticks(2.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redstone_tick_is_two_game_ticks() {
        assert_eq!(redstone_ticks(1.0), 2.0);
        assert_eq!(redstone_ticks(0.5), 1.0);
        assert_eq!(game_ticks(0.5), 0.5);
    }

    #[test]
    fn channel_constants_match_block_timings() {
        assert_eq!(HOPPER_TRANSFER_PERIOD, 8.0);
        assert_eq!(DROPPER_TRANSFER_PERIOD, 4.0);
        assert!(PRACTICAL_MAX_CHANNELS < PHYSICAL_MAX_CHANNELS);
    }
}
