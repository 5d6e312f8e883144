//! Bounded throughput of a crafter fed by parallel input channels.
//!
//! A crafter produces at most one craft per clock impulse, and each craft
//! needs `item_count` items delivered through `channel_count` channels that
//! each move one item every `channel_period` game ticks. The output rate is
//! the smaller of those two ceilings.

use smallvec::SmallVec;

use super::units::BASE_SCALE;

/// Rate sequence over the channel sweep; the sweep never exceeds six faces.
pub type RateSeries = SmallVec<[f64; 6]>;

/// Craft rate allowed by the input channels, crafts per game tick.
#[must_use]
pub fn input_bound(channel_period: f64, item_count: u32, channel_count: u32) -> f64 {
    f64::from(channel_count) / (channel_period * f64::from(item_count))
}

/// Craft rate allowed by the clock, crafts per game tick.
#[must_use]
pub fn clock_bound(clock_period: f64) -> f64 {
    1.0 / clock_period
}

/// Output rate in items per second.
#[must_use]
pub fn output_rate(
    channel_period: f64,
    clock_period: f64,
    item_count: u32,
    channel_count: u32,
) -> f64 {
    input_bound(channel_period, item_count, channel_count).min(clock_bound(clock_period))
        * BASE_SCALE
}

/// Output rates for each entry of `channel_counts`, same order and length.
#[must_use]
pub fn output_rates(
    channel_period: f64,
    clock_period: f64,
    item_count: u32,
    channel_counts: &[u32],
) -> RateSeries {
    channel_counts
        .iter()
        .map(|&count| output_rate(channel_period, clock_period, item_count, count))
        .collect()
}

/// Items per second each channel has to deliver to sustain `output_rate`.
#[must_use]
pub fn per_channel_input_rate(item_count: u32, output_rate: f64, channel_count: u32) -> f64 {
    f64::from(item_count) * output_rate / f64::from(channel_count)
}

/// Fastest a single channel can ever deliver, items per second.
#[must_use]
pub fn max_rate_per_channel(channel_period: f64) -> f64 {
    BASE_SCALE / channel_period
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn hopper_on_redstone_tick_clock_hits_both_bounds_at_four_channels() {
        assert_relative_eq!(input_bound(8.0, 1, 4), 0.5);
        assert_relative_eq!(clock_bound(2.0), 0.5);
        assert_relative_eq!(output_rate(8.0, 2.0, 1, 4), 10.0);
    }

    #[test]
    fn dropper_on_game_tick_clock_is_input_bound() {
        let out = output_rate(4.0, 1.0, 2, 6);
        assert_relative_eq!(out, 15.0);
        assert_relative_eq!(per_channel_input_rate(2, out, 6), 5.0);
    }

    #[test]
    fn output_rates_keeps_sweep_order() {
        let rates = output_rates(8.0, 2.0, 1, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(rates.len(), 6);
        assert_relative_eq!(rates[0], 2.5);
        assert_relative_eq!(rates[1], 5.0);
        assert_relative_eq!(rates[2], 7.5);
        assert_relative_eq!(rates[3], 10.0);
        assert_relative_eq!(rates[4], 10.0);
        assert_relative_eq!(rates[5], 10.0);
    }

    #[test]
    fn reference_line_is_base_scale_over_period() {
        assert_relative_eq!(max_rate_per_channel(8.0), 2.5);
        assert_relative_eq!(max_rate_per_channel(1.0), 20.0);
    }
}
