use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::iter;

use crate::error::{CrafterError, CrafterResult};

use super::rate_model::{max_rate_per_channel, output_rate, per_channel_input_rate};
use super::units::{MAX_ITEMS_PER_CRAFT, PHYSICAL_MAX_CHANNELS};

/// An input channel kind and the period at which it moves one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelType {
    pub name: String,
    /// Game ticks per item.
    pub transfer_period: f64,
}

impl ChannelType {
    pub fn new(name: impl Into<String>, transfer_period: f64) -> CrafterResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CrafterError::InvalidData(
                "channel name must not be empty".to_owned(),
            ));
        }
        ensure_positive_period("channel transfer period", transfer_period)?;
        Ok(Self {
            name,
            transfer_period,
        })
    }

    /// Pairs parallel period/name lists into channel types.
    pub fn from_parts<S: AsRef<str>>(periods: &[f64], names: &[S]) -> CrafterResult<Vec<Self>> {
        if periods.len() != names.len() {
            return Err(CrafterError::ShapeMismatch {
                what: "channel names",
                expected: periods.len(),
                actual: names.len(),
            });
        }
        periods
            .iter()
            .zip(names)
            .map(|(&period, name)| Self::new(name.as_ref(), period))
            .collect()
    }
}

/// Clock driving the crafter, expressed as game ticks per impulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockSetting {
    pub period: f64,
}

impl ClockSetting {
    pub fn new(period: f64) -> CrafterResult<Self> {
        ensure_positive_period("clock period", period)?;
        Ok(Self { period })
    }

    pub fn from_periods(periods: &[f64]) -> CrafterResult<Vec<Self>> {
        periods.iter().map(|&period| Self::new(period)).collect()
    }
}

fn ensure_positive_period(what: &str, period: f64) -> CrafterResult<()> {
    if !period.is_finite() || period <= 0.0 {
        return Err(CrafterError::InvalidData(format!(
            "{what} must be finite and > 0, got {period}"
        )));
    }
    Ok(())
}

/// Independent variables of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SweepPoint {
    pub channel_count: u32,
    pub item_count: u32,
}

impl SweepPoint {
    /// Channel counts swept for every panel, `1..=6`.
    pub fn channel_counts() -> impl Iterator<Item = u32> + Clone {
        1..=PHYSICAL_MAX_CHANNELS
    }

    /// Item counts swept for every panel, `1..=9`.
    pub fn item_counts() -> impl Iterator<Item = u32> + Clone {
        1..=MAX_ITEMS_PER_CRAFT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    pub channel_count: u32,
    /// Items per second each channel delivers.
    pub input_rate_per_channel: f64,
    /// Items per second the crafter consumes.
    pub output_rate: f64,
}

impl RateSample {
    #[must_use]
    pub fn evaluate(channel: &ChannelType, clock: ClockSetting, point: SweepPoint) -> Self {
        let output = output_rate(
            channel.transfer_period,
            clock.period,
            point.item_count,
            point.channel_count,
        );
        Self {
            channel_count: point.channel_count,
            input_rate_per_channel: per_channel_input_rate(
                point.item_count,
                output,
                point.channel_count,
            ),
            output_rate: output,
        }
    }
}

/// Samples of one item count across the channel sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftCurve {
    pub item_count: u32,
    pub samples: SmallVec<[RateSample; 6]>,
}

impl CraftCurve {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} items / craft", self.item_count)
    }
}

/// Everything one panel plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSweep {
    pub clock: ClockSetting,
    pub channel: ChannelType,
    pub max_rate_per_channel: f64,
    pub curves: Vec<CraftCurve>,
}

impl PanelSweep {
    #[must_use]
    pub fn compute(clock: ClockSetting, channel: &ChannelType) -> Self {
        let curves = SweepPoint::item_counts()
            .map(|item_count| CraftCurve {
                item_count,
                samples: SweepPoint::channel_counts()
                    .map(|channel_count| {
                        RateSample::evaluate(
                            channel,
                            clock,
                            SweepPoint {
                                channel_count,
                                item_count,
                            },
                        )
                    })
                    .collect(),
            })
            .collect();

        Self {
            clock,
            channel: channel.clone(),
            max_rate_per_channel: max_rate_per_channel(channel.transfer_period),
            curves,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Using {} with a clock of {} GT/impulse",
            self.channel.name, self.clock.period
        )
    }

    /// Largest value drawn on the primary axis, reference line included.
    #[must_use]
    pub fn input_axis_peak(&self) -> f64 {
        self.samples()
            .map(|sample| OrderedFloat(sample.input_rate_per_channel))
            .chain(iter::once(OrderedFloat(self.max_rate_per_channel)))
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn output_axis_peak(&self) -> f64 {
        self.samples()
            .map(|sample| OrderedFloat(sample.output_rate))
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    fn samples(&self) -> impl Iterator<Item = &RateSample> {
        self.curves.iter().flat_map(|curve| curve.samples.iter())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::units::{DROPPER_TRANSFER_PERIOD, HOPPER_TRANSFER_PERIOD};

    #[test]
    fn from_parts_rejects_mismatched_lengths() {
        let err = ChannelType::from_parts(&[8.0, 4.0], &["Hopper"]).expect_err("mismatch");
        assert!(matches!(
            err,
            CrafterError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn non_positive_periods_are_rejected() {
        assert!(ChannelType::new("Hopper", 0.0).is_err());
        assert!(ChannelType::new("", 8.0).is_err());
        assert!(ClockSetting::new(-1.0).is_err());
        assert!(ClockSetting::new(f64::NAN).is_err());
    }

    #[test]
    fn sweep_covers_six_channels_by_nine_items() {
        let channels: Vec<u32> = SweepPoint::channel_counts().collect();
        let items: Vec<u32> = SweepPoint::item_counts().collect();
        assert_eq!(channels, (1..=6).collect::<Vec<_>>());
        assert_eq!(items, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn panel_sweep_keeps_infeasible_channel_counts() {
        let hopper = ChannelType::new("Hopper", HOPPER_TRANSFER_PERIOD).expect("channel");
        let clock = ClockSetting::new(2.0).expect("clock");
        let panel = PanelSweep::compute(clock, &hopper);

        assert_eq!(panel.curves.len(), 9);
        for curve in &panel.curves {
            let counts: Vec<u32> = curve.samples.iter().map(|s| s.channel_count).collect();
            assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
        }
        assert_relative_eq!(panel.curves[0].samples[3].output_rate, 10.0);
        assert_relative_eq!(panel.max_rate_per_channel, 2.5);
    }

    #[test]
    fn panel_title_prints_integral_clocks_without_fraction() {
        let dropper = ChannelType::new("Dropper", DROPPER_TRANSFER_PERIOD).expect("channel");
        let whole = PanelSweep::compute(ClockSetting::new(2.0).expect("clock"), &dropper);
        let half = PanelSweep::compute(ClockSetting::new(0.5).expect("clock"), &dropper);
        assert_eq!(whole.title(), "Using Dropper with a clock of 2 GT/impulse");
        assert_eq!(half.title(), "Using Dropper with a clock of 0.5 GT/impulse");
    }

    #[test]
    fn axis_peaks_include_reference_line() {
        let one_gt = ChannelType::new("1GT", 1.0).expect("channel");
        let panel = PanelSweep::compute(ClockSetting::new(2.0).expect("clock"), &one_gt);
        // clock bound caps output at 10/s, so the reference line (20/s) dominates the input axis
        assert_relative_eq!(panel.input_axis_peak(), 20.0);
        assert_relative_eq!(panel.output_axis_peak(), 10.0);
        assert_eq!(panel.curves[2].label(), "3 items / craft");
    }
}
