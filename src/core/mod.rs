pub mod rate_model;
pub mod scale;
pub mod sweep;
pub mod types;
pub mod units;

pub use rate_model::{
    RateSeries, clock_bound, input_bound, max_rate_per_channel, output_rate, output_rates,
    per_channel_input_rate,
};
pub use scale::LinearScale;
pub use sweep::{ChannelType, ClockSetting, CraftCurve, PanelSweep, RateSample, SweepPoint};
pub use types::{DataPoint, PixelRect, Viewport};
