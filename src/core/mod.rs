pub mod bars;
pub mod normalize;
pub mod range;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bars::{LayoutPolicy, layout_track};
pub use normalize::{DEFAULT_OPEN_END_HORIZON_DAYS, normalize_interval, parse_timestamp_millis};
pub use range::resolve_range;
pub use scale::{Canvas, TimeScale};
pub use ticks::{TickLabelConfig, TickLabelLocale, TickLabelPolicy, generate_ticks};
pub use types::{BarLayout, Interval, NormalizedInterval, ResolvedRange, Tick, Track};
