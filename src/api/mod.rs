pub mod cache;
pub mod frame;
pub mod json_contract;
pub mod options;
pub mod pipeline;

pub use cache::LayoutCache;
pub use frame::{TimelineFrame, TrackLayout};
pub use json_contract::{TIMELINE_FRAME_JSON_SCHEMA_V1, TimelineFrameJsonContractV1};
pub use options::LayoutOptions;
pub use pipeline::compute_layout;
