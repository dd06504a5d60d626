//! Widget components for the dashboard display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod gauge;
mod labels;
mod primitives;
mod status;

pub use gauge::{BATTERY_CELLS, RingGauge, SPEED_CELLS, SegmentPalette};
pub use labels::{draw_fw_version, draw_labels};
pub use primitives::{draw_text, fill_rect, fill_region};
pub use status::{draw_warning, pulse_read_indicator};
