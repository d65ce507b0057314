pub mod chart;
pub mod colors;
pub mod config;
pub mod filter;
pub mod gesture;
pub mod markup;
pub mod message;
pub mod party;
pub mod settings;
pub mod stats;

pub use chart::{ChartError, ChartSegment, SegmentInput, SemicircleChart, seat_charts_html};
pub use message::{ToggleMessage, ToggleResponse};
pub use party::{PartyRow, PartySeatRecord, SeatCount, data_records, is_summary_name};
pub use settings::{SettingKey, Settings};
pub use stats::SeatStatistics;
