//! Frame schedule, output naming and the driver that renders a full run.

mod driver;
mod naming;
mod schedule;

pub use driver::{Timeline, TimelineSummary};
pub use naming::{pad_width, FrameNaming};
pub use schedule::{FrameSchedule, FrameStep, Pass, ScheduleIter};
