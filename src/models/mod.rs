//! Press scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Catalog` | Product rates and raw board widths |
//! | `Press` | One of the two physical presses |
//! | `Job` | Rolls of one product on one raw board |
//! | `MaintenanceWindow` | Upkeep reservation on a press |
//! | `ScheduledJob` | A job with start and end |
//! | `Schedule` | Result of one scheduling pass |

mod catalog;
pub(crate) mod job;
mod maintenance;
mod press;
mod schedule;

pub use catalog::{Catalog, DEFAULT_BOARD_WIDTH, WIDE_PRESS_THRESHOLD};
pub use job::{duration_to_hours, hours_to_duration, offset_saturating, Job, JobRecord};
pub use maintenance::MaintenanceWindow;
pub use press::Press;
pub use schedule::{Schedule, ScheduledJob, Violation, ViolationType};
