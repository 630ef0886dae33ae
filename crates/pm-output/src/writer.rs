//! The `OutputWriter` trait.

use crate::{AgentFrameRow, OutputResult, TickSummaryRow};

/// A sink for exported frames.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] stores the first error a
/// writer returns rather than interrupting the run.
pub trait OutputWriter {
    /// Write every agent's row for one committed tick.
    fn write_frames(&mut self, rows: &[AgentFrameRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
