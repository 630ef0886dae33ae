//! `pm-output` — frame export for external renderers.
//!
//! The simulation keeps nothing between runs; this crate only streams what a
//! run produces so another tool can draw or analyse it.
//!
//! | Writer      | Files created                                |
//! |-------------|----------------------------------------------|
//! | [`CsvWriter`] | `agent_frames.csv`, `tick_summaries.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pm_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pm_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &sim);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentFrameRow, TickSummaryRow};
pub use writer::OutputWriter;
