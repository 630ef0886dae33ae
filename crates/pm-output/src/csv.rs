//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_frames.csv`
//! - `tick_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentFrameRow, OutputResult, TickSummaryRow};

pub const FRAMES_FILE: &str = "agent_frames.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes frames and summaries to two CSV files.
pub struct CsvWriter {
    frames:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut frames = Writer::from_path(dir.join(FRAMES_FILE))?;
        frames.write_record(["tick", "agent_id", "kind", "role", "gender", "progress", "lane", "x", "y"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick", "elapsed_ms", "agents", "singles", "couples", "families", "parents", "children",
        ])?;

        Ok(Self {
            frames,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frames(&mut self, rows: &[AgentFrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.kind.label().to_owned(),
                row.role.map(|r| r.to_string()).unwrap_or_default(),
                row.gender.map(|g| g.code().to_owned()).unwrap_or_default(),
                format!("{:.4}", row.progress),
                format!("{:.4}", row.lane),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.agents.to_string(),
            row.singles.to_string(),
            row.couples.to_string(),
            row.families.to_string(),
            row.parents.to_string(),
            row.children.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
