//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pm_core::{PathGeometry, SimClock, Tick};
use pm_sim::{Sim, SimObserver, Snapshot};

use crate::row::{AgentFrameRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every tick and every agent's
/// frame on snapshot ticks.
///
/// Observer hooks cannot fail, so writer errors are kept (the first one
/// only) and handed back by [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    geometry:   PathGeometry,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Observer for `sim`, using its tick length and screen geometry.
    pub fn new(writer: W, sim: &Sim) -> Self {
        Self::with_geometry(writer, sim.clock.clone(), sim.engine.geometry)
    }

    pub fn with_geometry(writer: W, clock: SimClock, geometry: PathGeometry) -> Self {
        Self {
            writer,
            clock,
            geometry,
            last_error: None,
        }
    }

    /// Write the tick-0 population before any tick runs.
    pub fn write_initial(&mut self, snapshot: &Snapshot) {
        self.on_tick_end(snapshot);
        self.on_snapshot(snapshot);
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &Snapshot) {
        let row = TickSummaryRow::new(
            snapshot.tick,
            self.clock.millis_at(snapshot.tick),
            &snapshot.stats(),
        );
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if snapshot.is_empty() {
            return;
        }
        let rows: Vec<AgentFrameRow> = snapshot
            .agents
            .iter()
            .map(|agent| AgentFrameRow::new(snapshot.tick, agent, &self.geometry))
            .collect();
        let result = self.writer.write_frames(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
