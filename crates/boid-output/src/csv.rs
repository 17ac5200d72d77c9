//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 9] = ["agent_id", "frame", "group", "x", "y", "z", "fx", "fy", "fz"];
pub const SUMMARY_HEADER: [&str; 5] = ["frame", "dt", "agents", "groups_simulated", "pass_through"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let [x, y, z] = row.position;
            let [fx, fy, fz] = row.forward;
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.frame.to_string(),
                row.group.to_string(),
                x.to_string(),
                y.to_string(),
                z.to_string(),
                fx.to_string(),
                fy.to_string(),
                fz.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.delta_secs.to_string(),
            row.agents.to_string(),
            row.groups_simulated.to_string(),
            row.pass_through.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
