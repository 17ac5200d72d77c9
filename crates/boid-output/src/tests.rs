//! Tests for boid-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{AgentSnapshotRow, FrameSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, frame: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            frame,
            group:    1,
            position: [agent_id as f32, 0.5, -2.0],
            forward:  [0.0, 0.0, 1.0],
        }
    }

    fn summary_row(frame: u64) -> FrameSummaryRow {
        FrameSummaryRow {
            frame,
            delta_secs:       0.25,
            agents:           10,
            groups_simulated: 2,
            pass_through:     frame,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("agent_snapshots.csv")), SNAPSHOT_HEADER);
        assert_eq!(headers(dir.path().join("frame_summaries.csv")), SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");    // agent_id
        assert_eq!(&rows[0][1], "5");    // frame
        assert_eq!(&rows[0][2], "1");    // group
        assert_eq!(&rows[2][3], "2");    // x
        assert_eq!(&rows[2][4], "0.5");  // y
        assert_eq!(&rows[2][8], "1");    // fz
    }

    #[test]
    fn csv_frame_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");     // frame
        assert_eq!(&rows[0][1], "0.25");  // dt
        assert_eq!(&rows[0][2], "10");    // agents
        assert_eq!(&rows[0][3], "2");     // groups_simulated
        assert_eq!(&rows[0][4], "3");     // pass_through
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use boid_agent::{AgentSpec, AgentStoreBuilder};
    use boid_core::{GroupId, Quat, SimConfig, Transform, Vec3};
    use boid_sim::{SimBuilder, SimObserver};
    use boid_steer::FlockSteering;
    use tempfile::TempDir;

    use crate::{
        AgentSnapshotRow, CsvWriter, FrameSummaryRow, OutputError, OutputResult, OutputWriter,
        SimOutputObserver,
    };

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config(total_frames: u64, interval: u64) -> SimConfig {
        SimConfig {
            seed:                   1,
            num_threads:            Some(1),
            total_frames,
            fixed_delta_secs:       0.1,
            output_interval_frames: interval,
        }
    }

    /// Fails every write with a distinct message.
    #[derive(Default)]
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
        fn write_frame_summary(&mut self, _row: &FrameSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let store = AgentStoreBuilder::new(3)
            .agents((0..3).map(|i| {
                let t = Transform::from_position_rotation(Vec3::new(i as f32, 0.0, 0.0), Quat::IDENTITY);
                AgentSpec::new(GroupId(1), t)
            }))
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(config(6, 2), store, FlockSteering).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at frames 0, 2, 4 (3 frames × 3 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][4], "3", "frame 0 passes every agent through");
        assert_eq!(&rows[1][4], "0");
    }

    #[test]
    fn snapshot_row_captures_forward() {
        let t = Transform::from_position_rotation(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let store = AgentStoreBuilder::new(1)
            .agent(AgentSpec::new(GroupId(4), t))
            .build()
            .unwrap();
        let row = AgentSnapshotRow::capture(&store, boid_core::AgentId(0), boid_core::Frame(9));
        assert_eq!(row.frame, 9);
        assert_eq!(row.group, 4);
        assert_eq!(row.position, [1.0, 2.0, 3.0]);
        assert!((row.forward[0] - 1.0).abs() < 1e-6);
        assert!(row.forward[2].abs() < 1e-6);
    }

    #[test]
    fn first_error_is_kept() {
        let store = AgentStoreBuilder::new(1)
            .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(config(3, 1), store, FlockSteering).build().unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("writer failed");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none(), "error is taken once");
        assert!(obs.into_writer().calls >= 6);
    }

    #[test]
    fn empty_store_writes_no_snapshots() {
        let store = AgentStoreBuilder::new(0).build().unwrap();
        let mut sim = SimBuilder::new(config(2, 1), store, FlockSteering).build().unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_frames(&[0.1, 0.1], &mut obs).unwrap();
        obs.finish().unwrap();
        obs.on_sim_end(boid_core::Frame(2));
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }
}
