//! Integration tests for mc-output.

#[cfg(test)]
mod series_writer {
    use tempfile::TempDir;

    use crate::csv::SeriesWriter;
    use crate::row::{JumpRow, SirRow, WalkRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn headers_match_row_types() {
        let dir = tmp();

        let walk = dir.path().join("walk.csv");
        SeriesWriter::<WalkRow>::create(&walk).unwrap().finish().unwrap();
        assert_eq!(read_headers(&walk), ["Time", "position_x", "position_y"]);

        let sir = dir.path().join("sir.csv");
        SeriesWriter::<SirRow>::create(&sir).unwrap().finish().unwrap();
        assert_eq!(read_headers(&sir), ["Time", "Susceptible", "Infected", "Recovered"]);

        let jump = dir.path().join("sir_jump.csv");
        SeriesWriter::<JumpRow>::create(&jump).unwrap().finish().unwrap();
        assert_eq!(read_headers(&jump), ["Time (days)", "nS", "nI", "nR"]);
    }

    #[test]
    fn append_round_trip() {
        let dir = tmp();
        let path = dir.path().join("sir.csv");
        let mut w = SeriesWriter::<SirRow>::create(&path).unwrap();
        w.append(&SirRow { time: 0.0, susceptible: 99, infected: 1, recovered: 0 }).unwrap();
        w.append(&SirRow { time: 0.01, susceptible: 98, infected: 2, recovered: 0 }).unwrap();
        assert_eq!(w.rows_written(), 2);
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "99");
        assert_eq!(&rows[1][0], "0.01");
        assert_eq!(&rows[1][2], "2");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = SeriesWriter::<WalkRow>::create(&dir.path().join("walk.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn create_fails_on_missing_directory() {
        let result = SeriesWriter::<WalkRow>::create(std::path::Path::new(
            "/nonexistent-dir-for-test/walk.csv",
        ));
        assert!(result.is_err());
    }
}

// ── Walk observer ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod walk_observer {
    use mc_core::{AgentId, SimConfig};
    use mc_lattice::{Lattice, Position, WalkModel, WalkParams};
    use mc_sim::SimBuilder;

    use crate::csv::SeriesWriter;
    use crate::observer::TrackedPositionObserver;

    #[test]
    fn one_row_per_snapshot_including_initial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("position.csv");

        let config = SimConfig {
            time_step:             0.1,
            total_steps:           10,
            seed:                  42,
            output_interval_steps: 1,
        };
        let lattice = Lattice::new(5, 5).unwrap();
        let params = WalkParams { speed: 1.0, lattice_spacing: 1.0, time_step: 0.1 };
        let model = WalkModel::new(lattice, params).unwrap();
        let mut sim = SimBuilder::new(config, model, vec![Position::new(2, 2)])
            .build()
            .unwrap();

        let writer = SeriesWriter::create(&path).unwrap();
        let mut obs = TrackedPositionObserver::new(writer, AgentId(0), 0.1);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        // Initial row + one per step.
        assert_eq!(obs.into_writer().rows_written(), 11);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 11);
        assert_eq!(&rows[0][0], "0"); // time-0 row carries the start position
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "2");
    }
}

// ── SIR chain observer ────────────────────────────────────────────────────────

#[cfg(test)]
mod sir_observer {
    use mc_core::SimConfig;
    use mc_epi::{initial_compartments, SirChainModel, SirChainParams};
    use mc_sim::SimBuilder;

    use crate::csv::SeriesWriter;
    use crate::observer::CompartmentSeriesObserver;

    #[test]
    fn every_row_conserves_the_population() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sir.csv");

        let config = SimConfig {
            time_step:             0.01,
            total_steps:           20,
            seed:                  1,
            output_interval_steps: 1,
        };
        let model =
            SirChainModel::new(SirChainParams { beta: 0.07, alpha: 1.0, time_step: 0.01 })
                .unwrap();
        let mut sim = SimBuilder::new(config, model, initial_compartments(9, 1, 0))
            .build()
            .unwrap();

        let writer = SeriesWriter::create(&path).unwrap();
        let mut obs = CompartmentSeriesObserver::new(writer, 0.01);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.into_writer().rows_written(), 21);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        for record in rdr.records() {
            let record = record.unwrap();
            let s: usize = record[1].parse().unwrap();
            let i: usize = record[2].parse().unwrap();
            let r: usize = record[3].parse().unwrap();
            assert_eq!(s + i + r, 10);
        }
    }
}

// ── Gillespie observer ────────────────────────────────────────────────────────

#[cfg(test)]
mod gillespie_observer {
    use mc_epi::{GillespieParams, GillespieSir};

    use crate::csv::SeriesWriter;
    use crate::observer::GillespieCsvObserver;

    #[test]
    fn one_row_per_event_and_no_initial_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sir_jump.csv");

        let params = GillespieParams { beta: 5.0 / 30.0, gamma: 1.0 };
        let mut sir = GillespieSir::new(params, (29, 1, 0), 9).unwrap();
        let writer = SeriesWriter::create(&path).unwrap();
        let mut obs = GillespieCsvObserver::new(writer);
        sir.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        let events = obs.into_writer().rows_written();
        assert!(events >= 1, "the seed infection must produce at least one event");

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), events);
        // The log records events only, so the first row's time is already
        // positive and the last row is the extinction event.
        let t0: f64 = rows[0][0].parse().unwrap();
        assert!(t0 > 0.0);
        let n_infected: usize = rows.last().unwrap()[2].parse().unwrap();
        assert_eq!(n_infected, 0);
    }
}
