//! Plain data row types for the three time-series formats.

/// A row shape writable by [`SeriesWriter`](crate::SeriesWriter).
///
/// `HEADER` is written once when the file is created; [`fields`](Self::fields)
/// renders one record in the same column order.
pub trait SeriesRow {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

/// One tracked walker's position at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkRow {
    /// Simulated seconds since the start of the run.
    pub time:       f64,
    pub position_x: i32,
    pub position_y: i32,
}

impl SeriesRow for WalkRow {
    const HEADER: &'static [&'static str] = &["Time", "position_x", "position_y"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.time.to_string(),
            self.position_x.to_string(),
            self.position_y.to_string(),
        ]
    }
}

/// Compartment counts of the discrete-time chain at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirRow {
    /// Simulated time units since the start of the run.
    pub time:        f64,
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl SeriesRow for SirRow {
    const HEADER: &'static [&'static str] = &["Time", "Susceptible", "Infected", "Recovered"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.time.to_string(),
            self.susceptible.to_string(),
            self.infected.to_string(),
            self.recovered.to_string(),
        ]
    }
}

/// Compartment counts after one continuous-time event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpRow {
    pub time_days:     f64,
    pub n_susceptible: usize,
    pub n_infected:    usize,
    pub n_recovered:   usize,
}

impl SeriesRow for JumpRow {
    const HEADER: &'static [&'static str] = &["Time (days)", "nS", "nI", "nR"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.time_days.to_string(),
            self.n_susceptible.to_string(),
            self.n_infected.to_string(),
            self.n_recovered.to_string(),
        ]
    }
}
