//! Progress reporting hooks for long table reads.

/// Snapshot handed to a [`ProgressSink`] while rows are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    /// Rows parsed so far.
    pub rows_done: usize,
    /// Rows expected from the metadata scan.
    pub total_rows: usize,
}

impl ProgressTick {
    pub fn fraction(&self) -> f64 {
        if self.total_rows == 0 {
            return 1.0;
        }
        self.rows_done as f64 / self.total_rows as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.rows_done >= self.total_rows
    }
}

/// Receives periodic progress ticks from
/// [`TabularReader::read_data_with_progress`](crate::io::TabularReader::read_data_with_progress).
///
/// Any `FnMut(ProgressTick)` closure is a sink.
pub trait ProgressSink {
    fn tick(&mut self, tick: ProgressTick);
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressTick),
{
    fn tick(&mut self, tick: ProgressTick) {
        self(tick)
    }
}

/// Sink that ignores every tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn tick(&mut self, _tick: ProgressTick) {}
}

/// Sink that reports through the `log` facade, tagged with a description.
#[derive(Debug, Clone)]
pub struct LogProgress {
    description: String,
    last_reported: Option<usize>,
}

impl LogProgress {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            last_reported: None,
        }
    }
}

impl ProgressSink for LogProgress {
    fn tick(&mut self, tick: ProgressTick) {
        // the final tick can repeat the last periodic one
        if self.last_reported == Some(tick.rows_done) {
            return;
        }
        self.last_reported = Some(tick.rows_done);
        if tick.is_complete() {
            log::info!(
                "{}: all {} rows received",
                self.description,
                tick.total_rows
            );
        } else {
            log::debug!(
                "{}: {}/{} rows ({:.0}%)",
                self.description,
                tick.rows_done,
                tick.total_rows,
                tick.percent()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |t: ProgressTick| seen.push(t.rows_done);
            sink.tick(ProgressTick {
                rows_done: 3,
                total_rows: 10,
            });
        }
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn empty_table_counts_as_complete() {
        let tick = ProgressTick {
            rows_done: 0,
            total_rows: 0,
        };
        assert!(tick.is_complete());
        assert_eq!(tick.percent(), 100.0);
    }
}
