//! Console progress reported as rows are written.

use montesort_core::{AreaRow, ResultSink, Row, SortAlgorithm, TimingRow};

/// A row that can describe itself on the console
pub trait Progress {
    fn report(&self);
}

impl Progress for AreaRow {
    fn report(&self) {
        tracing::info!(
            "N={} wide={} narrow={}",
            self.n,
            self.area_wide,
            self.area_narrow
        );
    }
}

impl Progress for TimingRow {
    fn report(&self) {
        // the standard row opens each (type, n) group
        if self.algorithm == SortAlgorithm::Standard {
            tracing::info!(kind = %self.kind, n = self.n, "timing");
        }
        tracing::debug!(
            kind = %self.kind,
            n = self.n,
            algo = self.algorithm.label(),
            threshold = self.algorithm.threshold(),
            time_us = self.time,
            "case timed"
        );
    }
}

/// Forwards rows to `inner` and reports each one after it was written
pub struct ProgressSink<S> {
    inner: S,
}

impl<S> ProgressSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<R, S> ResultSink<R> for ProgressSink<S>
where
    R: Row + Progress,
    S: ResultSink<R>,
{
    fn write_row(&mut self, row: &R) -> montesort_core::Result<()> {
        self.inner.write_row(row)?;
        row.report();
        Ok(())
    }

    fn finish(&mut self) -> montesort_core::Result<()> {
        self.inner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montesort_core::{InputKind, MemorySink};

    #[test]
    fn test_rows_pass_through() {
        let mut sink = ProgressSink::new(MemorySink::new());
        let row = TimingRow {
            kind: InputKind::Reversed,
            n: 500,
            algorithm: SortAlgorithm::Hybrid { threshold: 10 },
            time: 12.5,
        };
        sink.write_row(&row).unwrap();
        sink.finish().unwrap();

        let memory = sink.into_inner();
        assert_eq!(memory.rows, vec![row]);
    }
}
