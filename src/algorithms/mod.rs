#[cfg(feature = "parallel")]
mod parallel;
mod sequential;

#[cfg(feature = "parallel")]
pub use self::parallel::*;
pub use self::sequential::*;

use crate::{measure::matrix::DistanceMatrix, measure::points::PointSet, Float, Result};

/// How coordinates are checked before any distance is computed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    /// NaN and infinite coordinates flow through the arithmetic and yield NaN distances.
    Propagate,
    /// Reject the input with [`crate::Error::NonFiniteInput`] if any coordinate is not finite.
    Strict,
}

impl Default for Validation {
    fn default() -> Self {
        Validation::Propagate
    }
}

const MIN_ROWS_PER_TASK: usize = 16;

#[derive(Clone, Debug)]
pub struct Options {
    pub validation: Validation,
    /// Smallest number of output rows a parallel task is given. Ignored by [`Sequential`].
    pub min_rows_per_task: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            validation: Validation::default(),
            min_rows_per_task: MIN_ROWS_PER_TASK,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn strict(self) -> Self {
        self.validation(Validation::Strict)
    }

    pub fn min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows.max(1);
        self
    }
}

pub trait DistanceMatrixComputer<T: Float> {
    fn compute_with(points: &PointSet<T>, options: &Options) -> Result<DistanceMatrix<T>>;

    fn compute(points: &PointSet<T>) -> Result<DistanceMatrix<T>> {
        Self::compute_with(points, &Options::default())
    }
}

/// Checks shared by every computer before the result is allocated.
fn prepare<T: Float>(points: &PointSet<T>, options: &Options) -> Result<()> {
    if options.validation == Validation::Strict {
        if let Err(e) = points.check_finite() {
            log::warn!("rejecting point set: {}", e);
            return Err(e);
        }
    }
    Ok(())
}

#[inline]
fn begin_event(_name: &'static str) {
    #[cfg(feature = "profiling")]
    superluminal_perf::begin_event(_name);
}

#[inline]
fn end_event() {
    #[cfg(feature = "profiling")]
    superluminal_perf::end_event();
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, Once};

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;

    struct Capture;

    static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static INIT: Once = Once::new();

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                MESSAGES.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        INIT.call_once(|| {
            log::set_logger(&Capture).unwrap();
            log::set_max_level(LevelFilter::Debug);
        });
    }

    fn logged(prefix: &str) -> bool {
        MESSAGES.lock().unwrap().iter().any(|m| m.starts_with(prefix))
    }

    #[test]
    fn sequential_logs_start_and_finish() {
        capture_logs();
        let points = PointSet::<f64>::from_flat(&[0.0; 23], 23, 1).unwrap();
        Sequential::compute(&points).unwrap();

        assert!(logged("sequential distance matrix: n=23, dim=1"));
        assert!(logged("finished sequential distance matrix: n=23 in "));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_logs_finish_even_for_trivial_input() {
        capture_logs();
        let points = PointSet::<f64>::from_flat(&[1.0, 2.0], 1, 2).unwrap();
        Parallel::compute(&points).unwrap();

        assert!(logged("finished parallel distance matrix: n=1 in "));
    }

    #[test]
    fn strict_rejection_is_logged() {
        capture_logs();
        let points = PointSet::<f64>::from_flat(&[0.0, 0.0, 0.0, f64::NAN, 0.0], 5, 1).unwrap();
        Sequential::compute_with(&points, &Options::new().strict()).unwrap_err();

        assert!(logged("rejecting point set: non-finite coordinate at row 3, column 0"));
    }
}
