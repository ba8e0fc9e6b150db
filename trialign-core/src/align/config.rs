use crate::error::{AlignError, AlignResult};

pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Tuning knobs for an alignment run. None of them change the result.
///
/// ```rust
/// use trialign_core::align::AlignerConfig;
///
/// let config = AlignerConfig::default().with_threads(4).with_batch_size(256);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignerConfig {
    /// Worker count. `None` runs on the global rayon pool.
    pub threads: Option<usize>,
    /// Cells per parallel batch inside one diagonal group.
    pub batch_size: usize,
    /// Upper bound on `(lenA+1)(lenB+1)(lenC+1)`, checked before allocation.
    pub max_cells: Option<usize>,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            threads: None,
            batch_size: DEFAULT_BATCH_SIZE,
            max_cells: None,
        }
    }
}

impl AlignerConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    pub fn validate(&self) -> AlignResult<()> {
        if self.batch_size == 0 {
            return Err(AlignError::InvalidConfig {
                msg: "batch size must be at least 1",
            });
        }
        if self.threads == Some(0) {
            return Err(AlignError::InvalidConfig {
                msg: "thread count must be at least 1",
            });
        }
        Ok(())
    }
}
