/// Outcome of one resolution pass.
///
/// Only records without a position at the start of the pass are
/// counted, so `resolved + failed == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionReport {
    pub total: usize,
    pub resolved: usize,
    pub failed: usize,
}

impl ResolutionReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Intermediate state of a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }
}
