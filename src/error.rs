use std::error::Error;
use std::fmt;

/// Returned when a spawn request finds every candidate cell taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoFreeCellError {
    /// What we were trying to place, e.g. "apple" or "stone wall".
    pub item: &'static str,
    /// Number of cells that were occupied at the time of the request.
    pub occupied: usize,
    pub total: usize,
}

impl fmt::Display for NoFreeCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no free cell to place {} ({} of {} cells occupied)",
            self.item, self.occupied, self.total
        )
    }
}

impl Error for NoFreeCellError {}
