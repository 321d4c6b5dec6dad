use crate::error::Result;
use std::path::PathBuf;

/// One packing job: the ordered source files and the archive destination
#[derive(Debug, Clone)]
pub struct PackJob {
    /// Files to pack, in archive order; may be empty
    pub sources: Vec<PathBuf>,
    /// Archive file to create or truncate
    pub destination: PathBuf,
}

/// Supplies the files to pack and the destination archive path.
///
/// Stands in for whatever the host offers for file selection, so the
/// build core never touches dialogs or process arguments directly. A
/// failure here is fatal for the whole process rather than a recoverable
/// build error: implementations map it to [crate::MpkError::Host] and
/// the top-level handler terminates.
pub trait JobSource {
    /// Produce the job, or fail fatally
    fn acquire(&self) -> Result<PackJob>;
}
