use crate::archive::format::{ArchiveHeader, DirectoryEntry};
use crate::archive::layout::LayoutPlanner;
use crate::archive::name::EntryName;
use crate::error::{MpkError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Archive writer for creating .mpk files
///
/// Drives one build from header to last payload. Entries are packed
/// strictly in the order they are added; the first failure aborts the
/// build, and whatever was already written stays on disk as-is. A writer
/// serves exactly one build.
pub struct ArchiveWriter {
    writer: BufWriter<File>,
    layout: LayoutPlanner,
    entry_count: u32,
    next_index: u32,
}

impl ArchiveWriter {
    /// Create/truncate the destination and write the header for an
    /// archive declaring `entry_count` entries.
    pub fn create<P: AsRef<Path>>(path: P, entry_count: u32) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| MpkError::CreateArchive {
                path: path.to_path_buf(),
                source,
            })?;
        let mut writer = BufWriter::new(file);

        ArchiveHeader::new(entry_count).write_to(&mut writer)?;

        Ok(Self {
            writer,
            layout: LayoutPlanner::new(entry_count),
            entry_count,
            next_index: 0,
        })
    }

    /// Pack one source file as the next entry.
    ///
    /// Opens the source, records its directory entry at the fixed slot,
    /// and copies its bytes verbatim into the aligned payload region.
    /// A source that cannot be opened or has zero length aborts the
    /// build; the archive keeps every entry packed before it.
    pub fn add_path<P: AsRef<Path>>(&mut self, source: P) -> Result<()> {
        let source = source.as_ref();
        if self.next_index == self.entry_count {
            return Err(MpkError::DirectoryFull {
                declared: self.entry_count,
            });
        }

        let mut input = File::open(source).map_err(|e| MpkError::SourceOpen {
            path: source.to_path_buf(),
            source: e,
        })?;
        let size = input.metadata()?.len();
        if size == 0 {
            return Err(MpkError::CorruptSource {
                name: file_label(source),
            });
        }

        let index = self.next_index;
        let offset = self.layout.next_offset();
        let entry = DirectoryEntry::new(index, offset, size, EntryName::from_path(source));

        self.writer
            .seek(SeekFrom::Start(DirectoryEntry::slot_offset(index)))?;
        entry.write_to(&mut self.writer)?;

        self.writer.seek(SeekFrom::Start(offset))?;
        io::copy(&mut input, &mut self.writer)?;

        debug!(index, offset, size, source = %source.display(), "packed entry");

        self.next_index += 1;
        if self.next_index < self.entry_count {
            let position = self.writer.stream_position()?;
            self.layout.advance(position);
        }
        Ok(())
    }

    /// Flush and close the destination. No trailer or checksum is
    /// written.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Pack `sources`, in order, into a new archive at `destination`.
///
/// The entry count is fixed up front from the input list, so an aborted
/// build leaves a destination whose header declares more entries than
/// were written; nothing is rolled back or truncated.
pub fn pack<P, S>(destination: P, sources: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    let entry_count =
        u32::try_from(sources.len()).map_err(|_| MpkError::TooManyEntries(sources.len()))?;

    let mut writer = ArchiveWriter::create(&destination, entry_count)?;
    for source in sources {
        if let Err(err) = writer.add_path(source) {
            warn!(source = %source.as_ref().display(), "build aborted: {err}");
            return Err(err);
        }
    }
    writer.finish()?;

    info!(
        entries = entry_count,
        archive = %destination.as_ref().display(),
        "archive complete"
    );
    Ok(())
}

/// File-name portion of a path, for user-facing messages
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_label_uses_base_name() {
        assert_eq!(file_label(&PathBuf::from("/a/b/c.txt")), "c.txt");
    }

    #[test]
    fn test_directory_full_guard() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a.bin");
        std::fs::write(&source, b"data").unwrap();

        let mut writer = ArchiveWriter::create(dir.path().join("out.mpk"), 1).unwrap();
        writer.add_path(&source).unwrap();

        match writer.add_path(&source) {
            Err(MpkError::DirectoryFull { declared: 1 }) => {}
            other => panic!("Expected DirectoryFull, got: {other:?}"),
        }
    }
}
