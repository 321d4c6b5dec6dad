//! mpk-rs: MPK archive writer with a fixed directory table and block-aligned payloads
//!
//! Packs an ordered list of files into a single random-access container:
//! a 12-byte header, one fixed 256-byte directory record per entry at a
//! fixed base offset, and each payload copied verbatim onto a 2048-byte
//! boundary. A reader can locate any entry by index without scanning.
//!
//! Entry names are stored in a fixed 224-byte field using a lossy
//! single-byte encoding, and the `WIN_`/`3D_` name prefixes are rewritten
//! to sub-directory separators on the way in.
//!
//! # Example
//!
//! ```no_run
//! use mpk_rs::pack;
//!
//! pack("example.mpk", &["a.txt", "b.bin"])?;
//! # Ok::<(), mpk_rs::MpkError>(())
//! ```
//!
//! A build is strictly sequential and aborts on the first failing
//! source; everything packed before the failure stays on disk.

// Core modules
pub mod archive;
pub mod error;
pub mod job;

// Re-export commonly used types
pub use archive::{
    align_up, pack, ArchiveHeader, ArchiveWriter, DirectoryEntry, EntryName, LayoutPlanner,
    DIRECTORY_BASE, DIRECTORY_RECORD_SIZE, FORMAT_VERSION, HEADER_SIZE, LAYOUT_BASE, MAGIC_NUMBER,
    NAME_FIELD_SIZE, PAYLOAD_ALIGNMENT,
};
pub use error::{MpkError, Result};
pub use job::{JobSource, PackJob};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Ensure core types are accessible
        let _header = ArchiveHeader::new(0);
        let _layout = LayoutPlanner::new(0);
        assert_eq!(MAGIC_NUMBER, [0x4D, 0x50, 0x4B, 0x00]);
    }
}
