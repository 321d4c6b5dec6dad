mod format;
mod layout;
mod name;
mod writer;

pub use format::{
    ArchiveHeader, DirectoryEntry, DIRECTORY_BASE, DIRECTORY_RECORD_SIZE, FORMAT_VERSION,
    HEADER_SIZE, LAYOUT_BASE, MAGIC_NUMBER,
};
pub use layout::{align_up, LayoutPlanner, PAYLOAD_ALIGNMENT};
pub use name::{EntryName, NAME_FIELD_SIZE};
pub use writer::{pack, ArchiveWriter};
