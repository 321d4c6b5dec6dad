use std::path::Path;

/// Capacity of the name field in a directory record
pub const NAME_FIELD_SIZE: usize = 224;

/// Substituted for any character the single-byte encoding cannot represent
const FALLBACK_BYTE: u8 = b'?';

/// Separator spliced into stored names by the sub-directory rewrites
const PATH_SEPARATOR: u8 = b'\\';

/// Fixed-width entry name, single-byte encoded and null-padded
///
/// This is a fixed byte record, not a growable string: names of
/// [NAME_FIELD_SIZE] bytes or longer are silently truncated to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryName([u8; NAME_FIELD_SIZE]);

impl EntryName {
    /// Encode the file-name portion of `path` (base name plus extension,
    /// extension keeping its dot).
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Self::encode(&name)
    }

    /// Encode `name` into the fixed-width record: lossy single-byte
    /// encoding, sub-directory prefix rewrite, null padding.
    pub fn encode(name: &str) -> Self {
        let mut field = [0u8; NAME_FIELD_SIZE];
        for (slot, ch) in field.iter_mut().zip(name.chars()) {
            *slot = encode_single_byte(ch);
        }
        rewrite_subdir_prefix(&mut field);
        Self(field)
    }

    /// The full 224-byte field, padding included
    pub fn as_bytes(&self) -> &[u8; NAME_FIELD_SIZE] {
        &self.0
    }
}

/// A `WIN_` or `3D_` name prefix addresses a destination sub-directory:
/// the underscore becomes a path separator in the stored name. `WIN_` is
/// checked first and at most one rewrite applies. Comparison is exact,
/// so lowercase prefixes pass through untouched.
fn rewrite_subdir_prefix(field: &mut [u8; NAME_FIELD_SIZE]) {
    if field[..4] == *b"WIN_" {
        field[3] = PATH_SEPARATOR;
    } else if field[..3] == *b"3D_" {
        field[2] = PATH_SEPARATOR;
    }
}

/// Windows-1252 with best-fit substitution disabled: ASCII and the
/// Latin-1 row map straight through, the C1 region carries the usual
/// specials, and everything else degrades to [FALLBACK_BYTE].
fn encode_single_byte(c: char) -> u8 {
    let cp = u32::from(c);
    match cp {
        0x0000..=0x007F | 0x00A0..=0x00FF => cp as u8,
        0x20AC => 0x80, // euro sign
        0x201A => 0x82, // single low quote
        0x0192 => 0x83, // f with hook
        0x201E => 0x84, // double low quote
        0x2026 => 0x85, // ellipsis
        0x2020 => 0x86, // dagger
        0x2021 => 0x87, // double dagger
        0x02C6 => 0x88, // circumflex accent
        0x2030 => 0x89, // per mille
        0x0160 => 0x8A, // S caron
        0x2039 => 0x8B, // single left angle quote
        0x0152 => 0x8C, // OE ligature
        0x017D => 0x8E, // Z caron
        0x2018 => 0x91, // left single quote
        0x2019 => 0x92, // right single quote
        0x201C => 0x93, // left double quote
        0x201D => 0x94, // right double quote
        0x2022 => 0x95, // bullet
        0x2013 => 0x96, // en dash
        0x2014 => 0x97, // em dash
        0x02DC => 0x98, // small tilde
        0x2122 => 0x99, // trade mark
        0x0161 => 0x9A, // s caron
        0x203A => 0x9B, // single right angle quote
        0x0153 => 0x9C, // oe ligature
        0x017E => 0x9E, // z caron
        0x0178 => 0x9F, // Y diaeresis
        _ => FALLBACK_BYTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stored(name: &str) -> [u8; NAME_FIELD_SIZE] {
        *EntryName::encode(name).as_bytes()
    }

    #[test]
    fn test_plain_name_passes_through() {
        let field = stored("plain.txt");
        assert_eq!(&field[..9], b"plain.txt");
        assert!(field[9..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_win_prefix_rewrite() {
        let field = stored("WIN_TEST.DAT");
        assert_eq!(&field[..12], b"WIN\\TEST.DAT");
    }

    #[test]
    fn test_3d_prefix_rewrite() {
        let field = stored("3D_X.BIN");
        assert_eq!(&field[..8], b"3D\\X.BIN");
    }

    #[test]
    fn test_win_prefix_wins_over_3d() {
        // Only the first matching rule applies
        let field = stored("WIN_3D_A");
        assert_eq!(&field[..8], b"WIN\\3D_A");
    }

    #[test]
    fn test_prefix_comparison_is_case_sensitive() {
        assert_eq!(&stored("win_test.dat")[..12], b"win_test.dat");
        assert_eq!(&stored("3d_x.bin")[..8], b"3d_x.bin");
    }

    #[test]
    fn test_short_names_do_not_match_prefixes() {
        assert_eq!(&stored("3D")[..3], b"3D\0");
        assert_eq!(&stored("WIN")[..4], b"WIN\0");
        // A bare "3D_" still rewrites: the window is null-padded
        assert_eq!(&stored("3D_")[..3], b"3D\\");
    }

    #[test]
    fn test_latin1_and_c1_specials() {
        let field = stored("caf\u{E9}\u{20AC}.txt");
        assert_eq!(&field[..9], &[b'c', b'a', b'f', 0xE9, 0x80, b'.', b't', b'x', b't']);
    }

    #[test]
    fn test_unmappable_characters_degrade_to_fallback() {
        let field = stored("\u{4E16}\u{754C}.bin");
        assert_eq!(&field[..6], b"??.bin");
    }

    #[test]
    fn test_long_name_truncates_silently() {
        let long = "x".repeat(300) + ".dat";
        let field = stored(&long);
        assert!(field.iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_from_path_takes_base_name_and_extension() {
        let path = PathBuf::from("/some/dir/WIN_LOGO.TGA");
        let name = EntryName::from_path(&path);
        assert_eq!(&name.as_bytes()[..12], b"WIN\\LOGO.TGA");
    }
}
