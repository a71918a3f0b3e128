//! The fixed output schema.

/// Number of fields in every columnar representation.
pub const FIELD_COUNT: usize = 22;

/// Column names, in the contractual order shared by the tab, csv, html,
/// and xml formats.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "File Name",
    "Full Path",
    "File Size",
    "File User",
    "File UID",
    "File Group",
    "File GID",
    "File Type",
    "File Permission",
    "Octal Permission",
    "Sticky",
    "Access Time",
    "Modify Time",
    "Change Time",
    "Device ID",
    "File Inode",
    "Links",
    "Block Size",
    "Blocks",
    "Checksum",
    "MD5 Digest",
    "SHA256 Digest",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(COLUMNS.len(), FIELD_COUNT);
    }

    #[test]
    fn test_first_and_last_columns() {
        assert_eq!(COLUMNS[0], "File Name");
        assert_eq!(COLUMNS[FIELD_COUNT - 1], "SHA256 Digest");
    }
}
