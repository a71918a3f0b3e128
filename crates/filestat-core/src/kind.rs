//! File type classification and permission rendering.

use serde::{Deserialize, Serialize};

/// Sticky note for a set-user-id file.
pub const STICKY_SETUID: &str = "set user on execution";
/// Sticky note for a set-group-id file.
pub const STICKY_SETGID: &str = "set group on execution";
/// Sticky note for a sticky-bit file.
pub const STICKY_VTX: &str = "save text even after use";

/// Type of a filesystem entry, classified from the stat mode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Fifo,
    Directory,
    CharSpecial,
    BlockSpecial,
    Symlink,
    Socket,
    Regular,
}

impl FileKind {
    /// Classify a raw st_mode value.
    ///
    /// The checks run in a fixed first-match-wins order; anything that
    /// matches none of the special formats is a regular file. Metadata is
    /// obtained by following symlinks, so `Symlink` never comes out of a
    /// stat of a live path; the variant stays in the priority chain so the
    /// classification covers every mode value.
    pub fn from_mode(mode: u32) -> Self {
        let fmt = mode & (libc::S_IFMT as u32);
        if fmt == libc::S_IFIFO as u32 {
            FileKind::Fifo
        } else if fmt == libc::S_IFDIR as u32 {
            FileKind::Directory
        } else if fmt == libc::S_IFCHR as u32 {
            FileKind::CharSpecial
        } else if fmt == libc::S_IFBLK as u32 {
            FileKind::BlockSpecial
        } else if fmt == libc::S_IFLNK as u32 {
            FileKind::Symlink
        } else if fmt == libc::S_IFSOCK as u32 {
            FileKind::Socket
        } else {
            FileKind::Regular
        }
    }

    /// Leading character of the permission string.
    pub fn glyph(self) -> char {
        match self {
            FileKind::Fifo => 'p',
            FileKind::Directory => 'd',
            FileKind::CharSpecial => 'c',
            FileKind::BlockSpecial => 'b',
            FileKind::Symlink => 'l',
            FileKind::Socket => 's',
            FileKind::Regular => '-',
        }
    }

    /// Human-readable type name used in every output format.
    pub fn description(self) -> &'static str {
        match self {
            FileKind::Fifo => "fifo file",
            FileKind::Directory => "directory",
            FileKind::CharSpecial => "character special file",
            FileKind::BlockSpecial => "block special file",
            FileKind::Symlink => "symbolic link file",
            FileKind::Socket => "socket file",
            FileKind::Regular => "regular file",
        }
    }

    /// Check if this is a regular file (the only kind that gets digests).
    pub fn is_regular(self) -> bool {
        matches!(self, FileKind::Regular)
    }

    /// Check if this is a directory.
    pub fn is_directory(self) -> bool {
        matches!(self, FileKind::Directory)
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Build the 10-character permission string and the sticky note.
///
/// The first character is the type glyph, followed by the rwx triplets for
/// owner, group, and other. Exactly one overlay is then applied, first match
/// wins: setuid replaces the owner-execute position with 's', else setgid
/// replaces the group-execute position with 's', else the sticky bit replaces
/// the other-execute position with 't'. The note names whichever overlay was
/// applied, or is empty.
pub fn permission_string(kind: FileKind, mode: u32) -> (String, &'static str) {
    let mut perm = [b'-'; 10];
    perm[0] = kind.glyph() as u8;

    let bits: [(u32, u8); 9] = [
        (0o400, b'r'),
        (0o200, b'w'),
        (0o100, b'x'),
        (0o040, b'r'),
        (0o020, b'w'),
        (0o010, b'x'),
        (0o004, b'r'),
        (0o002, b'w'),
        (0o001, b'x'),
    ];
    for (i, (bit, ch)) in bits.iter().enumerate() {
        if mode & bit != 0 {
            perm[i + 1] = *ch;
        }
    }

    let note = if mode & 0o4000 != 0 {
        perm[3] = b's';
        STICKY_SETUID
    } else if mode & 0o2000 != 0 {
        perm[6] = b's';
        STICKY_SETGID
    } else if mode & 0o1000 != 0 {
        perm[9] = b't';
        STICKY_VTX
    } else {
        ""
    };

    // The buffer only ever holds ASCII.
    (String::from_utf8_lossy(&perm).into_owned(), note)
}
