//! Board files, the columns `a` through `h`.

use std::fmt;

/// A file (column) of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Number of files.
    pub const COUNT: usize = 8;

    /// All files from `a` to `h`.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a file letter `a`..`h`.
    pub const fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Shift the file by `delta`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<File> {
        let shifted = self as i8 + delta;
        if shifted < 0 {
            None
        } else {
            File::from_index(shifted as u8)
        }
    }

    /// Return the file letter.
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn letters_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_char(file.to_char()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(File::FileA.offset(1), Some(File::FileB));
        assert_eq!(File::FileA.offset(-1), None);
        assert_eq!(File::FileH.offset(1), None);
        assert_eq!(File::FileE.offset(-4), Some(File::FileA));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", File::FileA), "a");
        assert_eq!(format!("{}", File::FileH), "h");
    }
}
