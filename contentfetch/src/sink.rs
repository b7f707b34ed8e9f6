//! Destination sink abstraction.
//!
//! Download destinations are writable, seekable byte sinks owned by the
//! caller. The local-copy path additionally needs to reset a destination
//! to empty before recopying, which plain `Write + Seek` cannot express,
//! so the [`ContentSink`] trait adds `truncate`.

use std::fs::File;
use std::io::{self, Cursor, Seek, SeekFrom, Write};

/// A writable, seekable download destination that can be reset to empty.
pub trait ContentSink: Write + Seek {
    /// Discard all written bytes and rewind to the start.
    fn truncate(&mut self) -> io::Result<()>;
}

impl ContentSink for File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)?;
        self.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

impl ContentSink for Cursor<Vec<u8>> {
    fn truncate(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        self.set_position(0);
        Ok(())
    }
}
