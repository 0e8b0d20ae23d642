//! Byte-array emitter.
//!
//! Turns a byte stream into a C declaration of the form
//!
//! ```text
//! const char name[] = {
//!   0x00, 0x01, ..., 0x0f,
//!   0x10,
//! };
//! ```
//!
//! Each literal is written as ` 0xhh,` and every run of 16 literals starts on
//! a new line indented by one extra space. An empty input still gets the line
//! break that would precede the first literal, so it renders as
//! `const char name[] = {\n};\n`. Existing generated files depend on that
//! exact shape.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::error::Error;

/// Number of literals written per output line.
pub const LITERALS_PER_LINE: u64 = 16;

const READ_CHUNK: usize = 8 * 1024;

/// Streaming writer for a single array declaration.
///
/// The header is written by [`Emitter::new`] and the closing `};` by
/// [`Emitter::finish`]. Dropping an emitter without finishing it leaves the
/// declaration unterminated.
pub struct Emitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> Emitter<W> {
    /// Write the declaration header for `ident` and return the emitter.
    ///
    /// `ident` is used verbatim; it is not checked for being a valid C name.
    pub fn new(mut writer: W, ident: &str) -> io::Result<Self> {
        write!(writer, "const char {}[] = {{", ident)?;
        Ok(Emitter { writer, count: 0 })
    }

    /// Emit one literal, breaking the line first if a new row starts here.
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        if self.count % LITERALS_PER_LINE == 0 {
            self.writer.write_all(b"\n ")?;
        }
        write!(self.writer, " 0x{:02x},", byte)?;
        self.count += 1;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }

    /// Literals emitted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Close the declaration and hand back the inner writer.
    ///
    /// The writer is not flushed; buffered callers must flush it themselves.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.write_all(b"\n};\n")?;
        debug!(literals = self.count, "declaration closed");
        Ok(self.writer)
    }
}

/// Drain `reader` into a declaration named `ident` on `writer`.
///
/// Returns the number of bytes transcribed. Interrupted reads are retried;
/// any other read failure is reported as [`Error::Read`], and any failure on
/// `writer` as [`Error::Write`]. Output already written is left as is.
pub fn emit<R: Read, W: Write>(mut reader: R, writer: W, ident: &str) -> Result<u64, Error> {
    let mut emitter = Emitter::new(writer, ident).map_err(Error::Write)?;
    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Read(e)),
        };
        trace!(bytes = n, "read chunk");
        emitter.write_bytes(&buf[..n]).map_err(Error::Write)?;
    }
    let count = emitter.count();
    emitter.finish().map_err(Error::Write)?;
    Ok(count)
}

/// Render `bytes` as a declaration named `ident`.
pub fn emit_to_string(bytes: &[u8], ident: &str) -> String {
    let mut out = Vec::with_capacity(32 + bytes.len() * 6 + bytes.len() / 8);
    emit(bytes, &mut out, ident).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("declaration is ASCII plus a UTF-8 identifier")
}
