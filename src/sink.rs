//! Append-only declaration sink.
//!
//! Every generated line goes through one [`DeclarationSink`] owned by the
//! caller, so the same generator can target stdout or an in-memory buffer.

use anyhow::{Context, Result};
use ecs_decl::Declaration;
use std::io::Write;

pub struct DeclarationSink<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> DeclarationSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write one declaration followed by a newline.
    pub fn emit(&mut self, decl: &Declaration) -> Result<()> {
        writeln!(self.out, "{}", decl)
            .with_context(|| format!("failed to write declaration line {}", self.lines + 1))?;
        self.lines += 1;
        tracing::trace!(line = self.lines, "{}", decl);
        Ok(())
    }

    pub fn emit_all<'a, I>(&mut self, decls: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        for decl in decls {
            self.emit(decl)?;
        }
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flush the underlying writer and hand it back with the line count.
    pub fn finish(mut self) -> Result<(W, usize)> {
        self.out.flush().context("failed to flush output")?;
        Ok((self.out, self.lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecs_decl::{NameKind, TypeName};
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_appends_lines_in_order() {
        let mut sink = DeclarationSink::new(Vec::new());
        let decls: Vec<Declaration> = (0..3)
            .map(|i| Declaration::EmptyType(TypeName::new(NameKind::Tag, i)))
            .collect();
        sink.emit_all(&decls).unwrap();
        assert_eq!(sink.lines_written(), 3);

        let (buf, lines) = sink.finish().unwrap();
        assert_eq!(lines, 3);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "struct T0 {};\nstruct T1 {};\nstruct T2 {};\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut sink = DeclarationSink::new(ClosedPipe);
        let err = sink
            .emit(&Declaration::config())
            .expect_err("closed pipe must fail");
        assert!(err.to_string().contains("line 1"));
        assert_eq!(sink.lines_written(), 0);

        let root = err.root_cause().to_string();
        assert!(root.contains("pipe closed"), "unexpected cause: {root}");
    }
}
