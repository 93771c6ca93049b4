//! evcxr rich-output surface.

use std::io::{self, Stdout, Write};

use super::RenderSurface;

/// MIME type under which markup is displayed.
pub const HTML_MIME: &str = "text/html";

const BEGIN_MARKER: &str = "EVCXR_BEGIN_CONTENT";
const END_MARKER: &str = "EVCXR_END_CONTENT";

/// Displays markup through the evcxr Jupyter kernel.
///
/// evcxr treats anything written to stdout between `EVCXR_BEGIN_CONTENT <mime>`
/// and `EVCXR_END_CONTENT` as rich output of that MIME type. Each call to
/// [`render_markup`](RenderSurface::render_markup) writes one such block and
/// flushes the writer.
///
/// # Example
///
/// ```rust
/// use cellstyle::{NotebookSurface, RenderSurface};
///
/// let mut surface = NotebookSurface::new(Vec::new());
/// surface.render_markup("<style>p { margin: 0; }</style>").unwrap();
///
/// let out = String::from_utf8(surface.into_inner()).unwrap();
/// assert_eq!(
///     out,
///     "EVCXR_BEGIN_CONTENT text/html\n<style>p { margin: 0; }</style>\nEVCXR_END_CONTENT\n"
/// );
/// ```
#[derive(Debug)]
pub struct NotebookSurface<W = Stdout> {
    writer: W,
}

impl NotebookSurface<Stdout> {
    /// Creates a surface that writes to the process stdout, where the kernel
    /// picks it up.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> NotebookSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the surface, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSurface for NotebookSurface<W> {
    fn render_markup(&mut self, markup: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", BEGIN_MARKER, HTML_MIME)?;
        self.writer.write_all(markup.as_bytes())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", END_MARKER)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(markup: &str) -> String {
        let mut surface = NotebookSurface::new(Vec::new());
        surface.render_markup(markup).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_block_framing() {
        assert_eq!(
            rendered("body { color: red; }"),
            "EVCXR_BEGIN_CONTENT text/html\nbody { color: red; }\nEVCXR_END_CONTENT\n"
        );
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(
            rendered(""),
            "EVCXR_BEGIN_CONTENT text/html\n\nEVCXR_END_CONTENT\n"
        );
    }

    #[test]
    fn test_markup_is_not_trimmed() {
        let markup = "\n  <style>\n  </style>\n\n";
        let out = rendered(markup);
        let body = out
            .strip_prefix("EVCXR_BEGIN_CONTENT text/html\n")
            .and_then(|rest| rest.strip_suffix("\nEVCXR_END_CONTENT\n"))
            .unwrap();
        assert_eq!(body, markup);
    }

    #[test]
    fn test_blocks_accumulate() {
        let mut surface = NotebookSurface::new(Vec::new());
        surface.render_markup("a").unwrap();
        surface.render_markup("b").unwrap();
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out.matches(BEGIN_MARKER).count(), 2);
        assert!(out.find("\na\n").unwrap() < out.find("\nb\n").unwrap());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "kernel went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_errors_propagate() {
        let mut surface = NotebookSurface::new(BrokenPipe);
        let err = surface.render_markup("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
