//! Render surfaces for raw markup.
//!
//! This module provides:
//!
//! - [`RenderSurface`]: The "render raw markup" capability supplied by the host
//! - [`NotebookSurface`]: Emits markup as evcxr `text/html` rich output
//! - [`RecordingSurface`]: Records render calls instead of displaying them
//!
//! How the host applies the markup (scoping, persistence across cells) is up to
//! the host. A surface only receives the text.

mod notebook;
mod recording;

pub use notebook::{NotebookSurface, HTML_MIME};
pub use recording::RecordingSurface;

use std::io;

/// A host capability that displays raw markup as interactive output.
///
/// Closures of the form `FnMut(&str) -> io::Result<()>` are surfaces too:
///
/// ```rust
/// use cellstyle::RenderSurface;
///
/// let mut seen = Vec::new();
/// let mut surface = |markup: &str| -> std::io::Result<()> {
///     seen.push(markup.to_string());
///     Ok(())
/// };
/// surface.render_markup("<style></style>").unwrap();
/// assert_eq!(seen, ["<style></style>"]);
/// ```
pub trait RenderSurface {
    /// Displays `markup` exactly as given.
    fn render_markup(&mut self, markup: &str) -> io::Result<()>;
}

impl<F> RenderSurface for F
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn render_markup(&mut self, markup: &str) -> io::Result<()> {
        self(markup)
    }
}
