//! Surface that records calls instead of rendering.

use std::io;

use super::RenderSurface;

/// Keeps every markup string it is asked to render, in call order.
///
/// Useful as a test double wherever a real notebook is not available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    calls: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded render calls, oldest first.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.calls.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn render_markup(&mut self, markup: &str) -> io::Result<()> {
        self.calls.push(markup.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        surface.render_markup("first").unwrap();
        surface.render_markup("second").unwrap();

        assert_eq!(surface.len(), 2);
        assert_eq!(surface.calls(), ["first", "second"]);
        assert_eq!(surface.last(), Some("second"));
    }

    #[test]
    fn test_clear() {
        let mut surface = RecordingSurface::new();
        surface.render_markup("x").unwrap();
        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(surface.last(), None);
    }
}
