//! Stylesheet injection.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::InjectorConfig;
use crate::error::{Result, StyleError};
use crate::surface::RenderSurface;

/// Loads a stylesheet file and forwards it to a render surface.
///
/// The file is read afresh on every call to [`apply_style`](Self::apply_style);
/// nothing is cached between calls. Its contents reach the surface byte for
/// byte, with no parsing or validation.
///
/// # Example
///
/// ```rust,no_run
/// use cellstyle::{NotebookSurface, StyleInjector};
///
/// let injector = StyleInjector::with_path("styles/notebook.html");
/// injector.apply_style(&mut NotebookSurface::stdout())?;
/// # Ok::<(), cellstyle::StyleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleInjector {
    config: InjectorConfig,
}

impl StyleInjector {
    /// Creates an injector for [`DEFAULT_STYLE_PATH`](crate::DEFAULT_STYLE_PATH).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an injector reading from `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::from_config(InjectorConfig::new().with_path(path))
    }

    pub fn from_config(config: InjectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// The stylesheet path, as configured (relative paths are not resolved).
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// Reads the stylesheet and renders it on `surface`.
    ///
    /// The surface receives exactly one call carrying the full file contents.
    ///
    /// # Errors
    ///
    /// - [`StyleError::NotFound`] if no file exists at the path
    /// - [`StyleError::Unreadable`] if the file exists but cannot be read as UTF-8 text
    /// - [`StyleError::Render`] if the surface itself fails
    ///
    /// On a read error the surface is never called.
    pub fn apply_style<S>(&self, surface: &mut S) -> Result<()>
    where
        S: RenderSurface + ?Sized,
    {
        let path = self.path();
        let content = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read stylesheet");
            StyleError::from_read(path, e)
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read stylesheet");

        surface
            .render_markup(&content)
            .map_err(|source| StyleError::Render { source })?;
        debug!(path = %path.display(), "stylesheet rendered");
        Ok(())
    }
}

/// Applies `./styles.html` to `surface`.
///
/// Shorthand for `StyleInjector::new().apply_style(surface)`.
pub fn apply_style<S>(surface: &mut S) -> Result<()>
where
    S: RenderSurface + ?Sized,
{
    StyleInjector::new().apply_style(surface)
}

/// Applies the stylesheet at `path` to `surface`.
pub fn apply_style_from<S>(path: impl AsRef<Path>, surface: &mut S) -> Result<()>
where
    S: RenderSurface + ?Sized,
{
    StyleInjector::with_path(path.as_ref()).apply_style(surface)
}
