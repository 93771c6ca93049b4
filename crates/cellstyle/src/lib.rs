//! # cellstyle - stylesheet injection for notebook output
//!
//! `cellstyle` reads a style-definition file (by default `./styles.html`) and
//! hands its contents, untouched, to a [`RenderSurface`]. In an evcxr Jupyter
//! kernel the [`NotebookSurface`] emits the markup as `text/html` rich output,
//! so every cell rendered afterwards picks up the styling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cellstyle::{apply_style, NotebookSurface};
//!
//! let mut surface = NotebookSurface::stdout();
//! apply_style(&mut surface)?;
//! # Ok::<(), cellstyle::StyleError>(())
//! ```
//!
//! ## Explicit paths and test doubles
//!
//! The host display is an injected dependency. Tests (and anything else that
//! wants to observe what would be rendered) can pass a [`RecordingSurface`]:
//!
//! ```rust,no_run
//! use cellstyle::{RecordingSurface, StyleInjector};
//!
//! let injector = StyleInjector::with_path("assets/notebook.html");
//! let mut recorder = RecordingSurface::new();
//! injector.apply_style(&mut recorder)?;
//! assert_eq!(recorder.len(), 1);
//! # Ok::<(), cellstyle::StyleError>(())
//! ```
//!
//! ## Errors
//!
//! A missing file fails with [`StyleError::NotFound`], a file that exists but
//! cannot be read as text fails with [`StyleError::Unreadable`]. In both cases
//! nothing is rendered.

pub mod config;
mod error;
mod injector;
pub mod surface;

pub use config::{ConfigError, InjectorConfig, DEFAULT_STYLE_PATH};
pub use error::{Result, StyleError};
pub use injector::{apply_style, apply_style_from, StyleInjector};
pub use surface::{NotebookSurface, RecordingSurface, RenderSurface};
