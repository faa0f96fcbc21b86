//! `pinmap` plots line-oriented coordinate records on an interactive world map.
//!
//! Each input line holds a latitude, a longitude and a label separated by a
//! tab or a comma. The records are rendered into a standalone Leaflet page,
//! written to disk and opened with the system's default browser.
//!
//! # Example
//!
//! ```rust
//! use pinmap::parser::{parse_str, Separator};
//! use pinmap::render::MapDocument;
//!
//! let markers = parse_str("48.8566\t2.3522\tParis\n", Separator::Tab);
//! let page = MapDocument::new("Trip", markers).render();
//!
//! assert!(page.contains("<title>Trip</title>"));
//! assert!(page.contains("L.marker([48.8566, 2.3522], {})"));
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod launcher;
pub mod parser;
pub mod render;

pub use app::{generate, run, RunOptions};
pub use error::MapError;
pub use launcher::{Launcher, SystemLauncher};
pub use parser::{Marker, Separator};
pub use render::MapDocument;
