//! Browser bindings for the extraction controller.
//!
//! # Services
//!
//! - [`upload`] - multipart POST to `/upload_and_extract`
//! - [`progress`] - `EventSource` on `/progress`
//! - [`view`] - Leptos signals behind the controller's view trait

pub mod upload;
pub mod progress;
pub mod view;

pub use upload::*;
pub use progress::*;
pub use view::*;
