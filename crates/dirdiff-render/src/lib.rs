//! Rendering of dirdiff comparison reports.
//!
//! Both renderers are pure consumers of the engine's `DiffResult`: they
//! format, they never compare. Terminal output is colored via `colored`
//! (callers toggle color globally with `colored::control::set_override`);
//! the HTML renderer produces one self-contained document.
//!
//! # Key Types
//!
//! - [`render_text`] -- Colored terminal report
//! - [`render_html`] -- Standalone HTML report
//! - [`human_size`] -- Byte counts for humans

pub mod bytes;
pub mod html;
pub mod terminal;

pub use bytes::human_size;
pub use html::render_html;
pub use terminal::render_text;
