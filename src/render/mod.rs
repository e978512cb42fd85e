//! Diagram output: Mermaid markup and the standalone HTML page

pub mod html;
pub mod mermaid;

pub use html::{render_screens_page, render_sheets_page};
pub use mermaid::{fenced, render as render_mermaid};
