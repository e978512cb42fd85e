//! ReqFlow - flow diagrams from requirement spreadsheets
//!
//! Reads an Excel workbook of application requirements and produces a
//! Mermaid flowchart plus a standalone HTML page showing the diagram next to
//! the source sheets.
//!
//! # Pipeline
//!
//! 1. [`excel::WorkbookLoader`] loads every sheet (headers + rows)
//! 2. [`extract::extract_screens`] collects distinct `Screen Name` values
//! 3. [`topology`] maps screens onto the fixed module graph, or reads each
//!    sheet as an adjacency list
//! 4. [`render`] serializes the graph to Mermaid and HTML
//!
//! # Example
//!
//! ```no_run
//! use reqflow::excel::WorkbookLoader;
//! use reqflow::extract::extract_screens;
//! use reqflow::render::{fenced, render_mermaid};
//! use reqflow::topology::{build_user_flow, Flavor};
//!
//! let workbook = WorkbookLoader::new("docs/Requirment Document .xlsx").load()?;
//! let screens = workbook
//!     .sheet("Requirment Document")
//!     .map(extract_screens)
//!     .unwrap_or_default();
//!
//! let graph = build_user_flow(&screens, Flavor::Markup);
//! println!("{}", fenced(&render_mermaid(&graph)));
//! # Ok::<(), reqflow::error::FlowError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod render;
pub mod topology;
pub mod types;

// Re-export commonly used types
pub use error::{FlowError, FlowResult};
pub use types::{CellValue, FlowGraph, GraphEdge, GraphNode, Sheet, Workbook};
