//! Data grid rendering for Reinhardt
//!
//! This crate renders a tabular data grid (header, filter row, data rows,
//! footer, pagination and bulk-operation controls) to HTML. Every region is
//! built from an overridable set of markup specs, the "wrappers", so the
//! produced markup can be restyled without touching the rendering code.
//!
//! # Features
//!
//! - **Wrappers**: region → markup-spec tree, overridable at any path
//! - **Multi-column sorting**: direction classes and precedence badges
//! - **Filters**: per-column text or select filters in a dedicated row
//! - **Bulk operations**: per-row checkers with an operation selector
//! - **Row actions**: action columns with row-scoped links
//! - **Configuration**: TOML overlays for wrappers and format strings
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataGridRenderer] --> B[RendererConfig]
//!     B --> C[WrapperRegistry]
//!     A --> D[ElementFactory]
//!     A --> E[Regions]
//!     E --> F[Header]
//!     E --> G[Filter]
//!     E --> H[Content]
//!     E --> I[Footer]
//!     I --> J[Operations]
//!     I --> K[Paginator]
//!     I --> L[Info]
//!     F --> M[SortState]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_datagrid::{DataGrid, DataGridRenderer, GridColumn, RecordSource};
//! use serde_json::json;
//!
//! let mut grid = DataGrid::new();
//! grid.add_column(GridColumn::new("id", "ID")).unwrap();
//! grid.add_column(GridColumn::new("name", "Name")).unwrap();
//! grid.set_order("name=a");
//! grid.set_data_source(RecordSource::from_values(vec![
//!     json!({"id": 1, "name": "Alice"}),
//!     json!({"id": 2, "name": "Bob"}),
//! ]));
//!
//! let html = DataGridRenderer::new().render(&grid, None).unwrap();
//! assert!(html.contains(r#"class="datagrid-ajax asc">Name</a>"#));
//! assert!(html.contains(r#"<tr class="even">"#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod column;
pub mod config;
pub mod element;
pub mod error;
pub mod form;
pub mod grid;
pub mod html;
pub mod links;
pub mod pagination;
mod regions;
pub mod renderer;
pub mod sorting;
pub mod translation;
pub mod wrapper;

// Re-exports for convenience
pub use action::Action;
pub use column::{CellFormatter, ColumnFilter, ColumnKind, FilterKind, GridColumn, TextFormatter};
pub use config::RendererConfig;
pub use element::{ElementFactory, ElementNode};
pub use error::{DataGridError, Result};
pub use form::{FormControl, FormError, GridForm};
pub use grid::{DataGrid, DataSource, Record, RecordSource};
pub use links::{LinkGenerator, QueryLinkGenerator};
pub use pagination::PaginationState;
pub use renderer::{DataGridRenderer, RenderMode};
pub use sorting::{SortDirection, SortKey, SortState};
pub use translation::{MessageCatalog, Translator};
pub use wrapper::{WrapperPath, WrapperRegistry, WrapperSpec};
