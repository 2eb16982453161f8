//! View-state layer - document layout, scrolling bounds and hit-testing
//!
//! Everything here is pure: it computes what the view draws and where,
//! without touching the terminal.
//!
//! # Module Structure
//!
//! - `types`: ViewportDimensions
//! - `document`: DiagramDocument - the full page as styled lines plus header positions
//! - `hit_test`: HitTestResult - mapping mouse coordinates to layer headers

pub mod document;
pub mod types;

pub use document::{build_document, DiagramDocument, DocumentParams, HeaderRow};
pub use hit_test::{hit_test, HitTestResult};
pub use types::ViewportDimensions;
