//! Domain model types (pure).
//!
//! All types in this module are immutable `'static` data plus the
//! user-intent actions the shell maps keys onto.

pub mod catalog;
pub mod key_action;
pub mod layer;

// Re-export for convenience
pub use catalog::diagram;
pub use key_action::KeyAction;
pub use layer::{
    Accent, Diagram, FeatureDescriptor, LayerDescriptor, LayerKey, LayerSection, MigrationColumn,
    ParseLayerKeyError, ServiceModule, ServicesDescriptor, TechStackEntry,
};
