//! Static diagram descriptors.
//!
//! Every type here borrows `'static` data from [`super::catalog`] and is
//! never mutated after construction.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== LayerKey =====

/// Identifier of an expandable layer section, in display order.
///
/// The microservices tier is always shown in full and has no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKey {
    Presentation,
    Application,
    Data,
}

impl LayerKey {
    /// All keys in the order their sections appear on the page.
    pub const ALL: [LayerKey; 3] = [LayerKey::Presentation, LayerKey::Application, LayerKey::Data];

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            LayerKey::Presentation => "presentation",
            LayerKey::Application => "application",
            LayerKey::Data => "data",
        }
    }

    /// Zero-based position in [`LayerKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            LayerKey::Presentation => 0,
            LayerKey::Application => 1,
            LayerKey::Data => 2,
        }
    }

    /// Digit shown in the header label and bound to the toggle key.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Next key in display order, wrapping after the last one.
    pub fn next(self) -> LayerKey {
        LayerKey::ALL[(self.index() + 1) % LayerKey::ALL.len()]
    }

    /// Previous key in display order, wrapping before the first one.
    pub fn prev(self) -> LayerKey {
        let len = LayerKey::ALL.len();
        LayerKey::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown layer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layer '{0}' (expected one of: presentation, application, data)")]
pub struct ParseLayerKeyError(pub String);

impl FromStr for LayerKey {
    type Err = ParseLayerKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        LayerKey::ALL
            .into_iter()
            .find(|key| key.as_str() == needle)
            .ok_or_else(|| ParseLayerKeyError(s.to_string()))
    }
}

// ===== Accent =====

/// Named palette color attached to a section.
///
/// The view decides how each accent maps to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Indigo,
}

// ===== Layers =====

/// One microservice box inside the services tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceModule {
    pub name: &'static str,
    pub features: &'static [&'static str],
}

/// An expandable layer section whose items show only while it is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerDescriptor {
    pub key: LayerKey,
    pub title: &'static str,
    pub accent: Accent,
    pub items: &'static [&'static str],
}

/// The microservices tier. Every module is always rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesDescriptor {
    pub title: &'static str,
    pub accent: Accent,
    pub modules: &'static [ServiceModule],
}

/// One tier of the architecture stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayerSection {
    /// Header that toggles a list of component labels.
    Layer(LayerDescriptor),
    /// Static block of named modules.
    Services(ServicesDescriptor),
}

// ===== Other sections =====

/// A "Core Features" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// One column of the Excel migration plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationColumn {
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
}

/// One category of the recommended tech stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechStackEntry {
    pub category: &'static str,
    pub accent: Accent,
    pub labels: &'static [&'static str],
}

/// The whole page: every section in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Tiers in display order.
    pub sections: &'static [LayerSection],
    pub features: &'static [FeatureDescriptor],
    pub migration_title: &'static str,
    pub migration: &'static [MigrationColumn],
    pub tech_stack: &'static [TechStackEntry],
    pub next_steps: &'static [&'static str],
}

impl Diagram {
    /// Expandable layers in display order.
    pub fn layers(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.sections.iter().filter_map(|section| match section {
            LayerSection::Layer(layer) => Some(layer),
            LayerSection::Services(_) => None,
        })
    }

    /// Look up the descriptor for a layer key.
    pub fn layer(&self, key: LayerKey) -> Option<&LayerDescriptor> {
        self.layers().find(|layer| layer.key == key)
    }

    /// The microservices tier, if the diagram has one.
    pub fn services(&self) -> Option<&ServicesDescriptor> {
        self.sections.iter().find_map(|section| match section {
            LayerSection::Services(services) => Some(services),
            LayerSection::Layer(_) => None,
        })
    }
}
