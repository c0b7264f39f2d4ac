//! Filters applied while building trees and tables.

use serde::{Deserialize, Serialize};

use super::Renderable;

/// Decides whether a renderable is shown.
pub type Predicate<'p> = &'p dyn Fn(&dyn Renderable) -> bool;

/// Accept everything.
pub fn all(_: &dyn Renderable) -> bool {
    true
}

/// Accept entities that are not deprecated.
pub fn not_deprecated(item: &dyn Renderable) -> bool {
    !item.is_deprecated()
}

/// Accept deprecated entities and the ancestors of deprecated entities.
///
/// Used for "deprecated only" trees, so that a deprecated attribute is
/// still reachable through its non-deprecated element and module.
pub fn deprecated_or_has_deprecated_descendant(item: &dyn Renderable) -> bool {
    item.is_deprecated()
        || item
            .children()
            .into_iter()
            .any(deprecated_or_has_deprecated_descendant)
}

/// Accept only entities that are themselves deprecated.
pub fn deprecated(item: &dyn Renderable) -> bool {
    item.is_deprecated()
}

/// Which entities to show, by deprecation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeprecationFilter {
    /// Show everything
    #[default]
    Show,
    /// Hide deprecated entities
    Hide,
    /// Show only deprecated entities
    Only,
}

impl DeprecationFilter {
    /// Predicate for trees, where ancestors of deprecated entities are kept.
    pub fn tree_predicate(&self) -> fn(&dyn Renderable) -> bool {
        match self {
            DeprecationFilter::Show => all,
            DeprecationFilter::Hide => not_deprecated,
            DeprecationFilter::Only => deprecated_or_has_deprecated_descendant,
        }
    }

    /// Predicate for flat tables of rows.
    pub fn row_predicate(&self) -> fn(&dyn Renderable) -> bool {
        match self {
            DeprecationFilter::Show => all,
            DeprecationFilter::Hide => not_deprecated,
            DeprecationFilter::Only => deprecated,
        }
    }
}
