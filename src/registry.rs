//! Canonical registry builder.
//!
//! Provides the single function that constructs the fully populated utility
//! registry, for both production and test use. The registry is built once at
//! process start and never mutated at run time; stylesheets cannot register
//! utilities dynamically.

use once_cell::sync::Lazy;

use crate::utilities::{UtilityKind, UtilityRegistry};

/// Builds a registry with every standard utility registered, together with
/// the argument counts each one accepts.
pub fn build_default_utility_registry() -> UtilityRegistry {
    let mut registry = UtilityRegistry::new();

    registry.register("truncate", UtilityKind::Truncate, 0, 2);
    registry.register("reset-list", UtilityKind::ResetList, 0, 0);
    registry.register("hide-visually", UtilityKind::HideVisually, 0, 0);
    registry.register("clearfix", UtilityKind::Clearfix, 0, 1);
    registry.register("text-hide", UtilityKind::TextHide, 0, 0);
    registry.register("triangle", UtilityKind::Triangle, 3, 4);
    registry.register("size", UtilityKind::Size, 1, 2);
    registry.register("word-wrap", UtilityKind::WordWrap, 0, 1);
    registry.register("sticky-footer", UtilityKind::StickyFooter, 1, 1);
    registry.register("reset-text", UtilityKind::ResetText, 0, 0);
    registry.register("border-color", UtilityKind::BorderColor, 1, 4);
    registry.register("border-style", UtilityKind::BorderStyle, 1, 4);
    registry.register("border-width", UtilityKind::BorderWidth, 1, 4);
    registry.register("padding", UtilityKind::Padding, 1, 4);
    registry.register("margin", UtilityKind::Margin, 1, 4);
    registry.register("border-radius", UtilityKind::BorderRadius, 1, 4);
    registry.register("position", UtilityKind::Position, 1, 4);
    registry.register("text-stroke", UtilityKind::TextStroke, 2, 2);
    registry.register("hd", UtilityKind::Hd, 0, 1);

    registry
}

static DEFAULT_REGISTRY: Lazy<UtilityRegistry> = Lazy::new(build_default_utility_registry);

/// The process-wide registry. Read-only, safe to share across concurrent
/// runs on independent trees.
pub fn default_registry() -> &'static UtilityRegistry {
    &DEFAULT_REGISTRY
}
