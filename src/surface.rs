//! Presentation surface abstraction.
//!
//! A surface is a top-level window the appearance directive is applied to.
//! The controller only talks to these traits, never to a window system.

use crate::appearance::DisplayDirective;

/// Identifier of a presentation surface, unique within its registry.
pub type SurfaceId = u64;

/// A top-level window that can be told how to render.
pub trait Surface {
    fn id(&self) -> SurfaceId;

    /// Sets the rendering mode. Applying the directive the surface already has
    /// must not cause any visible change.
    fn apply_display_directive(&mut self, directive: DisplayDirective);
}

/// Enumerates the surfaces that are open right now.
pub trait SurfaceRegistry {
    fn active_surfaces(&mut self) -> Vec<&mut dyn Surface>;
}
