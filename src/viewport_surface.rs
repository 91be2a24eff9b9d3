//! egui-backed presentation surfaces.
//!
//! Every open native window is an egui viewport. Applying a directive sets the
//! context-wide theme preference (shared by all viewports) and tells the
//! window itself which decoration theme to use.

use egui::{ViewportCommand, ViewportId};

use crate::appearance::DisplayDirective;
use crate::surface::{Surface, SurfaceId, SurfaceRegistry};

/// One egui viewport seen as a presentation surface.
pub struct ViewportSurface {
    ctx: egui::Context,
    viewport: ViewportId,
    id: SurfaceId,
    /// Last directive sent to this viewport
    applied: Option<DisplayDirective>,
}

impl std::fmt::Debug for ViewportSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSurface")
            .field("viewport", &self.viewport)
            .field("id", &self.id)
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

impl ViewportSurface {
    pub fn viewport(&self) -> ViewportId {
        self.viewport
    }

    pub fn applied_directive(&self) -> Option<DisplayDirective> {
        self.applied
    }
}

impl Surface for ViewportSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn apply_display_directive(&mut self, directive: DisplayDirective) {
        if self.applied == Some(directive) {
            log::debug!("Viewport {:?} already uses {:?}", self.viewport, directive);
            return;
        }

        self.ctx.set_theme(egui::ThemePreference::from(directive));
        self.ctx
            .send_viewport_cmd_to(self.viewport, ViewportCommand::SetTheme(directive.into()));
        self.applied = Some(directive);
        log::debug!("Applied {:?} to viewport {:?}", directive, self.viewport);
    }
}

/// Tracks the viewports that are currently open.
///
/// The root viewport is attached on construction; additional windows are
/// attached when they open and detached when they close.
pub struct ViewportRegistry {
    ctx: egui::Context,
    surfaces: Vec<ViewportSurface>,
    next_id: SurfaceId,
}

impl ViewportRegistry {
    /// Creates a registry with the root viewport attached.
    pub fn new(ctx: egui::Context) -> Self {
        let mut registry = Self {
            ctx,
            surfaces: Vec::new(),
            next_id: 0,
        };
        registry.attach(ViewportId::ROOT);
        registry
    }

    /// Registers a viewport, returning its surface id. Attaching an already
    /// attached viewport returns the existing id.
    pub fn attach(&mut self, viewport: ViewportId) -> SurfaceId {
        if let Some(surface) = self.surfaces.iter().find(|s| s.viewport == viewport) {
            return surface.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.surfaces.push(ViewportSurface {
            ctx: self.ctx.clone(),
            viewport,
            id,
            applied: None,
        });
        id
    }

    /// Forgets a closed viewport. Returns false if it was not attached.
    pub fn detach(&mut self, viewport: ViewportId) -> bool {
        let before = self.surfaces.len();
        self.surfaces.retain(|s| s.viewport != viewport);
        self.surfaces.len() != before
    }

    pub fn is_attached(&self, viewport: ViewportId) -> bool {
        self.surfaces.iter().any(|s| s.viewport == viewport)
    }

    pub fn surfaces(&self) -> &[ViewportSurface] {
        &self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceRegistry for ViewportRegistry {
    fn active_surfaces(&mut self) -> Vec<&mut dyn Surface> {
        let mut active: Vec<&mut dyn Surface> = Vec::with_capacity(self.surfaces.len());
        for surface in self.surfaces.iter_mut() {
            active.push(surface);
        }
        active
    }
}
