//! Appearance preference controller.
//!
//! Owns the current [`AppearanceChoice`], mirrors it into a [`PreferenceStore`],
//! and pushes the matching [`DisplayDirective`] to every active surface.
//!
//! The controller is confined to the UI thread: it holds non-`Send`
//! subscriber callbacks, so it cannot be moved to another thread.
//!
//! # Examples
//!
//! ```
//! use rdarkmode::{AppearanceChoice, AppearanceController, MemoryStore, PersistedCode, ViewportRegistry};
//!
//! let store = MemoryStore::new();
//! let registry = ViewportRegistry::new(egui::Context::default());
//! let mut controller = AppearanceController::new(Box::new(store.clone()), registry);
//!
//! controller.initialize();
//! assert_eq!(controller.current_choice(), AppearanceChoice::FollowSystem);
//!
//! controller.select(AppearanceChoice::Dark);
//! assert_eq!(store.read_code(), Some(PersistedCode::Integer(2)));
//! ```

use crate::appearance::{AppearanceChoice, CodeFormat, DisplayDirective};
use crate::store::PreferenceStore;
use crate::surface::SurfaceRegistry;

/// Handle returned by [`AppearanceController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(AppearanceChoice)>;

pub struct AppearanceController<R: SurfaceRegistry> {
    choice: AppearanceChoice,
    store: Box<dyn PreferenceStore>,
    format: CodeFormat,
    registry: R,
    /// Directive most recently pushed to the registry
    applied: Option<DisplayDirective>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<R: SurfaceRegistry> std::fmt::Debug for AppearanceController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceController")
            .field("choice", &self.choice)
            .field("format", &self.format)
            .field("applied", &self.applied)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<R: SurfaceRegistry> AppearanceController<R> {
    /// Creates a controller that writes integer codes.
    ///
    /// The choice stays at the default until [`initialize`](Self::initialize)
    /// reads the store.
    pub fn new(store: Box<dyn PreferenceStore>, registry: R) -> Self {
        Self {
            choice: AppearanceChoice::default(),
            store,
            format: CodeFormat::default(),
            registry,
            applied: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Sets the format used when writing codes.
    pub fn with_format(mut self, format: CodeFormat) -> Self {
        self.format = format;
        self
    }

    // ===== Lifecycle =====

    /// Loads the saved choice and applies it to every active surface.
    ///
    /// Call once at startup before anything renders. Calling it again re-reads
    /// the store and re-applies the same directive.
    pub fn initialize(&mut self) {
        let stored = self.store.read();
        self.choice = AppearanceChoice::decode(stored.as_ref());
        log::info!("Appearance initialized to {} (stored: {:?})", self.choice, stored);
        self.apply_current();
    }

    // ===== Queries =====

    pub fn current_choice(&self) -> AppearanceChoice {
        self.choice
    }

    /// The directive most recently applied, or `None` before the first apply.
    pub fn applied_directive(&self) -> Option<DisplayDirective> {
        self.applied
    }

    pub fn format(&self) -> CodeFormat {
        self.format
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access for attaching and detaching surfaces. Call
    /// [`apply_current`](Self::apply_current) after attaching a surface.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    // ===== Mutations =====

    /// Makes `choice` current, persists it, applies it to every surface, then
    /// notifies subscribers.
    pub fn select(&mut self, choice: AppearanceChoice) {
        if choice != self.choice {
            log::info!("Appearance changed from {} to {}", self.choice, choice);
        }
        self.choice = choice;
        self.store.write(choice.encode(self.format));
        self.apply_current();

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(choice);
        }
    }

    /// Pushes the current directive to every active surface.
    pub fn apply_current(&mut self) {
        let directive = self.choice.directive();
        let surfaces = self.registry.active_surfaces();
        log::debug!("Applying {:?} to {} surface(s)", directive, surfaces.len());
        for surface in surfaces {
            surface.apply_display_directive(directive);
        }
        self.applied = Some(directive);
    }

    // ===== Change notification =====

    /// Registers a callback invoked after every [`select`](Self::select).
    pub fn subscribe(&mut self, subscriber: impl FnMut(AppearanceChoice) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a callback. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}
