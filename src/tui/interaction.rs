//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer. A
//! region that wins a click hides every region beneath it, which is how a
//! badge or the clear control keeps the click from reaching the container.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("select_clear", bounds, Action::Clear(0))
//!         .with_priority(CONTROL_PRIORITY),
//! );
//!
//! let action = registry.handle_click(x, y);
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Priority of a field's container.
pub const CONTAINER_PRIORITY: i32 = 0;
/// Priority of badges and the clear control inside a container.
pub const CONTROL_PRIORITY: i32 = 10;
/// Priority of the open option list, which draws over other fields.
pub const LIST_PRIORITY: i32 = 20;

/// A screen rectangle used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch when the pointer moves over it (None = no hover)
    pub on_hover: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_hover: None,
            priority: 0,
        }
    }

    /// Create a region that reacts to both clicks and hover
    pub fn interactive(
        id: &'static str,
        bounds: ClickRegion,
        on_click: Action,
        on_hover: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(on_click),
            on_hover: Some(on_hover),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Whether any region covers the point, handler or not
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.regions.iter().any(|r| r.contains(x, y))
    }

    /// Action for a click at (x, y).
    ///
    /// Only the topmost region under the pointer is considered; if it has no
    /// click handler the click is swallowed.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y)
            .and_then(|r| r.on_click.clone())
            .unwrap_or(Action::None)
    }

    /// Action for pointer movement to (x, y), from the topmost region.
    pub fn handle_hover(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y)
            .and_then(|r| r.on_hover.clone())
            .unwrap_or(Action::None)
    }

    /// Highest-priority region containing the point; later registrations win ties.
    fn topmost(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority)
    }
}
