//! Corner placement for the floating panel (pure Rust, no FFI).
//!
//! The panel sits in one of four screen corners and hops to the next corner
//! (clockwise on screen: bottom-left, top-left, top-right, bottom-right)
//! whenever the pointer enters it. A move is a two-phase transition:
//!
//! ```text
//!   Idle(c) --hover--> Moving(c -> c+1) --animation done--> Cooldown --delay--> Idle(c+1)
//! ```
//!
//! Hover while `Moving` or `Cooldown` is dropped. Every move gets a new
//! generation number; completion and cooldown signals carrying an older
//! generation are ignored, so a late timer from a superseded move cannot
//! unlock the controller early.
//!
//! The platform layer owns the actual window and timers. It feeds the
//! controller with events and applies the [`PlacementMove`]s it returns.

use tracing::{debug, info, warn};

use crate::error::PlacementRejected;
use crate::model::constants::{CITY_ROW_HEIGHT, CONTENT_SPACING, PANEL_WIDTH, SCREEN_PADDING};

/// One of the four screen corners.
///
/// The discriminants are the persisted/logged corner indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
}

impl Corner {
    /// All corners in advance order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    /// Corner index in `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Corner {
        Corner::ALL[index % 4]
    }

    /// The corner a hover moves to: `(index + 1) mod 4`.
    pub fn next(self) -> Corner {
        Corner::from_index(self.index() + 1)
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Corner::BottomLeft => "bottom-left",
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// A point in screen coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Panel size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible bounds of a screen (menu bar and Dock excluded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ScreenBounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds bounds from an origin and a size, as AppKit reports frames.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }
}

/// Panel height for `city_count` rows: rows plus the gaps between them.
pub fn window_height(city_count: usize) -> f64 {
    if city_count == 0 {
        return 0.0;
    }
    city_count as f64 * CITY_ROW_HEIGHT + (city_count - 1) as f64 * CONTENT_SPACING
}

/// Panel size for `city_count` rows.
pub fn panel_size(city_count: usize) -> Size {
    Size::new(PANEL_WIDTH, window_height(city_count))
}

/// Origin of the panel frame when placed in `corner`.
pub fn corner_origin(corner: Corner, bounds: ScreenBounds, size: Size, padding: f64) -> Point {
    let left = bounds.min_x + padding;
    let right = bounds.max_x - size.width - padding;
    let bottom = bounds.min_y + padding;
    let top = bounds.max_y - size.height - padding;

    match corner {
        Corner::BottomLeft => Point::new(left, bottom),
        Corner::TopLeft => Point::new(left, top),
        Corner::TopRight => Point::new(right, top),
        Corner::BottomRight => Point::new(right, bottom),
    }
}

/// Which screen the panel should live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTarget {
    /// Index into the current screen list.
    Index(usize),
    /// The system's main screen.
    Main,
}

/// Picks the preferred screen when it still exists, else the main screen.
pub fn choose_screen(preferred: Option<usize>, screen_count: usize) -> ScreenTarget {
    match preferred {
        Some(index) if index < screen_count => ScreenTarget::Index(index),
        _ => ScreenTarget::Main,
    }
}

/// Phase of the placement state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Moving { from: Corner, to: Corner },
    Cooldown,
}

/// A frame change the platform layer must animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementMove {
    pub from: Corner,
    pub to: Corner,
    pub origin: Point,
    /// Echo this back through [`PlacementController::on_animation_complete`].
    pub generation: u64,
}

/// Handed out when a move settles; echo it back when the cooldown expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownTicket {
    pub generation: u64,
}

/// Owns the panel's corner and the move lock.
#[derive(Debug, Clone)]
pub struct PlacementController {
    corner: Corner,
    phase: Phase,
    generation: u64,
    padding: f64,
}

impl Default for PlacementController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementController {
    /// Starts idle in the top-left corner.
    pub fn new() -> Self {
        Self::with_padding(SCREEN_PADDING)
    }

    /// Starts idle in the top-left corner with a custom edge padding.
    pub fn with_padding(padding: f64) -> Self {
        Self {
            corner: Corner::TopLeft,
            phase: Phase::Idle,
            generation: 0,
            padding,
        }
    }

    /// The corner the panel is authoritatively in.
    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a move or its cooldown is in progress.
    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Origin for the current corner, without starting a move.
    pub fn origin_for(&self, bounds: ScreenBounds, size: Size) -> Point {
        corner_origin(self.corner, bounds, size, self.padding)
    }

    /// First, non-animated placement at the current corner.
    pub fn place_initial(
        &self,
        screen: Option<ScreenBounds>,
        size: Size,
    ) -> Result<Point, PlacementRejected> {
        let Some(bounds) = screen else {
            warn!("no screen available for initial placement");
            return Err(PlacementRejected::NoScreen);
        };
        let origin = self.origin_for(bounds, size);
        info!(corner = self.corner.name(), x = origin.x, y = origin.y, "initial placement");
        Ok(origin)
    }

    /// Pointer entered the panel: advance to the next corner unless locked.
    pub fn on_hover_enter(
        &mut self,
        screen: Option<ScreenBounds>,
        size: Size,
    ) -> Result<PlacementMove, PlacementRejected> {
        if self.is_locked() {
            debug!(phase = ?self.phase, "hover ignored while locked");
            return Err(PlacementRejected::Busy);
        }
        let Some(bounds) = screen else {
            warn!("no screen available, move aborted");
            return Err(PlacementRejected::NoScreen);
        };

        let to = self.corner.next();
        Ok(self.begin_move(self.corner, to, bounds, size))
    }

    /// The screen (or the panel size) changed: re-place at the current corner.
    ///
    /// Applied even while locked; if a move is in flight the re-placement
    /// targets that move's destination and supersedes it.
    pub fn on_screen_changed(
        &mut self,
        screen: Option<ScreenBounds>,
        size: Size,
    ) -> Result<PlacementMove, PlacementRejected> {
        let Some(bounds) = screen else {
            warn!("no screen available, re-placement aborted");
            return Err(PlacementRejected::NoScreen);
        };

        let target = match self.phase {
            Phase::Moving { to, .. } => to,
            Phase::Idle | Phase::Cooldown => self.corner,
        };
        Ok(self.begin_move(self.corner, target, bounds, size))
    }

    /// The move animation settled. Returns the ticket for the cooldown timer,
    /// or `None` when the signal belongs to a superseded move.
    pub fn on_animation_complete(&mut self, generation: u64) -> Option<CooldownTicket> {
        match self.phase {
            Phase::Moving { to, .. } if generation == self.generation => {
                self.corner = to;
                self.phase = Phase::Cooldown;
                debug!(corner = to.name(), generation, "move settled, cooling down");
                Some(CooldownTicket { generation })
            }
            _ => {
                debug!(generation, current = self.generation, "stale animation completion");
                None
            }
        }
    }

    /// The cooldown after a move expired.
    pub fn on_cooldown_elapsed(&mut self, ticket: CooldownTicket) {
        if self.phase == Phase::Cooldown && ticket.generation == self.generation {
            self.phase = Phase::Idle;
            debug!(corner = self.corner.name(), "placement unlocked");
        }
    }

    fn begin_move(&mut self, from: Corner, to: Corner, bounds: ScreenBounds, size: Size) -> PlacementMove {
        self.generation += 1;
        self.phase = Phase::Moving { from, to };
        let origin = corner_origin(to, bounds, size, self.padding);
        info!(
            from = from.name(),
            to = to.name(),
            x = origin.x,
            y = origin.y,
            generation = self.generation,
            "moving panel"
        );
        PlacementMove {
            from,
            to,
            origin,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hd_screen() -> Option<ScreenBounds> {
        Some(ScreenBounds::new(0.0, 0.0, 1920.0, 1080.0))
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Corner::BottomRight.next(), Corner::BottomLeft);
        assert_eq!(Corner::TopLeft.next(), Corner::TopRight);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Corner::from_index(5), Corner::TopLeft);
    }

    #[test]
    fn test_window_height_for_zero_cities_is_zero() {
        assert_eq!(window_height(0), 0.0);
        assert_eq!(window_height(1), 28.0);
    }

    #[test]
    fn test_choose_screen_falls_back_to_main() {
        assert_eq!(choose_screen(Some(1), 2), ScreenTarget::Index(1));
        assert_eq!(choose_screen(Some(2), 2), ScreenTarget::Main);
        assert_eq!(choose_screen(None, 3), ScreenTarget::Main);
    }

    #[test]
    fn test_full_cycle_returns_to_idle_at_next_corner() {
        let mut ctl = PlacementController::new();
        let size = Size::new(300.0, 112.0);

        let mv = ctl.on_hover_enter(hd_screen(), size).unwrap();
        assert_eq!(mv.to, Corner::TopRight);
        assert_eq!(ctl.corner(), Corner::TopLeft);

        let ticket = ctl.on_animation_complete(mv.generation).unwrap();
        assert_eq!(ctl.corner(), Corner::TopRight);
        assert_eq!(ctl.phase(), Phase::Cooldown);

        ctl.on_cooldown_elapsed(ticket);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_missing_screen_keeps_idle_state() {
        let mut ctl = PlacementController::new();
        let err = ctl.on_hover_enter(None, Size::new(300.0, 154.0)).unwrap_err();
        assert_eq!(err, PlacementRejected::NoScreen);
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.corner(), Corner::TopLeft);
    }

    #[test]
    fn test_stale_cooldown_does_not_unlock_newer_move() {
        let mut ctl = PlacementController::new();
        let size = Size::new(300.0, 112.0);

        let first = ctl.on_hover_enter(hd_screen(), size).unwrap();
        let old_ticket = ctl.on_animation_complete(first.generation).unwrap();

        // Screen changes during the cooldown; a new move starts.
        let second = ctl.on_screen_changed(hd_screen(), size).unwrap();
        assert_eq!(second.from, Corner::TopRight);
        assert_eq!(second.to, Corner::TopRight);
        assert_eq!(ctl.corner(), Corner::TopRight);
        ctl.on_cooldown_elapsed(old_ticket);
        assert!(ctl.is_locked());

        let ticket = ctl.on_animation_complete(second.generation).unwrap();
        ctl.on_cooldown_elapsed(ticket);
        assert!(!ctl.is_locked());
    }
}
