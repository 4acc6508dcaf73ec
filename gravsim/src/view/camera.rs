//! Pan/zoom camera mapping world coordinates to screen pixels.
//!
//! The engine never sees screen space; a front end keeps one of these and
//! converts mouse positions with [`Camera::screen_to_world`] before calling
//! into the engine.

use crate::simulation::states::NVec2;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    offset: NVec2, // world point shown at the viewport center
    zoom: f64,
    viewport_center: NVec2, // in pixels
}

impl Camera {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            offset: NVec2::zeros(),
            zoom: 1.0,
            viewport_center: NVec2::new(viewport_width / 2.0, viewport_height / 2.0),
        }
    }

    pub fn offset(&self) -> NVec2 {
        self.offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn world_to_screen(&self, world: NVec2) -> NVec2 {
        (world - self.offset) * self.zoom + self.viewport_center
    }

    pub fn screen_to_world(&self, screen: NVec2) -> NVec2 {
        (screen - self.viewport_center) / self.zoom + self.offset
    }

    pub fn pan(&mut self, screen_delta: NVec2) {
        self.offset -= screen_delta / self.zoom;
    }

    /// Multiply the zoom by `factor`, keeping the world point under
    /// `screen` fixed on screen
    pub fn zoom_at(&mut self, screen: NVec2, factor: f64) {
        let anchor = self.screen_to_world(screen);
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

        let change = self.zoom / old_zoom;
        self.offset = anchor - (anchor - self.offset) / change;
    }

    /// Look at `point` with the default zoom
    pub fn center_on(&mut self, point: NVec2) {
        self.offset = point;
        self.zoom = 1.0;
    }
}
