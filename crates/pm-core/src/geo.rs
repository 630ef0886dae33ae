//! Path geometry: mapping `(progress, lane)` to screen space.
//!
//! The promenade is a straight strip drawn left to right.  Progress runs over
//! [`PATH_SPAN`] units along it and lane is a signed offset from the
//! centerline.  The renderer consumes the mapped `ScreenPoint`s directly, so
//! the reference constants must be reproduced exactly.

/// Length of the path in progress units.  Progress lives in `[0, PATH_SPAN)`.
pub const PATH_SPAN: f64 = 100.0;

/// A point in renderer space (SVG user units, y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Affine mapping from path coordinates to the renderer's canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathGeometry {
    /// Screen x of progress 0.
    pub origin_x: f64,
    /// Screen distance covered by the full `PATH_SPAN`.
    pub path_length: f64,
    /// Screen y of lane 0 (the centerline).
    pub centerline_y: f64,
    /// Screen units per lane unit.
    pub lane_scale: f64,
    /// Canvas extent, `[0, width] × [0, height]`.
    pub width: f64,
    pub height: f64,
}

impl PathGeometry {
    /// The reference layout: a 500-unit strip starting at x = 50, centered at
    /// y = 150 on a 600 × 300 canvas.
    pub const REFERENCE: PathGeometry = PathGeometry {
        origin_x:     50.0,
        path_length:  500.0,
        centerline_y: 150.0,
        lane_scale:   30.0,
        width:        600.0,
        height:       300.0,
    };

    /// Screen position of an agent at `progress` with lateral offset `lane`.
    #[inline]
    pub fn position(&self, progress: f64, lane: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.origin_x + (progress / PATH_SPAN) * self.path_length,
            y: self.centerline_y + lane * self.lane_scale,
        }
    }

    /// `true` if `p` lies on the canvas.
    #[inline]
    pub fn contains(&self, p: ScreenPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for PathGeometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}
