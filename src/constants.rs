/// Shared constants for icon geometry, colors and the built-in icon sets

pub mod palette {
    /// Stroke color for a connected network
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];

    /// Disconnected, disabled and unrecognized statuses
    pub const GRAY: [u8; 4] = [128, 128, 128, 255];

    /// Error status arcs and the fault badge
    pub const RED: [u8; 4] = [255, 0, 0, 255];

    /// Connection in progress
    pub const BLUE: [u8; 4] = [0, 100, 255, 255];
}

pub mod geometry {
    /// Outermost arc radius as a fraction of the canvas size
    pub const OUTER_RADIUS_RATIO: f32 = 0.4;

    /// Arc radii are `outer * i / ARC_DIVISIONS` for i in 1..=arc_count
    pub const ARC_DIVISIONS: f32 = 3.0;

    /// Arc span in degrees, clockwise from +x with y pointing down (top of the circle)
    pub const ARC_START_DEGREES: f32 = 225.0;
    pub const ARC_END_DEGREES: f32 = 315.0;

    /// Stroke width is `max(1, size / STROKE_DIVISOR)`
    pub const STROKE_DIVISOR: u32 = 16;

    /// Center dot radius is `max(MIN_DOT_RADIUS, size / DOT_DIVISOR)`
    pub const DOT_DIVISOR: u32 = 20;
    pub const MIN_DOT_RADIUS: u32 = 2;

    /// Fault badge offset from the center (right and up) as a fraction of the canvas size
    pub const BADGE_OFFSET_RATIO: f32 = 0.2;

    /// Fault badge X extent as a fraction of the canvas size
    pub const BADGE_SIZE_RATIO: f32 = 0.3;
}

pub mod icon_sets {
    /// Status bar base sizes in points
    pub const STATUS_BAR_SIZES: [u32; 4] = [16, 18, 20, 22];

    /// @3x variants are only emitted for status bar sizes up to this value
    pub const TRIPLE_SCALE_MAX_SIZE: u32 = 32;

    /// App icon base sizes in points
    pub const APP_ICON_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

    /// File name prefix for app icons
    pub const APP_ICON_NAME: &str = "app-icon";

    /// Largest base size a config file may request
    pub const MAX_BASE_SIZE: u32 = 4096;
}
