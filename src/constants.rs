//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering and interactions.

// Node dimensions
/// Node box width in canvas units.
pub const NODE_WIDTH: f32 = 160.0;
/// Node box height in canvas units.
pub const NODE_HEIGHT: f32 = 80.0;
/// Corner radius for node rectangles (in pixels).
pub const NODE_CORNER_RADIUS: f32 = 6.0;

// Connection ports
/// Radius of the input/output port circles drawn on node edges.
pub const PORT_RADIUS: f32 = 6.0;
/// Hit-test radius around a port center. Larger than the visual radius so
/// ports are comfortable to click.
pub const PORT_HIT_RADIUS: f32 = 12.0;

// Grid/drawing
/// Grid cell size in canvas units.
pub const GRID_SIZE: f32 = 20.0;
/// Length of the arrowhead drawn at the target end of a connection.
pub const ARROW_SIZE: f32 = 9.0;
/// Length of each drawn segment of the dashed connection preview.
pub const PREVIEW_DASH_LENGTH: f32 = 5.0;
/// Gap between segments of the dashed connection preview.
pub const PREVIEW_GAP_LENGTH: f32 = 5.0;
