//! Core-Domänentypen: Hilfslinien, Raster, Farben, Geometrie, Hintergrundbild.

pub mod background_image;
pub mod color;
mod error;
pub mod geometry;
/// Datenmodell der Hilfslinien
///
/// - LineGuide: einzelne Referenzlinie
/// - PerspectiveGrid: Fluchtpunkt-Raster
/// - Guide: Eintrag im GuideSet
pub mod guide;
pub mod guide_set;

pub use background_image::BackgroundImage;
pub use color::{hex_to_rgba, GuideColor, Rgba, GRID_PALETTE};
pub use error::GuideError;
pub use geometry::{
    boundary_y, clamp_vanishing_point, depth_segments, distance_to_segment, fan_segments,
    fit_canvas_to_image, DepthLinePolicy, GuideSegment,
};
pub use guide::{
    GridConfig, Guide, GuideId, LineGuide, LineStyle, PerspectiveGrid, MAX_GRIDS,
};
pub use guide_set::GuideSet;
