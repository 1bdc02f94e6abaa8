//! Centralized configuration values shared across the partscan pipeline.
//!
//! Each public item in this module documents its purpose and provides a
//! minimal usage example so that downstream crates can remain declarative
//! and avoid scattering literals.
//!
//! The sampling strides and thresholds below are part of the pipeline's
//! numeric contract: the profile produced for a given mesh is a pure
//! function of these values, so changing any of them changes reported
//! scores and estimates.

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Index stride used when subsampling a normal buffer for the flat/curved
/// surface split and for difficult-zone detection.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_SAMPLE_STRIDE;
/// let anchors: Vec<usize> = (0..250usize).step_by(NORMAL_SAMPLE_STRIDE).collect();
/// assert_eq!(anchors, vec![0, 100, 200]);
/// ```
pub const NORMAL_SAMPLE_STRIDE: usize = 100;

/// Index stride used when subsampling a position buffer for the surface
/// area estimate. Also the inverse of the extrapolation ratio applied to
/// the sampled triangle sum.
///
/// # Examples
/// ```
/// use config::constants::AREA_SAMPLE_STRIDE;
/// assert_eq!(AREA_SAMPLE_STRIDE, 300);
/// ```
pub const AREA_SAMPLE_STRIDE: usize = 300;

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================

/// Absolute component value above which a unit normal counts as
/// axis-aligned (planar) for the flat/curved surface split.
///
/// # Examples
/// ```
/// use config::constants::PLANAR_NORMAL_THRESHOLD;
/// let n = [0.0_f64, 0.0, 1.0];
/// assert!(n.iter().any(|c| c.abs() > PLANAR_NORMAL_THRESHOLD));
/// ```
pub const PLANAR_NORMAL_THRESHOLD: f64 = 0.95;

/// Number of buckets in the flat/curved surface split. The two counts
/// always sum to this value when normals are available.
///
/// # Examples
/// ```
/// use config::constants::SURFACE_SPLIT_BUCKETS;
/// assert_eq!(SURFACE_SPLIT_BUCKETS, 10);
/// ```
pub const SURFACE_SPLIT_BUCKETS: u32 = 10;

/// Dot-product threshold below which two neighboring normals count as a
/// sharp-edge transition (angular deviation greater than ~45 degrees).
///
/// # Examples
/// ```
/// use config::constants::SHARP_EDGE_DOT_THRESHOLD;
/// let dot: f64 = 0.5;
/// assert!(dot < SHARP_EDGE_DOT_THRESHOLD);
/// ```
pub const SHARP_EDGE_DOT_THRESHOLD: f64 = 0.7;

/// Number of sharp-edge transitions a mesh must exceed before the
/// difficult-zone detector emits its zone label.
///
/// # Examples
/// ```
/// use config::constants::SHARP_EDGE_ZONE_LIMIT;
/// assert!(11 > SHARP_EDGE_ZONE_LIMIT);
/// ```
pub const SHARP_EDGE_ZONE_LIMIT: usize = 10;

/// Vertex-count divisor for the hole estimate.
///
/// # Examples
/// ```
/// use config::constants::HOLE_VERTEX_DIVISOR;
/// assert_eq!(12_000 / HOLE_VERTEX_DIVISOR, 2);
/// ```
pub const HOLE_VERTEX_DIVISOR: usize = 5000;

/// Vertex-count divisor for the pocket estimate.
///
/// # Examples
/// ```
/// use config::constants::POCKET_VERTEX_DIVISOR;
/// assert_eq!(16_000 / POCKET_VERTEX_DIVISOR, 2);
/// ```
pub const POCKET_VERTEX_DIVISOR: usize = 8000;

// =============================================================================
// UNIT AND THRESHOLD CONSTANTS
// =============================================================================

/// Wall thickness in millimeters below which a part is flagged as having
/// thin walls.
///
/// # Examples
/// ```
/// use config::constants::THIN_WALL_LIMIT_MM;
/// assert!(1.2 < THIN_WALL_LIMIT_MM);
/// ```
pub const THIN_WALL_LIMIT_MM: f64 = 1.5;

/// Divisor applied to the smallest bounding-box dimension to estimate the
/// minimum wall thickness.
///
/// # Examples
/// ```
/// use config::constants::MIN_WALL_DIVISOR;
/// assert_eq!(20.0 / MIN_WALL_DIVISOR, 2.0);
/// ```
pub const MIN_WALL_DIVISOR: f64 = 10.0;

/// Divisor applied to the largest bounding-box dimension to estimate the
/// maximum wall thickness.
///
/// # Examples
/// ```
/// use config::constants::MAX_WALL_DIVISOR;
/// assert_eq!(50.0 / MAX_WALL_DIVISOR, 10.0);
/// ```
pub const MAX_WALL_DIVISOR: f64 = 5.0;

/// Divisor converting the bounding-box product (mm^3) to the reported
/// volume unit (cm^3).
///
/// # Examples
/// ```
/// use config::constants::VOLUME_SCALE_DIVISOR;
/// assert_eq!(10.0 * 10.0 * 10.0 / VOLUME_SCALE_DIVISOR, 1.0);
/// ```
pub const VOLUME_SCALE_DIVISOR: f64 = 1000.0;

/// Divisor converting the extrapolated triangle-area sum to the reported
/// surface area unit.
///
/// # Examples
/// ```
/// use config::constants::AREA_SCALE_DIVISOR;
/// assert_eq!(AREA_SCALE_DIVISOR, 100.0);
/// ```
pub const AREA_SCALE_DIVISOR: f64 = 100.0;
