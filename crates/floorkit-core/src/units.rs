//! Unit conversion utilities
//!
//! Linear, stateless conversions between the three measurement spaces the
//! engine works in: millimeters (canonical element data), editor pixels
//! (plan-view footprints at native zoom) and meters (isometric/perspective
//! scene units). No rounding happens here; quantization is the grid module's
//! concern.

use crate::constants::EDITOR_PX_PER_MM;

/// Converts millimeters to editor pixels at native zoom.
pub fn mm_to_editor_px(mm: f64) -> f64 {
    mm * EDITOR_PX_PER_MM
}

/// Converts editor pixels at native zoom back to millimeters.
pub fn editor_px_to_mm(px: f64) -> f64 {
    px / EDITOR_PX_PER_MM
}

/// Converts millimeters to meters. Used exclusively by the 3D adapters,
/// which work in meter-scale scene units.
pub fn mm_to_meters(mm: f64) -> f64 {
    mm / 1000.0
}

/// Converts meters back to millimeters.
pub fn meters_to_mm(m: f64) -> f64 {
    m * 1000.0
}

/// Formats a millimeter value for property panels ("2400 mm").
pub fn format_mm(value_mm: f64) -> String {
    if (value_mm - value_mm.round()).abs() < 1e-9 {
        format!("{:.0} mm", value_mm)
    } else {
        format!("{:.1} mm", value_mm)
    }
}

/// Formats a meter value for scene diagnostics ("2.400 m").
pub fn format_meters(value_m: f64) -> String {
    format!("{:.3} m", value_m)
}
