//! Unit conversion between points and EMU.

/// English Metric Units per typographic point.
pub const EMU_PER_POINT: f64 = 12700.0;

pub fn pt_to_emu(pt: f64) -> f64 {
    pt * EMU_PER_POINT
}

pub fn emu_to_pt(emu: f64) -> f64 {
    emu / EMU_PER_POINT
}

/// Converts a `Dimension` magnitude in the given unit to points.
///
/// Unknown units are treated as EMU, which is what the API reports for
/// page elements.
pub fn magnitude_to_pt(magnitude: f64, unit: Option<&str>) -> f64 {
    match unit {
        Some("PT") => magnitude,
        _ => emu_to_pt(magnitude),
    }
}
