//! Unit conversion utilities.
//!
//! The layout compiler works in canvas units, which are inches on the 16:9
//! slide surface. PresentationML stores positions in EMUs, font sizes in
//! hundredths of a point and angles in 60000ths of a degree.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const POINTS_PER_INCH: f64 = 72.0;
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// Convert canvas units (inches) to EMUs, rounding to the nearest EMU.
#[inline]
pub fn units_to_emu(units: f64) -> i64 {
    (units * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_units(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_units(pt: f64) -> f64 {
    pt / POINTS_PER_INCH
}

/// Font size in hundredths of a point, as used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Rotation in 60000ths of a degree, normalized to `[0, 360)` degrees.
#[inline]
pub fn degrees_to_angle(degrees: f64) -> i64 {
    let normalized = degrees.rem_euclid(360.0);
    (normalized * ANGLE_UNITS_PER_DEGREE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_to_emu() {
        assert_eq!(units_to_emu(1.0), 914_400);
        assert_eq!(units_to_emu(10.0), 9_144_000);
        assert_eq!(units_to_emu(5.625), 5_143_500);
        assert_eq!(units_to_emu(0.0), 0);
    }

    #[test]
    fn test_emu_round_trip_is_close() {
        let emu = units_to_emu(2.45);
        assert!((emu_to_units(emu) - 2.45).abs() < 1e-6);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(pt_to_centipoints(13.0), 1300);
        assert!((pt_to_units(72.0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(EMUS_PER_INCH / EMUS_PER_PT, 72);
    }

    #[test]
    fn test_negative_rotation_is_normalized() {
        assert_eq!(degrees_to_angle(12.0), 720_000);
        assert_eq!(degrees_to_angle(-24.0), 336 * 60_000);
        assert_eq!(degrees_to_angle(360.0), 0);
    }
}
