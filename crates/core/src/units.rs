//! Length units used in presentation markup.
//!
//! Office Open XML positions shapes in English Metric Units (EMU) and
//! font sizes in hundredths of a point. The public API works in
//! centimeters and points; conversion happens at serialization time.

use serde::{Deserialize, Serialize};

/// EMU per centimeter.
const EMU_PER_CM: f64 = 360_000.0;

/// EMU per point.
const EMU_PER_PT: f64 = 12_700.0;

/// A raw English Metric Unit value.
pub type Emu = i64;

/// A length in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cm(pub f64);

impl Cm {
    /// Convert to EMU, rounding to the nearest integer unit.
    pub fn emu(self) -> Emu {
        (self.0 * EMU_PER_CM).round() as Emu
    }
}

/// A length in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pt(pub f64);

impl Pt {
    /// Convert to EMU, rounding to the nearest integer unit.
    pub fn emu(self) -> Emu {
        (self.0 * EMU_PER_PT).round() as Emu
    }

    /// Convert to hundredths of a point, the unit of `a:rPr sz`.
    pub fn centipoints(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

/// A shape bounding box in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: Cm,
    pub top: Cm,
    pub width: Cm,
    pub height: Cm,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: Cm(left),
            top: Cm(top),
            width: Cm(width),
            height: Cm(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_emu() {
        assert_eq!(Cm(1.0).emu(), 360_000);
        assert_eq!(Cm(0.33).emu(), 118_800);
        assert_eq!(Cm(25.25).emu(), 9_090_000);
        assert_eq!(Cm(0.0).emu(), 0);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(Pt(1.0).emu(), 12_700);
        assert_eq!(Pt(3.5).emu(), 44_450);
    }

    #[test]
    fn test_pt_to_centipoints() {
        assert_eq!(Pt(28.0).centipoints(), 2800);
        assert_eq!(Pt(18.0).centipoints(), 1800);
        assert_eq!(Pt(10.5).centipoints(), 1050);
    }

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(0.53, 0.53, 25.25, 1.45);
        assert_eq!(rect.left.emu(), 190_800);
        assert_eq!(rect.height.emu(), 522_000);
    }
}
