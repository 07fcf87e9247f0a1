//! HSV conversion for the color report.
//!
//! Both directions work on channels normalized to `0.0..=1.0`. Hue is a
//! fraction of a full turn, not degrees.

/// A color in HSV space, every component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a full turn
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl Hsv {
    /// Convert normalized RGB (`0.0..=1.0` per channel) to HSV.
    ///
    /// Greys (all channels equal) have hue and saturation 0.
    ///
    /// ```
    /// use color_cluster::Hsv;
    ///
    /// let blue = Hsv::from_rgb(0.0, 0.0, 1.0);
    /// assert!((blue.h - 2.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(blue.s, 1.0);
    /// assert_eq!(blue.v, 1.0);
    /// ```
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        if max == min {
            return Self { h: 0.0, s: 0.0, v };
        }

        let range = max - min;
        let s = range / max;
        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }

    /// Convert an 8-bit-range RGB triple (`0.0..=255.0`) to HSV.
    #[inline]
    pub fn from_rgb255(rgb: [f64; 3]) -> Self {
        Self::from_rgb(rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0)
    }

    /// Convert back to normalized RGB.
    pub fn to_rgb(self) -> [f64; 3] {
        let Self { h, s, v } = self;
        if s == 0.0 {
            return [v, v, v];
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (sector as i64).rem_euclid(6) {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    /// Components as an `[h, s, v]` array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}
