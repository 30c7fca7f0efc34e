use crate::constants::{HIGHLIGHT_HUE, HIGHLIGHT_LIGHTNESS, HIGHLIGHT_SWING};
use glam::Vec3;

/// HSL (all components in 0..1) to linear-ish RGB in 0..1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Slowly drifting blue used for hovered frame borders.
pub fn highlight_color(elapsed_sec: f32) -> Vec3 {
    let swing = HIGHLIGHT_SWING * elapsed_sec.sin();
    hsl_to_rgb(HIGHLIGHT_HUE + swing, 1.0, HIGHLIGHT_LIGHTNESS + swing)
}

/// Parse `#rrggbb` into 0..1 RGB.
pub fn hex_to_rgb(hex: &str) -> Option<Vec3> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn primary_hues() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn grey_when_unsaturated() {
        assert!(close(hsl_to_rgb(0.3, 0.0, 0.25), Vec3::splat(0.25)));
    }

    #[test]
    fn highlight_is_blueish() {
        for t in [0.0, 1.0, 2.5, 10.0] {
            let c = highlight_color(t);
            assert!(c.z > c.x, "blue should dominate red at t={}", t);
        }
    }

    #[test]
    fn hex_parsing() {
        assert!(close(hex_to_rgb("#ffffff").unwrap(), Vec3::ONE));
        assert!(close(
            hex_to_rgb("#dcdce0").unwrap(),
            Vec3::new(220.0, 220.0, 224.0) / 255.0
        ));
        assert!(hex_to_rgb("dcdce0").is_none());
        assert!(hex_to_rgb("#zzzzzz").is_none());
    }

    #[test]
    fn multibyte_input_is_rejected_not_sliced() {
        // six bytes, but the accented letters straddle the channel boundaries
        assert!(hex_to_rgb("#aééb").is_none());
        assert!(hex_to_rgb("#ff€").is_none());
    }
}
