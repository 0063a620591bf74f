//! Hex color parsing and the small amount of color math the palette needs.

/// Parse a hex color string to an RGB tuple. Returns None if invalid.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim().trim_start_matches('#');

    // Expand shorthand (e.g., "fff" -> "ffffff")
    let color = if color.len() == 3 {
        color.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        color.to_string()
    };

    if color.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&color[0..2], 16).ok()?;
    let g = u8::from_str_radix(&color[2..4], 16).ok()?;
    let b = u8::from_str_radix(&color[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Convert an RGB tuple to a hex color string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Calculate relative luminance per WCAG formula (0.0 = black, 1.0 = white).
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c_srgb = c as f64 / 255.0;
        if c_srgb <= 0.03928 {
            c_srgb / 12.92
        } else {
            ((c_srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Return true if the color is considered dark (low luminance).
///
/// Unparseable input counts as dark.
pub fn is_dark_color(color: &str) -> bool {
    match parse_hex_color(color) {
        Some((r, g, b)) => relative_luminance(r, g, b) < 0.179,
        None => true,
    }
}

/// Darken a hex color by subtracting `amount` from its HSL lightness.
///
/// `amount` is a fraction of the full lightness range, so `darken(c, 0.05)`
/// lowers lightness by 5 points. Lightness clamps at black. Returns None if
/// the input is not a valid hex color.
pub fn darken(color: &str, amount: f64) -> Option<String> {
    let (r, g, b) = parse_hex_color(color)?;
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let l = (l - amount).clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb(h, s, l);
    Some(rgb_to_hex(r, g, b))
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8;
    let g = (hue_to_channel(p, q, h) * 255.0).round() as u8;
    let b = (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8;

    (r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("000"), Some((0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("not a color"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("#ff"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(22, 19, 25), "#161319");
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert!((relative_luminance(0, 0, 0) - 0.0).abs() < 0.001);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_is_dark_color() {
        assert!(is_dark_color("#000000"));
        assert!(is_dark_color("#161319"));
        assert!(!is_dark_color("#ffffff"));
        assert!(!is_dark_color("#dcdfe3"));
        // Unparseable input defaults to dark
        assert!(is_dark_color("bogus"));
    }

    #[test]
    fn test_darken_pure_hue() {
        // #ff0000 is hsl(0, 100%, 50%); dropping lightness by 10 points
        // lands exactly on #cc0000 (0.8 * 255 = 204).
        assert_eq!(darken("#ff0000", 0.10).as_deref(), Some("#cc0000"));
    }

    #[test]
    fn test_darken_reduces_luminance() {
        let darker = darken("#6c5fc7", 0.05).unwrap();
        let (r1, g1, b1) = parse_hex_color("#6c5fc7").unwrap();
        let (r2, g2, b2) = parse_hex_color(&darker).unwrap();
        assert!(relative_luminance(r2, g2, b2) < relative_luminance(r1, g1, b1));
    }

    #[test]
    fn test_darken_zero_is_stable() {
        // A zero-amount darken should survive the HSL round trip within
        // rounding error of a single channel step.
        let out = darken("#a3261b", 0.0).unwrap();
        let (r1, g1, b1) = parse_hex_color("#a3261b").unwrap();
        let (r2, g2, b2) = parse_hex_color(&out).unwrap();
        assert!((r1 as i32 - r2 as i32).abs() <= 1);
        assert!((g1 as i32 - g2 as i32).abs() <= 1);
        assert!((b1 as i32 - b2 as i32).abs() <= 1);
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_eq!(darken("#ffffff", 1.0).as_deref(), Some("#000000"));
        assert_eq!(darken("#000000", 0.05).as_deref(), Some("#000000"));
    }

    #[test]
    fn test_darken_invalid_input() {
        assert_eq!(darken("nope", 0.05), None);
    }
}
