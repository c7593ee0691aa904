//! Small pure helpers: random colors with readable text, random placement
//! within the viewport, and duration formatting.

use wasm_bindgen::JsValue;
use web_sys::Element;

/// Contrast text color picked for a button background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_css(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonColor {
    /// Lowercase `#rrggbb` background.
    pub background: String,
    pub text: TextColor,
}

/// Builds a color from a 24-bit value, picking black or white text via the
/// YIQ brightness weighting (green > red > blue). This is a perceptual
/// approximation, not a WCAG contrast computation.
pub fn color_from_u24(value: u32) -> ButtonColor {
    let value = value & 0xff_ffff;
    let r = (value >> 16) & 0xff;
    let g = (value >> 8) & 0xff;
    let b = value & 0xff;
    // yiq scaled by 1000; 128 is the midpoint of the 0-255 range
    let yiq_millis = r * 299 + g * 587 + b * 114;
    let text = if yiq_millis >= 128_000 {
        TextColor::Black
    } else {
        TextColor::White
    };
    ButtonColor {
        background: format!("#{:06x}", value),
        text,
    }
}

/// Draws a uniformly random 24-bit color.
pub fn random_color() -> ButtonColor {
    let value = (js_sys::Math::random() * 0xff_ffff as f64).floor() as u32;
    color_from_u24(value)
}

/// Maps random draws `rx, ry` in `[0, 1)` to a position keeping `size` fully
/// inside `viewport`. Collapses to the origin on any axis where the element
/// is larger than the viewport.
pub fn position_in(viewport: (f64, f64), size: (f64, f64), rx: f64, ry: f64) -> (f64, f64) {
    let left = (rx * (viewport.0 - size.0)).max(0.0);
    let top = (ry * (viewport.1 - size.1)).max(0.0);
    (left, top)
}

/// Random viewport position for an already-attached element. The element must
/// be in the document so its rendered size can be measured.
pub fn random_position(el: &Element) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    let (vw, vh) = viewport_size();
    position_in(
        (vw, vh),
        (rect.width(), rect.height()),
        js_sys::Math::random(),
        js_sys::Math::random(),
    )
}

/// `window.inner_width/inner_height`, falling back to a nominal desktop size
/// when the window is unavailable (e.g. off-browser builds).
pub fn viewport_size() -> (f64, f64) {
    let window = web_sys::window();
    let vw = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let vh = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (vw, vh)
}

/// Formats a duration in milliseconds as `HH:MM:SS`. Hours are not wrapped
/// modulo 24, so long sessions read e.g. "25:30:45".
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_six_digit_lowercase_hex() {
        assert_eq!(color_from_u24(0x00_00_ff).background, "#0000ff");
        assert_eq!(color_from_u24(0xAB_CD_EF).background, "#abcdef");
        assert_eq!(color_from_u24(0).background, "#000000");
        // values above 24 bits are masked, not rejected
        assert_eq!(color_from_u24(0x1_23_45_67).background, "#234567");
    }

    #[test]
    fn yiq_midpoint_is_black_text() {
        // r=g=b=128 gives yiq exactly 128 -> black
        assert_eq!(color_from_u24(0x80_80_80).text, TextColor::Black);
        // one step below the midpoint -> white
        assert_eq!(color_from_u24(0x7f_7f_7f).text, TextColor::White);
    }

    #[test]
    fn yiq_extremes() {
        assert_eq!(color_from_u24(0x00_00_00).text, TextColor::White);
        assert_eq!(color_from_u24(0xff_ff_ff).text, TextColor::Black);
        // saturated green is bright, saturated blue is dark
        assert_eq!(color_from_u24(0x00_ff_00).text, TextColor::Black);
        assert_eq!(color_from_u24(0x00_00_ff).text, TextColor::White);
    }

    #[test]
    fn position_stays_inside_viewport() {
        let (l, t) = position_in((800.0, 600.0), (100.0, 40.0), 0.999, 0.999);
        assert!(l >= 0.0 && l <= 700.0);
        assert!(t >= 0.0 && t <= 560.0);
        assert_eq!(
            position_in((800.0, 600.0), (100.0, 40.0), 0.0, 0.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn oversized_element_collapses_to_origin() {
        assert_eq!(
            position_in((800.0, 600.0), (900.0, 700.0), 0.5, 0.5),
            (0.0, 0.0)
        );
        // only one axis oversized: the other still ranges
        let (l, t) = position_in((800.0, 600.0), (900.0, 100.0), 0.5, 0.5);
        assert_eq!(l, 0.0);
        assert_eq!(t, 250.0);
    }

    #[test]
    fn format_duration_pads_and_does_not_wrap() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(999), "00:00:00");
        assert_eq!(format_duration(1_000), "00:00:01");
        assert_eq!(format_duration(3_661_000), "01:01:01");
        assert_eq!(format_duration(90_000_000), "25:00:00");
    }
}
