//! HSL to RGB conversion following CSS Color Module Level 3

/// Convert HSL to 8-bit RGB
///
/// `hue` is in degrees and wraps around the circle. `saturation` and
/// `lightness` are percentages clamped to `[0, 100]` the way browsers clamp
/// out-of-range `hsl()` arguments.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let m2 = if l <= 0.5 {
        l * (s + 1.0)
    } else {
        s.mul_add(-l, l + s)
    };
    let m1 = l.mul_add(2.0, -m2);

    [
        channel_to_byte(hue_to_channel(m1, m2, h + 1.0 / 3.0)),
        channel_to_byte(hue_to_channel(m1, m2, h)),
        channel_to_byte(hue_to_channel(m1, m2, h - 1.0 / 3.0)),
    ]
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let h = hue.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        ((m2 - m1) * h).mul_add(6.0, m1)
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        ((m2 - m1) * (2.0 / 3.0 - h)).mul_add(6.0, m1)
    } else {
        m1
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
