//! Raster rendering and PNG export
//!
//! Paints the background over the whole canvas, then fills one
//! `scale x scale` square per foreground or spot cell.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::color::IconColor;
use crate::algorithm::generator::Icon;
use crate::io::configuration::MAX_IMAGE_PIXELS;
use crate::io::error::{IconError, Result, invalid_parameter};
use crate::math::color_space::hsl_to_rgb;
use crate::spatial::PixelValue;

/// Parse a CSS color string into RGBA
///
/// Accepts `hsl(h,s%,l%)`, `rgb(r,g,b)` with integer or percentage channels,
/// `#rgb` and `#rrggbb`. Named colors are not recognized.
pub fn parse_color(text: &str) -> Option<[u8; 4]> {
    let trimmed = text.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(arguments) = function_arguments(trimmed, "rgb") {
        return parse_rgb(&arguments);
    }

    let arguments = function_arguments(trimmed, "hsl")?;
    let [hue, saturation, lightness] = arguments.as_slice() else {
        return None;
    };
    let hue: f64 = hue.parse().ok()?;
    let saturation: f64 = saturation.strip_suffix('%')?.trim().parse().ok()?;
    let lightness: f64 = lightness.strip_suffix('%')?.trim().parse().ok()?;
    if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
        return None;
    }

    let [r, g, b] = hsl_to_rgb(hue, saturation, lightness);
    Some([r, g, b, 255])
}

/// Comma separated arguments of `name(...)`, trimmed
fn function_arguments<'a>(text: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = text
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_rgb(arguments: &[&str]) -> Option<[u8; 4]> {
    let [r, g, b] = arguments else {
        return None;
    };
    Some([rgb_channel(r)?, rgb_channel(g)?, rgb_channel(b)?, 255])
}

/// One `rgb()` channel, clamped to `[0, 255]` like CSS
fn rgb_channel(text: &str) -> Option<u8> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()? * 2.55,
        None => text.parse::<f64>().ok()?,
    };
    value
        .is_finite()
        .then(|| value.round().clamp(0.0, 255.0) as u8)
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match digits.as_slice() {
        &[r, g, b] => Some([r * 17, g * 17, b * 17, 255]),
        &[r1, r2, g1, g2, b1, b2] => Some([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255]),
        _ => None,
    }
}

fn paint(color: &IconColor, role: &'static str) -> Result<Rgba<u8>> {
    let rgba = match color {
        IconColor::Synthesized(hsl) => {
            let [r, g, b] = hsl_to_rgb(f64::from(hsl.hue), hsl.saturation, hsl.lightness);
            [r, g, b, 255]
        }
        IconColor::Literal(text) => parse_color(text).ok_or_else(|| IconError::InvalidColor {
            role,
            value: text.clone(),
        })?,
    };
    Ok(Rgba(rgba))
}

/// Side length of the canvas in pixels, checked against [`MAX_IMAGE_PIXELS`]
fn canvas_side(icon: &Icon) -> Result<u32> {
    let checked_side = icon
        .size()
        .checked_mul(icon.scale())
        .and_then(|pixels| u32::try_from(pixels).ok());
    let checked_area = checked_side.and_then(|length| u64::from(length).checked_pow(2));

    match (checked_side, checked_area) {
        (Some(side), Some(area)) if area <= MAX_IMAGE_PIXELS => Ok(side),
        _ => Err(invalid_parameter(
            "scale",
            &icon.scale(),
            &format!(
                "a {size}x{size} icon at this scale exceeds {MAX_IMAGE_PIXELS} pixels",
                size = icon.size()
            ),
        )),
    }
}

/// Render `icon` to an RGBA image of `size * scale` pixels per side
///
/// # Errors
///
/// Returns an error if:
/// - A literal color string cannot be parsed
/// - The canvas would exceed [`MAX_IMAGE_PIXELS`]
pub fn render_icon(icon: &Icon) -> Result<RgbaImage> {
    let colors = icon.colors();
    let background = paint(&colors.background, "background")?;
    let foreground = paint(&colors.foreground, "foreground")?;
    let spot = paint(&colors.spot, "spot")?;

    let side = canvas_side(icon)?;
    let scale = icon.scale() as u32;

    let mut img = ImageBuffer::from_pixel(side, side, background);

    for (row, col, value) in icon.grid().cells() {
        let fill = match value {
            PixelValue::Background => continue,
            PixelValue::Foreground => foreground,
            PixelValue::Spot => spot,
        };

        let x0 = col as u32 * scale;
        let y0 = row as u32 * scale;
        for y in y0..y0 + scale {
            for x in x0..x0 + scale {
                img.put_pixel(x, y, fill);
            }
        }
    }

    Ok(img)
}

/// Render `icon` and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The icon cannot be rendered
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_icon_as_png(icon: &Icon, output_path: &Path) -> Result<()> {
    let img = render_icon(icon)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| IconError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| IconError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
