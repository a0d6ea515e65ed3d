use rand::seq::SliceRandom;
use rand::Rng;

use crate::wheel_option::WheelOption;

/// High-contrast colors handed out to new options before falling back to
/// generated ones.
pub const DEFAULT_COLORS: [&str; 16] = [
    "#E63946", // Red
    "#F77F00", // Orange
    "#FCBF49", // Yellow
    "#06D6A0", // Teal
    "#118AB2", // Blue
    "#8338EC", // Purple
    "#FB8500", // Deep orange
    "#219EBC", // Light blue
    "#023047", // Navy
    "#FFB3C6", // Pink
    "#8ECAE6", // Sky
    "#FFD166", // Light yellow
    "#06FFA5", // Neon teal
    "#FF006E", // Magenta
    "#3A86FF", // Bright blue
    "#FF7B00", // Bright orange
];

const GENERATE_ATTEMPTS: usize = 50;

/// HSL (hue in degrees, saturation and lightness in percent) to `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round().clamp(0.0, 255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", channel(0.0), channel(8.0), channel(4.0))
}

fn is_used(used: &[&str], color: &str) -> bool {
    used.iter().any(|c| c.eq_ignore_ascii_case(color))
}

/// A random saturated, mid-lightness color, avoiding `used` when it can.
pub fn generate_high_contrast_color<R: Rng + ?Sized>(used: &[&str], rng: &mut R) -> String {
    let mut color = String::new();
    for _ in 0..GENERATE_ATTEMPTS {
        let hue = f64::from(rng.gen_range(0..360u32));
        let saturation = f64::from(rng.gen_range(70..100u32));
        let lightness = f64::from(rng.gen_range(40..60u32));
        color = hsl_to_hex(hue, saturation, lightness);
        if !is_used(used, &color) {
            break;
        }
    }
    color
}

/// A color for the next new option: an unused palette color if any is left,
/// otherwise a generated one.
pub fn unique_color<R: Rng + ?Sized>(options: &[WheelOption], rng: &mut R) -> String {
    let used: Vec<&str> = options.iter().map(|opt| opt.color.as_str()).collect();
    let available: Vec<&str> = DEFAULT_COLORS
        .iter()
        .copied()
        .filter(|c| !is_used(&used, c))
        .collect();

    match available.choose(rng) {
        Some(color) => color.to_string(),
        None => generate_high_contrast_color(&used, rng),
    }
}
