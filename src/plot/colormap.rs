// Plot - Colormaps

/// Viridis anchor colors at 0.0, 0.25, 0.5, 0.75, 1.0
const VIRIDIS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Map a normalized value (clamped to 0-1) onto a viridis-like gradient
pub fn viridis(value: f32) -> [u8; 3] {
    let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = v * (VIRIDIS.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let t = scaled - lo as f32;

    let a = VIRIDIS[lo];
    let b = VIRIDIS[lo + 1];
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
    ]
}

/// Map a normalized value (clamped to 0-1) to a 0-255 channel intensity
pub fn intensity(value: f32) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
        assert_eq!(viridis(0.5), [33, 145, 140]);
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(f32::NAN), viridis(0.0));
    }

    #[test]
    fn test_intensity() {
        assert_eq!(intensity(0.0), 0);
        assert_eq!(intensity(1.0), 255);
        assert_eq!(intensity(2.0), 255);
    }
}
