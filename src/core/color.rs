use nalgebra::Vector3;

/// Converts linear RGB to sRGB (gamma correction), applied when the
/// framebuffer is written out for display.
pub fn linear_to_srgb(color: Vector3<f32>) -> Vector3<f32> {
    let gamma = 1.0 / 2.2;
    Vector3::new(
        color.x.powf(gamma),
        color.y.powf(gamma),
        color.z.powf(gamma),
    )
}

/// Quantizes one linear color channel to an 8-bit value.
pub fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_fixes_endpoints() {
        let black = linear_to_srgb(Vector3::zeros());
        assert!(black.norm() < 1e-6);
        let white = linear_to_srgb(Vector3::new(1.0, 1.0, 1.0));
        assert!((white - Vector3::new(1.0, 1.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_srgb_brightens_midtones() {
        let mid = linear_to_srgb(Vector3::new(0.5, 0.5, 0.5));
        assert!(mid.x > 0.5);
    }

    #[test]
    fn test_channel_quantization_clamps() {
        assert_eq!(channel_to_u8(-0.5), 0);
        assert_eq!(channel_to_u8(2.0), 255);
        assert_eq!(channel_to_u8(1.0), 255);
    }
}
