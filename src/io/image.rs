use crate::core::color::{channel_to_u8, linear_to_srgb};
use crate::core::framebuffer::FrameBuffer;
use image::ImageBuffer;
use log::error;
use std::path::Path;

/// Saves the framebuffer to an image file, gamma-correcting each pixel.
///
/// The format is inferred from the path extension. Failures are logged
/// rather than propagated; an unwritable path costs the frame, not the run.
pub fn save_framebuffer(fb: &FrameBuffer, path: &str) {
    let mut img_buf = ImageBuffer::new(fb.width as u32, fb.height as u32);

    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        if let Some(linear) = fb.get_pixel(x as usize, y as usize) {
            let srgb = linear_to_srgb(linear);
            *pixel = image::Rgb([
                channel_to_u8(srgb.x),
                channel_to_u8(srgb.y),
                channel_to_u8(srgb.z),
            ]);
        }
    }

    if let Err(e) = img_buf.save(Path::new(path)) {
        error!("Failed to save image to '{}': {}", path, e);
    }
}
