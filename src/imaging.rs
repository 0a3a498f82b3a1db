use crate::errors::ServerError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgba, RgbaImage};

const JPEG_QUALITY: u8 = 92;

/// Crop window in rotated-canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Bounding box of a `width` x `height` image rotated by `degrees`,
/// truncated to whole pixels.
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    let (w, h) = (f64::from(width), f64::from(height));
    ((cos * w + sin * h) as u32, (sin * w + cos * h) as u32)
}

/// Draws `src` rotated about its center by `degrees` (clockwise,
/// y-down) and flipped, onto a canvas sized to the rotated bounding
/// box. Uncovered corners stay transparent.
pub fn rotate_flip(src: &DynamicImage, degrees: f64, flip: Flip) -> RgbaImage {
    let src = src.to_rgba8();
    let (src_w, src_h) = src.dimensions();
    let (out_w, out_h) = rotated_bounds(src_w, src_h, degrees);

    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin(), radians.cos());
    let (dst_cx, dst_cy) = (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);
    let (src_cx, src_cy) = (f64::from(src_w) / 2.0, f64::from(src_h) / 2.0);

    let mut out = RgbaImage::from_pixel(out_w, out_h, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        // Walk the draw transform backwards from each destination
        // pixel center: undo the rotation, then the flip, then move
        // back into source coordinates.
        let dx = f64::from(x) + 0.5 - dst_cx;
        let dy = f64::from(y) + 0.5 - dst_cy;
        let rx = cos * dx + sin * dy;
        let ry = -sin * dx + cos * dy;
        let fx = if flip.horizontal { -rx } else { rx };
        let fy = if flip.vertical { -ry } else { ry };
        let sx = fx + src_cx;
        let sy = fy + src_cy;
        if sx >= 0.0 && sy >= 0.0 {
            let (sx, sy) = (sx as u32, sy as u32);
            if sx < src_w && sy < src_h {
                *pixel = *src.get_pixel(sx, sy);
            }
        }
    }
    out
}

/// Rotates and flips `src`, then cuts `crop` out of the rotated
/// canvas. Parts of the window falling outside the canvas come out
/// transparent; an empty window is rejected.
pub fn crop_rotated(
    src: &DynamicImage,
    crop: CropRect,
    degrees: f64,
    flip: Flip,
) -> Result<RgbaImage, ServerError> {
    if crop.width == 0 || crop.height == 0 {
        return Err(ServerError::BadRequest(
            "crop area must not be empty".to_string(),
        ));
    }

    let canvas = rotate_flip(src, degrees, flip);
    let (canvas_w, canvas_h) = canvas.dimensions();

    let mut out = RgbaImage::from_pixel(crop.width, crop.height, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let src_x = crop.x + x;
        let src_y = crop.y + y;
        if src_x < canvas_w && src_y < canvas_h {
            *pixel = *canvas.get_pixel(src_x, src_y);
        }
    }
    Ok(out)
}

/// Decodes a `data:image/...;base64,` URL (or bare base64) into an
/// image.
pub fn decode_data_url(data: &str) -> Result<DynamicImage, ServerError> {
    let encoded = data
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .unwrap_or(data)
        .trim();
    let bytes = BASE64
        .decode(encoded)
        .map_err(|_| ServerError::BadRequest("image payload is not valid base64".to_string()))?;
    image::load_from_memory(&bytes)
        .map_err(|e| ServerError::BadRequest(format!("unreadable image: {e}")))
}

/// JPEG data URL of `img`. Transparent regions land on black, the
/// same way a canvas export flattens them.
pub fn encode_jpeg_data_url(img: &RgbaImage) -> Result<String, ServerError> {
    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| ServerError::BadRequest(format!("jpeg encode failed: {e}")))?;
    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(&bytes)))
}

/// The whole photo-editor round trip: decode, rotate, flip, crop,
/// re-encode as a JPEG data URL.
pub fn crop_data_url(
    data: &str,
    crop: CropRect,
    degrees: f64,
    flip: Flip,
) -> Result<String, ServerError> {
    let src = decode_data_url(data)?;
    let cropped = crop_rotated(&src, crop, degrees, flip)?;
    encode_jpeg_data_url(&cropped)
}
