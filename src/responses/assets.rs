use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use std::fs;
use std::path::Path;

/// Serves one file out of ./static. Only bare file names are
/// accepted; anything that looks like a path is a 404.
pub fn static_response(name: &str) -> ResultResp {
    if name.contains('/') || name.contains("..") || name.is_empty() {
        return Err(ServerError::NotFound);
    }
    let path = Path::new("static").join(name);
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;

    let content_type = match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => mime::TEXT_CSS_UTF_8.as_ref(),
        Some("js") => mime::TEXT_JAVASCRIPT.as_ref(),
        Some("svg") => mime::IMAGE_SVG.as_ref(),
        Some("png") => mime::IMAGE_PNG.as_ref(),
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG.as_ref(),
        Some("ico") => "image/x-icon",
        _ => mime::APPLICATION_OCTET_STREAM.as_ref(),
    };

    Ok(ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .unwrap())
}
