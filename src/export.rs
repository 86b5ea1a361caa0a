use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::config::SketchConfig;
use crate::document::Document;
use crate::error::{SketchError, SketchResult};
use crate::surface::{BACKGROUND_COLOR, RasterSurface, Surface};

/// Replay the document onto an opaque, magnified offscreen buffer.
/// The tool preview is not part of the picture and is never exported.
pub fn render_image(document: &Document, config: &SketchConfig) -> SketchResult<RgbaImage> {
    let [width, height] = config.canvas_size;
    let scale = config.export_scale;
    let (Some(scaled_width), Some(scaled_height)) = (width.checked_mul(scale), height.checked_mul(scale)) else {
        return Err(SketchError::Surface {
            width: u32::MAX,
            height: u32::MAX,
        });
    };

    let mut surface = RasterSurface::new(scaled_width, scaled_height, scale as f32)?;
    surface.fill(BACKGROUND_COLOR);
    for drawable in document.drawables() {
        drawable.render(&mut surface);
    }

    Ok(surface.into_image())
}

/// Render the document and encode it as PNG
pub fn render_png(document: &Document, config: &SketchConfig) -> SketchResult<Vec<u8>> {
    let image = render_image(document, config)?;
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "Encoded {}x{} export ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Write the PNG to `export_dir/export_filename`
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], config: &SketchConfig) -> SketchResult<()> {
    std::fs::create_dir_all(&config.export_dir)?;
    let path = config.export_dir.join(&config.export_filename);
    std::fs::write(&path, bytes)?;
    log::info!("Exported sketch to {}", path.display());
    Ok(())
}

/// Hand the PNG to the browser as a download named `export_filename`
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], config: &SketchConfig) -> SketchResult<()> {
    use wasm_bindgen::JsCast;

    let js_err = |err: wasm_bindgen::JsValue| SketchError::Download(format!("{err:?}"));

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document to attach the download to".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("<a> is not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&config.export_filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Started download of {}", config.export_filename);
    Ok(())
}

/// Render, encode and save in one go
pub fn export(document: &Document, config: &SketchConfig) -> SketchResult<()> {
    let bytes = render_png(document, config)?;
    save_png(&bytes, config)
}
