use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::error::ImageError;

/// Lifecycle of one product image
#[derive(Clone)]
pub enum ImageSlot {
    /// Requested, bytes not here yet
    Pending,
    /// Decoded but not uploaded to the GPU yet
    Decoded(ColorImage),
    Ready(TextureHandle),
    Failed,
}

impl std::fmt::Debug for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Decoded(image) => write!(f, "Decoded({:?})", image.size),
            Self::Ready(texture) => write!(f, "Ready({:?})", texture.id()),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Product images keyed by url. Decoding happens when bytes arrive, the
/// texture upload is deferred to the first frame that draws the image.
#[derive(Debug, Default)]
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an image as requested. Returns false if it is already known, in
    /// which case no new fetch should be started.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_owned(), ImageSlot::Pending);
        true
    }

    /// Store fetched bytes. Undecodable images are remembered as failed.
    pub fn insert_bytes(&mut self, url: &str, bytes: &[u8]) -> Result<(), ImageError> {
        match decode_image(bytes) {
            Ok(image) => {
                log::debug!("decoded image {} ({}x{})", url, image.size[0], image.size[1]);
                self.slots.insert(url.to_owned(), ImageSlot::Decoded(image));
                Ok(())
            }
            Err(err) => {
                self.mark_failed(url);
                Err(err)
            }
        }
    }

    pub fn mark_failed(&mut self, url: &str) {
        self.slots.insert(url.to_owned(), ImageSlot::Failed);
    }

    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Texture for the image, uploading it on first use
    pub fn texture(&mut self, ctx: &Context, url: &str) -> Option<TextureHandle> {
        let slot = self.slots.get_mut(url)?;
        if let ImageSlot::Decoded(image) = slot {
            let handle = ctx.load_texture(url, image.clone(), TextureOptions::LINEAR);
            *slot = ImageSlot::Ready(handle);
        }
        match slot {
            ImageSlot::Ready(handle) => Some(handle.clone()),
            _ => None,
        }
    }
}

/// Decode fetched bytes. Anything the raster decoders don't recognise is
/// treated as svg, which is what the cdn serves product images as.
pub fn decode_image(bytes: &[u8]) -> Result<ColorImage, ImageError> {
    if image::guess_format(bytes).is_err() {
        return rasterize_svg(bytes);
    }
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    if size[0] == 0 || size[1] == 0 {
        return Err(ImageError::InvalidDimensions);
    }
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ColorImage, ImageError> {
    use resvg::{tiny_skia, usvg};

    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(ImageError::InvalidDimensions)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(ColorImage::from_rgba_premultiplied(
        [size.width() as usize, size.height() as usize],
        pixmap.data(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_and_upload() {
        let ctx = Context::default();
        let mut cache = ImageCache::new();
        let url = "https://cdn/a.png";

        assert!(cache.request(url));
        assert!(!cache.request(url));
        assert!(cache.texture(&ctx, url).is_none());

        cache.insert_bytes(url, &png_bytes(4, 3)).unwrap();
        assert!(matches!(cache.slot(url), Some(ImageSlot::Decoded(img)) if img.size == [4, 3]));

        let first = cache.texture(&ctx, url).unwrap();
        let second = cache.texture(&ctx, url).unwrap();
        assert_eq!(first.id(), second.id());
        assert!(matches!(cache.slot(url), Some(ImageSlot::Ready(_))));
    }

    #[test]
    fn test_svg_is_rasterized() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="6"><rect width="8" height="6" fill="#ff0000"/></svg>"##;
        let image = decode_image(svg).unwrap();
        assert_eq!(image.size, [8, 6]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_undecodable_image_is_failed() {
        let mut cache = ImageCache::new();
        let url = "https://cdn/Soft_Flower.svg";
        cache.request(url);
        let err = cache.insert_bytes(url, b"not an image at all");
        assert!(err.is_err());
        assert!(matches!(cache.slot(url), Some(ImageSlot::Failed)));
        assert!(!cache.request(url));
    }
}
