use crate::canvas::Canvas;
use egui::{Context, TextureHandle, TextureId, TextureOptions};

const CANVAS_TEXTURE_NAME: &str = "paint_canvas";

/// Keeps the canvas pixels uploaded as an egui texture.
///
/// The upload is skipped while the canvas version is unchanged.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    uploaded_version: Option<u64>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canvas texture, uploading pixels first if they changed.
    pub fn canvas_texture(&mut self, ctx: &Context, canvas: &Canvas) -> TextureId {
        let version = canvas.version();

        if let Some(handle) = &mut self.handle {
            if self.uploaded_version != Some(version) {
                log::debug!("Re-uploading canvas texture (version {})", version);
                handle.set(canvas.to_color_image(), TextureOptions::NEAREST);
                self.uploaded_version = Some(version);
            }
            return handle.id();
        }

        log::debug!(
            "Creating canvas texture {}x{}",
            canvas.width(),
            canvas.height()
        );
        let handle = ctx.load_texture(
            CANVAS_TEXTURE_NAME,
            canvas.to_color_image(),
            TextureOptions::NEAREST,
        );
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded_version = Some(version);
        id
    }

    #[cfg(test)]
    fn is_current(&self, canvas: &Canvas) -> bool {
        self.handle.is_some() && self.uploaded_version == Some(canvas.version())
    }
}
