use egui::{Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureOptions, pos2};
use log::debug;
use tiny_skia::Pixmap;

use crate::canvas::Canvas;
use crate::compositor;

/// Presents the composited drawing through an egui texture.
///
/// The surface is recomposited from the full drawing log whenever the canvas
/// has a pending redraw or the surface size changes. Transparent pixels show
/// the background color underneath.
pub struct Renderer {
    background: Color32,
    surface: Option<Pixmap>,
    texture: Option<TextureHandle>,
    redraw_count: u64,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("background", &self.background)
            .field("surface", &self.surface_size())
            .field("has_texture", &self.texture.is_some())
            .field("redraw_count", &self.redraw_count)
            .finish()
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            surface: None,
            texture: None,
            redraw_count: 0,
        }
    }

    fn surface_size(&self) -> [u32; 2] {
        self.surface
            .as_ref()
            .map_or([0, 0], |pixmap| [pixmap.width(), pixmap.height()])
    }

    /// Recomposites the surface if the canvas asked for a redraw or `size`
    /// differs from the current surface. Returns whether it recomposited.
    pub fn update_surface(&mut self, canvas: &mut Canvas, size: [u32; 2]) -> bool {
        let redraw = canvas.take_redraw_request();
        if !redraw && self.surface_size() == size {
            return false;
        }

        self.surface = compositor::render(canvas.strokes(), size[0], size[1]);
        self.redraw_count += 1;
        debug!(
            "redraw #{}: {} strokes into {}x{}",
            self.redraw_count,
            canvas.strokes().len(),
            size[0],
            size[1]
        );
        true
    }

    /// Renders the canvas into `rect`
    pub fn render(&mut self, ctx: &Context, painter: &Painter, rect: Rect, canvas: &mut Canvas) {
        painter.rect_filled(rect, 0.0, self.background);

        let size = [
            rect.width().max(0.0).round() as u32,
            rect.height().max(0.0).round() as u32,
        ];
        if size[0] == 0 || size[1] == 0 {
            return;
        }

        if self.update_surface(canvas, size) || self.texture.is_none() {
            self.upload(ctx);
        }

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }

    fn upload(&mut self, ctx: &Context) {
        let Some(pixmap) = &self.surface else {
            return;
        };
        let image = ColorImage::from_rgba_premultiplied(
            [pixmap.width() as usize, pixmap.height() as usize],
            pixmap.data(),
        );

        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("draw_pad_canvas", image, TextureOptions::LINEAR));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_surface_follows_redraw_requests() {
        let mut canvas = Canvas::new();
        let mut renderer = Renderer::new(Color32::WHITE);

        assert!(renderer.update_surface(&mut canvas, [32, 32]));
        assert!(!renderer.update_surface(&mut canvas, [32, 32]));

        canvas.gesture_start(pos2(2.0, 2.0));
        assert!(renderer.update_surface(&mut canvas, [32, 32]));
        assert_eq!(renderer.redraw_count, 2);
    }

    #[test]
    fn test_resize_recomposites() {
        let mut canvas = Canvas::new();
        let mut renderer = Renderer::new(Color32::WHITE);
        renderer.update_surface(&mut canvas, [32, 32]);
        assert!(renderer.update_surface(&mut canvas, [64, 16]));
        assert_eq!(renderer.surface_size(), [64, 16]);
    }

    #[test]
    fn test_render_basics() {
        let ctx = Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        let mut canvas = Canvas::new();
        canvas.gesture_start(pos2(10.0, 10.0));
        canvas.gesture_move(pos2(20.0, 20.0));
        canvas.gesture_move(pos2(40.0, 20.0));

        let mut renderer = Renderer::new(Color32::WHITE);
        renderer.render(&ctx, &painter, rect, &mut canvas);

        assert!(!canvas.take_redraw_request());
        let surface = renderer.surface.as_ref().unwrap();
        assert_eq!([surface.width(), surface.height()], [100, 100]);
        assert_eq!(surface.pixel(30, 20).unwrap().alpha(), 255);
    }
}
