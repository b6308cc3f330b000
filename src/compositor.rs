//! Compositing of the drawing log with tiny-skia.
//!
//! Strokes are stroked oldest first into a premultiplied RGBA pixmap as
//! round-capped, round-joined polylines of [`LINE_WIDTH`]. Paint strokes use
//! source-over; eraser strokes use the clear blend, so the pixels under their
//! path become transparent whatever the stroke color.

use tiny_skia::{
    BlendMode as SkiaBlendMode, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap,
    Stroke as SkiaStroke, Transform,
};

use crate::stroke::{BlendMode, LINE_WIDTH, Stroke};

/// Composites `strokes` onto `pixmap`, in order.
pub fn composite(strokes: &[Stroke], pixmap: &mut Pixmap) {
    let line = line_style();
    for stroke in strokes {
        composite_stroke(stroke, &line, pixmap);
    }
}

/// Renders `strokes` onto a fresh transparent pixmap. Returns `None` for an
/// empty surface.
pub fn render(strokes: &[Stroke], width: u32, height: u32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    composite(strokes, &mut pixmap);
    Some(pixmap)
}

fn composite_stroke(stroke: &Stroke, line: &SkiaStroke, pixmap: &mut Pixmap) {
    // Fewer than two points draw nothing.
    if !stroke.is_visible() {
        return;
    }
    let Some(path) = build_path(stroke) else {
        return;
    };

    pixmap.stroke_path(&path, &paint_for(stroke), line, Transform::identity(), None);
}

fn build_path(stroke: &Stroke) -> Option<Path> {
    let (first, rest) = stroke.points().split_first()?;

    let mut builder = PathBuilder::new();
    builder.move_to(first.x, first.y);
    for point in rest {
        builder.line_to(point.x, point.y);
    }
    builder.finish()
}

fn line_style() -> SkiaStroke {
    SkiaStroke {
        width: LINE_WIDTH,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..SkiaStroke::default()
    }
}

fn paint_for(stroke: &Stroke) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.blend_mode = to_skia(stroke.blend_mode());
    if paint.blend_mode == SkiaBlendMode::SourceOver {
        let [r, g, b, a] = stroke.color().to_srgba_unmultiplied();
        paint.set_color_rgba8(r, g, b, a);
    }
    paint
}

fn to_skia(blend: BlendMode) -> SkiaBlendMode {
    match blend {
        BlendMode::Normal => SkiaBlendMode::SourceOver,
        BlendMode::Clear => SkiaBlendMode::Clear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn stroke(blend: BlendMode, points: &[(f32, f32)]) -> Stroke {
        let mut stroke = Stroke::new(Color32::RED, blend);
        for &(x, y) in points {
            stroke.push_point(pos2(x, y));
        }
        stroke
    }

    #[test]
    fn test_blend_mode_mapping() {
        assert_eq!(to_skia(BlendMode::Normal), SkiaBlendMode::SourceOver);
        assert_eq!(to_skia(BlendMode::Clear), SkiaBlendMode::Clear);
    }

    #[test]
    fn test_line_style_is_round() {
        let line = line_style();
        assert_eq!(line.width, LINE_WIDTH);
        assert_eq!(line.line_cap, LineCap::Round);
        assert_eq!(line.line_join, LineJoin::Round);
    }

    #[test]
    fn test_path_follows_points_in_order() {
        let path = build_path(&stroke(BlendMode::Normal, &[(1.0, 2.0), (5.0, 2.0), (5.0, 9.0)]))
            .unwrap();
        let points: Vec<_> = path.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(1.0, 2.0), (5.0, 2.0), (5.0, 9.0)]);
        assert!(build_path(&stroke(BlendMode::Normal, &[])).is_none());
    }

    #[test]
    fn test_empty_surface_has_no_pixmap() {
        assert!(render(&[], 0, 10).is_none());
    }

    #[test]
    fn test_eraser_paint_ignores_color() {
        let paint = paint_for(&stroke(BlendMode::Clear, &[]));
        assert_eq!(paint.blend_mode, SkiaBlendMode::Clear);
    }
}
