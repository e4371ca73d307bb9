use crate::geometry::{radius_point, Rect};
use crate::model::{ColorRgba8, FontWeight, Point, Shape, ShapeKind, TextAlignment, TextRun};
use crate::render::{paint_shapes, Painter};

/// Ordered list of annotations for one frame.
///
/// Insertion order is z-order. Shapes are never edited in place: a caller
/// that wants to move an annotation clears the canvas and adds it again.
#[derive(Debug, Default)]
pub struct ShapeCanvas {
    shapes: Vec<Shape>,
}

impl ShapeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, from: Point, to: Point, color: ColorRgba8, width: f32) {
        let mut shape = Shape::new(ShapeKind::Line, from, to);
        shape.stroke = Some(color);
        shape.line_width = width;
        self.push(shape);
    }

    pub fn add_rect(
        &mut self,
        rect: Rect,
        stroke: Option<ColorRgba8>,
        width: f32,
        fill: Option<ColorRgba8>,
    ) {
        let mut shape = Shape::new(ShapeKind::Rect, rect.origin(), rect.max());
        shape.stroke = stroke;
        shape.fill = fill;
        shape.line_width = width;
        self.push(shape);
    }

    pub fn add_circle(
        &mut self,
        center: Point,
        radius: f32,
        stroke: Option<ColorRgba8>,
        width: f32,
        fill: Option<ColorRgba8>,
    ) {
        let mut shape = Shape::new(ShapeKind::Circle, center, radius_point(center, radius));
        shape.stroke = stroke;
        shape.fill = fill;
        shape.line_width = width;
        self.push(shape);
    }

    pub fn add_dot(&mut self, center: Point, radius: f32, color: ColorRgba8) {
        let mut shape = Shape::new(ShapeKind::Dot, center, radius_point(center, radius));
        shape.fill = Some(color);
        self.push(shape);
    }

    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        origin: Point,
        color: ColorRgba8,
        font_size: f32,
        alignment: TextAlignment,
        weight: FontWeight,
    ) {
        let mut shape = Shape::new(ShapeKind::Text, origin, origin);
        shape.text = Some(TextRun {
            content: text.into(),
            color,
            font_size,
            alignment,
            weight,
        });
        self.push(shape);
    }

    pub fn clear_shapes(&mut self) {
        if !self.shapes.is_empty() {
            tracing::debug!(count = self.shapes.len(), "clearing overlay shapes");
        }
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Issues one draw call per shape, oldest first.
    pub fn paint(&self, painter: &mut dyn Painter) {
        paint_shapes(&self.shapes, painter);
    }

    fn push(&mut self, shape: Shape) {
        tracing::trace!(kind = ?shape.kind(), "queued overlay shape");
        self.shapes.push(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Size;

    fn red() -> ColorRgba8 {
        ColorRgba8::rgb(255, 0, 0)
    }

    fn translucent_green() -> ColorRgba8 {
        ColorRgba8::rgba(0, 255, 0, 96)
    }

    #[test]
    fn shapes_keep_insertion_order() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), red(), 2.0);
        canvas.add_dot(Point::new(3.0, 3.0), 1.5, red());
        canvas.add_text(
            "enemy",
            Point::new(4.0, 8.0),
            red(),
            12.0,
            TextAlignment::Center,
            FontWeight::Bold,
        );

        let kinds: Vec<ShapeKind> = canvas.shapes().iter().map(Shape::kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Line, ShapeKind::Dot, ShapeKind::Text]);
    }

    #[test]
    fn clear_empties_regardless_of_count() {
        let mut canvas = ShapeCanvas::new();
        for i in 0..50 {
            canvas.add_circle(Point::new(i as f32, 0.0), 4.0, Some(red()), 1.0, None);
        }
        assert_eq!(canvas.len(), 50);
        canvas.clear_shapes();
        assert!(canvas.is_empty());
        assert!(canvas.shapes().is_empty());

        canvas.clear_shapes();
        assert!(canvas.is_empty());
    }

    #[test]
    fn rect_records_stroke_and_fill() {
        let mut canvas = ShapeCanvas::new();
        let rect = Rect::from_origin_size(
            Point::new(10.0, 20.0),
            Size {
                width: 30.0,
                height: 40.0,
            },
        );
        canvas.add_rect(rect, Some(red()), 3.0, Some(translucent_green()));

        let sh = &canvas.shapes()[0];
        assert_eq!(sh.kind(), ShapeKind::Rect);
        assert_eq!(sh.p1, Point::new(10.0, 20.0));
        assert_eq!(sh.p2, Point::new(40.0, 60.0));
        assert_eq!(sh.stroke, Some(red()));
        assert_eq!(sh.fill, Some(translucent_green()));
        assert_eq!(sh.line_width, 3.0);
        assert!(sh.text.is_none());
    }

    #[test]
    fn negative_values_are_accepted() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_circle(Point::new(0.0, 0.0), -5.0, None, -1.0, None);
        let sh = &canvas.shapes()[0];
        assert_eq!(sh.p2, Point::new(-5.0, 0.0));
        assert_eq!(sh.line_width, -1.0);
    }

    #[test]
    fn dot_is_fill_only_and_text_carries_run() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_dot(Point::new(1.0, 1.0), 2.0, red());
        canvas.add_text(
            "hp 100",
            Point::new(5.0, 5.0),
            translucent_green(),
            10.0,
            TextAlignment::Right,
            FontWeight::Medium,
        );

        let dot = &canvas.shapes()[0];
        assert_eq!(dot.fill, Some(red()));
        assert_eq!(dot.stroke, None);

        let text = canvas.shapes()[1].text.as_ref().unwrap();
        assert_eq!(text.content, "hp 100");
        assert_eq!(text.color, translucent_green());
        assert_eq!(text.alignment, TextAlignment::Right);
        assert_eq!(text.weight, FontWeight::Medium);
    }
}
