use crate::geometry::{radius_from_points, rect_for_shape, Rect};
use crate::model::{ColorRgba8, Point, Shape, ShapeKind, TextRun};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    pub color: ColorRgba8,
    pub width: f32,
}

/// A shape resolved into the arguments the host's drawing surface needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: StrokeParams,
    },
    Rect {
        rect: Rect,
        stroke: Option<StrokeParams>,
        fill: Option<ColorRgba8>,
    },
    Circle {
        center: Point,
        radius: f32,
        stroke: Option<StrokeParams>,
        fill: Option<ColorRgba8>,
    },
    Dot {
        center: Point,
        radius: f32,
        color: ColorRgba8,
    },
    Text {
        origin: Point,
        run: TextRun,
    },
}

/// Drawing surface the overlay paints into. Rasterization is the host's job.
pub trait Painter {
    fn draw(&mut self, command: &DrawCommand);
}

impl Painter for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

fn stroke_of(shape: &Shape) -> Option<StrokeParams> {
    shape.stroke.map(|color| StrokeParams {
        color,
        width: shape.line_width,
    })
}

pub fn resolve_shape(shape: &Shape) -> Option<DrawCommand> {
    match shape.kind() {
        ShapeKind::Line => Some(DrawCommand::Line {
            from: shape.p1,
            to: shape.p2,
            stroke: stroke_of(shape)?,
        }),
        ShapeKind::Rect => {
            if shape.stroke.is_none() && shape.fill.is_none() {
                return None;
            }
            Some(DrawCommand::Rect {
                rect: rect_for_shape(shape),
                stroke: stroke_of(shape),
                fill: shape.fill,
            })
        }
        ShapeKind::Circle => {
            if shape.stroke.is_none() && shape.fill.is_none() {
                return None;
            }
            Some(DrawCommand::Circle {
                center: shape.p1,
                radius: radius_from_points(shape.p1, shape.p2),
                stroke: stroke_of(shape),
                fill: shape.fill,
            })
        }
        ShapeKind::Dot => Some(DrawCommand::Dot {
            center: shape.p1,
            radius: radius_from_points(shape.p1, shape.p2),
            color: shape.fill?,
        }),
        ShapeKind::Text => Some(DrawCommand::Text {
            origin: shape.p1,
            run: shape.text.clone()?,
        }),
    }
}

/// Paints `shapes` front to back in slice order; later entries end up on top.
/// Shapes with nothing visible to draw (no stroke and no fill) are skipped.
pub fn paint_shapes(shapes: &[Shape], painter: &mut dyn Painter) {
    for shape in shapes {
        if let Some(command) = resolve_shape(shape) {
            painter.draw(&command);
        }
    }
}

pub fn render_frame(shapes: &[Shape]) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(shapes.len());
    paint_shapes(shapes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ShapeCanvas;
    use crate::model::{FontWeight, Size, TextAlignment};

    fn white() -> ColorRgba8 {
        ColorRgba8::rgb(255, 255, 255)
    }

    #[test]
    fn frame_follows_canvas_order() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_rect(
            Rect::from_origin_size(
                Point::new(0.0, 0.0),
                Size {
                    width: 8.0,
                    height: 8.0,
                },
            ),
            Some(white()),
            1.0,
            None,
        );
        canvas.add_line(Point::new(0.0, 0.0), Point::new(4.0, 4.0), white(), 2.0);

        let frame = render_frame(canvas.shapes());
        assert_eq!(frame.len(), 2);
        assert!(matches!(frame[0], DrawCommand::Rect { fill: None, .. }));
        assert!(matches!(frame[1], DrawCommand::Line { .. }));
    }

    #[test]
    fn circle_resolves_radius_and_optional_stroke() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_circle(Point::new(10.0, 10.0), 6.0, None, 2.0, Some(white()));

        match &render_frame(canvas.shapes())[0] {
            DrawCommand::Circle {
                center,
                radius,
                stroke,
                fill,
            } => {
                assert_eq!(*center, Point::new(10.0, 10.0));
                assert_eq!(*radius, 6.0);
                assert!(stroke.is_none());
                assert_eq!(*fill, Some(white()));
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn invisible_shapes_are_skipped() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_rect(
            Rect::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            None,
            1.0,
            None,
        );
        canvas.add_text(
            "x",
            Point::new(0.0, 0.0),
            white(),
            9.0,
            TextAlignment::Left,
            FontWeight::Regular,
        );

        let frame = render_frame(canvas.shapes());
        assert_eq!(frame.len(), 1);
        assert!(matches!(frame[0], DrawCommand::Text { .. }));
    }

    #[test]
    fn painting_a_cleared_canvas_draws_nothing() {
        let mut canvas = ShapeCanvas::new();
        canvas.add_dot(Point::new(1.0, 1.0), 1.0, white());
        canvas.clear_shapes();

        let mut painted: Vec<DrawCommand> = Vec::new();
        canvas.paint(&mut painted);
        assert!(painted.is_empty());
    }
}
