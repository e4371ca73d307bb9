use crate::model::{Point, Shape, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn from_points(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let max_x = a.x.max(b.x);
        let min_y = a.y.min(b.y);
        let max_y = a.y.max(b.y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::from_points(
            origin,
            Point {
                x: origin.x + size.width,
                y: origin.y + size.height,
            },
        )
    }

    pub fn origin(&self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    pub fn max(&self) -> Point {
        Point {
            x: self.max_x,
            y: self.max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Point stored in `p2` for round shapes: one radius to the right of the center.
///
/// The sign of the radius survives the round trip so a negative radius reaches
/// the painter unchanged.
pub fn radius_point(center: Point, radius: f32) -> Point {
    Point {
        x: center.x + radius,
        y: center.y,
    }
}

pub fn radius_from_points(center: Point, edge: Point) -> f32 {
    edge.x - center.x
}

pub fn rect_for_shape(shape: &Shape) -> Rect {
    Rect::from_points(shape.p1, shape.p2)
}
