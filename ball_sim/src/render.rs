//! Drawing side of the simulation: erase-and-redraw of ball circles

use crate::run::BallShape;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Bounding box of a circle
    pub fn around_circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            x: cx - radius,
            y: cy - radius,
            width: 2.0 * radius,
            height: 2.0 * radius,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A 2D canvas-like sink
pub trait DrawingSurface {
    fn clear_rect(&mut self, rect: Rect);

    /// Begin a path, trace a full arc, close and fill it
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64);
}

/// Redraws one circle per ball, erasing where each was drawn last frame
#[derive(Debug, Default)]
pub struct BallPainter {
    previous: Vec<Option<Rect>>,
}

impl BallPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paint(&mut self, surface: &mut impl DrawingSurface, shapes: &[BallShape]) {
        if self.previous.len() < shapes.len() {
            self.previous.resize(shapes.len(), None);
        }

        for (shape, previous) in shapes.iter().zip(self.previous.iter_mut()) {
            if let Some(rect) = previous.take() {
                surface.clear_rect(rect);
            }

            let (cx, cy) = (shape.position.x(), shape.position.y());
            surface.fill_circle(cx, cy, shape.radius);
            *previous = Some(Rect::around_circle(cx, cy, shape.radius));
        }
    }

    /// Forget previous frames, e.g. after the surface was cleared wholesale
    pub fn reset(&mut self) {
        self.previous.clear();
    }
}

/// A filled circle kept by [`CircleList`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.cx, self.cy, self.radius)
    }
}

/// Retained-mode surface: remembers the circles currently on screen.
///
/// `clear_rect` drops every circle whose bounds overlap the cleared area,
/// which is what a pixel canvas would show once the region is wiped.
#[derive(Debug, Default)]
pub struct CircleList {
    circles: Vec<Circle>,
}

impl CircleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }
}

impl DrawingSurface for CircleList {
    fn clear_rect(&mut self, rect: Rect) {
        self.circles.retain(|circle| !circle.bounds().intersects(&rect));
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        self.circles.push(Circle { cx, cy, radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rect),
        Fill(f64, f64, f64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawingSurface for Recorder {
        fn clear_rect(&mut self, rect: Rect) {
            self.ops.push(Op::Clear(rect));
        }

        fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
            self.ops.push(Op::Fill(cx, cy, radius));
        }
    }

    fn shape(x: f64, y: f64) -> BallShape {
        BallShape {
            position: Vector::new(x, y).unwrap(),
            radius: 5.0,
        }
    }

    #[test]
    fn first_frame_only_draws() {
        let mut painter = BallPainter::new();
        let mut surface = Recorder::default();

        painter.paint(&mut surface, &[shape(10.0, 20.0), shape(30.0, 40.0)]);

        assert_eq!(
            surface.ops,
            [Op::Fill(10.0, 20.0, 5.0), Op::Fill(30.0, 40.0, 5.0)]
        );
    }

    #[test]
    fn erases_previous_bounds_before_each_draw() {
        let mut painter = BallPainter::new();
        let mut surface = Recorder::default();

        painter.paint(&mut surface, &[shape(10.0, 20.0), shape(30.0, 40.0)]);
        surface.ops.clear();
        painter.paint(&mut surface, &[shape(11.0, 20.0), shape(30.0, 42.0)]);

        assert_eq!(
            surface.ops,
            [
                Op::Clear(Rect { x: 5.0, y: 15.0, width: 10.0, height: 10.0 }),
                Op::Fill(11.0, 20.0, 5.0),
                Op::Clear(Rect { x: 25.0, y: 35.0, width: 10.0, height: 10.0 }),
                Op::Fill(30.0, 42.0, 5.0),
            ]
        );
    }

    #[test]
    fn circle_list_tracks_what_is_visible() {
        let mut painter = BallPainter::new();
        let mut surface = CircleList::new();

        painter.paint(&mut surface, &[shape(10.0, 10.0), shape(100.0, 100.0)]);
        painter.paint(&mut surface, &[shape(12.0, 10.0), shape(100.0, 103.0)]);

        assert_eq!(
            surface.circles(),
            [
                Circle { cx: 12.0, cy: 10.0, radius: 5.0 },
                Circle { cx: 100.0, cy: 103.0, radius: 5.0 },
            ]
        );
    }

    #[test]
    fn clearing_one_ball_can_wipe_an_overlapping_neighbour() {
        let mut surface = CircleList::new();
        surface.fill_circle(10.0, 10.0, 5.0);
        surface.fill_circle(14.0, 10.0, 5.0);
        surface.fill_circle(50.0, 50.0, 5.0);

        surface.clear_rect(Rect::around_circle(10.0, 10.0, 5.0));

        assert_eq!(surface.circles(), [Circle { cx: 50.0, cy: 50.0, radius: 5.0 }]);
    }

    #[test]
    fn rect_intersection_excludes_touching_edges() {
        let a = Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        let b = Rect { x: 10.0, y: 0.0, width: 10.0, height: 10.0 };
        let c = Rect { x: 9.0, y: 9.0, width: 2.0, height: 2.0 };
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }
}
