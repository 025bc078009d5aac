//! Vector paths and the clip shapes built from them.
//!
//! Angles follow screen coordinates: y grows downwards, 0° points along +x and
//! 90° points along +y, so a positive sweep turns visually clockwise.

use crate::geometry::{Point, Rect};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc; the pen first travels in a straight line to the arc start.
    Arc {
        center: Point,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    },
    Close,
}

/// Description of one arc segment inside a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f32,
    pub start_degrees: f32,
    pub sweep_degrees: f32,
}

impl ArcSegment {
    pub fn point_at(&self, degrees: f32) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            self.center.x + self.radius * radians.cos(),
            self.center.y + self.radius * radians.sin(),
        )
    }

    pub fn start(&self) -> Point {
        self.point_at(self.start_degrees)
    }

    pub fn end(&self) -> Point {
        self.point_at(self.start_degrees + self.sweep_degrees)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    ) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_degrees,
            sweep_degrees,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn arcs(&self) -> impl Iterator<Item = ArcSegment> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            PathCommand::Arc {
                center,
                radius,
                start_degrees,
                sweep_degrees,
            } => Some(ArcSegment {
                center,
                radius,
                start_degrees,
                sweep_degrees,
            }),
            _ => None,
        })
    }

    /// Points the outline reaches through straight commands only. A rectangle
    /// corner listed here is a sharp corner of the outline.
    pub fn vertices(&self) -> SmallVec<[Point; 8]> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(point),
                _ => None,
            })
            .collect()
    }

    /// Approximates the outline with straight segments, `arc_segments` per arc.
    ///
    /// The returned polyline is not explicitly closed; a closed path implies an
    /// edge from the last point back to the first.
    pub fn flatten(&self, arc_segments: usize) -> Vec<Point> {
        let arc_segments = arc_segments.max(1);
        let mut points = Vec::with_capacity(self.commands.len() + 2 * arc_segments);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => points.push(point),
                PathCommand::Arc {
                    center,
                    radius,
                    start_degrees,
                    sweep_degrees,
                } => {
                    let arc = ArcSegment {
                        center,
                        radius,
                        start_degrees,
                        sweep_degrees,
                    };
                    for step in 0..=arc_segments {
                        let fraction = step as f32 / arc_segments as f32;
                        let point = arc.point_at(start_degrees + sweep_degrees * fraction);
                        if points.last() != Some(&point) {
                            points.push(point);
                        }
                    }
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Axis-aligned bounds of the flattened outline.
    pub fn bounds(&self) -> Option<Rect> {
        let points = self.flatten(8);
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

/// Something that can describe its outline inside a bounding rectangle.
pub trait Shape {
    fn path(&self, rect: Rect) -> Path;
}

/// Rectangle with only the top-left and top-right corners rounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopRoundedShape {
    pub corner_radius: f32,
}

impl TopRoundedShape {
    pub const fn new(corner_radius: f32) -> Self {
        Self { corner_radius }
    }

    /// Radius actually used for `rect`: never negative, never more than half
    /// of the smaller side.
    pub fn resolved_radius(&self, rect: Rect) -> f32 {
        let limit = (rect.width.min(rect.height) / 2.0).max(0.0);
        self.corner_radius.clamp(0.0, limit)
    }
}

impl Shape for TopRoundedShape {
    fn path(&self, rect: Rect) -> Path {
        let radius = self.resolved_radius(rect);
        let mut path = Path::new();

        if radius <= 0.0 {
            path.move_to(Point::new(rect.min_x(), rect.min_y()))
                .line_to(Point::new(rect.max_x(), rect.min_y()))
                .line_to(Point::new(rect.max_x(), rect.max_y()))
                .line_to(Point::new(rect.min_x(), rect.max_y()))
                .close();
            return path;
        }

        path.move_to(Point::new(rect.min_x(), rect.min_y() + radius))
            .arc(
                Point::new(rect.min_x() + radius, rect.min_y() + radius),
                radius,
                180.0,
                90.0,
            )
            .line_to(Point::new(rect.max_x() - radius, rect.min_y()))
            .arc(
                Point::new(rect.max_x() - radius, rect.min_y() + radius),
                radius,
                270.0,
                90.0,
            )
            .line_to(Point::new(rect.max_x(), rect.max_y()))
            .line_to(Point::new(rect.min_x(), rect.max_y()))
            .close();
        path
    }
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
