//! Draw sinks: the boundary between effect rendering and pixels
//!
//! The effect engine only ever talks to a [`DrawSink`]. Two sinks live
//! here: [`MeshSink`] tessellates into a triangle list for a GPU backend,
//! [`RecordingSink`] keeps the raw calls around for inspection.

use glam::Vec2;

use super::color::Color;
use super::shapes;
use super::vertex::Vertex;

/// Primitive drawing operations supplied by an external renderer
pub trait DrawSink {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);
    fn stroke_path(&mut self, points: &[Vec2], color: Color, width: f32);
}

/// Tessellates every primitive into triangle-list vertices
#[derive(Debug, Default)]
pub struct MeshSink {
    pub vertices: Vec<Vertex>,
}

impl MeshSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's geometry, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl DrawSink for MeshSink {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        let segments = shapes::segments_for_radius(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color.to_array(), segments));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        if radius <= 0.0 || width <= 0.0 || color.a <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let segments = shapes::segments_for_radius(radius);
        self.vertices.extend(shapes::ring(
            center,
            (radius - half).max(0.0),
            radius + half,
            color.to_array(),
            segments,
        ));
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color, width: f32) {
        if width <= 0.0 || color.a <= 0.0 {
            return;
        }
        self.vertices
            .extend(shapes::polyline(points, width, color.to_array()));
    }
}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        width: f32,
    },
    StrokePath {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
}

/// Records every call verbatim
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSink for RecordingSink {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            color,
            width,
        });
    }
}
