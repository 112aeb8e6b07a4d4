// src/map/mod.rs

//! In-memory map document: vertices, lines, sectors and things addressed by
//! index, plus the tag and position lookups the special processing needs.

pub mod geometry;
pub mod objects;
pub mod plane;

pub use objects::{Line, RenderStyle, Sector, Surface, Thing, Vertex};
pub use plane::Plane;

use nalgebra::Vector2;

#[derive(Clone, Debug, Default)]
pub struct MapData {
    pub vertices: Vec<Vertex>,
    pub lines: Vec<Line>,
    pub sectors: Vec<Sector>,
    pub things: Vec<Thing>,
}

impl MapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    pub fn add_sector(&mut self, sector: Sector) -> usize {
        self.sectors.push(sector);
        self.sectors.len() - 1
    }

    pub fn add_thing(&mut self, thing: Thing) -> usize {
        self.things.push(thing);
        self.things.len() - 1
    }

    /// Endpoints of a line as (start, end).
    pub fn line_points(&self, line: usize) -> (Vector2<f64>, Vector2<f64>) {
        let l = &self.lines[line];
        (self.vertices[l.v1].position(), self.vertices[l.v2].position())
    }

    pub fn sectors_with_id(&self, id: i32) -> impl Iterator<Item = usize> + '_ {
        self.sectors
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.id == id)
            .map(|(i, _)| i)
    }

    pub fn lines_with_id(&self, id: i32) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(move |(_, l)| l.id == id)
            .map(|(i, _)| i)
    }

    pub fn first_sector_with_id(&self, id: i32) -> Option<usize> {
        self.sectors_with_id(id).next()
    }

    /// Lines with `sector` on either side, in line order.
    pub fn sector_lines(&self, sector: usize) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.touches(sector))
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct vertices on the boundary of `sector`, in the order the
    /// sector's lines first reach them.
    pub fn sector_vertices(&self, sector: usize) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for line in self.sector_lines(sector) {
            let l = &self.lines[line];
            for v in [l.v1, l.v2] {
                if !out.contains(&v) {
                    out.push(v);
                }
            }
        }
        out
    }

    /// First sector (by index) whose boundary encloses the point.
    pub fn sector_at(&self, point: Vector2<f64>) -> Option<usize> {
        (0..self.sectors.len()).find(|&s| self.sector_contains(s, point))
    }

    fn sector_contains(&self, sector: usize, point: Vector2<f64>) -> bool {
        let mut inside = false;
        for (i, line) in self.lines.iter().enumerate() {
            // lines with the sector on both sides are not part of its boundary
            if !line.touches(sector) || line.front == line.back {
                continue;
            }
            let (start, end) = self.line_points(i);
            if geometry::ray_crosses(point, start, end) {
                inside = !inside;
            }
        }
        inside
    }

    /// First vertex (by index) sitting exactly on the point.
    pub fn vertex_at(&self, x: f64, y: f64) -> Option<usize> {
        self.vertices.iter().position(|v| v.x == x && v.y == y)
    }
}

#[cfg(test)]
mod tests;
