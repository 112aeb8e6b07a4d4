// src/map/geometry.rs

//! 2-D helpers for points against line segments, in map units.

use nalgebra::Vector2;

/// Which side of the segment `start -> end` the point is on.
///
/// Positive is the right-hand (front) side, negative the left-hand (back)
/// side, zero means the point is on the infinite line.
pub fn line_side(point: Vector2<f64>, start: Vector2<f64>, end: Vector2<f64>) -> f64 {
    (point.x - start.x) * (end.y - start.y) - (point.y - start.y) * (end.x - start.x)
}

/// Shortest distance from `point` to the segment `start -> end`.
pub fn distance_to_segment(point: Vector2<f64>, start: Vector2<f64>, end: Vector2<f64>) -> f64 {
    let dir = end - start;
    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return (point - start).norm();
    }

    let t = ((point - start).dot(&dir) / len_sq).clamp(0.0, 1.0);
    (point - (start + dir * t)).norm()
}

/// Perpendicular distance from `point` to the infinite line through the
/// segment. Zero-length segments fall back to the distance to `start`.
pub fn distance_to_line(point: Vector2<f64>, start: Vector2<f64>, end: Vector2<f64>) -> f64 {
    let len = (end - start).norm();
    if len == 0.0 {
        return (point - start).norm();
    }
    line_side(point, start, end).abs() / len
}

/// Even-odd crossing test of a horizontal ray from `point` against one edge.
pub fn ray_crosses(point: Vector2<f64>, start: Vector2<f64>, end: Vector2<f64>) -> bool {
    if (start.y > point.y) == (end.y > point.y) {
        return false;
    }
    let x_at = start.x + (point.y - start.y) * (end.x - start.x) / (end.y - start.y);
    point.x < x_at
}
