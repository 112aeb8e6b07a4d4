// src/specials/slopes.rs

//! Slope specials. The mechanisms run in the same order as in the engine,
//! and later ones overwrite planes set by earlier ones:
//!
//!  - Plane_Align, in line order
//!  - line slope, sector tilt and vavoom things, in thing order
//!  - slope copy things, in thing order
//!  - vertex height things overriding vertex heights
//!  - vertex triangle slopes, in sector order
//!  - Plane_Copy, in line order
//!
//! Eternity only has Plane_Align and Plane_Copy.

use std::collections::HashMap;

use log::{debug, warn};
use nalgebra::Vector3;

use crate::map::{geometry, MapData, Plane, Surface};
use crate::specials::codes;

/// Plane_Align needs a vertex at least this far from the line.
const MIN_ALIGN_DISTANCE: f64 = 0.01;

const SURFACES: [Surface; 2] = [Surface::Floor, Surface::Ceiling];

pub(crate) fn process_zdoom_slopes(map: &mut MapData) {
    reset_planes(map);
    apply_plane_aligns(map);

    for thing in 0..map.things.len() {
        let kind = map.things[thing].kind;
        let result = match kind {
            codes::LINE_SLOPE_FLOOR => apply_line_slope_thing(map, thing, Surface::Floor),
            codes::LINE_SLOPE_CEILING => apply_line_slope_thing(map, thing, Surface::Ceiling),
            codes::SECTOR_TILT_FLOOR => apply_sector_tilt_thing(map, thing, Surface::Floor),
            codes::SECTOR_TILT_CEILING => apply_sector_tilt_thing(map, thing, Surface::Ceiling),
            codes::VAVOOM_FLOOR => apply_vavoom_thing(map, thing, Surface::Floor),
            codes::VAVOOM_CEILING => apply_vavoom_thing(map, thing, Surface::Ceiling),
            _ => Ok(()),
        };
        if let Err(msg) = result {
            warn!("{}", msg);
        }
    }

    for thing in 0..map.things.len() {
        let kind = map.things[thing].kind;
        let result = match kind {
            codes::COPY_FLOOR_SLOPE => apply_slope_copy_thing(map, thing, Surface::Floor),
            codes::COPY_CEILING_SLOPE => apply_slope_copy_thing(map, thing, Surface::Ceiling),
            _ => Ok(()),
        };
        if let Err(msg) = result {
            warn!("{}", msg);
        }
    }

    // only used while working out slopes, never written back to the vertices
    let heights = VertexHeights::from_things(map);
    apply_vertex_height_slopes(map, &heights);

    apply_plane_copies(map);
}

pub(crate) fn process_eternity_slopes(map: &mut MapData) {
    reset_planes(map);
    apply_plane_aligns(map);
    apply_plane_copies(map);
}

fn reset_planes(map: &mut MapData) {
    for sector in map.sectors.iter_mut() {
        sector.reset_planes();
    }
}

fn apply_plane_aligns(map: &mut MapData) {
    for line in 0..map.lines.len() {
        if map.lines[line].special != codes::PLANE_ALIGN {
            continue;
        }
        if let Err(msg) = apply_plane_align_line(map, line) {
            warn!("{}", msg);
        }
    }
}

/// Plane_Align(floor, ceiling): 1 slopes the front sector to meet the back
/// one, 2 the other way round.
pub(crate) fn apply_plane_align_line(map: &mut MapData, line: usize) -> Result<(), String> {
    let l = &map.lines[line];
    let (front, back) = match (l.front, l.back) {
        (Some(front), Some(back)) => (front, back),
        _ => return Err(format!("Ignoring Plane_Align on one-sided line {}", line)),
    };
    if front == back {
        return Err(format!(
            "Ignoring Plane_Align on line {}, which has the same sector on both sides",
            line
        ));
    }

    let args = l.args;
    for (surface, arg) in SURFACES.into_iter().zip([args[0], args[1]]) {
        let result = match arg {
            1 => apply_plane_align(map, line, front, back, surface),
            2 => apply_plane_align(map, line, back, front, surface),
            _ => Ok(()),
        };
        if let Err(msg) = result {
            warn!("{}", msg);
        }
    }

    Ok(())
}

/// Slopes `target` from the line (at the height of `model`) to the target
/// vertex furthest from the line (at the target's own height).
pub(crate) fn apply_plane_align(
    map: &mut MapData,
    line: usize,
    target: usize,
    model: usize,
    surface: Surface,
) -> Result<(), String> {
    let (start, end) = map.line_points(line);

    let mut furthest: Option<(usize, f64)> = None;
    for vertex in map.sector_vertices(target) {
        let dist = geometry::distance_to_segment(map.vertices[vertex].position(), start, end);
        if dist > furthest.map_or(0.0, |(_, d)| d) {
            furthest = Some((vertex, dist));
        }
    }

    let (vertex, _) = furthest
        .filter(|&(_, dist)| dist >= MIN_ALIGN_DISTANCE)
        .ok_or_else(|| {
            format!(
                "Ignoring Plane_Align on line {}; sector {} has no appropriate reference vertex",
                line, target
            )
        })?;

    let model_z = map.sectors[model].plane_height(surface);
    let target_z = map.sectors[target].plane_height(surface);
    let v = &map.vertices[vertex];

    let p1 = Vector3::new(start.x, start.y, model_z);
    let p2 = Vector3::new(end.x, end.y, model_z);
    let p3 = Vector3::new(v.x, v.y, target_z);
    map.sectors[target].set_plane(surface, Plane::from_triangle(p1, p2, p3));

    Ok(())
}

/// Line slope things slope the sector on the side of each tagged line that
/// faces the thing, through the line and the thing.
pub(crate) fn apply_line_slope_thing(
    map: &mut MapData,
    thing: usize,
    surface: Surface,
) -> Result<(), String> {
    let t = map.things[thing].clone();
    let line_id = t.args[0];
    if line_id == 0 {
        return Err(format!("Ignoring line slope thing {} with no lineid argument", thing));
    }

    let pos = t.position();
    // worked out on first use, from the containing sector's plane at that point
    let mut thing_z: Option<f64> = None;

    let tagged: Vec<usize> = map.lines_with_id(line_id).collect();
    for line in tagged {
        let (start, end) = map.line_points(line);
        let side = geometry::line_side(pos, start, end);
        let l = &map.lines[line];
        let target = if side < 0.0 {
            l.back
        } else if side > 0.0 {
            l.front
        } else {
            None
        };
        let Some(target) = target else {
            continue;
        };

        let z = match thing_z {
            Some(z) => z,
            None => {
                let Some(containing) = map.sector_at(pos) else {
                    debug!("Line slope thing {} is outside the map", thing);
                    return Ok(());
                };
                let z = map.sectors[containing].plane(surface).height_at(t.x, t.y) + t.z;
                thing_z = Some(z);
                z
            }
        };

        let plane = map.sectors[target].plane(surface);
        let p1 = Vector3::new(start.x, start.y, plane.height_at(start.x, start.y));
        let p2 = Vector3::new(end.x, end.y, plane.height_at(end.x, end.y));
        let p3 = Vector3::new(t.x, t.y, z);
        map.sectors[target].set_plane(surface, Plane::from_triangle(p1, p2, p3));
    }

    Ok(())
}

/// Sector tilt things pivot the containing sector's plane around the axis
/// perpendicular to the thing's facing. The first argument is the tilt, with
/// 90 meaning level.
pub(crate) fn apply_sector_tilt_thing(
    map: &mut MapData,
    thing: usize,
    surface: Surface,
) -> Result<(), String> {
    let t = &map.things[thing];
    let Some(target) = map.sector_at(t.position()) else {
        return Ok(());
    };

    let raw_tilt = t.args[0];
    if raw_tilt == 0 || raw_tilt == 180 {
        return Err(format!(
            "Ignoring sector tilt thing {} with vertical tilt {}",
            thing, raw_tilt
        ));
    }

    let angle = (t.angle as f64).to_radians();
    let tilt = ((raw_tilt - 90) as f64).to_radians();
    let z = map.sectors[target].plane_height(surface) + t.z;
    let point = Vector3::new(t.x, t.y, z);

    // the hinge lies flat, a quarter turn from the facing direction
    let hinge = Vector3::new(-angle.sin(), angle.cos(), 0.0);
    // tilt splits into a rise along z and a run along the facing direction
    let slope = Vector3::new(tilt.cos() * angle.cos(), tilt.cos() * angle.sin(), tilt.sin());

    map.sectors[target].set_plane(surface, Plane::from_point_and_vectors(point, hinge, slope));
    Ok(())
}

/// Vavoom things slope the containing sector through the thing (absolute
/// height) and the first boundary line whose first argument is the thing's
/// id (at the sector's unslanted height).
pub(crate) fn apply_vavoom_thing(
    map: &mut MapData,
    thing: usize,
    surface: Surface,
) -> Result<(), String> {
    let t = map.things[thing].clone();
    let pos = t.position();
    let Some(target) = map.sector_at(pos) else {
        return Ok(());
    };

    // TODO check ZDoom's line order when several boundary lines carry the id
    for line in map.sector_lines(target) {
        if map.lines[line].args[0] != t.id {
            continue;
        }

        let (start, end) = map.line_points(line);
        if geometry::distance_to_line(pos, start, end) == 0.0 {
            return Err(format!(
                "Vavoom thing {} lies directly on its target line {}",
                thing, line
            ));
        }

        let height = map.sectors[target].plane_height(surface);
        let p1 = Vector3::new(t.x, t.y, t.z);
        let p2 = Vector3::new(start.x, start.y, height);
        let p3 = Vector3::new(end.x, end.y, height);
        map.sectors[target].set_plane(surface, Plane::from_triangle(p1, p2, p3));
        return Ok(());
    }

    Err(format!(
        "Vavoom thing {} has no matching line with first arg {}",
        thing, t.id
    ))
}

/// Copies the plane of the first sector tagged with the thing's first
/// argument onto the sector containing the thing.
pub(crate) fn apply_slope_copy_thing(
    map: &mut MapData,
    thing: usize,
    surface: Surface,
) -> Result<(), String> {
    let t = &map.things[thing];
    let Some(target) = map.sector_at(t.position()) else {
        return Ok(());
    };

    let tag = t.args[0];
    if tag == 0 {
        return Err(format!(
            "Ignoring slope copy thing in sector {} with no argument",
            target
        ));
    }

    let source = map.first_sector_with_id(tag).ok_or_else(|| {
        format!(
            "Ignoring slope copy thing in sector {}; no sectors have target tag {}",
            target, tag
        )
    })?;

    copy_plane(map, source, target, surface);
    Ok(())
}

/// Heights from vertex height things, keyed by vertex index.
#[derive(Debug, Default)]
pub(crate) struct VertexHeights {
    floor: HashMap<usize, f64>,
    ceiling: HashMap<usize, f64>,
}

impl VertexHeights {
    pub(crate) fn from_things(map: &MapData) -> Self {
        let mut heights = Self::default();
        for thing in &map.things {
            let surface = match thing.kind {
                codes::VERTEX_FLOOR_HEIGHT => Surface::Floor,
                codes::VERTEX_CEILING_HEIGHT => Surface::Ceiling,
                _ => continue,
            };
            // TODO there could be more than one vertex at this position; only the first is used
            if let Some(vertex) = map.vertex_at(thing.x, thing.y) {
                heights.map_mut(surface).insert(vertex, thing.z);
            }
        }
        heights
    }

    pub(crate) fn get(&self, surface: Surface, vertex: usize) -> Option<f64> {
        match surface {
            Surface::Floor => self.floor.get(&vertex).copied(),
            Surface::Ceiling => self.ceiling.get(&vertex).copied(),
        }
    }

    fn map_mut(&mut self, surface: Surface) -> &mut HashMap<usize, f64> {
        match surface {
            Surface::Floor => &mut self.floor,
            Surface::Ceiling => &mut self.ceiling,
        }
    }
}

/// Slopes triangular sectors through the heights of their three vertices.
/// A vertex height thing beats the vertex's own height property, which beats
/// the sector height.
///
/// Every triangle is refit, so whatever an earlier pass wrote on one is
/// replaced, even when none of its vertices carries a height.
pub(crate) fn apply_vertex_height_slopes(map: &mut MapData, heights: &VertexHeights) {
    for sector in 0..map.sectors.len() {
        let vertices = map.sector_vertices(sector);
        if vertices.len() != 3 {
            continue;
        }

        for surface in SURFACES {
            let base = map.sectors[sector].plane_height(surface);
            let points: Vec<Vector3<f64>> = vertices
                .iter()
                .map(|&v| {
                    let vertex = &map.vertices[v];
                    let z = heights.get(surface, v).or(vertex.height_prop(surface)).unwrap_or(base);
                    Vector3::new(vertex.x, vertex.y, z)
                })
                .collect();

            map.sectors[sector].set_plane(surface, Plane::from_triangle(points[0], points[1], points[2]));
        }
    }
}

fn apply_plane_copies(map: &mut MapData) {
    for line in 0..map.lines.len() {
        if map.lines[line].special == codes::PLANE_COPY {
            apply_plane_copy(map, line);
        }
    }
}

/// Plane_Copy(front floor, front ceiling, back floor, back ceiling, share).
///
/// The first four are tags of sectors to copy from. `share` copies between
/// the line's own sides: bits 0-1 for the floor, bits 2-3 for the ceiling,
/// 1 = front to back, 2 = back to front.
pub(crate) fn apply_plane_copy(map: &mut MapData, line: usize) {
    let l = &map.lines[line];
    let (front, back, args) = (l.front, l.back, l.args);

    let copies = [
        (args[0], front, Surface::Floor),
        (args[1], front, Surface::Ceiling),
        (args[2], back, Surface::Floor),
        (args[3], back, Surface::Ceiling),
    ];
    for (tag, target, surface) in copies {
        let Some(target) = target.filter(|_| tag != 0) else {
            continue;
        };
        match map.first_sector_with_id(tag) {
            Some(source) => copy_plane(map, source, target, surface),
            None => debug!("Plane_Copy on line {}: no sector with tag {}", line, tag),
        }
    }

    let (Some(front), Some(back)) = (front, back) else {
        return;
    };
    let share = args[4];
    for (surface, bits) in SURFACES.into_iter().zip([share & 3, (share >> 2) & 3]) {
        match bits {
            1 => copy_plane(map, front, back, surface),
            2 => copy_plane(map, back, front, surface),
            _ => {}
        }
    }
}

fn copy_plane(map: &mut MapData, from: usize, to: usize, surface: Surface) {
    let plane = map.sectors[from].plane(surface);
    map.sectors[to].set_plane(surface, plane);
}
