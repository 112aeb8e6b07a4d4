// src/test_maps.rs

//! Small hand-built maps shared by the unit tests.

use crate::map::{Line, MapData, Sector, Vertex};

/// Two 128x128 rooms side by side, sharing the line at x = 128.
pub(crate) struct TwoRooms {
    pub map: MapData,
    /// x 0..128, floor 0, ceiling 128
    pub west: usize,
    /// x 128..256, floor 64, ceiling 192
    pub east: usize,
    /// west room's left wall, x = 0
    pub west_wall: usize,
    /// the shared line, front = west, back = east
    pub shared: usize,
}

pub(crate) fn two_rooms() -> TwoRooms {
    let mut map = MapData::new();

    let v0 = map.add_vertex(Vertex::new(0.0, 0.0));
    let v1 = map.add_vertex(Vertex::new(128.0, 0.0));
    let v2 = map.add_vertex(Vertex::new(128.0, 128.0));
    let v3 = map.add_vertex(Vertex::new(0.0, 128.0));
    let v4 = map.add_vertex(Vertex::new(256.0, 0.0));
    let v5 = map.add_vertex(Vertex::new(256.0, 128.0));

    let west = map.add_sector(Sector::new(0.0, 128.0));
    let east = map.add_sector(Sector::new(64.0, 192.0));

    // front sides face into the rooms
    let west_wall = map.add_line(Line::new(v0, v3, Some(west), None));
    map.add_line(Line::new(v3, v2, Some(west), None));
    let shared = map.add_line(Line::new(v2, v1, Some(west), Some(east)));
    map.add_line(Line::new(v1, v0, Some(west), None));
    map.add_line(Line::new(v2, v5, Some(east), None));
    map.add_line(Line::new(v5, v4, Some(east), None));
    map.add_line(Line::new(v4, v1, Some(east), None));

    TwoRooms { map, west, east, west_wall, shared }
}

/// A right triangle with corners (0,0), (0,128), (128,0), floor 0,
/// ceiling 128. Returns the map and the three vertex indices.
pub(crate) fn triangle() -> (MapData, [usize; 3]) {
    let mut map = MapData::new();

    let a = map.add_vertex(Vertex::new(0.0, 0.0));
    let b = map.add_vertex(Vertex::new(0.0, 128.0));
    let c = map.add_vertex(Vertex::new(128.0, 0.0));

    let sector = map.add_sector(Sector::new(0.0, 128.0));
    map.add_line(Line::new(a, b, Some(sector), None));
    map.add_line(Line::new(b, c, Some(sector), None));
    map.add_line(Line::new(c, a, Some(sector), None));

    (map, [a, b, c])
}
