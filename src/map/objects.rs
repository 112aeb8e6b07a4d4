// src/map/objects.rs

use nalgebra::Vector2;

use crate::map::plane::Plane;

/// Selects the floor or ceiling of a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Floor,
    Ceiling,
}

/// How a line's middle texture is blended when drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Normal,
    Translucent,
    Additive,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    // authored per-vertex heights (UDMF zfloor / zceiling)
    pub floor_z: Option<f64>,
    pub ceiling_z: Option<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, floor_z: None, ceiling_z: None }
    }

    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn height_prop(&self, surface: Surface) -> Option<f64> {
        match surface {
            Surface::Floor => self.floor_z,
            Surface::Ceiling => self.ceiling_z,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub v1: usize,
    pub v2: usize,
    pub front: Option<usize>,
    pub back: Option<usize>,
    pub special: i32,
    pub args: [i32; 5],
    /// Line tag.
    pub id: i32,
    pub alpha: f64,
    pub render_style: RenderStyle,
}

impl Line {
    pub fn new(v1: usize, v2: usize, front: Option<usize>, back: Option<usize>) -> Self {
        Self {
            v1,
            v2,
            front,
            back,
            special: 0,
            args: [0; 5],
            id: 0,
            alpha: 1.0,
            render_style: RenderStyle::Normal,
        }
    }

    pub fn with_special(mut self, special: i32, args: [i32; 5]) -> Self {
        self.special = special;
        self.args = args;
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn touches(&self, sector: usize) -> bool {
        self.front == Some(sector) || self.back == Some(sector)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Sector tag. Not unique.
    pub id: i32,
    pub floor_height: f64,
    pub ceiling_height: f64,
    pub floor_plane: Plane,
    pub ceiling_plane: Plane,
    pub modified: bool,
}

impl Sector {
    pub fn new(floor_height: f64, ceiling_height: f64) -> Self {
        Self {
            id: 0,
            floor_height,
            ceiling_height,
            floor_plane: Plane::flat(floor_height),
            ceiling_plane: Plane::flat(ceiling_height),
            modified: false,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Unslanted height of the given surface.
    pub fn plane_height(&self, surface: Surface) -> f64 {
        match surface {
            Surface::Floor => self.floor_height,
            Surface::Ceiling => self.ceiling_height,
        }
    }

    pub fn plane(&self, surface: Surface) -> Plane {
        match surface {
            Surface::Floor => self.floor_plane,
            Surface::Ceiling => self.ceiling_plane,
        }
    }

    pub fn set_plane(&mut self, surface: Surface, plane: Plane) {
        match surface {
            Surface::Floor => self.floor_plane = plane,
            Surface::Ceiling => self.ceiling_plane = plane,
        }
    }

    /// Puts both planes back to flat at the sector's own heights.
    pub fn reset_planes(&mut self) {
        self.floor_plane = Plane::flat(self.floor_height);
        self.ceiling_plane = Plane::flat(self.ceiling_height);
    }

    pub fn set_modified(&mut self) {
        self.modified = true;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Thing {
    /// Thing type (editor number).
    pub kind: i32,
    pub x: f64,
    pub y: f64,
    /// Height above the floor, or absolute for some slope things.
    pub z: f64,
    /// Facing, in degrees.
    pub angle: i32,
    /// Thing id (TID).
    pub id: i32,
    pub args: [i32; 5],
}

impl Thing {
    pub fn new(kind: i32, x: f64, y: f64) -> Self {
        Self { kind, x, y, ..Default::default() }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    pub fn with_angle(mut self, angle: i32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_args(mut self, args: [i32; 5]) -> Self {
        self.args = args;
        self
    }

    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}
