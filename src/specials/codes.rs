// src/specials/codes.rs

//! Line special numbers and thing types understood by the processing, using
//! ZDoom (Hexen format) numbering.

pub const PLANE_COPY: i32 = 118;
pub const PLANE_ALIGN: i32 = 181;
pub const TRANSLUCENT_LINE: i32 = 208;

pub const VAVOOM_FLOOR: i32 = 1500;
pub const VAVOOM_CEILING: i32 = 1501;
pub const VERTEX_FLOOR_HEIGHT: i32 = 1504;
pub const VERTEX_CEILING_HEIGHT: i32 = 1505;
pub const LINE_SLOPE_FLOOR: i32 = 9500;
pub const LINE_SLOPE_CEILING: i32 = 9501;
pub const SECTOR_TILT_FLOOR: i32 = 9502;
pub const SECTOR_TILT_CEILING: i32 = 9503;
pub const COPY_FLOOR_SLOPE: i32 = 9510;
pub const COPY_CEILING_SLOPE: i32 = 9511;
