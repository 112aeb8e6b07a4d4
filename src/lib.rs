//! Post-load processing of map specials for a level editor.
//!
//! Derives sloped floor/ceiling planes, line translucency and tag colours
//! from the specials, things and scripts stored in a map, so the editor can
//! show what the game engine would compute at run time.

pub mod map;
pub mod specials;

pub use map::MapData;
pub use specials::{MapSpecials, Port};

#[cfg(test)]
pub(crate) mod test_maps;
