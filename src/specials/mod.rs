// src/specials/mod.rs

pub mod codes;
mod line_special;
mod scripts;
mod slopes;

pub use scripts::{parse_acs_colours, ScriptColours};

use log::debug;

use crate::map::MapData;

/// Game port the map targets; decides which specials get processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    /// Full feature set: line specials, every slope mechanism.
    ZDoom,
    /// Plane_Align and Plane_Copy only.
    Eternity,
    /// Anything else. Nothing is processed.
    Other,
}

impl Port {
    /// Maps a game configuration port name ("zdoom", "eternity", ...) to a port.
    pub fn from_name(name: &str) -> Self {
        match name {
            "zdoom" => Port::ZDoom,
            "eternity" => Port::Eternity,
            _ => Port::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColRgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A colour bound to a sector tag by a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectorColour {
    pub tag: i32,
    pub colour: ColRgba,
}

/// Colour state parsed from scripts, plus the entry points that apply map
/// specials to a [`MapData`].
#[derive(Clone, Debug, Default)]
pub struct MapSpecials {
    sector_colours: Vec<SectorColour>,
    sector_fade_colours: Vec<SectorColour>,
}

impl MapSpecials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all parsed colours.
    pub fn reset(&mut self) {
        self.sector_colours.clear();
        self.sector_fade_colours.clear();
    }

    /// Recomputes everything the given port derives from the map's specials.
    pub fn process_map_specials(&self, map: &mut MapData, port: Port) {
        match port {
            Port::ZDoom => {
                for line in 0..map.lines.len() {
                    line_special::process_zdoom_line_special(map, line);
                }
                slopes::process_zdoom_slopes(map);
            }
            Port::Eternity => slopes::process_eternity_slopes(map),
            Port::Other => debug!("No map specials to process for this port"),
        }
    }

    /// Applies the special of a single line, e.g. after it was edited.
    pub fn process_line_special(&self, map: &mut MapData, line: usize, port: Port) {
        if port == Port::ZDoom {
            line_special::process_zdoom_line_special(map, line);
        }
    }

    /// Replaces the tag colours with the ones set by OPEN scripts in
    /// `script` (the SCRIPTS lump). A missing or empty lump just clears them.
    pub fn process_acs_scripts(&mut self, script: Option<&[u8]>) {
        self.reset();

        let Some(data) = script.filter(|data| !data.is_empty()) else {
            return;
        };

        let parsed = parse_acs_colours(data);
        self.sector_colours = parsed.colours;
        self.sector_fade_colours = parsed.fade_colours;
    }

    /// Colour set for `tag`, fully opaque. The first binding for a tag wins.
    pub fn tag_colour(&self, tag: i32) -> Option<ColRgba> {
        self.sector_colours
            .iter()
            .find(|sc| sc.tag == tag)
            .map(|sc| ColRgba { a: 255, ..sc.colour })
    }

    /// Fade (fog) colour set for `tag`, with zero alpha.
    pub fn tag_fade_colour(&self, tag: i32) -> Option<ColRgba> {
        self.sector_fade_colours
            .iter()
            .find(|sc| sc.tag == tag)
            .map(|sc| ColRgba { a: 0, ..sc.colour })
    }

    pub fn tag_colours_set(&self) -> bool {
        !self.sector_colours.is_empty()
    }

    pub fn tag_fade_colours_set(&self) -> bool {
        !self.sector_fade_colours.is_empty()
    }

    pub fn sector_colours(&self) -> &[SectorColour] {
        &self.sector_colours
    }

    pub fn sector_fade_colours(&self) -> &[SectorColour] {
        &self.sector_fade_colours
    }

    /// Flags every sector with a coloured tag as modified so the renderer
    /// picks up the new colours.
    pub fn update_tagged_sectors(&self, map: &mut MapData) {
        for sc in self.sector_colours.iter().chain(&self.sector_fade_colours) {
            let tagged: Vec<usize> = map.sectors_with_id(sc.tag).collect();
            for sector in tagged {
                map.sectors[sector].set_modified();
            }
        }
    }
}

#[cfg(test)]
mod tests;
