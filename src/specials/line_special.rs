// src/specials/line_special.rs

use log::debug;

use crate::map::{MapData, RenderStyle};
use crate::specials::codes;

/// Applies what a ZDoom line special does to the look of the map. Specials
/// without a visible effect in the editor are ignored.
pub(crate) fn process_zdoom_line_special(map: &mut MapData, line: usize) {
    let (special, args) = {
        let l = &map.lines[line];
        (l.special, l.args)
    };

    if special == codes::TRANSLUCENT_LINE {
        apply_translucent_line(map, line, args);
    }
}

// TranslucentLine(lineid, amount, additive)
fn apply_translucent_line(map: &mut MapData, line: usize, args: [i32; 5]) {
    let tagged: Vec<usize> = if args[0] != 0 {
        map.lines_with_id(args[0]).collect()
    } else {
        vec![line]
    };

    let alpha = (args[1] as f64 / 255.0).clamp(0.0, 1.0);
    let style = if args[2] == 0 {
        RenderStyle::Translucent
    } else {
        RenderStyle::Additive
    };

    for target in tagged {
        let l = &mut map.lines[target];
        l.alpha = alpha;
        l.render_style = style;
        debug!("Line {} translucent: ({}) {:.2}, {:?}", target, args[1], alpha, style);
    }
}
