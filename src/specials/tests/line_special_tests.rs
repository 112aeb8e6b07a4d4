use crate::map::RenderStyle;
use crate::specials::{codes, MapSpecials, Port};
use crate::test_maps::two_rooms;
use approx::assert_relative_eq;
use test_case::test_case;

use super::init_logging;

#[test]
fn test_translucent_untagged_line() {
    init_logging();
    let mut rooms = two_rooms();
    rooms.map.lines[rooms.shared].special = codes::TRANSLUCENT_LINE;
    rooms.map.lines[rooms.shared].args = [0, 128, 0, 0, 0];

    MapSpecials::new().process_line_special(&mut rooms.map, rooms.shared, Port::ZDoom);

    let line = &rooms.map.lines[rooms.shared];
    assert_relative_eq!(line.alpha, 128.0 / 255.0);
    assert_relative_eq!(line.alpha, 0.502, epsilon = 1e-3);
    assert_eq!(line.render_style, RenderStyle::Translucent);

    // other lines are left alone
    assert_eq!(rooms.map.lines[rooms.west_wall].alpha, 1.0);
    assert_eq!(rooms.map.lines[rooms.west_wall].render_style, RenderStyle::Normal);
}

#[test]
fn test_translucent_tagged_lines_additive() {
    init_logging();
    let mut rooms = two_rooms();
    rooms.map.lines[rooms.west_wall].id = 4;
    rooms.map.lines[5].id = 4;
    rooms.map.lines[rooms.shared].special = codes::TRANSLUCENT_LINE;
    rooms.map.lines[rooms.shared].args = [4, 255, 1, 0, 0];

    MapSpecials::new().process_line_special(&mut rooms.map, rooms.shared, Port::ZDoom);

    for target in [rooms.west_wall, 5] {
        assert_relative_eq!(rooms.map.lines[target].alpha, 1.0);
        assert_eq!(rooms.map.lines[target].render_style, RenderStyle::Additive);
    }
    // the special's own line is not tagged
    assert_eq!(rooms.map.lines[rooms.shared].render_style, RenderStyle::Normal);
}

#[test_case(Port::Eternity)]
#[test_case(Port::Other)]
fn test_line_specials_need_zdoom(port: Port) {
    let mut rooms = two_rooms();
    rooms.map.lines[rooms.shared].special = codes::TRANSLUCENT_LINE;
    rooms.map.lines[rooms.shared].args = [0, 64, 0, 0, 0];

    MapSpecials::new().process_line_special(&mut rooms.map, rooms.shared, port);

    assert_eq!(rooms.map.lines[rooms.shared].alpha, 1.0);
    assert_eq!(rooms.map.lines[rooms.shared].render_style, RenderStyle::Normal);
}

#[test]
fn test_unknown_special_is_ignored() {
    let mut rooms = two_rooms();
    rooms.map.lines[rooms.shared].special = 80;
    rooms.map.lines[rooms.shared].args = [0, 64, 1, 0, 0];
    let before = rooms.map.lines.clone();

    MapSpecials::new().process_line_special(&mut rooms.map, rooms.shared, Port::ZDoom);

    assert_eq!(rooms.map.lines, before);
}

#[test]
fn test_map_specials_run_line_specials() {
    let mut rooms = two_rooms();
    rooms.map.lines[rooms.west_wall].special = codes::TRANSLUCENT_LINE;
    rooms.map.lines[rooms.west_wall].args = [0, 51, 0, 0, 0];

    MapSpecials::new().process_map_specials(&mut rooms.map, Port::ZDoom);

    assert_relative_eq!(rooms.map.lines[rooms.west_wall].alpha, 0.2);
}
