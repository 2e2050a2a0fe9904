//! Built-in world texts and regime constructors.
//!
//! The constants are complete world files, usable anywhere a file on disk
//! would be (write them to a temp dir for the binary, or feed them to
//! [`crate::loader::load_world_bytes`] directly).

pub mod regimes;

/// Vertical corridor: robot, dirt, empty. Shortest plan is `S V`.
pub const CORRIDOR: &str = "1\n3\n@\n*\n_\n";

/// Nothing to clean. Every strategy returns the empty plan immediately.
pub const NO_DIRT: &str = "2\n2\n@_\n__\n";

/// Robot walled in on all sides, dirt outside. Unsolvable.
pub const ENCLOSED: &str = "5\n3\n###*_\n#@#__\n###__\n";

/// Two rooms joined by a single doorway, dirt in all four corners.
pub const TWO_ROOMS: &str = "\
7
5
*__#__*
_@_#___
___#___
_______
*__#__*
";

/// Open room with pillars and scattered dirt.
pub const PILLARS: &str = "\
5
4
*___*
_#_#_
__@__
*___*
";

/// Dirt cells reachable only through a winding passage.
pub const MAZE: &str = "\
6
5
@_#__*
#_#_#_
__#_#_
_##_#_
______
";

/// Every built-in world with its name.
pub const ALL: &[(&str, &str)] = &[
    ("corridor", CORRIDOR),
    ("no_dirt", NO_DIRT),
    ("enclosed", ENCLOSED),
    ("two_rooms", TWO_ROOMS),
    ("pillars", PILLARS),
    ("maze", MAZE),
];

/// Look up a built-in world by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, text)| *text)
}
