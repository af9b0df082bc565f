use glam::{EulerRot, Quat, Vec3};

use crate::effects::{
    FlagPacker, RoadSign2dfx, RoadSignFlags, RoadSignLine, ROAD_SIGN_LINE_LEN, ROAD_SIGN_MAX_LINES,
};

use super::EffectSource;

const FILL_CHAR: char = '_';

/// Symbol count classes a road sign line can be drawn with.
const SYMBOL_CLASSES: [usize; 4] = [2, 4, 8, 16];

/// Builds a road sign entry from the object's text body.
///
/// Declines objects that are not text-bearing and objects whose body has no
/// lines at all.
pub fn export_road_sign<O>(object: &O) -> Option<RoadSign2dfx>
where
    O: EffectSource + ?Sized,
{
    let text = object.text()?;
    if text.body.is_empty() {
        return None;
    }

    let mut lines = text
        .body
        .split('\n')
        .take(ROAD_SIGN_MAX_LINES)
        .map(|line| RoadSignLine::new(&normalize_line(line)))
        .collect::<Vec<_>>();
    let lines_num = lines.len();
    lines.resize_with(ROAD_SIGN_MAX_LINES, || RoadSignLine::new(&normalize_line("")));

    let max_chars_num = lines
        .iter()
        .map(|line| line.as_str().trim_end_matches(FILL_CHAR).chars().count())
        .max()
        .unwrap_or_default();

    let settings = &text.ext_2dfx;
    let flags = FlagPacker::new()
        .field(RoadSignFlags::LINES.bits(), lines_code(lines_num))
        .field(
            RoadSignFlags::SYMBOLS.bits(),
            symbols_code(snap_symbol_count(max_chars_num)),
        )
        .field(RoadSignFlags::TEXT_COLOR.bits(), settings.color.code())
        .bits();

    let mut entry = RoadSign2dfx::new(object.world_position());
    entry.rotation = euler_zxy_degrees(object.local_rotation());
    entry.set_lines([lines[0], lines[1], lines[2], lines[3]]);
    entry.size = settings.size;
    entry.flags = RoadSignFlags::from_bits_retain(flags);

    Some(entry)
}

/// Turns spaces into `_`, cuts at 16 bytes on a char boundary and pads
/// with `_` to exactly 16 bytes.
pub fn normalize_line(line: &str) -> String {
    let mut normalized = String::with_capacity(ROAD_SIGN_LINE_LEN);

    for c in line.chars().map(|c| if c == ' ' { FILL_CHAR } else { c }) {
        if normalized.len() + c.len_utf8() > ROAD_SIGN_LINE_LEN {
            break;
        }
        normalized.push(c);
    }

    while normalized.len() < ROAD_SIGN_LINE_LEN {
        normalized.push(FILL_CHAR);
    }

    normalized
}

/// Smallest symbol class that fits `chars` characters.
pub fn snap_symbol_count(chars: usize) -> usize {
    SYMBOL_CLASSES
        .into_iter()
        .find(|class| chars <= *class)
        .unwrap_or(chars)
}

pub fn lines_code(lines_num: usize) -> u8 {
    match lines_num {
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 0,
    }
}

pub fn symbols_code(symbols: usize) -> u8 {
    match symbols {
        2 => 1,
        4 => 2,
        8 => 3,
        _ => 0,
    }
}

/// Euler angles in degrees for a rotation applied Z first, then X, then Y.
pub fn euler_zxy_degrees(rotation: Quat) -> Vec3 {
    let (y, x, z) = rotation.to_euler(EulerRot::YXZ);

    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}
