use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::warn;

bitflags! {
    /// First flag byte of a light entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LightFlags1: u8 {
        const CORONA_CHECK_OBSTACLES = 1 << 0;
        /// Two bit fog type value, not a single flag.
        const FOG_TYPE = 0b11 << 1;
        const WITHOUT_CORONA = 1 << 3;
        const CORONA_ONLY_AT_LONG_DISTANCE = 1 << 4;
        const AT_DAY = 1 << 5;
        const AT_NIGHT = 1 << 6;
        const BLINKING1 = 1 << 7;
    }
}

bitflags! {
    /// Second flag byte of a light entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LightFlags2: u8 {
        const CORONA_ONLY_FROM_BELOW = 1 << 0;
        const BLINKING2 = 1 << 1;
        const UPDATE_HEIGHT_ABOVE_GROUND = 1 << 2;
        const CHECK_DIRECTION = 1 << 3;
        const BLINKING3 = 1 << 4;
    }
}

bitflags! {
    /// Road sign flag byte. Every member is a multi-bit field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RoadSignFlags: u8 {
        const LINES = 0b11;
        const SYMBOLS = 0b11 << 2;
        const TEXT_COLOR = 0b1111 << 4;
    }
}

/// Accumulates a flag byte one contribution at a time.
///
/// Fields are masked to their declared width, so a value that is too wide
/// never leaks into neighbouring bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlagPacker {
    bits: u8,
}

impl FlagPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// ORs in `flag` when `enabled` is set.
    pub fn flag(mut self, flag: u8, enabled: bool) -> Self {
        if enabled {
            self.bits |= flag;
        }

        self
    }

    /// ORs in `value` shifted into the bits covered by `mask`.
    pub fn field(mut self, mask: u8, value: u8) -> Self {
        if mask == 0 {
            return self;
        }

        let shift = mask.trailing_zeros();
        let max = mask >> shift;

        if value > max {
            warn!(value, max, "flag field value does not fit, extra bits dropped");
        }

        self.bits |= (value & max) << shift;

        self
    }

    pub fn bits(self) -> u8 {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_sets_only_its_bit() {
        let bits = FlagPacker::new()
            .flag(LightFlags1::AT_DAY.bits(), true)
            .flag(LightFlags1::AT_NIGHT.bits(), false)
            .bits();

        assert_eq!(bits, 0b0010_0000);
    }

    #[test]
    fn field_is_shifted_into_mask() {
        let bits = FlagPacker::new().field(LightFlags1::FOG_TYPE.bits(), 3).bits();

        assert_eq!(bits, 0b0000_0110);
    }

    #[test]
    fn oversized_field_is_masked() {
        let bits = FlagPacker::new().field(LightFlags1::FOG_TYPE.bits(), 7).bits();

        assert_eq!(bits, 0b0000_0110);
    }

    #[test]
    fn road_sign_fields_do_not_overlap() {
        let bits = FlagPacker::new()
            .field(RoadSignFlags::LINES.bits(), 3)
            .field(RoadSignFlags::SYMBOLS.bits(), 2)
            .field(RoadSignFlags::TEXT_COLOR.bits(), 1)
            .bits();

        assert_eq!(bits, 3 | (2 << 2) | (1 << 4));
    }
}
