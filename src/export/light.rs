use crate::{
    components::Light2dfxSettings,
    effects::{FixedString, FlagPacker, Light2dfx, LightFlags1, LightFlags2, Rgba},
};

use super::EffectSource;

/// Builds a light entry. Declines objects that carry no light data.
pub fn export_light<O>(object: &O) -> Option<Light2dfx>
where
    O: EffectSource + ?Sized,
{
    let light = object.light()?;
    let settings = &light.ext_2dfx;

    let mut entry = Light2dfx::new(object.world_position());
    if settings.export_view_vector {
        entry.look_direction = Some(settings.view_vector);
    }
    entry.color = Rgba::from_unit(light.color, settings.alpha);
    entry.corona_far_clip = settings.corona_far_clip;
    entry.pointlight_range = settings.point_light_range;
    entry.corona_size = settings.corona_size;
    entry.shadow_size = settings.shadow_size;
    entry.corona_show_mode = settings.corona_show_mode.code();
    entry.corona_enable_reflection = settings.corona_enable_reflection;
    entry.corona_flare_type = settings.corona_flare_type;
    entry.shadow_color_multiplier = settings.shadow_color_multiplier;
    entry.corona_tex_name = FixedString::new(&settings.corona_tex_name);
    entry.shadow_tex_name = FixedString::new(&settings.shadow_tex_name);
    entry.shadow_z_distance = settings.shadow_z_distance;
    entry.flags1 = flags1(settings);
    entry.flags2 = flags2(settings);

    Some(entry)
}

pub fn flags1(settings: &Light2dfxSettings) -> LightFlags1 {
    let bits = FlagPacker::new()
        .flag(
            LightFlags1::CORONA_CHECK_OBSTACLES.bits(),
            settings.flag1_corona_check_obstacles,
        )
        .field(LightFlags1::FOG_TYPE.bits(), settings.flag1_fog_type)
        .flag(LightFlags1::WITHOUT_CORONA.bits(), settings.flag1_without_corona)
        .flag(
            LightFlags1::CORONA_ONLY_AT_LONG_DISTANCE.bits(),
            settings.flag1_corona_only_at_long_distance,
        )
        .flag(LightFlags1::AT_DAY.bits(), settings.flag1_at_day)
        .flag(LightFlags1::AT_NIGHT.bits(), settings.flag1_at_night)
        .flag(LightFlags1::BLINKING1.bits(), settings.flag1_blinking1)
        .bits();

    LightFlags1::from_bits_retain(bits)
}

pub fn flags2(settings: &Light2dfxSettings) -> LightFlags2 {
    let bits = FlagPacker::new()
        .flag(
            LightFlags2::CORONA_ONLY_FROM_BELOW.bits(),
            settings.flag2_corona_only_from_below,
        )
        .flag(LightFlags2::BLINKING2.bits(), settings.flag2_blinking2)
        .flag(
            LightFlags2::UPDATE_HEIGHT_ABOVE_GROUND.bits(),
            settings.flag2_update_height_above_ground,
        )
        .flag(LightFlags2::CHECK_DIRECTION.bits(), settings.flag2_check_view_vector)
        .flag(LightFlags2::BLINKING3.bits(), settings.flag2_blinking3)
        .bits();

    LightFlags2::from_bits_retain(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(toggle: impl FnOnce(&mut Light2dfxSettings)) -> Light2dfxSettings {
        let mut settings = Light2dfxSettings::default();
        toggle(&mut settings);
        settings
    }

    #[test]
    fn default_settings_have_no_flags() {
        let settings = Light2dfxSettings::default();

        assert_eq!(flags1(&settings).bits(), 0);
        assert_eq!(flags2(&settings).bits(), 0);
    }

    #[test]
    fn each_flags1_toggle_sets_only_its_bit() {
        let cases: [(fn(&mut Light2dfxSettings), u8); 6] = [
            (|s| s.flag1_corona_check_obstacles = true, 1 << 0),
            (|s| s.flag1_without_corona = true, 1 << 3),
            (|s| s.flag1_corona_only_at_long_distance = true, 1 << 4),
            (|s| s.flag1_at_day = true, 1 << 5),
            (|s| s.flag1_at_night = true, 1 << 6),
            (|s| s.flag1_blinking1 = true, 1 << 7),
        ];

        for (toggle, bit) in cases {
            let settings = settings_with(toggle);

            assert_eq!(flags1(&settings).bits(), bit);
            assert_eq!(flags2(&settings).bits(), 0);
        }
    }

    #[test]
    fn each_flags2_toggle_sets_only_its_bit() {
        let cases: [(fn(&mut Light2dfxSettings), u8); 5] = [
            (|s| s.flag2_corona_only_from_below = true, 1 << 0),
            (|s| s.flag2_blinking2 = true, 1 << 1),
            (|s| s.flag2_update_height_above_ground = true, 1 << 2),
            (|s| s.flag2_check_view_vector = true, 1 << 3),
            (|s| s.flag2_blinking3 = true, 1 << 4),
        ];

        for (toggle, bit) in cases {
            let settings = settings_with(toggle);

            assert_eq!(flags2(&settings).bits(), bit);
            assert_eq!(flags1(&settings).bits(), 0);
        }
    }

    #[test]
    fn fog_type_occupies_bits_one_and_two() {
        for fog_type in 0..=3u8 {
            let settings = settings_with(|s| s.flag1_fog_type = fog_type);

            assert_eq!(flags1(&settings).bits(), fog_type << 1);
        }
    }
}
