use glam::{Vec2, Vec3};

use crate::effects::{
    CoverPoint2dfx, EnterExit2dfx, FixedString, Particle2dfx, SunGlare2dfx, TriggerPoint2dfx,
};

use super::EffectSource;

/// Shorter flattened forward vectors count as pointing straight up or down.
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

pub fn export_particle<O>(object: &O) -> Particle2dfx
where
    O: EffectSource + ?Sized,
{
    let mut entry = Particle2dfx::new(object.world_position());
    entry.effect = FixedString::new(&object.attributes().long_name);

    entry
}

pub fn export_sun_glare<O>(object: &O) -> SunGlare2dfx
where
    O: EffectSource + ?Sized,
{
    SunGlare2dfx::new(object.world_position())
}

/// Enter angle is stored in radians, exit angle stays in degrees.
pub fn export_enter_exit<O>(object: &O) -> EnterExit2dfx
where
    O: EffectSource + ?Sized,
{
    let attributes = object.attributes();
    let [enter_angle, exit_angle] = attributes.degrees;
    let [flags1, sky_color, flags2, unk] = attributes.bytes;
    let [time_on, time_off] = attributes.hours;

    let mut entry = EnterExit2dfx::new(object.world_position());
    entry.enter_angle = enter_angle.to_radians();
    entry.approximation_radius_x = attributes.floats[0];
    entry.approximation_radius_y = attributes.floats[1];
    entry.exit_location = attributes.vector;
    entry.exit_angle = exit_angle;
    entry.interior = attributes.short;
    entry.flags1 = flags1;
    entry.sky_color = sky_color;
    entry.interior_name = FixedString::new(&attributes.short_name);
    entry.time_on = time_on;
    entry.time_off = time_off;
    entry.flags2 = flags2;
    entry.unk = unk;

    entry
}

pub fn export_trigger_point<O>(object: &O) -> TriggerPoint2dfx
where
    O: EffectSource + ?Sized,
{
    let mut entry = TriggerPoint2dfx::new(object.world_position());
    entry.point_id = object.attributes().int;

    entry
}

/// Direction is the object's local forward (+Y) flattened onto the XY plane.
/// A forward pointing straight up or down has no direction and gives (0, 0).
pub fn export_cover_point<O>(object: &O) -> CoverPoint2dfx
where
    O: EffectSource + ?Sized,
{
    let flat = (object.local_rotation() * Vec3::Y).truncate();
    let direction = if flat.length() < MIN_DIRECTION_LENGTH {
        Vec2::ZERO
    } else {
        flat.normalize()
    };

    let mut entry = CoverPoint2dfx::new(object.world_position());
    entry.cover_type = object.attributes().int;
    entry.direction_x = direction.x;
    entry.direction_y = direction.y;

    entry
}
