//! Scene and entry list files on disk.

use fx_export::{
    components::{EffectAttributes, EffectComponent, Light2dfxSettings, LightComponent, TextComponent, TransformComponent},
    effects::Effect2dfx,
    scene::scene_object::SceneObject,
    storage, EffectKind, Scene,
};
use glam::Vec3;

fn sample_scene() -> Scene {
    let mut scene = Scene::default();

    let lamp = scene.insert(
        SceneObject::new("lamp post")
            .with_transform(TransformComponent::from_position(Vec3::new(12.0, -4.0, 6.5)))
            .with_light(LightComponent {
                color: Vec3::new(1.0, 0.5, 0.25),
                ext_2dfx: Light2dfxSettings {
                    corona_tex_name: "coronastar".to_owned(),
                    flag1_at_night: true,
                    ..Default::default()
                },
            })
            .with_effect(EffectComponent::new(EffectKind::Light)),
    );
    let sign = scene.insert(
        SceneObject::new("sign")
            .with_transform(TransformComponent::from_position(Vec3::Z).with_rotation(Vec3::new(0.0, 0.0, 30.0)))
            .with_text(TextComponent::new("SAN FIERRO\n2 MI"))
            .with_effect(EffectComponent::new(EffectKind::RoadSign)),
    );
    scene.insert(
        SceneObject::new("interior door").with_effect(
            EffectComponent::new(EffectKind::EnterExit).with_attributes(EffectAttributes {
                short_name: "GENERIC_LONG_NAME".to_owned(),
                degrees: [90.0, 400.0],
                hours: [0, 30],
                ..Default::default()
            }),
        ),
    );
    scene.reparent(sign, lamp).unwrap();

    scene
}

#[test]
fn test_scene_file_round_trip_exports_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.data");
    let scene = sample_scene();

    scene.write_to_file(&path).unwrap();
    let loaded = Scene::read_from_file(&path).unwrap();

    assert_eq!(loaded.scene_objects.len(), scene.scene_objects.len());
    assert_eq!(loaded.export_effects().unwrap(), scene.export_effects().unwrap());
}

#[test]
fn test_missing_scene_file_gives_empty_scene() {
    let dir = tempfile::tempdir().unwrap();

    let scene = Scene::read_from_file_or_new(&dir.path().join("missing.data")).unwrap();

    assert!(scene.scene_objects.is_empty());
}

#[test]
fn test_entry_list_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("effects.data");
    let effects = sample_scene().export_effects().unwrap();

    storage::write_to_file(&effects, &path).unwrap();
    let loaded: Vec<Effect2dfx> = storage::read_from_file(&path).unwrap();

    assert_eq!(loaded, effects);
}

#[test]
fn test_clamp_attributes_applies_editor_ranges() {
    let mut scene = sample_scene();

    scene.clamp_attributes();
    let effects = scene.export_effects().unwrap();

    let Some(Effect2dfx::EnterExit(door)) = effects.last() else {
        panic!("expected an enter/exit entry last");
    };
    assert_eq!(door.interior_name.as_str(), "GENERIC");
    assert_eq!(door.exit_angle, 180.0);
    assert_eq!(door.time_off, 24);
}
