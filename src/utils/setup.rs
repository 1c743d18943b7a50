//! Setup logic for the cube game, with the setup plugin and functions for initializing the scene.
use bevy::prelude::*;

use crate::log;
use crate::utils::config::CubeConfig;
use crate::utils::game_functions::{flip_handedness, update_status_text};
use crate::utils::objects::*;
use shared::constants::{
    camera_3d_constants::{CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z},
    cube_constants::{CUBIE_COLOR, CUBIE_SIZE, FACE_COLORS, STICKER_SIZE, STICKER_THICKNESS},
    lighting_constants::{GLOBAL_AMBIENT_LIGHT_INTENSITY, POINT_LIGHT_INTENSITY, SHADOWS_ENABLED},
};
use shared::layout::CubieSlot;
use shared::Face;

/// Plugin for handling setup
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_environment, spawn_cube, spawn_status_text))
            .add_systems(Update, update_status_text);
    }
}

/// Camera and lights.
pub fn setup_environment(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        // Start looking at the front, right and up faces
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for position in [Vec3::new(8.0, 10.0, 8.0), Vec3::new(-8.0, -6.0, -8.0)] {
        commands.spawn((
            PointLight {
                intensity: POINT_LIGHT_INTENSITY,
                shadows_enabled: SHADOWS_ENABLED,
                range: 40.0,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: GLOBAL_AMBIENT_LIGHT_INTENSITY,
        affects_lightmapped_meshes: true,
    });
}

fn face_color(face: Face) -> Color {
    let index = Face::ALL
        .iter()
        .position(|f| *f == face)
        .unwrap_or_default();
    let [r, g, b, a] = FACE_COLORS[index];
    Color::srgba(r, g, b, a)
}

/// Sticker cuboid lying flat on `face` of a cubie, in scene space.
fn sticker_mesh(face: Face) -> Cuboid {
    let normal = flip_handedness(face.axis()).abs();
    let size = Vec3::splat(STICKER_SIZE) * (Vec3::ONE - normal) + normal * STICKER_THICKNESS;
    Cuboid::from_size(size)
}

/// Spawns the 27 cubies. Every cubie except the center gets `CubePart`, the
/// six face centers also get `MiddlePiece`. Stickers are children and follow
/// their cubie's transform.
pub fn spawn_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<CubeConfig>,
) {
    let cubie_mesh = meshes.add(Cuboid::from_length(CUBIE_SIZE));
    let [r, g, b, a] = CUBIE_COLOR;
    let cubie_material = materials.add(StandardMaterial {
        base_color: Color::srgba(r, g, b, a),
        perceptual_roughness: 0.6,
        ..default()
    });

    let stickers: Vec<(Face, Handle<Mesh>, Handle<StandardMaterial>)> = Face::ALL
        .into_iter()
        .map(|face| {
            (
                face,
                meshes.add(sticker_mesh(face)),
                materials.add(StandardMaterial {
                    base_color: face_color(face),
                    perceptual_roughness: 0.3,
                    ..default()
                }),
            )
        })
        .collect();

    for slot in CubieSlot::all() {
        let translation = flip_handedness(slot.position(Vec3::ZERO, config.cubie_spacing));
        let mut cubie = commands.spawn((
            Mesh3d(cubie_mesh.clone()),
            MeshMaterial3d(cubie_material.clone()),
            Transform::from_translation(translation),
        ));

        if slot.is_center() {
            cubie.insert((CenterPiece, Visibility::Hidden));
            continue;
        }
        cubie.insert(CubePart);
        if slot.is_middle() {
            cubie.insert(MiddlePiece);
        }

        cubie.with_children(|parent| {
            for face in slot.visible_faces() {
                let Some((_, mesh, material)) = stickers.iter().find(|(f, _, _)| *f == face)
                else {
                    continue;
                };
                let offset = flip_handedness(face.axis()) * (CUBIE_SIZE + STICKER_THICKNESS) / 2.0;
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(offset),
                ));
            }
        });
    }

    log!("🧊 Cube spawned");
    log!("⌨️  F B U D L R to turn, hold Shift for counter-clockwise");
    log!("🔀 S to scramble, Backspace to rewind, arrow keys to orbit");
}

fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));
}
