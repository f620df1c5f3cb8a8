//! Outline rendering of the drawing via gizmos.

use bevy::prelude::*;

use super::{Drawing, ShapeKind};
use crate::config::AppConfig;

#[derive(Component)]
pub struct DrawingCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        DrawingCamera,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

pub fn array_to_color(arr: [f32; 4]) -> Color {
    Color::srgba(arr[0], arr[1], arr[2], arr[3])
}

pub fn render_shapes(mut gizmos: Gizmos, drawing: Res<Drawing>, config: Res<AppConfig>) {
    let color = array_to_color(config.data.shape_color);

    for shape in drawing.shapes() {
        let center = Isometry2d::from_translation(shape.position.as_vec2());
        match shape.kind {
            ShapeKind::Rectangle { size } => {
                gizmos.rect_2d(center, size.as_vec2(), color);
            }
            ShapeKind::Circle { radius } => {
                gizmos.circle_2d(center, radius as f32, color);
            }
        }
    }
}
