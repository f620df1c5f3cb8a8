pub mod history;

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};
use crate::constants::NUDGE_STEP;
use crate::drawing::{Drawing, Shape, ShapeKind};

use history::{Change, CreateShapeRequest, History, MoveShapeRequest};

fn ctrl_held(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight)
}

/// System to add shapes with the default size (R = rectangle, C = circle)
fn handle_add_shape_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<AppConfig>,
    mut create_events: MessageWriter<CreateShapeRequest>,
) {
    if ctrl_held(&keyboard) {
        return;
    }

    let [width, height] = config.data.default_shape_size;
    if keyboard.just_pressed(KeyCode::KeyR) {
        create_events.write(CreateShapeRequest {
            kind: ShapeKind::Rectangle {
                size: IVec2::new(width, height),
            },
            position: IVec2::ZERO,
        });
    }
    if keyboard.just_pressed(KeyCode::KeyC) {
        create_events.write(CreateShapeRequest {
            kind: ShapeKind::Circle {
                radius: config.data.default_circle_radius,
            },
            position: IVec2::ZERO,
        });
    }
}

/// System to nudge the topmost shape with the arrow keys
fn handle_nudge_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    drawing: Res<Drawing>,
    mut move_events: MessageWriter<MoveShapeRequest>,
) {
    let Some(topmost) = drawing.shapes().last() else {
        return;
    };

    let mut offset = IVec2::ZERO;
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        offset.x -= NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        offset.x += NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        offset.y += NUDGE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        offset.y -= NUDGE_STEP;
    }

    if offset != IVec2::ZERO {
        move_events.write(MoveShapeRequest {
            id: topmost.id,
            offset,
        });
    }
}

/// Startup system that puts a few shapes on an empty drawing, recording each
/// step so that the whole setup can be undone.
fn seed_demo_drawing(
    config: Res<AppConfig>,
    mut drawing: ResMut<Drawing>,
    mut history: ResMut<History>,
) {
    if !config.data.seed_demo_drawing || !drawing.is_empty() {
        return;
    }

    let [width, height] = config.data.default_shape_size;
    let square_id = drawing.allocate_id();
    let circle_id = drawing.allocate_id();
    let changes = [
        Change::creation(Shape::new(
            square_id,
            ShapeKind::Rectangle {
                size: IVec2::new(width, height),
            },
            IVec2::new(-150, 0),
        )),
        Change::creation(Shape::new(
            circle_id,
            ShapeKind::Circle {
                radius: config.data.default_circle_radius,
            },
            IVec2::new(150, 0),
        )),
        Change::edit(square_id, IVec2::new(0, 100)),
    ];

    for change in changes {
        let description = change.description();
        if let Err(e) = history.apply(change, &mut *drawing) {
            warn!("Could not {} in demo drawing: {}", description, e);
        }
    }
    info!(
        "Seeded demo drawing with {} shapes ({} undoable changes)",
        drawing.len(),
        history.undo_count()
    );
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(history::HistoryPlugin)
            .add_systems(Startup, seed_demo_drawing.after(ConfigLoaded))
            .add_systems(Update, (handle_add_shape_shortcut, handle_nudge_shortcut));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfigData;

    fn editor_app(data: AppConfigData) -> App {
        let mut app = App::new();
        app.insert_resource(AppConfig {
            data,
            ..default()
        })
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Drawing>()
        .add_plugins(EditorPlugin);
        app
    }

    #[test]
    fn test_demo_drawing_is_fully_undoable() {
        let mut app = editor_app(AppConfigData::default());
        app.update();

        assert_eq!(app.world().resource::<Drawing>().len(), 2);
        assert_eq!(app.world().resource::<History>().undo_count(), 3);

        let world = app.world_mut();
        world.resource_scope(|world, mut history: Mut<History>| {
            let mut drawing = world.resource_mut::<Drawing>();
            while history.undo(&mut *drawing).unwrap() {}
            assert!(drawing.is_empty());
        });
    }

    /// Press the given keys for one frame, then let the requests run
    fn press_keys(app: &mut App, keys: &[KeyCode]) {
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            for key in keys {
                input.press(*key);
            }
        }
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset_all();
        app.update();
    }

    #[test]
    fn test_r_and_c_add_default_shapes() {
        let mut app = editor_app(AppConfigData {
            seed_demo_drawing: false,
            ..default()
        });
        app.update();

        press_keys(&mut app, &[KeyCode::KeyR]);
        press_keys(&mut app, &[KeyCode::KeyC]);

        let drawing = app.world().resource::<Drawing>();
        let kinds: Vec<ShapeKind> = drawing.shapes().iter().map(|shape| shape.kind).collect();
        let config = AppConfigData::default();
        let [width, height] = config.default_shape_size;
        assert_eq!(
            kinds,
            vec![
                ShapeKind::Rectangle {
                    size: IVec2::new(width, height)
                },
                ShapeKind::Circle {
                    radius: config.default_circle_radius
                },
            ]
        );
        assert_eq!(app.world().resource::<History>().undo_count(), 2);
    }

    #[test]
    fn test_arrow_keys_nudge_topmost_shape() {
        let mut app = editor_app(AppConfigData {
            seed_demo_drawing: false,
            ..default()
        });
        app.update();
        press_keys(&mut app, &[KeyCode::KeyR]);
        press_keys(&mut app, &[KeyCode::KeyC]);

        press_keys(&mut app, &[KeyCode::ArrowRight, KeyCode::ArrowUp]);

        let drawing = app.world().resource::<Drawing>();
        assert_eq!(drawing.shapes()[0].position, IVec2::ZERO);
        assert_eq!(
            drawing.shapes()[1].position,
            IVec2::new(NUDGE_STEP, NUDGE_STEP)
        );
        assert_eq!(app.world().resource::<History>().undo_count(), 3);
    }

    #[test]
    fn test_demo_drawing_can_be_disabled() {
        let mut app = editor_app(AppConfigData {
            seed_demo_drawing: false,
            ..default()
        });
        app.update();

        assert!(app.world().resource::<Drawing>().is_empty());
        assert!(!app.world().resource::<History>().can_undo());
    }
}
