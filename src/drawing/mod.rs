//! The drawing being edited: shapes and the primitives that mutate them.

mod drawing_data;
mod error;
mod rendering;
mod shape;

pub use drawing_data::Drawing;
pub use error::DrawingError;
pub use shape::{Shape, ShapeId, ShapeKind};

use bevy::prelude::*;

pub struct DrawingPlugin;

impl Plugin for DrawingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Drawing>()
            .add_systems(Startup, rendering::spawn_camera)
            .add_systems(Update, rendering::render_shapes);
    }
}
