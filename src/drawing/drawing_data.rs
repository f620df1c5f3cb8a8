use bevy::prelude::*;

use super::{DrawingError, Shape, ShapeId};

/// The document being edited: an ordered collection of shapes.
///
/// Shapes are kept in insertion order, which is also their drawing order.
#[derive(Resource, Debug, Default)]
pub struct Drawing {
    shapes: Vec<Shape>,
    next_id: u64,
}

impl Drawing {
    /// Hand out a fresh id. Ids stay unique even after shapes are removed,
    /// so a redone creation can reuse the id it was recorded with. The
    /// counter saturates at `u64::MAX`.
    pub fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shape(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape on top of the drawing.
    pub fn insert_shape(&mut self, shape: Shape) -> Result<(), DrawingError> {
        if self.contains(shape.id) {
            return Err(DrawingError::DuplicateShape(shape.id));
        }
        // Keep ids handed out later clear of shapes inserted with an explicit id
        self.next_id = self.next_id.max(shape.id.0.saturating_add(1));
        self.shapes.push(shape);
        Ok(())
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Result<Shape, DrawingError> {
        let index = self
            .shapes
            .iter()
            .position(|shape| shape.id == id)
            .ok_or(DrawingError::MissingShape(id))?;
        Ok(self.shapes.remove(index))
    }

    pub fn translate_shape(&mut self, id: ShapeId, offset: IVec2) -> Result<(), DrawingError> {
        let shape = self
            .shapes
            .iter_mut()
            .find(|shape| shape.id == id)
            .ok_or(DrawingError::MissingShape(id))?;
        shape.translate(offset);
        Ok(())
    }

    /// Drop every shape. Id allocation is not rewound.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::ShapeKind;

    fn square(id: ShapeId) -> Shape {
        Shape::new(id, ShapeKind::Rectangle { size: IVec2::splat(10) }, IVec2::ZERO)
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let mut drawing = Drawing::default();
        let a = drawing.allocate_id();
        let b = drawing.allocate_id();
        assert!(b > a);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut drawing = Drawing::default();
        let a = drawing.allocate_id();
        let b = drawing.allocate_id();
        drawing.insert_shape(square(a)).unwrap();
        drawing.insert_shape(square(b)).unwrap();

        let ids: Vec<ShapeId> = drawing.shapes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let mut drawing = Drawing::default();
        let id = drawing.allocate_id();
        drawing.insert_shape(square(id)).unwrap();

        assert_eq!(
            drawing.insert_shape(square(id)),
            Err(DrawingError::DuplicateShape(id))
        );
        assert_eq!(drawing.len(), 1);
    }

    #[test]
    fn test_insert_explicit_id_advances_allocator() {
        let mut drawing = Drawing::default();
        drawing.insert_shape(square(ShapeId(7))).unwrap();
        assert_eq!(drawing.allocate_id(), ShapeId(8));
    }

    #[test]
    fn test_insert_max_id_does_not_overflow() {
        let mut drawing = Drawing::default();
        drawing.insert_shape(square(ShapeId(u64::MAX))).unwrap();

        assert!(drawing.contains(ShapeId(u64::MAX)));
        assert_eq!(drawing.allocate_id(), ShapeId(u64::MAX));
        assert_eq!(drawing.allocate_id(), ShapeId(u64::MAX));
    }

    #[test]
    fn test_translate_past_i32_bounds_wraps() {
        let mut drawing = Drawing::default();
        let id = drawing.allocate_id();
        drawing.insert_shape(square(id)).unwrap();

        drawing.translate_shape(id, IVec2::new(i32::MAX, 0)).unwrap();
        drawing.translate_shape(id, IVec2::new(1, 0)).unwrap();
        assert_eq!(drawing.shape(id).unwrap().position, IVec2::new(i32::MIN, 0));
    }

    #[test]
    fn test_remove_returns_shape() {
        let mut drawing = Drawing::default();
        let id = drawing.allocate_id();
        drawing.insert_shape(square(id)).unwrap();

        let removed = drawing.remove_shape(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut drawing = Drawing::default();
        assert_eq!(
            drawing.remove_shape(ShapeId(3)),
            Err(DrawingError::MissingShape(ShapeId(3)))
        );
    }

    #[test]
    fn test_translate_moves_shape() {
        let mut drawing = Drawing::default();
        let id = drawing.allocate_id();
        drawing.insert_shape(square(id)).unwrap();

        drawing.translate_shape(id, IVec2::new(3, 4)).unwrap();
        drawing.translate_shape(id, IVec2::new(-1, 2)).unwrap();
        assert_eq!(drawing.shape(id).unwrap().position, IVec2::new(2, 6));
    }

    #[test]
    fn test_translate_missing_fails() {
        let mut drawing = Drawing::default();
        assert_eq!(
            drawing.translate_shape(ShapeId(0), IVec2::ONE),
            Err(DrawingError::MissingShape(ShapeId(0)))
        );
    }

    #[test]
    fn test_clear_keeps_id_allocation() {
        let mut drawing = Drawing::default();
        let id = drawing.allocate_id();
        drawing.insert_shape(square(id)).unwrap();
        drawing.clear();

        assert!(drawing.is_empty());
        assert_ne!(drawing.allocate_id(), id);
    }
}
