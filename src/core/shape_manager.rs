use crate::domain::ports::Shape;

/// Works with any `Shape` without knowing which one it has.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeManager;

impl ShapeManager {
    pub fn calculate_area(&self, shape: &dyn Shape) -> String {
        format!("Area: {}", shape.area())
    }

    pub fn calculate_perimeter(&self, shape: &dyn Shape) -> String {
        format!("Perimeter: {}", shape.perimeter())
    }

    pub fn display_shape_details(&self, shape: &dyn Shape) -> String {
        format!("{}\n{}", shape.color_line(), shape.details())
    }
}
