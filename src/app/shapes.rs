use crate::domain::ports::Shape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub width: i32,
    pub height: i32,
    pub color: String,
}

impl Rectangle {
    pub fn new(width: i32, height: i32, color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            color: color.into(),
        }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    fn perimeter(&self) -> i64 {
        (i64::from(self.width) + i64::from(self.height)) * 2
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn color_line(&self) -> String {
        format!("Color : {}", self.color)
    }

    fn details(&self) -> String {
        format!("Rectangle with dimensions {}X{}", self.width, self.height)
    }
}

/// Has one side length rather than a width/height pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub side: i32,
    pub color: String,
}

impl Square {
    pub fn new(side: i32, color: impl Into<String>) -> Self {
        Self {
            side,
            color: color.into(),
        }
    }
}

impl Shape for Square {
    fn area(&self) -> i64 {
        i64::from(self.side).pow(2)
    }

    fn perimeter(&self) -> i64 {
        4 * i64::from(self.side)
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn details(&self) -> String {
        format!("Square with side length {}", self.side)
    }
}

/// Right triangle described by its two legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub base: i32,
    pub height: i32,
    pub color: String,
}

impl Triangle {
    pub fn new(base: i32, height: i32, color: impl Into<String>) -> Self {
        Self {
            base,
            height,
            color: color.into(),
        }
    }
}

impl Shape for Triangle {
    fn area(&self) -> i64 {
        (i64::from(self.base) * i64::from(self.height)) / 2
    }

    fn perimeter(&self) -> i64 {
        if self.base <= 0 || self.height <= 0 {
            return -1;
        }

        let (base, height) = (i64::from(self.base), i64::from(self.height));
        let hypotenuse = ((base * base + height * height) as f64).sqrt();
        base + height + hypotenuse as i64
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn details(&self) -> String {
        format!("Triangle with Base {} and Height {}", self.base, self.height)
    }
}
