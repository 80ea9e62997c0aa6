use super::vector::Vector;

/// A circle owning its center by value. The radius is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: f64,
}

impl Circle {
    pub fn new(center: Vector, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> &Vector {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: Vector) -> &mut Self {
        self.center = center;
        self
    }

    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_arguments() {
        let c = Circle::new(Vector::new(1.0, -1.0), 2.5);
        assert_eq!(*c.center(), Vector::new(1.0, -1.0));
        assert_eq!(c.radius(), 2.5);
    }

    #[test]
    fn test_fluent_setters() {
        let mut c = Circle::new(Vector::default(), 1.0);
        c.set_radius(-3.0).set_center(Vector::new(4.0, 5.0));
        assert_eq!(c.radius(), -3.0);
        assert_eq!(c.center().y(), 5.0);
    }
}
