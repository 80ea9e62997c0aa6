use super::circle::Circle;
use std::f64::consts::PI;

pub fn area(circle: &Circle) -> f64 {
    PI * circle.radius() * circle.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector;

    #[test]
    fn test_area_of_radius_two() {
        let circle = Circle::new(Vector::default(), 2.0);
        assert!((area(&circle) - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_area_ignores_center_and_sign() {
        let a = area(&Circle::new(Vector::new(10.0, 10.0), 3.0));
        let b = area(&Circle::new(Vector::default(), -3.0));
        assert_eq!(a, b);
        assert_eq!(area(&Circle::default()), 0.0);
    }
}
