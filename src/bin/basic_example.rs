use cmm::geometry::{area, Circle, Vector};

fn main() {
    let circle = Circle::new(Vector::default(), 2.0);
    println!("{}", area(&circle));
}
