//! Plain geometric value types of the basic-example fixture.

pub mod area;
pub mod circle;
pub mod vector;

pub use area::area;
pub use circle::Circle;
pub use vector::Vector;
