pub mod clock_face;
pub mod font;
