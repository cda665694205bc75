pub mod bounce;
pub mod phase;
