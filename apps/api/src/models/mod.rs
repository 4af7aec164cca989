pub mod college;
pub mod input;
