//! Noise generators and the field type they produce.

pub mod blue;
pub mod compound;
pub mod field;
pub mod generator;
pub mod red;
pub mod sine;
pub mod white;
