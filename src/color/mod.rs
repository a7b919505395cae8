pub mod gradient;
pub mod palettes;
pub mod rgb;
