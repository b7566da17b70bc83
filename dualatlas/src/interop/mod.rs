#[cfg(feature = "complex")]
pub mod complex;
pub mod single;
