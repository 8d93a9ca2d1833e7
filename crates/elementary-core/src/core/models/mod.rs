pub mod configuration;
pub mod element;
pub mod isotope;
