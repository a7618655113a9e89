pub mod circuits;
pub mod constructors;
pub mod drivers;
pub mod images;
pub mod races;
pub mod seasons;
pub mod standings;
