pub mod ergast;
pub mod images;
