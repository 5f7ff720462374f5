pub mod application;
pub mod driver;
