pub mod pix_controller;

pub use pix_controller::configure;
