pub mod config;
pub mod logging;

pub mod checksum;
pub mod icon;
