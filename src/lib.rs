// Bodhi site server library

pub mod brand;
pub mod cloudinary;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod seo;
pub mod server;
pub mod sitemap;
