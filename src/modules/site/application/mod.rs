pub mod config;
pub mod sitemap;
