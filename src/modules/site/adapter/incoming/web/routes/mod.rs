mod about_page;
mod home;
mod sitemap;

pub use about_page::about_page_handler;
pub use home::home_handler;
pub use sitemap::sitemap_handler;
