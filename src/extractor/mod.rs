pub mod links;
pub mod sitemap;
