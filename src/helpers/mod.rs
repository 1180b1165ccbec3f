pub mod handler_404;
pub mod review_normalizer;
pub mod sitemap;
pub mod time_format;
