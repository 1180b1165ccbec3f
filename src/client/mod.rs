pub mod reviews_hook;
