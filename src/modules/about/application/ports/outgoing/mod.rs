pub mod about_store;
