pub mod auth;
pub mod blogs;
pub mod categories;
pub mod coupons;
pub mod forms;
pub mod listing;
pub mod orders;
pub mod pincodes;
pub mod products;
pub mod subcategories;
