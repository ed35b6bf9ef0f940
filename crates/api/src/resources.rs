//! Static descriptors for the entities the dashboard manages.
//!
//! Each screen used to duplicate its table, pagination, and delete-modal
//! plumbing; here a single generic handler set (`handlers::listing`) is
//! parameterized by a [`Resource`] marker type describing the entity:
//! its upstream paths, which fields the search box matches, and which
//! columns the spreadsheet export carries.

use bloomcart_upstream::resource::ResourcePaths;

/// Compile-time description of one managed entity.
pub trait Resource: Send + Sync + 'static {
    /// Display name used in errors and log lines (e.g. `"Category"`).
    const ENTITY: &'static str;

    /// Upstream path conventions for this entity.
    const PATHS: ResourcePaths;

    /// Fields the search box matches (case-insensitive substring).
    const SEARCH_FIELDS: &'static [&'static str];

    /// Columns serialized by the spreadsheet export, in order.
    const EXPORT_COLUMNS: &'static [&'static str];
}

pub struct Categories;

impl Resource for Categories {
    const ENTITY: &'static str = "Category";
    const PATHS: ResourcePaths = ResourcePaths::new("category");
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "slug"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "name", "slug", "image"];
}

pub struct Subcategories;

impl Resource for Subcategories {
    const ENTITY: &'static str = "Subcategory";
    const PATHS: ResourcePaths = ResourcePaths::new("subcategory");
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "slug", "category"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "name", "slug", "category", "image"];
}

pub struct Products;

impl Resource for Products {
    const ENTITY: &'static str = "Product";
    const PATHS: ResourcePaths = ResourcePaths::new("product");
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "sku", "slug"];
    const EXPORT_COLUMNS: &'static [&'static str] =
        &["_id", "name", "sku", "slug", "price", "salePrice", "stock", "category"];
}

pub struct Coupons;

impl Resource for Coupons {
    const ENTITY: &'static str = "Coupon";
    const PATHS: ResourcePaths = ResourcePaths::new("coupon");
    const SEARCH_FIELDS: &'static [&'static str] = &["code", "type"];
    const EXPORT_COLUMNS: &'static [&'static str] =
        &["_id", "code", "type", "discount", "expiry", "active"];
}

pub struct Blogs;

impl Resource for Blogs {
    const ENTITY: &'static str = "Blog";
    const PATHS: ResourcePaths = ResourcePaths::new("blog");
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "slug", "author"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "title", "slug", "author"];
}

pub struct Contacts;

impl Resource for Contacts {
    const ENTITY: &'static str = "Contact";
    const PATHS: ResourcePaths = ResourcePaths::new("contact");
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "mobile"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "name", "email", "mobile", "message"];
}

/// Orders are the one entity whose collection is paginated server-side;
/// its list and export handlers are bespoke (`handlers::orders`), but
/// get/delete go through the generic set.
pub struct Orders;

impl Resource for Orders {
    const ENTITY: &'static str = "Order";
    const PATHS: ResourcePaths = ResourcePaths::new("order");
    const SEARCH_FIELDS: &'static [&'static str] = &["status", "customer"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "customer", "status", "total"];
}

pub struct Users;

impl Resource for Users {
    const ENTITY: &'static str = "User";
    const PATHS: ResourcePaths = ResourcePaths::new("user");
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "mobile"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "name", "email", "mobile"];
}

pub struct Pincodes;

impl Resource for Pincodes {
    const ENTITY: &'static str = "Pincode";
    const PATHS: ResourcePaths = ResourcePaths::new("pincode");
    const SEARCH_FIELDS: &'static [&'static str] = &["code"];
    const EXPORT_COLUMNS: &'static [&'static str] = &["_id", "code", "active"];
}
