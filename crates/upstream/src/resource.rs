//! Path conventions for entity resources on the upstream API.
//!
//! Every entity follows the same REST-ish layout:
//! `{base}/all`, `{base}/add`, `{base}/update/{id}`, `{base}/delete/{id}`,
//! `{base}/get/{id}`.

/// Path builder for one entity's upstream routes.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePaths {
    base: &'static str,
}

impl ResourcePaths {
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }

    /// Upstream path segment (e.g. `"category"`).
    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn list(&self) -> String {
        format!("{}/all", self.base)
    }

    pub fn add(&self) -> String {
        format!("{}/add", self.base)
    }

    pub fn update(&self, id: &str) -> String {
        format!("{}/update/{id}", self.base)
    }

    pub fn delete(&self, id: &str) -> String {
        format!("{}/delete/{id}", self.base)
    }

    pub fn get(&self, id: &str) -> String {
        format!("{}/get/{id}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_backend_conventions() {
        let paths = ResourcePaths::new("category");
        assert_eq!(paths.list(), "category/all");
        assert_eq!(paths.add(), "category/add");
        assert_eq!(paths.update("65a1"), "category/update/65a1");
        assert_eq!(paths.delete("65a1"), "category/delete/65a1");
        assert_eq!(paths.get("65a1"), "category/get/65a1");
    }
}
