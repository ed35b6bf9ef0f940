/// Backend-assigned record identifiers are opaque strings (the upstream
/// store exposes them as `_id`). Never parsed, only echoed back in paths.
pub type EntityId = String;

/// JSON field under which every upstream record carries its identifier.
pub const ID_FIELD: &str = "_id";
