//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn image() -> Option<String> {
        None
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    use super::super::DetectorKind;
    use std::path::PathBuf;

    pub fn storage() -> PathBuf {
        ".parlandim/storage.json".into()
    }

    pub fn detector() -> DetectorKind {
        DetectorKind::System
    }
}
