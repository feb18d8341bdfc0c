use serde::{Deserialize, Serialize};

/// One source-to-target dependency observation as served by `/nodes`.
///
/// Package names are required. The counts are passed through untouched:
/// a missing or `null` count stays `None` rather than failing the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgeRecord {
    pub from_package: String,
    pub to_package: String,
    /// Total dependency count of the source package
    #[serde(default)]
    pub from_depends: Option<i64>,
    /// Total dependency count of the target package
    #[serde(default)]
    pub to_depends: Option<i64>,
    /// Edge weight
    #[serde(default)]
    pub depends_count: Option<i64>,
}

impl EdgeRecord {
    pub fn new(
        from_package: impl Into<String>,
        to_package: impl Into<String>,
        from_depends: Option<i64>,
        to_depends: Option<i64>,
        depends_count: Option<i64>,
    ) -> Self {
        Self {
            from_package: from_package.into(),
            to_package: to_package.into(),
            from_depends,
            to_depends,
            depends_count,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_package == self.to_package
    }
}
