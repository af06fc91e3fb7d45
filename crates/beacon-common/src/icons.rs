//! The set of file-extension icon keys the display client knows about.

use std::collections::HashSet;

/// Extension keys with a matching icon on the display client side.
const KNOWN_KEYS: &[&str] = &[
    "file_aspx", "file_config", "file_cpp", "file_cs", "file_css", "file_dgsl",
    "file_dll", "file_fs", "file_fxg", "file_glsl", "file_h", "file_html",
    "file_ico", "file_js", "file_json", "file_jsx", "file_m", "file_mtl",
    "file_obj", "file_php", "file_ps1", "file_py", "file_r", "file_rb",
    "file_reg", "file_snk", "file_sql", "file_stl", "file_tif", "file_ts",
    "file_txt", "file_vb", "file_vbs", "file_xaml", "file_xml", "file_zip",
];

/// Immutable whitelist of recognized extension keys.
///
/// Membership is an exact string match, case-sensitive as constructed.
/// Keys outside the set select no icon; they are never an error.
#[derive(Debug, Clone)]
pub struct IconSet {
    keys: HashSet<String>,
}

impl IconSet {
    /// Build a set from arbitrary keys (used by tests and custom clients).
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::from_keys(KNOWN_KEYS.iter().copied())
    }
}
