//! Extension allow-set and extension -> source type mapping.

use std::collections::BTreeMap;
use std::path::Path;

/// Outcome of a successful extension check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The raw extension
    pub discovery_type: String,
    pub source_type: String,
}

/// Allowed extensions, each mapped to the source type it is reported as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    entries: BTreeMap<String, String>,
}

impl ExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every extension maps to a source type of the same name.
    pub fn identity<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.into();
                (ext.clone(), ext)
            })
            .collect();
        Self { entries }
    }

    pub fn with_mapping(mut self, extension: impl Into<String>, source_type: impl Into<String>) -> Self {
        self.entries.insert(extension.into(), source_type.into());
        self
    }

    pub fn source_type(&self, extension: &str) -> Option<&str> {
        self.entries.get(extension).map(String::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn accepts(&self, path: &Path) -> Option<Accepted> {
        let extension = extension_of(path)?;
        let source_type = self.source_type(extension)?;
        Some(Accepted {
            discovery_type: extension.to_string(),
            source_type: source_type.to_string(),
        })
    }
}

/// Substring after the last `.` of the file name.
///
/// Unlike `Path::extension`, a leading-dot name such as `.oso` still yields
/// `oso`; the name parser rejects it later for its empty identifier.
pub fn extension_of(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    let (_, extension) = file_name.rsplit_once('.')?;
    (!extension.is_empty()).then_some(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("/s/PxrSurface.args")), Some("args"));
        assert_eq!(extension_of(Path::new("/s/noise.1.2.oso")), Some("oso"));
        assert_eq!(extension_of(Path::new("/s/.oso")), Some("oso"));
        assert_eq!(extension_of(Path::new("/s/README")), None);
        assert_eq!(extension_of(Path::new("/s/trailing.")), None);
    }

    #[test]
    fn test_rejects_unlisted_extension() {
        let map = ExtensionMap::identity(["args", "oso"]);
        assert!(map.accepts(Path::new("/s/shader.xml")).is_none());
        assert!(map.accepts(Path::new("/s/shader")).is_none());
    }

    #[test]
    fn test_identity_and_custom_mapping() {
        let map = ExtensionMap::identity(["args"]).with_mapping("oso", "OSL");

        let args = map.accepts(Path::new("/s/PxrDiffuse.args")).unwrap();
        assert_eq!(args.discovery_type, "args");
        assert_eq!(args.source_type, "args");

        let oso = map.accepts(Path::new("/s/noise.oso")).unwrap();
        assert_eq!(oso.discovery_type, "oso");
        assert_eq!(oso.source_type, "OSL");

        assert_eq!(map.extensions().collect::<Vec<_>>(), vec!["args", "oso"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let map = ExtensionMap::identity(["oso"]);
        assert!(map.accepts(Path::new("/s/noise.OSO")).is_none());
    }
}
