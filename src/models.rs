use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Annotation attached to components declared under `devDependencies`.
pub const DEV_DEPENDENCY: &str = "development dependency";

/// Version of the internal SBOM document layout.
pub const SPEC_VERSION: &str = "0.24.0";

/// One dependency discovered in a manifest.
///
/// `purl` is composed once in [`Component::new`] and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub version: String,
    pub supplier: Ecosystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Component {
    pub fn new(name: impl Into<String>, version: impl Into<String>, supplier: Ecosystem) -> Self {
        let name = name.into();
        let version = version.into();
        let purl = format!("pkg:{}/{}@{}", supplier, name, version);
        Self {
            name,
            version,
            supplier,
            purl: Some(purl),
            description: None,
        }
    }

    /// Mark this component as coming from a development-only section.
    pub fn dev_dependency(mut self) -> Self {
        self.description = Some(DEV_DEPENDENCY.to_string());
        self
    }

    pub fn is_dev_dependency(&self) -> bool {
        self.description.as_deref() == Some(DEV_DEPENDENCY)
    }
}

/// Package ecosystems with a recognized manifest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Npm,
    Pypi,
    Go,
    Cargo,
    Maven,
}

impl Ecosystem {
    /// Registration order used by the analysis pipeline.
    pub const ALL: [Ecosystem; 5] = [
        Ecosystem::Npm,
        Ecosystem::Pypi,
        Ecosystem::Go,
        Ecosystem::Cargo,
        Ecosystem::Maven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Pypi => "pypi",
            Ecosystem::Go => "go",
            Ecosystem::Cargo => "cargo",
            Ecosystem::Maven => "maven",
        }
    }

    /// Base name of the manifest file this ecosystem's analyzer reads.
    pub fn manifest(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "package.json",
            Ecosystem::Pypi => "requirements.txt",
            Ecosystem::Go => "go.mod",
            Ecosystem::Cargo => "Cargo.toml",
            Ecosystem::Maven => "pom.xml",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Software Bill of Materials document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sbom {
    pub spec_version: String,
    pub name: String,
    pub version: String,
    pub serial_number: String,
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub components: Vec<Component>,
}

impl Sbom {
    pub fn new(name: impl Into<String>, version: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            name: name.into(),
            version: version.into(),
            serial_number: serial_number.into(),
            created: Utc::now(),
            author: None,
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn count(&self) -> usize {
        self.components.len()
    }

    pub fn dev_dependency_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_dev_dependency()).count()
    }
}
