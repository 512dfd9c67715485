use anyhow::{Context, Result};

use crate::models::Sbom;

pub fn render(sbom: &Sbom) -> Result<String> {
    serde_yaml::to_string(sbom).context("Failed to serialize to YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_sbom;

    #[test]
    fn test_render_yaml() {
        let out = render(&sample_sbom()).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

        assert_eq!(value["name"].as_str(), Some("demo"));
        let components = value["components"].as_sequence().unwrap();
        assert_eq!(components.len(), 4);
        assert_eq!(components[2]["supplier"].as_str(), Some("cargo"));
        assert_eq!(components[2]["purl"].as_str(), Some("pkg:cargo/serde@1.0"));
    }
}
