//! Guide configuration loading
//!
//! Guides are described in TOML files deserialized into
//! [`GuideConfig`](guidemask_types::GuideConfig). Loaded configs are returned
//! sanitized so out-of-range cosmetic values never reach the renderer.

use std::path::Path;

use guidemask_types::GuideConfig;

use crate::error::ConfigError;

/// Load and sanitize a guide config from a TOML file
pub fn load_config(path: &Path) -> Result<GuideConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        decorations = config.decorations.len(),
        "Loaded guide config"
    );
    Ok(config)
}

/// Parse and sanitize a guide config from TOML text
pub fn parse_config(content: &str) -> Result<GuideConfig, toml::de::Error> {
    toml::from_str::<GuideConfig>(content).map(|config| config.sanitized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidemask_types::{Anchor, Fit, HighlightShape};

    #[test]
    fn parse_sanitizes_values() {
        let config = parse_config(
            r#"
            density = -2.0

            [padding]
            uniform = -4.0

            [shape]
            kind = "rounded_rect"
            corner_radius = -3.0
            "#,
        )
        .unwrap();
        assert_eq!(config.padding.uniform, -4.0);
        assert_eq!(config.shape, HighlightShape::rounded_rect(0.0));
        assert_eq!(config.density, 1.0);
    }

    #[test]
    fn parse_decorations() {
        let config = parse_config(
            r#"
            [[decorations]]
            anchor = "over"

            [[decorations]]
            anchor = "top"
            fit = "start"
            offset_x = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(config.decorations.len(), 2);
        assert_eq!(config.decorations[0].fit, Fit::Center);
        assert_eq!(config.decorations[1].anchor, Anchor::Top);
        assert_eq!(config.decorations[1].offset_x, 8.0);
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert!(parse_config("[[decorations]]\nanchor = \"diagonal\"\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/guide.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/guide.toml"));
    }
}
