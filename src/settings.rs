use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid backdrop settings: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropSettings {
    pub enabled: bool,
    pub particle_count: usize,
    /// Per-axis speed limit, in pixels per frame.
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Hues are sampled from `hue_start..hue_start + hue_span`, in degrees.
    pub hue_start: f32,
    pub hue_span: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub link_distance: f32,
    pub link_width: f32,
    pub frame_interval_ms: u64,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        BackdropSettings {
            enabled: true,
            particle_count: 100,
            max_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            hue_start: 180.0,
            hue_span: 60.0,
            saturation: 0.7,
            lightness: 0.6,
            link_distance: 100.0,
            link_width: 0.5,
            frame_interval_ms: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub compound_interest: bool,
    pub retirement: bool,
    pub emergency_fund: bool,
    pub contact: bool,
}

impl Default for Features {
    fn default() -> Self {
        Features {
            compound_interest: true,
            retirement: true,
            emergency_fund: true,
            contact: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub backdrop: BackdropSettings,
    pub features: Features,
}

impl SiteSettings {
    pub fn parse(path: &str, text: &str) -> Result<Self, SettingsError> {
        let settings: SiteSettings =
            serde_json::from_str(text).map_err(|source| SettingsError::Parse {
                path: path.to_string(),
                source,
            })?;
        settings.validate()
    }

    fn validate(self) -> Result<Self, SettingsError> {
        let backdrop = &self.backdrop;
        if !(backdrop.max_speed.is_finite() && backdrop.max_speed >= 0.0) {
            return Err(SettingsError::Invalid("max_speed must be a non-negative number"));
        }
        if !(backdrop.min_size > 0.0 && backdrop.min_size <= backdrop.max_size) {
            return Err(SettingsError::Invalid("sizes must satisfy 0 < min_size <= max_size"));
        }
        if !(backdrop.hue_span >= 0.0) {
            return Err(SettingsError::Invalid("hue_span must be non-negative"));
        }
        if !(backdrop.link_distance > 0.0) {
            return Err(SettingsError::Invalid("link_distance must be positive"));
        }
        if backdrop.frame_interval_ms == 0 {
            return Err(SettingsError::Invalid("frame_interval_ms must be positive"));
        }
        Ok(self)
    }
}

async fn read(path: &str) -> Result<SiteSettings, SettingsError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SettingsError::Read {
            path: path.to_string(),
            source,
        })?;
    SiteSettings::parse(path, &text)
}

/// Reads the site settings, falling back to defaults when the file is
/// missing or unusable.
pub async fn load(path: &'static str) -> SiteSettings {
    match read(path).await {
        Ok(settings) => {
            debug!("loaded settings from {}", path);
            settings
        }
        Err(SettingsError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!("{} not found, using default settings", path);
            SiteSettings::default()
        }
        Err(error) => {
            warn!("{}; using default settings", error);
            SiteSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = SiteSettings::parse(
            "site.json",
            r#"{ "backdrop": { "particle_count": 10 }, "features": { "retirement": false } }"#,
        )
        .unwrap();

        assert_eq!(settings.backdrop.particle_count, 10);
        assert_eq!(settings.backdrop.link_distance, 100.0);
        assert!(settings.backdrop.enabled);
        assert!(!settings.features.retirement);
        assert!(settings.features.compound_interest);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = SiteSettings::parse("site.json", "{ backdrop: ").unwrap_err();
        assert!(matches!(error, SettingsError::Parse { .. }));
        assert!(error.to_string().starts_with("could not parse site.json"));
    }

    #[test]
    fn inverted_size_range_is_rejected() {
        let error = SiteSettings::parse(
            "site.json",
            r#"{ "backdrop": { "min_size": 4.0, "max_size": 2.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(error, SettingsError::Invalid(_)));
    }

    #[test]
    fn zero_frame_interval_is_rejected() {
        let error =
            SiteSettings::parse("site.json", r#"{ "backdrop": { "frame_interval_ms": 0 } }"#)
                .unwrap_err();
        assert!(matches!(error, SettingsError::Invalid(_)));
    }
}
