//! Application settings read from the data directory
//!
//! Display choices are stored as plain keys and resolved leniently, so a
//! settings file written by a newer build with an unknown template or scheme
//! still loads.

use crate::pdf::PageGeometry;
use crate::raster::CaptureOptions;
use crate::Result;
use charts::Color;
use preview::{ColorScheme, DisplayLocale, Template, PAGE_HEIGHT, PAGE_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub display: DisplaySettings,
    pub export: ExportSettings,
}

/// Initial preview choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Locale tag such as `"en"` or `"ru"`
    pub locale: String,
    pub template: String,
    pub color_scheme: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            locale: DisplayLocale::default().key().to_string(),
            template: Template::default().key().to_string(),
            color_scheme: ColorScheme::default().key().to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn locale(&self) -> DisplayLocale {
        DisplayLocale::parse(&self.locale).unwrap_or_default()
    }

    pub fn template(&self) -> Template {
        Template::parse(&self.template).unwrap_or_default()
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::parse(&self.color_scheme)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Staged page width in CSS pixels
    pub page_width: u32,
    /// Staged page height in CSS pixels
    pub page_height: u32,
    /// Raster pixel density multiplier
    pub scale: f64,
    /// Staged page background as `#rrggbb`
    pub background: String,
    /// Base file name used when the profile name is blank
    pub fallback_file_name: String,
    /// Where exported files are saved; the working directory when unset
    pub download_dir: Option<PathBuf>,
    pub page: PageGeometry,
    pub compress: bool,
    /// Font used for page text ahead of the system fonts
    pub font_file: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH as u32,
            page_height: PAGE_HEIGHT as u32,
            scale: 2.0,
            background: "#ffffff".to_string(),
            fallback_file_name: "resume".to_string(),
            download_dir: None,
            page: PageGeometry::a4_portrait(),
            compress: true,
            font_file: None,
        }
    }
}

impl ExportSettings {
    /// Background color, white when the configured value does not parse
    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color::WHITE)
    }

    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            width: self.page_width,
            height: self.page_height,
            scale: if self.scale > 0.0 { self.scale } else { 1.0 },
            background: self.background_color(),
        }
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Reads [`AppSettings`] from JSON in the app data directory
pub struct SettingsManager {
    settings_path: PathBuf,
    current: AppSettings,
}

impl SettingsManager {
    pub fn new(app_data_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: app_data_dir.as_ref().join(SETTINGS_FILE),
            current: AppSettings::default(),
        }
    }

    /// Read the settings file. A missing file keeps the defaults, a
    /// malformed one is logged and replaced by defaults.
    pub async fn load(&mut self) -> Result<&AppSettings> {
        if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            self.apply(&content);
        }
        Ok(&self.current)
    }

    fn apply(&mut self, content: &str) {
        match serde_json::from_str::<AppSettings>(content) {
            Ok(settings) => self.current = settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                self.current = AppSettings::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.display.template(), Template::Modern);
        assert_eq!(settings.display.color_scheme(), ColorScheme::Blue);
        assert_eq!(settings.export.page_width, 595);
        assert_eq!(settings.export.page_height, 842);
        assert_eq!(settings.export.background_color(), Color::WHITE);
        assert_eq!(settings.export.fallback_file_name, "resume");
    }

    #[test]
    fn test_unknown_keys_resolve_to_defaults() {
        let display = DisplaySettings {
            locale: "de".to_string(),
            template: "fancy".to_string(),
            color_scheme: "purple".to_string(),
        };
        assert_eq!(display.locale(), DisplayLocale::Ru);
        assert_eq!(display.template(), Template::Modern);
        assert_eq!(display.color_scheme(), ColorScheme::Blue);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"display":{"template":"minimal"}}"#).unwrap();
        assert_eq!(settings.display.template(), Template::Minimal);
        assert_eq!(settings.export, ExportSettings::default());
    }

    #[test]
    fn test_capture_options_guard_scale() {
        let export = ExportSettings {
            scale: 0.0,
            background: "not a color".to_string(),
            ..ExportSettings::default()
        };
        let options = export.capture_options();
        assert_eq!(options.scale, 1.0);
        assert_eq!(options.background, Color::WHITE);
    }

    #[tokio::test]
    async fn test_missing_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(dir.path());
        assert_eq!(manager.load().await.unwrap(), &AppSettings::default());
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ nope").unwrap();
        let mut manager = SettingsManager::new(dir.path());
        assert_eq!(manager.load().await.unwrap(), &AppSettings::default());
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"display":{"color_scheme":"green"},"export":{"scale":3.0}}"#,
        )
        .unwrap();
        let mut manager = SettingsManager::new(dir.path());
        let settings = manager.load().await.unwrap();
        assert_eq!(settings.display.color_scheme(), ColorScheme::Green);
        assert_eq!(settings.export.scale, 3.0);
        assert_eq!(settings.export.fallback_file_name, "resume");
    }
}
