//! Writing the configuration out for the site generator.
//!
//! The generator reads a CommonJS module; JSON and TOML are offered for
//! tooling and for moving a configuration between formats.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};

/// Output formats for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// TOML document.
    Toml,
    /// CommonJS module assigning the record to `module.exports`.
    Js,
}

impl ExportFormat {
    /// Infer the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "js" | "cjs" => Some(Self::Js),
            _ => None,
        }
    }
}

/// Render `config` in the given format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export(config: &Config, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut out = serde_json::to_string_pretty(config)?;
            out.push('\n');
            Ok(out)
        }
        ExportFormat::Toml => Ok(toml::to_string(config)?),
        ExportFormat::Js => {
            let json = serde_json::to_string_pretty(config)?;
            Ok(format!("\"use strict\";\n\nmodule.exports = {json};\n"))
        }
    }
}

/// Render `config` and write it to `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file can't be written.
pub fn write_to(config: &Config, format: ExportFormat, path: &Path) -> Result<()> {
    let rendered = export(config, format)?;
    fs::write(path, rendered).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), ?format, "exported site configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::fixture;
    use crate::config::SourceFormat;

    fn current() -> Config {
        Config::from_file(&fixture("lumen-current.toml")).unwrap()
    }

    fn initial() -> Config {
        Config::from_file(&fixture("lumen-initial.json")).unwrap()
    }

    #[test]
    fn test_json_reloads_unchanged() {
        for config in [initial(), current()] {
            let json = export(&config, ExportFormat::Json).unwrap();
            assert_eq!(Config::parse(&json, SourceFormat::Json).unwrap(), config);
        }
    }

    #[test]
    fn test_toml_reloads_unchanged() {
        for config in [initial(), current()] {
            let toml = export(&config, ExportFormat::Toml).unwrap();
            assert_eq!(Config::parse(&toml, SourceFormat::Toml).unwrap(), config);
        }
    }

    #[test]
    fn test_json_keeps_menu_order() {
        let json = export(&initial(), ExportFormat::Json).unwrap();
        let articles = json.find("Articles").unwrap();
        let about = json.find("About me").unwrap();
        let work = json.find("\"Work\"").unwrap();
        assert!(articles < about && about < work);
    }

    #[test]
    fn test_js_module() {
        let js = export(&current(), ExportFormat::Js).unwrap();

        assert!(js.starts_with("\"use strict\";\n\nmodule.exports = {"));
        assert!(js.ends_with("};\n"));

        let body = js
            .trim_start_matches("\"use strict\";\n\nmodule.exports = ")
            .trim_end_matches(";\n");
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["author"]["contacts"]["linkedin"], "larry-custodio");
        assert_eq!(value["menu"][0]["path"], "/pages/work");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/config.js")),
            Some(ExportFormat::Js)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("config.CJS")),
            Some(ExportFormat::Js)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("site.toml")),
            Some(ExportFormat::Toml)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("site.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("site.yaml")), None);
        assert_eq!(ExportFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");

        write_to(&current(), ExportFormat::Toml, &path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), current());
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.js");

        let err = write_to(&current(), ExportFormat::Js, &path).unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
