//! The site configuration record and its loader.
//!
//! A [`Config`] describes a blog's identity, navigation and author profile.
//! It is loaded with figment from layered sources and validated before use.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::contacts::Contacts;
use crate::error::{Error, Result};
use crate::scalar;
use crate::validate::validate;

/// Default site file name, resolved against the working directory.
pub const SITE_FILE_NAME: &str = "site.toml";

/// Directory name under the user config dir.
const CONFIG_DIR_NAME: &str = "siteconf";

/// User-level defaults file name.
const USER_DEFAULTS_FILE_NAME: &str = "defaults.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SITECONF_";

/// Listing page size used when the site file doesn't set one.
pub const DEFAULT_POSTS_PER_PAGE: u32 = 4;

/// Site configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SITECONF_`, `__` between levels)
/// 2. The site file (`./site.toml` unless another path is given)
/// 3. User defaults at `~/.config/siteconf/defaults.toml`
/// 4. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Canonical site URL.
    #[serde(deserialize_with = "scalar::string")]
    pub url: String,
    /// Site or author display name.
    #[serde(deserialize_with = "scalar::string")]
    pub title: String,
    /// Tagline.
    #[serde(default, deserialize_with = "scalar::string")]
    pub subtitle: String,
    /// Footer text.
    #[serde(default, deserialize_with = "scalar::string")]
    pub copyright: String,
    /// Disqus shortname. Empty disables comments.
    #[serde(default, deserialize_with = "scalar::string")]
    pub disqus_shortname: String,
    /// Number of posts per listing page.
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,
    /// Google Analytics tracking id.
    #[serde(
        default,
        deserialize_with = "scalar::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub google_analytics_id: Option<String>,
    /// Navigation entries, in display order.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    /// Author profile.
    pub author: Author,
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    /// Display label.
    #[serde(deserialize_with = "scalar::string")]
    pub label: String,
    /// Site path the entry links to, starting with `/`.
    #[serde(deserialize_with = "scalar::string")]
    pub path: String,
}

/// Author profile rendered in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    /// Author name.
    #[serde(deserialize_with = "scalar::string")]
    pub name: String,
    /// Profile photo, a site path or absolute URL.
    #[serde(deserialize_with = "scalar::string")]
    pub photo: String,
    /// Short biography.
    #[serde(default, deserialize_with = "scalar::string")]
    pub bio: String,
    /// Social and code-hosting handles.
    #[serde(default)]
    pub contacts: Contacts,
}

fn default_posts_per_page() -> u32 {
    DEFAULT_POSTS_PER_PAGE
}

impl MenuItem {
    /// Create a menu entry.
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// File formats a site file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// TOML document.
    Toml,
    /// JSON document.
    Json,
}

impl SourceFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything but `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl Config {
    /// Load configuration from all sources, using `./site.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom site file.
    ///
    /// A path given explicitly must exist; the default `./site.toml` may be
    /// absent when every required field comes from other layers.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config = Self::load_unchecked(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge and extract all sources without validating the result.
    ///
    /// Used by `siteconf validate` to report every violation at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is missing, unreadable or malformed.
    pub fn load_unchecked(config_path: Option<PathBuf>) -> Result<Self> {
        let explicit = config_path.is_some();
        let site_file = config_path.unwrap_or_else(Self::default_site_path);

        if explicit && !site_file.is_file() {
            return Err(Error::ConfigNotFound { path: site_file });
        }

        let mut figment = Self::base_figment();

        let user_defaults = Self::user_defaults_path();
        if user_defaults.is_file() {
            debug!(path = %user_defaults.display(), "merging user defaults");
            figment = figment.merge(Toml::file(&user_defaults));
        }

        let figment = Self::merge_site_file(figment, &site_file)?
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false));

        let config: Config = figment.extract()?;
        info!(path = %site_file.display(), title = %config.title, "loaded site configuration");
        Ok(config)
    }

    /// Load a single site file, ignoring user defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let config: Config = Self::merge_site_file(Self::base_figment(), path)?.extract()?;
        config.validate()?;
        debug!(path = %path.display(), "loaded site file");
        Ok(config)
    }

    /// Parse a site configuration from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text doesn't parse or the record is invalid.
    pub fn parse(text: &str, format: SourceFormat) -> Result<Self> {
        let figment = match format {
            SourceFormat::Toml => Self::base_figment().merge(Toml::string(text)),
            SourceFormat::Json => Self::base_figment().merge(Json::string(text)),
        };
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn base_figment() -> Figment {
        Figment::new().merge(Serialized::default(
            "postsPerPage",
            DEFAULT_POSTS_PER_PAGE,
        ))
    }

    fn merge_site_file(figment: Figment, path: &Path) -> Result<Figment> {
        Ok(match SourceFormat::from_path(path)? {
            SourceFormat::Toml => figment.merge(Toml::file(path)),
            SourceFormat::Json => figment.merge(Json::file(path)),
        })
    }

    /// Get the default site file path.
    #[must_use]
    pub fn default_site_path() -> PathBuf {
        PathBuf::from(SITE_FILE_NAME)
    }

    /// Get the user-level defaults file path.
    #[must_use]
    pub fn user_defaults_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(USER_DEFAULTS_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] listing every violation found.
    pub fn validate(&self) -> Result<()> {
        let violations = validate(self);
        if violations.is_empty() {
            return Ok(());
        }
        let message = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::validation(message))
    }

    /// Parse the canonical site URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a valid URL.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| Error::url(&self.url, e))
    }

    /// Absolute URL for a site path.
    ///
    /// Paths resolve below the base URL's own path, so a site hosted at
    /// `https://example.com/blog` maps `/pages/work` to
    /// `https://example.com/blog/pages/work`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or the joined URL is invalid.
    pub fn canonical_url(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url()?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| Error::url(path, e))
    }

    /// Whether the comments widget should be wired.
    #[must_use]
    pub fn comments_enabled(&self) -> bool {
        !self.disqus_shortname.is_empty()
    }

    /// Whether the analytics snippet should be wired.
    #[must_use]
    pub fn analytics_enabled(&self) -> bool {
        self.google_analytics_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Number of listing pages needed for `total_posts` posts.
    ///
    /// A blog with no posts still has one (empty) listing page.
    #[must_use]
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = usize::try_from(self.posts_per_page)
            .unwrap_or(usize::MAX)
            .max(1);
        total_posts.div_ceil(per_page).max(1)
    }

    /// BLAKE3 digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
