//! Schema checks for a loaded site configuration.
//!
//! [`validate`] collects every problem instead of stopping at the first one,
//! so `siteconf validate` can report a broken file in a single pass.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;
use url::Url;

use crate::config::Config;
use crate::contacts::ContactProvider;

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `menu[1].path`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn site_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/\S*$").expect("static regex"))
}

fn disqus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("static regex"))
}

fn analytics_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(UA-\d+-\d+|G-[A-Z0-9]+)$").expect("static regex"))
}

fn is_http_url(input: &str) -> bool {
    Url::parse(input)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}

/// Check `config` and return every violation found.
///
/// An analytics id that does not look like a real tracking id is logged as a
/// warning rather than reported.
#[must_use]
pub fn validate(config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_http_url(&config.url) {
        violations.push(Violation::new(
            "url",
            format!("'{}' is not an absolute http(s) URL", config.url),
        ));
    }

    if config.title.trim().is_empty() {
        violations.push(Violation::new("title", "must not be empty"));
    }

    if config.posts_per_page == 0 {
        violations.push(Violation::new("postsPerPage", "must be greater than 0"));
    }

    if !config.disqus_shortname.is_empty() && !disqus_re().is_match(&config.disqus_shortname) {
        violations.push(Violation::new(
            "disqusShortname",
            "may only contain ASCII letters, digits and '-'",
        ));
    }

    if let Some(id) = &config.google_analytics_id {
        if id.trim().is_empty() {
            violations.push(Violation::new(
                "googleAnalyticsId",
                "must not be empty when present",
            ));
        } else if !analytics_id_re().is_match(id) {
            warn!(id = %id, "googleAnalyticsId does not look like a tracking id");
        }
    }

    for (i, item) in config.menu.iter().enumerate() {
        if item.label.trim().is_empty() {
            violations.push(Violation::new(format!("menu[{i}].label"), "must not be empty"));
        }
        if !site_path_re().is_match(&item.path) {
            violations.push(Violation::new(
                format!("menu[{i}].path"),
                format!("'{}' must start with '/' and contain no whitespace", item.path),
            ));
        }
    }

    let author = &config.author;
    if author.name.trim().is_empty() {
        violations.push(Violation::new("author.name", "must not be empty"));
    }

    if author.photo.is_empty() {
        violations.push(Violation::new("author.photo", "must not be empty"));
    } else if !site_path_re().is_match(&author.photo) && !is_http_url(&author.photo) {
        violations.push(Violation::new(
            "author.photo",
            format!(
                "'{}' must be a site path starting with '/' or an http(s) URL",
                author.photo
            ),
        ));
    }

    for (provider, handle) in author.contacts.iter() {
        let field = format!("author.contacts.{provider}");
        if handle.is_empty() {
            violations.push(Violation::new(field, "handle must not be empty"));
        } else if handle.chars().any(char::is_whitespace) {
            violations.push(Violation::new(field, "handle must not contain whitespace"));
        } else if provider == ContactProvider::Email && !handle.contains('@') {
            violations.push(Violation::new(field, "must be an email address"));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Author, MenuItem};
    use crate::contacts::Contacts;

    fn valid_config() -> Config {
        let mut contacts = Contacts::new();
        contacts.insert(ContactProvider::Github, "larrycustodio");
        Config {
            url: "https://lumen.netlify.com".to_string(),
            title: "Larry Custodio".to_string(),
            subtitle: "Frontend developer".to_string(),
            copyright: "...".to_string(),
            disqus_shortname: "larrycustodio".to_string(),
            posts_per_page: 4,
            google_analytics_id: None,
            menu: vec![MenuItem::new("Articles", "/")],
            author: Author {
                name: "Larry Custodio".to_string(),
                photo: "/profile-pic.png".to_string(),
                bio: String::new(),
                contacts,
            },
        }
    }

    fn fields(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_config_has_no_violations() {
        assert!(validate(&valid_config()).is_empty());
    }

    #[test]
    fn test_placeholder_analytics_id_is_not_a_violation() {
        crate::logging::init_test_logging();
        let mut config = valid_config();
        config.google_analytics_id = Some("xxx".to_string());
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_empty_analytics_id() {
        let mut config = valid_config();
        config.google_analytics_id = Some("  ".to_string());
        assert_eq!(fields(&validate(&config)), vec!["googleAnalyticsId"]);
    }

    #[test]
    fn test_relative_url() {
        let mut config = valid_config();
        config.url = "lumen.netlify.com".to_string();
        assert_eq!(fields(&validate(&config)), vec!["url"]);

        config.url = "ftp://lumen.netlify.com".to_string();
        assert_eq!(fields(&validate(&config)), vec!["url"]);
    }

    #[test]
    fn test_zero_posts_per_page() {
        let mut config = valid_config();
        config.posts_per_page = 0;
        assert_eq!(fields(&validate(&config)), vec!["postsPerPage"]);
    }

    #[test]
    fn test_menu_path_must_be_rooted() {
        let mut config = valid_config();
        config.menu.push(MenuItem::new("Work", "pages/work"));
        config.menu.push(MenuItem::new("About", "/pages/about me"));

        let violations = validate(&config);
        assert_eq!(fields(&violations), vec!["menu[1].path", "menu[2].path"]);
        assert!(violations[0].message.contains("pages/work"));
    }

    #[test]
    fn test_menu_label_must_not_be_blank() {
        let mut config = valid_config();
        config.menu.push(MenuItem::new(" ", "/pages/work"));
        assert_eq!(fields(&validate(&config)), vec!["menu[1].label"]);
    }

    #[test]
    fn test_disqus_shortname_charset() {
        let mut config = valid_config();
        config.disqus_shortname = "larry custodio".to_string();
        assert_eq!(fields(&validate(&config)), vec!["disqusShortname"]);

        config.disqus_shortname = String::new();
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_contact_handles() {
        let mut config = valid_config();
        config.author.contacts.insert(ContactProvider::Linkedin, "");
        config.author.contacts.insert(ContactProvider::Twitter, "larry c");
        config.author.contacts.insert(ContactProvider::Email, "larry");

        let violations = validate(&config);
        assert_eq!(
            fields(&violations),
            vec![
                "author.contacts.email",
                "author.contacts.twitter",
                "author.contacts.linkedin",
            ]
        );
    }

    #[test]
    fn test_author_photo() {
        let mut config = valid_config();
        config.author.photo = "https://example.com/me.png".to_string();
        assert!(validate(&config).is_empty());

        config.author.photo = "profile-pic.png".to_string();
        assert_eq!(fields(&validate(&config)), vec!["author.photo"]);

        config.author.photo = String::new();
        assert_eq!(fields(&validate(&config)), vec!["author.photo"]);
    }

    #[test]
    fn test_reports_every_violation() {
        let mut config = valid_config();
        config.title = String::new();
        config.author.name = String::new();
        config.posts_per_page = 0;

        assert_eq!(
            fields(&validate(&config)),
            vec!["title", "postsPerPage", "author.name"]
        );
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new("menu[0].path", "must start with '/'");
        assert_eq!(v.to_string(), "menu[0].path: must start with '/'");
    }
}
