//! Author contact handles.
//!
//! Contacts map a known provider to the author's handle on that provider.
//! Themes turn each entry into a social link with [`ContactProvider::href`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recognized contact provider.
///
/// Declaration order is the order links are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactProvider {
    /// Email address.
    Email,
    /// Telegram username.
    Telegram,
    /// Twitter handle.
    Twitter,
    /// GitHub username.
    Github,
    /// RSS feed URL or path.
    Rss,
    /// VK profile id.
    Vkontakte,
    /// `LinkedIn` profile slug.
    Linkedin,
    /// Instagram username.
    Instagram,
    /// LINE id.
    Line,
    /// Facebook username.
    Facebook,
    /// GitLab username.
    Gitlab,
    /// Weibo id.
    Weibo,
    /// `CodePen` username.
    Codepen,
    /// `YouTube` channel id.
    Youtube,
    /// `SoundCloud` username.
    Soundcloud,
    /// Medium username.
    Medium,
}

impl ContactProvider {
    /// All providers, in rendering order.
    pub const ALL: [Self; 16] = [
        Self::Email,
        Self::Telegram,
        Self::Twitter,
        Self::Github,
        Self::Rss,
        Self::Vkontakte,
        Self::Linkedin,
        Self::Instagram,
        Self::Line,
        Self::Facebook,
        Self::Gitlab,
        Self::Weibo,
        Self::Codepen,
        Self::Youtube,
        Self::Soundcloud,
        Self::Medium,
    ];

    /// The identifier used as the key in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Telegram => "telegram",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Rss => "rss",
            Self::Vkontakte => "vkontakte",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Line => "line",
            Self::Facebook => "facebook",
            Self::Gitlab => "gitlab",
            Self::Weibo => "weibo",
            Self::Codepen => "codepen",
            Self::Youtube => "youtube",
            Self::Soundcloud => "soundcloud",
            Self::Medium => "medium",
        }
    }

    /// Look up a provider by its configuration key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// Build the link a theme renders for `handle` on this provider.
    ///
    /// RSS handles are already links and are returned unchanged.
    #[must_use]
    pub fn href(self, handle: &str) -> String {
        let prefix = match self {
            Self::Email => "mailto:",
            Self::Telegram => "https://t.me/",
            Self::Twitter => "https://www.twitter.com/",
            Self::Github => "https://github.com/",
            Self::Rss => return handle.to_string(),
            Self::Vkontakte => "https://vk.com/",
            Self::Linkedin => "https://www.linkedin.com/in/",
            Self::Instagram => "https://www.instagram.com/",
            Self::Line => "line://ti/p/",
            Self::Facebook => "https://www.facebook.com/",
            Self::Gitlab => "https://www.gitlab.com/",
            Self::Weibo => "https://www.weibo.com/",
            Self::Codepen => "https://www.codepen.io/",
            Self::Youtube => "https://www.youtube.com/channel/",
            Self::Soundcloud => "https://soundcloud.com/",
            Self::Medium => "https://medium.com/",
        };
        format!("{prefix}{handle}")
    }
}

impl std::fmt::Display for ContactProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from provider to the author's handle on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contacts(
    #[serde(deserialize_with = "crate::scalar::string_map")] BTreeMap<ContactProvider, String>,
);

impl Contacts {
    /// Create an empty set of contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handle for a provider, returning the previous one.
    pub fn insert(&mut self, provider: ContactProvider, handle: impl Into<String>) -> Option<String> {
        self.0.insert(provider, handle.into())
    }

    /// Handle for a provider, if configured.
    #[must_use]
    pub fn get(&self, provider: ContactProvider) -> Option<&str> {
        self.0.get(&provider).map(String::as_str)
    }

    /// Number of configured providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no providers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(provider, handle)` in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactProvider, &str)> {
        self.0.iter().map(|(p, h)| (*p, h.as_str()))
    }

    /// Resolved `(provider, href)` pairs in rendering order.
    #[must_use]
    pub fn links(&self) -> Vec<(ContactProvider, String)> {
        self.iter().map(|(p, h)| (p, p.href(h))).collect()
    }
}

impl FromIterator<(ContactProvider, String)> for Contacts {
    fn from_iter<I: IntoIterator<Item = (ContactProvider, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_keys_round_trip() {
        for provider in ContactProvider::ALL {
            assert_eq!(ContactProvider::from_key(provider.as_str()), Some(provider));
        }
        assert_eq!(ContactProvider::from_key("myspace"), None);
    }

    #[test]
    fn test_provider_display_matches_serde_key() {
        for provider in ContactProvider::ALL {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{provider}\""));
        }
    }

    #[test]
    fn test_href() {
        assert_eq!(
            ContactProvider::Github.href("larrycustodio"),
            "https://github.com/larrycustodio"
        );
        assert_eq!(
            ContactProvider::Linkedin.href("larry-custodio"),
            "https://www.linkedin.com/in/larry-custodio"
        );
        assert_eq!(
            ContactProvider::Email.href("me@example.com"),
            "mailto:me@example.com"
        );
        assert_eq!(ContactProvider::Rss.href("/rss.xml"), "/rss.xml");
    }

    #[test]
    fn test_links_follow_provider_order() {
        let mut contacts = Contacts::new();
        contacts.insert(ContactProvider::Linkedin, "larry-custodio");
        contacts.insert(ContactProvider::Github, "larrycustodio");

        let providers: Vec<_> = contacts.links().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            providers,
            vec![ContactProvider::Github, ContactProvider::Linkedin]
        );
    }

    #[test]
    fn test_deserialize_known_providers() {
        let json = r#"{"github": "larrycustodio", "linkedin": "larry-custodio"}"#;
        let contacts: Contacts = serde_json::from_str(json).unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts.get(ContactProvider::Github), Some("larrycustodio"));
        assert_eq!(contacts.get(ContactProvider::Linkedin), Some("larry-custodio"));
        assert_eq!(contacts.get(ContactProvider::Twitter), None);
    }

    #[test]
    fn test_deserialize_numeric_handle() {
        let contacts: Contacts = serde_json::from_str(r#"{"vkontakte": 12345}"#).unwrap();
        assert_eq!(contacts.get(ContactProvider::Vkontakte), Some("12345"));
    }

    #[test]
    fn test_deserialize_unknown_provider_fails() {
        let json = r#"{"myspace": "tom"}"#;
        let result: Result<Contacts, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("myspace"));
    }

    #[test]
    fn test_insert_replaces_handle() {
        let mut contacts = Contacts::new();
        assert!(contacts.is_empty());
        assert_eq!(contacts.insert(ContactProvider::Github, "old"), None);
        assert_eq!(
            contacts.insert(ContactProvider::Github, "new"),
            Some("old".to_string())
        );
        assert_eq!(contacts.get(ContactProvider::Github), Some("new"));
    }
}
