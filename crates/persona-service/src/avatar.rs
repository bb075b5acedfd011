//! Avatar URL classification.

use std::collections::HashMap;

use async_trait::async_trait;
use persona_core::AvatarClass;

use crate::collaborators::AvatarClassifier;
use crate::error::{ServiceError, ServiceResult};
use crate::validation::cache_key;

/// Hosts that serve the user's own uploaded picture
const PHOTO_HOSTS: &[&str] = &["unavatar.io", "pbs.twimg.com", "abs.twimg.com"];

/// Hosts that generate placeholder art
const CARTOON_HOSTS: &[&str] = &["dicebear.com"];

fn matches_host(host: &str, domains: &[&str]) -> bool {
    domains
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{d}")))
}

fn mentions_host(url: &str, domains: &[&str]) -> bool {
    let url = url.to_ascii_lowercase();
    domains.iter().any(|d| url.contains(d))
}

/// Classify an avatar by the host that serves it.
///
/// Absolute URLs are matched on their parsed host. Anything `Url::parse`
/// rejects (protocol-relative or bare `host/path` forms) is matched on the
/// host names appearing anywhere in the string.
pub fn classify_avatar_url(url: &str) -> AvatarClass {
    let (photo, cartoon) = match url::Url::parse(url.trim()) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
            (
                matches_host(&host, PHOTO_HOSTS),
                matches_host(&host, CARTOON_HOSTS),
            )
        }
        Err(_) => (
            mentions_host(url, PHOTO_HOSTS),
            mentions_host(url, CARTOON_HOSTS),
        ),
    };

    if photo {
        AvatarClass::RealPhoto
    } else if cartoon {
        AvatarClass::DefaultCartoon
    } else {
        AvatarClass::Unknown
    }
}

/// Classifier backed by a fixed handle → avatar URL table
#[derive(Debug, Clone, Default)]
pub struct UrlAvatarClassifier {
    urls: HashMap<String, String>,
}

impl UrlAvatarClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_avatar(mut self, handle: &str, url: impl Into<String>) -> Self {
        self.urls.insert(cache_key(handle), url.into());
        self
    }
}

#[async_trait]
impl AvatarClassifier for UrlAvatarClassifier {
    async fn classify(&self, handle: &str) -> ServiceResult<AvatarClass> {
        self.urls
            .get(&cache_key(handle))
            .map(|url| classify_avatar_url(url))
            .ok_or_else(|| ServiceError::AvatarLookup(format!("no avatar known for `{handle}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_hosts() {
        assert_eq!(
            classify_avatar_url("https://unavatar.io/twitter/jack?fallback=false"),
            AvatarClass::RealPhoto
        );
        assert_eq!(
            classify_avatar_url("https://pbs.twimg.com/profile_images/1/a_400x400.jpg"),
            AvatarClass::RealPhoto
        );
        assert_eq!(
            classify_avatar_url("HTTPS://ABS.TWIMG.COM/sticky/default.png"),
            AvatarClass::RealPhoto
        );
    }

    #[test]
    fn test_cartoon_hosts() {
        assert_eq!(
            classify_avatar_url("https://api.dicebear.com/7.x/avataaars/svg?seed=jack"),
            AvatarClass::DefaultCartoon
        );
    }

    #[test]
    fn test_unknown_hosts() {
        assert_eq!(classify_avatar_url("https://example.com/me.png"), AvatarClass::Unknown);
        // host must match, not just contain the name
        assert_eq!(
            classify_avatar_url("https://notdicebear.com/x.svg"),
            AvatarClass::Unknown
        );
        assert_eq!(
            classify_avatar_url("https://cdn.example.com/unavatar.io/x"),
            AvatarClass::Unknown
        );
        assert_eq!(classify_avatar_url(""), AvatarClass::Unknown);
    }

    #[test]
    fn test_host_parsing() {
        assert_eq!(
            classify_avatar_url("https://user@pbs.twimg.com:443/x"),
            AvatarClass::RealPhoto
        );
        // a backslash ends the authority, so the host is evil.com
        assert_eq!(
            classify_avatar_url("https://evil.com\\@pbs.twimg.com/x"),
            AvatarClass::Unknown
        );
    }

    #[test]
    fn test_unparseable_urls_match_by_name() {
        assert_eq!(classify_avatar_url("//unavatar.io/jack"), AvatarClass::RealPhoto);
        assert_eq!(classify_avatar_url("unavatar.io/jack"), AvatarClass::RealPhoto);
        assert_eq!(
            classify_avatar_url("//api.DiceBear.com/7.x/svg"),
            AvatarClass::DefaultCartoon
        );
        assert_eq!(classify_avatar_url("//example.com/me.png"), AvatarClass::Unknown);
    }

    #[tokio::test]
    async fn test_url_classifier() {
        let classifier = UrlAvatarClassifier::new()
            .with_avatar("Jack", "https://pbs.twimg.com/profile_images/1/a.jpg");

        assert_eq!(classifier.classify("jack").await.unwrap(), AvatarClass::RealPhoto);
        assert!(matches!(
            classifier.classify("jill").await,
            Err(ServiceError::AvatarLookup(_))
        ));
    }
}
