//! Static profile content embedded from `content/profile.json`.

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> =
    LazyLock::new(|| Profile::load().expect("Should be able to parse embedded profile"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Mail,
    Github,
    Instagram,
    Linkedin,
    Discord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub value: String,
    pub kind: SocialKind,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutPhoto {
    pub src: String,
    pub alt: String,
    pub float_offset: f64,
    pub tilt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub full_name: String,
    pub tagline: String,
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub cv_path: String,
    pub about_photo: String,
    pub contact_photo: String,
    pub projects_url: String,
    pub introduction: Vec<String>,
    pub about_photos: Vec<AboutPhoto>,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn load() -> Result<Self> {
        let file = Assets::get(PROFILE_FILE)
            .ok_or_else(|| SiteError::ContentMissing(PROFILE_FILE.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert!(!profile.first_name.is_empty());
        assert_eq!(profile.about_photos.len(), 3);
        let kinds: Vec<_> = profile.socials.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                SocialKind::Mail,
                SocialKind::Github,
                SocialKind::Instagram,
                SocialKind::Linkedin,
                SocialKind::Discord
            ]
        );
        assert!(profile.socials[0].href.starts_with("mailto:"));
        assert!(!profile.socials[0].is_external());
        assert!(profile.socials[1].is_external());
    }

    #[test]
    fn test_bad_profile_is_an_error() {
        let err = Profile::parse(br#"{"first_name": "x"}"#).unwrap_err();
        assert!(matches!(err, SiteError::ContentParse(_)));
    }
}
