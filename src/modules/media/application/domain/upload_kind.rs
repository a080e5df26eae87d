use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const IMAGE_BUCKET: &str = "images";
pub const DOCUMENT_BUCKET: &str = "documents";

const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/webp"];
const DOCUMENT_MIME_TYPES: &[&str] = &["application/pdf"];

/// Value of the `type` form field on an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Image,
    Document,
    Profile,
}

impl UploadKind {
    pub fn bucket(&self) -> &'static str {
        match self {
            UploadKind::Image | UploadKind::Profile => IMAGE_BUCKET,
            UploadKind::Document => DOCUMENT_BUCKET,
        }
    }

    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image | UploadKind::Profile => IMAGE_MIME_TYPES,
            UploadKind::Document => DOCUMENT_MIME_TYPES,
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        self.allowed_mime_types()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Document => "document",
            UploadKind::Profile => "profile",
        }
    }
}

impl FromStr for UploadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "image" => Ok(UploadKind::Image),
            "document" => Ok(UploadKind::Document),
            "profile" => Ok(UploadKind::Profile),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("image".parse::<UploadKind>(), Ok(UploadKind::Image));
        assert_eq!(" document ".parse::<UploadKind>(), Ok(UploadKind::Document));
        assert_eq!("profile".parse::<UploadKind>(), Ok(UploadKind::Profile));
        assert_eq!("video".parse::<UploadKind>(), Err("video".to_string()));
    }

    #[test]
    fn test_profile_photos_share_the_image_rules() {
        assert_eq!(UploadKind::Profile.bucket(), "images");
        assert!(UploadKind::Profile.accepts("image/webp"));
        assert!(!UploadKind::Profile.accepts("application/pdf"));
    }

    #[test]
    fn test_documents_are_pdf_only() {
        assert_eq!(UploadKind::Document.bucket(), "documents");
        assert!(UploadKind::Document.accepts("application/pdf"));
        assert!(!UploadKind::Document.accepts("image/png"));
    }
}
