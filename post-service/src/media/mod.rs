/// Media classification and storage
///
/// Uploaded files are classified by MIME subtype into the image or video
/// extension set before anything touches storage. A subtype outside both
/// sets is an unrecoverable error: the whole post-creation request aborts
/// and nothing is persisted.
pub mod s3;

pub use s3::{build_s3_client, S3MediaStore};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Media kind recognized by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Image MIME subtypes and the storage extension each maps to
const IMAGE_SUBTYPES: &[(&str, &str)] = &[
    ("jpeg", "jpg"),
    ("png", "png"),
    ("gif", "gif"),
    ("webp", "webp"),
    ("heic", "heic"),
];

/// Video MIME subtypes and the storage extension each maps to
const VIDEO_SUBTYPES: &[(&str, &str)] = &[
    ("mp4", "mp4"),
    ("quicktime", "mov"),
    ("webm", "webm"),
    ("x-matroska", "mkv"),
];

/// Classify a MIME content type into a media kind and storage extension.
///
/// Unrecognized types return `AppError::UnsupportedMediaType`, which aborts
/// the surrounding operation; expected business failures never come from
/// here.
pub fn classify(content_type: &str) -> Result<(MediaKind, &'static str)> {
    let mime: mime::Mime = content_type
        .parse()
        .map_err(|_| AppError::UnsupportedMediaType(format!("unparsable type: {content_type}")))?;

    let subtype = mime.subtype().as_str();
    match mime.type_() {
        mime::IMAGE => IMAGE_SUBTYPES
            .iter()
            .find(|(s, _)| *s == subtype)
            .map(|(_, ext)| (MediaKind::Image, *ext))
            .ok_or_else(|| AppError::UnsupportedMediaType(content_type.to_string())),
        mime::VIDEO => VIDEO_SUBTYPES
            .iter()
            .find(|(s, _)| *s == subtype)
            .map(|(_, ext)| (MediaKind::Video, *ext))
            .ok_or_else(|| AppError::UnsupportedMediaType(content_type.to_string())),
        _ => Err(AppError::UnsupportedMediaType(content_type.to_string())),
    }
}

/// Build the storage key for a freshly classified upload.
pub fn storage_key(kind: MediaKind, ext: &str) -> String {
    match kind {
        MediaKind::Image => format!("posts/images/{}.{}", Uuid::new_v4(), ext),
        MediaKind::Video => format!("posts/videos/{}.{}", Uuid::new_v4(), ext),
    }
}

/// Media storage backend consumed by the service layer
///
/// `delete` resolves to `Ok(false)` when the backend reports the operation
/// unsuccessful without erroring; callers treat both `Ok(false)` and `Err`
/// as a failed deletion.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, key: &str, content_type: &str, data: Vec<u8>) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_classify_into_the_image_set() {
        assert_eq!(classify("image/jpeg").unwrap(), (MediaKind::Image, "jpg"));
        assert_eq!(classify("image/png").unwrap(), (MediaKind::Image, "png"));
    }

    #[test]
    fn videos_classify_into_the_video_set() {
        assert_eq!(classify("video/mp4").unwrap(), (MediaKind::Video, "mp4"));
        assert_eq!(
            classify("video/quicktime").unwrap(),
            (MediaKind::Video, "mov")
        );
    }

    #[test]
    fn unknown_subtype_is_unrecoverable() {
        assert!(matches!(
            classify("image/tiff"),
            Err(AppError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            classify("application/pdf"),
            Err(AppError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn storage_keys_are_partitioned_by_kind() {
        let image_key = storage_key(MediaKind::Image, "jpg");
        let video_key = storage_key(MediaKind::Video, "mp4");
        assert!(image_key.starts_with("posts/images/"));
        assert!(image_key.ends_with(".jpg"));
        assert!(video_key.starts_with("posts/videos/"));
        assert!(video_key.ends_with(".mp4"));
    }
}
