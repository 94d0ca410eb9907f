use crate::models::{PhotoRef, ProcessedPhoto};

/// Mask quality reported for every stub mask
pub const MASK_QUALITY: f64 = 0.95;

/// Image suffixes we know how to rewrite, and their masked counterparts
const MASKED_SUFFIXES: [(&str, &str); 2] = [(".jpg", "_masked.jpg"), (".png", "_masked.png")];

/// Derive the URL of the masked variant of a photo
///
/// Only a trailing `.jpg` or `.png` (case-sensitive) is rewritten; `None`
/// for anything else.
pub fn masked_url(url: &str) -> Option<String> {
    MASKED_SUFFIXES.iter().find_map(|(suffix, masked)| {
        url.strip_suffix(suffix)
            .map(|stem| format!("{}{}", stem, masked))
    })
}

/// Produce one processed record per input photo, preserving order
///
/// Photos without a recognized extension keep their original URL and are
/// reported at `warn`.
pub fn remove_backgrounds(photos: &[PhotoRef]) -> Vec<ProcessedPhoto> {
    photos
        .iter()
        .map(|photo| {
            let url = masked_url(&photo.url).unwrap_or_else(|| {
                tracing::warn!(
                    url = %photo.url,
                    photo_type = %photo.photo_type,
                    "Unrecognized image extension, returning original URL unmasked"
                );
                photo.url.clone()
            });
            ProcessedPhoto {
                url,
                photo_type: photo.photo_type.clone(),
                mask_quality: MASK_QUALITY,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(url: &str, photo_type: &str) -> PhotoRef {
        PhotoRef {
            url: url.to_string(),
            photo_type: photo_type.to_string(),
        }
    }

    #[test]
    fn test_masked_url_jpg() {
        assert_eq!(
            masked_url("https://cdn/x/front.jpg").as_deref(),
            Some("https://cdn/x/front_masked.jpg")
        );
    }

    #[test]
    fn test_masked_url_png() {
        assert_eq!(masked_url("side.png").as_deref(), Some("side_masked.png"));
    }

    #[test]
    fn test_masked_url_only_rewrites_suffix() {
        assert_eq!(masked_url("a.jpg.png").as_deref(), Some("a.jpg_masked.png"));
        assert_eq!(
            masked_url("photos.jpg/back.png").as_deref(),
            Some("photos.jpg/back_masked.png")
        );
    }

    #[test]
    fn test_masked_url_unknown_extension() {
        assert_eq!(masked_url("front.webp"), None);
        assert_eq!(masked_url("front.jpeg"), None);
        assert_eq!(masked_url("a.JPG"), None);
    }

    #[test]
    fn test_unrecognized_extension_passes_through() {
        let processed = remove_backgrounds(&[photo("a.JPG", "front"), photo("b.jpg", "side")]);
        assert_eq!(processed[0].url, "a.JPG");
        assert_eq!(processed[1].url, "b_masked.jpg");
    }

    #[test]
    fn test_remove_backgrounds_preserves_order_and_type() {
        let photos = vec![photo("a.jpg", "front"), photo("b.png", "side"), photo("c.jpg", "back")];
        let processed = remove_backgrounds(&photos);

        assert_eq!(processed.len(), 3);
        assert_eq!(processed[0].url, "a_masked.jpg");
        assert_eq!(processed[1].url, "b_masked.png");
        assert_eq!(processed[2].url, "c_masked.jpg");
        assert_eq!(processed[1].photo_type, "side");
        assert!(processed.iter().all(|p| p.mask_quality == MASK_QUALITY));
    }

    #[test]
    fn test_remove_backgrounds_empty() {
        assert!(remove_backgrounds(&[]).is_empty());
    }
}
