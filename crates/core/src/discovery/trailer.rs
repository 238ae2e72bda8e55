//! Trailer selection from a catalog video list.

use serde::{Deserialize, Serialize};

/// A video attached to a movie or series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRecord {
    /// Hosting platform ("YouTube", "Vimeo", ...).
    pub site: String,
    /// Video category as reported upstream.
    #[serde(rename = "type")]
    pub kind: VideoKind,
    /// Video title.
    pub name: String,
    /// Platform-specific video ID.
    pub key: String,
}

impl VideoRecord {
    fn on_youtube(&self) -> bool {
        self.site == "YouTube"
    }
}

/// Upstream video categories the selector distinguishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoKind {
    Trailer,
    Teaser,
    #[serde(other)]
    Other,
}

/// Pick the best available trailer.
///
/// Three tiers, strictly in order: an official YouTube trailer ("official"
/// anywhere in the name, case-insensitive), then any YouTube trailer, then
/// any YouTube teaser. Within a tier the first record in upstream order
/// wins; upstream puts the most relevant video first, so no secondary
/// ranking is applied. Returns `None` when nothing qualifies, which callers
/// treat as "no trailer available" rather than a fault.
pub fn select_trailer(videos: &[VideoRecord]) -> Option<&VideoRecord> {
    videos
        .iter()
        .find(|v| {
            v.on_youtube()
                && v.kind == VideoKind::Trailer
                && v.name.to_lowercase().contains("official")
        })
        .or_else(|| {
            videos
                .iter()
                .find(|v| v.on_youtube() && v.kind == VideoKind::Trailer)
        })
        .or_else(|| {
            videos
                .iter()
                .find(|v| v.on_youtube() && v.kind == VideoKind::Teaser)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str, kind: VideoKind, name: &str) -> VideoRecord {
        VideoRecord {
            site: site.to_string(),
            kind,
            name: name.to_string(),
            key: format!("key-{}", name.len()),
        }
    }

    #[test]
    fn test_official_trailer_beats_earlier_teaser() {
        let videos = vec![
            video("YouTube", VideoKind::Teaser, "First Look"),
            video("YouTube", VideoKind::Trailer, "Official Trailer"),
        ];
        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.name, "Official Trailer");
    }

    #[test]
    fn test_official_match_is_case_insensitive() {
        let videos = vec![
            video("YouTube", VideoKind::Trailer, "Final Trailer"),
            video("YouTube", VideoKind::Trailer, "OFFICIAL Teaser Trailer"),
        ];
        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.name, "OFFICIAL Teaser Trailer");
    }

    #[test]
    fn test_any_trailer_when_no_official() {
        let videos = vec![
            video("YouTube", VideoKind::Trailer, "Teaser #1"),
            video("YouTube", VideoKind::Trailer, "Teaser #2"),
        ];
        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.name, "Teaser #1");
    }

    #[test]
    fn test_teaser_as_last_resort() {
        let videos = vec![
            video("YouTube", VideoKind::Other, "Behind the Scenes"),
            video("YouTube", VideoKind::Teaser, "Teaser"),
        ];
        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.kind, VideoKind::Teaser);
    }

    #[test]
    fn test_non_youtube_never_selected() {
        let videos = vec![video("Vimeo", VideoKind::Trailer, "Official Trailer")];
        assert!(select_trailer(&videos).is_none());
    }

    #[test]
    fn test_empty_list() {
        assert!(select_trailer(&[]).is_none());
    }

    #[test]
    fn test_first_match_wins_within_tier() {
        let videos = vec![
            video("YouTube", VideoKind::Teaser, "Teaser A"),
            video("YouTube", VideoKind::Teaser, "Teaser B"),
        ];
        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.name, "Teaser A");
    }

    #[test]
    fn test_unknown_video_kind_deserializes_as_other() {
        let json = r#"{"site": "YouTube", "type": "Featurette", "name": "Making Of", "key": "abc"}"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, VideoKind::Other);
        assert!(select_trailer(std::slice::from_ref(&record)).is_none());
    }
}
