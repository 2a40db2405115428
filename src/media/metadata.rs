//! Release-filename heuristics.
//!
//! Pulls title, season, episode, and quality out of common release naming
//! conventions. The parser is deterministic and total: any string yields a
//! `FileMetadata`, with `None` for fields the name does not carry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::FileMetadata;

static SEASON_EPISODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[ ._\-\[\(])s(\d{1,2})[ ._\-]?e(\d{1,3})").unwrap()
});

// "1x02" style numbering used by some release groups.
static SEASON_CROSS_EPISODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[ ._\-\[\(])(\d{1,2})x(\d{2,3})").unwrap()
});

static RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(2160p|1080p|720p|576p|480p|4k)\b").unwrap());

static SOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(blu-?ray|b[dr]rip|web-?dl|webrip|hdtv|dvdrip|hdrip|dvd)\b").unwrap()
});

/// Parse one filename into its release metadata.
///
/// Only the final path component is inspected, so a nested archive entry
/// (`subs/Show.S01E02.720p.srt`) parses the same as a flat one. The same
/// episode named on the subtitle side and the media side must come out with
/// identical fields; that is what the match downstream relies on.
pub fn parse(filename: &str) -> FileMetadata {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    let stem = match name.rfind('.') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    };

    let mut season = None;
    let mut episode = None;
    let mut title_end = stem.len();

    if let Some(caps) = SEASON_EPISODE.captures(stem) {
        season = caps.get(1).and_then(|m| m.as_str().parse().ok());
        episode = caps.get(2).and_then(|m| m.as_str().parse().ok());
        if let Some(m) = caps.get(0) {
            title_end = title_end.min(m.start());
        }
    } else if let Some(caps) = SEASON_CROSS_EPISODE.captures(stem) {
        season = caps.get(1).and_then(|m| m.as_str().parse().ok());
        episode = caps.get(2).and_then(|m| m.as_str().parse().ok());
        if let Some(m) = caps.get(0) {
            title_end = title_end.min(m.start());
        }
    }

    let quality = match RESOLUTION.find(stem).or_else(|| SOURCE.find(stem)) {
        Some(m) => {
            title_end = title_end.min(m.start());
            Some(m.as_str().to_lowercase())
        }
        None => None,
    };

    FileMetadata {
        title: clean_title(&stem[..title_end]),
        season,
        episode,
        quality,
    }
}

fn clean_title(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '.' | '_' => ' ',
            c => c,
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| *token != "-")
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_release_name() {
        let meta = parse("Show.S01E02.720p.mkv");
        assert_eq!(meta.title, "Show");
        assert_eq!(meta.season, Some(1));
        assert_eq!(meta.episode, Some(2));
        assert_eq!(meta.quality, Some("720p".to_string()));
    }

    #[test]
    fn test_parse_is_suffix_agnostic() {
        // The subtitle and the media file of one episode must parse alike.
        assert_eq!(parse("Show.S01E02.720p.srt"), parse("Show.S01E02.720p.mkv"));
    }

    #[test]
    fn test_parse_multi_word_title() {
        let meta = parse("The.Office.S02E11.1080p.WEB-DL.mkv");
        assert_eq!(meta.title, "The Office");
        assert_eq!(meta.season, Some(2));
        assert_eq!(meta.episode, Some(11));
        assert_eq!(meta.quality, Some("1080p".to_string()));
    }

    #[test]
    fn test_parse_space_and_dash_separators() {
        let meta = parse("Some Show - S03E07 - 480p.avi");
        assert_eq!(meta.title, "Some Show");
        assert_eq!(meta.season, Some(3));
        assert_eq!(meta.episode, Some(7));
        assert_eq!(meta.quality, Some("480p".to_string()));
    }

    #[test]
    fn test_parse_cross_notation() {
        let meta = parse("Show.2x05.HDTV.mkv");
        assert_eq!(meta.title, "Show");
        assert_eq!(meta.season, Some(2));
        assert_eq!(meta.episode, Some(5));
        assert_eq!(meta.quality, Some("hdtv".to_string()));
    }

    #[test]
    fn test_parse_lowercase_marker() {
        let meta = parse("show.s01e02.720p.srt");
        assert_eq!(meta.title, "show");
        assert_eq!(meta.season, Some(1));
        assert_eq!(meta.episode, Some(2));
    }

    #[test]
    fn test_parse_source_quality_fallback() {
        let meta = parse("Show.S01E02.BluRay.mkv");
        assert_eq!(meta.quality, Some("bluray".to_string()));
    }

    #[test]
    fn test_parse_resolution_wins_over_source() {
        let meta = parse("Show.S01E02.BluRay.720p.mkv");
        assert_eq!(meta.quality, Some("720p".to_string()));
    }

    #[test]
    fn test_parse_bare_name_yields_no_fields() {
        let meta = parse("sub.srt");
        assert_eq!(meta.title, "sub");
        assert_eq!(meta.season, None);
        assert_eq!(meta.episode, None);
        assert_eq!(meta.quality, None);
    }

    #[test]
    fn test_parse_nested_entry_uses_final_component() {
        let nested = parse("subs/Show.S01E02.720p.srt");
        let flat = parse("Show.S01E02.720p.srt");
        assert_eq!(nested, flat);
    }

    #[test]
    fn test_parse_never_panics_on_odd_input() {
        for name in ["", ".", "..", "...", "S01E02", "720p", "a/b/c", "-"] {
            let _ = parse(name);
        }
    }

    #[test]
    fn test_parse_three_digit_episode() {
        let meta = parse("Longrunner.S05E104.720p.mkv");
        assert_eq!(meta.season, Some(5));
        assert_eq!(meta.episode, Some(104));
    }
}
