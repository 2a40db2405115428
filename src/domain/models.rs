/// Suffix of the subtitle files pulled out of archives and placed next to
/// their media files.
pub const SUBTITLE_EXT: &str = "srt";

/// Fallback season/episode number when the filename carries none.
const UNKNOWN_PART: u32 = 0;
/// Fallback quality token when the filename carries none.
const UNKNOWN_QUALITY: &str = "unknown";

/// Raw fields pulled out of a release filename. Anything the heuristic
/// cannot find is `None`; callers decide what to substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub title: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub quality: Option<String>,
}

/// One media or subtitle file, resolved for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    pub quality: String,
    /// Original filename without its final format suffix. A nested archive
    /// entry keeps its directory prefix so the staged path can be rebuilt.
    pub base_name: String,
}

impl MediaRecord {
    pub fn new(filename: &str, metadata: FileMetadata) -> Self {
        MediaRecord {
            title: metadata.title,
            season: metadata.season.unwrap_or(UNKNOWN_PART),
            episode: metadata.episode.unwrap_or(UNKNOWN_PART),
            quality: metadata
                .quality
                .unwrap_or_else(|| UNKNOWN_QUALITY.to_string()),
            base_name: strip_format_suffix(filename),
        }
    }

    /// Join key associating a subtitle with its media file:
    /// `{title}.S{season:02}E{episode:02}.{quality}`.
    ///
    /// Both sides of the match derive this from parsed fields alone, so the
    /// derivation must stay byte-identical for subtitle and media names of
    /// the same episode.
    pub fn summary_key(&self) -> String {
        format!(
            "{}.S{:02}E{:02}.{}",
            self.title, self.season, self.episode, self.quality
        )
    }
}

/// Drop the final format suffix (`.mkv`, `.srt`, ...) from a filename,
/// leaving any directory prefix of a nested archive entry intact.
pub fn strip_format_suffix(filename: &str) -> String {
    let file_start = filename.rfind('/').map(|i| i + 1).unwrap_or(0);
    match filename[file_start..].rfind('.') {
        Some(i) if i > 0 => filename[..file_start + i].to_string(),
        _ => filename.to_string(),
    }
}
