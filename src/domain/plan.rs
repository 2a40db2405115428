use crate::domain::index::MediaIndex;
use crate::domain::models::SUBTITLE_EXT;

/// One planned step of a linking run. `source` and `dest` are relative to
/// the staging directory and the target directory respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Move {
        summary: String,
        source: String,
        dest: String,
    },
    Miss {
        summary: String,
    },
}

/// Join the target index against the subtitle index.
///
/// Pure: touches no filesystem, so the matching logic is testable on its
/// own. A key missing on the subtitle side is an ordinary `Miss`, never an
/// error. One action per target key, in target insertion order.
pub fn plan_links(targets: &MediaIndex, subtitles: &MediaIndex) -> Vec<LinkAction> {
    targets
        .iter()
        .map(|(summary, target)| match subtitles.get(summary) {
            Some(subtitle) => LinkAction::Move {
                summary: summary.to_string(),
                source: format!("{}.{}", subtitle.base_name, SUBTITLE_EXT),
                dest: format!("{}.{}", target.base_name, SUBTITLE_EXT),
            },
            None => LinkAction::Miss {
                summary: summary.to_string(),
            },
        })
        .collect()
}
