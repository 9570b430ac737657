use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RecapError, Result};

static TIMESTAMP_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

/// Collapse a raw VTT caption track into one continuous line of text.
///
/// Timing cue lines and literal `&nbsp;` escapes are removed; every run of
/// whitespace becomes a single space. Pure function, no I/O.
pub fn clean_subtitles(subtitles: &str) -> Result<String> {
    if subtitles.is_empty() {
        return Err(RecapError::EmptySubtitles);
    }

    let without_timestamps = TIMESTAMP_RANGE.replace_all(subtitles, "");
    let without_nbsp = without_timestamps.replace("&nbsp;", "");

    Ok(without_nbsp.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_VTT: &str = "WEBVTT\nKind: captions\nLanguage: en\n\n\
00:00:00.160 --> 00:00:02.340\nso&nbsp;today we are going to talk\n\n\
00:00:02.340 --> 00:00:05.120\nabout   summarizing\nvideos\n\n\
00:00:05.120 --> 00:00:08.000\nwith a local language model\n";

    #[test]
    fn cleaned_subtitles_are_non_empty() {
        let cleaned = clean_subtitles(SAMPLE_VTT).unwrap();
        assert!(!cleaned.is_empty());
    }

    #[test]
    fn cleaned_subtitles_have_no_timestamps() {
        let cleaned = clean_subtitles(SAMPLE_VTT).unwrap();
        assert!(!cleaned.contains("-->"));
        assert!(!TIMESTAMP_RANGE.is_match(&cleaned));
    }

    #[test]
    fn cleaned_subtitles_have_no_nbsp_escapes() {
        let cleaned = clean_subtitles(SAMPLE_VTT).unwrap();
        assert!(!cleaned.contains("&nbsp;"));
    }

    #[test]
    fn cleaned_subtitles_are_a_single_line() {
        let cleaned = clean_subtitles(SAMPLE_VTT).unwrap();
        assert!(!cleaned.contains('\n'));
        assert!(!cleaned.contains("  "));
    }

    #[test]
    fn cue_text_survives_cleaning() {
        let cleaned = clean_subtitles(SAMPLE_VTT).unwrap();
        assert!(cleaned.contains("sotoday we are going to talk"));
        assert!(cleaned.contains("about summarizing videos"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(clean_subtitles(""), Err(RecapError::EmptySubtitles)));
    }
}
