//! WebVTT (.vtt) cue text extraction

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // WebVTT cue span tags (b, c, i, u, v, lang, ruby, rt, with classes and
    // annotation) and inline timestamps; any other `<...>` is cue text
    static ref CUE_TAG: Regex = Regex::new(
        r"</?(?:[bciuv]|lang|ruby|rt)(?:\.[\w-]+)*(?:\s[^>]*)?>|<\d{2,}:\d{2}(?::\d{2})?\.\d{3}>"
    ).expect("cue tag pattern is valid");
}

/// Index of the first line after the WEBVTT header block
fn body_start(lines: &[&str]) -> usize {
    for (i, line) in lines.iter().enumerate() {
        if line.trim() == "WEBVTT" || line.starts_with("WEBVTT ") || line.starts_with("WEBVTT\t") {
            let mut start = i + 1;
            while start < lines.len() {
                let next = lines[start];
                let is_header = next.trim().is_empty() || next.contains(':');
                if !is_header || next.contains("-->") {
                    break;
                }
                start += 1;
            }
            return start;
        }
    }
    0
}

/// Extract the spoken text of a WebVTT file as a single paragraph
///
/// Each timing line (`-->`) opens a cue; the non-blank lines after it, up
/// to a blank line or the next timing line, are its text. Cue identifiers,
/// NOTE, STYLE and REGION blocks carry no timing line and are dropped.
pub fn vtt_to_text(content: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    let mut cues: Vec<String> = Vec::new();
    let mut i = body_start(&lines);

    while i < lines.len() {
        if !lines[i].contains("-->") {
            i += 1;
            continue;
        }

        i += 1;
        let mut chunk: Vec<String> = Vec::new();
        while i < lines.len() && !lines[i].trim().is_empty() && !lines[i].contains("-->") {
            let text = CUE_TAG.replace_all(lines[i].trim(), "");
            let text = text.trim();
            if !text.is_empty() {
                chunk.push(text.to_string());
            }
            i += 1;
        }
        if !chunk.is_empty() {
            cues.push(chunk.join(" "));
        }
    }

    cues.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cues() {
        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:03.000\nHello there,\nwelcome back.\n\n00:00:03.500 --> 00:00:05.000\nToday we talk about Rust.\n";
        assert_eq!(vtt_to_text(content), "Hello there, welcome back. Today we talk about Rust.");
    }

    #[test]
    fn test_header_metadata_and_identifiers() {
        let content = "WEBVTT - lecture 1\nKind: captions\nLanguage: en\n\nintro\n00:00:01.000 --> 00:00:02.000 align:start\nFirst line\n\n2\n00:00:02.000 --> 00:00:04.000\nSecond line\n";
        assert_eq!(vtt_to_text(content), "First line Second line");
    }

    #[test]
    fn test_first_cue_directly_after_header_is_kept() {
        let content = "WEBVTT\n00:00:01.000 --> 00:00:02.000\nRight away\n";
        assert_eq!(vtt_to_text(content), "Right away");
    }

    #[test]
    fn test_note_blocks_and_tags_are_dropped() {
        let content = "WEBVTT\n\nNOTE this is a comment\nspanning lines\n\n00:00:01.000 --> 00:00:02.000\n<v Roger>Hi <c.loud>there</c><00:00:01.500> friend\n";
        assert_eq!(vtt_to_text(content), "Hi there friend");
    }

    #[test]
    fn test_angle_brackets_in_text_are_kept() {
        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nif a < b and c > d then swap\n";
        assert_eq!(vtt_to_text(content), "if a < b and c > d then swap");

        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n<i>x</i> <= 3 <lang en-GB>colour</lang> <ruby>漢<rt>kan</rt></ruby>\n";
        assert_eq!(vtt_to_text(content), "x <= 3 colour 漢kan");
    }

    #[test]
    fn test_back_to_back_timings() {
        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\none\n00:00:02.000 --> 00:00:03.000\ntwo\n";
        assert_eq!(vtt_to_text(content), "one two");
    }

    #[test]
    fn test_missing_header() {
        let content = "00:00:01.000 --> 00:00:02.000\nno header\n";
        assert_eq!(vtt_to_text(content), "no header");
    }
}
