//! SubRip (.srt) cue text extraction

/// Extract the spoken text of an SRT file as a single paragraph
///
/// A cue is an all-digit index line followed by a timing line containing
/// `-->`; the non-blank lines after it, up to the next blank line, are its
/// text. Lines of a cue are joined with a space, and so are cues.
pub fn srt_to_text(content: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    let mut cues: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_cue_index(lines[i]) {
            i += 1;
            continue;
        }

        i += 1;
        if i < lines.len() && lines[i].contains("-->") {
            i += 1;
            let mut chunk: Vec<&str> = Vec::new();
            while i < lines.len() && !lines[i].trim().is_empty() {
                chunk.push(lines[i].trim());
                i += 1;
            }
            if !chunk.is_empty() {
                cues.push(chunk.join(" "));
            }
        }
    }

    cues.join(" ")
}

fn is_cue_index(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}
