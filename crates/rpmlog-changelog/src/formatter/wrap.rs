//! Greedy word wrapping

const TAB_SIZE: usize = 8;

/// Wrap `text` at `width` columns.
///
/// Tabs expand to 8-column stops and other whitespace characters become
/// spaces. Runs of spaces between words are kept, except where a line breaks.
/// Continuation lines start with `indent`, which counts toward the width.
/// Hyphenated words may break after a hyphen, and words longer than a line
/// are split to fill the remaining space. Empty input gives no lines.
pub fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut chunks = split_chunks(&expand_whitespace(text));
    chunks.reverse();

    let indent_len = indent.chars().count();
    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        let (prefix, limit) = if lines.is_empty() {
            ("", width.max(1))
        } else {
            if chunks.last().is_some_and(|c| is_space(c)) {
                chunks.pop();
            }
            (indent, width.saturating_sub(indent_len).max(1))
        };

        let mut line: Vec<Vec<char>> = Vec::new();
        let mut line_len = 0usize;
        while let Some(chunk) = chunks.last() {
            if line_len + chunk.len() > limit {
                break;
            }
            line_len += chunk.len();
            line.extend(chunks.pop());
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > limit {
                let room = limit - line_len;
                let end = hyphen_split(chunk, room).unwrap_or(room);
                let tail = chunk.split_off(end);
                line.push(std::mem::replace(chunk, tail));
            }
        }

        if line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }
        if !line.is_empty() {
            let body: String = line.iter().flatten().collect();
            lines.push(format!("{}{}", prefix, body));
        }
    }

    lines
}

fn expand_whitespace(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0usize;

    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// Space runs and word pieces, in order
fn split_chunks(text: &[char]) -> Vec<Vec<char>> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let spaces = text[start] == ' ';
        let len = text[start..]
            .iter()
            .take_while(|&&c| (c == ' ') == spaces)
            .count();
        let run = &text[start..start + len];

        if spaces {
            chunks.push(run.to_vec());
        } else {
            split_word(run, &mut chunks);
        }
        start += len;
    }

    chunks
}

/// Split a word after hyphens joining letters and around `--` dashes
fn split_word(word: &[char], chunks: &mut Vec<Vec<char>>) {
    let mut start = 0;
    let mut i = 0;

    while i < word.len() {
        if word[i] != '-' {
            i += 1;
            continue;
        }

        let dashes = word[i..].iter().take_while(|&&c| c == '-').count();
        let after = i + dashes;

        if dashes >= 2
            && i > 0
            && is_word_punct(word[i - 1])
            && word.get(after).is_some_and(|&c| is_word(c))
        {
            if i > start {
                chunks.push(word[start..i].to_vec());
            }
            chunks.push(word[i..after].to_vec());
            start = after;
        } else if dashes == 1 && i > start && breaks_after_hyphen(word, i) {
            chunks.push(word[start..=i].to_vec());
            start = i + 1;
        }
        i = after;
    }

    if start < word.len() {
        chunks.push(word[start..].to_vec());
    }
}

/// `ab-cd` and `a-b-cd` may break after the hyphen at `i`
fn breaks_after_hyphen(word: &[char], i: usize) -> bool {
    let letter = |j: usize| word.get(j).is_some_and(|&c| is_letter(c));
    let dash = |j: usize| word.get(j) == Some(&'-');

    let before = (i >= 2 && letter(i - 2) && letter(i - 1))
        || (i >= 3 && letter(i - 3) && dash(i - 2) && letter(i - 1));
    let after = letter(i + 1) && (letter(i + 2) || (dash(i + 2) && letter(i + 3)));

    before && after
}

/// End of the head of an over-long chunk: just past the last hyphen that fits
fn hyphen_split(chunk: &[char], room: usize) -> Option<usize> {
    let hyphen = chunk[..room].iter().rposition(|&c| c == '-')?;
    (hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-')).then_some(hyphen + 1)
}

fn is_space(chunk: &[char]) -> bool {
    chunk.iter().all(|c| c.is_whitespace())
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}
