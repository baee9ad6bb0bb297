//! Conversion from numbered pinyin like `hao3` to tone-marked pinyin like `hǎo`.
//! Anything that is not a numbered syllable passes through unchanged.

fn tone_marks(vowel: char) -> Option<[char; 5]> {
    let marks = match vowel {
        'a' => ['ā', 'á', 'ǎ', 'à', 'a'],
        'e' => ['ē', 'é', 'ě', 'è', 'e'],
        'i' => ['ī', 'í', 'ǐ', 'ì', 'i'],
        'o' => ['ō', 'ó', 'ǒ', 'ò', 'o'],
        'u' => ['ū', 'ú', 'ǔ', 'ù', 'u'],
        'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü'],
        _ => return None,
    };
    Some(marks)
}

/// Splits `hao3` into `("hao", 3)`, resolving the `u:` and `v` spellings of `ü`.
fn split_tone(syllable: &str) -> Option<(String, u32)> {
    let mut chars = syllable.chars();
    let tone = chars
        .next_back()?
        .to_digit(10)
        .filter(|tone| (1..=5).contains(tone))?;
    let letters = chars.as_str();
    if letters.is_empty()
        || !letters
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, 'ü' | 'Ü' | ':'))
    {
        return None;
    }
    let base = letters.to_lowercase().replace("u:", "ü").replace('v', "ü");
    Some((base, tone))
}

/// Index of the vowel that carries the tone mark.
fn marked_vowel(base: &[char]) -> Option<usize> {
    let first = |target: char| base.iter().position(|c| *c == target);
    first('a')
        .or_else(|| first('e'))
        .or_else(|| base.windows(2).position(|pair| pair == ['o', 'u']))
        .or_else(|| base.iter().rposition(|c| tone_marks(*c).is_some()))
}

/// Converts a single numbered syllable, `lv4` -> `lǜ`.
pub fn syllable_to_marked(syllable: &str) -> String {
    let Some((base, tone)) = split_tone(syllable) else {
        return syllable.to_string();
    };
    if tone == 5 {
        return base;
    }

    let mut chars = base.chars().collect::<Vec<_>>();
    let Some(idx) = marked_vowel(&chars) else {
        return base;
    };
    if let Some(marks) = tone_marks(chars[idx]) {
        chars[idx] = marks[tone as usize - 1];
    }
    chars.into_iter().collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '\''
}

/// Converts every syllable in `pinyin`, keeping whitespace, hyphens and apostrophes as they are.
/// `ni3-hao3` -> `nǐ-hǎo`
pub fn pinyin_to_marked(pinyin: &str) -> String {
    let pinyin = pinyin.trim();
    let mut marked = String::with_capacity(pinyin.len() + 8);
    let mut syllable_start = 0;
    for (idx, c) in pinyin.char_indices() {
        if is_separator(c) {
            marked.push_str(&syllable_to_marked(&pinyin[syllable_start..idx]));
            marked.push(c);
            syllable_start = idx + c.len_utf8();
        }
    }
    marked.push_str(&syllable_to_marked(&pinyin[syllable_start..]));
    marked
}
