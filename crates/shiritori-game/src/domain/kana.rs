//! Kana normalization: katakana folding and effective word endings.

/// The long-vowel mark (U+30FC). It sits in the katakana block but is also
/// written inside hiragana words, and is never shifted by [`to_hiragana`].
pub const LONG_VOWEL_MARK: char = 'ー';

/// The syllable that ends the game when a word finishes on it.
pub const SYLLABIC_N: char = 'ん';

/// Distance between a katakana letter and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Syllables whose vowel-equivalent is the syllable itself.
const PLAIN_SYLLABLES: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほ\
まみむめもやゆよらりるれろわゐゑをがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽ";

/// Returns `true` for katakana letters that have a hiragana counterpart
/// (ァ U+30A1 through ヶ U+30F6).
fn is_convertible_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Convert katakana letters to hiragana. Everything else, including the
/// long-vowel mark, passes through unchanged.
pub fn to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_convertible_katakana(c) {
                char::from_u32(u32::from(c) - KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Fold a small glide (ゃ ゅ ょ) to its full-size form.
fn fold_small_glide(c: char) -> Option<char> {
    match c {
        'ゃ' => Some('や'),
        'ゅ' => Some('ゆ'),
        'ょ' => Some('よ'),
        _ => None,
    }
}

/// The sound a long-vowel mark repeats after `c`, if `c` is a syllable the
/// mark can follow.
fn vowel_equivalent(c: char) -> Option<char> {
    match c {
        'ぁ' => Some('あ'),
        'ぃ' => Some('い'),
        'ぅ' => Some('う'),
        'ぇ' => Some('え'),
        'ぉ' => Some('お'),
        _ => fold_small_glide(c).or_else(|| PLAIN_SYLLABLES.contains(c).then_some(c)),
    }
}

/// Resolve the sound a hiragana word effectively ends on.
///
/// - A trailing small glide is folded: `きしゃ` becomes `きしや`.
/// - A trailing long-vowel mark takes the value of the syllable before it:
///   `こーひー` becomes `こーひひ`. When the preceding character has no
///   vowel value (or there is none), the mark is dropped: `ぱんー` becomes
///   `ぱん`.
/// - Any other word is returned unchanged.
pub fn effective_ending(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let Some(&last) = chars.last() else {
        return String::new();
    };

    if let Some(folded) = fold_small_glide(last) {
        chars.pop();
        chars.push(folded);
    } else if last == LONG_VOWEL_MARK {
        chars.pop();
        if let Some(vowel) = chars.last().copied().and_then(vowel_equivalent) {
            chars.push(vowel);
        }
    }

    chars.into_iter().collect()
}

/// First character of a word, if any.
pub fn first_char(word: &str) -> Option<char> {
    word.chars().next()
}

/// Last character of a word, if any.
pub fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}
