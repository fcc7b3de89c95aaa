//! Kana classification for splitting a raw `readings` field into on-yomi
//! (katakana) and kun-yomi (hiragana) lists.

/// Hiragana block, U+3040..=U+309F.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Katakana block, U+30A0..=U+30FF.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

// Characters that appear inside readings without deciding the script:
// the middle dot marks okurigana boundaries, the prolonged sound mark is
// shared by both scripts, and source data occasionally carries ascii
// punctuation.
fn is_joiner(c: char) -> bool {
    matches!(c, '・' | 'ー' | '.' | ',') || c.is_whitespace()
}

fn is_hiragana_run(c: char) -> bool {
    // 'ー' sits in the katakana block but occurs in hiragana readings too.
    is_hiragana(c) || is_joiner(c)
}

fn is_katakana_run(c: char) -> bool {
    is_katakana(c) || is_joiner(c)
}

/// Split a raw readings field (`"ワン; うで"`) into `(kun, on)` lists:
/// hiragana readings first, katakana readings second.
///
/// Tokens are separated by `;` or `,`. A token wholly in one script is kept
/// as-is; a mixed token is split into its per-script runs.
pub fn split_readings(raw: &str) -> (Vec<String>, Vec<String>) {
    let mut kun = Vec::new();
    let mut on = Vec::new();

    for token in raw.split([';', ',']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token.chars().all(is_hiragana_run) {
            kun.push(token.to_string());
        } else if token.chars().all(is_katakana_run) {
            on.push(token.to_string());
        } else {
            extract_runs(token, |c| is_hiragana(c) || matches!(c, '・' | 'ー' | '.' | ','), &mut kun);
            extract_runs(token, |c| is_katakana(c) || matches!(c, '・' | ','), &mut on);
        }
    }

    (kun, on)
}

fn extract_runs(token: &str, mut pred: impl FnMut(char) -> bool, out: &mut Vec<String>) {
    let mut run = String::new();
    for c in token.chars() {
        if pred(c) {
            run.push(c);
        } else if !run.is_empty() {
            out.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_predicates() {
        assert!(is_hiragana('う'));
        assert!(is_hiragana('ん'));
        assert!(!is_hiragana('ワ'));
        assert!(is_katakana('ワ'));
        assert!(is_katakana('ン'));
        assert!(!is_katakana('で'));
        assert!(!is_hiragana('腕'));
    }

    #[test]
    fn splits_on_and_kun() {
        let (kun, on) = split_readings("ワン; うで");
        assert_eq!(on, vec!["ワン"]);
        assert_eq!(kun, vec!["うで"]);
    }

    #[test]
    fn comma_separated_tokens() {
        let (kun, on) = split_readings("あ.びる, あ.びせる");
        assert_eq!(kun, vec!["あ.びる", "あ.びせる"]);
        assert!(on.is_empty());
    }

    #[test]
    fn prolonged_mark_stays_with_katakana_token() {
        let (kun, on) = split_readings("コーヒー");
        assert!(kun.is_empty());
        assert_eq!(on, vec!["コーヒー"]);
    }

    #[test]
    fn mixed_token_is_split_into_runs() {
        let (kun, on) = split_readings("ワンうで");
        assert_eq!(on, vec!["ワン"]);
        assert_eq!(kun, vec!["うで"]);
    }

    #[test]
    fn empty_and_blank_fields() {
        let (kun, on) = split_readings("");
        assert!(kun.is_empty() && on.is_empty());
        let (kun, on) = split_readings(" ; ");
        assert!(kun.is_empty() && on.is_empty());
    }
}
