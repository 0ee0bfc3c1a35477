use crate::error::TokenizeResult;

use super::{Token, Tokenizer, UNKNOWN_FIELD};

/// Offset between a hiragana code point and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Writing-system class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Symbol,
    Space,
}

impl Script {
    fn of(ch: char) -> Self {
        match ch {
            'ぁ'..='ゖ' | 'ゝ' | 'ゞ' => Self::Hiragana,
            'ァ'..='ヺ' | 'ー' | 'ヽ' | 'ヾ' | 'ｦ'..='ﾟ' => Self::Katakana,
            '一'..='鿿' | '㐀'..='䶿' | '豈'..='﫿' | '々' | '〆' => Self::Kanji,
            c if c.is_whitespace() => Self::Space,
            c if c.is_numeric() => Self::Digit,
            c if c.is_alphabetic() => Self::Latin,
            _ => Self::Symbol,
        }
    }

    /// Coarse part of speech: content runs count as nouns, hiragana is left
    /// unknown since it is usually inflection or particles.
    const fn pos(self) -> &'static str {
        match self {
            Self::Kanji | Self::Katakana | Self::Latin | Self::Digit => "名詞",
            Self::Symbol => "記号",
            Self::Hiragana | Self::Space => UNKNOWN_FIELD,
        }
    }
}

/// Dictionary-free tokenizer that splits at script transitions.
///
/// `"逃げるは恥"` becomes `["逃", "げるは", "恥"]`. Whitespace separates tokens
/// and is dropped. Only kana runs have readings (hiragana is converted to
/// katakana); kanji and latin runs read as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTokenizer;

impl ScriptTokenizer {
    /// Create a script tokenizer.
    pub const fn new() -> Self {
        Self
    }
}

fn reading(run: &str, script: Script) -> String {
    match script {
        Script::Hiragana => run
            .chars()
            .map(|ch| match ch {
                'ぁ'..='ゖ' | 'ゝ' | 'ゞ' => {
                    char::from_u32(ch as u32 + KANA_OFFSET).unwrap_or(ch)
                }
                _ => ch,
            })
            .collect(),
        Script::Katakana => run.to_string(),
        _ => String::new(),
    }
}

impl Tokenizer for ScriptTokenizer {
    fn name(&self) -> &'static str {
        "script"
    }

    fn tokenize(&self, phrase: &str) -> TokenizeResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut current: Option<Script> = None;

        let mut flush = |run: &mut String, script: Option<Script>| {
            if let Some(script) = script
                && script != Script::Space
                && !run.is_empty()
            {
                tokens.push(Token::new(run.as_str(), script.pos(), reading(run, script)));
            }
            run.clear();
        };

        for ch in phrase.chars() {
            let script = Script::of(ch);
            if current != Some(script) {
                flush(&mut run, current);
                current = Some(script);
            }
            run.push(ch);
        }
        flush(&mut run, current);

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_script_change() {
        let words = ScriptTokenizer.separate_words("逃げるは恥だが役に立つ").unwrap();
        assert_eq!(
            words,
            vec!["逃", "げるは", "恥", "だが", "役", "に", "立", "つ"]
        );
    }

    #[test]
    fn single_script_phrase_is_one_word() {
        assert_eq!(
            ScriptTokenizer.separate_words("短期大学").unwrap(),
            vec!["短期大学"]
        );
    }

    #[test]
    fn whitespace_is_dropped() {
        assert_eq!(
            ScriptTokenizer.separate_words("東京 大阪").unwrap(),
            vec!["東京", "大阪"]
        );
    }

    #[test]
    fn hiragana_reads_as_katakana() {
        assert_eq!(ScriptTokenizer.yomi("すまほ").unwrap(), "スマホ");
        assert_eq!(ScriptTokenizer.yomi("スマホ").unwrap(), "スマホ");
    }

    #[test]
    fn kanji_has_no_reading() {
        assert_eq!(ScriptTokenizer.yomi("大学").unwrap(), "");
    }

    #[test]
    fn long_vowel_mark_stays_in_katakana_run() {
        assert_eq!(
            ScriptTokenizer.separate_words("コーヒー牛乳").unwrap(),
            vec!["コーヒー", "牛乳"]
        );
    }

    #[test]
    fn empty_phrase_has_no_tokens() {
        assert!(ScriptTokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn symbols_are_tagged() {
        let tokens = ScriptTokenizer.tokenize("東京!").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].pos, "記号");
    }

    #[test]
    fn nouns_are_filtered_by_pos() {
        let nouns = ScriptTokenizer.filter_by_pos("逃げるは恥", "名詞").unwrap();
        let surfaces: Vec<&str> = nouns.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["逃", "恥"]);

        let katakana = ScriptTokenizer.filter_by_pos("コーヒーを", "名詞").unwrap();
        assert_eq!(katakana.len(), 1);
        assert_eq!(katakana[0].surface, "コーヒー");
    }

    #[test]
    fn hiragana_pos_is_unknown() {
        let tokens = ScriptTokenizer.tokenize("すまほ").unwrap();
        assert_eq!(tokens[0].pos, UNKNOWN_FIELD);
    }
}
