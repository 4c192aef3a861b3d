// Emotion detection using fuzzy matching against a lexicon.
// Each token of the input is scanned against the lexicon in stored order;
// the first term scoring above the threshold claims the token for its
// emotion. Single pass, no state beyond the per-call tally.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;

/// Minimum similarity (exclusive) for a token to count as a match.
pub const MATCH_THRESHOLD: u32 = 85;

// Tokens are maximal runs of anything that is not whitespace or , . ! ?
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s,.!?]+").unwrap());

/// One qualifying fuzzy hit. Returned so the caller decides whether to log
/// it; the classifier itself does no I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMatch {
    pub token: String,
    pub term: String,
    pub emotion: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: String,
    pub count: usize,
}

/// Result of one classification call. `dominant: None` means no emotion
/// was detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub matches: Vec<TokenMatch>,
    pub dominant: Option<EmotionScore>,
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Similarity in [0, 100] from letter-level normalized Levenshtein distance.
/// Close to, but not bit-for-bit identical with, the classic fuzzy ratio;
/// the 85 threshold works the same in practice.
pub fn fuzzy_ratio(a: &str, b: &str) -> u32 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}

pub fn detect_emotion(text: &str, lexicon: &Lexicon) -> Detection {
    let mut matches: Vec<TokenMatch> = Vec::new();
    // Tally in first-seen order. Small lexicons make the linear scans cheap.
    let mut tally: Vec<(String, usize)> = Vec::new();
    // (tally index, count) of the current leader. Only a strictly greater
    // count replaces it, so the first emotion to reach the shared maximum
    // wins ties deterministically.
    let mut best: Option<(usize, usize)> = None;

    for token in tokenize(text) {
        for entry in lexicon.entries() {
            let score = fuzzy_ratio(&token, &entry.term.to_lowercase());
            if score > MATCH_THRESHOLD {
                let idx = match tally.iter().position(|(e, _)| e == &entry.emotion) {
                    Some(i) => {
                        tally[i].1 += 1;
                        i
                    }
                    None => {
                        tally.push((entry.emotion.clone(), 1));
                        tally.len() - 1
                    }
                };
                let count = tally[idx].1;
                if best.map_or(true, |(_, c)| count > c) {
                    best = Some((idx, count));
                }
                matches.push(TokenMatch {
                    token: token.clone(),
                    term: entry.term.clone(),
                    emotion: entry.emotion.clone(),
                    score,
                });
                // Token is claimed; don't count it twice.
                break;
            }
        }
    }

    let dominant = best.map(|(idx, count)| EmotionScore {
        emotion: tally[idx].0.clone(),
        count,
    });

    Detection { matches, dominant }
}
