//! Censoring of chirp bodies.

use itertools::Itertools;

/// Words that never make it into a stored chirp.
const DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const CENSOR: &str = "****";

/// Replaces every denylisted word in `text` with `****`.
///
/// Words are delimited by single spaces only, so runs of spaces and punctuation attached to
/// a word are preserved as-is: `"fornax!"` is not a match. Matching ignores ASCII case.
pub fn moderate(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if is_denied(word) {
                CENSOR
            } else {
                word
            }
        })
        .join(" ")
}

fn is_denied(word: &str) -> bool {
    DENYLIST
        .iter()
        .any(|denied| denied.eq_ignore_ascii_case(word))
}
