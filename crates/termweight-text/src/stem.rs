//! Porter stemming.
//!
//! Each step looks for the first suffix in its table that the word ends with and
//! rewrites it when the remaining stem satisfies the step's condition. A matching
//! suffix ends the step even when its condition fails.
//!
//! The default [`PorterMode::Nltk`] adds the departures from the 1980 paper that
//! the NLTK stemmer makes: a table of irregular forms, gentler `ies` and `y`
//! handling, and a few extra step 2 rules. [`PorterMode::Original`] keeps the
//! paper's behaviour.

/// Step 2 rewrites from the paper, applied when the stem has measure > 0.
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

/// Step 2 rewrites in NLTK mode. `bli` replaces `abli`; `logi` is handled separately.
const NLTK_STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
    ("lessli", "less"),
];

/// Step 3 rewrites, applied when the stem has measure > 0.
const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 deletions, applied when the stem has measure > 1.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Words with a fixed stem in NLTK mode.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Which flavour of the Porter algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PorterMode {
    /// The NLTK variant, matching `nltk.stem.PorterStemmer()`.
    #[default]
    Nltk,
    /// The algorithm as published in 1980.
    Original,
}

/// Porter stemmer for lowercase English words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer {
    /// Algorithm variant.
    mode: PorterMode,
}

impl PorterStemmer {
    /// Creates a stemmer in NLTK mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stemmer running the given variant.
    pub fn with_mode(mode: PorterMode) -> Self {
        Self { mode }
    }

    /// The variant this stemmer runs.
    pub fn mode(&self) -> PorterMode {
        self.mode
    }

    /// Reduces a word to its stem. Words of two characters or fewer are returned as is.
    pub fn stem(&self, word: &str) -> String {
        let nltk = self.mode == PorterMode::Nltk;
        if nltk
            && let Some(&(_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word)
        {
            return stem.to_string();
        }

        let mut w: Vec<char> = word.chars().collect();
        if w.len() <= 2 {
            return word.to_string();
        }

        step1a(&mut w, nltk);
        step1b(&mut w, nltk);
        step1c(&mut w, nltk);
        step2(&mut w, nltk);
        step3(&mut w);
        step4(&mut w);
        step5a(&mut w, nltk);
        step5b(&mut w);

        w.into_iter().collect()
    }

    /// Stems every token, keeping order and length.
    pub fn stem_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t)).collect()
    }
}

/// Consonant flags for the first `len` characters.
///
/// `y` is a consonant at the start of a word or after a vowel.
fn consonants(w: &[char], len: usize) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::with_capacity(len);
    for (i, &c) in w[..len].iter().enumerate() {
        let consonant = match c {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !flags[i - 1],
            _ => true,
        };
        flags.push(consonant);
    }
    flags
}

/// Number of vowel-consonant sequences in the first `len` characters.
fn measure(w: &[char], len: usize) -> usize {
    consonants(w, len)
        .windows(2)
        .filter(|pair| !pair[0] && pair[1])
        .count()
}

/// True if the first `len` characters contain a vowel.
fn has_vowel(w: &[char], len: usize) -> bool {
    consonants(w, len).contains(&false)
}

/// True if the first `len` characters end in a doubled consonant.
fn ends_double_consonant(w: &[char], len: usize) -> bool {
    len >= 2 && w[len - 1] == w[len - 2] && consonants(w, len)[len - 1]
}

/// True if the first `len` characters end consonant-vowel-consonant, the last not `w`, `x` or `y`.
///
/// NLTK mode also accepts a two-letter vowel-consonant stem.
fn ends_cvc(w: &[char], len: usize, nltk: bool) -> bool {
    let c = consonants(w, len);
    if len >= 3 {
        c[len - 3] && !c[len - 2] && c[len - 1] && !matches!(w[len - 1], 'w' | 'x' | 'y')
    } else {
        nltk && len == 2 && !c[0] && c[1]
    }
}

/// Length of the stem left after removing `suffix`, if the word ends with it.
fn stem_len(w: &[char], suffix: &str) -> Option<usize> {
    let suffix: Vec<char> = suffix.chars().collect();
    w.ends_with(&suffix).then(|| w.len() - suffix.len())
}

/// Truncates the word to `len` and appends `replacement`.
fn replace(w: &mut Vec<char>, len: usize, replacement: &str) {
    w.truncate(len);
    w.extend(replacement.chars());
}

/// Plurals: `sses`, `ies`, `ss`, `s`.
fn step1a(w: &mut Vec<char>, nltk: bool) {
    if nltk
        && w.len() == 4
        && let Some(len) = stem_len(w, "ies")
    {
        replace(w, len, "ie");
        return;
    }
    for (suffix, replacement) in [("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")] {
        if let Some(len) = stem_len(w, suffix) {
            replace(w, len, replacement);
            return;
        }
    }
}

/// Past tense and progressive: `eed`, `ed`, `ing`.
fn step1b(w: &mut Vec<char>, nltk: bool) {
    if nltk && let Some(len) = stem_len(w, "ied") {
        let replacement = if w.len() == 4 { "ie" } else { "i" };
        replace(w, len, replacement);
        return;
    }

    if let Some(len) = stem_len(w, "eed") {
        if measure(w, len) > 0 {
            replace(w, len, "ee");
        }
        return;
    }

    let stripped = ["ed", "ing"]
        .into_iter()
        .find_map(|suffix| stem_len(w, suffix))
        .filter(|&len| has_vowel(w, len));
    let Some(len) = stripped else {
        return;
    };
    w.truncate(len);

    for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
        if let Some(len) = stem_len(w, suffix) {
            replace(w, len, replacement);
            return;
        }
    }

    let len = w.len();
    if ends_double_consonant(w, len) {
        if !matches!(w[len - 1], 'l' | 's' | 'z') {
            w.pop();
        }
    } else if measure(w, len) == 1 && ends_cvc(w, len, nltk) {
        w.push('e');
    }
}

/// Terminal `y` becomes `i`.
///
/// The paper requires a vowel in the stem; NLTK mode requires a consonant right
/// before the `y` and more than one letter before it.
fn step1c(w: &mut [char], nltk: bool) {
    let len = w.len();
    if w[len - 1] != 'y' {
        return;
    }
    let stem = len - 1;
    let condition = if nltk {
        stem > 1 && consonants(w, stem)[stem - 1]
    } else {
        has_vowel(w, stem)
    };
    if condition {
        w[stem] = 'i';
    }
}

/// Applies the first matching rule of a table when the stem measure exceeds `min`.
///
/// Returns false when no suffix in the table matched.
fn apply_rules(w: &mut Vec<char>, rules: &[(&str, &str)], min: usize) -> bool {
    for &(suffix, replacement) in rules {
        if let Some(len) = stem_len(w, suffix) {
            if measure(w, len) > min {
                replace(w, len, replacement);
            }
            return true;
        }
    }
    false
}

/// Double suffixes to single ones.
fn step2(w: &mut Vec<char>, nltk: bool) {
    if !nltk {
        apply_rules(w, STEP2_RULES, 0);
        return;
    }

    // `alli` is rewritten ahead of the table and the step runs again on the result.
    if let Some(len) = stem_len(w, "alli")
        && measure(w, len) > 0
    {
        replace(w, len, "al");
        step2(w, nltk);
        return;
    }

    if apply_rules(w, NLTK_STEP2_RULES, 0) {
        return;
    }
    // The `l` of `logi` counts toward the measure.
    if let Some(len) = stem_len(w, "logi")
        && measure(w, len + 1) > 0
    {
        replace(w, len, "log");
    }
}

/// `-ic-`, `-full`, `-ness` and friends.
fn step3(w: &mut Vec<char>) {
    apply_rules(w, STEP3_RULES, 0);
}

/// Removes a final suffix from stems with measure > 1.
fn step4(w: &mut Vec<char>) {
    for &suffix in STEP4_SUFFIXES {
        if let Some(len) = stem_len(w, suffix) {
            let condition = measure(w, len) > 1
                && (suffix != "ion" || (len > 0 && matches!(w[len - 1], 's' | 't')));
            if condition {
                w.truncate(len);
            }
            return;
        }
    }
}

/// Removes a final `e`.
fn step5a(w: &mut Vec<char>, nltk: bool) {
    let Some(len) = stem_len(w, "e") else {
        return;
    };
    let m = measure(w, len);
    if m > 1 || (m == 1 && !ends_cvc(w, len, nltk)) {
        w.truncate(len);
    }
}

/// `ll` becomes `l` on long stems.
fn step5b(w: &mut Vec<char>) {
    let len = w.len();
    if measure(w, len) > 1 && ends_double_consonant(w, len) && w[len - 1] == 'l' {
        w.pop();
    }
}
