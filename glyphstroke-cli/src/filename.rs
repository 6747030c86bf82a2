//! Glyph output filenames.
//!
//! Maps a character to a name that is safe on every filesystem the
//! exported SVGs might land on. The punctuation table is injected as a
//! value so alternative naming schemes can be swapped in.

/// Lookup table for characters that cannot appear in file names.
#[derive(Debug, Clone, Copy)]
pub struct FilenameTable {
    entries: &'static [(char, &'static str)],
}

/// ASCII punctuation names, matching common glyph-name conventions.
const SPECIAL_FILENAMES: &[(char, &str)] = &[
    (' ', "space"),
    ('!', "exclamation_mark"),
    ('"', "quotation_mark"),
    ('#', "hash"),
    ('$', "dollar"),
    ('%', "percent"),
    ('&', "ampersand"),
    ('\'', "apostrophe"),
    ('(', "left_parenthesis"),
    (')', "right_parenthesis"),
    ('*', "asterisk"),
    ('+', "plus"),
    (',', "comma"),
    ('-', "hyphen"),
    ('.', "period"),
    ('/', "slash"),
    (':', "colon"),
    (';', "semicolon"),
    ('<', "less_than"),
    ('=', "equals"),
    ('>', "greater_than"),
    ('?', "question_mark"),
    ('@', "at_sign"),
    ('[', "left_bracket"),
    ('\\', "backslash"),
    (']', "right_bracket"),
    ('^', "caret"),
    ('_', "underscore"),
    ('`', "grave"),
    ('{', "left_brace"),
    ('|', "vertical_bar"),
    ('}', "right_brace"),
    ('~', "tilde"),
];

impl FilenameTable {
    #[must_use]
    pub const fn new(entries: &'static [(char, &'static str)]) -> Self {
        Self { entries }
    }

    fn lookup(&self, ch: char) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, name)| *name)
    }
}

impl Default for FilenameTable {
    fn default() -> Self {
        Self::new(SPECIAL_FILENAMES)
    }
}

/// Filename stem for one character's SVG file.
///
/// Uppercase letters get a `Capital-` prefix so they stay distinct from
/// their lowercase forms on case-insensitive filesystems. Other
/// alphanumerics name themselves; everything else goes through the
/// table, falling back to the `uXXXX` hex form.
#[must_use]
pub fn sanitize(ch: char, table: &FilenameTable) -> String {
    if ch.is_alphabetic() && ch.is_uppercase() {
        return format!("Capital-{ch}");
    }
    if ch.is_alphanumeric() {
        return ch.to_string();
    }
    if let Some(name) = table.lookup(ch) {
        return name.to_owned();
    }
    format!("u{:04x}", u32::from(ch))
}
