//! Character sanitization
//!
//! The PDF writer uses the standard Helvetica faces with WinAnsi encoding,
//! which covers printable ASCII and Latin-1 only. Every string passes
//! through [`sanitize`] before layout; typographic punctuation is rewritten
//! to plain equivalents and anything still outside Latin-1 becomes `?`.
//!
//! `sanitize(sanitize(s)) == sanitize(s)` for every input: no replacement
//! produces a character that would be replaced again.

/// Replacement for one character, or `None` to keep it.
fn replacement(c: char) -> Option<&'static str> {
    Some(match c {
        '\u{2019}' | '\u{2018}' | '\u{201B}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '«' | '»' => "\"",
        '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{2010}' | '\u{2011}' => "-",
        '\u{2026}' => "...",
        '\u{2022}' | '\u{00B7}' => "-",
        '\u{20AC}' => "EUR",
        '°' => " deg ",
        '¼' => "1/4",
        '½' => "1/2",
        '¾' => "3/4",
        '\u{00A0}' | '\u{202F}' | '\u{2009}' | '\u{2007}' => " ",
        'œ' => "oe",
        'Œ' => "OE",
        '\t' => "    ",
        '\r' => "",
        _ => return None,
    })
}

/// Whether the renderer can draw `c` once encoded.
pub fn is_renderable(c: char) -> bool {
    c == '\n' || (' '..='~').contains(&c) || ('\u{00A1}'..='\u{00FF}').contains(&c)
}

/// Rewrite `input` into the renderer's character set.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match replacement(c) {
            Some(r) => out.push_str(r),
            None if is_renderable(c) => out.push(c),
            None => out.push('?'),
        }
    }
    out
}

/// Encode sanitized text as WinAnsi bytes for a PDF string object.
///
/// Latin-1 code points map one-to-one onto WinAnsi in the range used here.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            n @ 0x20..=0x7E => n as u8,
            n @ 0xA1..=0xFF => n as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(sanitize("l’été"), "l'été");
        assert_eq!(sanitize("“vin” – « cave »"), "\"vin\" - \" cave \"");
        assert_eq!(sanitize("Attendez…"), "Attendez...");
        assert_eq!(sanitize("500 €"), "500 EUR");
        assert_eq!(sanitize("12 °C"), "12  deg C");
        assert_eq!(sanitize("½ bouteille"), "1/2 bouteille");
        assert_eq!(sanitize("70\u{00A0}%"), "70 %");
        assert_eq!(sanitize("oeuvre œuvre"), "oeuvre oeuvre");
    }

    #[test]
    fn test_latin1_is_kept() {
        assert_eq!(sanitize("Château Pétrus à Noël"), "Château Pétrus à Noël");
    }

    #[test]
    fn test_unsupported_becomes_question_mark() {
        assert_eq!(sanitize("vin 🍷"), "vin ?");
        assert_eq!(sanitize("中"), "?");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Il s’agit “d’un” test — avec … € ° ¼ ½ ¾ • «»\u{00A0}\u{202F}œŒ🍷",
            "plain ascii",
            "",
            "\t\r\n",
        ];
        for s in samples {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", s);
            assert!(once.chars().all(is_renderable));
        }
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(to_win_ansi("é"), vec![0xE9]);
        assert_eq!(to_win_ansi("A b"), b"A b".to_vec());
        assert_eq!(to_win_ansi("€"), b"?".to_vec());
    }
}
