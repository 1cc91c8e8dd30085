//! Glyph metrics for the standard Helvetica faces
//!
//! Advance widths come from the Adobe core-font AFM files, in 1/1000 em,
//! for printable ASCII. Latin-1 letters reuse the width of their base
//! letter, which matches the AFM values for every accented letter used in
//! the report copy.

use serde::{Deserialize, Serialize};

/// Base-14 faces the report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    pub const ALL: [Face; 3] = [Face::Regular, Face::Bold, Face::Oblique];

    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Oblique => "Helvetica-Oblique",
        }
    }

    /// Resource name inside the page's font dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Oblique => "F3",
        }
    }
}

// ============================================================================
// AFM WIDTHS (code points 32..=126)
// ============================================================================

static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// ASCII letter whose advance a Latin-1 letter shares.
fn base_letter(c: char) -> Option<char> {
    Some(match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    })
}

/// Advance width of `c` in 1/1000 em.
pub fn char_width(face: Face, c: char) -> u16 {
    let table = match face {
        Face::Bold => &HELVETICA_BOLD,
        Face::Regular | Face::Oblique => &HELVETICA,
    };
    let c = base_letter(c).unwrap_or(c);
    match u32::from(c) {
        n @ 32..=126 => table[(n - 32) as usize],
        _ => 556,
    }
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, face: Face, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(face, c))).sum();
    units as f32 / 1000.0 * size * crate::render::PT_TO_MM
}

/// Greedy word wrap into lines no wider than `max_mm`.
///
/// Explicit newlines always break; blank lines are preserved as empty
/// strings. A single word wider than the column is split by characters.
pub fn wrap(text: &str, face: Face, size: f32, max_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if text_width_mm(&candidate, face, size) <= max_mm {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            // Overlong word: hard-split.
            let mut chunk = String::new();
            for c in word.chars() {
                chunk.push(c);
                if text_width_mm(&chunk, face, size) > max_mm && chunk.chars().count() > 1 {
                    chunk.pop();
                    lines.push(std::mem::take(&mut chunk));
                    chunk.push(c);
                }
            }
            line = chunk;
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(Face::Regular, ' '), 278);
        assert_eq!(char_width(Face::Regular, 'W'), 944);
        assert_eq!(char_width(Face::Regular, 'i'), 222);
        assert_eq!(char_width(Face::Bold, 'i'), 278);
        assert_eq!(char_width(Face::Regular, '~'), 584);
        assert_eq!(char_width(Face::Regular, 'é'), char_width(Face::Regular, 'e'));
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "Le vin reste avant tout un produit de plaisir et de convivialité, à partager.";
        let lines = wrap(text, Face::Regular, 12.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, Face::Regular, 12.0) <= 60.0, "{:?}", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        let lines = wrap("one\n\ntwo", Face::Regular, 12.0, 190.0);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let word = "x".repeat(200);
        let lines = wrap(&word, Face::Regular, 12.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }
}
