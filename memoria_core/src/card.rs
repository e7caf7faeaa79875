use std::fmt;

/// A card face in the memory deck. Every symbol appears on exactly two
/// cards, themed after the Parintins folklore festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Boi,
    Coracao,
    Estrela,
    Lua,
    Paje,
    Cunha,
    Toada,
    Coroa,
}

impl Symbol {
    pub const ALL: [Symbol; 8] = [
        Symbol::Boi,
        Symbol::Coracao,
        Symbol::Estrela,
        Symbol::Lua,
        Symbol::Paje,
        Symbol::Cunha,
        Symbol::Toada,
        Symbol::Coroa,
    ];

    pub fn glyph(&self) -> char {
        match self {
            Symbol::Boi => '\u{2649}',     // ♉
            Symbol::Coracao => '\u{2665}', // ♥
            Symbol::Estrela => '\u{2605}', // ★
            Symbol::Lua => '\u{263D}',     // ☽
            Symbol::Paje => '\u{2600}',    // ☀
            Symbol::Cunha => '\u{273F}',   // ✿
            Symbol::Toada => '\u{266A}',   // ♪
            Symbol::Coroa => '\u{265B}',   // ♛
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Boi => "Boi-Bumbá",
            Symbol::Coracao => "Coração",
            Symbol::Estrela => "Estrela",
            Symbol::Lua => "Lua",
            Symbol::Paje => "Pajé",
            Symbol::Cunha => "Cunhã",
            Symbol::Toada => "Toada",
            Symbol::Coroa => "Coroa",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_eight_distinct_symbols() {
        assert_eq!(Symbol::ALL.len(), 8);
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }
}
