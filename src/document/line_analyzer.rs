//! Simple line-based structure analyzer
//! Classifies individual lines by indentation and declaration prefix
//! without parsing the language grammar
use std::fmt;

/// Width a tab expands to when measuring indentation
pub const TAB_WIDTH: usize = 4;

/// Kind of declaration recognised by its line prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Function,
    Class,
}

impl DeclarationKind {
    /// Literal prefix matched against the stripped line
    pub fn trigger(self) -> &'static str {
        match self {
            DeclarationKind::Function => "def ",
            DeclarationKind::Class => "class ",
        }
    }

    /// Noun used in user-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            DeclarationKind::Function => "function",
            DeclarationKind::Class => "class",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Indentation width of a line.
    ///
    /// Leading tabs count [`TAB_WIDTH`] and spaces count one, left to right,
    /// stopping at the first other character. A whitespace-only line measures
    /// its full leading width.
    pub fn indent_level(line: &str) -> usize {
        line.chars()
            .map_while(|c| match c {
                '\t' => Some(TAB_WIDTH),
                ' ' => Some(1),
                _ => None,
            })
            .sum()
    }

    /// Check if a line is empty or whitespace only
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }

    /// Check if the stripped line starts with the declaration trigger
    pub fn is_declaration(line: &str, kind: DeclarationKind) -> bool {
        line.trim().starts_with(kind.trigger())
    }

    /// Number of leading space characters, where the caret lands on a line
    pub fn caret_column(line: &str) -> usize {
        line.chars().take_while(|c| *c == ' ').count()
    }
}
