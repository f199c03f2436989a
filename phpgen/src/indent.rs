//! Indentation configuration for generated source.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the PSR coding-standard unit.
    pub const PHP: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }

    /// Build the prefix string for `level` indent levels.
    ///
    /// Empty for level zero or below. Levels go negative transiently around
    /// symmetric increase/decrease pairs, so this never fails.
    pub fn prefix(&self, level: i32) -> String {
        if level <= 0 {
            String::new()
        } else {
            self.as_str().repeat(level as usize)
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Indent::PHP.prefix(0), "");
        assert_eq!(Indent::PHP.prefix(-2), "");
        assert_eq!(Indent::PHP.prefix(1), "    ");
        assert_eq!(Indent::PHP.prefix(3), "            ");
        assert_eq!(Indent::Tab.prefix(2), "\t\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::PHP);
        assert_eq!(Indent::PHP, Indent::Spaces(4));
    }
}
