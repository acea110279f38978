//! Indentation configuration for code generation.

/// Indentation unit for generated code, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 2-space indentation, the Prettier default for TypeScript.
    pub const TYPESCRIPT: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_spaces() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
        assert_eq!(Indent::TYPESCRIPT.width(), 2);
    }
}
