use inksac::prelude::*;

/// Colors diagnostics on terminals that support it.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self {
            color_support: check_color_support().unwrap_or(ColorSupport::NoColor),
        }
    }

    /// Never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// The `myshell:` prefix and error text, red and bold.
    pub fn highlight_error(&self, error: &str) -> String {
        self.paint(error, Style::builder().foreground(Color::Red).bold().build())
    }

    /// Usage hints, dimmed.
    pub fn highlight_hint(&self, hint: &str) -> String {
        self.paint(hint, Style::builder().foreground(Color::RGB(128, 128, 128)).build())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        text.style(style).to_string()
    }
}
