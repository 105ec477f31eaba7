//! Keyboard shortcut markers in button labels.
//!
//! An `&` marks the following character as the shortcut (`&Exit` is shown as
//! `Exit` and triggered with `e`). `&&` stands for a literal ampersand.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Label with the markers removed.
    pub text: String,
    /// Char index into `text` of the shortcut character.
    pub position: Option<usize>,
}

impl Shortcut {
    pub fn parse(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut position = None;
        let mut chars = raw.chars();
        let mut count = 0;

        while let Some(c) = chars.next() {
            if c == '&' {
                match chars.next() {
                    Some('&') => {
                        text.push('&');
                        count += 1;
                    }
                    Some(next) => {
                        if position.is_none() {
                            position = Some(count);
                        }
                        text.push(next);
                        count += 1;
                    }
                    None => {}
                }
                continue;
            }
            text.push(c);
            count += 1;
        }

        Self { text, position }
    }

    pub fn key(&self) -> Option<char> {
        let pos = self.position?;
        self.text.chars().nth(pos).map(|c| c.to_ascii_lowercase())
    }

    pub fn matches(&self, c: char) -> bool {
        self.key() == Some(c.to_ascii_lowercase())
    }
}
