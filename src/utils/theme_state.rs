use std::fmt::{ Display, Formatter };

pub const DARK_TOKEN: &str = "dark";
pub const LIGHT_TOKEN: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub const DARK: Self = Self { is_dark: true };
    pub const LIGHT: Self = Self { is_dark: false };

    /// Anything other than the dark token counts as light.
    pub fn from_token(token: &str) -> Self {
        Self { is_dark: token == DARK_TOKEN }
    }

    pub fn token(self) -> &'static str {
        if self.is_dark { DARK_TOKEN } else { LIGHT_TOKEN }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
