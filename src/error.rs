pub type KabeResult<T> = Result<T, KabeError>;

#[derive(thiserror::Error, Debug)]
pub enum KabeError {
    #[error("deck error: {0}")]
    Deck(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("font error: {0}")]
    Font(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KabeError {
    pub fn deck(msg: impl Into<String>) -> Self {
        Self::Deck(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(KabeError::deck("x").to_string().contains("deck error:"));
        assert!(KabeError::layout("x").to_string().contains("layout error:"));
        assert!(KabeError::render("x").to_string().contains("render error:"));
        assert!(KabeError::font("x").to_string().contains("font error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = KabeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
