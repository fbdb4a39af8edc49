#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyDeck,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyDeck => "No cards available for the selected chapters.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
