/// How the persistence layer should populate a field it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoStrategy {
    Uuid(UuidVersion),
    Increment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UuidVersion {
    V4,
    V7,
}

impl AutoStrategy {
    /// Returns `true` if the auto is [`Increment`].
    ///
    /// [`Increment`]: AutoStrategy::Increment
    #[must_use]
    pub fn is_increment(&self) -> bool {
        matches!(self, Self::Increment)
    }
}
