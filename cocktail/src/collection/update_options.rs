/// Options controlling a store update.
///
/// ```rust,ignore
/// use cocktail::collection::{just_once, UpdateOptions};
///
/// // Update only the first match
/// let options = just_once();
///
/// // Update every match
/// let options = UpdateOptions::default();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    just_once: bool,
}

impl UpdateOptions {
    pub fn new(just_once: bool) -> Self {
        Self { just_once }
    }

    /// Whether only the first matching document is updated.
    pub fn is_just_once(&self) -> bool {
        self.just_once
    }
}

/// Creates `UpdateOptions` that update only the first matching document.
pub fn just_once() -> UpdateOptions {
    UpdateOptions::new(true)
}
