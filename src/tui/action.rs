// Typed requests emitted by the input layer and applied to the store.
// Keeps the key handlers free of closures over mutable list state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRequest {
    /// Dialog confirmed with this raw text. Forwarded verbatim;
    /// trimming and validation belong to the store.
    Add(String),
    /// Delete the row at this position (swipe-style removal).
    DeleteAt(usize),
    /// Delete the first row matching this title (tap-style removal).
    DeleteValue(String),
    Quit,
}
