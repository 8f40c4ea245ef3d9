use crossterm::event::Event as CrosstermEvent;

/// What the event loop hands to the runtime next.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The tick interval elapsed; the app applies gravity.
    Tick,
    /// A tick or terminal event happened since the last draw.
    Render,
    Crossterm(CrosstermEvent),
}
