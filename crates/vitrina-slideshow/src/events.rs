/// Session notifications, broadcast to whoever renders the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlideshowEvent {
    /// Fullscreen granted on a phone; the play affordance should appear.
    Armed,
    /// Playback started; the first image is displayable.
    Started,
    /// The advance timer moved the cursor.
    ImageChanged { index: usize },
    /// The session ended. Embedders unmount on this (or on the close
    /// token), never synchronously inside a transition.
    Closed,
}
