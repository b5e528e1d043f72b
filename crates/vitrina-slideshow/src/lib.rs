#![forbid(unsafe_code)]

//! # vitrina-slideshow
//!
//! Fullscreen slideshow controller: a per-session state machine over a
//! shuffled image sequence.
//!
//! ## Interaction model
//!
//! The device class is fixed at session start. Desktop-like devices
//! mount straight into playback (fullscreen best-effort) and any click
//! closes the session. Phone-like devices walk a two-step tap sequence:
//! tap to arm fullscreen, tap the play affordance to start, tap again to
//! close — phones routinely block fullscreen requests made outside a
//! direct gesture, and auto-play surprises touch users.
//!
//! A platform fullscreen-ended notification is authoritative: it forces
//! the close sequence from any phase, whatever local state believed.
//!
//! ## Resources
//!
//! The advance timer lives only inside the `Playing` phase, scoped by a
//! cancellation token; background scroll is suspended by an RAII lock
//! whenever the session is past `Idle`. Both are released on every exit
//! path, unmount included.

mod controller;
mod events;
mod shuffle;

pub use controller::{Phase, Slideshow, SlideshowConfig};
pub use events::SlideshowEvent;
pub use shuffle::ShuffledOrder;
