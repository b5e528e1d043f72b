use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::{debug, trace};
use vitrina_core::ImageRef;
use vitrina_platform::{
    DeviceClass, FullscreenDriver, FullscreenHost, PointerTraits, ScrollHost, ScrollLock,
};

use crate::{events::SlideshowEvent, shuffle::ShuffledOrder};

const EVENT_CAPACITY: usize = 32;

/// Interaction phase of a slideshow session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, nothing granted yet. Scrolling still live.
    Idle,
    /// Phone only: fullscreen granted, playback not started; the play
    /// affordance is visible.
    FullscreenArmed,
    /// Images cycling on the advance timer.
    Playing,
    /// Terminal. The embedder unmounts on the close signal.
    Closed,
}

/// Session tuning.
#[derive(Clone, Debug)]
pub struct SlideshowConfig {
    /// Advance period while playing.
    pub advance_interval: Duration,
    /// Fixed shuffle seed; `None` seeds from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            advance_interval: Duration::from_secs(5),
            shuffle_seed: None,
        }
    }
}

struct State {
    phase: Phase,
    order: ShuffledOrder,
    rng: fastrand::Rng,
    scroll_lock: Option<ScrollLock>,
    timer: Option<CancellationToken>,
}

struct Inner<H> {
    fullscreen: FullscreenDriver<H>,
    scroll: Arc<dyn ScrollHost>,
    device: DeviceClass,
    advance_interval: Duration,
    events: broadcast::Sender<SlideshowEvent>,
    closed: CancellationToken,
    state: Mutex<State>,
}

/// One slideshow session.
///
/// Owns its shuffled order, cursor and phase; nothing is shared across
/// sessions. All transitions happen on discrete UI events — taps,
/// clicks, timer ticks and the platform's fullscreen-change
/// notification, the last of which always wins over local state.
///
/// Requires a tokio runtime for the advance timer.
pub struct Slideshow<H> {
    inner: Arc<Inner<H>>,
}

impl<H> Clone for Slideshow<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H> std::fmt::Debug for Slideshow<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("device", &self.inner.device)
            .field("phase", &self.inner.state.lock().phase)
            .finish_non_exhaustive()
    }
}

impl<H: FullscreenHost + 'static> Slideshow<H> {
    pub fn new(
        host: H,
        scroll: Arc<dyn ScrollHost>,
        traits: PointerTraits,
        images: Vec<ImageRef>,
        config: SlideshowConfig,
    ) -> Self {
        let device = DeviceClass::classify(traits);
        let mut rng = match config.shuffle_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        // Shuffle before anything is displayable.
        let order = ShuffledOrder::new(images, &mut rng);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        debug!(?device, images = order.len(), "slideshow session created");

        Self {
            inner: Arc::new(Inner {
                fullscreen: FullscreenDriver::new(host),
                scroll,
                device,
                advance_interval: config.advance_interval,
                events,
                closed: CancellationToken::new(),
                state: Mutex::new(State {
                    phase: Phase::Idle,
                    order,
                    rng,
                    scroll_lock: None,
                    timer: None,
                }),
            }),
        }
    }

    /// Mount hook.
    ///
    /// Desktop goes straight to playback, requesting native fullscreen
    /// on the way — rejection is swallowed, the session then just runs
    /// in-page. Phones stay idle and wait for the first tap.
    pub fn mount(&self) {
        if self.inner.device.is_phone() {
            return;
        }
        self.inner.fullscreen.request();
        self.enter_playing();
    }

    /// A tap (or click) anywhere on the session surface.
    ///
    /// Desktop: closes, whatever the phase. Phone: walks
    /// `Idle → FullscreenArmed → Playing → closed`. A rejected
    /// fullscreen request leaves the phone silently idle; while armed,
    /// the tap is the play affordance — arming is never exited by a
    /// background tap, only by playback or a platform fullscreen-ended
    /// signal.
    pub fn tap(&self) {
        if !self.inner.device.is_phone() {
            self.close();
            return;
        }

        let phase = self.phase();
        match phase {
            Phase::Idle => {
                if !self.inner.fullscreen.request() {
                    trace!("fullscreen rejected, staying idle");
                    return;
                }
                {
                    let mut state = self.inner.state.lock();
                    if state.phase != Phase::Idle {
                        return;
                    }
                    state.scroll_lock = Some(ScrollLock::acquire(self.inner.scroll.clone()));
                    state.phase = Phase::FullscreenArmed;
                }
                let _ = self.inner.events.send(SlideshowEvent::Armed);
            }
            Phase::FullscreenArmed => self.enter_playing(),
            Phase::Playing => self.close(),
            Phase::Closed => {}
        }
    }

    /// Pointer-device alias for [`tap`](Self::tap).
    pub fn click(&self) {
        self.tap();
    }

    /// Platform fullscreen-change notification.
    ///
    /// `active == false` is the authoritative signal that fullscreen
    /// ended (exit calls are not reliable everywhere); it forces the
    /// close sequence from any phase and is idempotent once closed.
    pub fn fullscreen_changed(&self, active: bool) {
        if !active {
            debug!("platform reports fullscreen ended");
            self.close();
        }
    }

    /// Run the close sequence: tear down the timer, restore scrolling,
    /// request fullscreen exit best-effort, then signal close
    /// asynchronously (event + token, never a synchronous callback).
    pub fn close(&self) {
        {
            let mut state = self.inner.state.lock();
            if state.phase == Phase::Closed {
                return;
            }
            if let Some(timer) = state.timer.take() {
                timer.cancel();
            }
            // Dropping the lock guard restores the prior overflow value.
            state.scroll_lock = None;
            state.phase = Phase::Closed;
        }
        self.inner.fullscreen.exit();
        debug!("slideshow session closed");
        let _ = self.inner.events.send(SlideshowEvent::Closed);
        self.inner.closed.cancel();
    }

    /// Swap in a new image set: fresh shuffle, cursor back to 0.
    pub fn set_images(&self, images: Vec<ImageRef>) {
        let mut state = self.inner.state.lock();
        let State { order, rng, .. } = &mut *state;
        order.reshuffle(images, rng);
    }

    fn enter_playing(&self) {
        {
            let mut state = self.inner.state.lock();
            if matches!(state.phase, Phase::Playing | Phase::Closed) {
                return;
            }
            if state.scroll_lock.is_none() {
                state.scroll_lock = Some(ScrollLock::acquire(self.inner.scroll.clone()));
            }
            state.phase = Phase::Playing;

            // Child of the close token: closing cancels the timer even
            // if the explicit cancel were ever missed.
            let timer = self.inner.closed.child_token();
            state.timer = Some(timer.clone());
            spawn_timer(
                Arc::downgrade(&self.inner),
                timer,
                self.inner.advance_interval,
            );
        }
        let _ = self.inner.events.send(SlideshowEvent::Started);
    }

    // -- observers --

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.state.lock().phase
    }

    #[must_use]
    pub fn device(&self) -> DeviceClass {
        self.inner.device
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.state.lock().order.index()
    }

    #[must_use]
    pub fn current_image(&self) -> Option<ImageRef> {
        self.inner.state.lock().order.current().cloned()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.inner.state.lock().order.len()
    }

    /// Subscribe to session events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SlideshowEvent> {
        self.inner.events.subscribe()
    }

    /// Resolves once the session has closed; embedders await this to
    /// unmount instead of subscribing to events.
    #[must_use]
    pub fn closed(&self) -> WaitForCancellationFuture<'_> {
        self.inner.closed.cancelled()
    }
}

/// Advance loop, scoped to one `Playing` interval.
///
/// Holds only a weak handle: an unmounted session stops the loop, and
/// the token is re-checked under the state lock so nothing fires after
/// cancellation.
fn spawn_timer<H: FullscreenHost + 'static>(
    inner: Weak<Inner<H>>,
    token: CancellationToken,
    period: Duration,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval's first tick completes immediately; the first advance
        // belongs one full period after playback starts.
        ticker.tick().await;

        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = ticker.tick() => {
                    let Some(inner) = inner.upgrade() else { break };
                    let event = {
                        let mut state = inner.state.lock();
                        if token.is_cancelled() || state.phase != Phase::Playing {
                            None
                        } else {
                            state
                                .order
                                .advance()
                                .map(|index| SlideshowEvent::ImageChanged { index })
                        }
                    };
                    match event {
                        Some(event) => {
                            trace!(?event, "advance");
                            let _ = inner.events.send(event);
                        }
                        None => break,
                    }
                }
            }
        }
        trace!("advance timer stopped");
    });
}
