//! End-to-end session walks over the public API only.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use parking_lot::Mutex;
use vitrina_core::ImageRef;
use vitrina_platform::{
    FullscreenDenied, FullscreenHost, PointerTraits, ScrollHost, Vendor,
};
use vitrina_slideshow::{Phase, Slideshow, SlideshowConfig, SlideshowEvent};

struct WebkitOnlyHost {
    active: AtomicBool,
}

impl WebkitOnlyHost {
    fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }
}

impl FullscreenHost for WebkitOnlyHost {
    fn supports(&self, vendor: Vendor) -> bool {
        vendor == Vendor::Webkit
    }

    fn request(&self, _vendor: Vendor) -> Result<(), FullscreenDenied> {
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn exit(&self, _vendor: Vendor) -> Result<(), FullscreenDenied> {
        self.active.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_active(&self, _vendor: Vendor) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct PageScroll {
    overflow: Mutex<String>,
}

impl ScrollHost for PageScroll {
    fn overflow(&self) -> String {
        self.overflow.lock().clone()
    }

    fn set_overflow(&self, value: &str) {
        *self.overflow.lock() = value.to_owned();
    }
}

const PHONE: PointerTraits = PointerTraits {
    coarse_pointer: true,
    can_hover: false,
    max_touch_points: 5,
};

fn gallery() -> Vec<ImageRef> {
    (0..4)
        .map(|i| ImageRef::new(format!("archive/photo_{i}.jpg")))
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("vitrina_slideshow=trace")
        .try_init();
}

#[tokio::test(start_paused = true)]
async fn phone_session_full_walk() {
    init_tracing();
    let scroll = Arc::new(PageScroll::default());
    scroll.set_overflow("visible");

    let show = Slideshow::new(
        WebkitOnlyHost::new(),
        scroll.clone(),
        PHONE,
        gallery(),
        SlideshowConfig {
            advance_interval: Duration::from_secs(5),
            shuffle_seed: Some(3),
        },
    );
    let mut events = show.subscribe();

    show.mount();
    assert_eq!(show.phase(), Phase::Idle);

    show.tap();
    assert_eq!(show.phase(), Phase::FullscreenArmed);
    assert_eq!(events.recv().await.unwrap(), SlideshowEvent::Armed);
    assert_eq!(scroll.overflow(), "hidden");

    show.tap();
    assert_eq!(events.recv().await.unwrap(), SlideshowEvent::Started);
    let first = show.current_image().expect("non-empty order has a current image");

    // Two timer periods: cursor at 2.
    assert_eq!(
        events.recv().await.unwrap(),
        SlideshowEvent::ImageChanged { index: 1 }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        SlideshowEvent::ImageChanged { index: 2 }
    );
    assert_ne!(show.current_image(), Some(first));

    show.tap();
    assert_eq!(events.recv().await.unwrap(), SlideshowEvent::Closed);
    assert_eq!(show.phase(), Phase::Closed);
    assert_eq!(scroll.overflow(), "visible");

    // The close future resolves for embedders that await unmount.
    show.closed().await;
}

#[tokio::test(start_paused = true)]
async fn platform_done_button_closes_and_stops_timer() {
    let scroll = Arc::new(PageScroll::default());
    let show = Slideshow::new(
        WebkitOnlyHost::new(),
        scroll.clone(),
        PHONE,
        gallery(),
        SlideshowConfig {
            advance_interval: Duration::from_secs(5),
            shuffle_seed: Some(8),
        },
    );
    let mut events = show.subscribe();

    show.tap();
    show.tap();
    assert_eq!(show.phase(), Phase::Playing);

    show.fullscreen_changed(false);
    assert_eq!(show.phase(), Phase::Closed);
    assert_eq!(scroll.overflow(), "");

    // Drain what the walk produced, then verify silence.
    while let Ok(event) = events.try_recv() {
        assert_ne!(event, SlideshowEvent::ImageChanged { index: 3 });
    }
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(events.try_recv().is_err());
}
