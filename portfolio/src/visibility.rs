use std::{cell::Cell, fmt::Debug, rc::Rc};

use tracing::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

// fraction of a region that has to be on screen, always within [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Threshold(DEFAULT_THRESHOLD);
        }
        Threshold(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold(DEFAULT_THRESHOLD)
    }
}

// a single report from the host's observation machinery
//
// the host is registered with the threshold, so it only reports once the region has crossed
// it (or when the observation starts).  the ratio is informational, browsers can report it a
// hair under the threshold and a region taller than the viewport may never reach it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn visible(ratio: f64) -> Self {
        Intersection {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Intersection {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

// one-shot visibility latch
//
// flips to visible on the first report that the region is intersecting and stays there,
// scrolling the region back out does not hide it again
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // returns true only for the observation that flipped the latch
    pub fn observe(&mut self, event: Intersection) -> bool {
        if self.visible || !event.is_intersecting {
            return false;
        }

        self.visible = true;
        true
    }
}

// the platform side of the latch
//
// an implementation registers one observation of the named region and forwards every report
// to on_event until the returned handle is dropped.  None means the host has no way to
// observe the region at all
pub trait ObserveCapability {
    type Handle;

    fn observe(
        &self,
        region: &str,
        threshold: Threshold,
        on_event: Box<dyn FnMut(Intersection)>,
    ) -> Option<Self::Handle>;
}

// a scoped observation feeding a latch
//
// on_visible runs at most once.  the registration lives exactly as long as the watch, so
// dropping the watch on any path releases the host resource
pub struct Watch<H> {
    handle: Option<H>,
}

impl<H> Watch<H> {
    pub fn start<C, F>(capability: &C, region: &str, threshold: Threshold, on_visible: F) -> Self
    where
        C: ObserveCapability<Handle = H>,
        F: FnOnce() + 'static,
    {
        let mut latch = VisibilityLatch::new();
        let pending = Rc::new(Cell::new(Some(on_visible)));
        let fire = pending.clone();

        let handle = capability.observe(
            region,
            threshold,
            Box::new(move |event| {
                if latch.observe(event) {
                    if let Some(callback) = fire.take() {
                        callback();
                    }
                }
            }),
        );

        if handle.is_none() {
            debug!(region, "no observation capability, treating region as visible");
            if let Some(callback) = pending.take() {
                callback();
            }
        }

        Watch { handle }
    }

    pub fn is_observing(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H> Debug for Watch<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watch")
            .field("observing", &self.is_observing())
            .finish()
    }
}

impl<H> Drop for Watch<H> {
    fn drop(&mut self) {
        if self.handle.take().is_some() {
            debug!("releasing visibility observation");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    type Sink = Rc<RefCell<Option<Box<dyn FnMut(Intersection)>>>>;

    // hands every registered callback to the test and counts releases
    #[derive(Default)]
    struct ManualHost {
        sink: Sink,
        registered: Cell<Option<Threshold>>,
        released: Rc<Cell<usize>>,
    }

    struct ManualHandle(Rc<Cell<usize>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl ObserveCapability for ManualHost {
        type Handle = ManualHandle;

        fn observe(
            &self,
            _region: &str,
            threshold: Threshold,
            on_event: Box<dyn FnMut(Intersection)>,
        ) -> Option<ManualHandle> {
            self.registered.set(Some(threshold));
            *self.sink.borrow_mut() = Some(on_event);
            Some(ManualHandle(self.released.clone()))
        }
    }

    impl ManualHost {
        fn emit(&self, event: Intersection) {
            if let Some(callback) = self.sink.borrow_mut().as_mut() {
                callback(event);
            }
        }
    }

    struct NoHost;

    impl ObserveCapability for NoHost {
        type Handle = ();

        fn observe(
            &self,
            _region: &str,
            _threshold: Threshold,
            _on_event: Box<dyn FnMut(Intersection)>,
        ) -> Option<()> {
            None
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(Threshold::new(-0.5).value(), 0.0);
        assert_eq!(Threshold::new(2.0).value(), 1.0);
        assert_eq!(Threshold::new(0.25).value(), 0.25);
        assert_eq!(Threshold::new(f64::NAN).value(), DEFAULT_THRESHOLD);
        assert_eq!(Threshold::default().value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn latch_fires_once_and_never_reverts() {
        let mut latch = VisibilityLatch::new();
        let events = [
            Intersection::hidden(),
            Intersection::visible(0.1),
            Intersection::hidden(),
            Intersection::visible(1.0),
            Intersection::hidden(),
        ];

        let flips: Vec<bool> = events.iter().map(|e| latch.observe(*e)).collect();

        assert_eq!(flips, vec![false, true, false, false, false]);
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_trusts_reported_intersection_over_ratio() {
        // rounding just under the registered threshold
        let mut latch = VisibilityLatch::new();
        assert!(latch.observe(Intersection::visible(0.099_999_99)));

        // a region taller than the viewport never reaches the threshold ratio
        let mut latch = VisibilityLatch::new();
        assert!(latch.observe(Intersection::visible(0.04)));
    }

    #[test]
    fn watch_reports_first_crossing() {
        let host = ManualHost::default();
        let (fired, on_visible) = counter();

        let watch = Watch::start(&host, "about", Threshold::new(0.5), on_visible);
        assert!(watch.is_observing());
        assert_eq!(host.registered.get(), Some(Threshold::new(0.5)));
        assert_eq!(fired.get(), 0);

        host.emit(Intersection::hidden());
        assert_eq!(fired.get(), 0);

        host.emit(Intersection::visible(0.49));
        host.emit(Intersection::hidden());
        host.emit(Intersection::visible(0.9));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_watch_releases_observation() {
        let host = ManualHost::default();
        let (_, on_visible) = counter();

        let watch = Watch::start(&host, "skills", Threshold::default(), on_visible);
        assert_eq!(host.released.get(), 0);

        drop(watch);
        assert_eq!(host.released.get(), 1);
    }

    #[test]
    fn missing_capability_is_always_visible() {
        let (fired, on_visible) = counter();

        let watch = Watch::start(&NoHost, "blog", Threshold::default(), on_visible);

        assert!(!watch.is_observing());
        assert_eq!(fired.get(), 1);
    }
}
