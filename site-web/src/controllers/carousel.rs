//! Hero carousel: one active slide (and dot) at a time, advanced by the
//! prev/next buttons, the dots, and a periodic timer.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use web_sys::Element;

use super::ActiveMarker;

/// Map any integer onto `0..len`, wrapping negatives from the end.
pub fn normalize_index(n: isize, len: usize) -> usize {
    n.rem_euclid(len as isize) as usize
}

/// Slide position plus the elements it marks active.
pub struct Carousel<M> {
    slides: Vec<M>,
    dots: Vec<M>,
    current: Cell<usize>,
}

impl<M: ActiveMarker> Carousel<M> {
    pub fn new(slides: Vec<M>, dots: Vec<M>) -> Self {
        Self {
            slides,
            dots,
            current: Cell::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Activate slide `n` (wrapped into range) and its dot, deactivating
    /// every other slide and dot. Returns the selected index, or `None` for
    /// an empty carousel.
    pub fn show(&self, n: isize) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }

        for marker in self.slides.iter().chain(self.dots.iter()) {
            marker.set_active(false);
        }

        let index = normalize_index(n, self.slides.len());
        self.current.set(index);
        self.slides[index].set_active(true);
        if let Some(dot) = self.dots.get(index) {
            dot.set_active(true);
        }
        Some(index)
    }

    pub fn next(&self) -> Option<usize> {
        self.show(self.current.get() as isize + 1)
    }

    pub fn prev(&self) -> Option<usize> {
        self.show(self.current.get() as isize - 1)
    }
}

impl Carousel<Element> {
    /// Wire the buttons, the dots and the auto-advance timer, then show the
    /// first slide.
    ///
    /// Listeners and the timer live for the rest of the page; the timer
    /// keeps its own schedule regardless of manual navigation.
    pub fn bind(self: Rc<Self>, prev: Option<&Element>, next: Option<&Element>, interval_ms: u32) {
        if self.is_empty() {
            log::debug!("carousel has no slides; not binding");
            return;
        }

        if let Some(prev) = prev {
            let carousel = Rc::clone(&self);
            EventListener::new(prev, "click", move |_| {
                carousel.prev();
            })
            .forget();
        }

        if let Some(next) = next {
            let carousel = Rc::clone(&self);
            EventListener::new(next, "click", move |_| {
                carousel.next();
            })
            .forget();
        }

        for (index, dot) in self.dots.iter().enumerate() {
            let carousel = Rc::clone(&self);
            EventListener::new(dot, "click", move |_| {
                carousel.show(index as isize);
            })
            .forget();
        }

        self.show(0);

        let carousel = Rc::clone(&self);
        Interval::new(interval_ms, move || {
            carousel.next();
        })
        .forget();

        log::debug!(
            "carousel bound: {} slides, {} dots, {}ms interval",
            self.slides.len(),
            self.dots.len(),
            interval_ms
        );
    }
}
