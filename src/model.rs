//! Story carousel model: slides, the shared index, and the controller that
//! owns every piece of carousel/lightbox state.
//!
//! The view never mutates state directly; it dispatches [`StoryAction`]s and
//! renders whatever [`StoryState`] says.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::CarouselConfig;
use crate::state::{
    Deferred, FilmRoll, Release, RollPhase, TouchIntent, TouchPoint, TouchState, Timeline,
    Viewport, ZoomState, touch::GesturePhase,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub total: usize,
}

impl CarouselState {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn go_to(&mut self, index: i64) {
        if self.total == 0 {
            return;
        }
        self.current = self.wrap(index);
    }

    /// Index `delta` steps away from the current slide, wrapped.
    pub fn offset(&self, delta: i64) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.wrap(self.current as i64 + delta)
    }

    fn wrap(&self, index: i64) -> usize {
        index.rem_euclid(self.total as i64) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    /// Slide shown in the primary modal image. Catches up with the carousel
    /// index once any pending fade or settle step has run.
    pub displayed: usize,
    pub controls_hidden: bool,
    /// Slide last loaded into the reusable ghost image.
    pub ghost: Option<usize>,
}

/// Button/dot navigation fade of the modal image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFade {
    #[default]
    Idle,
    FadingOut,
    FadingIn,
}

/// Inline style of one modal image element.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageStyle {
    pub transform: String,
    pub opacity: f64,
    pub transition: Option<String>,
    pub visible: bool,
}

impl ImageStyle {
    pub fn css(&self) -> String {
        let mut css = format!(
            "transform: {}; opacity: {};",
            self.transform, self.opacity
        );
        match &self.transition {
            Some(t) => css.push_str(&format!(" transition: {t};")),
            None => css.push_str(" transition: none;"),
        }
        if !self.visible {
            css.push_str(" visibility: hidden;");
        }
        css
    }
}

#[derive(Clone, Debug)]
pub enum StoryAction {
    Next,
    Prev,
    GoTo(usize),
    OpenModal,
    CloseModal,
    ToggleControls,
    Resize(Viewport),
    InlineTouchStart(Vec<TouchPoint>),
    InlineTouchEnd {
        end: Option<TouchPoint>,
        at_ms: f64,
    },
    ModalTouchStart {
        points: Vec<TouchPoint>,
        stage_width: f64,
    },
    ModalTouchMove(Vec<TouchPoint>),
    ModalTouchEnd {
        end: Option<TouchPoint>,
        at_ms: f64,
    },
    /// A scheduled timeline step came due.
    Fire(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryState {
    pub slides: Rc<Vec<Slide>>,
    pub config: Rc<CarouselConfig>,
    pub carousel: CarouselState,
    pub modal: ModalState,
    pub zoom: ZoomState,
    pub fade: ImageFade,
    pub film_roll: Option<FilmRoll>,
    /// `None` until the carousel has been measured.
    pub viewport: Option<Viewport>,
    /// Width of the modal image wrapper, sampled at touch start.
    pub stage_width: f64,
    pub inline_touch: TouchState,
    pub modal_touch: TouchState,
    pub timeline: Timeline,
}

impl StoryState {
    pub fn new(slides: Rc<Vec<Slide>>, config: Rc<CarouselConfig>) -> Self {
        let total = slides.len();
        Self {
            slides,
            config,
            carousel: CarouselState::new(total),
            modal: ModalState::default(),
            zoom: ZoomState::default(),
            fade: ImageFade::Idle,
            film_roll: None,
            viewport: None,
            stage_width: 0.0,
            inline_touch: TouchState::default(),
            modal_touch: TouchState::default(),
            timeline: Timeline::default(),
        }
    }

    pub fn displayed_slide(&self) -> Option<&Slide> {
        self.slides.get(self.modal.displayed)
    }

    pub fn ghost_slide(&self) -> Option<&Slide> {
        self.modal.ghost.and_then(|i| self.slides.get(i))
    }

    // ---------------- Navigation -----------------

    pub fn next(&mut self) {
        self.flush_settle();
        self.navigate(self.carousel.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.flush_settle();
        self.navigate(self.carousel.current as i64 - 1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.flush_settle();
        self.navigate(index as i64);
    }

    fn navigate(&mut self, index: i64) {
        let before = self.carousel.current;
        self.carousel.go_to(index);
        log::debug!("story: slide {} -> {}", before, self.carousel.current);
        self.sync_modal();
    }

    fn sync_modal(&mut self) {
        if !self.modal.is_open {
            return;
        }
        if self.fade == ImageFade::Idle && self.modal.displayed == self.carousel.current {
            return;
        }
        // restarting the fade-out pushes the swap back; the swap shows the latest index
        self.fade = ImageFade::FadingOut;
        self.timeline
            .schedule(self.config.fade_ms, Deferred::FadeSwap);
    }

    /// Put the current slide into the primary modal image at rest.
    fn show_current(&mut self) {
        self.modal.displayed = self.carousel.current;
        self.zoom.reset();
        self.fade = ImageFade::Idle;
    }

    // ---------------- Modal -----------------

    pub fn open_modal(&mut self) {
        if self.modal.is_open {
            return;
        }
        self.modal.is_open = true;
        self.modal.controls_hidden = false;
        self.film_roll = None;
        self.timeline.cancel();
        self.modal_touch = TouchState::default();
        self.show_current();
        log::debug!("story: modal opened at slide {}", self.carousel.current);
    }

    pub fn close_modal(&mut self) {
        if !self.modal.is_open {
            return;
        }
        // a swipe that already crossed the threshold still lands
        self.flush_settle();
        self.modal.is_open = false;
        self.film_roll = None;
        self.timeline.cancel();
        self.modal_touch = TouchState::default();
        self.fade = ImageFade::Idle;
        self.zoom.reset();
        log::debug!("story: modal closed");
    }

    pub fn toggle_controls(&mut self) {
        if self.modal.is_open {
            self.modal.controls_hidden = !self.modal.controls_hidden;
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    // ---------------- Inline gestures -----------------

    pub fn inline_touch_start(&mut self, points: &[TouchPoint]) {
        self.inline_touch.begin(points);
    }

    pub fn inline_touch_end(&mut self, end: Option<TouchPoint>, at_ms: f64) {
        let release = self.inline_touch.finish(
            end,
            at_ms,
            false,
            self.config.jitter_px,
            self.config.double_tap_ms,
        );
        if let Release::Swipe { dx } = release {
            if dx.abs() > self.config.swipe_commit_px {
                if dx < 0.0 { self.next() } else { self.prev() }
            }
        }
    }

    // ---------------- Modal gestures -----------------

    pub fn modal_touch_start(&mut self, points: &[TouchPoint], stage_width: f64) {
        if !self.modal.is_open {
            return;
        }
        self.flush_settle();
        if self.fade != ImageFade::Idle {
            self.timeline.cancel();
            self.show_current();
        }
        if stage_width > 0.0 {
            self.stage_width = stage_width;
        }
        self.modal_touch.begin(points);
        if self.modal_touch.phase == GesturePhase::Pinching {
            self.cancel_roll();
        }
    }

    pub fn modal_touch_move(&mut self, points: &[TouchPoint]) {
        if !self.modal.is_open {
            return;
        }
        let intent = self
            .modal_touch
            .track(points, self.zoom.is_zoomed(), self.config.jitter_px);
        match intent {
            TouchIntent::Pan { dx, dy } => {
                self.cancel_roll();
                self.zoom.pan(dx, dy);
            }
            TouchIntent::Pinch { factor } => {
                self.cancel_roll();
                self.zoom.scale_by(factor, self.config.max_zoom);
            }
            TouchIntent::SwipePreview { dx } => self.preview_roll(dx),
            TouchIntent::None => {}
        }
    }

    pub fn modal_touch_end(&mut self, end: Option<TouchPoint>, at_ms: f64) {
        if !self.modal.is_open {
            self.modal_touch.cancel();
            return;
        }
        let release = self.modal_touch.finish(
            end,
            at_ms,
            self.zoom.is_zoomed(),
            self.config.jitter_px,
            self.config.double_tap_ms,
        );
        match release {
            Release::DoubleTap => {
                self.cancel_roll();
                self.zoom
                    .toggle(self.config.double_tap_zoom, self.config.max_zoom);
            }
            Release::PinchEnd => self.zoom.settle(),
            Release::Swipe { dx } => self.resolve_swipe(dx),
            Release::Tap | Release::PanEnd | Release::Cancelled => {}
        }
    }

    // ---------------- Film roll -----------------

    fn preview_roll(&mut self, dx: f64) {
        if self.slides.len() < 2 {
            return;
        }
        let direction = FilmRoll::direction_for(dx);
        match self.film_roll.as_mut() {
            Some(roll) if roll.direction == direction && roll.phase == RollPhase::Dragging => {
                roll.offset = dx;
            }
            _ => {
                let ghost_index = self.carousel.offset(direction.into());
                self.film_roll = Some(FilmRoll::new(dx, ghost_index));
                self.modal.ghost = Some(ghost_index);
            }
        }
    }

    fn resolve_swipe(&mut self, dx: f64) {
        if self.slides.len() < 2 {
            self.film_roll = None;
            return;
        }
        let direction = FilmRoll::direction_for(dx);
        let mut roll = match self.film_roll {
            Some(roll) if roll.direction == direction => roll,
            _ => FilmRoll::new(dx, self.carousel.offset(direction.into())),
        };
        roll.offset = dx;
        roll.phase = if dx.abs() > self.config.swipe_commit_px {
            RollPhase::Committing
        } else {
            RollPhase::Reverting
        };
        self.modal.ghost = Some(roll.ghost_index);
        self.film_roll = Some(roll);
        self.timeline
            .schedule(self.config.settle_ms, Deferred::SwipeSettle);
    }

    /// Drop an in-flight roll without navigating.
    fn cancel_roll(&mut self) {
        if self.film_roll.take().is_some() && self.timeline.is_pending(Deferred::SwipeSettle) {
            self.timeline.cancel();
        }
    }

    /// Complete a settling commit right away so the next interaction starts
    /// from a resolved index.
    fn flush_settle(&mut self) {
        let Some(roll) = self.film_roll.take() else {
            return;
        };
        if self.timeline.is_pending(Deferred::SwipeSettle) {
            self.timeline.cancel();
        }
        if roll.phase == RollPhase::Committing {
            self.commit_roll(roll);
        }
    }

    fn commit_roll(&mut self, roll: FilmRoll) {
        let before = self.carousel.current;
        self.carousel.go_to(before as i64 + i64::from(roll.direction));
        log::debug!("story: swiped {} -> {}", before, self.carousel.current);
        self.show_current();
    }

    // ---------------- Timeline -----------------

    /// Run a due timeline step. Returns false for stale tokens.
    pub fn fire(&mut self, token: u64) -> bool {
        let Some(task) = self.timeline.take(token) else {
            return false;
        };
        match task {
            Deferred::FadeSwap => {
                self.show_current();
                if self.modal.is_open {
                    self.fade = ImageFade::FadingIn;
                    self.timeline
                        .schedule(self.config.fade_ms, Deferred::FadeSettle);
                }
            }
            Deferred::FadeSettle => self.fade = ImageFade::Idle,
            Deferred::SwipeSettle => {
                if let Some(roll) = self.film_roll.take() {
                    if roll.phase == RollPhase::Committing {
                        self.commit_roll(roll);
                    }
                }
            }
        }
        true
    }

    // ---------------- Rendering -----------------

    pub fn primary_style(&self) -> ImageStyle {
        if let Some(roll) = &self.film_roll {
            let frame = roll.primary_frame(self.stage_width);
            return ImageStyle {
                transform: format!("translateX({:.2}px)", frame.translate_x),
                opacity: frame.opacity,
                transition: frame
                    .animated
                    .then(|| format!("transform {}ms linear", self.config.settle_ms)),
                visible: true,
            };
        }
        let opacity = match self.fade {
            ImageFade::FadingOut => self.config.fade_opacity,
            ImageFade::Idle | ImageFade::FadingIn => 1.0,
        };
        ImageStyle {
            transform: self.zoom.css_transform(),
            opacity,
            transition: Some(format!("opacity {}ms ease", self.config.fade_ms)),
            visible: true,
        }
    }

    pub fn ghost_style(&self) -> ImageStyle {
        match &self.film_roll {
            Some(roll) => {
                let frame = roll.ghost_frame(self.stage_width);
                let settle = self.config.settle_ms;
                ImageStyle {
                    transform: format!("translateX({:.2}px)", frame.translate_x),
                    opacity: frame.opacity,
                    transition: frame.animated.then(|| {
                        format!("transform {settle}ms linear, opacity {settle}ms linear")
                    }),
                    visible: true,
                }
            }
            None => ImageStyle {
                transform: "none".to_string(),
                opacity: 0.0,
                transition: None,
                visible: false,
            },
        }
    }
}

impl Reducible for StoryState {
    type Action = StoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StoryAction::*;
        let mut new = (*self).clone();
        match action {
            Next => new.next(),
            Prev => new.prev(),
            GoTo(index) => new.go_to(index),
            OpenModal => {
                if self.modal.is_open {
                    return self;
                }
                new.open_modal();
            }
            CloseModal => {
                if !self.modal.is_open {
                    return self;
                }
                new.close_modal();
            }
            ToggleControls => new.toggle_controls(),
            Resize(viewport) => new.resize(viewport),
            InlineTouchStart(points) => new.inline_touch_start(&points),
            InlineTouchEnd { end, at_ms } => new.inline_touch_end(end, at_ms),
            ModalTouchStart {
                points,
                stage_width,
            } => new.modal_touch_start(&points, stage_width),
            ModalTouchMove(points) => new.modal_touch_move(&points),
            ModalTouchEnd { end, at_ms } => new.modal_touch_end(end, at_ms),
            Fire(token) => {
                if !new.fire(token) {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SlideRole, role_of};
    use proptest::prelude::*;

    fn slides(n: usize) -> Rc<Vec<Slide>> {
        Rc::new(
            (0..n)
                .map(|i| Slide {
                    src: format!("images/story/{i}.webp"),
                    alt: format!("Story photo {i}"),
                })
                .collect(),
        )
    }

    fn story(n: usize) -> StoryState {
        StoryState::new(slides(n), Rc::new(CarouselConfig::default()))
    }

    fn pt(x: f64) -> TouchPoint {
        TouchPoint::new(x, 200.0)
    }

    fn fire_pending(state: &mut StoryState) {
        let token = state.timeline.pending().expect("nothing scheduled").token;
        assert!(state.fire(token));
    }

    fn modal_swipe(state: &mut StoryState, dx: f64) {
        state.modal_touch_start(&[pt(300.0)], 400.0);
        state.modal_touch_move(&[pt(300.0 + dx / 2.0)]);
        state.modal_touch_move(&[pt(300.0 + dx)]);
        state.modal_touch_end(Some(pt(300.0 + dx)), 1_000.0);
    }

    fn double_tap(state: &mut StoryState, first_ms: f64, second_ms: f64) {
        for at in [first_ms, second_ms] {
            state.modal_touch_start(&[pt(100.0)], 400.0);
            state.modal_touch_end(Some(pt(100.0)), at);
        }
    }

    #[test]
    fn prev_then_three_nexts() {
        let mut state = story(5);
        state.prev();
        assert_eq!(state.carousel.current, 4);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.carousel.current, 2);
    }

    #[test]
    fn go_to_wraps_out_of_range_indices() {
        let mut state = story(5);
        state.go_to(12);
        assert_eq!(state.carousel.current, 2);
        state.carousel.go_to(-1);
        assert_eq!(state.carousel.current, 4);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(total in 1usize..12, steps in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut state = story(total);
            for forward in steps {
                if forward { state.next() } else { state.prev() }
                prop_assert!(state.carousel.current < total);
            }
        }

        #[test]
        fn next_prev_round_trip(total in 1usize..12, start in 0usize..12) {
            let mut state = story(total);
            state.go_to(start);
            let origin = state.carousel.current;
            state.next();
            state.prev();
            prop_assert_eq!(state.carousel.current, origin);
            state.prev();
            state.next();
            prop_assert_eq!(state.carousel.current, origin);
        }
    }

    #[test]
    fn one_active_slide_for_every_index() {
        let mut state = story(6);
        for _ in 0..6 {
            let active = (0..6)
                .filter(|&i| role_of(i, state.carousel.current, 6) == SlideRole::Active)
                .count();
            assert_eq!(active, 1);
            state.next();
        }
    }

    #[test]
    fn open_modal_syncs_after_external_next() {
        let mut state = story(5);
        state.go_to(2);
        state.open_modal();
        assert_eq!(state.displayed_slide().unwrap().src, "images/story/2.webp");
        state.next();
        assert_eq!(state.fade, ImageFade::FadingOut);
        assert_eq!(state.primary_style().opacity, 0.5);
        fire_pending(&mut state);
        assert_eq!(state.modal.displayed, 3);
        assert_eq!(state.displayed_slide().unwrap().src, state.slides[3].src);
        assert_eq!(state.fade, ImageFade::FadingIn);
        fire_pending(&mut state);
        assert_eq!(state.fade, ImageFade::Idle);
        assert!(state.timeline.pending().is_none());
    }

    #[test]
    fn rapid_navigation_swaps_to_latest_index() {
        let mut state = story(5);
        state.open_modal();
        state.next();
        let stale = state.timeline.pending().unwrap().token;
        state.next();
        assert!(!state.fire(stale));
        assert_eq!(state.modal.displayed, 0);
        fire_pending(&mut state);
        assert_eq!(state.modal.displayed, 2);
    }

    #[test]
    fn opening_twice_is_a_noop() {
        let mut state = story(3);
        state.open_modal();
        state.modal.controls_hidden = true;
        let snapshot = state.clone();
        state.open_modal();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn close_resets_zoom_and_pending_steps() {
        let mut state = story(3);
        state.open_modal();
        state.zoom.toggle(2.0, 4.0);
        state.next();
        state.close_modal();
        assert!(!state.modal.is_open);
        assert_eq!(state.zoom, ZoomState::default());
        assert!(state.timeline.pending().is_none());
        assert_eq!(state.fade, ImageFade::Idle);
    }

    #[test]
    fn zoom_resets_when_fade_swaps_image() {
        let mut state = story(3);
        state.open_modal();
        state.zoom.toggle(2.0, 4.0);
        state.zoom.pan(30.0, 10.0);
        state.next();
        // still the old image while fading out
        assert_eq!(state.modal.displayed, 0);
        fire_pending(&mut state);
        assert_eq!(state.modal.displayed, 1);
        assert_eq!(state.zoom, ZoomState::default());
    }

    #[test]
    fn close_during_commit_settle_keeps_the_swipe() {
        let mut state = story(5);
        state.open_modal();
        modal_swipe(&mut state, -80.0);
        assert_eq!(state.film_roll.unwrap().phase, RollPhase::Committing);
        let stale = state.timeline.pending().unwrap().token;
        state.close_modal();
        assert_eq!(state.carousel.current, 1);
        assert!(state.film_roll.is_none());
        assert!(!state.fire(stale));
        assert_eq!(state.carousel.current, 1);
    }

    #[test]
    fn inline_swipe_threshold_boundary() {
        let mut state = story(5);
        state.inline_touch_start(&[pt(300.0)]);
        state.inline_touch_end(Some(pt(251.0)), 0.0);
        assert_eq!(state.carousel.current, 0);

        state.inline_touch_start(&[pt(300.0)]);
        state.inline_touch_end(Some(pt(249.0)), 500.0);
        assert_eq!(state.carousel.current, 1);

        state.inline_touch_start(&[pt(300.0)]);
        state.inline_touch_end(Some(pt(351.0)), 1_000.0);
        assert_eq!(state.carousel.current, 0);
    }

    #[test]
    fn modal_swipe_of_49px_reverts() {
        let mut state = story(5);
        state.open_modal();
        modal_swipe(&mut state, -49.0);
        assert_eq!(state.film_roll.unwrap().phase, RollPhase::Reverting);
        fire_pending(&mut state);
        assert_eq!(state.carousel.current, 0);
        assert!(state.film_roll.is_none());
    }

    #[test]
    fn modal_swipe_of_51px_commits_after_settle() {
        let mut state = story(5);
        state.open_modal();
        modal_swipe(&mut state, -51.0);
        let roll = state.film_roll.unwrap();
        assert_eq!(roll.phase, RollPhase::Committing);
        assert_eq!(roll.ghost_index, 1);
        assert_eq!(state.ghost_slide().unwrap().src, "images/story/1.webp");
        // index only moves once the settle animation has run
        assert_eq!(state.carousel.current, 0);
        assert_eq!(state.primary_style().transform, "translateX(-400.00px)");
        fire_pending(&mut state);
        assert_eq!(state.carousel.current, 1);
        assert_eq!(state.modal.displayed, 1);
        assert!(!state.ghost_style().visible);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut state = story(5);
        state.open_modal();
        modal_swipe(&mut state, 120.0);
        assert_eq!(state.film_roll.unwrap().ghost_index, 4);
        fire_pending(&mut state);
        assert_eq!(state.carousel.current, 4);
    }

    #[test]
    fn drag_positions_ghost_beside_current_image() {
        let mut state = story(5);
        state.open_modal();
        state.modal_touch_start(&[pt(300.0)], 400.0);
        state.modal_touch_move(&[pt(260.0)]);
        assert_eq!(state.primary_style().transform, "translateX(-40.00px)");
        let ghost = state.ghost_style();
        assert_eq!(ghost.transform, "translateX(360.00px)");
        assert_eq!(ghost.opacity, 1.0);
        assert!(ghost.visible);
    }

    #[test]
    fn touch_during_commit_settle_completes_it() {
        let mut state = story(5);
        state.open_modal();
        modal_swipe(&mut state, -80.0);
        let stale = state.timeline.pending().unwrap().token;
        state.modal_touch_start(&[pt(100.0)], 400.0);
        assert_eq!(state.carousel.current, 1);
        assert!(state.film_roll.is_none());
        assert!(!state.fire(stale));
    }

    #[test]
    fn double_tap_toggles_zoom_within_window() {
        let mut state = story(3);
        state.open_modal();
        double_tap(&mut state, 1_000.0, 1_300.0);
        assert_eq!(state.zoom.scale, 2.0);
        double_tap(&mut state, 2_000.0, 2_300.0);
        assert_eq!(state.zoom, ZoomState::default());
    }

    #[test]
    fn taps_301ms_apart_do_not_zoom() {
        let mut state = story(3);
        state.open_modal();
        double_tap(&mut state, 1_000.0, 1_301.0);
        assert_eq!(state.zoom.scale, 1.0);
    }

    #[test]
    fn zoomed_drag_pans_instead_of_swiping() {
        let mut state = story(3);
        state.open_modal();
        state.zoom.toggle(2.0, 4.0);
        state.modal_touch_start(&[pt(100.0)], 400.0);
        state.modal_touch_move(&[pt(180.0)]);
        state.modal_touch_end(Some(pt(180.0)), 5_000.0);
        assert_eq!(state.zoom.translate_x, 80.0);
        assert!(state.film_roll.is_none());
        assert!(state.timeline.pending().is_none());
        assert_eq!(state.carousel.current, 0);
    }

    #[test]
    fn pinch_cancels_film_roll_and_clamps() {
        let mut state = story(3);
        state.open_modal();
        state.modal_touch_start(&[pt(300.0)], 400.0);
        state.modal_touch_move(&[pt(250.0)]);
        assert!(state.film_roll.is_some());
        state.modal_touch_start(&[pt(250.0), pt(350.0)], 400.0);
        assert!(state.film_roll.is_none());
        state.modal_touch_move(&[pt(150.0), pt(450.0)]);
        state.modal_touch_move(&[pt(0.0), pt(900.0)]);
        assert_eq!(state.zoom.scale, 4.0);
        state.modal_touch_end(None, 9_000.0);
        assert_eq!(state.zoom.scale, 4.0);
        assert_eq!(state.carousel.current, 0);
    }

    #[test]
    fn single_slide_never_rolls() {
        let mut state = story(1);
        state.open_modal();
        modal_swipe(&mut state, -200.0);
        assert!(state.film_roll.is_none());
        assert!(state.timeline.pending().is_none());
        assert_eq!(state.carousel.current, 0);
    }

    #[test]
    fn stale_fire_leaves_state_untouched() {
        let state = Rc::new(story(4));
        let next = state.clone().reduce(StoryAction::Fire(42));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn controls_toggle_only_while_open() {
        let mut state = story(3);
        state.toggle_controls();
        assert!(!state.modal.controls_hidden);
        state.open_modal();
        state.toggle_controls();
        assert!(state.modal.controls_hidden);
        state.close_modal();
        state.open_modal();
        assert!(!state.modal.controls_hidden);
    }
}
