use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{carousel::Carousel, modal::StoryModal, pagination::Pagination};
use crate::config::CarouselConfig;
use crate::model::{Slide, StoryAction, StoryState};
use crate::state::Scheduled;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub slides: Rc<Vec<Slide>>,
    pub config: Rc<CarouselConfig>,
}

// Superseded timers are not cleared: they fire with a stale token, which the
// reducer ignores, and the one-shot closure frees itself.
fn arm(step: Scheduled, dispatcher: UseReducerDispatcher<StoryState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let fire = Closure::once_into_js(move || dispatcher.dispatch(StoryAction::Fire(step.token)));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref(),
            step.delay_ms as i32,
        )
        .is_err()
    {
        log::warn!("story: could not schedule {:?}", step.task);
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let story = {
        let slides = props.slides.clone();
        let config = props.config.clone();
        use_reducer(move || StoryState::new(slides, config))
    };

    {
        let dispatcher = story.dispatcher();
        use_effect_with(story.timeline.pending(), move |pending| {
            if let Some(step) = *pending {
                arm(step, dispatcher);
            }
            || ()
        });
    }

    let on_select = {
        let dispatcher = story.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(StoryAction::GoTo(index)))
    };

    html! {<div class="story">
        <Carousel story={story.clone()} />
        <Pagination total={story.slides.len()} current={story.carousel.current} {on_select} />
        <StoryModal story={story.clone()} />
    </div>}
}
