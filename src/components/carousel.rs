use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use super::nav_controls::NavControls;
use crate::model::{StoryAction, StoryState};
use crate::state::{SlideRole, Viewport, role_of, side_transform};
use crate::util::{Listener, lifted_point, touch_points, window_width};

#[derive(Properties, PartialEq, Clone)]
pub struct CarouselProps {
    pub story: UseReducerHandle<StoryState>,
}

fn measure(container_ref: &NodeRef) -> Option<Viewport> {
    let container = container_ref.cast::<HtmlElement>()?;
    let card_width = container
        .query_selector(".story-slide.active")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_width() as f64)
        .unwrap_or(0.0);
    Some(Viewport {
        viewport_width: window_width(),
        container_width: container.client_width() as f64,
        card_width,
    })
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let container_ref = use_node_ref();
    let story = props.story.clone();

    // Measure once mounted, then again after each burst of resizes settles
    {
        let container_ref = container_ref.clone();
        let dispatcher = story.dispatcher();
        let debounce_ms = story.config.resize_debounce_ms;
        use_effect_with((), move |_| {
            let remeasure: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(viewport) = measure(&container_ref) {
                    dispatcher.dispatch(StoryAction::Resize(viewport));
                }
            });
            remeasure();

            let timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
            let settled: Rc<Closure<dyn FnMut()>> = {
                let timer = timer.clone();
                let remeasure = remeasure.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    timer.borrow_mut().take();
                    remeasure();
                }) as Box<dyn FnMut()>))
            };
            let resize = web_sys::window().map(|window| {
                let timer = timer.clone();
                let settled = settled.clone();
                Listener::new(&window, "resize", move |_| {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    if let Some(id) = timer.borrow_mut().take() {
                        window.clear_timeout_with_handle(id);
                    }
                    let callback: &Closure<dyn FnMut()> = &settled;
                    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        callback.as_ref().unchecked_ref(),
                        debounce_ms as i32,
                    ) {
                        Ok(id) => *timer.borrow_mut() = Some(id),
                        Err(_) => log::warn!("story: could not debounce resize"),
                    }
                })
            });
            move || {
                drop(resize);
                if let (Some(id), Some(window)) = (timer.borrow_mut().take(), web_sys::window()) {
                    window.clear_timeout_with_handle(id);
                }
                drop(settled);
            }
        });
    }

    let ontouchstart = {
        let dispatcher = story.dispatcher();
        Callback::from(move |e: TouchEvent| {
            dispatcher.dispatch(StoryAction::InlineTouchStart(touch_points(&e.touches())));
        })
    };
    let ontouchend = {
        let dispatcher = story.dispatcher();
        Callback::from(move |e: TouchEvent| {
            dispatcher.dispatch(StoryAction::InlineTouchEnd {
                end: lifted_point(&e),
                at_ms: e.time_stamp(),
            });
        })
    };
    let on_prev = {
        let dispatcher = story.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(StoryAction::Prev))
    };
    let on_next = {
        let dispatcher = story.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(StoryAction::Next))
    };

    let total = story.slides.len();
    let current = story.carousel.current;
    let slides = story.slides.iter().enumerate().map(|(index, slide)| {
        let role = role_of(index, current, total);
        let style = story
            .viewport
            .as_ref()
            .and_then(|v| side_transform(role, v, &story.config))
            .map(|t| t.css());
        // Tapping a peeking side card brings it to the front
        let onclick = {
            let dispatcher = story.dispatcher();
            Callback::from(move |_: MouseEvent| match role {
                SlideRole::Prev => dispatcher.dispatch(StoryAction::Prev),
                SlideRole::Next => dispatcher.dispatch(StoryAction::Next),
                SlideRole::Active | SlideRole::Hidden => {}
            })
        };
        let open = {
            let dispatcher = story.dispatcher();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                dispatcher.dispatch(StoryAction::OpenModal);
            })
        };
        html! {
            <div class={classes!("story-slide", role.class())} aria-hidden={if role == SlideRole::Active { "false" } else { "true" }} {style} {onclick}>
                <img src={slide.src.clone()} alt={slide.alt.clone()} loading="lazy" />
                <button type="button" class="fullscreen-trigger" aria-label="View full screen" onclick={open}>{"⤢"}</button>
            </div>
        }
    });

    html! {<div class="story-carousel-wrap">
        <div ref={container_ref} class="story-carousel" {ontouchstart} {ontouchend}>
            { for slides }
        </div>
        <NavControls class="story-nav" {on_prev} {on_next} />
    </div>}
}
