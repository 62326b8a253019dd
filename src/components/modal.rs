use wasm_bindgen::JsCast;
use web_sys::{HtmlDialogElement, HtmlElement, KeyboardEvent, Node, TouchEvent};
use yew::prelude::*;

use super::{nav_controls::NavControls, pagination::Pagination};
use crate::model::{StoryAction, StoryState};
use crate::util::{Listener, lifted_point, set_scroll_locked, touch_points};

#[derive(Properties, PartialEq, Clone)]
pub struct StoryModalProps {
    pub story: UseReducerHandle<StoryState>,
}

#[function_component(StoryModal)]
pub fn story_modal(props: &StoryModalProps) -> Html {
    let dialog_ref = use_node_ref();
    let stage_ref = use_node_ref();
    let story = props.story.clone();
    let is_open = story.modal.is_open;

    // Native dialog and page scroll follow the open flag
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with(is_open, move |&open| {
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                if open && !dialog.open() {
                    if let Err(err) = dialog.show_modal() {
                        log::warn!("story: showModal failed: {:?}", err);
                    }
                } else if !open && dialog.open() {
                    dialog.close();
                }
            }
            if open {
                set_scroll_locked(true);
            }
            move || {
                if open {
                    set_scroll_locked(false);
                }
            }
        });
    }

    // Touch listeners go on directly so touchmove can cancel page scrolling.
    {
        let dialog_ref = dialog_ref.clone();
        let stage_ref = stage_ref.clone();
        let dispatcher = story.dispatcher();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(stage) = stage_ref.cast::<HtmlElement>() {
                let d = dispatcher.clone();
                let measured = stage.clone();
                listeners.push(Listener::new(&stage, "touchstart", move |event| {
                    let e = event.unchecked_ref::<TouchEvent>();
                    d.dispatch(StoryAction::ModalTouchStart {
                        points: touch_points(&e.touches()),
                        stage_width: measured.client_width() as f64,
                    });
                }));
                let d = dispatcher.clone();
                listeners.push(Listener::new(&stage, "touchmove", move |event| {
                    event.prevent_default();
                    let e = event.unchecked_ref::<TouchEvent>();
                    d.dispatch(StoryAction::ModalTouchMove(touch_points(&e.touches())));
                }));
                for kind in ["touchend", "touchcancel"] {
                    let d = dispatcher.clone();
                    listeners.push(Listener::new(&stage, kind, move |event| {
                        let e = event.unchecked_ref::<TouchEvent>();
                        d.dispatch(StoryAction::ModalTouchEnd {
                            end: lifted_point(e),
                            at_ms: event.time_stamp(),
                        });
                    }));
                }
            }
            // Escape closes the dialog natively; mirror that into state
            if let Some(dialog) = dialog_ref.cast::<HtmlElement>() {
                let d = dispatcher.clone();
                listeners.push(Listener::new(&dialog, "close", move |_| {
                    d.dispatch(StoryAction::CloseModal)
                }));
            }
            move || drop(listeners)
        });
    }

    // Arrow keys while open
    {
        let dispatcher = story.dispatcher();
        use_effect_with(is_open, move |&open| {
            let keys = if open {
                web_sys::window().map(|window| {
                    Listener::new(&window, "keydown", move |event| {
                        let e = event.unchecked_ref::<KeyboardEvent>();
                        match e.key().as_str() {
                            "ArrowLeft" => {
                                e.prevent_default();
                                dispatcher.dispatch(StoryAction::Prev);
                            }
                            "ArrowRight" => {
                                e.prevent_default();
                                dispatcher.dispatch(StoryAction::Next);
                            }
                            _ => {}
                        }
                    })
                })
            } else {
                None
            };
            move || drop(keys)
        });
    }

    let close_cb = {
        let dispatcher = story.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(StoryAction::CloseModal);
        })
    };
    // Only clicks that land on the dialog itself (its backdrop) close it
    let backdrop_cb = {
        let dispatcher = story.dispatcher();
        let dialog_ref = dialog_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = match (e.target(), dialog_ref.get()) {
                (Some(target), Some(dialog)) => dialog.is_same_node(target.dyn_ref::<Node>()),
                _ => false,
            };
            if on_backdrop {
                dispatcher.dispatch(StoryAction::CloseModal);
            }
        })
    };
    let toggle_controls_cb = {
        let dispatcher = story.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(StoryAction::ToggleControls);
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
    let on_select = {
        let dispatcher = story.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(StoryAction::GoTo(index)))
    };

    let (src, alt) = story
        .displayed_slide()
        .map(|s| (s.src.clone(), s.alt.clone()))
        .unwrap_or_default();
    let ghost_src = story.ghost_slide().map(|s| s.src.clone());

    html! {
        <dialog ref={dialog_ref} class={classes!("story-modal", is_open.then_some("open"), story.modal.controls_hidden.then_some("controls-hidden"))} aria-label="Story photos" onclick={backdrop_cb}>
            <button type="button" class="modal-close" aria-label="Close" onclick={close_cb}>{"×"}</button>
            <div ref={stage_ref} class="modal-stage">
                <img class="modal-ghost" src={ghost_src} alt="" aria-hidden="true" style={story.ghost_style().css()} />
                <img class="modal-image" {src} {alt} style={story.primary_style().css()} onclick={toggle_controls_cb} />
            </div>
            <NavControls class="modal-nav" {on_prev} {on_next} />
            <Pagination total={story.slides.len()} current={story.carousel.current} {on_select} class="modal-pagination" />
        </dialog>
    }
}
