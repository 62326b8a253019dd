use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::Element;

mod components;
mod config;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use config::CarouselConfig;
use model::Slide;

const ROOT_ID: &str = "story-root";
const SLIDE_IMAGES: &str = ".story-slide img";
const CONFIG_ATTR: &str = "data-carousel-config";

/// Slides from the static fallback markup, in document order.
fn read_slides(root: &Element) -> Vec<Slide> {
    let Ok(images) = root.query_selector_all(SLIDE_IMAGES) else {
        return Vec::new();
    };
    (0..images.length())
        .filter_map(|i| images.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|img| {
            Some(Slide {
                src: img.get_attribute("src")?,
                alt: img.get_attribute("alt").unwrap_or_default(),
            })
        })
        .collect()
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ID))
    else {
        log::info!("story: no #{ROOT_ID} on this page, carousel disabled");
        return;
    };
    let slides = read_slides(&root);
    if slides.is_empty() {
        log::info!("story: no slides found, carousel disabled");
        return;
    }
    let config = CarouselConfig::from_json_or_default(root.get_attribute(CONFIG_ATTR).as_deref());
    log::info!("story: mounting carousel with {} slides", slides.len());

    // Replaces the static markup inside the root.
    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            slides: Rc::new(slides),
            config: Rc::new(config),
        },
    )
    .render();
}
