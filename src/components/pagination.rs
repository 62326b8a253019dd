use yew::prelude::*;

use crate::state::dot_flags;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub total: usize,
    pub current: usize,
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let dots = dot_flags(props.total, props.current)
        .into_iter()
        .enumerate()
        .map(|(index, active)| {
            let onclick = {
                let cb = props.on_select.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    cb.emit(index);
                })
            };
            html! { <button type="button" class={classes!("dot", active.then_some("active"))} aria-label={format!("Photo {}", index + 1)} aria-current={if active { "true" } else { "false" }} {onclick}></button> }
        });
    html! { <div class={classes!("story-pagination", props.class.clone())}>{ for dots }</div> }
}
