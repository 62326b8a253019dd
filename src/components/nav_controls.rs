use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavControlsProps {
    pub class: &'static str,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(NavControls)]
pub fn nav_controls(props: &NavControlsProps) -> Html {
    // Both buttons sit inside clickable surfaces (slides, dialog backdrop).
    let prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let next = {
        let cb = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    html! {<>
        <button type="button" class={classes!(props.class, "prev")} aria-label="Previous photo" onclick={prev}>{"‹"}</button>
        <button type="button" class={classes!(props.class, "next")} aria-label="Next photo" onclick={next}>{"›"}</button>
    </>}
}
