use web_sys::Element;
use yew::prelude::*;

use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct ColorButtonProps {
    pub id: u64,
    pub background: AttrValue,
    pub text_color: AttrValue,
    pub label: AttrValue,
    pub on_click: Callback<u64>,
}

/// One spawned game button. Renders hidden first, measures its laid-out size,
/// then places itself at a random viewport position; the size is unknown
/// before the element is attached.
#[function_component(ColorButtonView)]
pub fn color_button(props: &ColorButtonProps) -> Html {
    let node = use_node_ref();
    let position = use_state(|| None::<(f64, f64)>);

    {
        let node = node.clone();
        let position = position.clone();
        use_effect_with((), move |_| {
            if let Some(el) = node.cast::<Element>() {
                position.set(Some(util::random_position(&el)));
            }
            || ()
        });
    }

    let onclick = {
        let cb = props.on_click.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    let style = match *position {
        Some((left, top)) => format!(
            "position:absolute; left:{}px; top:{}px; background-color:{}; color:{}; padding:6px 12px; border:1px solid rgba(0,0,0,0.3); border-radius:6px; cursor:pointer;",
            left, top, props.background, props.text_color
        ),
        None => format!(
            "position:absolute; visibility:hidden; background-color:{}; color:{}; padding:6px 12px; border:1px solid rgba(0,0,0,0.3); border-radius:6px; cursor:pointer;",
            props.background, props.text_color
        ),
    };

    html! {
        <button class="color-button" ref={node} style={style} onclick={onclick}>
            { props.label.clone() }
        </button>
    }
}
