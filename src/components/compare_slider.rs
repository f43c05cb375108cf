use yew::prelude::*;
use web_sys::{Element, MouseEvent, TouchEvent};

#[derive(Properties, PartialEq)]
pub struct CompareSliderProps {
    pub before_src: AttrValue,
    pub after_src: AttrValue,
    /// Divider position in percent: 0 shows only the "after" image,
    /// 100 only the "before" image.
    pub position: f64,
    /// While true the autoplay owns the divider and dragging is ignored.
    pub disabled: bool,
    pub onchange: Callback<f64>,
    #[prop_or(AttrValue::Static("Antes"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("Después"))]
    pub after_label: AttrValue,
}

fn position_from_client_x(node: &NodeRef, client_x: f64) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    Some(((client_x - rect.left()) / rect.width() * 100.0).clamp(0.0, 100.0))
}

#[function_component(CompareSlider)]
pub fn compare_slider(props: &CompareSliderProps) -> Html {
    let container = use_node_ref();
    let dragging = use_mut_ref(|| false);

    let position = props.position.clamp(0.0, 100.0);

    let on_mouse_down = {
        let container = container.clone();
        let dragging = dragging.clone();
        let onchange = props.onchange.clone();
        let disabled = props.disabled;
        Callback::from(move |e: MouseEvent| {
            if disabled {
                return;
            }
            e.prevent_default();
            *dragging.borrow_mut() = true;
            if let Some(position) = position_from_client_x(&container, e.client_x() as f64) {
                onchange.emit(position);
            }
        })
    };

    let on_mouse_move = {
        let container = container.clone();
        let dragging = dragging.clone();
        let onchange = props.onchange.clone();
        let disabled = props.disabled;
        Callback::from(move |e: MouseEvent| {
            if disabled || !*dragging.borrow() {
                return;
            }
            if let Some(position) = position_from_client_x(&container, e.client_x() as f64) {
                onchange.emit(position);
            }
        })
    };

    let end_drag = {
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| {
            *dragging.borrow_mut() = false;
        })
    };

    let on_touch_start = {
        let container = container.clone();
        let dragging = dragging.clone();
        let onchange = props.onchange.clone();
        let disabled = props.disabled;
        Callback::from(move |e: TouchEvent| {
            if disabled {
                return;
            }
            if let Some(touch) = e.touches().item(0) {
                *dragging.borrow_mut() = true;
                if let Some(position) =
                    position_from_client_x(&container, touch.client_x() as f64)
                {
                    onchange.emit(position);
                }
            }
        })
    };

    let on_touch_move = {
        let container = container.clone();
        let dragging = dragging.clone();
        let onchange = props.onchange.clone();
        let disabled = props.disabled;
        Callback::from(move |e: TouchEvent| {
            if disabled || !*dragging.borrow() {
                return;
            }
            if let Some(touch) = e.touches().item(0) {
                e.prevent_default();
                if let Some(position) =
                    position_from_client_x(&container, touch.client_x() as f64)
                {
                    onchange.emit(position);
                }
            }
        })
    };

    let on_touch_end = {
        let dragging = dragging.clone();
        Callback::from(move |_: TouchEvent| {
            *dragging.borrow_mut() = false;
        })
    };

    let container_class = if props.disabled {
        "compare-slider"
    } else {
        "compare-slider draggable"
    };

    // The "after" photo is the base layer; the "before" photo sits on top,
    // clipped at the divider.
    let before_clip = format!("clip-path: inset(0 {}% 0 0);", 100.0 - position);
    let divider_style = format!("left: {}%;", position);

    html! {
        <div
            ref={container.clone()}
            class={container_class}
            onmousedown={on_mouse_down}
            onmousemove={on_mouse_move}
            onmouseup={end_drag.clone()}
            onmouseleave={end_drag}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
        >
            <style>
                {r#"
                    .compare-slider {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        overflow: hidden;
                        border-radius: 0.375rem;
                        user-select: none;
                    }
                    .compare-slider.draggable {
                        cursor: ew-resize;
                    }
                    .compare-slider .compare-layer {
                        position: absolute;
                        inset: 0;
                    }
                    .compare-slider .compare-layer img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 0.375rem;
                        pointer-events: none;
                    }
                    .compare-slider .compare-badge {
                        position: absolute;
                        top: 0.5rem;
                        padding: 0.15rem 0.5rem;
                        border-radius: 0.25rem;
                        font-size: 0.85rem;
                        color: #fff;
                        z-index: 2;
                    }
                    .compare-slider .compare-badge.before {
                        left: 0.5rem;
                        background: rgba(180, 50, 40, 0.85);
                    }
                    .compare-slider .compare-badge.after {
                        right: 0.5rem;
                        background: rgba(40, 120, 60, 0.85);
                    }
                    .compare-slider .compare-divider {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        margin-left: -1px;
                        background: #fff;
                        box-shadow: 0 0 6px rgba(0, 0, 0, 0.4);
                        z-index: 3;
                    }
                    .compare-slider .compare-divider::after {
                        content: '';
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 28px;
                        height: 28px;
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: 0 2px 6px rgba(0, 0, 0, 0.4);
                    }
                "#}
            </style>
            <div class="compare-layer">
                <img src={props.after_src.clone()} alt={props.after_label.clone()} />
                <span class="compare-badge after">{props.after_label.clone()}</span>
            </div>
            <div class="compare-layer" style={before_clip}>
                <img src={props.before_src.clone()} alt={props.before_label.clone()} />
                <span class="compare-badge before">{props.before_label.clone()}</span>
            </div>
            <div class="compare-divider" style={divider_style}></div>
        </div>
    }
}
