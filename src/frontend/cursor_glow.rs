use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::dom::{log_dom_error, query_all, set_style, viewport_width};
use crate::cursor::{self, CursorGlow, GLOW_BASE_STYLE, GLOW_CLASS, INTERACTIVE_SELECTOR};
use crate::error::UiError;

#[derive(Properties, PartialEq)]
pub struct GlowProps {
    pub min_width: f64,
}

fn attach_listeners(glow: HtmlElement) -> Result<Vec<EventListener>, UiError> {
    let document = window()
        .ok_or(UiError::MissingWindow)?
        .document()
        .ok_or(UiError::MissingDocument)?;
    let model = Rc::new(RefCell::new(CursorGlow::new()));
    let mut listeners = Vec::new();

    {
        let model = model.clone();
        let glow = glow.clone();
        listeners.push(EventListener::new(&document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (left, top) = model
                .borrow_mut()
                .on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
            let _ = set_style(&glow, "left", &format!("{left}px"));
            let _ = set_style(&glow, "top", &format!("{top}px"));
        }));
    }

    for element in query_all(INTERACTIVE_SELECTOR)? {
        let enter_model = model.clone();
        let enter_glow = glow.clone();
        listeners.push(EventListener::new(&element, "mouseenter", move |_| {
            let transform = enter_model.borrow_mut().on_hover_enter();
            let _ = set_style(&enter_glow, "transform", &transform);
        }));

        let leave_model = model.clone();
        let leave_glow = glow.clone();
        listeners.push(EventListener::new(&element, "mouseleave", move |_| {
            let transform = leave_model.borrow_mut().on_hover_leave();
            let _ = set_style(&leave_glow, "transform", &transform);
        }));
    }

    Ok(listeners)
}

/// Pointer-following glow, desktop widths only.
#[function_component(PointerGlow)]
pub fn pointer_glow(props: &GlowProps) -> Html {
    let min_width = props.min_width;
    let enabled = use_state(move || cursor::enabled_for(viewport_width(), min_width));
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with(*enabled, move |enabled| {
            let listeners = if *enabled {
                node.cast::<HtmlElement>()
                    .ok_or_else(|| UiError::missing(format!(".{GLOW_CLASS}")))
                    .and_then(attach_listeners)
                    .map_err(|error| log_dom_error("cursor.attach", &error))
                    .unwrap_or_default()
            } else {
                Vec::new()
            };

            move || drop(listeners)
        });
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <div ref={node} class={GLOW_CLASS} style={GLOW_BASE_STYLE} aria-hidden="true" />
    }
}
