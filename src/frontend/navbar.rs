use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::dom::scroll_y;
use crate::navbar::{NavbarScroll, SCROLLED_CLASS};
use crate::navigation::{scroll_to_section, section_id_from_href};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#certifications", "Certifications"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that smooth-scrolls instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            if !href.starts_with('#') {
                return;
            }
            event.prevent_default();
            if let Some(section_id) = section_id_from_href(&href) {
                scroll_to_section(section_id);
            }
        })
    };

    html! {
        <a class={props.class.clone()} href={props.href.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub threshold: f64,
    pub brand: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);

    {
        let set_scrolled = scrolled.setter();
        let threshold = props.threshold;
        use_effect_with((), move |_| {
            let tracker = Rc::new(RefCell::new(NavbarScroll::new(threshold, scroll_y())));
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    let is_scrolled = tracker.borrow_mut().on_scroll(scroll_y());
                    set_scrolled.set(is_scrolled);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <nav class={classes!("navbar", scrolled.then_some(SCROLLED_CLASS))}>
            <SectionLink class="nav-brand" href="#home">{props.brand.clone()}</SectionLink>
            <ul class="nav-links">
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <li><SectionLink class="nav-link" href={*href}>{*label}</SectionLink></li>
                }) }
            </ul>
        </nav>
    }
}
