use gloo::events::EventListener;
use serde_json::json;
use std::rc::Rc;
use web_sys::{window, Element};
use yew::prelude::*;

use super::dom::{log_dom_error, IntersectionWatch};
use super::SchedulerHandle;
use crate::error::UiError;
use crate::particles::{JsRandom, ParticleField, PARTICLE_CLASS};
use crate::rate_limit::FrameDebounce;
use crate::reveal::RevealState;
use crate::skills::{SkillBar, SKILL_PROGRESS_CLASS};
use crate::telemetry::{log_event, LogLevel};
use crate::typing::{self, TextTarget, TypingAnimation};

#[derive(Clone, PartialEq)]
struct TypedText {
    text: String,
    cursor_visible: bool,
}

impl Default for TypedText {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor_visible: true,
        }
    }
}

enum TypedTextAction {
    Append(char),
    HideCursor,
}

impl Reducible for TypedText {
    type Action = TypedTextAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TypedTextAction::Append(ch) => next.text.push(ch),
            TypedTextAction::HideCursor => next.cursor_visible = false,
        }
        Rc::new(next)
    }
}

struct DispatchTarget(UseReducerDispatcher<TypedText>);

impl TextTarget for DispatchTarget {
    fn append_char(&self, ch: char) {
        self.0.dispatch(TypedTextAction::Append(ch));
    }

    fn hide_cursor(&self) {
        self.0.dispatch(TypedTextAction::HideCursor);
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedLineProps {
    pub text: AttrValue,
    pub speed_ms: u32,
    pub scheduler: SchedulerHandle,
}

#[function_component(TypedLine)]
pub fn typed_line(props: &TypedLineProps) -> Html {
    let typed = use_reducer(TypedText::default);

    {
        let dispatcher = typed.dispatcher();
        let text = props.text.clone();
        let speed_ms = props.speed_ms;
        let scheduler = props.scheduler.clone();
        use_effect_with((), move |_| {
            typing::start(
                TypingAnimation::new(&text, speed_ms),
                Rc::new(DispatchTarget(dispatcher)),
                scheduler.0,
            );
            || ()
        });
    }

    html! {
        <p class="hero-subtitle">
            <span id="typed-text">{typed.text.clone()}</span>
            <span
                id="cursor"
                class="typing-cursor"
                style={(!typed.cursor_visible).then_some("display: none;")}
            >
                {"|"}
            </span>
        </p>
    }
}

#[derive(Clone, PartialEq)]
struct ParticleLayer {
    field: ParticleField,
}

enum ParticleAction {
    Init,
    Regenerate,
}

impl Reducible for ParticleLayer {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut field = self.field.clone();
        let added = match action {
            ParticleAction::Init => field.init(&mut JsRandom),
            ParticleAction::Regenerate => field.regenerate(&mut JsRandom),
        };
        log_event(
            LogLevel::Debug,
            "particles.spawned",
            json!({ "added": added, "total": field.len() }),
        );
        Rc::new(Self { field })
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub count: usize,
    pub resize_debounce_ms: u32,
    pub scheduler: SchedulerHandle,
}

#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let count = props.count;
    let layer = use_reducer(move || ParticleLayer {
        field: ParticleField::new(count),
    });

    {
        let dispatcher = layer.dispatcher();
        let scheduler = props.scheduler.0.clone();
        let delay_ms = props.resize_debounce_ms;
        use_effect_with((), move |_| {
            dispatcher.dispatch(ParticleAction::Init);

            let on_resize = FrameDebounce::new(scheduler, delay_ms, move || {
                dispatcher.dispatch(ParticleAction::Regenerate);
            });
            let listener = window()
                .map(|win| EventListener::new(&win, "resize", move |_| on_resize.call()));

            move || drop(listener)
        });
    }

    html! {
        <div id="particles" class="particles" aria-hidden="true">
            { for layer.field.particles().iter().enumerate().map(|(index, particle)| html! {
                <div key={index} class={PARTICLE_CLASS} style={particle.css()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillMeterProps {
    pub name: AttrValue,
    pub level: AttrValue,
    pub threshold: f64,
}

#[function_component(SkillMeter)]
pub fn skill_meter(props: &SkillMeterProps) -> Html {
    let node = use_node_ref();
    let width = use_state_eq(|| None::<String>);

    {
        let node = node.clone();
        let set_width = width.setter();
        let mut bar = SkillBar::new(&props.level, props.threshold);
        let threshold = props.threshold;
        use_effect_with((), move |_| {
            let watch = node
                .cast::<Element>()
                .ok_or_else(|| UiError::missing(format!(".{SKILL_PROGRESS_CLASS}")))
                .and_then(|element| {
                    IntersectionWatch::observe(&element, threshold, None, move |ratio, hit| {
                        let already_applied = bar.applied_width().is_some();
                        if let Some(next) = bar.observe(ratio, hit) {
                            if !already_applied {
                                set_width.set(Some(next));
                            }
                        }
                    })
                })
                .map_err(|error| log_dom_error("skills.observe", &error))
                .ok();

            move || drop(watch)
        });
    }

    html! {
        <div class="skill-item">
            <div class="skill-info">
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-percent">{format!("{}%", props.level)}</span>
            </div>
            <div class="skill-bar">
                <div
                    ref={node}
                    class={SKILL_PROGRESS_CLASS}
                    data-level={props.level.clone()}
                    style={(*width).as_ref().map(|value| format!("width: {value};"))}
                />
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub options: RevealOptions,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let node = node.clone();
        let set_state = state.setter();
        let options = props.options.clone();
        use_effect_with((), move |_| {
            let mut current = RevealState::Hidden;
            let on_change = set_state.clone();
            let watch = node
                .cast::<Element>()
                .ok_or_else(|| UiError::missing("reveal target"))
                .and_then(|element| {
                    IntersectionWatch::observe(
                        &element,
                        options.threshold,
                        Some(options.root_margin.as_str()),
                        move |_, hit| {
                            let next = current.on_intersection(hit);
                            if next != current {
                                current = next;
                                on_change.set(next);
                            }
                        },
                    )
                })
                .map_err(|error| {
                    log_dom_error("reveal.observe", &error);
                    set_state.set(RevealState::Hidden.without_observer());
                })
                .ok();

            move || drop(watch)
        });
    }

    html! {
        <div ref={node} class={props.class.clone()} style={state.style()}>
            { for props.children.iter() }
        </div>
    }
}
