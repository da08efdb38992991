mod animations;
mod contact_form;
mod cursor_glow;
mod dom;
mod navbar;

use gloo::events::EventListener;
use js_sys::Reflect;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::config::{PageConfig, CONFIG_JSON_ATTRIBUTE};
use crate::error::UiError;
use crate::navigation;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::telemetry::{log_event, set_min_level, LogLevel};
use animations::{Particles, Reveal, RevealOptions, SkillMeter, TypedLine};
use contact_form::ContactSection;
use cursor_glow::PointerGlow;
use dom::{log_dom_error, set_style};
use navbar::{Navbar, SectionLink};

const OWNER_NAME: &str = "Alex Rivera";

const SKILLS: &[(&str, &str)] = &[
    ("HTML & CSS", "95"),
    ("JavaScript / TypeScript", "90"),
    ("React", "85"),
    ("Rust & WebAssembly", "75"),
    ("UI / Motion Design", "80"),
];

const EXPERIENCE: &[(&str, &str, &str)] = &[
    (
        "2023 - Present",
        "Frontend Engineer, Northwind Labs",
        "Design-system components and animation tooling for a data platform.",
    ),
    (
        "2021 - 2023",
        "UI Developer, Brightline Studio",
        "Marketing sites and interactive product demos for early-stage startups.",
    ),
    (
        "2019 - 2021",
        "Freelance Web Developer",
        "Portfolio and storefront builds with an emphasis on performance.",
    ),
];

const CERTIFICATIONS: &[(&str, &str)] = &[
    ("Responsive Web Design", "freeCodeCamp"),
    ("Web Accessibility Fundamentals", "W3C"),
    ("Meta Front-End Developer", "Coursera"),
];

/// Shared scheduler handed to the components that animate over time.
#[derive(Clone)]
pub struct SchedulerHandle(pub Rc<dyn Scheduler>);

impl PartialEq for SchedulerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<PageConfig>,
    scheduler: SchedulerHandle,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let reveal = RevealOptions {
        threshold: config.reveal_threshold,
        root_margin: AttrValue::from(config.reveal_root_margin.clone()),
    };

    html! {
        <>
            <Navbar threshold={config.navbar_threshold} brand={OWNER_NAME} />

            <header id="home" class="hero">
                <Particles
                    count={config.particle_count}
                    resize_debounce_ms={config.resize_debounce_ms}
                    scheduler={props.scheduler.clone()}
                />
                <div class="hero-content">
                    <h1 class="hero-title">{format!("Hi, I'm {OWNER_NAME}")}</h1>
                    <TypedLine
                        text={AttrValue::from(config.typing_text.clone())}
                        speed_ms={config.typing_speed_ms}
                        scheduler={props.scheduler.clone()}
                    />
                    <div class="hero-actions">
                        <SectionLink class="btn btn-primary" href="#about">{"Explore"}</SectionLink>
                        <SectionLink class="btn btn-secondary" href="#contact">{"Get in touch"}</SectionLink>
                    </div>
                </div>
            </header>

            <main>
                <section id="about" class="section">
                    <h2 class="section-title">{"About"}</h2>
                    <Reveal class="glass-card" options={reveal.clone()}>
                        <p>
                            {"I build interfaces that feel fast and alive: careful layout, \
                              purposeful motion and code that stays easy to change."}
                        </p>
                    </Reveal>
                </section>

                <section id="skills" class="section">
                    <h2 class="section-title">{"Skills"}</h2>
                    <Reveal class="glass-card" options={reveal.clone()}>
                        { for SKILLS.iter().map(|(name, level)| html! {
                            <SkillMeter
                                name={*name}
                                level={*level}
                                threshold={config.skill_threshold}
                            />
                        }) }
                    </Reveal>
                </section>

                <section id="experience" class="section">
                    <h2 class="section-title">{"Experience"}</h2>
                    <div class="timeline">
                        { for EXPERIENCE.iter().map(|(period, role, summary)| html! {
                            <Reveal class="timeline-item" options={reveal.clone()}>
                                <span class="timeline-date">{*period}</span>
                                <h3>{*role}</h3>
                                <p>{*summary}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="certifications" class="section">
                    <h2 class="section-title">{"Certifications"}</h2>
                    <div class="certification-grid">
                        { for CERTIFICATIONS.iter().map(|(title, issuer)| html! {
                            <Reveal class="certification-card" options={reveal.clone()}>
                                <h3>{*title}</h3>
                                <p class="muted">{*issuer}</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="contact" class="section">
                    <h2 class="section-title">{"Contact"}</h2>
                    <Reveal class="glass-card" options={reveal.clone()}>
                        <ContactSection />
                    </Reveal>
                </section>
            </main>

            <footer class="footer">
                <p>{format!("© {OWNER_NAME}")}</p>
            </footer>

            <PointerGlow min_width={config.cursor_min_width} />
        </>
    }
}

fn load_config(mount: &Element) -> PageConfig {
    let base = match mount.get_attribute(CONFIG_JSON_ATTRIBUTE) {
        Some(raw) => PageConfig::from_json(&raw).unwrap_or_else(|error| {
            log_event(
                LogLevel::Warn,
                "config.invalid_json",
                json!({ "attribute": CONFIG_JSON_ATTRIBUTE, "error": error.to_string() }),
            );
            PageConfig::default()
        }),
        None => PageConfig::default(),
    };

    base.with_attributes(|name| mount.get_attribute(name))
}

fn reveal_body(body: &HtmlElement) {
    if let Err(error) = set_style(body, "opacity", "1") {
        log_dom_error("page.fade_in", &error);
    }
}

/// Fades the page in once the window has loaded.
fn install_page_fade_in(scheduler: &Rc<dyn Scheduler>) -> Result<(), UiError> {
    let win = window().ok_or(UiError::MissingWindow)?;
    let document = win.document().ok_or(UiError::MissingDocument)?;
    let body = document.body().ok_or_else(|| UiError::missing("body"))?;

    set_style(&body, "opacity", "0")?;
    set_style(&body, "transition", "opacity 0.5s ease")?;

    let ready_state = Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());

    if ready_state.as_deref() == Some("complete") {
        scheduler.request_frame(Box::new(move || reveal_body(&body)));
    } else {
        EventListener::once(&win, "load", move |_| reveal_body(&body)).forget();
    }

    Ok(())
}

pub fn run() {
    let mount = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = load_config(&mount);
    set_min_level(config.log_level);

    let scheduler: Rc<dyn Scheduler> = match BrowserScheduler::new() {
        Ok(scheduler) => Rc::new(scheduler),
        Err(error) => {
            log_dom_error("scheduler.init", &error);
            return;
        }
    };

    if let Err(error) = navigation::install_global() {
        log_dom_error("navigation.install_global", &error);
    }

    if let Err(error) = install_page_fade_in(&scheduler) {
        log_dom_error("page.fade_in", &error);
    }

    log_event(
        LogLevel::Info,
        "page.mounted",
        json!({
            "particles": config.particle_count,
            "typing_speed_ms": config.typing_speed_ms,
            "cursor_min_width": config.cursor_min_width,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        mount,
        AppProps {
            config: Rc::new(config),
            scheduler: SchedulerHandle(scheduler),
        },
    )
    .render();
}
