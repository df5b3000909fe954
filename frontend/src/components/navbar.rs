use std::cell::RefCell;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::drivers::scroll_spy::{NavSection, ScrollSpy};
use crate::drivers::toggle::MenuToggle;
use crate::utils::dom::{self, DomGeometry, WindowListener};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
    pub get_started: String,
    /// Section the "get started" button jumps to.
    pub get_started_target: String,
    pub sections: Vec<NavSection>,
    /// Height of this bar; the scroll spy treats a section as current once
    /// its top is within this distance of the viewport top.
    pub offset_px: f64,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let active = use_state_eq(|| {
        props
            .sections
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default()
    });
    let menu = use_state_eq(MenuToggle::default);

    // Scroll spy: highlight the section currently under the nav bar
    {
        let active = active.clone();
        use_effect_with_deps(
            move |(sections, offset_px)| {
                let listener = match ScrollSpy::new(sections.clone(), None, *offset_px) {
                    Ok(spy) => {
                        active.set(spy.active().to_string());
                        let spy = RefCell::new(spy);
                        WindowListener::new(&["scroll"], move || {
                            let Some(geometry) = DomGeometry::current() else {
                                return;
                            };
                            if let Some(id) = spy.borrow_mut().observe(dom::scroll_offset(), &geometry) {
                                active.set(id.to_string());
                            }
                        })
                        .map_err(|e| log::warn!("scroll spy disabled: {e}"))
                        .ok()
                    }
                    Err(e) => {
                        log::warn!("scroll spy disabled: {e}");
                        None
                    }
                };
                move || drop(listener)
            },
            (props.sections.clone(), props.offset_px),
        );
    }

    let go_to = {
        let menu = menu.clone();
        Callback::from(move |id: String| {
            let mut next = *menu;
            if !next.follow(|| dom::scroll_to_section(&id)) {
                log::debug!("no section `{id}` on the page");
            }
            menu.set(next);
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let nav_button = |section: &NavSection, class: &'static str| {
        let onclick = {
            let go_to = go_to.clone();
            let id = section.id.clone();
            Callback::from(move |_: MouseEvent| go_to.emit(id.clone()))
        };
        html! {
            <button key={section.id.clone()} class={class} {onclick}>
                { &section.label }
            </button>
        }
    };

    let desktop_links = props
        .sections
        .iter()
        .map(|section| {
            let class = if *active == section.id {
                "nav-link nav-link-active"
            } else {
                "nav-link"
            };
            nav_button(section, class)
        })
        .collect::<Html>();

    let get_started = {
        let go_to = go_to.clone();
        let target = props.get_started_target.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(target.clone()))
    };

    let mobile_menu = if menu.is_open() {
        html! {
            <div class="mobile-menu md:hidden">
                { for props.sections.iter().map(|section| nav_button(section, "mobile-link")) }
                <button class="mobile-cta" onclick={get_started}>{ &props.get_started }</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <Logo size={24} />
                    <span class="brand-name">{ &props.brand }</span>
                </div>
                <div class="navbar-links hidden md:flex">
                    { desktop_links }
                </div>
                <div class="md:hidden">
                    <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={classes!("fas", if menu.is_open() { "fa-xmark" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </div>
            { mobile_menu }
        </nav>
    }
}
