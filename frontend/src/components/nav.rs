use crate::config::{SECTION_THRESHOLDS, TRACKED_SECTIONS};
use crate::controllers::nav::{NavAction, NavState};
use crate::controllers::scroll::{most_visible, SectionSample};
use crate::dom::dialog::target_within;
use crate::dom::observer::VisibilityObserver;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

const LINKS: [(&str, &str); 5] = [
    ("about", "About"),
    ("services", "Services"),
    ("team", "Team"),
    ("benefits", "Why us"),
    ("contact", "Contact"),
];

/// Highlights the nav link of the most visible tracked section.
fn track_sections(active: UseStateSetter<Option<String>>) -> Option<VisibilityObserver> {
    let document = web_sys::window()?.document()?;
    let observer = VisibilityObserver::new(&SECTION_THRESHOLDS, move |batch, _| {
        let samples: Vec<SectionSample> = batch
            .iter()
            .map(|entry| SectionSample {
                id: entry.target.id(),
                intersecting: entry.intersecting,
                ratio: entry.ratio,
            })
            .collect();
        if let Some(id) = most_visible(&samples) {
            active.set(Some(id.to_string()));
        }
    });
    let observer = match observer {
        Ok(observer) => observer,
        Err(e) => {
            log::debug!("section tracking disabled: {}", e);
            return None;
        }
    };
    for id in TRACKED_SECTIONS {
        if let Some(section) = document.get_element_by_id(id) {
            observer.observe(&section);
        }
    }
    Some(observer)
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let nav = use_reducer(NavState::default);
    let active = use_state_eq(|| None::<String>);
    let menu_region = use_node_ref();

    {
        let nav = nav.clone();
        let menu_region = menu_region.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            // A missing region counts as inside: there is nothing to close against.
            let inside_menu = menu_region
                .cast::<Element>()
                .map(|region| target_within(&region, &e))
                .unwrap_or(true);
            nav.dispatch(NavAction::DocumentClick { inside_menu });
        });
    }

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let observer = track_sections(active.setter());
                move || drop(observer)
            },
            (),
        );
    }

    let toggle = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Toggle))
    };

    let close_on_link = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::LinkClicked))
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <a class="brand" href="#top">{"Optimal Healthcare Services"}</a>
                <div ref={menu_region} class="menu-region">
                    <button
                        id="navToggle"
                        class="nav-toggle"
                        aria-controls="siteNav"
                        aria-expanded={nav.aria_expanded()}
                        aria-label="Toggle navigation"
                        onclick={toggle}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <nav id="siteNav" class={classes!("site-nav", nav.open.then(|| "open"))}>
                        { for LINKS.iter().map(|(id, label)| {
                            let is_active = active.as_deref() == Some(*id);
                            html! {
                                <a
                                    href={format!("#{}", id)}
                                    data-nav={*id}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={close_on_link.clone()}
                                >
                                    {*label}
                                </a>
                            }
                        }) }
                    </nav>
                </div>
            </div>
        </header>
    }
}
