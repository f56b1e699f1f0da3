use super::notification::use_notifier;
use crate::content::{ServiceCard, LEARN_MORE};
use crate::controllers::services::{Category, FilterState, NO_MATCHES};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceDirectoryProps {
    pub cards: Vec<ServiceCard>,
    pub on_open: Callback<String>,
}

#[function_component(ServiceDirectory)]
pub fn service_directory(props: &ServiceDirectoryProps) -> Html {
    let filter = use_state(FilterState::default);
    let notifier = use_notifier();

    let apply = {
        let filter = filter.clone();
        let cards = props.cards.clone();
        Callback::from(move |next: FilterState| {
            let shown = next.visibility(&cards).into_iter().filter(|v| *v).count();
            log::debug!("service filter {:?} shows {} of {}", next, shown, cards.len());
            if next.should_notify(shown) {
                notifier.notify(NO_MATCHES);
            }
            filter.set(next);
        })
    };

    let on_search = {
        let filter = filter.clone();
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply.emit(filter.with_query(input.value()));
        })
    };

    let visibility = filter.visibility(&props.cards);

    html! {
        <div class="service-directory">
            <div class="service-tools">
                <input
                    id="serviceSearch"
                    type="search"
                    placeholder="Search services (e.g. therapy, diabetes, IV)"
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <div class="chips" role="group" aria-label="Filter services">
                    { for Category::CHIPS.iter().map(|category| {
                        let category = *category;
                        let onclick = {
                            let filter = filter.clone();
                            let apply = apply.clone();
                            Callback::from(move |_: MouseEvent| apply.emit(filter.with_category(category)))
                        };
                        html! {
                            <button
                                class={classes!("chip", (filter.category == category).then(|| "chip-on"))}
                                data-filter={category.filter_value()}
                                {onclick}
                            >
                                { category.label() }
                            </button>
                        }
                    }) }
                </div>
            </div>
            <div id="serviceGrid" class="service-grid">
                { for props.cards.iter().zip(visibility).map(|(card, shown)| {
                    let title = card.title.clone();
                    let on_open = props.on_open.clone();
                    html! {
                        <article
                            class={classes!("svc-card", (!shown).then(|| "is-hidden"))}
                            data-tags={card.tags.clone()}
                        >
                            <h3>{ card.title.clone() }</h3>
                            <p>{ card.blurb.clone() }</p>
                            <button
                                class="link-btn"
                                data-open={card.title.clone()}
                                onclick={Callback::from(move |_: MouseEvent| on_open.emit(title.clone()))}
                            >
                                { LEARN_MORE }
                            </button>
                        </article>
                    }
                }) }
            </div>
        </div>
    }
}
