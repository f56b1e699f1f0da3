use crate::config::{TESTIMONIAL_FADE_MS, TESTIMONIAL_ROTATE_MS};
use crate::content::Testimonial;
use crate::controllers::carousel::{CarouselAction, CarouselState, Direction};
use crate::dom::motion::Motion;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let motion = use_context::<Motion>().unwrap_or_default();
    let len = props.items.len();
    let carousel = use_reducer(move || CarouselState::new(len));
    let card = use_node_ref();

    // Manual and timed steps share this; neither cancels the other.
    let advance = {
        let carousel = carousel.clone();
        let card = card.clone();
        Callback::from(move |direction: Direction| {
            if motion.reduced || card.get().is_none() {
                carousel.dispatch(CarouselAction::Jump(direction));
            } else {
                carousel.dispatch(CarouselAction::Fade(direction));
            }
        })
    };

    {
        let pending = carousel.pending;
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |pending| {
                if let Some(target) = *pending {
                    Timeout::new(TESTIMONIAL_FADE_MS, move || {
                        carousel.dispatch(CarouselAction::Settle(target));
                    })
                    .forget();
                }
                || ()
            },
            pending,
        );
    }

    {
        let advance = advance.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TESTIMONIAL_ROTATE_MS, move || advance.emit(Direction::Next));
                move || drop(interval)
            },
            (),
        );
    }

    let Some(current) = props.items.get(carousel.index) else {
        return html! {};
    };

    let step = |direction: Direction| {
        let advance = advance.clone();
        Callback::from(move |_: MouseEvent| advance.emit(direction))
    };

    html! {
        <div class="testimonials">
            <button id="tPrev" class="t-nav" aria-label="Previous testimonial" onclick={step(Direction::Previous)}>
                {"‹"}
            </button>
            <figure id="tCard" ref={card} class={classes!("t-card", carousel.fading.then(|| "t-fade"))}>
                <blockquote id="tQuote">{ format!("“{}”", current.quote) }</blockquote>
                <figcaption id="tMeta">{ current.meta.clone() }</figcaption>
            </figure>
            <button id="tNext" class="t-nav" aria-label="Next testimonial" onclick={step(Direction::Next)}>
                {"›"}
            </button>
        </div>
    }
}
