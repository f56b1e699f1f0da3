use crate::config::REVEAL_THRESHOLD;
use crate::controllers::reveal::RevealLatch;
use crate::dom::observer::VisibilityObserver;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|el| {
                    let setter = visible.setter();
                    let mut latch = RevealLatch::default();
                    let observer = VisibilityObserver::new(&[REVEAL_THRESHOLD], move |batch, observer| {
                        for entry in batch {
                            if latch.observe(entry.intersecting) {
                                setter.set(true);
                                observer.unobserve(&entry.target);
                            }
                        }
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&el);
                            Some(observer)
                        }
                        Err(e) => {
                            log::debug!("reveal observer unavailable, showing content: {}", e);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
