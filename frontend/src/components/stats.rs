use crate::config::STATS_THRESHOLD;
use crate::content::Stat;
use crate::controllers::counter::{is_finished, trigger_region, value_at, StatTrigger};
use crate::dom::frame::{now, FrameLoop};
use crate::dom::observer::VisibilityObserver;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub active: bool,
}

fn start_count(target: u32, shown: UseStateSetter<u32>) -> Option<FrameLoop> {
    let started_at = now()?;
    let frames = FrameLoop::start(move |timestamp| {
        let elapsed = timestamp - started_at;
        shown.set(value_at(target, elapsed));
        !is_finished(elapsed)
    });
    match frames {
        Ok(frames) => Some(frames),
        Err(e) => {
            log::debug!("count-up skipped: {}", e);
            None
        }
    }
}

/// Counts from 0 up to `target` once `active` turns on.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state_eq(|| 0u32);

    {
        let setter = shown.setter();
        let target = props.target;
        use_effect_with_deps(
            move |active| {
                let frames = if *active { start_count(target, setter) } else { None };
                move || drop(frames)
            },
            props.active,
        );
    }

    html! {
        <span class="stat-num" data-count={props.target.to_string()}>{ *shown }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGroupProps {
    pub stats: Vec<Stat>,
}

/// A row of counters sharing one trigger: the first time the section holding
/// the row is sufficiently visible all of them start, and the trigger
/// disconnects.
#[function_component(StatGroup)]
pub fn stat_group(props: &StatGroupProps) -> Html {
    let node = use_node_ref();
    let started = use_state_eq(|| false);

    {
        let node = node.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|row| {
                    let section = row.closest("section").ok().flatten();
                    let el = trigger_region(section, row);
                    let setter = started.setter();
                    let mut trigger = StatTrigger::default();
                    let observer = VisibilityObserver::new(&[STATS_THRESHOLD], move |batch, observer| {
                        let any = batch.iter().any(|entry| entry.intersecting);
                        if trigger.observe(any) {
                            setter.set(true);
                            observer.disconnect();
                        }
                    });
                    match observer {
                        Ok(observer) => {
                            observer.observe(&el);
                            Some(observer)
                        }
                        Err(e) => {
                            log::debug!("stat trigger unavailable, counting now: {}", e);
                            started.set(true);
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
        <div ref={node} class="stats">
            { for props.stats.iter().map(|stat| html! {
                <div class="stat">
                    <StatCounter target={stat.count} active={*started} />
                    <span class="stat-suffix">{ stat.suffix.clone() }</span>
                    <span class="stat-label">{ stat.label.clone() }</span>
                </div>
            }) }
        </div>
    }
}
