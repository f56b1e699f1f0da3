use crate::components::contact::{ContactPanel, CopyEmailButton};
use crate::components::info_modal::InfoModal;
use crate::components::nav::SiteHeader;
use crate::components::reveal::Reveal;
use crate::components::schedule::ScheduleModal;
use crate::components::scroll::ScrollTracker;
use crate::components::services::ServiceDirectory;
use crate::components::stats::StatGroup;
use crate::components::team::PractitionerCard;
use crate::components::testimonials::Testimonials;
use crate::content::site;
use crate::controllers::dialog::{DialogAction, DialogState};
use crate::controllers::info::InfoView;
use crate::dom::motion::Motion;
use crate::dom::stagger::apply_stagger;
use yew::prelude::*;

const BENEFITS: [(&str, &str); 4] = [
    ("Whole-person care", "Physical and mental health handled under one roof."),
    ("Clear plans", "Every visit ends with next steps you understand."),
    ("Flexible access", "In-person and virtual visits with timely follow-up."),
    ("Continuity", "The same practitioners over time, not a rotating cast."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let content = site();
    let motion = use_context::<Motion>().unwrap_or_default();

    let schedule = use_reducer(DialogState::default);
    let info = use_reducer(DialogState::default);
    let info_view = use_state(|| None::<InfoView>);

    {
        use_effect_with_deps(
            move |reduced| {
                if !*reduced {
                    match apply_stagger() {
                        Ok(count) => log::debug!("staggered {} reveal items", count),
                        Err(e) => log::debug!("stagger skipped: {}", e),
                    }
                }
                || ()
            },
            motion.reduced,
        );
    }

    let open_schedule = {
        let schedule = schedule.clone();
        Callback::from(move |_: ()| schedule.dispatch(DialogAction::Open))
    };
    let open_schedule_click = |id: &'static str| {
        let open_schedule = open_schedule.clone();
        html! {
            <button id={id} class="btn" onclick={Callback::from(move |_: MouseEvent| open_schedule.emit(()))}>
                {"Schedule a visit"}
            </button>
        }
    };

    let open_info = {
        let info = info.clone();
        let info_view = info_view.clone();
        Callback::from(move |title: String| {
            log::debug!("opening details for {}", title);
            info_view.set(Some(InfoView::lookup(&content.details, &title)));
            info.dispatch(DialogAction::Open);
        })
    };

    let on_schedule_action = {
        let schedule = schedule.clone();
        Callback::from(move |action: DialogAction| schedule.dispatch(action))
    };
    let on_info_action = {
        let info = info.clone();
        Callback::from(move |action: DialogAction| info.dispatch(action))
    };

    html! {
        <>
            <ScrollTracker on_schedule={open_schedule.clone()} />
            <SiteHeader />
            <main id="top">
                <section class="hero">
                    <Reveal>
                        <h1>{"Compassionate primary care and mental health, in one place."}</h1>
                    </Reveal>
                    <Reveal>
                        <p>{"Nurse-practitioner led care in Baltimore and York, in person or online."}</p>
                    </Reveal>
                    <Reveal>{ open_schedule_click("openScheduleModal") }</Reveal>
                </section>

                <section id="about">
                    <Reveal><h2>{"About the practice"}</h2></Reveal>
                    <Reveal>
                        <p>{"We pair evidence-based treatment with the time to listen, so every plan fits the person it is for."}</p>
                    </Reveal>
                    <Reveal><StatGroup stats={content.stats.clone()} /></Reveal>
                </section>

                <section id="services">
                    <Reveal><h2>{"Services"}</h2></Reveal>
                    <Reveal>
                        <ServiceDirectory cards={content.services.clone()} on_open={open_info.clone()} />
                    </Reveal>
                </section>

                <section id="team">
                    <Reveal><h2>{"Meet the team"}</h2></Reveal>
                    <div class="team-grid">
                        { for content.practitioners.iter().map(|person| html! {
                            <Reveal>
                                <PractitionerCard person={person.clone()} on_open={open_info.clone()} />
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section id="benefits">
                    <Reveal><h2>{"Why patients choose us"}</h2></Reveal>
                    <div class="benefit-grid">
                        { for BENEFITS.iter().map(|(title, text)| html! {
                            <Reveal class="benefit">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal>
                        <Testimonials items={content.testimonials.clone()} />
                    </Reveal>
                </section>

                <section id="contact">
                    <Reveal><h2>{"Get in touch"}</h2></Reveal>
                    <Reveal>
                        <div class="contact-actions">
                            { open_schedule_click("openScheduleModal2") }
                            <CopyEmailButton />
                        </div>
                    </Reveal>
                    <Reveal><ContactPanel /></Reveal>
                </section>
            </main>
            <footer class="site-footer">
                <Reveal>
                    <p>{"Optimal Healthcare Services · Wellness Mind Healthcare Services"}</p>
                </Reveal>
            </footer>

            <InfoModal view={(*info_view).clone()} open={info.open} on_action={on_info_action} />
            <ScheduleModal open={schedule.open} on_action={on_schedule_action} />
        </>
    }
}
