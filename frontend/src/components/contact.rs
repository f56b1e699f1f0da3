use super::notification::use_notifier;
use crate::config::CONTACT_EMAIL;
use crate::controllers::clipboard::copy_notice;
use crate::controllers::contact::{submit, ContactForm, Field, Validation};
use crate::dom::clipboard::write_text;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(CopyEmailButton)]
pub fn copy_email_button() -> Html {
    let notifier = use_notifier();

    let onclick = Callback::from(move |_: MouseEvent| {
        let notifier = notifier.clone();
        spawn_local(async move {
            let result = write_text(CONTACT_EMAIL).await;
            if let Err(e) = &result {
                gloo_console::warn!(e.to_string());
            }
            notifier.notify(copy_notice(&result));
        });
    });

    html! {
        <button id="copyEmailBtn" class="btn btn-ghost" type="button" {onclick}>
            { format!("Copy {}", CONTACT_EMAIL) }
        </button>
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Phone => "tel",
        // Format checks are ours; keep the browser's validator out of it.
        _ => "text",
    }
}

#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let form = use_state(ContactForm::default);
    let validation = use_state(Validation::default);
    let notifier = use_notifier();

    let onsubmit = {
        let form = form.clone();
        let validation = validation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = submit(&form);
            log::info!("contact form submitted, valid: {}", outcome.validation.is_valid());
            validation.set(outcome.validation);
            notifier.notify(outcome.notice);
            if outcome.clear {
                form.set(ContactForm::default());
            }
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            { for Field::ORDER.iter().map(|field| {
                let field = *field;
                let oninput = {
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*form).clone();
                        next.set(field, input.value());
                        form.set(next);
                    })
                };
                let failed = validation.error(field).is_some();
                html! {
                    <label class={classes!("field", failed.then(|| "has-error"))}>
                        <span>{ field.label() }</span>
                        <input
                            name={field.name()}
                            type={input_type(field)}
                            value={form.value(field).to_string()}
                            {oninput}
                        />
                        <small class="error">{ validation.message(field) }</small>
                    </label>
                }
            }) }
            <label class="field field-wide">
                <span>{"How can we help?"}</span>
                <textarea name="message" rows="4" value={form.message.clone()} oninput={on_message}></textarea>
            </label>
            <button class="btn" type="submit">{"Send message"}</button>
        </form>
    }
}
