use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactForm, Field, FieldError, Interest, Role};
use crate::notify::Notify;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub contact_email: AttrValue,
}

fn error_for(errors: &[FieldError], field: Field) -> Html {
    match errors.iter().find(|e| e.field() == field) {
        Some(e) => html! { <div class="field-err" role="alert">{ e.to_string() }</div> },
        None => html! {},
    }
}

/// The draft lives in this component only, so leaving the page drops it.
#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let notify = use_context::<Notify>();

    let text_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_name = text_input(|f, v| f.full_name = v);
    let on_email = text_input(|f, v| f.email = v);
    let on_phone = text_input(|f, v| f.phone = v);
    let on_org = text_input(|f, v| f.organization = v);

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let ta: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = ta.value();
            form.set(next);
        })
    };

    let on_role = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            let mut next = (*form).clone();
            next.role = Role::from_label(&sel.value());
            form.set(next);
        })
    };

    let on_interest = |interest: Interest| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.toggle_interest(interest, input.checked());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(notify) = &notify else {
                log::error!("no notifier in context");
                return;
            };
            match form.submit(notify) {
                Ok(()) => {
                    errors.set(Vec::new());
                    form.set(ContactForm::default());
                }
                Err(errs) => errors.set(errs),
            }
        })
    };

    let role_value = form.role.map(Role::label).unwrap_or_default();

    html! {
      <>
        <h1 class="h1">{ "Contact us" }</h1>
        <p class="sub">
          { "Tell us a little about yourself and how you'd like to help. Prefer email? Write to " }
          <a href={format!("mailto:{}", props.contact_email)}>{ props.contact_email.clone() }</a>
          { "." }
        </p>

        <form class="card form" onsubmit={on_submit}>
          <label class="field">
            <span class="label">{ "Full name *" }</span>
            <input type="text" name="full_name" required=true autocomplete="name"
              value={form.full_name.clone()} oninput={on_name} />
            { error_for(&errors, Field::FullName) }
          </label>

          <label class="field">
            <span class="label">{ "Email *" }</span>
            <input type="email" name="email" required=true autocomplete="email"
              value={form.email.clone()} oninput={on_email} />
            { error_for(&errors, Field::Email) }
          </label>

          <label class="field">
            <span class="label">{ "Phone" }</span>
            <input type="tel" name="phone" autocomplete="tel"
              value={form.phone.clone()} oninput={on_phone} />
          </label>

          <label class="field">
            <span class="label">{ "Organization *" }</span>
            <input type="text" name="organization" required=true autocomplete="organization"
              value={form.organization.clone()} oninput={on_org} />
            { error_for(&errors, Field::Organization) }
          </label>

          <label class="field">
            <span class="label">{ "I am a… *" }</span>
            <select name="role" required=true onchange={on_role}>
              <option value="" selected={role_value.is_empty()} disabled=true>{ "Choose one" }</option>
              { for Role::ALL.iter().map(|r| html! {
                  <option value={r.label()} selected={r.label() == role_value}>{ r.label() }</option>
              })}
            </select>
            { error_for(&errors, Field::Role) }
          </label>

          <fieldset class="field">
            <legend class="label">{ "Interested in" }</legend>
            <div class="checks">
              { for Interest::ALL.iter().map(|&i| html! {
                  <label class="check">
                    <input type="checkbox" name="interests" value={i.label()}
                      checked={form.interests.contains(&i)} onchange={on_interest(i)} />
                    { i.label() }
                  </label>
              })}
            </div>
          </fieldset>

          <label class="field">
            <span class="label">{ "Message" }</span>
            <textarea name="message" rows="5" value={form.message.clone()} oninput={on_message} />
          </label>

          <div class="row">
            <button class="btn" type="submit">{ "Send" }</button>
          </div>
        </form>
      </>
    }
}
