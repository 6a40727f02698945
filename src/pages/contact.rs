//! Public contact page.

use leptos::prelude::*;

/// Contact details plus a lightweight message form. There is no contact
/// endpoint; the form only acknowledges locally.
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Questions about a project, a bid, or your account? We read everything."</p>
            <ul class="contact-page__details">
                <li>"support@buildlaunch.ca"</li>
                <li>"Serving Mississauga, Toronto, and Brampton"</li>
            </ul>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="contact-page__thanks">"Thanks! We'll get back to you shortly."</p> }
            >
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    if !message.get().trim().is_empty() {
                        sent.set(true);
                    }
                }>
                    <label class="form__label">
                        "Your Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Message"
                        <textarea
                            class="form__input"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit">"Send"</button>
                </form>
            </Show>
        </div>
    }
}
