//! Inbox: conversation list plus the thread for the partner in the route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::{Conversation, Message, NewMessage};
use crate::state::auth::AuthSession;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let params = use_params_map();

    let partner = move || params.read().get("userId");

    let conversations = LocalResource::new(move || {
        let token = session.state.get().token;
        async move {
            let Some(token) = token else {
                return Vec::new();
            };
            match api::conversations(&token).await {
                Ok(conversations) => conversations,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("conversation list failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    // Fetching the thread also marks it read on the backend, which is why
    // the conversation list refetches after a send rather than here.
    let thread = LocalResource::new(move || {
        let token = session.state.get().token;
        let partner = partner();
        async move {
            let (Some(token), Some(partner)) = (token, partner) else {
                return Vec::new();
            };
            match api::conversation_messages(&token, &partner).await {
                Ok(messages) => messages,
                Err(err) => {
                    session.handle_unauthorized(&err);
                    leptos::logging::warn!("thread fetch failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let send = Callback::new(move |()| {
        if sending.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let content = draft.get_untracked().trim().to_owned();
            let receiver = params.read_untracked().get("userId");
            let (Some(receiver_id), false) = (receiver, content.is_empty()) else {
                return;
            };
            sending.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = session.token() else {
                    return;
                };
                let message = NewMessage {
                    receiver_id,
                    job_id: None,
                    content,
                };
                match api::send_message(&token, &message).await {
                    Ok(_) => {
                        draft.set(String::new());
                        thread.refetch();
                        conversations.refetch();
                    }
                    Err(err) => {
                        session.handle_unauthorized(&err);
                        leptos::logging::warn!("send failed: {err}");
                    }
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &draft, &thread, &conversations);
        }
    });

    let me = move || session.state.get().user.map(|user| user.id);

    let partner_name = move || {
        let id = partner()?;
        conversations
            .get()?
            .into_iter()
            .find(|c| c.user_id == id)
            .map(|c| c.user_name)
    };

    view! {
        <div class="messages-page">
            <aside class="messages-page__list">
                <h1>"Messages"</h1>
                <Suspense fallback=move || view! { <p>"Loading conversations..."</p> }>
                    {move || {
                        conversations.get().map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="messages-page__empty">
                                        "No conversations yet. Message a contractor or homeowner \
                                         from a job page."
                                    </p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div>
                                        {list
                                            .into_iter()
                                            .map(conversation_row)
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                .into_any()
                            }
                        })
                    }}
                </Suspense>
            </aside>

            <section class="messages-page__thread">
                <Show
                    when=move || partner().is_some()
                    fallback=|| view! { <p class="messages-page__hint">"Pick a conversation."</p> }
                >
                    <header class="messages-page__partner">
                        {move || partner_name().unwrap_or_default()}
                    </header>
                    <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                        {move || {
                            let mine = me();
                            thread.get().map(|messages| {
                                view! {
                                    <div class="messages-page__scroll">
                                        {messages
                                            .into_iter()
                                            .map(|message| message_row(message, mine.as_deref()))
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                        }}
                    </Suspense>
                    <form
                        class="messages-page__compose"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            send.run(());
                        }
                    >
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Write a message..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                            "Send"
                        </button>
                    </form>
                </Show>
            </section>
        </div>
    }
}

fn conversation_row(conversation: Conversation) -> impl IntoView {
    let href = format!("/messages/{}", conversation.user_id);
    view! {
        <a class="conversation-row" href=href>
            <span class="conversation-row__name">{conversation.user_name}</span>
            <span class="conversation-row__preview">{conversation.last_message}</span>
            <Show when=move || conversation.unread_count > 0>
                <span class="conversation-row__unread">{conversation.unread_count}</span>
            </Show>
        </a>
    }
}

fn message_row(message: Message, me: Option<&str>) -> impl IntoView {
    let mine = me == Some(message.sender_id.as_str());
    view! {
        <div class="message-row" class:message-row--mine=mine>
            <span class="message-row__content">{message.content}</span>
            <span class="message-row__time">{message.created_at}</span>
        </div>
    }
}
