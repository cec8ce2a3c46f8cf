use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    leptos_dom::helpers::{event_target_value, set_timeout_with_handle, TimeoutHandle},
    prelude::*,
    task::spawn_local,
};
use leptos_meta::Title;

use crate::contact::relay::{ContactMessage, EmailRelay, RelayConfig, RelayError};
use crate::contact::{ContactController, Field, SubmitStatus};
use crate::content::{build_year, OWNER};

use super::reveal::Reveal;

/// The relay's own answer is returned inside `Ok` so the client can tell a
/// misconfigured server apart from a failed call.
#[server]
pub async fn send_contact_email(
    message: ContactMessage,
) -> Result<Result<(), RelayError>, ServerFnError> {
    use std::sync::LazyLock;

    use crate::contact::relay::EmailJsRelay;

    static RELAY: LazyLock<EmailJsRelay> = LazyLock::new(|| EmailJsRelay::from_env(OWNER.email));

    let result = RELAY.send(&message).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "couldn't relay contact message");
    }
    Ok(result)
}

/// Sends through the `send_contact_email` server function.
struct ServerFnRelay;

impl EmailRelay for ServerFnRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        RelayError::settle(send_contact_email(message.clone()).await)
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="min-h-screen pt-24 pb-16">
            <section class="max-w-6xl mx-auto px-6">
                <Reveal class="text-center mb-16">
                    <h1 class="text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent">
                        "Let's Connect"
                    </h1>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto">
                        "Interested in collaborating on AI/ML projects or have questions? I'd love to hear from you."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <Reveal class="space-y-6">
                        <ContactMethod
                            kind="Email"
                            value=OWNER.email
                            link=format!("mailto:{}", OWNER.email)
                            icon="✉️"
                        />
                        <ContactMethod
                            kind="Phone"
                            value=OWNER.phone
                            link=OWNER.phone_link.to_string()
                            icon="📞"
                        />
                    </Reveal>
                    <Reveal>
                        <ContactForm />
                    </Reveal>
                </div>
                <p class="mt-12 text-center text-slate-500">
                    {format!("© {} {}. All rights reserved.", build_year(), OWNER.name)}
                </p>
            </section>
        </div>
    }
}

#[component]
fn ContactMethod(
    kind: &'static str,
    value: &'static str,
    link: String,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=link
            class="group block bg-slate-900/50 border border-slate-800 p-6 rounded-xl hover:border-purple-500/50 hover:-translate-y-1 transition-all"
        >
            <div class="flex items-center gap-4">
                <div class="text-4xl group-hover:scale-110 transition-transform">{icon}</div>
                <div>
                    <h3 class="text-lg font-semibold text-white mb-1 group-hover:text-purple-400 transition-colors">
                        {kind}
                    </h3>
                    <p class="text-slate-400">{value}</p>
                </div>
            </div>
        </a>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let config = expect_context::<RelayConfig>();
    let controller = RwSignal::new(ContactController::new(config));
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);
    let hint = RwSignal::new(None::<String>);

    let cancel_reset = move || {
        if let Some(Some(handle)) = reset_handle.try_update_value(|h| h.take()) {
            handle.clear();
        }
    };
    // the banner timer must not outlive the form
    on_cleanup(cancel_reset);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                log::debug!("contact submit rejected: {e}");
                hint.set(e.hint());
                return;
            }
            None => return,
        };
        hint.set(None);
        cancel_reset();
        spawn_local(async move {
            let result = ServerFnRelay.send(&message).await;
            let Some(Some(timer)) = controller.try_update(|c| c.finish_submit(result)) else {
                return;
            };
            let handle = set_timeout_with_handle(
                move || {
                    controller.try_update(|c| c.reset_elapsed(timer));
                },
                timer.delay,
            );
            match handle {
                Ok(handle) => {
                    reset_handle.try_update_value(|h| *h = Some(handle));
                }
                Err(e) => log::warn!("couldn't schedule banner reset: {e:?}"),
            }
        });
    };

    let value_of = move |field: Field| move || controller.with(|c| c.field(field).to_string());
    let set_field = move |field: Field| {
        move |ev: Event| {
            hint.set(None);
            controller.update(|c| c.update_field(field, event_target_value(&ev)));
        }
    };
    let submitting = move || controller.with(|c| c.is_submitting());

    view! {
        <form
            on:submit=on_submit
            class="bg-slate-900/50 border border-slate-800 p-8 rounded-xl space-y-6"
        >
            <div>
                <label for="contact_name" class="block text-sm font-medium text-slate-300 mb-2">
                    {Field::Name.label()}
                </label>
                <input
                    id="contact_name"
                    type="text"
                    required
                    placeholder="Your name"
                    class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-purple-500 transition-colors"
                    prop:value=value_of(Field::Name)
                    on:input=set_field(Field::Name)
                />
            </div>
            <div>
                <label for="contact_email" class="block text-sm font-medium text-slate-300 mb-2">
                    {Field::Email.label()}
                </label>
                <input
                    id="contact_email"
                    type="email"
                    required
                    placeholder="your.email@example.com"
                    class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-purple-500 transition-colors"
                    prop:value=value_of(Field::Email)
                    on:input=set_field(Field::Email)
                />
            </div>
            <div>
                <label for="contact_message" class="block text-sm font-medium text-slate-300 mb-2">
                    {Field::Message.label()}
                </label>
                <textarea
                    id="contact_message"
                    rows=5
                    required
                    placeholder="Your message..."
                    class="w-full px-4 py-3 bg-slate-800/50 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-purple-500 transition-colors resize-none"
                    prop:value=value_of(Field::Message)
                    on:input=set_field(Field::Message)
                ></textarea>
            </div>
            {move || {
                hint.get()
                    .map(|text| {
                        view! {
                            <p class="text-sm text-amber-400">{text}</p>
                        }
                    })
            }}
            <button
                type="submit"
                disabled=submitting
                class=move || {
                    if submitting() {
                        "w-full px-6 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-purple-600 to-pink-600 opacity-50 cursor-not-allowed"
                    } else {
                        "w-full px-6 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-500 hover:to-pink-500 shadow-lg shadow-purple-500/50 transition-all"
                    }
                }
            >
                {move || {
                    controller
                        .with(|c| match c.status() {
                            SubmitStatus::Submitting => "Sending...",
                            SubmitStatus::Submitted => "Message Sent!",
                            SubmitStatus::Idle | SubmitStatus::Failed(_) => "Send Message",
                        })
                }}
            </button>
            {move || {
                controller
                    .with(|c| match c.status() {
                        SubmitStatus::Submitted => {
                            Some(
                                Either::Left(
                                    view! {
                                        <div class="p-4 rounded-lg bg-green-500/10 border border-green-500/30 text-green-400">
                                            "Thanks! Your message has been sent. I'll get back to you soon."
                                        </div>
                                    },
                                ),
                            )
                        }
                        SubmitStatus::Failed(e) => {
                            Some(
                                Either::Right(
                                    view! {
                                        <div class="p-4 rounded-lg bg-red-500/10 border border-red-500/30 text-red-400">
                                            {e.to_string()}
                                        </div>
                                    },
                                ),
                            )
                        }
                        SubmitStatus::Idle | SubmitStatus::Submitting => None,
                    })
            }}
        </form>
    }
}
