use gloo_timers::callback::Timeout;

use crate::components::imports::*;
use crate::static_content::{CONTACT_EMAIL, LOCATION, SOCIAL_LINKS};

/// Time the simulated submission takes, in milliseconds.
pub const SUBMIT_DELAY: u32 = 1_500;
/// How long the success notice stays up, in milliseconds.
pub const NOTICE_DURATION: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Form contents plus where the submission is at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Returns the payload to send, or `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.form.clone())
    }

    pub fn complete(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Success;
            self.form = ContactForm::default();
        }
    }

    pub fn dismiss_notice(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub struct Contact {
    state: ContactState,
    // dropping a pending timeout cancels it
    timeout: Option<Timeout>,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Submitted,
    NoticeExpired,
}

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ContactState::default(),
            timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.state.form.set(field, value);
                true
            }
            Msg::Submit => match self.state.begin_submit() {
                Some(form) => {
                    match serde_json::to_string(&form) {
                        Ok(payload) => console::log!(format!("submitting: {payload}")),
                        Err(e) => console::log!(format!("submitting unserializable form: {e}")),
                    }
                    let link = ctx.link().clone();
                    self.timeout = Some(Timeout::new(SUBMIT_DELAY, move || {
                        link.send_message(Msg::Submitted)
                    }));
                    true
                }
                None => false,
            },
            Msg::Submitted => {
                self.state.complete();
                let link = ctx.link().clone();
                self.timeout = Some(Timeout::new(NOTICE_DURATION, move || {
                    link.send_message(Msg::NoticeExpired)
                }));
                true
            }
            Msg::NoticeExpired => {
                self.timeout = None;
                self.state.dismiss_notice();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_style = css!(
            "
                padding: 6rem 1.5rem;

                h2 {
                    font-size: 3rem;
                    margin: 0 0 1rem 0;
                }
            "
        );

        let layout_style = css!(
            "
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                margin-top: 3rem;

                @media (max-width: 1024px) {
                    grid-template-columns: 1fr;
                }
            "
        );

        let panel_style = css!(
            "
                padding: 2rem;
                border-radius: 1rem;
                border: 2px solid var(--border);
                background-color: var(--background-elevated);

                a:hover {
                    color: var(--accent-primary);
                }
            "
        );

        let form_style = css!(
            "
                display: flex;
                flex-direction: column;
                gap: 1.25rem;

                label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                input, textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    font: inherit;
                    color: var(--foreground);
                    background-color: var(--background);
                    border: 2px solid var(--border);
                }

                input:focus, textarea:focus {
                    outline: none;
                    border-color: var(--accent-primary);
                }

                button {
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: bold;
                    cursor: pointer;
                    color: white;
                    background-color: var(--accent-primary);
                }

                button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
            "
        );

        let notice_style = css!(
            "
                padding: 1rem;
                border-radius: 0.5rem;
                color: #10B981;
                border: 1px solid #10B981;
                background-color: rgba(16, 185, 129, 0.1);
            "
        );

        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        let submitting = self.state.status == SubmitStatus::Submitting;
        let input = |field: Field, label: &'static str, kind: &'static str, placeholder: &'static str| {
            let oninput = ctx.link().callback(move |event: InputEvent| {
                Msg::Edit(field, event.target_unchecked_into::<HtmlInputElement>().value())
            });
            html! {
                <label>{ label }
                    <input type={ kind } required={true} {placeholder} {oninput}
                        value={ self.state.form.get(field).to_owned() }/>
                </label>
            }
        };
        let on_message = ctx.link().callback(|event: InputEvent| {
            Msg::Edit(
                Field::Message,
                event.target_unchecked_into::<HtmlTextAreaElement>().value(),
            )
        });

        html! {
            <section id={ sections::CONTACT } class={ section_style }>
                <div class={ css!("max-width: 80rem; margin: 0 auto;") }>
                    <h2>{ "Let's " }<Colored>{ "Connect" }</Colored></h2>
                    <p class={ css!("color: var(--foreground-secondary); max-width: 48rem;") }>
                        { "Have a project in mind or want to discuss opportunities? I'm always open to new challenges." }
                    </p>

                    <div class={ layout_style }>
                        <div>
                            <div class={ panel_style.clone() }>
                                <h3>{ "Contact Information" }</h3>
                                <p>
                                    <Colored with="var(--foreground-secondary)">{ "Email: " }</Colored>
                                    <a href={ format!("mailto:{CONTACT_EMAIL}") }>{ CONTACT_EMAIL }</a>
                                </p>
                                <p>
                                    <Colored with="var(--foreground-secondary)">{ "Location: " }</Colored>
                                    { LOCATION }
                                </p>
                            </div>

                            <div class={ classes!(panel_style, css!("margin-top: 2rem;")) }>
                                <h3>{ "Connect With Me" }</h3>
                                { for SOCIAL_LINKS.iter().map(|social| html! {
                                    <a href={ social.url } target="_blank" rel="noopener noreferrer"
                                        class={ css!("margin-right: 1.5rem; font-weight: 600;") }>
                                        { social.name }
                                    </a>
                                }) }
                            </div>
                        </div>

                        <form {onsubmit} class={ form_style }>
                            { input(Field::Name, "Name", "text", "Your name") }
                            { input(Field::Email, "Email", "email", "your.email@example.com") }
                            { input(Field::Subject, "Subject", "text", "What's this about?") }
                            <label>{ "Message" }
                                <textarea rows="6" required={true} placeholder="Tell me about your project..."
                                    oninput={ on_message }
                                    value={ self.state.form.message.clone() }/>
                            </label>

                            <button type="submit" disabled={ submitting }>
                                { if submitting { "Sending..." } else { "Send Message" } }
                            </button>

                            if self.state.status == SubmitStatus::Success {
                                <div class={ notice_style }>
                                    { "Message sent successfully! I'll get back to you soon." }
                                </div>
                            }
                        </form>
                    </div>
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.set(Field::Name, "Ada".into());
        state.form.set(Field::Email, "ada@example.com".into());
        state.form.set(Field::Subject, "Hello".into());
        state.form.set(Field::Message, "Let's build something".into());
        state
    }

    #[test]
    fn fields_are_edited_independently() {
        let state = filled();
        assert_eq!(state.form.get(Field::Name), "Ada");
        assert_eq!(state.form.get(Field::Email), "ada@example.com");
        assert_eq!(state.form.get(Field::Subject), "Hello");
        assert_eq!(state.form.get(Field::Message), "Let's build something");
    }

    #[test]
    fn submission_walks_idle_submitting_success_idle() {
        let mut state = filled();

        let payload = state.begin_submit().expect("idle form to submit");
        assert_eq!(payload.name, "Ada");
        assert_eq!(state.status, SubmitStatus::Submitting);

        state.complete();
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, ContactForm::default());

        state.dismiss_notice();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn resubmitting_while_in_flight_is_ignored() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.status, SubmitStatus::Submitting);
    }

    #[test]
    fn stray_transitions_do_nothing() {
        let mut state = filled();
        state.complete();
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.form.get(Field::Name), "Ada");

        state.dismiss_notice();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn payload_serializes_every_field() {
        let payload = serde_json::to_value(filled().form).unwrap();
        assert_eq!(payload["email"], "ada@example.com");
        assert_eq!(payload["message"], "Let's build something");
    }
}
