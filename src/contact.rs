pub mod relay;

use std::time::Duration;

use thiserror::Error;

use relay::{ContactMessage, EmailRelay, RelayConfig, RelayError};

/// How long the "message sent" banner stays up after a successful submit.
pub const SUCCESS_BANNER_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// First required field that is empty or only whitespace.
    pub fn first_empty(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Failures shown to the visitor. Both variants point at a direct address so
/// the message can still be sent by hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("The contact form isn't set up yet. Please email me directly at {fallback}.")]
    NotConfigured { fallback: String },
    #[error(
        "Something went wrong sending your message. Please try again or email me directly at {fallback}."
    )]
    Submission {
        fallback: String,
        #[source]
        cause: RelayError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(ContactError),
}

/// Reasons `begin_submit` refused to produce a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("relay is not configured (missing {})", .0.join(", "))]
    NotConfigured(Vec<&'static str>),
}

impl SubmitRejected {
    /// Text to show next to the form. Only an empty field needs one; the
    /// other rejections are already visible through the status.
    pub fn hint(&self) -> Option<String> {
        match self {
            SubmitRejected::MissingField(field) => {
                Some(format!("Please fill in your {}.", field.label().to_lowercase()))
            }
            SubmitRejected::InFlight | SubmitRejected::NotConfigured(_) => None,
        }
    }
}

/// Handle for the deferred banner reset scheduled after a successful send.
/// Only the most recently issued timer has any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    generation: u64,
    pub delay: Duration,
}

/// State of the contact form: the three fields and where the current
/// submission stands.
///
/// Sending is split in two so the view can show `Submitting` while the relay
/// call is in flight: [`begin_submit`](Self::begin_submit) validates and
/// hands back the request, [`finish_submit`](Self::finish_submit) applies the
/// relay's answer. [`submit`](Self::submit) does both for callers that can
/// hold the controller across the await.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactController {
    config: RelayConfig,
    fields: ContactFields,
    status: SubmitStatus,
    generation: u64,
}

impl ContactController {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            fields: ContactFields::default(),
            status: SubmitStatus::Idle,
            generation: 0,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }

    fn fallback(&self) -> String {
        self.config.recipient.clone()
    }

    /// Editing after a failure or a success puts the form back to `Idle`.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        match self.status {
            SubmitStatus::Failed(_) => self.status = SubmitStatus::Idle,
            SubmitStatus::Submitted => {
                self.generation += 1;
                self.status = SubmitStatus::Idle;
            }
            SubmitStatus::Idle | SubmitStatus::Submitting => {}
        }
    }

    /// Moves to `Submitting` and returns the message to hand to the relay.
    ///
    /// Nothing changes when a send is already in flight or a field is empty.
    /// An unconfigured relay fails the form straight away.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        if let Some(field) = self.fields.first_empty() {
            return Err(SubmitRejected::MissingField(field));
        }
        let missing = self.config.missing();
        if !missing.is_empty() {
            log::warn!("contact relay not configured, missing {}", missing.join(", "));
            self.status = SubmitStatus::Failed(ContactError::NotConfigured {
                fallback: self.fallback(),
            });
            return Err(SubmitRejected::NotConfigured(missing));
        }

        // invalidates any banner reset still pending from an earlier send
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        log::debug!("contact form submitting");
        Ok(ContactMessage {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            message: self.fields.message.clone(),
        })
    }

    /// Applies the relay's answer. On success the fields are cleared and a
    /// timer is returned for hiding the success banner.
    pub fn finish_submit(&mut self, result: Result<(), RelayError>) -> Option<ResetTimer> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(()) => {
                self.fields.clear();
                self.status = SubmitStatus::Submitted;
                log::debug!("contact form submitted");
                Some(ResetTimer {
                    generation: self.generation,
                    delay: SUCCESS_BANNER_DELAY,
                })
            }
            Err(RelayError::NotConfigured) => {
                self.status = SubmitStatus::Failed(ContactError::NotConfigured {
                    fallback: self.fallback(),
                });
                None
            }
            Err(cause) => {
                log::warn!("contact form failed: {cause}");
                self.status = SubmitStatus::Failed(ContactError::Submission {
                    fallback: self.fallback(),
                    cause,
                });
                None
            }
        }
    }

    /// Hides the success banner. Returns whether the timer was still current.
    pub fn reset_elapsed(&mut self, timer: ResetTimer) -> bool {
        if timer.generation != self.generation || self.status != SubmitStatus::Submitted {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }

    pub async fn submit<R: EmailRelay>(
        &mut self,
        relay: &R,
    ) -> Result<Option<ResetTimer>, SubmitRejected> {
        let message = self.begin_submit()?;
        let result = relay.send(&message).await;
        Ok(self.finish_submit(result))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::relay::{PUBLIC_KEY_PLACEHOLDER, SERVICE_ID_PLACEHOLDER, TEMPLATE_ID_PLACEHOLDER};
    use super::*;

    const OWNER: &str = "owner@example.com";

    struct MockRelay {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactMessage>>,
        outcome: Result<(), RelayError>,
    }

    impl MockRelay {
        fn new(outcome: Result<(), RelayError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                outcome,
            }
        }
    }

    impl EmailRelay for MockRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(message.clone());
            self.outcome.clone()
        }
    }

    fn configured() -> ContactController {
        ContactController::new(RelayConfig::new("service", "template", "key", OWNER))
    }

    fn filled(mut controller: ContactController) -> ContactController {
        controller.update_field(Field::Name, "Ada");
        controller.update_field(Field::Email, "ada@example.com");
        controller.update_field(Field::Message, "Hello!");
        controller
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let controller = configured();
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.fields(), &ContactFields::default());
        assert_eq!(controller.error_message(), None);
    }

    #[tokio::test]
    async fn test_empty_field_blocks_submit() {
        let relay = MockRelay::new(Ok(()));
        let mut controller = configured();

        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Message, "   "),
        ] {
            controller.update_field(field, value);
            let res = controller.submit(&relay).await;
            assert!(matches!(res, Err(SubmitRejected::MissingField(_))));
            assert_eq!(controller.status(), &SubmitStatus::Idle);
        }
        assert_eq!(relay.calls.get(), 0);

        controller.update_field(Field::Name, "");
        controller.update_field(Field::Message, "Hi");
        assert_eq!(
            controller.begin_submit(),
            Err(SubmitRejected::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_begin_submit_is_synchronous() {
        let mut controller = filled(configured());
        let message = controller.begin_submit().unwrap();
        assert_eq!(controller.status(), &SubmitStatus::Submitting);
        assert_eq!(
            message,
            ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello!".to_string(),
            }
        );
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        let before = controller.clone();
        assert_eq!(controller.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(controller, before);
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let relay = MockRelay::new(Ok(()));
        let mut controller = filled(configured());

        let timer = controller.submit(&relay).await.unwrap();
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(controller.status(), &SubmitStatus::Submitted);
        for field in Field::ALL {
            assert_eq!(controller.field(field), "");
        }
        let timer = timer.expect("success should schedule a banner reset");
        assert_eq!(timer.delay, SUCCESS_BANNER_DELAY);

        let sent = relay.sent.borrow();
        assert_eq!(sent[0].message, "Hello!");
    }

    #[tokio::test]
    async fn test_reset_timer_hides_banner() {
        let relay = MockRelay::new(Ok(()));
        let mut controller = filled(configured());
        let timer = controller.submit(&relay).await.unwrap().unwrap();
        assert_eq!(timer.delay, Duration::from_secs(5));

        assert!(controller.reset_elapsed(timer));
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.fields(), &ContactFields::default());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let relay = MockRelay::new(Err(RelayError::Transport("connection reset".to_string())));
        let mut controller = filled(configured());

        let timer = controller.submit(&relay).await.unwrap();
        assert!(timer.is_none());
        assert_eq!(relay.calls.get(), 1);
        assert!(matches!(
            controller.status(),
            SubmitStatus::Failed(ContactError::Submission { .. })
        ));
        assert_eq!(controller.field(Field::Name), "Ada");
        assert_eq!(controller.field(Field::Email), "ada@example.com");
        assert_eq!(controller.field(Field::Message), "Hello!");
        let message = controller.error_message().unwrap();
        assert!(message.contains(OWNER));
        assert!(message.contains("try again"));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let failing = MockRelay::new(Err(RelayError::Rejected {
            status: 500,
            body: "oops".to_string(),
        }));
        let working = MockRelay::new(Ok(()));
        let mut controller = filled(configured());

        controller.submit(&failing).await.unwrap();
        assert!(controller.error_message().is_some());

        controller.submit(&working).await.unwrap();
        assert_eq!(controller.status(), &SubmitStatus::Submitted);
        assert_eq!(working.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_placeholder_config_fails_without_sending() {
        let relay = MockRelay::new(Ok(()));
        let config = RelayConfig::new(
            SERVICE_ID_PLACEHOLDER,
            TEMPLATE_ID_PLACEHOLDER,
            PUBLIC_KEY_PLACEHOLDER,
            OWNER,
        );
        let mut controller = filled(ContactController::new(config));

        let res = controller.submit(&relay).await;
        assert!(matches!(res, Err(SubmitRejected::NotConfigured(missing)) if missing.len() == 3));
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(
            controller.status(),
            &SubmitStatus::Failed(ContactError::NotConfigured {
                fallback: OWNER.to_string()
            })
        );
        assert!(controller.error_message().unwrap().contains("isn't set up"));
        assert_eq!(controller.field(Field::Name), "Ada");
    }

    #[test]
    fn test_relay_side_config_error() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        assert_eq!(controller.finish_submit(Err(RelayError::NotConfigured)), None);
        assert!(matches!(
            controller.status(),
            SubmitStatus::Failed(ContactError::NotConfigured { .. })
        ));
    }

    #[test]
    fn test_editing_after_failure_returns_to_idle() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        controller.finish_submit(Err(RelayError::Transport("down".to_string())));
        controller.update_field(Field::Message, "Hello again");
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        let first = controller.finish_submit(Ok(())).unwrap();

        // a second message goes out before the first banner timer fires
        controller = filled(controller);
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        controller.begin_submit().unwrap();
        let second = controller.finish_submit(Ok(())).unwrap();

        assert!(!controller.reset_elapsed(first));
        assert_eq!(controller.status(), &SubmitStatus::Submitted);
        assert!(controller.reset_elapsed(second));
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert!(!controller.reset_elapsed(second));
    }

    #[test]
    fn test_new_submission_invalidates_pending_reset() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        let pending = controller.finish_submit(Ok(())).unwrap();

        controller = filled(controller);
        controller.begin_submit().unwrap();
        assert!(!controller.reset_elapsed(pending));
        assert_eq!(controller.status(), &SubmitStatus::Submitting);

        controller.finish_submit(Ok(())).unwrap();
        assert!(!controller.reset_elapsed(pending));
        assert_eq!(controller.status(), &SubmitStatus::Submitted);
    }

    #[test]
    fn test_editing_after_success_invalidates_pending_reset() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        let pending = controller.finish_submit(Ok(())).unwrap();

        controller.update_field(Field::Name, "A");
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert!(!controller.reset_elapsed(pending));
        assert_eq!(controller.field(Field::Name), "A");
    }

    #[test]
    fn test_missing_field_has_hint() {
        let mut controller = configured();
        controller.update_field(Field::Name, "Ada");
        controller.update_field(Field::Email, "ada@example.com");
        controller.update_field(Field::Message, " \n\t ");

        let rejected = controller.begin_submit().unwrap_err();
        assert_eq!(rejected.hint().as_deref(), Some("Please fill in your message."));
        assert_eq!(SubmitRejected::InFlight.hint(), None);
        assert_eq!(SubmitRejected::NotConfigured(vec!["public key"]).hint(), None);
    }

    #[test]
    fn test_server_side_config_error_is_not_retryable() {
        let mut controller = filled(configured());
        controller.begin_submit().unwrap();
        let wire = serde_json::to_string(&Err::<(), _>(RelayError::NotConfigured)).unwrap();
        let answer: Result<(), RelayError> = serde_json::from_str(&wire).unwrap();

        controller.finish_submit(RelayError::settle(Ok::<_, String>(answer)));
        let message = controller.error_message().unwrap();
        assert!(message.contains("isn't set up"));
        assert!(!message.contains("try again"));
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let mut controller = filled(configured());
        assert_eq!(controller.finish_submit(Ok(())), None);
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.field(Field::Name), "Ada");
    }
}
