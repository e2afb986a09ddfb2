//! Contact form: validation, delivery and the toasts reporting the outcome

mod sender;
mod toast;
mod validation;

pub use sender::{ContactSender, DryRunSender, HttpContactSender};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use validation::{
    ContactField, ContactForm, ContactRules, FieldError, FieldErrorKind, ValidationErrors,
};

use std::time::Duration;

use tracing::warn;

/// Validate and deliver a form, describing the outcome as a toast
///
/// Invalid forms never reach the sender.
pub async fn submit_contact(
    form: &ContactForm,
    rules: &ContactRules,
    sender: &dyn ContactSender,
    now: Duration,
) -> Toast {
    if let Err(errors) = rules.validate(form) {
        let message = errors
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Invalid form".to_string());
        return Toast::error(message, now);
    }

    match sender.send(form).await {
        Ok(()) => Toast::success("Message sent successfully!", now),
        Err(e) => {
            warn!("Failed to send contact message: {}", e);
            Toast::error("Failed to send message. Please try again.", now)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::ContactConfig;
    use crate::{Error, Result};

    struct MockSender {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockSender {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ContactSender for MockSender {
        async fn send(&self, _form: &ContactForm) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::Delivery("503 Service Unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn rules() -> ContactRules {
        ContactRules::from_config(&ContactConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_form_is_sent() {
        let sender = MockSender::new(false);
        let form = ContactForm::new("Jo", "jo@example.com", "Hello there!");
        let toast = submit_contact(&form, &rules(), &sender, Duration::from_secs(3)).await;

        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.created_at, Duration::from_secs(3));
        assert_eq!(sender.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_sender() {
        let sender = MockSender::new(false);
        let form = ContactForm::new("", "jo@example", "hi");
        let toast = submit_contact(&form, &rules(), &sender, Duration::ZERO).await;

        assert!(toast.is_error());
        assert_eq!(toast.message, "Name is required");
        assert_eq!(sender.calls(), 0);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_an_error_toast() {
        let sender = MockSender::new(true);
        let form = ContactForm::new("Jo", "jo@example.com", "Hello there!");
        let toast = submit_contact(&form, &rules(), &sender, Duration::ZERO).await;

        assert!(toast.is_error());
        assert_eq!(sender.calls(), 1);
    }
}
