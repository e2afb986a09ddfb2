use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::ContactForm;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// Delivers a validated contact message
#[async_trait::async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<()>;
}

#[derive(Debug, Serialize, PartialEq)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize, PartialEq)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

/// Posts messages to an EmailJS-compatible endpoint
pub struct HttpContactSender {
    client: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl HttpContactSender {
    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        let (Some(service_id), Some(template_id), Some(public_key)) = (
            config.service_id.clone(),
            config.template_id.clone(),
            config.public_key.clone(),
        ) else {
            return Err(Error::Config(
                "contact.service_id, contact.template_id and contact.public_key must be set"
                    .to_string(),
            ));
        };

        // Reject a malformed endpoint up front rather than on first send
        url::Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            service_id,
            template_id,
            public_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request<'a>(&'a self, form: &'a ContactForm) -> EmailRequest<'a> {
        EmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: form.name.trim(),
                from_email: form.email.trim(),
                message: form.message.trim(),
            },
        }
    }
}

#[async_trait::async_trait]
impl ContactSender for HttpContactSender {
    async fn send(&self, form: &ContactForm) -> Result<()> {
        debug!("Sending contact message to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request(form))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Contact delivery rejected with {}: {}", status, body);
        Err(Error::Delivery(format!("{}: {}", status, body.trim())))
    }
}

/// Logs messages instead of sending them
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSender;

#[async_trait::async_trait]
impl ContactSender for DryRunSender {
    async fn send(&self, form: &ContactForm) -> Result<()> {
        info!(
            name = %form.name.trim(),
            email = %form.email.trim(),
            chars = form.message.trim().chars().count(),
            "Dry run: contact message not sent"
        );
        Ok(())
    }
}
