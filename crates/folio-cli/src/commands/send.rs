use std::time::Duration;

use anyhow::{bail, Result};

use folio_core::contact::{
    submit_contact, ContactForm, ContactRules, ContactSender, DryRunSender, HttpContactSender,
};
use folio_core::AppConfig;

pub async fn run(
    config: &AppConfig,
    name: String,
    email: String,
    message: String,
    dry_run: bool,
) -> Result<()> {
    let rules = ContactRules::from_config(&config.contact)?;
    let form = ContactForm::new(name, email, message);

    let sender: Box<dyn ContactSender> = if dry_run {
        Box::new(DryRunSender)
    } else {
        Box::new(HttpContactSender::from_config(&config.contact)?)
    };

    println!("Sending message from {}...", form.email.trim());
    let toast = submit_contact(&form, &rules, sender.as_ref(), Duration::ZERO).await;
    if toast.is_error() {
        bail!(toast.message);
    }
    println!("{}", toast.message);
    Ok(())
}
