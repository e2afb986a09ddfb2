use anyhow::{bail, Result};

use folio_core::contact::{ContactForm, ContactRules};
use folio_core::AppConfig;

pub fn run(config: &AppConfig, name: String, email: String, message: String) -> Result<()> {
    let rules = ContactRules::from_config(&config.contact)?;
    let form = ContactForm::new(name, email, message);

    match rules.validate(&form) {
        Ok(()) => {
            println!("Form is valid.");
            Ok(())
        }
        Err(errors) => {
            println!("Form has {} problem(s):", errors.len());
            for error in errors.iter() {
                println!("  - {}", error);
            }
            bail!("validation failed")
        }
    }
}
