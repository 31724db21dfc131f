use anyhow::Result;
use arogya_core::forms::{FormError, FormSubmission, FormSubmitter, MockSubmitter};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::utils::tui;

pub async fn join(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    referral: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || email.is_none();

    let form = FormSubmission::Registration {
        full_name: required(name, "  Full name")?,
        email: required(email, "  Email")?,
        phone: optional(phone, "  Phone (skip)", interactive)?,
        referral_source: optional(referral, "  How did you hear about us? (skip)", interactive)?,
    };

    submit(form).await
}

pub async fn contact(
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || email.is_none() || message.is_none();

    let form = FormSubmission::Contact {
        name: required(name, "  Name")?,
        email: required(email, "  Email")?,
        subject: optional(subject, "  Subject (skip)", interactive)?,
        message: required(message, "  Message")?,
    };

    submit(form).await
}

pub async fn subscribe(first_name: Option<String>, email: Option<String>) -> Result<()> {
    let form = FormSubmission::EmailCapture {
        first_name: required(first_name, "  First name")?,
        email: required(email, "  Email")?,
    };

    submit(form).await
}

pub async fn newsletter(email: Option<String>) -> Result<()> {
    let form = FormSubmission::Newsletter {
        email: required(email, "  Email")?,
    };

    submit(form).await
}

async fn submit(form: FormSubmission) -> Result<()> {
    let spinner = tui::sending(form.name());
    let result = MockSubmitter::default().submit(&form).await;
    spinner.finish_and_clear();

    match result {
        Ok(ack) => {
            println!("{}", ack.message.green());
            Ok(())
        }
        Err(FormError::Invalid(errors)) => {
            for error in &errors {
                println!("  {} {}", error.field.dimmed(), error.message.red());
            }
            anyhow::bail!("Please fix the fields above and try again")
        }
        Err(e) => Err(e.into()),
    }
}

fn required(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

fn optional(value: Option<String>, prompt: &str, interactive: bool) -> Result<Option<String>> {
    let value = match value {
        Some(v) => v,
        None if interactive => Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    Ok(if value.is_empty() { None } else { Some(value) })
}
