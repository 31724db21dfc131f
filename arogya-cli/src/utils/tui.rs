use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(120);

/// Spinner shown while a form is with the submission service.
pub fn sending(form: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner:.green} Sending your {msg} form...")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("·•●•· ");

    let spinner = ProgressBar::new_spinner().with_style(style);
    spinner.set_message(form.replace('_', " "));
    spinner.enable_steady_tick(TICK);
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sending_names_the_form() {
        let spinner = sending("email_capture");
        assert_eq!(spinner.message(), "email capture");
        spinner.finish_and_clear();
    }
}
