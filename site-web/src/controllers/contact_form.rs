//! Contact form: submission is intercepted and logged. Nothing is sent.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};

/// Field names and values captured from one submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSubmission {
    pub fields: Vec<(String, String)>,
}

impl ContactSubmission {
    /// Names of the fields that were filled in. Values are left out so that
    /// personal data does not end up in the console.
    pub fn filled_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn from_form(form: &HtmlFormElement) -> Result<Self, JsValue> {
        let data = FormData::new_with_form(form)?;
        let mut fields = Vec::new();

        if let Some(entries) = js_sys::try_iter(&data)? {
            for entry in entries {
                let pair = js_sys::Array::from(&entry?);
                let name = pair.get(0).as_string().unwrap_or_default();
                // File inputs have no string value.
                let value = pair.get(1).as_string().unwrap_or_default();
                fields.push((name, value));
            }
        }

        Ok(Self { fields })
    }
}

/// Intercept `submit` on the contact form.
pub fn bind(form: HtmlFormElement) {
    let target = form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            match ContactSubmission::from_form(&form) {
                Ok(submission) => {
                    log::info!("Form submitted: {:?}", submission.filled_fields());
                }
                Err(e) => log::error!("Error reading contact form: {:?}", e),
            }
        },
    )
    .forget();
}
