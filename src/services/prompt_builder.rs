//! Prompt builder.
//!
//! Renders the embedded cold-email template for one challenge and company.
//! Rendering is pure string composition: the same inputs always produce the
//! same prompt text.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, ChallengeRecord, EmailRequest, PromptText, TARGET_LANGUAGE};

const TEMPLATE_NAME: &str = "cold_email";
const TEMPLATE_SOURCE: &str = include_str!("../assets/prompts/cold_email.j2");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Serialize)]
struct ChallengeView<'a> {
    name: &'a str,
    description: &'a str,
    fields: Vec<FieldView<'a>>,
}

#[derive(Serialize)]
struct FieldView<'a> {
    label: &'a str,
    value: &'a str,
}

/// Build the instruction text for a selected challenge and company name.
///
/// Fails with a validation error when no record is selected or the company
/// name is blank.
pub fn build(record: Option<&ChallengeRecord>, company_name: &str) -> Result<PromptText, AppError> {
    let request = EmailRequest::new(record, company_name)?;
    render(&request)
}

/// Render the template for a validated request.
pub fn render(request: &EmailRequest<'_>) -> Result<PromptText, AppError> {
    let record = request.record();
    let challenge = ChallengeView {
        name: record.name(),
        description: record.description(),
        fields: record
            .fields()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| FieldView { label: label.as_str(), value: value.as_str() })
            .collect(),
    };

    let template = environment()?
        .get_template(TEMPLATE_NAME)
        .map_err(|err| template_error(&err))?;

    let text = template
        .render(context! {
            language => TARGET_LANGUAGE,
            company_name => request.company_name(),
            challenge => challenge,
        })
        .map_err(|err| template_error(&err))?;

    Ok(PromptText::new(text))
}

fn environment() -> Result<&'static Environment<'static>, AppError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE).map_err(|err| template_error(&err))?;
    Ok(ENV.get_or_init(|| env))
}

fn template_error(err: &minijinja::Error) -> AppError {
    AppError::config_error(format!("Prompt template '{}' failed: {}", TEMPLATE_NAME, err))
}
