use crate::domain::AppError;

/// A challenge name and company name entered together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub challenge: String,
    pub company: String,
}

/// Parse `"Challenge Name | Company Name"` input.
pub fn parse_selection(input: &str) -> Result<Selection, AppError> {
    let mut parts = input.split('|');
    let (Some(challenge), Some(company), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format_error());
    };

    let challenge = challenge.trim();
    let company = company.trim();
    if challenge.is_empty() || company.is_empty() {
        return Err(format_error());
    }

    Ok(Selection { challenge: challenge.to_string(), company: company.to_string() })
}

fn format_error() -> AppError {
    AppError::validation("Incorrect format. Use: 'Challenge Name | Company Name'")
}
