//! Input validation helpers shared by all procedures.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use promohub_core::error::AppError;
use promohub_core::result::AppResult;

/// Largest value a `NUMERIC(12,2)` budget column holds.
pub const MAX_BUDGET: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);
/// Largest value a `NUMERIC(5,2)` engagement rate column holds.
pub const MAX_ENGAGEMENT_RATE: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// Run `validator` rules and convert failures into a validation error
/// with per-field details.
pub fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(into_app_error)
}

/// Convert `ValidationErrors` into an [`AppError`].
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut fields = BTreeMap::new();
    collect(&errors, None, &mut fields);

    let summary = fields.keys().cloned().collect::<Vec<_>>().join(", ");
    AppError::validation(format!("Invalid input: {summary}"))
        .with_details(serde_json::json!({ "fields": fields }))
}

fn collect(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = list.iter().map(message_of).collect();
                out.insert(path, messages);
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, prefix, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Budget must fit `[0, MAX_BUDGET]`.
pub fn validate_budget(value: &Decimal) -> Result<(), ValidationError> {
    decimal_in_range(value, MAX_BUDGET, "budget_range", "Budget must be between 0 and 9999999999.99")
}

/// Engagement rate must fit `[0, MAX_ENGAGEMENT_RATE]`.
pub fn validate_engagement_rate(value: &Decimal) -> Result<(), ValidationError> {
    decimal_in_range(
        value,
        MAX_ENGAGEMENT_RATE,
        "engagement_rate_range",
        "Engagement rate must be between 0 and 999.99",
    )
}

fn decimal_in_range(
    value: &Decimal,
    max: Decimal,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if (value.is_sign_negative() && !value.is_zero()) || *value > max {
        return Err(ValidationError::new(code).with_message(message.into()));
    }
    Ok(())
}
