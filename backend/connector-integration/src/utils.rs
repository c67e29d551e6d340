use domain_types::errors;

pub mod flat_form;

pub fn missing_field_err(
    message: &'static str,
) -> Box<dyn Fn() -> error_stack::Report<errors::ConnectorError> + 'static> {
    Box::new(move || {
        errors::ConnectorError::MissingRequiredField {
            field_name: message,
        }
        .into()
    })
}

/// Fails with `MissingRequiredField` when `value` is blank.
pub fn require_non_blank(
    value: &str,
    field_name: &'static str,
) -> Result<(), error_stack::Report<errors::ConnectorError>> {
    common_utils::fp_utils::when(value.trim().is_empty(), || {
        Err(missing_field_err(field_name)())
    })
}
