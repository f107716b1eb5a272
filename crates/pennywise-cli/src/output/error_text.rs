use pennywise_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        lines.extend(
            error
                .recovery_steps
                .iter()
                .enumerate()
                .map(|(index, step)| format!("  {}. {step}", index + 1)),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pennywise_client::ClientError;

    use super::render_error;

    #[test]
    fn renders_code_details_and_numbered_steps() {
        let error = ClientError::invalid_argument_with_recovery(
            "bad input",
            vec!["first".to_string(), "second".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Something went wrong."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("  1. first\n  2. second"));
    }

    #[test]
    fn falls_back_to_retry_hint() {
        let rendered = render_error(&ClientError::internal_serialization("boom"));
        assert!(rendered.ends_with("  1. Retry the command."));
    }
}
