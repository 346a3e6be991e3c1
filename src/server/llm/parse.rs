use crate::{model::analysis::Advice, server::error::analysis::AnalysisError};

/// Parses the model's raw text reply into a validated [`Advice`].
///
/// Leading and trailing code-fence markers are stripped first since models
/// frequently wrap their JSON despite instructions. Parsing failures map to
/// [`AnalysisError::Parse`], shape mismatches to [`AnalysisError::Shape`].
/// Advice content is not validated semantically; once shape-valid, the
/// model's text is trusted verbatim.
pub fn parse_advice(raw: &str) -> Result<Advice, AnalysisError> {
    let content = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|err| AnalysisError::Parse(err.to_string()))?;

    let advice: Advice = serde_json::from_value(value)
        .map_err(|err| AnalysisError::Shape(err.to_string()))?;

    if advice.main_advice.title.trim().is_empty() {
        return Err(AnalysisError::Shape(
            "mainAdvice.title must not be empty".to_string(),
        ));
    }
    if advice.main_advice.text.trim().is_empty() {
        return Err(AnalysisError::Shape(
            "mainAdvice.text must not be empty".to_string(),
        ));
    }

    for (index, item) in advice.secondary_advices.iter().enumerate() {
        if item.title.trim().is_empty() || item.text.trim().is_empty() {
            return Err(AnalysisError::Shape(format!(
                "secondaryAdvices[{index}] must carry a non-empty title and text"
            )));
        }
    }

    Ok(advice)
}

/// Strips a leading ```/```json fence line and a trailing ``` fence line.
fn strip_code_fences(raw: &str) -> &str {
    let mut content = raw.trim();

    if let Some(rest) = content.strip_prefix("```") {
        // Drop the remainder of the fence line, e.g. the "json" tag
        content = match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest,
        };
    }

    if let Some(rest) = content.trim_end().strip_suffix("```") {
        content = rest;
    }

    content.trim()
}
