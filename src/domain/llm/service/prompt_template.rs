use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptTemplateError {
    #[error("unknown placeholder `{{{0}}}` in prompt template")]
    UnknownPlaceholder(String),

    #[error("unbalanced brace at byte {0} in prompt template")]
    UnbalancedBrace(usize),
}

/// Fill `{name}` placeholders from `values`. `{{` and `}}` produce literal braces,
/// so templates can carry JSON examples.
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String, PromptTemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                let mut closed = false;
                for (_, n) in chars.by_ref() {
                    match n {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(PromptTemplateError::UnbalancedBrace(pos)),
                        other => name.push(other),
                    }
                }
                if !closed {
                    return Err(PromptTemplateError::UnbalancedBrace(pos));
                }

                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, v)| *v)
                    .ok_or(PromptTemplateError::UnknownPlaceholder(name))?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(PromptTemplateError::UnbalancedBrace(pos));
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
