//! `${...}` span scanning and expression evaluation.

use crate::context::eval_context;
use crate::error::{TemplateError, TemplateResult};
use minijinja::{Environment, UndefinedBehavior};
use semver::Version;

/// Template evaluator bound to one project version.
///
/// Pure: evaluating the same text twice yields the same output, and a
/// failed evaluation never returns partially substituted text.
pub struct Evaluator {
    context: minijinja::Value,
}

/// One segment of the scanned input.
#[derive(Debug)]
enum Part<'a> {
    Literal(&'a str),
    Expression(&'a str),
}

impl Evaluator {
    /// Create an evaluator whose context is derived from `version`.
    pub fn new(version: &Version) -> Self {
        Self {
            context: eval_context(version),
        }
    }

    /// Substitute every `${...}` span in `text`.
    ///
    /// Text without spans is returned unchanged.
    pub fn eval(&self, text: &str) -> TemplateResult<String> {
        // The environment borrows the expression sources, so it lives per
        // call rather than in the evaluator.
        let mut env = Environment::new();
        // Unknown identifiers must abort the run, not render as empty.
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let mut out = String::with_capacity(text.len());
        for part in scan(text)? {
            match part {
                Part::Literal(literal) => out.push_str(literal),
                Part::Expression(expression) => {
                    out.push_str(&self.eval_expression(&env, expression)?);
                }
            }
        }
        Ok(out)
    }

    fn eval_expression<'t>(
        &self,
        env: &Environment<'t>,
        expression: &'t str,
    ) -> TemplateResult<String> {
        let compiled = env.compile_expression(expression).map_err(|e| {
            TemplateError::Evaluation {
                expression: expression.to_string(),
                message: e.to_string(),
            }
        })?;
        let value = compiled
            .eval(&self.context)
            .map_err(|e| TemplateError::Evaluation {
                expression: expression.to_string(),
                message: e.to_string(),
            })?;
        // Strict mode only rejects operating on undefined; an expression
        // that merely yields it would stringify to "".
        if value.is_undefined() {
            return Err(TemplateError::Evaluation {
                expression: expression.to_string(),
                message: "undefined value".to_string(),
            });
        }
        log::trace!("evaluated ${{{expression}}} -> {value}");
        Ok(value.to_string())
    }
}

/// Split `text` into literal and expression segments.
///
/// A span opens at `${` and closes when its brace depth returns to zero,
/// so expression bodies may themselves contain balanced braces.
fn scan(text: &str) -> TemplateResult<Vec<Part<'_>>> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            if literal_start < i {
                parts.push(Part::Literal(&text[literal_start..i]));
            }

            let body_start = i + 2;
            let mut depth = 1usize;
            let mut j = body_start;
            while j < bytes.len() {
                match bytes[j] {
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                j += 1;
            }

            if depth > 0 {
                if text[body_start..].trim().is_empty() {
                    return Err(TemplateError::UnterminatedExpression {
                        fragment: text[i..].to_string(),
                    });
                }
                return Err(TemplateError::MissingClosers { count: depth });
            }

            parts.push(Part::Expression(&text[body_start..j]));
            i = j + 1;
            literal_start = i;
        } else {
            i += 1;
        }
    }

    if literal_start < text.len() {
        parts.push(Part::Literal(&text[literal_start..]));
    }

    Ok(parts)
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod tests;
