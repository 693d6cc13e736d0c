//! The template renderer: `<%= variable %>` substitution.

use super::{DomainError, RenderContext};

/// Render template content by substituting `<%= variable %>` placeholders.
///
/// Pure function of its two inputs — no I/O, no ambient state.
///
/// # Behaviour
///
/// - Every recognized placeholder is replaced with the context value.
/// - A variable absent from the context renders as the **empty string**.
///   (Leaving the placeholder literal would ship broken markers into the
///   generated project; an empty value is at least visible in review.)
/// - Bytes outside placeholder syntax are passed through unchanged.
/// - `<%` without `=` is ordinary text: only variable substitution is
///   supported, not scriptlets.
///
/// # Errors
///
/// [`DomainError::UnterminatedPlaceholder`] when a `<%=` opener has no
/// matching `%>` before end of input. The caller aborts the whole scaffold
/// rather than skipping the file — a partially-rendered output tree is
/// worse than none.
pub fn render(content: &str, ctx: &RenderContext) -> Result<String, DomainError> {
    const OPEN: &str = "<%=";
    const CLOSE: &str = "%>";

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    let mut consumed = 0usize;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(DomainError::UnterminatedPlaceholder {
                offset: consumed + start,
            })?;

        let name = after_open[..end].trim();
        if let Some(value) = ctx.get(name) {
            out.push_str(value);
        }
        // Unknown variable: substitute nothing (documented fallback).

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_placeholders_both_replaced() {
        let ctx = RenderContext::new("x");
        assert_eq!(
            render("<%= projectName %><%= projectName %>", &ctx).unwrap(),
            "xx"
        );
    }

    #[test]
    fn placeholder_at_start_and_end() {
        let ctx = RenderContext::new("demo");
        assert_eq!(
            render("<%= projectName %> middle <%= projectName %>", &ctx).unwrap(),
            "demo middle demo"
        );
    }

    #[test]
    fn error_offset_points_at_opener() {
        let ctx = RenderContext::new("demo");
        let err = render("ok <%= projectName %> bad <%= oops", &ctx).unwrap_err();
        match err {
            DomainError::UnterminatedPlaceholder { offset } => {
                // The second opener sits after "ok <%= projectName %> bad ".
                assert_eq!(offset, "ok <%= projectName %> bad ".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_content_renders_empty() {
        let ctx = RenderContext::new("demo");
        assert_eq!(render("", &ctx).unwrap(), "");
    }

    #[test]
    fn close_without_open_is_literal() {
        let ctx = RenderContext::new("demo");
        assert_eq!(render("stray %> here", &ctx).unwrap(), "stray %> here");
    }
}
