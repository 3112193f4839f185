//! Markdown-subset rendering as an ordered substitution pipeline.

use regex::Regex;

/// A single substitution rule: pattern in, replacement template out.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is valid"),
            replacement,
        }
    }
}

/// The preview rendering pipeline.
///
/// Escapes `&`, `<`, `>` first, then applies the substitution rules in a
/// fixed order, then turns remaining newlines into `<br/>`. The rule order
/// is load-bearing: three-hash headings before two before one (longest
/// prefix first), and bold before italic (the single-asterisk pattern also
/// matches the bold form). The subset is deliberately frozen; there is no
/// way to escape markdown syntax itself, so a literal `*` cannot be
/// produced.
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Compiles the fixed rule set.
    pub fn new() -> Self {
        let rules = vec![
            Rule::new(r"(?m)^### (.*)$", "<h3>${1}</h3>"),
            Rule::new(r"(?m)^## (.*)$", "<h2>${1}</h2>"),
            Rule::new(r"(?m)^# (.*)$", "<h1>${1}</h1>"),
            Rule::new(r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
            Rule::new(r"\*(.*?)\*", "<em>${1}</em>"),
            Rule::new(
                r"\[(.*?)\]\((.*?)\)",
                r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#,
            ),
        ];
        Self { rules }
    }

    /// Renders note text to a sanitized HTML fragment.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = escape(text);
        for rule in &self.rules {
            out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
        }
        out.replace('\n', "<br/>")
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes `&`, `<`, and `>` so surrounding transformations cannot inject
/// markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders note text to a sanitized HTML fragment with a fresh pipeline.
///
/// # Examples
///
/// ```
/// use jot::render::render;
///
/// assert_eq!(render("**bold**"), "<strong>bold</strong>");
/// ```
pub fn render(text: &str) -> String {
    Pipeline::new().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_documented_example() {
        assert_eq!(
            render("# Title\n**bold** and *italic*"),
            "<h1>Title</h1><br/><strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn escapes_html_before_substitution() {
        assert_eq!(
            render("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(render("AT&T"), "AT&amp;T");
    }

    #[test]
    fn renders_all_heading_levels() {
        assert_eq!(
            render("# One\n## Two\n### Three"),
            "<h1>One</h1><br/><h2>Two</h2><br/><h3>Three</h3>"
        );
    }

    #[test]
    fn longest_heading_prefix_wins() {
        // A three-hash line must not be half-eaten by the one-hash rule.
        assert_eq!(render("### Deep"), "<h3>Deep</h3>");
    }

    #[test]
    fn four_hashes_are_not_a_heading() {
        assert_eq!(render("#### Nope"), "#### Nope");
    }

    #[test]
    fn heading_requires_space_after_hashes() {
        assert_eq!(render("#Tight"), "#Tight");
    }

    #[test]
    fn heading_only_matches_at_line_start() {
        assert_eq!(render("not # a heading"), "not # a heading");
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(render("**just bold**"), "<strong>just bold</strong>");
    }

    #[test]
    fn mixed_bold_and_italic_on_one_line() {
        assert_eq!(
            render("*a* and **b**"),
            "<em>a</em> and <strong>b</strong>"
        );
    }

    #[test]
    fn links_open_in_new_context_without_referrer() {
        assert_eq!(
            render("[docs](https://example.com)"),
            r#"<a href="https://example.com" target="_blank" rel="noopener">docs</a>"#
        );
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(render("a\nb\n\nc"), "a<br/>b<br/><br/>c");
    }

    #[test]
    fn pipeline_is_reusable() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.render("# A"), "<h1>A</h1>");
        assert_eq!(pipeline.render("# B"), "<h1>B</h1>");
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# T\n**b** *i* [l](u)\n& < >";
        assert_eq!(render(input), render(input));
    }
}
