//! Rendering of post content into the blog's HTML page layout.
//!
//! [`render_sections`] turns an ordered list of [`Section`]s into an HTML
//! fragment and [`render_document`] embeds that fragment in the fixed page
//! template shared by every post. Both are pure: the same input always gives
//! the same output.

use std::fmt::Write;

use crate::models::Section;

const WORDS_PER_MINUTE: usize = 200;

/// Render `sections` into an HTML fragment.
///
/// Code blocks are numbered from 0 in document order; block `i` gets a
/// button calling `copyToClipboard(i)`. Prose fields are written verbatim
/// and may contain inline markup. Code is escaped.
pub fn render_sections(sections: &[Section]) -> String {
    let mut html = String::new();
    let mut code_index = 0;
    for section in sections {
        // Writing to a String cannot fail
        let _ = match section {
            Section::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                writeln!(
                    html,
                    "<div class=\"section\">\n    <h{level}>{text}</h{level}>"
                )
            }
            Section::Text { text } => writeln!(html, "    <p>{text}</p>"),
            Section::Code { language, code } => {
                let block = code_block(code, language, code_index);
                code_index += 1;
                writeln!(html, "    {block}")
            }
            Section::List { items } => {
                html.push_str("    <ul>\n");
                for item in items {
                    let _ = writeln!(html, "        <li>{item}</li>");
                }
                html.push_str("    </ul>\n");
                Ok(())
            }
            Section::Faq { question, answer } => writeln!(
                html,
                "    <div class=\"faq\">\n        <h3>{question}</h3>\n        <p>{answer}</p>\n    </div>"
            ),
            Section::SectionEnd => {
                html.push_str("</div>\n\n");
                Ok(())
            }
        };
    }
    html
}

fn code_block(code: &str, language: &str, index: usize) -> String {
    let code = escape_html(code);
    format!(
        r#"<div class="code-box">
        <button class="copy-button" onclick="copyToClipboard({index})">Copy Code</button>
        <pre><code class="language-{language}">
{code}
        </code></pre>
    </div>"#
    )
}

/// Escape the characters that would otherwise be parsed as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render `sections` and wrap them in the full page template.
///
/// `language` selects the Prism component loaded for syntax highlighting.
pub fn render_document(title: &str, language: &str, sections: &[Section]) -> String {
    page(title, language, &render_sections(sections))
}

/// The fixed page template with its three substitution points.
pub fn page(title: &str, language: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.0/themes/prism.min.css">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.0/prism.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/prism/1.24.0/components/prism-{language}.min.js"></script>
    <style>
        pre[class*="language-"],
        code[class*="language-"] {{
            background-color: #ffffff !important;
            color: #000000 !important;
        }}
        h1, h2, h3 {{
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            font-size: 22px;
        }}
        .section {{
            margin-bottom: 40px;
        }}
        .code-box {{
            position: relative;
            padding: 20px;
            border-radius: 5px;
            margin-bottom: 20px;
            overflow: auto;
            background-color: #ffffff;
            border: 1px solid #ddd;
        }}
        .copy-button {{
            background-color: #0074d9;
            color: #fff;
            border: none;
            padding: 5px 10px;
            border-radius: 5px;
            cursor: pointer;
            position: absolute;
            top: 10px;
            right: 10px;
        }}
        .copy-button.copied {{
            background-color: #4CAF50;
            transition: background-color 0.5s;
        }}
        pre {{
            margin: 0;
        }}
        ul {{
            padding-left: 20px;
        }}
        .faq {{
            background-color: #fff;
            border-left: 5px solid #0074d9;
            padding: 15px 20px;
            margin: 20px 0;
        }}
        .faq p {{
            margin: 10px 0;
        }}
    </style>
</head>
<body>

{content}

<script>
    Prism.highlightAll();

    function copyToClipboard(index) {{
        const codeBlocks = document.querySelectorAll('.code-box code');
        const selectedCode = codeBlocks[index].textContent;
        const button = document.querySelectorAll('.copy-button')[index];

        const textarea = document.createElement('textarea');
        textarea.value = selectedCode;
        document.body.appendChild(textarea);
        textarea.select();
        document.execCommand('copy');
        document.body.removeChild(textarea);

        button.classList.add('copied');
        setTimeout(function() {{
            button.classList.remove('copied');
        }}, 500);
    }}
</script>
</body>
</html>"#
    )
}

/// Estimated minutes needed to read `sections`, at 200 words per minute,
/// rounded up. Never less than one minute.
pub fn estimate_read_time(sections: &[Section]) -> u32 {
    let words: usize = sections
        .iter()
        .map(|section| match section {
            Section::Heading { text, .. } | Section::Text { text } => word_count(text),
            Section::Code { code, .. } => word_count(code),
            Section::List { items } => items.iter().map(|item| word_count(item)).sum(),
            Section::Faq { question, answer } => word_count(question) + word_count(answer),
            Section::SectionEnd => 0,
        })
        .sum();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_opens_section() {
        let html = render_sections(&[Section::heading(2, "Introduction")]);
        assert_eq!(html, "<div class=\"section\">\n    <h2>Introduction</h2>\n");
    }

    #[test]
    fn heading_level_is_respected() {
        let html = render_sections(&[Section::heading(3, "Details")]);
        assert!(html.contains("<h3>Details</h3>"));
        let html = render_sections(&[Section::heading(9, "Too deep")]);
        assert!(html.contains("<h6>Too deep</h6>"));
    }

    #[test]
    fn text_list_faq_and_section_end() {
        let html = render_sections(&[
            Section::text("Hello"),
            Section::list(["one", "two"]),
            Section::faq("Why?", "Because."),
            Section::SectionEnd,
        ]);
        assert_eq!(
            html,
            "    <p>Hello</p>\n\
             \x20   <ul>\n\
             \x20       <li>one</li>\n\
             \x20       <li>two</li>\n\
             \x20   </ul>\n\
             \x20   <div class=\"faq\">\n\
             \x20       <h3>Why?</h3>\n\
             \x20       <p>Because.</p>\n\
             \x20   </div>\n\
             </div>\n\n"
        );
    }

    #[test]
    fn empty_list() {
        let html = render_sections(&[Section::list(Vec::<String>::new())]);
        assert_eq!(html, "    <ul>\n    </ul>\n");
    }

    #[test]
    fn code_blocks_are_numbered() {
        let html = render_sections(&[
            Section::code("python", "print(1)"),
            Section::text("between"),
            Section::code("yaml", "a: 1"),
        ]);
        assert_eq!(html.matches("copyToClipboard(0)").count(), 1);
        assert_eq!(html.matches("copyToClipboard(1)").count(), 1);
        assert!(!html.contains("copyToClipboard(2)"));
        assert!(html.contains("<code class=\"language-python\">\nprint(1)\n"));
        assert!(html.contains("<code class=\"language-yaml\">\na: 1\n"));
    }

    #[test]
    fn one_code_one_heading() {
        let html = render_sections(&[
            Section::heading(2, "Code Example"),
            Section::code("python", "x = 1"),
        ]);
        assert_eq!(html.matches("copyToClipboard(0)").count(), 1);
        assert!(html.contains("<h2>Code Example</h2>"));
    }

    #[test]
    fn code_is_escaped() {
        let html = render_sections(&[Section::code("rust", "let v: Vec<u8> = a && b;")]);
        assert!(html.contains("let v: Vec&lt;u8&gt; = a &amp;&amp; b;"));
    }

    #[test]
    fn prose_keeps_markup() {
        let html = render_sections(&[Section::text("Use <code>pip</code>")]);
        assert!(html.contains("<p>Use <code>pip</code></p>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let sections = vec![
            Section::heading(2, "Intro"),
            Section::code("python", "print()"),
            Section::SectionEnd,
        ];
        assert_eq!(render_sections(&sections), render_sections(&sections));
    }

    #[test]
    fn document_substitutions() {
        let doc = render_document("My Post", "yaml", &[Section::text("Body")]);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>My Post</title>"));
        assert!(doc.contains("components/prism-yaml.min.js"));
        assert!(doc.contains("<body>\n\n    <p>Body</p>\n\n\n<script>"));
        assert!(doc.contains("function copyToClipboard(index) {"));
        assert!(doc.contains("}, 500);"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn template_braces_are_literal() {
        let doc = page("t", "python", "");
        assert!(doc.contains(".section {\n            margin-bottom: 40px;\n        }"));
        assert!(!doc.contains("{{"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let json = r#"[
            {"type": "heading", "text": "Intro"},
            {"type": "code", "code": "print()"},
            {"type": "list"},
            {"type": "faq"},
            {"type": "section_end"}
        ]"#;
        let sections: Vec<Section> = serde_json::from_str(json).unwrap();
        assert_eq!(
            sections,
            vec![
                Section::heading(2, "Intro"),
                Section::code("python", "print()"),
                Section::list(Vec::<String>::new()),
                Section::faq("FAQ", ""),
                Section::SectionEnd,
            ]
        );
    }

    #[test]
    fn read_time() {
        assert_eq!(estimate_read_time(&[]), 1);
        let long = vec!["word"; 401].join(" ");
        assert_eq!(estimate_read_time(&[Section::text(long)]), 3);
        assert_eq!(
            estimate_read_time(&[Section::heading(2, "two words"), Section::list(["a b", "c"])]),
            1
        );
    }
}
