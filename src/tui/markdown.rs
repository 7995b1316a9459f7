//! Markdown → ratatui `Text` renderer for writing posts.
//!
//! Converts `pulldown_cmark` events into styled `Line`/`Span` values:
//! headings, emphasis, inline code, fenced code blocks (syntect
//! highlighting when the language is known), lists, blockquotes, and
//! links with the URL appended after the link text.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Render markdown into owned styled text (`'static`, so callers aren't
/// tied to the input's lifetime).
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        renderer.handle(event);
    }
    renderer.text
}

struct Renderer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack; nested styles compose via `patch`.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`, code fence `│`).
    prefixes: Vec<Span<'static>>,
    /// List nesting: `None` = unordered, `Some(n)` = ordered at `n`.
    list_indices: Vec<Option<u64>>,
    /// Active highlighter while inside a fenced block with a known language.
    highlighter: Option<HighlightLines<'static>>,
    in_plain_code: bool,
    /// Link URL held until the link text closes.
    link_url: Option<String>,
    /// Whether the next block should be preceded by a blank line.
    pending_blank: bool,
}

impl Renderer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            prefixes: vec![],
            list_indices: vec![],
            highlighter: None,
            in_plain_code: false,
            link_url: None,
            pending_blank: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for prefix in self.prefixes.iter().rev().cloned() {
            out.spans.insert(0, prefix);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn flush_blank(&mut self) {
        if self.pending_blank {
            self.push_line(Line::default());
            self.pending_blank = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text_content(t),
            Event::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.flush_blank();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(32),
                    Style::default().fg(Color::DarkGray),
                )));
                self.pending_blank = true;
            }
            Event::TaskListMarker(checked) => {
                self.push_span(Span::raw(if checked { "[x] " } else { "[ ] " }));
            }
            _ => {} // HTML, footnotes, math
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.flush_blank();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.flush_blank();
                let style = heading_style(self.base_fg, level);
                self.push_line(Line::from(Span::styled(
                    "#".repeat(heading_depth(level)) + " ",
                    style,
                )));
                // Heading text inherits the heading style.
                self.push_style(style);
            }
            Tag::BlockQuote(_) => {
                self.flush_blank();
                self.prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.push_style(
                    Style::default()
                        .fg(self.base_fg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => self.open_code_block(&kind),
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.flush_blank();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                if let Some(index) = self.list_indices.last_mut() {
                    let marker = match index {
                        None => format!("{indent}- "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // tables, images, definitions
        }
    }

    fn open_code_block(&mut self, kind: &CodeBlockKind<'_>) {
        if !self.text.lines.is_empty() {
            self.push_line(Line::default());
        }
        let lang = match kind {
            CodeBlockKind::Fenced(l) => l.as_ref(),
            CodeBlockKind::Indented => "",
        };

        let border = Style::default().fg(Color::DarkGray);
        let top = if lang.is_empty() {
            Line::from(Span::styled("╭──", border))
        } else {
            Line::from(vec![
                Span::styled("╭── ", border),
                Span::styled(lang.to_owned(), border.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", border),
            ])
        };
        self.push_line(top);
        self.prefixes.push(Span::styled("│ ", border));

        if !lang.is_empty()
            && let Some(syntax) = SYNTAX_SET.find_syntax_by_token(lang)
        {
            let theme = &THEME_SET.themes["base16-ocean.dark"];
            self.highlighter = Some(HighlightLines::new(syntax, theme));
        }
        if self.highlighter.is_none() {
            self.in_plain_code = true;
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.pending_blank = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.pending_blank = true;
            }
            TagEnd::BlockQuote(_) => {
                self.prefixes.pop();
                self.pop_style();
                self.pending_blank = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_plain_code = false;
                self.prefixes.pop();
                self.push_line(Line::from(Span::styled(
                    "╰──",
                    Style::default().fg(Color::DarkGray),
                )));
                self.pending_blank = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.pending_blank = true;
            }
            TagEnd::Item => {}
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(
                        url,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    self.push_span(Span::raw(")"));
                }
            }
            _ => {}
        }
    }

    fn text_content(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width; expand up front.
        let text = cow.replace('\t', "    ");

        // Highlighted code: take the highlighter out so highlight_line's
        // borrow doesn't fight push_line's.
        if let Some(mut hl) = self.highlighter.take() {
            for line in LinesWithEndings::from(text.as_str()) {
                if let Ok(ranges) = hl.highlight_line(line, &SYNTAX_SET) {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .filter_map(|(hl_style, fragment)| {
                            let content = fragment.trim_end_matches('\n').to_owned();
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect();
                    if !spans.is_empty() {
                        self.push_line(Line::from(spans));
                    }
                }
            }
            self.highlighter = Some(hl);
            return;
        }

        if self.in_plain_code {
            let style = Style::default().fg(Color::White);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), style)));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn heading_text_inherits_heading_style() {
        let text = render("# Title", Color::Blue);
        let line = &text.lines[0];
        assert!(line.spans.len() >= 2);
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[1].style.fg, Some(Color::Blue));
    }

    #[test]
    fn bold_and_italic_compose() {
        let text = render("***both***", Color::White);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "both")
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn fenced_code_gets_borders_and_prefix() {
        let text = render("```\nlet x = 1;\n```", Color::White);
        let rendered: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(rendered[0].starts_with('╭'));
        assert!(rendered[1].starts_with("│ "));
        assert!(rendered[1].contains("let x = 1;"));
        assert!(rendered.last().unwrap().starts_with('╰'));
    }

    #[test]
    fn rust_fence_is_highlighted() {
        let text = render("```rust\nfn main() {}\n```", Color::White);
        let has_rgb = text.lines.iter().any(|l| {
            l.spans
                .iter()
                .any(|s| matches!(s.style.fg, Some(Color::Rgb(..))))
        });
        assert!(has_rgb, "rust code should get syntect colors");
    }

    #[test]
    fn links_append_their_url() {
        let text = render("see [the repo](https://example.com)", Color::White);
        let rendered = line_text(&text.lines[0]);
        assert!(rendered.contains("the repo"));
        assert!(rendered.contains("(https://example.com)"));
    }

    #[test]
    fn blockquote_lines_are_prefixed() {
        let text = render("> quoted wisdom", Color::White);
        let rendered: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(rendered.iter().any(|l| l.starts_with("│ ")));
    }

    #[test]
    fn ordered_lists_count_up() {
        let text = render("1. first\n2. second", Color::White);
        let rendered: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(rendered.iter().any(|l| l.starts_with("1. ")));
        assert!(rendered.iter().any(|l| l.starts_with("2. ")));
    }

    #[test]
    fn writing_posts_render_without_panicking() {
        for post in crate::content::writings::ALL {
            let text = render(post.body, Color::White);
            assert!(!text.lines.is_empty());
        }
    }
}
