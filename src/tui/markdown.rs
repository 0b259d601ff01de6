//! Lesson text → ratatui `Text` renderer.
//!
//! Lesson prose is light markdown: paragraphs, lists, `inline code`,
//! emphasis and the occasional raw tag like `<script>`. Code samples are highlighted with
//! syntect.

use std::sync::LazyLock;

use log::warn;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_SYNTAX_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Parse lesson prose into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render_prose(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

// ── Prose writer ────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch` so bold+italic works.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// The last line holds only a list marker; the item's first block joins it.
    in_fresh_item: bool,
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            list_indices: vec![],
            in_fresh_item: false,
            needs_newline: false,
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

    fn push_span(&mut self, span: Span<'static>) {
        self.in_fresh_item = false;
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.text.lines.push(Line::from(vec![span]));
        }
    }

    fn start_block(&mut self) {
        if self.in_fresh_item {
            self.in_fresh_item = false;
            return;
        }
        if self.needs_newline {
            self.text.lines.push(Line::default());
            self.needs_newline = false;
        }
        self.text.lines.push(Line::default());
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph | Tag::Heading { .. }) => self.start_block(),
            Event::Start(Tag::List(start)) => {
                if self.list_indices.is_empty() && self.needs_newline {
                    self.text.lines.push(Line::default());
                }
                self.needs_newline = false;
                self.list_indices.push(start);
            }
            Event::Start(Tag::Item) => self.start_item(),
            Event::Start(Tag::Emphasis) => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC))
            }
            Event::Start(Tag::Strong) => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD))
            }
            Event::Start(Tag::Strikethrough) => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => self.needs_newline = true,
            Event::End(TagEnd::List(_)) => {
                self.list_indices.pop();
                self.needs_newline = self.list_indices.is_empty();
            }
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) => {
                self.styles.pop();
            }
            Event::Text(t) => self.plain(t),
            // Prose mentions tags like `<script>` without backticks; show them verbatim
            Event::InlineHtml(h) | Event::Html(h) => self.plain(h),
            Event::Code(c) => self.push_span(Span::styled(
                c.to_string(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.text.lines.push(Line::default()),
            _ => {}
        }
    }

    fn start_item(&mut self) {
        self.text.lines.push(Line::default());
        self.needs_newline = false;
        let depth = self.list_indices.len().saturating_sub(1);
        let indent = "  ".repeat(depth);
        let marker = match self.list_indices.last_mut() {
            Some(Some(n)) => {
                let marker = format!("{indent}{n}. ");
                *n += 1;
                marker
            }
            _ => format!("{indent}- "),
        };
        self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
        self.in_fresh_item = true;
    }

    fn plain(&mut self, cow: CowStr<'_>) {
        let style = self.style();
        self.push_span(Span::styled(cow.replace('\t', "    "), style));
    }
}

// ── Code highlighting ───────────────────────────────────────────────────────

/// Look up a syntect theme, falling back to the default one.
fn theme(name: &str) -> &'static Theme {
    if let Some(theme) = THEME_SET.themes.get(name) {
        return theme;
    }
    warn!("Unknown syntax theme {:?}, using {}", name, DEFAULT_SYNTAX_THEME);
    &THEME_SET.themes[DEFAULT_SYNTAX_THEME]
}

/// Highlight a code sample. Falls back to plain green text when the
/// language is unknown to syntect.
pub fn highlight_code(code: &str, language: &str, theme_name: &str) -> Text<'static> {
    let code = code.replace('\t', "    ");

    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(language) else {
        let plain = Style::default().fg(Color::Green);
        return code
            .lines()
            .map(|line| Line::from(Span::styled(line.to_owned(), plain)))
            .collect();
    };

    let mut hl = HighlightLines::new(syntax, theme(theme_name));
    let mut text = Text::default();
    for line in LinesWithEndings::from(code.as_str()) {
        let spans: Vec<Span<'static>> = match hl.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges
                .into_iter()
                .filter_map(|(hl_style, frag)| {
                    let content = frag.trim_end_matches('\n');
                    if content.is_empty() {
                        return None;
                    }
                    let fg = Color::Rgb(
                        hl_style.foreground.r,
                        hl_style.foreground.g,
                        hl_style.foreground.b,
                    );
                    Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
                })
                .collect(),
            Err(e) => {
                warn!("Highlighting failed: {}", e);
                vec![Span::raw(line.trim_end_matches('\n').to_owned())]
            }
        };
        // Blank source lines still take a row
        text.lines.push(Line::from(spans));
    }
    text
}
