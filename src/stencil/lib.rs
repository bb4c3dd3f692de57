//! # Stencil - Named-Style Terminal Templates
//!
//! Stencil renders terminal output from Jinja2 templates (via minijinja) where
//! presentation is expressed through *named* styles instead of inline ANSI codes.
//!
//! - **Templates** describe structure: loops over lines, conditionals on
//!   semantic flags.
//! - **Palettes** map style names (`"heading"`, `"droppable"`) to
//!   `console::Style` values.
//! - **Color detection** decides whether the `style` filter emits ANSI codes or
//!   plain text. Plain mode still flags unknown style names so typos show up in
//!   tests.
//!
//! ## Filters
//!
//! - `{{ text | style("name") }}`: apply a named style.
//! - `{{ text | fit(20) }}`: truncate (with `…`) or pad with spaces so the text
//!   occupies exactly 20 terminal columns.
//!
//! ## Example
//!
//! ```rust
//! use stencil::{render_with_color, Palette};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Lane { title: String, count: usize }
//!
//! let palette = Palette::new().add("heading", Style::new().bold());
//! let out = render_with_color(
//!     r#"{{ title | style("heading") }} ({{ count }})"#,
//!     &Lane { title: "Active".into(), count: 2 },
//!     &palette,
//!     false,
//! ).unwrap();
//! assert_eq!(out, "Active (2)");
//! ```

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prefix shown when a template asks for a style the palette does not define.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Marker appended by `fit` when text is cut short.
pub const ELLIPSIS: char = '…';

/// A collection of named styles.
///
/// ```rust
/// use stencil::Palette;
/// use console::Style;
///
/// let palette = Palette::new().add("error", Style::new().red());
/// assert!(palette.has("error"));
/// assert!(palette.apply_plain("typo", "x").starts_with("(!?)"));
/// ```
#[derive(Clone)]
pub struct Palette {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended for unknown style names. Empty disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` with ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.flag_missing(text),
        }
    }

    /// Returns `text` unchanged when the style exists, flagged otherwise.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.flag_missing(text)
        }
    }

    fn flag_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Truncates or pads `text` to exactly `width` display columns.
///
/// Wide characters that would straddle the boundary are dropped, and the
/// remaining gap is padded, so the output width is always `width`.
pub fn fit(text: &str, width: usize) -> String {
    let current = text.width();
    if current <= width {
        return format!("{}{}", text, " ".repeat(width - current));
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Whether stdout is a terminal that accepts colors.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders an inline template, detecting color support from stdout.
pub fn render<T: Serialize>(template: &str, data: &T, palette: &Palette) -> Result<String, Error> {
    render_with_color(template, data, palette, stdout_supports_color())
}

/// Renders an inline template with explicit color control (`--no-color`).
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    palette: &Palette,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, palette.clone(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

/// Renderer holding a set of compiled, named templates.
///
/// ```rust
/// use stencil::{Palette, Stencil};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Line { text: String }
///
/// let mut stencil = Stencil::with_color(Palette::new(), false);
/// stencil.add_template("line", "> {{ text }}").unwrap();
/// let out = stencil.render("line", &Line { text: "hi".into() }).unwrap();
/// assert_eq!(out, "> hi");
/// ```
pub struct Stencil {
    env: Environment<'static>,
}

impl Stencil {
    pub fn new(palette: Palette) -> Self {
        Self::with_color(palette, stdout_supports_color())
    }

    pub fn with_color(palette: Palette, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, palette, use_color);
        Self { env }
    }

    /// Compiles and registers a template. Syntax errors are reported here.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn register_filters(env: &mut Environment<'static>, palette: Palette, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            palette.apply(&name, &text)
        } else {
            palette.apply_plain(&name, &text)
        }
    });
    env.add_filter("fit", |value: Value, width: usize| -> String {
        fit(&value.to_string(), width)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        title: String,
    }

    #[derive(Serialize)]
    struct Column {
        heading: String,
        items: Vec<Item>,
    }

    fn column() -> Column {
        Column {
            heading: "Active".into(),
            items: vec![Item { title: "a".into() }, Item { title: "b".into() }],
        }
    }

    #[test]
    fn test_palette_tracks_names() {
        let palette = Palette::new()
            .add("heading", Style::new().bold())
            .add("heading", Style::new().underlined());
        assert_eq!(palette.len(), 1);
        assert!(palette.has("heading"));
        assert!(!palette.has("item"));
        assert!(Palette::new().is_empty());
    }

    #[test]
    fn test_unknown_style_is_flagged() {
        let palette = Palette::new();
        assert_eq!(palette.apply("nope", "x"), "(!?) x");
        assert_eq!(palette.apply_plain("nope", "x"), "(!?) x");
    }

    #[test]
    fn test_custom_and_empty_indicator() {
        assert_eq!(
            Palette::new().missing_indicator("[?]").apply("n", "x"),
            "[?] x"
        );
        assert_eq!(Palette::new().missing_indicator("").apply("n", "x"), "x");
    }

    #[test]
    fn test_color_mode_emits_ansi() {
        let palette = Palette::new().add("heading", Style::new().bold().force_styling(true));
        let out = render_with_color(
            r#"{{ heading | style("heading") }}"#,
            &column(),
            &palette,
            true,
        )
        .unwrap();
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("Active"));
    }

    #[test]
    fn test_plain_mode_strips_styles() {
        let palette = Palette::new().add("heading", Style::new().bold());
        let out = render_with_color(
            r#"{{ heading | style("heading") }}:{% for i in items %} {{ i.title }}{% endfor %}"#,
            &column(),
            &palette,
            false,
        )
        .unwrap();
        assert_eq!(out, "Active: a b");
    }

    #[test]
    fn test_renders_json_values() {
        let data = serde_json::json!({ "n": 3 });
        let out = render_with_color("n={{ n }}", &data, &Palette::new(), false).unwrap();
        assert_eq!(out, "n=3");
    }

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcd", 4), "abcd");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_fit_handles_wide_chars() {
        // each CJK char is two columns wide
        let out = fit("実行中プロジェクト", 6);
        assert_eq!(out.width(), 6);
        assert!(out.ends_with(' ') || out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_fit_filter_in_template() {
        let out = render_with_color(
            "[{{ heading | fit(8) }}]",
            &column(),
            &Palette::new(),
            false,
        )
        .unwrap();
        assert_eq!(out, "[Active  ]");
    }

    #[test]
    fn test_stencil_named_templates() {
        let mut stencil = Stencil::with_color(Palette::new(), false);
        stencil.add_template("head", "{{ heading }}").unwrap();
        assert!(stencil.has_template("head"));
        assert!(!stencil.has_template("missing"));
        assert_eq!(stencil.render("head", &column()).unwrap(), "Active");
        assert!(stencil.render("missing", &column()).is_err());
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let mut stencil = Stencil::with_color(Palette::new(), false);
        assert!(stencil.add_template("bad", "{{ unclosed").is_err());
    }
}
