//! Terminal rendering for the help screen and the results box.
//!
//! Everything returns a `String`; callers decide where it goes. Layout is
//! measured on the unstyled text with `unicode-width` so CJK labels and emoji
//! line up, and ANSI styling is applied afterwards.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

use crate::engine::Comparison;
use crate::i18n::{Language, Messages};

/// Width of each progress bar, in cells.
pub const BAR_WIDTH: usize = 40;

/// Display columns reserved for a result label.
pub const LABEL_WIDTH: usize = 20;

const TITLE: Color = Color::Rgb { r: 0x7D, g: 0x56, b: 0xF4 };
const HEADER: Color = Color::AnsiValue(205);
const CODE_BG: Color = Color::AnsiValue(237);
const BORDER: Color = Color::AnsiValue(240);
const SWITCH_FILL: Color = Color::Rgb { r: 0x00, g: 0xBF, b: 0xFF };
const STAY_FILL: Color = Color::Rgb { r: 0xFF, g: 0xD7, b: 0x00 };
const BAR_EMPTY: Color = Color::Rgb { r: 0x33, g: 0x33, b: 0x33 };

/// One rendered line plus its width on screen.
#[derive(Debug, Clone, Default)]
struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            width: text.width(),
        }
    }

    fn blank() -> Self {
        Self::default()
    }

    fn push(&mut self, other: Line) {
        self.text.push_str(&other.text);
        self.width += other.width;
    }
}

/// Applies styles, or passes text through when colour is off.
#[derive(Debug, Clone, Copy)]
struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> Line {
        Line {
            text: if self.color { style(text) } else { text.to_string() },
            width: text.width(),
        }
    }

    fn title(&self, text: &str) -> Line {
        self.paint(text, |t| t.bold().with(TITLE).to_string())
    }

    fn header(&self, text: &str) -> Line {
        self.paint(text, |t| t.bold().with(HEADER).to_string())
    }

    fn code(&self, text: &str) -> Line {
        self.paint(&format!(" {text} "), |t| t.on(CODE_BG).to_string())
    }

    fn bold(&self, text: &str, fg: Color) -> Line {
        self.paint(text, |t| t.bold().with(fg).to_string())
    }

    fn border(&self, text: &str) -> String {
        self.paint(text, |t| t.with(BORDER).to_string()).text
    }
}

/// Draw a proportional bar for `percent` out of 100.
///
/// `floor(percent / 100 * width)` cells are filled, clamped to `width`.
/// Without colour the bar uses block characters instead of backgrounds.
#[must_use]
pub fn progress_bar(percent: f64, width: usize, fill: Color, empty: Color, color: bool) -> String {
    let filled = filled_cells(percent, width);
    let rest = width - filled;

    if color {
        format!(
            "{}{}",
            " ".repeat(filled).on(fill),
            " ".repeat(rest).on(empty)
        )
    } else {
        format!("{}{}", "█".repeat(filled), "░".repeat(rest))
    }
}

/// Number of filled cells for `percent` on a bar `width` wide.
#[must_use]
pub fn filled_cells(percent: f64, width: usize) -> usize {
    // Float-to-int casts saturate, so negative and NaN inputs become 0
    (((percent / 100.0) * width as f64) as usize).min(width)
}

/// The results box for both strategies.
#[must_use]
pub fn results(comparison: &Comparison, messages: &Messages, color: bool) -> String {
    let painter = Painter { color };
    let rows = [
        (
            messages.switching_door,
            comparison.switch.win_percentage(),
            SWITCH_FILL,
        ),
        (
            messages.staying_door,
            comparison.stay.win_percentage(),
            STAY_FILL,
        ),
    ];

    let mut lines = vec![painter.title(&format!(" {} ", messages.title)), Line::blank()];
    for (label, percent, fill) in rows {
        let mut row = painter.bold(&format!("{} | ", pad(label, LABEL_WIDTH)), fill);
        row.push(Line {
            text: progress_bar(percent, BAR_WIDTH, fill, BAR_EMPTY, color),
            width: BAR_WIDTH,
        });
        row.push(painter.bold(&format!(" {percent:.2}%"), fill));
        lines.push(row);
    }

    framed(&lines, painter)
}

/// The help screen shown when no trial count is given.
#[must_use]
pub fn help(messages: &Messages, color: bool) -> String {
    let painter = Painter { color };
    let mut lines = vec![Line::blank(), painter.title(messages.help_title), Line::blank()];
    lines.extend(messages.help_description.lines().map(Line::plain));

    lines.push(Line::blank());
    lines.push(painter.header(messages.help_usage));
    let mut example = Line::plain("  ");
    example.push(painter.code(messages.help_usage_example));
    example.push(Line::plain(" "));
    example.push(painter.code("1000"));
    lines.push(example);

    lines.push(Line::blank());
    lines.push(painter.header(messages.help_flags_title));
    let mut flag = Line::plain("  ");
    flag.push(painter.code("-L"));
    flag.push(Line::plain(" "));
    flag.push(painter.code("<code>"));
    lines.push(flag);
    lines.push(Line::plain(&format!("    {}", messages.help_flag_language)));

    lines.push(Line::blank());
    lines.push(painter.header(messages.available_lang));
    lines.push(Line::plain(&format!("  {}", Language::available_codes())));

    framed(&lines, painter)
}

/// Left-align `text` in `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Surround lines with a rounded border, one blank line of vertical padding
/// and two columns of horizontal padding.
fn framed(lines: &[Line], painter: Painter) -> String {
    let inner = lines.iter().map(|l| l.width).max().unwrap_or(0) + 4;
    let edge = "─".repeat(inner);
    let side = painter.border("│");

    let mut out = String::new();
    out.push_str(&painter.border(&format!("╭{edge}╮")));
    out.push('\n');

    let padding = [Line::blank()];
    for line in padding.iter().chain(lines).chain(&padding) {
        let fill = " ".repeat(inner - 4 - line.width);
        out.push_str(&format!("{side}  {}{fill}  {side}\n", line.text));
    }

    out.push_str(&painter.border(&format!("╰{edge}╯")));
    out
}
