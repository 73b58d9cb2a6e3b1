//! Pure rendering of the carousel strip. One terminal column is one unit of
//! carousel width.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use reel_core::{Carousel, ContentAlignment, MemoryViewport, Side, Viewport};

use crate::host::TerminalHost;

/// Glyph for a control on the left.
pub const LEFT_GLYPH: char = '◀';
/// Glyph for a control on the right.
pub const RIGHT_GLYPH: char = '▶';
/// Rows of the drawn track.
pub const TRACK_HEIGHT: u16 = 3;
/// Columns dimmed on a faded edge.
const FADE_COLUMNS: usize = 2;

/// Screen placement of the track: one control column on each side of the
/// scrolling viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackLayout {
    /// Rows and columns of the track, controls included.
    pub area: Rect,
}

impl TrackLayout {
    /// Layout over `area`.
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Layout for a full terminal of `cols` x `rows`, matching the frame
    /// drawn by the interactive host.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        let inner =
            Rect::new(1, 1, cols.saturating_sub(2), rows.saturating_sub(2));
        Self::new(Rect {
            height: inner.height.min(TRACK_HEIGHT),
            ..inner
        })
    }

    /// Columns available to the scrolling viewport.
    pub fn viewport_width(&self) -> u16 {
        self.area.width.saturating_sub(2)
    }

    /// First column of the scrolling viewport.
    pub fn viewport_x(&self) -> u16 {
        self.area.x + 1
    }

    /// Column of the control on `side`.
    pub fn control_column(&self, side: Side) -> u16 {
        match side {
            Side::Left => self.area.x,
            Side::Right => {
                self.area.x + self.area.width.saturating_sub(1)
            }
        }
    }

    /// Whether `row` is inside the track.
    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.area.y && row < self.area.y + self.area.height
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    style: Style,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        style: Style::new(),
    };
}

/// Draw the three track rows, controls included.
pub fn render_track(host: &TerminalHost) -> Vec<Line<'static>> {
    let carousel = host.carousel();
    let config = carousel.config();
    let mirrored = config.mirrored();
    let visibility = carousel.visibility();
    let columns = viewport_columns(carousel);

    let mut rows: Vec<Vec<Cell>> = (0..TRACK_HEIGHT)
        .map(|_| vec![Cell::BLANK; columns])
        .collect();

    let item_width = config.item_width();
    let box_width = (item_width - config.space_between()).max(1.0);
    let content_width = config.content_width();
    let lead = leading_padding(carousel, columns);
    let offset = carousel.physical_offset();
    let item_style = Style::default().fg(Color::White);

    for column in 0..columns {
        let x = offset + column as f32 - lead;
        if x < 0.0 || x >= content_width {
            continue;
        }
        let slot = (x / item_width).floor();
        let within = (x - slot * item_width).floor();
        if within >= box_width {
            continue;
        }
        let slot = slot as usize;
        let index = if mirrored {
            config.item_count().saturating_sub(slot + 1)
        } else {
            slot
        };
        let label = host.labels().get(index).map(String::as_str).unwrap_or("");
        let glyphs = box_column(within as usize, box_width as usize, label);
        for (row, ch) in rows.iter_mut().zip(glyphs) {
            row[column] = Cell {
                ch,
                style: item_style,
            };
        }
    }

    let fades = visibility.edge_fades(mirrored);
    let dim = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    for row in rows.iter_mut() {
        let span = FADE_COLUMNS.min(columns);
        if fades.left {
            row[..span].iter_mut().for_each(|cell| cell.style = dim);
        }
        if fades.right {
            row[columns - span..]
                .iter_mut()
                .for_each(|cell| cell.style = dim);
        }
    }

    let control_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let glyph = |side: Side| {
        let ch = match (visibility.control_at(side, mirrored), side) {
            (Some(_), Side::Left) => LEFT_GLYPH,
            (Some(_), Side::Right) => RIGHT_GLYPH,
            (None, _) => ' ',
        };
        Span::styled(ch.to_string(), control_style)
    };

    rows.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let middle = row == usize::from(TRACK_HEIGHT / 2);
            let mut spans = Vec::with_capacity(cells.len() + 2);
            spans.push(if middle { glyph(Side::Left) } else { Span::raw(" ") });
            spans.extend(group_cells(&cells));
            spans.push(if middle { glyph(Side::Right) } else { Span::raw(" ") });
            Line::from(spans)
        })
        .collect()
}

/// Offset, visible range and drag state in one line.
pub fn status_line(host: &TerminalHost) -> Line<'static> {
    let snapshot = host.snapshot();
    let range = if snapshot.visible_items.is_empty() {
        "none".to_string()
    } else {
        format!(
            "{}-{}",
            snapshot.visible_items.start + 1,
            snapshot.visible_items.end
        )
    };
    let drag = if snapshot.dragging { "dragging" } else { "idle" };
    let mut spans = vec![
        Span::styled("offset ", Style::default().fg(Color::Gray)),
        Span::raw(format!(
            "{:.0}/{:.0}",
            snapshot.physical_offset, snapshot.max_scroll
        )),
        Span::styled("  items ", Style::default().fg(Color::Gray)),
        Span::raw(format!(
            "{range} of {}",
            host.carousel().config().item_count()
        )),
        Span::styled("  ", Style::default()),
        Span::styled(
            drag,
            if snapshot.dragging {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ];
    if snapshot.mirrored {
        spans.push(Span::styled(
            "  rtl",
            Style::default().fg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

fn viewport_columns(carousel: &Carousel<MemoryViewport>) -> usize {
    carousel.viewport().viewport_width().max(0.0).floor() as usize
}

fn leading_padding(carousel: &Carousel<MemoryViewport>, columns: usize) -> f32 {
    match carousel.viewport().alignment() {
        ContentAlignment::Center => {
            ((columns as f32 - carousel.config().content_width()) / 2.0)
                .max(0.0)
                .floor()
        }
        ContentAlignment::Start => 0.0,
    }
}

/// Top, middle and bottom glyph for column `within` of an item box.
fn box_column(within: usize, width: usize, label: &str) -> [char; 3] {
    let last = width.saturating_sub(1);
    if width < 2 {
        return ['─', label.chars().next().unwrap_or('│'), '─'];
    }
    if within == 0 {
        return ['┌', '│', '└'];
    }
    if within == last {
        return ['┐', '│', '┘'];
    }

    let inner = width - 2;
    let chars: Vec<char> = label.chars().take(inner).collect();
    let start = 1 + (inner - chars.len()) / 2;
    let middle = within
        .checked_sub(start)
        .and_then(|i| chars.get(i).copied())
        .unwrap_or(' ');
    ['─', middle, '─']
}

fn group_cells(cells: &[Cell]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut style = None;
    for cell in cells {
        if style.is_some_and(|s| s != cell.style) {
            spans.push(Span::styled(
                std::mem::take(&mut current),
                style.unwrap_or_default(),
            ));
        }
        style = Some(cell.style);
        current.push(cell.ch);
    }
    if let Some(style) = style {
        spans.push(Span::styled(current, style));
    }
    spans
}
