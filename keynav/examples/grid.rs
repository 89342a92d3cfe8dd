//! Arrow keys, Home/End (with Ctrl for the whole grid), PageUp/PageDown.
//! `r` toggles right-to-left, `q` quits.

use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{read, Event as CrosstermEvent, KeyCode};
use crossterm::{cursor, execute, queue, style, terminal};
use keynav::{
    Document, Element, Event, KeyChange, KeyNavigationGridConfig, KeyNavigationGridController,
    RowsOf, TextDirection,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const ROWS: usize = 6;
const COLS: usize = 4;

fn build_document() -> Document {
    let rows = (0..ROWS).map(|r| {
        Element::div().id(format!("row-{r}")).children((0..COLS).map(move |c| {
            let n = r * COLS + c;
            Element::div()
                .id(format!("cell-{n}"))
                .child(Element::button(format!("{n:>2}")).id(format!("btn-{n}")))
        }))
    });
    Document::new(
        Element::new("grid-host")
            .id("host")
            .child(Element::section().id("grid").children(rows)),
    )
}

fn draw(
    out: &mut impl Write,
    doc: &Document,
    dir: TextDirection,
    last: Option<&KeyChange>,
) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All),
        style::Print(format!("dir={dir}  (r: toggle, q: quit)\r\n\r\n"))
    )?;
    for r in 0..ROWS {
        let mut cols: Vec<usize> = (0..COLS).collect();
        if dir == TextDirection::Rtl {
            cols.reverse();
        }
        for c in cols {
            let n = r * COLS + c;
            let label = format!(" {n:>2} ");
            if doc.tabindex(&format!("cell-{n}")) == Some(0) {
                queue!(
                    out,
                    style::SetAttribute(style::Attribute::Reverse),
                    style::Print(label),
                    style::SetAttribute(style::Attribute::Reset)
                )?;
            } else {
                queue!(out, style::Print(label))?;
            }
        }
        queue!(out, style::Print("\r\n"))?;
    }
    if let Some(last) = last {
        queue!(
            out,
            style::Print(format!(
                "\r\nkeychange: {} (from {:?}, {:?})\r\n",
                last.active_item, last.previous_item, last.code
            ))
        )?;
    }
    out.flush()
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("keynav-grid.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = build_document();
    let mut grid = KeyNavigationGridController::new(
        "host",
        RowsOf::new("grid"),
        KeyNavigationGridConfig::new(),
    );
    grid.initialize(&mut doc);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    // Only the latest notification is shown, the log is drained each event
    let mut last_change: Option<KeyChange> = None;
    let result = (|| -> io::Result<()> {
        loop {
            let dir = doc.direction("host");
            draw(&mut stdout, &doc, dir, last_change.as_ref())?;

            let CrosstermEvent::Key(key_event) = read()? else {
                continue;
            };
            match key_event.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('r') => {
                    let next = match dir {
                        TextDirection::Ltr => TextDirection::Rtl,
                        TextDirection::Rtl => TextDirection::Ltr,
                    };
                    doc.set_attribute("host", "dir", next.to_string());
                }
                _ => {
                    let target = doc.active_element().unwrap_or("grid").to_string();
                    if let Some(event) = Event::from_crossterm_key(target, &key_event) {
                        let result = grid.handle_event(&mut doc, &event);
                        log::info!("{:?} -> {:?}", key_event.code, result);
                        if let Some(dispatched) = doc.take_events().pop() {
                            last_change = Some(dispatched.detail);
                        }
                    }
                }
            }
        }
    })();

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
