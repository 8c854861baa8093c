mod ui;

use std::env;
use std::fs::File;
use std::io;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use slidedom::{Dispatcher, Document, Event, InputTranslator, Terminal};
use slider::{Slider, SliderOptions};

const DEFAULT_SLIDE_COUNT: usize = 7;
const LOG_PATH_VAR: &str = "SLIDER_DEMO_LOG";
const DEFAULT_LOG_PATH: &str = "slider-demo.log";

fn main() -> io::Result<()> {
    let log_path = env::var(LOG_PATH_VAR).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let log_file = File::create(&log_path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let count = slide_count(env::args().nth(1));
    log::info!("starting slider demo with {count} slides");

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut doc = Document::new(ui::document_root(count), f64::from(width), f64::from(height));
    let sheet = ui::style_sheet();

    let slider = Slider::new(&doc, ui::GALLERY_ID, SliderOptions::default());
    let mut dispatcher = Dispatcher::new();
    slider.bind(&mut dispatcher);
    slider.move_to_active_slide(&mut doc);

    let mut input = InputTranslator::new();

    loop {
        doc.set_text(ui::STATUS_ID, ui::status_line(&slider));
        term.render(&doc, &sheet)?;

        for raw in term.poll(None)? {
            if let CrosstermEvent::Key(key) = raw {
                if key.kind == KeyEventKind::Press && handle_key(key, &slider, &mut doc) {
                    return Ok(());
                }
                continue;
            }

            for event in input.translate(&raw, &doc) {
                if let Event::Resize { width, height } = event {
                    doc.resize(width, height);
                }
                dispatcher.dispatch(&event, &mut doc);
            }
        }
    }
}

fn slide_count(arg: Option<String>) -> usize {
    match arg.map(|arg| arg.parse::<usize>()) {
        Some(Ok(count)) if count > 0 => count,
        Some(_) => {
            log::warn!("invalid slide count, using {DEFAULT_SLIDE_COUNT}");
            DEFAULT_SLIDE_COUNT
        }
        None => DEFAULT_SLIDE_COUNT,
    }
}

/// Returns true when the demo should exit.
fn handle_key(key: KeyEvent, slider: &Slider, doc: &mut Document) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Left => {
            slider.previous(doc);
        }
        KeyCode::Right => {
            slider.next(doc);
        }
        KeyCode::Home => {
            slider.move_to_slide(doc, 0);
        }
        KeyCode::End => {
            slider.move_to_slide(doc, isize::MAX);
        }
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10).filter(|digit| *digit > 0) {
                slider.move_to_slide(doc, digit as isize - 1);
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_count_parsing() {
        assert_eq!(slide_count(None), DEFAULT_SLIDE_COUNT);
        assert_eq!(slide_count(Some("3".to_string())), 3);
        assert_eq!(slide_count(Some("0".to_string())), DEFAULT_SLIDE_COUNT);
        assert_eq!(slide_count(Some("lots".to_string())), DEFAULT_SLIDE_COUNT);
    }

    #[test]
    fn test_keys_drive_the_slider() {
        let mut doc = Document::new(ui::document_root(4), 120.0, 40.0);
        let slider = Slider::new(&doc, ui::GALLERY_ID, SliderOptions::default());
        slider.move_to_active_slide(&mut doc);

        let press = |code| KeyEvent::from(code);

        assert!(!handle_key(press(KeyCode::Right), &slider, &mut doc));
        assert_eq!(slider.active_index(), Some(1));

        handle_key(press(KeyCode::End), &slider, &mut doc);
        assert_eq!(slider.active_index(), Some(3));

        handle_key(press(KeyCode::Char('1')), &slider, &mut doc);
        assert_eq!(slider.active_index(), Some(0));

        handle_key(press(KeyCode::Char('0')), &slider, &mut doc);
        assert_eq!(slider.active_index(), Some(0));

        assert!(handle_key(press(KeyCode::Char('q')), &slider, &mut doc));
        assert!(handle_key(press(KeyCode::Esc), &slider, &mut doc));
    }

    #[test]
    fn test_status_line_reports_position() {
        let mut doc = Document::new(ui::document_root(3), 120.0, 40.0);
        let slider = Slider::new(&doc, ui::GALLERY_ID, SliderOptions::default());
        slider.move_to_slide(&mut doc, 2);

        assert_eq!(ui::status_line(&slider), "slide 3 of 3 · idle");
    }
}
