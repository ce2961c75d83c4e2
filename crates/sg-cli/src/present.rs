//! Line-driven presenter: one key name per line on stdin.
//!
//! An empty line advances. Autoplay time is measured between lines, so a
//! slow reader sees every slide the interval skipped past.

use anyhow::Result;
use sg_editor::{DeckDocument, Presenter, PresenterKeys, PresenterState};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Terminal spellings for keys that are awkward to type.
fn key_name(line: &str) -> &str {
    match line {
        "" | "space" => " ",
        "right" | "n" => "ArrowRight",
        "left" | "b" => "ArrowLeft",
        "home" => "Home",
        "end" => "End",
        "q" | "esc" | "escape" => "Escape",
        other => other,
    }
}

pub fn run(doc: &DeckDocument, start: usize) -> Result<()> {
    let slides = doc.ordered_slides().into_iter().cloned().collect();
    let mut presenter = Presenter::new(slides, start, doc.settings.autoplay_interval);
    if presenter.is_empty() {
        println!("There are no slides to present.");
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    show(&presenter, &mut stdout)?;
    let mut last = Instant::now();

    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        if presenter.tick(now - last) > 0 {
            show(&presenter, &mut stdout)?;
        }
        last = now;

        let name = key_name(line.trim());
        let Some(action) = PresenterKeys::resolve(name) else {
            log::warn!("unbound key {name:?}");
            continue;
        };
        match presenter.apply(action) {
            PresenterState::Exited => break,
            PresenterState::Showing(_) => show(&presenter, &mut stdout)?,
        }
    }
    Ok(())
}

fn show(presenter: &Presenter, out: &mut impl Write) -> Result<()> {
    if let Some(slide) = presenter.current() {
        writeln!(
            out,
            "[{}/{}]{} {}",
            presenter.index() + 1,
            presenter.len(),
            if presenter.is_autoplaying() { " ▶" } else { "" },
            slide.label()
        )?;
        for layer in slide.layers_by_z() {
            if let Some((text, _)) = layer.kind.text() {
                writeln!(out, "    {text}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_keys() {
        assert_eq!(key_name(""), " ");
        assert_eq!(key_name("q"), "Escape");
        assert_eq!(key_name("End"), "End");
        assert_eq!(key_name("p"), "p");
    }
}
