use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Ledger;
use crate::ui::app::{App, Screen};

pub(super) fn as_tui(ledger: &Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh(ledger)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab bar + status bar
            app.visible_rows = (f.area().height.saturating_sub(2) as usize).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_key(key, app, ledger);
        }
    }
    Ok(())
}

fn handle_key(key: event::KeyEvent, app: &mut App, ledger: &Ledger) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.running = false,
        KeyCode::Char('1') => app.switch_screen(Screen::Dashboard),
        KeyCode::Char('2') => app.switch_screen(Screen::Transactions),
        KeyCode::Tab | KeyCode::BackTab => app.switch_screen(app.screen.next()),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char('r') => match app.refresh(ledger) {
            Ok(()) => app.set_status(format!("Reloaded {} transactions", app.transactions.len())),
            Err(e) => {
                tracing::debug!("dashboard reload failed: {e:#}");
                app.set_status(format!("Reload failed: {e}"));
            }
        },
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
