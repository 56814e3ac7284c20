use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use bookclub_rs::config::{AppConfig, Args};
use bookclub_rs::controller::AppController;
use bookclub_rs::logging;
use bookclub_rs::model::AppModel;
use bookclub_rs::persistence::{open_store, Persistence};
use bookclub_rs::view::AppView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = AppConfig::from_args(Args::parse());

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Book Club Library Starting ===");

    let mut persistence = Persistence::new(open_store(config.data_dir.as_deref()));
    if config.reset {
        tracing::info!("Resetting saved state");
        persistence.reset();
    }

    let model = Arc::new(Mutex::new(AppModel::new(persistence)));
    let controller = AppController::new(model.clone());

    let mut terminal = setup_terminal()?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err.into());
    }

    tracing::info!("Book Club Library shutting down");
    Ok(())
}

/// Enter raw mode and the alternate screen, undoing both if any step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let terminal = (|| {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })();

    if terminal.is_err() {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let should_quit = {
            let mut model = model.lock().await;
            model.auto_clear_old_notice();

            terminal.draw(|f| AppView::render(f, &model))?;
            model.should_quit()
        };

        if should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await;
            }
        }
    }

    Ok(())
}
