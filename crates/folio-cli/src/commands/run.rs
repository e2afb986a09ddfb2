use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use folio_core::contact::{submit_contact, ContactSender, DryRunSender, HttpContactSender};
use folio_core::scheduler::{Clock, SystemClock};
use folio_core::AppConfig;
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, ContactResult, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    scroll::ScrollConfigExt,
    widgets,
};

use super::load_content;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let content = load_content(&config)?;

    // Without delivery credentials the form still works end to end, it just logs
    let sender: Arc<dyn ContactSender> = if config.contact.is_delivery_configured() {
        Arc::new(HttpContactSender::from_config(&config.contact)?)
    } else {
        Arc::new(DryRunSender)
    };
    let dry_run = !config.contact.is_delivery_configured();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = if content.meta.meta_title.is_empty() {
        "Folio".to_string()
    } else {
        content.meta.meta_title.clone()
    };
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, content, sender, dry_run).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    content: folio_core::content::PageContent,
    sender: Arc<dyn ContactSender>,
    dry_run: bool,
) -> Result<()> {
    let clock = SystemClock::new();
    let size = terminal.size()?;
    let mut app = App::new(config.clone(), content, size.width, size.height, clock.now())?;
    if dry_run {
        app.set_status("Contact delivery not configured: messages are only logged");
    }

    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );

    // Contact submissions finish in the background
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel::<ContactResult>();

    loop {
        while let Ok(result) = contact_rx.try_recv() {
            app.finish_submit(result);
        }

        app.tick(clock.now());

        terminal.draw(|frame| widgets::draw(frame, &mut app))?;

        // Faster ticks while scrolling, debouncing or glitching
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &sender, &contact_tx);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    handle_action(&mut app, action, &sender, &contact_tx);
                }
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    sender: &Arc<dyn ContactSender>,
    contact_tx: &mpsc::UnboundedSender<ContactResult>,
) {
    // Any key other than the second 'g' cancels a pending 'gg'
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if !matches!(action, Action::None | Action::PendingG) && !app.is_input_mode() {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollLines(delta) => app.scroll_lines(delta),
        Action::ScrollHalfPageDown => app.half_page_down(),
        Action::ScrollHalfPageUp => app.half_page_up(),
        Action::ScrollPageDown => app.page_down(),
        Action::ScrollPageUp => app.page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.set_pending_key('g'),
        Action::NextSection => app.cycle_section(true),
        Action::PrevSection => app.cycle_section(false),
        Action::NextPost => app.carousel.next(),
        Action::PrevPost => app.carousel.prev(),
        Action::JumpToPost(number) => app.jump_to_post(number),
        Action::OpenPost => match app.active_post_link() {
            Some(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    app.set_status(format!("Failed to open browser: {}", e));
                } else {
                    app.set_status(format!("Opened {}", url));
                }
            }
            None => app.set_status("This post has no link"),
        },
        Action::EditContact => app.start_editing(),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::NextField => app.next_field(),
        Action::PrevField => app.prev_field(),
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.backspace(),
        Action::Submit => {
            if let Some(form) = app.begin_submit() {
                let rules = app.contact_rules.clone();
                let sender = Arc::clone(sender);
                let tx = contact_tx.clone();
                let now = app.now;
                tokio::spawn(async move {
                    let toast = submit_contact(&form, &rules, sender.as_ref(), now).await;
                    if tx.send(ContactResult { toast }).is_err() {
                        error!("Contact result dropped: the UI has exited");
                    }
                });
            }
        }
        Action::PointerDown(col, row) => app.pointer_down(col, row),
        Action::PointerDrag(col) => app.pointer_drag(col),
        Action::PointerUp(col, row) => app.pointer_up(col, row),
        Action::ExitMode => app.mode = Mode::Normal,
        Action::None => {}
    }
}
