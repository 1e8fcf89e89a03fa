use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use jobboard_core::{update, Msg, PageLabel, WidgetConfig, WidgetState, WidgetViewModel};
use jobboard_logging::{jb_info, jb_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::UserCommand;
use super::ui::terminal::TerminalSurface;

/// Everything the dispatcher thread reacts to.
pub enum AppEvent {
    Command(UserCommand),
    Msg(Msg),
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let widget_config = WidgetConfig::new(&config.endpoint, config.per_page)
        .context("invalid widget configuration")?;
    jb_info!(
        "Starting job board endpoint={} per_page={}",
        widget_config.endpoint(),
        widget_config.page_size()
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.fetch_settings(), event_tx.clone())
        .context("starting fetch engine")?;
    spawn_input_reader(event_tx);

    let mut dispatcher = Dispatcher {
        state: Some(WidgetState::new(widget_config)),
        runner,
        surface: TerminalSurface::new(io::stdout()),
    };
    dispatcher.surface.note(ui::input::HELP)?;
    dispatcher.dispatch(Msg::Mounted)?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => dispatcher.dispatch(msg)?,
            AppEvent::Command(UserCommand::Quit) | AppEvent::InputClosed => break,
            AppEvent::Command(UserCommand::Help) => dispatcher.surface.note(ui::input::HELP)?,
            AppEvent::Command(command) => match dispatcher.resolve(command) {
                Some(msg) => dispatcher.dispatch(msg)?,
                None => dispatcher.surface.note("(no such control on screen)")?,
            },
        }
    }

    jb_info!("Job board closed");
    Ok(())
}

struct Dispatcher<W: Write> {
    state: Option<WidgetState>,
    runner: EffectRunner,
    surface: TerminalSurface<W>,
}

impl<W: Write> Dispatcher<W> {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let Some(state) = self.state.take() else {
            return Ok(());
        };
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let view = state.consume_dirty().then(|| state.view());
        self.state = Some(state);

        match view {
            Some(view) => self.surface.apply(ui::render::render(&view)),
            None => Ok(()),
        }
    }

    /// Maps a typed command onto the control it stands for.
    fn resolve(&self, command: UserCommand) -> Option<Msg> {
        let view = self.state.as_ref()?.view();
        match command {
            UserCommand::Search(raw) => Some(Msg::SearchInput(raw)),
            UserCommand::Page(page) => Some(Msg::PageClicked(page)),
            UserCommand::Prev => page_control_target(&view, PageLabel::Prev),
            UserCommand::Next => page_control_target(&view, PageLabel::Next),
            UserCommand::Open(job_id) => Some(Msg::ViewDetailsClicked(job_id)),
            UserCommand::Back => Some(Msg::BackClicked),
            UserCommand::Help | UserCommand::Quit => None,
        }
    }
}

fn page_control_target(view: &WidgetViewModel, label: PageLabel) -> Option<Msg> {
    view.pagination
        .control(label)
        .map(|control| Msg::PageClicked(control.target))
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    jb_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let event = match ui::input::parse_command(&line) {
                Ok(command) => AppEvent::Command(command),
                Err(reason) => {
                    eprintln!("{reason}");
                    continue;
                }
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
