//! TUI application main module
//!
//! Owns the terminal and the event loop, and routes input events to the
//! current screen.

use crate::error::Result;
use crate::tui::event::{EventPoll, TuiEvent};
use crate::tui::state::{
    AppState, FormRow, MenuItem, Screen, Selectable, TuiResult, WizardStep, reset_to_main_menu,
};
use crate::tui::ui::render;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::{info, warn};

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// TUI application
pub struct TuiApp {
    /// Terminal
    terminal: DefaultTerminal,
    /// Event poller
    event_poll: EventPoll,
    /// Application state
    pub state: AppState,
}

impl TuiApp {
    /// Create new TUI application, saving selections into `config_dir`
    pub fn new(config_dir: PathBuf) -> Result<Self> {
        let terminal = ratatui::init();

        Ok(Self {
            terminal,
            event_poll: EventPoll::default(),
            state: AppState::with_config_dir(config_dir),
        })
    }

    /// Run until the user quits or saves a selection
    pub fn run(mut self) -> Result<Option<TuiResult>> {
        let outcome = self.event_loop();
        ratatui::restore();
        outcome?;
        Ok(self.state.result.take())
    }

    fn event_loop(&mut self) -> Result<()> {
        render(&mut self.terminal, &mut self.state)?;

        loop {
            match self.event_poll.next()? {
                TuiEvent::None => continue,
                TuiEvent::Resize(_, _) => {}
                event => {
                    if handle_event(&mut self.state, event) == Flow::Quit {
                        break;
                    }
                }
            }
            render(&mut self.terminal, &mut self.state)?;
        }

        Ok(())
    }
}

/// Apply one input event to the application state
pub fn handle_event(state: &mut AppState, event: TuiEvent) -> Flow {
    if event == TuiEvent::CtrlC && state.current_screen != Screen::Exit {
        state.previous_screen = state.current_screen;
        state.current_screen = Screen::Exit;
        return Flow::Continue;
    }

    match state.current_screen {
        Screen::MainMenu => handle_main_menu(state, event),
        Screen::Wizard => handle_wizard(state, event),
        Screen::Exit => handle_exit(state, event),
    }
}

fn handle_main_menu(state: &mut AppState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Up | TuiEvent::Left | TuiEvent::BackTab => state.menu_state.prev(),
        TuiEvent::Down | TuiEvent::Right | TuiEvent::Tab => state.menu_state.next(),
        TuiEvent::Char('1') => return open_menu_item(state, MenuItem::NewConfig),
        TuiEvent::Char('2') => return open_menu_item(state, MenuItem::OpenConfig),
        TuiEvent::Char('3') | TuiEvent::Char('q') => return Flow::Quit,
        TuiEvent::Enter => {
            if let Some(item) = state.menu_state.selected().and_then(MenuItem::from_index) {
                return open_menu_item(state, item);
            }
        }
        TuiEvent::Escape => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn open_menu_item(state: &mut AppState, item: MenuItem) -> Flow {
    match item {
        MenuItem::NewConfig => {
            reset_to_main_menu(state);
            state.current_screen = Screen::Wizard;
            state.wizard.step = WizardStep::Form;
        }
        MenuItem::OpenConfig => {
            reset_to_main_menu(state);
            state.current_screen = Screen::Wizard;
            state.wizard.open_config_select();
        }
        MenuItem::Exit => return Flow::Quit,
    }
    Flow::Continue
}

fn handle_wizard(state: &mut AppState, event: TuiEvent) -> Flow {
    match state.wizard.step {
        WizardStep::ConfigSelect => handle_config_select(state, event),
        WizardStep::Form => handle_form(state, event),
        WizardStep::Summary => handle_summary(state, event),
        WizardStep::ConfigName => handle_config_name(state, event),
    }
}

fn handle_config_select(state: &mut AppState, event: TuiEvent) -> Flow {
    let wizard = &mut state.wizard;
    match event {
        TuiEvent::Up | TuiEvent::BackTab => wizard.config_list.prev(),
        TuiEvent::Down | TuiEvent::Tab => wizard.config_list.next(),
        TuiEvent::Enter => {
            // Without saved selections only Esc leaves this step
            wizard.load_selected_config();
        }
        TuiEvent::Escape => reset_to_main_menu(state),
        _ => {}
    }
    Flow::Continue
}

fn handle_form(state: &mut AppState, event: TuiEvent) -> Flow {
    let wizard = &mut state.wizard;
    match event {
        TuiEvent::Up | TuiEvent::BackTab => wizard.prev_row(),
        TuiEvent::Down | TuiEvent::Tab => wizard.next_row(),
        TuiEvent::Left => wizard.option_prev(),
        TuiEvent::Right => wizard.option_next(),
        TuiEvent::Toggle => wizard.toggle_cursor_device(),
        TuiEvent::Enter => match wizard.selected_row() {
            FormRow::Review => {
                wizard.enter_summary();
            }
            FormRow::Field(field) if field.is_multi_select() => {
                wizard.toggle_cursor_device();
            }
            FormRow::Field(_) => wizard.next_row(),
        },
        TuiEvent::Escape => reset_to_main_menu(state),
        _ => {}
    }
    Flow::Continue
}

fn handle_summary(state: &mut AppState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Enter => state.wizard.enter_naming(),
        TuiEvent::Escape | TuiEvent::Backspace => state.wizard.back_to_form(),
        _ => {}
    }
    Flow::Continue
}

fn handle_config_name(state: &mut AppState, event: TuiEvent) -> Flow {
    let wizard = &mut state.wizard;
    if wizard.overwrite_pending {
        match event {
            TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::Enter => {
                return save_selection(state);
            }
            TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
                wizard.overwrite_pending = false;
            }
            _ => {}
        }
        return Flow::Continue;
    }

    match event {
        TuiEvent::Char(c) => wizard.config_name.insert_char(c),
        TuiEvent::Toggle => wizard.config_name.insert_char(' '),
        TuiEvent::Backspace => wizard.config_name.backspace(),
        TuiEvent::Delete => wizard.config_name.delete(),
        TuiEvent::Left => wizard.config_name.move_left(),
        TuiEvent::Right => wizard.config_name.move_right(),
        TuiEvent::Home => wizard.config_name.move_to_start(),
        TuiEvent::End => wizard.config_name.move_to_end(),
        TuiEvent::Escape => wizard.step = WizardStep::Summary,
        TuiEvent::Enter => {
            if wizard.save_target_conflicts() {
                wizard.error_message = None;
                wizard.overwrite_pending = true;
                return Flow::Continue;
            }
            return save_selection(state);
        }
        _ => {}
    }
    Flow::Continue
}

fn save_selection(state: &mut AppState) -> Flow {
    match state.wizard.save() {
        Ok((config_path, config)) => {
            info!(path = %config_path.display(), "Selection saved from interactive mode");
            state.result = Some(TuiResult {
                config,
                config_path,
            });
            Flow::Quit
        }
        Err(e) => {
            warn!(error = %e, "Failed to save selection");
            state.wizard.overwrite_pending = false;
            state.wizard.error_message = Some(e.to_string());
            Flow::Continue
        }
    }
}

fn handle_exit(state: &mut AppState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Char('y') | TuiEvent::Char('Y') | TuiEvent::CtrlC => {
            state.should_exit = true;
            Flow::Quit
        }
        TuiEvent::Char('n') | TuiEvent::Char('N') | TuiEvent::Escape => {
            state.current_screen = state.previous_screen;
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}
