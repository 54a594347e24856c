// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Assembles the completion, settings and dictionaries containers out of the views in this
//! module, applies setting changes to them and runs the ratatui + crossterm loop. Dictionary
//! searches and loads requested by the views run under the busy animation.

use std::{error::Error, io, mem, path::PathBuf, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    backend::CrosstermBackend,
    Frame, Terminal,
};

use crate::dictionary::{
    demo_word_list, find_dictionaries, load_dictionary, Dictionary, DictionaryError, WordList,
};
use crate::model::{DictionaryRequest, SearchSession, Setting, Settings};
use crate::ui::{
    Aspect, Container, ContainerId, ContainerKind, Effect, Key, Layer, Theme, UiState, WidgetId,
};

mod busy;
mod dictionaries;
mod list;
mod views;

pub use busy::run_with_busy_animation;

use dictionaries::{CatalogView, LocationView};
use list::{ListKind, ListView};
use views::{
    AttributesView, DescriptionView, FilterView, HelpView, IndicatorView, InputView,
    SettingsView, COMPLETION_HELP, DICTIONARIES_HELP, SETTINGS_HELP,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Where the words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Demo,
    File(PathBuf),
}

/// Slow work requested by the views, run by the owner of the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Scan(PathBuf),
    Load(PathBuf),
}

#[derive(Debug)]
pub enum TaskOutcome {
    Scanned {
        root: PathBuf,
        result: Result<Vec<PathBuf>, DictionaryError>,
    },
    Loaded {
        path: PathBuf,
        result: Result<WordList, DictionaryError>,
    },
}

impl Task {
    pub fn run(self) -> TaskOutcome {
        match self {
            Self::Scan(root) => {
                let result = find_dictionaries(&root);
                TaskOutcome::Scanned { root, result }
            }
            Self::Load(path) => {
                let result = load_dictionary(&path);
                TaskOutcome::Loaded { path, result }
            }
        }
    }
}

/// Runs the interactive terminal UI until the user quits.
pub fn run(
    source: DictionarySource,
    settings: Settings,
    theme: Theme,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;

    let dictionary: Arc<dyn Dictionary> = match source {
        DictionarySource::Demo => Arc::new(demo_word_list()),
        DictionarySource::File(path) => {
            let area = terminal.area();
            let animation = settings.busy_animation();
            let loaded = run_with_busy_animation(terminal.terminal_mut(), area, animation, || {
                load_dictionary(&path)
            })??;
            Arc::new(loaded)
        }
    };

    let session = SearchSession::new(dictionary).with_settings(settings);
    let mut app = App::new(session, theme);

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        if let Some(task) = app.take_task() {
            let area = terminal.area();
            let animation = app.session().settings().busy_animation();
            let outcome =
                run_with_busy_animation(terminal.terminal_mut(), area, animation, || task.run())?;
            app.complete_task(outcome);
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    app.render(area, frame.buffer_mut());
}

include!("chrome.rs");

/// Widget ids of the list views, fixed at assembly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Views {
    input: WidgetId,
    completion: WidgetId,
    length: WidgetId,
    ordinal: WidgetId,
    synonyms: WidgetId,
    antonyms: WidgetId,
}

impl Views {
    /// Focus order of the list views, left to right.
    fn ring(&self) -> [WidgetId; 5] {
        [
            self.completion,
            self.synonyms,
            self.length,
            self.ordinal,
            self.antonyms,
        ]
    }
}

/// The application: window engine, search state and the glue between them.
pub struct App {
    ui: UiState,
    session: SearchSession,
    views: Views,
    completion_tab: ContainerId,
    settings_page: ContainerId,
    dictionaries_tab: ContainerId,
    catalog_view: WidgetId,
    pending_task: Option<Task>,
    force_clear: bool,
    should_quit: bool,
}

impl App {
    pub fn new(mut session: SearchSession, theme: Theme) -> Self {
        let mut ui = UiState::new(theme);

        let completion_tab =
            ui.insert_container(Container::new(ContainerKind::Tab, "Completion", "C", 2));
        let settings_page =
            ui.insert_container(Container::new(ContainerKind::Page, "Settings", "S", 1));
        let dictionaries_tab =
            ui.insert_container(Container::new(ContainerKind::Tab, "Dictionaries", "D", 0));
        ui.link_containers(completion_tab, settings_page);
        ui.link_containers(settings_page, dictionaries_tab);

        let input = ui.insert_widget(Box::new(InputView));
        let completion = ui.insert_widget(Box::new(ListView::new(ListKind::Completion, input)));
        let length = ui.insert_widget(Box::new(ListView::new(ListKind::Length, input)));
        let ordinal = ui.insert_widget(Box::new(ListView::new(ListKind::OrdinalSummation, input)));
        let synonyms = ui.insert_widget(Box::new(ListView::new(ListKind::Synonyms, input)));
        let antonyms = ui.insert_widget(Box::new(
            ListView::new(ListKind::Antonyms, input).activating(synonyms),
        ));
        let attributes = ui.insert_widget(Box::new(AttributesView));
        let filter = ui.insert_widget(Box::new(FilterView::new(input)));
        let help = ui.insert_widget(Box::new(HelpView::new(COMPLETION_HELP)));
        let indicator = ui.insert_widget(Box::new(IndicatorView::new(3)));
        let description = ui.insert_widget(Box::new(DescriptionView::new("Completion")));
        let settings = ui.insert_widget(Box::new(SettingsView::default()));
        let settings_help = ui.insert_widget(Box::new(HelpView::new(SETTINGS_HELP)));
        let settings_description = ui.insert_widget(Box::new(DescriptionView::new("Settings")));
        let catalog = ui.insert_widget(Box::new(CatalogView));
        let location = ui.insert_widget(Box::new(LocationView::new(catalog)));
        let dictionaries_help = ui.insert_widget(Box::new(HelpView::new(DICTIONARIES_HELP)));
        let dictionaries_description =
            ui.insert_widget(Box::new(DescriptionView::new("Dictionaries")));

        let views = Views {
            input,
            completion,
            length,
            ordinal,
            synonyms,
            antonyms,
        };

        // The first primary member starts out active; the shared bottom-row views go last so
        // they are composed above the attributes border.
        for widget in [
            completion,
            synonyms,
            length,
            ordinal,
            antonyms,
            input,
            attributes,
            filter,
            help,
            indicator,
            description,
        ] {
            ui.add_widget(completion_tab, widget, &mut session);
        }
        for widget in [settings, settings_help, indicator, settings_description] {
            ui.add_widget(settings_page, widget, &mut session);
        }
        for widget in [
            location,
            catalog,
            dictionaries_help,
            indicator,
            dictionaries_description,
        ] {
            ui.add_widget(dictionaries_tab, widget, &mut session);
        }

        ui.link_ring(completion_tab, &views.ring());
        for dependent in [completion, length, ordinal, synonyms, antonyms, attributes] {
            ui.add_dirty_dependency(input, dependent);
        }
        for dependent in [synonyms, antonyms, ordinal, attributes] {
            ui.add_dirty_dependency(completion, dependent);
        }

        let mut app = Self {
            ui,
            session,
            views,
            completion_tab,
            settings_page,
            dictionaries_tab,
            catalog_view: catalog,
            pending_task: None,
            force_clear: true,
            should_quit: false,
        };
        for setting in Setting::ALL {
            app.apply_setting(setting);
        }
        app.ui.set_active_container(completion_tab, &mut app.session);
        app
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn completion_tab(&self) -> ContainerId {
        self.completion_tab
    }

    pub fn settings_page(&self) -> ContainerId {
        self.settings_page
    }

    pub fn dictionaries_tab(&self) -> ContainerId {
        self.dictionaries_tab
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        let ctrl_c = event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL);
        if event.code == KeyCode::Esc || ctrl_c {
            self.should_quit = true;
            return;
        }
        if let Some(key) = key_from_event(event) {
            self.dispatch(key);
        }
    }

    fn dispatch(&mut self, key: Key) {
        for effect in self.ui.on_key(key, &mut self.session) {
            match effect {
                Effect::SettingChanged(setting) => self.apply_setting(setting),
                Effect::Dictionary(request) => self.request(request),
                _ => {}
            }
        }
    }

    fn request(&mut self, request: DictionaryRequest) {
        let catalog = self.session.catalog();
        let task = match request {
            DictionaryRequest::Scan => Some(Task::Scan(catalog.search_root())),
            DictionaryRequest::Load => catalog.selected().map(|path| Task::Load(path.to_path_buf())),
        };
        tracing::debug!(?task, "task requested");
        self.pending_task = task;
    }

    /// The scan or load the views asked for, if any. Run it and hand the outcome to
    /// [`App::complete_task`].
    pub fn take_task(&mut self) -> Option<Task> {
        self.pending_task.take()
    }

    pub fn complete_task(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::Scanned { root, result } => {
                let catalog = self.session.catalog_mut();
                match result {
                    Ok(found) => {
                        let status = found
                            .is_empty()
                            .then(|| format!("no dictionaries under {}", root.display()));
                        catalog.set_found(found);
                        catalog.set_status(status);
                    }
                    Err(err) => {
                        tracing::warn!(root = %root.display(), %err, "dictionary search failed");
                        catalog.set_found(Vec::new());
                        catalog.set_status(Some(err.to_string()));
                    }
                }
                self.ui.mark_dirty(self.catalog_view);
            }
            TaskOutcome::Loaded { path, result } => match result {
                Ok(words) => {
                    self.session.set_dictionary(Arc::new(words));
                    self.session
                        .catalog_mut()
                        .set_status(Some(format!("loaded {}", path.display())));
                    self.ui.mark_dirty(self.catalog_view);
                    self.ui.mark_dirty(self.views.input);
                    self.ui.set_active_container(self.completion_tab, &mut self.session);
                    self.force_clear = true;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "dictionary load failed");
                    self.session.catalog_mut().set_status(Some(err.to_string()));
                    self.ui.mark_dirty(self.catalog_view);
                }
            },
        }
    }

    /// Brings the views in line with the current value of `setting`.
    fn apply_setting(&mut self, setting: Setting) {
        let enabled = self.session.settings().is_enabled(setting);
        let views = self.views;
        match setting {
            Setting::Borders => self.force_clear = true,
            Setting::CompletionList => self.set_feature(views.completion, enabled),
            Setting::LengthCompletion => {
                self.set_feature(views.length, enabled);
                self.ui.resize_widget(views.completion, self.session.settings());
            }
            Setting::OrdinalSummation => {
                self.set_feature(views.ordinal, enabled);
                self.ui.resize_widget(views.completion, self.session.settings());
            }
            Setting::Antonyms => {
                self.set_feature(views.antonyms, enabled);
                self.ui.resize_widget(views.synonyms, self.session.settings());
            }
        }
    }

    fn set_feature(&mut self, widget: WidgetId, enabled: bool) {
        if enabled {
            self.ui.enable(widget, Aspect::Feature, self.session.settings());
            return;
        }

        self.ui.disable(widget, Aspect::Feature, &mut self.session);
        let tab = self.completion_tab;
        if self.ui.container(tab).active_in(Layer::Primary) == Some(widget) {
            self.ui.focus_first_shown(tab, Layer::Primary);
        }
    }

    /// Redraws what changed and composes the active container into `buf`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if self.ui.set_screen(area) {
            if let Some(active) = self.ui.active_container() {
                self.ui.resize(active, self.session.settings());
            }
            self.force_clear = true;
        }

        let force_clear = mem::take(&mut self.force_clear);
        if let Some(active) = self.ui.active_container() {
            self.ui.draw(active, &self.session, force_clear);
        }
        self.ui.present(buf);
    }
}

fn key_from_event(event: KeyEvent) -> Option<Key> {
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let key = match event.code {
        KeyCode::Left if shift => Key::ShiftLeft,
        KeyCode::Right if shift => Key::ShiftRight,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Return,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::CONTROL) => return None,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some(key)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn area(&mut self) -> Rect {
        self.terminal.get_frame().area()
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
