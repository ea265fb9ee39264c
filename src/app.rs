//! Application state and event handling.
//!
//! `App` is the composition root: it owns the navigator, grid sorter, slide
//! store and generator, and routes key/mouse events and async results to
//! them.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::{async_tasks, viewer::GRID_COLUMNS};
use crate::error::Result;
use crate::events::{self, Event};
use crate::generator::{self, SlideGenerator};
use crate::input::{dispatch, AppMode, Command, InputContext, InputResult};
use crate::slide::{ElementPatch, SlideData};
use crate::store::{GenerationOutcome, GenerationTicket, SlideStore};
use crate::viewer::{GridSorter, ImageLookup, NavKey, Navigator, SortBy, SortOrder};

/// Messages from async tasks back to the UI loop.
#[derive(Debug)]
pub enum AppUpdate {
    /// A generation request finished.
    SlideGenerated(GenerationTicket, Result<SlideData>),
}

/// Top-level application state.
pub struct App {
    /// Which screen has focus.
    pub mode: AppMode,
    /// Slideshow cursor and overlay flags.
    pub navigator: Navigator,
    /// Memoized grid ordering over the catalogue.
    pub grid: GridSorter<'static>,
    /// Current grid sort key.
    pub sort_by: SortBy,
    /// Current grid sort direction.
    pub sort_order: SortOrder,
    /// Position of the highlighted card within the sorted grid.
    pub grid_cursor: usize,
    /// The slide being edited.
    pub store: SlideStore,
    /// Event image resolver.
    pub images: ImageLookup,
    /// Whether keys go to the prompt buffer.
    pub prompt_active: bool,
    /// Prompt typed so far.
    pub prompt_buffer: String,
    /// Transient message for the command bar.
    pub status_message: Option<String>,
    /// Blocking error shown until Esc.
    pub error_message: Option<String>,
    /// Loaded configuration.
    pub config: Config,
    generator: Arc<dyn SlideGenerator>,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
    should_quit: bool,
}

impl App {
    /// Build the app with the generator the configuration selects.
    pub fn new(config: Config) -> Self {
        let generator = generator::from_config(&config);
        Self::with_generator(config, generator)
    }

    /// Build the app around an explicit generator.
    pub fn with_generator(config: Config, generator: Arc<dyn SlideGenerator>) -> Self {
        let (async_task_tx, async_task_rx) = mpsc::channel(async_tasks::CHANNEL_BUFFER_SIZE);
        let catalogue = events::all();

        Self {
            mode: AppMode::Slideshow,
            navigator: Navigator::new(catalogue.len(), config.controls_idle, Instant::now()),
            grid: GridSorter::new(catalogue),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            grid_cursor: 0,
            store: SlideStore::new(),
            images: ImageLookup::new(config.asset_dir.clone()),
            prompt_active: false,
            prompt_buffer: String::new(),
            status_message: None,
            error_message: None,
            config,
            generator,
            async_task_tx,
            async_task_rx,
            should_quit: false,
        }
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ask the main loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Event shown by the slideshow.
    pub fn current_event(&self) -> &'static Event {
        &self.grid.events()[self.navigator.current_index()]
    }

    /// Catalogue indices in grid display order.
    pub fn grid_order(&mut self) -> Vec<usize> {
        self.grid.order(self.sort_by, self.sort_order).to_vec()
    }

    /// Name of the active slide generator.
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Route a key press to the error modal, the prompt or the mode's handler.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.error_message.is_some() {
            if key.code == KeyCode::Esc {
                self.error_message = None;
            }
            return; // Don't process other keys while error is displayed
        }

        if self.prompt_active {
            self.handle_prompt_input(key);
            return;
        }

        let ctx = InputContext { mode: self.mode, grid_columns: GRID_COLUMNS };
        match dispatch(key, &ctx) {
            InputResult::Command(command) => self.apply(command),
            InputResult::Quit => self.quit(),
            InputResult::Ignored => {}
        }
    }

    /// Pointer movement keeps controls visible; a left click in the slideshow opens the grid.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.navigator.pointer_moved(now),
            MouseEventKind::Down(MouseButton::Left) if self.mode == AppMode::Slideshow => {
                self.navigator.pointer_moved(now);
                self.apply(Command::Nav(NavKey::OpenGrid));
            }
            _ => {}
        }
    }

    /// Advance timers; call once per frame.
    pub fn tick(&mut self) {
        self.navigator.tick(Instant::now());
    }

    fn apply(&mut self, command: Command) {
        let now = Instant::now();
        match command {
            Command::Nav(key) => {
                let was_open = self.navigator.is_grid_open();
                self.navigator.handle_key(key, now);
                self.sync_grid_mode(was_open);
            }
            Command::GridCursor(delta) => self.move_grid_cursor(delta),
            Command::GridChoose => {
                let order = self.grid_order();
                if let Some(&index) = order.get(self.grid_cursor) {
                    self.navigator.select_from_grid(index, now);
                    self.mode = AppMode::Slideshow;
                }
            }
            Command::GridCycleSort => {
                self.sort_by = self.sort_by.next();
                self.focus_grid_on_current();
            }
            Command::GridFlipOrder => {
                self.sort_order = self.sort_order.flipped();
                self.focus_grid_on_current();
            }
            Command::OpenEditor => self.mode = AppMode::Editor,
            Command::CloseEditor => self.mode = AppMode::Slideshow,
            Command::SelectNextElement => self.select_next_element(),
            Command::Nudge { dx, dy } => self.nudge_selected(dx, dy),
            Command::Duplicate => {
                if let Some(id) = self.store.selected_element_id().cloned() {
                    if let Some(new_id) = self.store.duplicate_element(&id) {
                        self.status_message = Some(format!("Duplicated {id} as {new_id}"));
                    }
                }
            }
            Command::Delete => {
                if let Some(id) = self.store.selected_element_id().cloned() {
                    self.store.delete_element(&id);
                }
            }
            Command::BringForward => {
                if let Some(id) = self.store.selected_element_id().cloned() {
                    self.store.bring_forward(&id);
                }
            }
            Command::SendBackward => {
                if let Some(id) = self.store.selected_element_id().cloned() {
                    self.store.send_backward(&id);
                }
            }
            Command::BeginPrompt => {
                if self.store.is_generating() {
                    self.status_message = Some("Generation already running".to_string());
                } else {
                    self.prompt_active = true;
                    self.prompt_buffer.clear();
                }
            }
        }
    }

    fn sync_grid_mode(&mut self, was_open: bool) {
        let open = self.navigator.is_grid_open();
        if open && !was_open {
            self.mode = AppMode::Grid;
            self.focus_grid_on_current();
        } else if !open && was_open {
            self.mode = AppMode::Slideshow;
        }
    }

    /// Put the grid cursor on the card for the current slide.
    fn focus_grid_on_current(&mut self) {
        let current = self.navigator.current_index();
        self.grid_cursor = self
            .grid_order()
            .iter()
            .position(|&i| i == current)
            .unwrap_or(0);
    }

    fn move_grid_cursor(&mut self, delta: isize) {
        let len = self.navigator.len();
        if len == 0 {
            return;
        }
        self.grid_cursor = self
            .grid_cursor
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    fn select_next_element(&mut self) {
        let Some(slide) = self.store.slide_ref() else {
            return;
        };
        if slide.elements.is_empty() {
            self.store.set_selected_element(None);
            return;
        }
        let next = self
            .store
            .selected_element_id()
            .and_then(|id| slide.index_of(id))
            .map_or(0, |i| (i + 1) % slide.elements.len());
        let id = slide.elements[next].id.clone();
        self.store.set_selected_element(Some(id));
    }

    fn nudge_selected(&mut self, dx: f64, dy: f64) {
        let Some(element) = self.store.selected_element() else {
            return;
        };
        let id = element.id.clone();
        let position = element.position.offset(dx, dy);
        self.store.update_element(&id, &ElementPatch::position(position));
    }

    fn handle_prompt_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt_active = false;
                self.prompt_buffer.clear();
            }
            KeyCode::Enter => {
                self.prompt_active = false;
                let prompt = std::mem::take(&mut self.prompt_buffer);
                self.submit_prompt(&prompt);
            }
            KeyCode::Backspace => {
                self.prompt_buffer.pop();
            }
            KeyCode::Char(c) => self.prompt_buffer.push(c),
            _ => {}
        }
    }

    /// Start generating a slide for `prompt` in the background.
    pub fn submit_prompt(&mut self, prompt: &str) {
        let Some(ticket) = self.store.begin_generation(prompt) else {
            return;
        };
        self.status_message = Some(format!("Generating \"{}\"...", ticket.prompt()));

        let generator = Arc::clone(&self.generator);
        let tx = self.async_task_tx.clone();
        tokio::spawn(async move {
            let result = generator.generate(ticket.prompt()).await;
            if let Err(e) = tx.send(AppUpdate::SlideGenerated(ticket, result)).await {
                tracing::warn!("generation result dropped, UI gone: {}", e);
            }
        });
    }

    /// Drain results from async tasks.
    pub fn handle_updates(&mut self) {
        loop {
            match self.async_task_rx.try_recv() {
                Ok(AppUpdate::SlideGenerated(ticket, result)) => {
                    match self.store.finish_generation(&ticket, result) {
                        GenerationOutcome::Applied => {
                            self.status_message = Some("Slide generated".to_string());
                        }
                        GenerationOutcome::Failed(e) => {
                            self.status_message = None;
                            self.error_message = Some(format!("Failed to generate slide: {e}"));
                        }
                        GenerationOutcome::Skipped | GenerationOutcome::Superseded => {}
                    }
                }
                Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected) => break,
            }
        }
    }
}
