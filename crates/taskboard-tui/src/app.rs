use crate::events::{Event, EventHandler};
use crate::ui;
use crossterm::{
    event::{KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taskboard_core::{InputState, SelectionState, TaskboardResult};
use taskboard_domain::{Board, BoardId, BoardReorderController, BoardStore, DragContext, RowUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    CreateBoard,
    CreateTask,
    RenameBoard,
    EditTask,
    ConfirmDeleteBoard,
    ConfirmDeleteTask,
    /// A task is picked up; arrow keys steer the drop cursor.
    DragTask,
    /// A board is being carried to a new position in the strip.
    MoveBoard,
}

/// Where the drop cursor currently points while a task is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCursor {
    /// A slot in a board's task list; `row` is `None` over the empty tail,
    /// where a drop appends.
    Slot {
        board_index: usize,
        row: Option<usize>,
    },
    /// The discard target.
    Trash,
}

/// A drag in flight: the read-once context plus the steerable cursor.
#[derive(Debug)]
pub struct TaskDrag {
    pub context: DragContext,
    pub cursor: DragCursor,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub store: BoardStore,
    pub board_selection: SelectionState,
    pub task_selection: SelectionState,
    pub drag: Option<TaskDrag>,
    pub reorder: BoardReorderController,
    /// Text the task editor opened with; saving is refused while the buffer
    /// still equals it.
    pub edit_original: Option<String>,
    /// Visual diff of the last mutation, flashed until the next key press.
    pub recent_updates: Vec<RowUpdate>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            store: BoardStore::new(),
            board_selection: SelectionState::new(),
            task_selection: SelectionState::new(),
            drag: None,
            reorder: BoardReorderController::new(),
            edit_original: None,
            recent_updates: Vec::new(),
        }
    }

    /// The starter layout: three boards with sample tasks.
    pub fn with_demo_boards() -> Self {
        let mut app = Self::new();

        let seed = [
            (
                "Todo",
                vec!["Task One", "Task Two", "Task Three", "Task Four", "Task Five"],
            ),
            (
                "In Progress",
                vec![
                    "Task OneOne",
                    "Task TwoTwo",
                    "Task ThreeThree",
                    "Task FourFour",
                    "Task FiveFive",
                ],
            ),
            ("Done", vec!["Task 1", "Task 2"]),
        ];

        for (title, tasks) in seed {
            app.store.push_board(Board::with_tasks(
                title.to_string(),
                tasks.into_iter().map(str::to_string).collect(),
            ));
        }

        app.board_selection.set(Some(0));
        app.task_selection.set(Some(0));
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_board(&self) -> Option<&Board> {
        self.store.board_at(self.board_selection.get()?)
    }

    pub fn selected_board_id(&self) -> Option<BoardId> {
        self.selected_board().map(|b| b.id)
    }

    /// Re-fit both selections after any mutation that can shrink a list.
    pub fn clamp_selections(&mut self) {
        self.board_selection.clamp(self.store.len());
        let task_count = self.selected_board().map_or(0, Board::task_count);
        self.task_selection.clamp(task_count);
        if !self.task_selection.has_selection() && task_count > 0 {
            self.task_selection.set(Some(0));
        }
    }

    /// Record the visual diff of the last mutation; the renderer flashes the
    /// touched rows until the next key press clears it.
    pub fn apply_row_updates(&mut self, updates: Vec<RowUpdate>) {
        for update in &updates {
            tracing::debug!("Visual update: {:?}", update);
        }
        self.recent_updates = updates;
        self.clamp_selections();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.recent_updates.clear();

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::DragTask => self.handle_drag_key(key),
            AppMode::MoveBoard => self.handle_move_board_key(key),
            AppMode::CreateBoard
            | AppMode::CreateTask
            | AppMode::RenameBoard
            | AppMode::EditTask => self.handle_input_dialog_key(key),
            AppMode::ConfirmDeleteBoard | AppMode::ConfirmDeleteTask => {
                self.handle_confirm_dialog_key(key)
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        use crossterm::event::KeyCode;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => self.select_prev_board(),
            KeyCode::Right | KeyCode::Char('l') => self.select_next_board(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_task(),
            KeyCode::Char('b') => self.handle_create_board_key(),
            KeyCode::Char('n') => self.handle_create_task_key(),
            KeyCode::Char('r') => self.handle_rename_board_key(),
            KeyCode::Char('e') | KeyCode::Enter => self.handle_edit_task_key(),
            KeyCode::Char('d') => self.handle_delete_task_key(),
            KeyCode::Char('D') => self.handle_delete_board_key(),
            KeyCode::Char(' ') => self.begin_task_drag(),
            KeyCode::Char('m') => self.begin_board_move(),
            _ => {}
        }
    }

    pub async fn run(&mut self) -> TaskboardResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
