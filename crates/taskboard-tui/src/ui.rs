use crate::app::{App, AppMode, DragCursor};
use crate::popup::{render_confirm_popup, render_input_popup};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use taskboard_domain::{Board, RowUpdate};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_board_strip(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::CreateBoard => render_input_popup(
            frame,
            "Add Board",
            "Title",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::CreateTask => render_input_popup(
            frame,
            "Add Task",
            "Task",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::RenameBoard => render_input_popup(
            frame,
            "Rename Board",
            "Title",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::EditTask => render_input_popup(
            frame,
            "Task Detail",
            "Task",
            app.input.as_str(),
            app.input.cursor_pos(),
        ),
        AppMode::ConfirmDeleteBoard => {
            let title = app
                .selected_board()
                .map(|b| b.title.as_str())
                .unwrap_or("this");
            render_confirm_popup(
                frame,
                "Delete Board",
                &format!("Delete the \"{}\" board? Deleted boards can't be restored.", title),
            );
        }
        AppMode::ConfirmDeleteTask => render_confirm_popup(
            frame,
            "Delete Task",
            "Delete this task? Deleted tasks can't be restored.",
        ),
        _ => {}
    }
}

fn render_board_strip(app: &App, frame: &mut Frame, area: Rect) {
    if app.store.is_empty() {
        let empty = Paragraph::new("No boards yet. Press 'b' to create one!")
            .style(label_text())
            .block(Block::default().borders(Borders::ALL).title("Tasks Board"));
        frame.render_widget(empty, area);
        return;
    }

    // While a board is carried, the strip shows the preview order; the
    // model itself is only mutated when the move commits.
    let order = app.reorder.display_order(app.store.len());
    let constraints = vec![Constraint::Ratio(1, order.len() as u32); order.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, &board_index) in order.iter().enumerate() {
        if let Some(board) = app.store.board_at(board_index) {
            render_board_column(app, frame, columns[slot], board, board_index);
        }
    }
}

fn render_board_column(app: &App, frame: &mut Frame, area: Rect, board: &Board, board_index: usize) {
    let selected = app.board_selection.is_selected(board_index);
    let carried = app.mode == AppMode::MoveBoard && app.reorder.origin() == Some(board_index);

    let title = if carried {
        format!("{} [moving]", board.title)
    } else {
        board.title.clone()
    };
    let border_style = if carried {
        highlight_text()
    } else if selected {
        focused_border()
    } else {
        unfocused_border()
    };

    let mut lines: Vec<Line> = board
        .tasks
        .iter()
        .enumerate()
        .map(|(row, task)| {
            Line::from(Span::styled(
                format!(" {} ", task),
                task_row_style(app, board, board_index, row, selected),
            ))
        })
        .collect();

    if hovering_tail(app, board_index) {
        lines.push(Line::from(Span::styled(" + drop here ", drop_slot())));
    } else if board.tasks.is_empty() {
        lines.push(Line::from(Span::styled(" no tasks ", label_text())));
    }

    let column = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(column, area);
}

fn task_row_style(app: &App, board: &Board, board_index: usize, row: usize, selected: bool) -> Style {
    if hovering_row(app, board_index, row) {
        return drop_slot();
    }
    if is_drag_source(app, board, row) {
        return carried_item();
    }
    if row_recently_changed(app, board, row) {
        return changed_row();
    }
    if app.mode == AppMode::Normal && selected && app.task_selection.is_selected(row) {
        return selected_item(true);
    }
    normal_text()
}

fn drag_cursor(app: &App) -> Option<DragCursor> {
    app.drag.as_ref().map(|d| d.cursor)
}

fn hovering_row(app: &App, board_index: usize, row: usize) -> bool {
    matches!(
        drag_cursor(app),
        Some(DragCursor::Slot { board_index: b, row: Some(r) }) if b == board_index && r == row
    )
}

fn hovering_tail(app: &App, board_index: usize) -> bool {
    matches!(
        drag_cursor(app),
        Some(DragCursor::Slot { board_index: b, row: None }) if b == board_index
    )
}

fn is_drag_source(app: &App, board: &Board, row: usize) -> bool {
    app.drag
        .as_ref()
        .is_some_and(|d| d.context.source_board() == board.id && d.context.source_index() == row)
}

fn row_recently_changed(app: &App, board: &Board, row: usize) -> bool {
    app.recent_updates.iter().any(|update| match update {
        RowUpdate::Inserted { board: b, index } => *b == board.id && *index == row,
        RowUpdate::Reloaded { board: b, from, to } => *b == board.id && (*from..=*to).contains(&row),
        RowUpdate::Deleted { .. } => false,
    })
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        AppMode::Normal => {
            "q quit | h/l boards | j/k tasks | space pick up | m move board | n task | b board | r rename | e edit | d/D delete"
        }
        AppMode::DragTask => "arrows aim | t trash | enter drop | esc cancel",
        AppMode::MoveBoard => "h/l position | enter drop | esc cancel",
        _ => "enter confirm | esc cancel",
    };

    let mut spans = vec![Span::styled(hints, label_text())];
    if app.mode == AppMode::DragTask {
        let hovered = matches!(drag_cursor(app), Some(DragCursor::Trash));
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[ trash ]", trash_target(hovered)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
