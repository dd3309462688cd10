//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::DOT,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    levels::{self, Difficulty},
    maze::Direction,
    types::{DifficultyItem, MainMenuItem, MenuType, PauseMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the session,
/// dispatching to the appropriate rendering function for each screen type. The pause screen
/// renders the frozen level underneath its menu overlay.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.session.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::DifficultySelect(item) => difficulty_menu(frame, item),
        Screen::Playing => in_game(app, frame)?,
        Screen::Paused(item) => {
            in_game(app, frame)?;
            pause_menu(frame, item);
        }
        Screen::LevelComplete => level_complete(app, frame)?,
        Screen::GameComplete => game_complete(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the centered menus.
///
/// This function creates the common layout and block structure used by the main, difficulty,
/// and pause menus. The generic part includes the centered positioning and border styling,
/// while the specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (enter) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the title menu with the "Play" and "Quit" entries, highlighting the
/// currently selected option and providing visual feedback for user navigation.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(2));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Play").centered();
    let mut opt2 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::Play => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
}

/// Renders the difficulty selection screen with the three tiers.
///
/// This function displays one entry per tier, each annotated with its level count from the
/// catalog, plus a "Back" entry. The highlighted entry follows the cursor stored in the screen
/// variant.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn difficulty_menu(frame: &mut Frame, item: DifficultyItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::DifficultyMenu(4));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let easy_count = levels::count(Difficulty::Easy);
    let medium_count = levels::count(Difficulty::Medium);
    let hard_count = levels::count(Difficulty::Hard);

    let mut opt1 = Line::raw(format!("Easy {DOT} {easy_count} levels"))
        .centered()
        .style(content_style);
    let mut opt2 = Line::raw(format!("Medium {DOT} {medium_count} levels"))
        .centered()
        .style(content_style);
    let mut opt3 = Line::raw(format!("Hard {DOT} {hard_count} levels"))
        .centered()
        .style(content_style);
    let mut opt4 = Line::raw("Back").centered().style(content_style);
    match item {
        DifficultyItem::Easy => opt1 = opt1.style(active_content_style),
        DifficultyItem::Medium => opt2 = opt2.style(active_content_style),
        DifficultyItem::Hard => opt3 = opt3.style(active_content_style),
        DifficultyItem::Back => opt4 = opt4.style(active_content_style),
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
    frame.render_widget(opt3, inner_layout[2]);
    frame.render_widget(opt4, inner_layout[3]);
}

/// Renders the pause menu overlay.
///
/// This function draws the pause menu block over whatever the frame already holds; the caller
/// renders the frozen level first so the maze stays visible behind the overlay.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn pause_menu(frame: &mut Frame, item: PauseMenuItem) {
    let inner_layout = init_menu(frame, &MenuType::PauseMenu(2));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Resume").centered();
    let mut opt2 = Line::raw("Main Menu").centered();
    match item {
        PauseMenuItem::Resume => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        PauseMenuItem::MainMenu => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
}

/// Converts a grid coordinate into a canvas coordinate.
///
/// # Errors
///
/// This function may return an error when a coordinate exceeds the terminal-sized integer
/// range, which the level catalog's dimensions never do.
fn coord(value: usize) -> Result<f64> {
    Ok(f64::from(u16::try_from(value)?))
}

/// Renders the in-game screen with the maze, the player, and the HUD.
///
/// This function draws the running level: a heads-up line with the level index and difficulty,
/// the maze walls on a [`Canvas`] with the exit and player marked as colored squares, and a
/// key-hint footer. The per-cell character size is derived from the level's scale hint, so
/// later levels render denser.
///
/// # Errors
///
/// This function may return errors from layout conversions or when no level is running, which
/// the screen state machine prevents.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let run = app
        .session
        .run
        .as_ref()
        .ok_or_eyre("no active level to render")?;

    let maze_rows = run.maze.rows();
    let maze_columns = run.maze.cols();

    // Scale hint -> characters per cell; taller levels render denser.
    let cell_width = rounded_div::u16(run.spec.scale, 20).max(1);
    let cell_height = rounded_div::u16(cell_width, 2).max(1);
    let grid_width = u16::try_from(maze_columns)? * cell_width + 1;
    let grid_height = u16::try_from(maze_rows)? * cell_height + 1;

    let overall_layout = Layout::vertical([
        Constraint::Length(1), // HUD line
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let hud_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get HUD area from layout")?;
    let maze_content_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let level_display = app.session.level + 1;
    let level_total = levels::count(app.session.difficulty);
    let hud = Line::raw(format!(
        "Level {level_display}/{level_total} {DOT} Difficulty: {}",
        app.session.difficulty.label()
    ))
    .style(Style::default().fg(Color::Green))
    .centered();
    frame.render_widget(hud, hud_area);

    // Center the maze within the content area, padding on both axes.
    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(grid_height),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from vertical layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(grid_width),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute wall geometry to handle conversion errors before the paint closure.
    let rows_bound = coord(maze_rows)?;
    let cols_bound = coord(maze_columns)?;

    let mut wall_segments: Vec<(f64, f64, f64, f64)> = Vec::new();
    for row in 0..maze_rows {
        for col in 0..maze_columns {
            let left = coord(col)?;
            let right = left + 1.;
            // The canvas's y axis grows upward while grid rows grow downward.
            let top = rows_bound - coord(row)?;
            let bottom = top - 1.;

            if run.maze.has_wall(col, row, Direction::North) {
                wall_segments.push((left, top, right, top));
            }
            if run.maze.has_wall(col, row, Direction::West) {
                wall_segments.push((left, bottom, left, top));
            }
            if row + 1 == maze_rows && run.maze.has_wall(col, row, Direction::South) {
                wall_segments.push((left, bottom, right, bottom));
            }
            if col + 1 == maze_columns && run.maze.has_wall(col, row, Direction::East) {
                wall_segments.push((right, bottom, right, top));
            }
        }
    }

    let (exit_col, exit_row) = run.maze.exit();
    let exit_x = coord(exit_col)? + 0.25;
    let exit_y = rows_bound - coord(exit_row)? - 0.75;
    let player_x = coord(run.player.col)? + 0.25;
    let player_y = rows_bound - coord(run.player.row)? - 0.75;

    let maze_canvas = Canvas::default()
        .x_bounds([0., cols_bound])
        .y_bounds([0., rows_bound])
        .paint(|ctx| {
            for &(x1, y1, x2, y2) in &wall_segments {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: Color::White,
                });
            }
            ctx.draw(&Rectangle {
                x: exit_x,
                y: exit_y,
                width: 0.5,
                height: 0.5,
                color: Color::Green,
            });
            ctx.draw(&Rectangle {
                x: player_x,
                y: player_y,
                width: 0.5,
                height: 0.5,
                color: Color::Red,
            });
        });

    frame.render_widget(maze_canvas, space);

    // Render the key hints as a block at the bottom with a top border.
    let tooltip_block = Block::bordered()
        .title("(arrows/hjkl) move / (esc) pause / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_full_area);

    Ok(())
}

/// Renders a centered interstitial screen with a title and a few text lines.
///
/// This function builds the shared layout of the level-complete and game-complete screens: a
/// centered bordered block holding the given lines.
///
/// # Errors
///
/// This function may return errors from layout conversions.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn status_screen(frame: &mut Frame, title: &str, lines: Vec<Line>) -> Result<()> {
    clear(frame);

    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(60),
        Constraint::Percentage(20),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::try_from(lines.len())? + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(space) continue / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    let inner_layout = Layout::vertical(vec![Constraint::Max(1); lines.len()]).split(inner_space);
    for (idx, line) in lines.into_iter().enumerate() {
        frame.render_widget(line, inner_layout[idx]);
    }

    Ok(())
}

/// Renders the level-complete screen.
///
/// This function announces the finished level and difficulty, and tells the player how to
/// continue to the next level.
///
/// # Errors
///
/// This function may return errors from layout conversions.
fn level_complete(app: &App, frame: &mut Frame) -> Result<()> {
    let completed = app.session.level;
    let lines = vec![
        Line::raw(format!("LEVEL {completed} COMPLETE!"))
            .style(Style::default().fg(Color::Green))
            .centered(),
        Line::raw(format!(
            "Difficulty: {}",
            app.session.difficulty.label()
        ))
        .style(Style::default().fg(Color::White))
        .centered(),
        Line::raw("Press Space to continue to the next level")
            .style(Style::default().fg(Color::White))
            .centered(),
    ];

    status_screen(frame, "Level Complete", lines)
}

/// Renders the game-complete screen.
///
/// This function congratulates the player for clearing every level of the chosen tier and
/// offers the way back to the main menu.
///
/// # Errors
///
/// This function may return errors from layout conversions.
fn game_complete(app: &App, frame: &mut Frame) -> Result<()> {
    let total = levels::count(app.session.difficulty);
    let lines = vec![
        Line::raw("CONGRATULATIONS!")
            .style(Style::default().fg(Color::Green))
            .centered(),
        Line::raw(format!(
            "You completed all {total} {} levels!",
            app.session.difficulty.label()
        ))
        .style(Style::default().fg(Color::White))
        .centered(),
        Line::raw("Press Space to return to the menu")
            .style(Style::default().fg(Color::White))
            .centered(),
    ];

    status_screen(frame, "Game Complete", lines)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::Cli;

    /// Creates a test app sitting in the main menu.
    fn create_test_app() -> App {
        App::new(&Cli {
            difficulty: None,
            seed: Some(1),
        })
    }

    /// Creates a test app with an easy-tier level already running.
    fn create_playing_app() -> App {
        App::new(&Cli {
            difficulty: Some(Difficulty::Easy),
            seed: Some(1),
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
    }

    #[test]
    fn test_draw_difficulty_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.session.screen = Screen::DifficultySelect(DifficultyItem::Medium);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing difficulty menu should succeed");
    }

    #[test]
    fn test_draw_playing_screen() {
        let app = create_playing_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the running level should succeed");
    }

    #[test]
    fn test_draw_paused_screen() {
        let mut app = create_playing_app();
        let mut terminal = create_test_terminal();
        app.session.screen = Screen::Paused(PauseMenuItem::Resume);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the pause overlay should succeed");
    }

    #[test]
    fn test_draw_level_complete_screen() {
        let mut app = create_playing_app();
        let mut terminal = create_test_terminal();
        app.session.screen = Screen::LevelComplete;
        app.session.level = 1;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing level complete should succeed");
    }

    #[test]
    fn test_draw_game_complete_screen() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.session.screen = Screen::GameComplete;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing game complete should succeed");
    }

    #[test]
    fn test_in_game_without_a_run_errors() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let game_result = in_game(&app, frame);
            assert!(
                game_result.is_err(),
                "the in-game renderer needs a running level"
            );
        });

        assert!(
            result.is_ok(),
            "terminal drawing should succeed even if in_game fails"
        );
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_layouts() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let main_layout = init_menu(frame, &MenuType::MainMenu(2));
            assert_eq!(main_layout.len(), 2, "main menu should have 2 items");

            let difficulty_layout = init_menu(frame, &MenuType::DifficultyMenu(4));
            assert_eq!(
                difficulty_layout.len(),
                4,
                "difficulty menu should have 4 items"
            );
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }
}
