use anyhow::{Context, Result};
use crossdocs_config::Config;
use crossdocs_engine::{RenderOptions, TaskListMode, io, render_document, to_outline};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

mod view;

struct App {
    notes_path: PathBuf,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    options: RenderOptions,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(notes_path: PathBuf, options: RenderOptions) -> Result<Self> {
        let files = io::list_markdown_files(&notes_path)?;

        let mut app = Self {
            notes_path,
            files,
            file_list_state: ListState::default(),
            options,
            current_content: Vec::new(),
            scroll: 0,
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_task_list_mode(&mut self) {
        self.options.task_list_mode = match self.options.task_list_mode {
            TaskListMode::Marker => TaskListMode::Pattern,
            TaskListMode::Pattern => TaskListMode::Marker,
        };
        log::debug!("Task list mode now {:?}", self.options.task_list_mode);
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(5);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        // Re-render from disk on every selection
        self.current_content = match io::read_file(file, &self.notes_path) {
            Ok(content) => view::document_lines(&render_document(&content, &self.options)),
            Err(e) => vec![Line::from(format!("Error reading file: {e}"))],
        };
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [notes-folder-path]");
    eprintln!("       {program} --print <file.md>");
}

/// Config file settings, or defaults when there is no usable config.
fn load_config() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config file: {e}");
            None
        }
    }
}

fn print_file(path: &Path) -> Result<()> {
    let options = load_config()
        .map(|config| config.render_options())
        .unwrap_or_default();
    let content =
        io::read_markdown(path).with_context(|| format!("Cannot print '{}'", path.display()))?;
    println!("{}", to_outline(&render_document(&content, &options)));
    Ok(())
}

fn main() -> Result<()> {
    if env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env().init();
    }

    // Determine notes path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("crossdocs-cli", String::as_str);
    let config_path = Config::config_path();

    let config = match args.get(1).map(String::as_str) {
        Some("--print") => {
            let Some(file) = args.get(2) else {
                print_usage(program);
                process::exit(1);
            };
            return print_file(Path::new(file));
        }
        Some("-h" | "--help") => {
            print_usage(program);
            return Ok(());
        }
        _ if args.len() > 2 => {
            print_usage(program);
            process::exit(1);
        }
        _ => load_config(),
    };

    let (notes_path, from_config) = match (args.get(1), config.as_ref()) {
        (Some(arg), _) => (PathBuf::from(arg), false),
        (None, Some(Config {
            notes_path: Some(path),
            ..
        })) => (path.clone(), true),
        (None, _) => {
            eprintln!("Error: No notes path provided and none configured");
            print_usage(program);
            eprintln!(
                "Or set notes_path in a config file at {}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    // Validate notes directory using engine
    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let options = config
        .map(|config| config.render_options())
        .unwrap_or_default();
    log::info!(
        "Opening {} with {:?} task lists",
        notes_path.display(),
        options.task_list_mode
    );

    // Create app before touching the terminal so scan errors print normally
    let mut app = App::new(notes_path, options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(),
                KeyCode::Char('t') => app.toggle_task_list_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            let depth = file.components().count().saturating_sub(1);
            let indent = "  ".repeat(depth);
            let name = file.file_name().unwrap_or(file.as_str());
            ListItem::new(vec![Line::from(vec![Span::raw(format!(
                "{indent}📄 {name}"
            ))])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content.clone()
    };

    let title = app
        .file_list_state
        .selected()
        .and_then(|i| app.files.get(i))
        .map_or_else(|| "Content".to_string(), |file| file.to_string());

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let mode = match app.options.task_list_mode {
        TaskListMode::Marker => "marker",
        TaskListMode::Pattern => "pattern",
    };
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgDn/PgUp: Scroll | "),
        Span::raw(format!("t: Task lists ({mode})")),
    ]);

    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}
