use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pagecraft_config::{Config, DEFAULT_WORDS_PER_MINUTE};
use pagecraft_engine::blocks::{BlockContent, UuidIdGenerator};
use pagecraft_engine::store::{self, FileStore, MarkupStore};
use pagecraft_engine::syntax::inline::strip_tags;
use pagecraft_engine::views::DocumentInsights;
use pagecraft_engine::{ParseReport, parse_markup_report};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

/// Longest block summary shown before truncating.
const SUMMARY_WIDTH: usize = 72;

struct App {
    store: FileStore,
    words_per_minute: u32,
    keys: Vec<RelativePathBuf>,
    page_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(store: FileStore, words_per_minute: u32) -> Result<Self> {
        let keys = store.keys()?;
        log::info!("found {} pages under {}", keys.len(), store.root().display());

        let mut app = Self {
            store,
            words_per_minute,
            keys,
            page_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first page if available
        if !app.keys.is_empty() {
            app.page_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_page(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.page_list_state.selected() {
            Some(i) => (i + 1) % self.keys.len(),
            None => 0,
        };
        self.page_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_page(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let i = match self.page_list_state.selected() {
            Some(0) | None => self.keys.len() - 1,
            Some(i) => i - 1,
        };
        self.page_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn reload(&mut self) -> Result<()> {
        self.keys = self.store.keys()?;
        if self.keys.is_empty() {
            self.page_list_state.select(None);
            self.current_content.clear();
        } else {
            let selected = self
                .page_list_state
                .selected()
                .unwrap_or(0)
                .min(self.keys.len() - 1);
            self.page_list_state.select(Some(selected));
            self.update_content_for_selection();
        }
        Ok(())
    }

    fn update_content_for_selection(&mut self) {
        let Some(key) = self
            .page_list_state
            .selected()
            .and_then(|index| self.keys.get(index))
        else {
            return;
        };

        self.current_content = match self.store.load(key) {
            Ok(markup) => {
                let report = parse_markup_report(&markup, &mut UuidIdGenerator);
                render_page_content(&report, self.words_per_minute)
            }
            Err(e) => vec![Line::from(format!("Error reading page: {e}"))],
        };
    }
}

/// One line per recovered block, then the derived views.
fn render_page_content(report: &ParseReport, words_per_minute: u32) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for parsed in &report.lines {
        let block = parsed.block();
        let style = if parsed.is_fallback() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let flag = if parsed.is_fallback() { "~" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{flag}{:>4} ", parsed.number), style),
            Span::styled(format!("{:<8} ", block.kind().as_str()), style.fg(Color::Cyan)),
            Span::styled(summarize(block.content()), style),
        ]));
    }

    let blocks: Vec<_> = report.blocks().cloned().collect();
    let insights = DocumentInsights::compute_at(&blocks, words_per_minute);

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Table of contents",
        Style::default().fg(Color::Yellow),
    )));
    if insights.toc.is_empty() {
        lines.push(Line::from("  (no H2/H3 headings)"));
    }
    for entry in &insights.toc {
        let indent = "  ".repeat(entry.level.number() as usize - 1);
        lines.push(Line::from(format!("{indent}{} #{}", entry.text, entry.anchor_id)));
    }

    lines.push(Line::default());
    for warning in &insights.warnings {
        lines.push(Line::from(Span::styled(
            format!("⚠ {warning}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(format!(
        "{} blocks, {} kept as text, {} min read",
        report.len(),
        report.fallbacks().count(),
        insights.reading_minutes
    )));

    lines
}

fn summarize(content: &BlockContent) -> String {
    let summary = match content {
        BlockContent::Heading(h) => format!("{} {}", h.level, h.text),
        BlockContent::Text(t) => strip_tags(&t.html),
        BlockContent::Image(i) => format!("{} ({})", i.src, i.alt),
        BlockContent::Video(v) => format!("{} [{}]", v.url, v.provider),
        BlockContent::Html(h) => h.code.clone(),
        BlockContent::Button(b) => format!("[{}] -> {}", b.text, b.href),
        BlockContent::Divider(d) => format!("--- {}", d.style),
        BlockContent::Spacer(s) => format!("{}px", s.height),
        BlockContent::Toc(_) => "(table of contents)".to_string(),
        BlockContent::Quote(q) => format!("\"{}\" {}", strip_tags(&q.text), q.citation),
    };

    let summary = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    if summary.chars().count() > SUMMARY_WIDTH {
        let truncated: String = summary.chars().take(SUMMARY_WIDTH - 1).collect();
        format!("{truncated}…")
    } else {
        summary
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let from_config;
    let mut words_per_minute = DEFAULT_WORDS_PER_MINUTE;

    if args.len() == 2 {
        content_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                words_per_minute = config.reading_words_per_minute;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-dir>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-dir>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-dir]", args[0]);
        process::exit(1);
    };

    let file_store = match FileStore::open(&content_path) {
        Ok(file_store) => file_store,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Content path '{}'{} is invalid: {e}",
                content_path.display(),
                source
            );
            process::exit(1);
        }
    };
    log::debug!("pages are stored as .{} files", store::MARKUP_EXTENSION);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(file_store, words_per_minute)
        .and_then(|mut app| run_app(&mut terminal, &mut app));

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
                KeyCode::Down | KeyCode::Char('j') => app.next_page(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_page(),
                KeyCode::Char('r') => app.reload()?,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Page list panel
    let page_items: Vec<ListItem> = app
        .keys
        .iter()
        .map(|key| ListItem::new(Line::from(Span::raw(key.to_string()))))
        .collect();

    let pages_list = List::new(page_items)
        .block(Block::default().borders(Borders::ALL).title("Pages"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(pages_list, chunks[0], &mut app.page_list_state);

    // Blocks panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a page to view its blocks")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Blocks"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("r: Reload | "),
        Span::styled("~ kept as text", Style::default().fg(Color::DarkGray)),
    ]));

    f.render_widget(help, rows[1]);
}
