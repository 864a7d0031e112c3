use std::io::{self, BufRead, Write};
use std::path::Path;

use board_logging::{board_info, board_warn};
use jobboard_core::{update, AppState, CartStorage, CartStore, JobBoard, JobPosting, Msg};
use jobboard_engine::{load_markup, CardExtractor, ExtractedCard, JobCardExtractor};

use super::config::{load_config, CONFIG_FILENAME};
use super::effects::run_effects;
use super::input::{parse_line, Input};
use super::logging;
use super::persistence::FileStorage;
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config = load_config(Path::new(CONFIG_FILENAME));
    logging::initialize(config.log_destination);
    board_info!("Starting with {:?}", config);

    let cart = CartStore::initialize_with_key(
        FileStorage::new(config.data_dir.clone()),
        &config.storage_key,
    );
    let board = load_board(config.board_markup.as_deref());
    let state = AppState::new(board, cart);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handler = AppEventHandler::new(state, stdout.lock());
    handler.start()?;

    for line in stdin.lock().lines() {
        if !handler.handle_line(&line?)? {
            break;
        }
    }
    board_info!("Shutting down");
    Ok(())
}

fn load_board(markup: Option<&Path>) -> JobBoard {
    let Some(path) = markup else {
        return JobBoard::new();
    };
    match load_markup(path) {
        Ok(html) => {
            let cards = JobCardExtractor.extract(&html);
            board_info!("Loaded {} job cards from {:?}", cards.len(), path);
            JobBoard::from_postings(cards.into_iter().map(map_card))
        }
        Err(err) => {
            board_warn!("Starting with an empty board: {}", err);
            JobBoard::new()
        }
    }
}

fn map_card(card: ExtractedCard) -> JobPosting {
    JobPosting {
        title: card.title,
        company: card.company,
        location: card.location,
        details: card.details,
    }
}

/// Feeds parsed input lines through `update` and prints what changed.
struct AppEventHandler<S, W> {
    state: Option<AppState<S>>,
    out: W,
}

impl<S: CartStorage, W: Write> AppEventHandler<S, W> {
    fn new(state: AppState<S>, out: W) -> Self {
        Self {
            state: Some(state),
            out,
        }
    }

    fn start(&mut self) -> io::Result<()> {
        self.write_lines(ui::layout::banner())?;
        self.render_if_dirty()
    }

    /// Returns `false` once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match parse_line(line) {
            Input::Dispatch(msgs) => {
                for msg in msgs {
                    self.dispatch_msg(msg)?;
                }
                self.render_if_dirty()?;
            }
            Input::Show => self.render()?,
            Input::Help => self.write_lines(ui::layout::help())?,
            Input::Quit => return Ok(false),
            Input::Invalid(reason) => writeln!(self.out, "? {reason}")?,
        }
        self.out.flush()?;
        Ok(true)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let Some(state) = self.state.take() else {
            return Ok(());
        };
        let (state, effects) = update(state, msg);
        self.state = Some(state);
        run_effects(effects, &mut self.out)
    }

    fn render_if_dirty(&mut self) -> io::Result<()> {
        let was_dirty = self
            .state
            .as_mut()
            .is_some_and(|state| state.consume_dirty());
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let lines = match &self.state {
            Some(state) => ui::render::render(&state.view()),
            None => return Ok(()),
        };
        self.write_lines(lines)
    }

    fn write_lines(&mut self, lines: Vec<String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jobboard_core::{MemoryStorage, CART_STORAGE_KEY};

    use super::*;

    fn run(lines: &[&str]) -> (String, AppState<MemoryStorage>) {
        let board = JobBoard::from_postings([
            JobPosting {
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                details: "Rust".to_string(),
            },
            JobPosting {
                title: "Frontend Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Berlin".to_string(),
                details: String::new(),
            },
        ]);
        let state = AppState::new(board, CartStore::initialize(MemoryStorage::new()));
        let mut handler = AppEventHandler::new(state, Vec::new());
        handler.start().unwrap();
        for line in lines {
            if !handler.handle_line(line).unwrap() {
                break;
            }
        }
        let output = String::from_utf8(handler.out).unwrap();
        (output, handler.state.unwrap())
    }

    #[test]
    fn apply_updates_badge_and_persists() {
        let (output, state) = run(&["apply 1", "apply 1"]);

        assert!(output.contains("[Cart (0)]"));
        assert!(output.contains("! Backend Engineer added to cart!"));
        assert!(output.contains("[Cart (1)]"));
        assert!(output.contains("! Backend Engineer at Acme is already in your cart!"));
        assert!(state
            .cart()
            .storage()
            .get(CART_STORAGE_KEY)
            .unwrap()
            .contains("Backend Engineer"));
    }

    #[test]
    fn quit_stops_processing() {
        let (_, state) = run(&["apply 1", "quit", "apply 2"]);
        assert_eq!(state.cart().count(), 1);
    }

    #[test]
    fn pop_on_empty_cart_shows_notice() {
        let (output, _) = run(&["pop"]);
        assert!(output.contains("! Your cart is empty!"));
    }

    #[test]
    fn load_board_without_markup_is_empty() {
        assert!(load_board(None).is_empty());
        assert!(load_board(Some(Path::new("/definitely/missing/index.html"))).is_empty());
    }
}
