use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use tracing::{debug, error, info, warn};

mod api;
mod browser;
mod config;
mod state;
mod ui;

use api::{BookSearchClient, SearchError, ThumbnailError};
use browser::ExternalLinkOpener;
use config::Config;
use state::data::Book;
use state::search::{Phase, SearchTicket, SearchViewState};
use ui::grid::Thumbnail;

/// Main application state
struct BookFinder {
    config: Config,
    client: BookSearchClient,
    opener: ExternalLinkOpener,
    /// Query text and current results
    search: SearchViewState,
    /// Cover slots, index-aligned with the current results
    thumbnails: Vec<Thumbnail>,
    /// Outcome of the last completed search or launch
    status: String,
    /// Query of the search currently in flight
    pending_query: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search field
    QueryChanged(String),
    /// User clicked the clear button
    ClearQuery,
    /// Run a search; every trigger ends up here
    Search(String),
    /// User clicked "Load books" (forwarded as a `Search` for the load query)
    LoadBooks,
    /// Background search finished
    SearchCompleted(SearchTicket, Result<Vec<Book>, SearchError>),
    /// Background thumbnail download finished
    ThumbnailLoaded {
        ticket: SearchTicket,
        index: usize,
        result: Result<Handle, ThumbnailError>,
    },
    /// User clicked a book card
    OpenBook(String),
}

impl BookFinder {
    fn new() -> (Self, Task<Message>) {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> (Self, Task<Message>) {
        let client = BookSearchClient::new(config.api_endpoint.clone());
        let opener = ExternalLinkOpener::new(config.browse_host.clone());

        info!("📖 Book finder ready, catalog at {}", config.api_endpoint);

        (
            BookFinder {
                config,
                client,
                opener,
                search: SearchViewState::new(),
                thumbnails: Vec::new(),
                status: String::from("Type a query or load books."),
                pending_query: String::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Task::none()
            }
            Message::ClearQuery => {
                self.search.clear_query();
                Task::none()
            }
            Message::LoadBooks => {
                // Same pipeline as the search field, just a fixed query
                let query = self.config.load_query.clone();
                self.update(Message::Search(query))
            }
            Message::Search(query) => self.start_search(query),
            Message::SearchCompleted(ticket, Ok(books)) => {
                // A newer search was started meanwhile; its results win
                if !self.search.apply_results(ticket, books) {
                    debug!("Discarding stale search response #{}", ticket.generation());
                    return Task::none();
                }

                self.status = format!("{} books found.", self.search.results().len());

                // Fresh cover slots for the new results, then fetch the covers
                self.thumbnails = self.search.results().iter().map(Thumbnail::for_book).collect();
                self.fetch_thumbnails(ticket)
            }
            Message::SearchCompleted(ticket, Err(e)) => {
                // Failures of superseded searches are not worth reporting
                if self.search.fail_search(ticket) {
                    error!("❌ Search failed: {}", e);
                    self.status = format!("Search failed: {}", e);
                }
                Task::none()
            }
            Message::ThumbnailLoaded { ticket, index, result } => {
                // Cover for a result list that is no longer shown
                if !self.search.is_current(ticket) {
                    return Task::none();
                }

                let slot = match result {
                    Ok(handle) => Thumbnail::Ready(handle),
                    Err(e) => {
                        warn!("Thumbnail {} unavailable: {}", index, e);
                        Thumbnail::Missing
                    }
                };
                // Slots are index-aligned with the results of this ticket
                if let Some(current) = self.thumbnails.get_mut(index) {
                    *current = slot;
                }
                Task::none()
            }
            Message::OpenBook(id) => {
                // Launch failures are shown in the status line, the app keeps running
                if let Err(e) = self.opener.open(&id) {
                    error!("❌ {}", e);
                    self.status = e.to_string();
                }
                Task::none()
            }
        }
    }

    /// Issue a search; any search still in flight becomes stale
    fn start_search(&mut self, query: String) -> Task<Message> {
        let ticket = self.search.begin_search();
        self.pending_query = query.clone();

        Task::perform(
            api::search_books(self.client.clone(), query, self.config.max_results),
            move |result| Message::SearchCompleted(ticket, result),
        )
    }

    /// One download per book that has a cover URL
    fn fetch_thumbnails(&self, ticket: SearchTicket) -> Task<Message> {
        let max_size = self.config.thumbnail_size;

        let tasks = self
            .search
            .results()
            .iter()
            .enumerate()
            .filter(|(_, book)| book.has_thumbnail())
            .map(|(index, book)| {
                Task::perform(
                    api::thumbnail::fetch(self.client.http().clone(), book.image_url.clone(), max_size),
                    move |result| Message::ThumbnailLoaded { ticket, index, result },
                )
            });

        Task::batch(tasks)
    }

    /// Text for the status line
    fn status_label(&self) -> String {
        if self.search.is_searching() {
            format!("Searching for \"{}\"...", self.pending_query)
        } else {
            self.status.clone()
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button("Load books")
                .on_press(Message::LoadBooks)
                .padding(10),
            text(self.status_label()).size(14),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let results: Element<Message> = match self.search.phase() {
            Phase::Loaded if self.search.results().is_empty() => container(text("No books found."))
                .center_x(Length::Fill)
                .padding(40)
                .into(),
            _ => ui::grid::view(self.search.results(), &self.thumbnails, self.config.card_width),
        };

        let content: Column<Message> = column![
            ui::search_bar::view(self.search.query()),
            controls,
            results,
        ]
        .spacing(12)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("book_finder=info")
        .init();

    iced::application("Книги", BookFinder::update, BookFinder::view)
        .theme(BookFinder::theme)
        .centered()
        .run_with(BookFinder::new)
}
