/// Results grid: one clickable card per book
///
/// Cards flow left to right and wrap, so the number of columns follows the
/// window width. The whole grid scrolls vertically.
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::state::data::Book;
use crate::Message;

/// Height reserved for a cover in every card
const COVER_HEIGHT: f32 = 180.0;

/// Render state of a single card's cover
#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Download in flight
    Loading,
    /// Decoded and ready to draw
    Ready(Handle),
    /// No URL, or the download failed
    Missing,
}

impl Thumbnail {
    /// Initial slot for a freshly loaded book
    pub fn for_book(book: &Book) -> Self {
        if book.has_thumbnail() {
            Thumbnail::Loading
        } else {
            Thumbnail::Missing
        }
    }
}

/// Build the scrollable grid. `thumbnails` is index-aligned with `books`.
pub fn view<'a>(books: &'a [Book], thumbnails: &'a [Thumbnail], card_width: f32) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = books
        .iter()
        .enumerate()
        .map(|(index, book)| {
            let thumbnail = thumbnails.get(index).unwrap_or(&Thumbnail::Missing);
            card(book, thumbnail, card_width)
        })
        .collect();

    let grid = Wrap::with_elements(cards)
        .spacing(Pixels(8.0))
        .line_spacing(Pixels(8.0));

    scrollable(container(grid).padding(40).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card<'a>(book: &'a Book, thumbnail: &'a Thumbnail, width: f32) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match thumbnail {
        Thumbnail::Ready(handle) => image(handle.clone())
            .height(Length::Fixed(COVER_HEIGHT))
            .into(),
        Thumbnail::Loading => placeholder("Loading..."),
        Thumbnail::Missing => placeholder("No cover"),
    };

    let mut content = column![
        cover,
        text(&book.title).size(14),
        text(&book.author).size(12),
    ];
    if book.has_preview() {
        content = content.push(text("Preview available").size(10));
    }

    let content = content
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    button(content)
        .on_press(Message::OpenBook(book.id.clone()))
        .padding(8)
        .width(Length::Fixed(width))
        .style(button::secondary)
        .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(12))
        .width(Length::Fill)
        .height(Length::Fixed(COVER_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(COVER_HEIGHT))
        .into()
}
