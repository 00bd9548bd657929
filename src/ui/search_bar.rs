/// Search field with its leading search and trailing clear buttons
use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

pub const PLACEHOLDER: &str = "Search here...";

pub fn view(query: &str) -> Element<'_, Message> {
    let search = button(text("Search"))
        .on_press(Message::Search(query.to_string()))
        .padding(10)
        .style(button::text);

    let input = text_input(PLACEHOLDER, query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Search(query.to_string()))
        .padding(10)
        .size(16)
        .width(Length::Fill);

    let clear = button(text("Clear"))
        .on_press(Message::ClearQuery)
        .padding(10)
        .style(button::text);

    row![search, input, clear]
        .spacing(4)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}
