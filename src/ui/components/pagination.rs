use crate::config::constants::PAGE_SIZE_OPTIONS;
use crate::ui::messages::applications_message::ApplicationsMessage;
use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

pub struct Pagination {
    pub total_count: u64,
    pub current_page_index: usize,
    pub page_input_value: String,
    pub page_size: usize,
}

impl Pagination {
    pub const fn new(page_size: usize) -> Self {
        Self {
            total_count: 0,
            current_page_index: 0,
            page_input_value: String::new(),
            page_size,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn total_pages(&self) -> usize {
        if self.total_count == 0 {
            1
        } else {
            self.total_count.div_ceil(self.page_size as u64) as usize
        }
    }

    pub const fn navigate_to(&mut self, page_index: usize) -> Option<usize> {
        if page_index < self.total_pages() {
            self.current_page_index = page_index;
            Some(page_index)
        } else {
            None
        }
    }

    pub const fn first_page(&mut self) -> Option<usize> {
        self.navigate_to(0)
    }

    pub const fn last_page(&mut self) -> Option<usize> {
        self.navigate_to(self.total_pages().saturating_sub(1))
    }

    pub const fn next(&mut self) -> Option<usize> {
        if self.current_page_index + 1 < self.total_pages() {
            self.current_page_index += 1;
            Some(self.current_page_index)
        } else {
            None
        }
    }

    pub const fn prev(&mut self) -> Option<usize> {
        if self.current_page_index > 0 {
            self.current_page_index -= 1;
            Some(self.current_page_index)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.current_page_index = 0;
        self.page_input_value.clear();
    }

    /// Applies a page-size selection. Only the advertised options are
    /// accepted; anything else leaves the state untouched.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) || self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        self.reset();
        true
    }

    pub fn view(&'_ self) -> Element<'_, ApplicationsMessage> {
        let total_pages = self.total_pages();

        let first_button = button(text("First"))
            .on_press_maybe(if self.current_page_index > 0 {
                Some(ApplicationsMessage::FirstPage)
            } else {
                None
            })
            .padding(8);

        let prev_button = button(text("Prev"))
            .on_press_maybe(if self.current_page_index > 0 {
                Some(ApplicationsMessage::PrevPage)
            } else {
                None
            })
            .padding(8);

        let page_info = text(format!(
            "{:^5} / {:^5} - {:^7}",
            if self.total_count == 0 {
                0
            } else {
                self.current_page_index + 1
            },
            if self.total_count == 0 { 0 } else { total_pages },
            self.total_count
        ))
        .size(14);

        let next_button = button(text("Next"))
            .on_press_maybe(if self.current_page_index < total_pages.saturating_sub(1) {
                Some(ApplicationsMessage::NextPage)
            } else {
                None
            })
            .padding(8);

        let last_button = button(text("Last"))
            .on_press_maybe(if self.current_page_index < total_pages.saturating_sub(1) {
                Some(ApplicationsMessage::LastPage)
            } else {
                None
            })
            .padding(8);

        let page_input = text_input("Page #", &self.page_input_value)
            .on_input(ApplicationsMessage::PageInputChanged)
            .on_submit(ApplicationsMessage::PageInputSubmit)
            .padding(8)
            .width(Length::Fixed(100f32));

        let page_size_picker = pick_list(
            PAGE_SIZE_OPTIONS,
            Some(self.page_size),
            ApplicationsMessage::PageSizeSelected,
        )
        .padding(8);

        row![
            first_button,
            prev_button,
            page_info,
            next_button,
            last_button,
            page_input,
            text("Rows per page").size(14),
            page_size_picker,
        ]
        .spacing(20)
        .align_y(Alignment::Center)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_seven_records_at_twenty_per_page_make_three_pages() {
        let mut pagination = Pagination::new(20);
        pagination.total_count = 57;

        assert_eq!(pagination.total_pages(), 3);
        assert_eq!(pagination.navigate_to(2), Some(2));
        assert_eq!(pagination.navigate_to(3), None);
        // The reported total stays the server-side count, not a page length.
        assert_eq!(pagination.total_count, 57);
    }

    #[test]
    fn empty_listing_still_reports_one_page() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(), 1);
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut pagination = Pagination::new(10);
        pagination.total_count = 25;

        assert_eq!(pagination.prev(), None);
        assert_eq!(pagination.next(), Some(1));
        assert_eq!(pagination.next(), Some(2));
        assert_eq!(pagination.next(), None);
        assert_eq!(pagination.last_page(), Some(2));
        assert_eq!(pagination.first_page(), Some(0));
    }

    #[test]
    fn page_size_only_accepts_advertised_options() {
        let mut pagination = Pagination::new(10);
        pagination.current_page_index = 2;
        pagination.total_count = 100;

        assert!(!pagination.set_page_size(15));
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.current_page_index, 2);

        assert!(pagination.set_page_size(25));
        assert_eq!(pagination.page_size, 25);
        assert_eq!(pagination.current_page_index, 0);

        // Re-selecting the current size is a no-op.
        assert!(!pagination.set_page_size(25));
    }
}
