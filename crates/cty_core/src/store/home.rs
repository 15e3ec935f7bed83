//! Home feed store.
//!
//! The home tab is read-only in this release: a seeded news list and a
//! notification badge count.

use crate::model::news::NewsPost;

/// Home screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeFeed {
    news: Vec<NewsPost>,
    notification_count: u32,
}

impl HomeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed seeded with the shipped sample news.
    pub fn sample() -> Self {
        let mut library = NewsPost::new(
            "New Library Hours Announced",
            "The library will now be open from 7 AM to 10 PM on weekdays.",
        );
        library.posted_label = "2 hours ago".to_string();
        library.image_url =
            "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg"
                .to_string();

        let mut midterms = NewsPost::new(
            "Midterm Examinations Schedule",
            "Check your timetable for updated examination dates.",
        );
        midterms.posted_label = "1 day ago".to_string();
        midterms.image_url =
            "https://images.pexels.com/photos/301926/pexels-photo-301926.jpeg".to_string();

        Self {
            news: vec![library, midterms],
            notification_count: 2,
        }
    }

    pub fn news(&self) -> &[NewsPost] {
        &self.news
    }

    pub fn notification_count(&self) -> u32 {
        self.notification_count
    }
}

#[cfg(test)]
mod tests {
    use super::HomeFeed;

    #[test]
    fn sample_feed_carries_seeded_news_and_badge() {
        let feed = HomeFeed::sample();
        assert_eq!(feed.news().len(), 2);
        assert_eq!(feed.news()[0].title, "New Library Hours Announced");
        assert_eq!(feed.notification_count(), 2);
    }

    #[test]
    fn new_feed_is_empty() {
        let feed = HomeFeed::new();
        assert!(feed.news().is_empty());
        assert_eq!(feed.notification_count(), 0);
    }
}
