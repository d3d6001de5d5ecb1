//! Anime, book, and music collections.

use serde::Serialize;

/// Watch state of an anime entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    Watching,
    Completed,
    OnHold,
    PlanToWatch,
}

/// Read state of a book entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadStatus {
    ToRead,
    Reading,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Anime {
    pub title: &'static str,
    pub status: WatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub episodes: u32,
    pub watched_episodes: u32,
    pub favorite: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub status: ReadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub favorite: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Album {
    pub title: &'static str,
    pub artist: &'static str,
    pub release_year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub favorite: bool,
}

pub static ANIME: &[Anime] = &[
    Anime {
        title: "Attack on Titan",
        status: WatchStatus::Completed,
        rating: Some(5),
        episodes: 87,
        watched_episodes: 87,
        favorite: true,
    },
    Anime {
        title: "Demon Slayer",
        status: WatchStatus::Completed,
        rating: Some(4),
        episodes: 44,
        watched_episodes: 44,
        favorite: true,
    },
    Anime {
        title: "Jujutsu Kaisen",
        status: WatchStatus::Watching,
        rating: Some(4),
        episodes: 24,
        watched_episodes: 18,
        favorite: false,
    },
    Anime {
        title: "Spirited Away",
        status: WatchStatus::Completed,
        rating: Some(5),
        episodes: 1,
        watched_episodes: 1,
        favorite: true,
    },
];

pub static BOOKS: &[Book] = &[
    Book {
        title: "Project Hail Mary",
        author: "Andy Weir",
        status: ReadStatus::Completed,
        rating: Some(5),
        favorite: true,
    },
    Book {
        title: "Designing Data-Intensive Applications",
        author: "Martin Kleppmann",
        status: ReadStatus::Reading,
        rating: Some(4),
        favorite: false,
    },
    Book {
        title: "Atomic Habits",
        author: "James Clear",
        status: ReadStatus::Completed,
        rating: Some(4),
        favorite: true,
    },
    Book {
        title: "The Pragmatic Programmer",
        author: "David Thomas, Andrew Hunt",
        status: ReadStatus::ToRead,
        rating: None,
        favorite: false,
    },
];

pub static ALBUMS: &[Album] = &[
    Album {
        title: "In Rainbows",
        artist: "Radiohead",
        release_year: 2007,
        rating: Some(5),
        favorite: true,
    },
    Album {
        title: "Random Access Memories",
        artist: "Daft Punk",
        release_year: 2013,
        rating: Some(5),
        favorite: true,
    },
    Album {
        title: "Currents",
        artist: "Tame Impala",
        release_year: 2015,
        rating: Some(4),
        favorite: true,
    },
    Album {
        title: "For Emma, Forever Ago",
        artist: "Bon Iver",
        release_year: 2007,
        rating: Some(4),
        favorite: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watched_never_exceeds_episode_count() {
        assert!(ANIME.iter().all(|a| a.watched_episodes <= a.episodes));
    }

    #[test]
    fn completed_anime_fully_watched() {
        for a in ANIME.iter().filter(|a| a.status == WatchStatus::Completed) {
            assert_eq!(a.watched_episodes, a.episodes, "{}", a.title);
        }
    }

    #[test]
    fn ratings_within_scale() {
        let ok = |r: Option<u8>| r.is_none_or(|v| (1..=5).contains(&v));
        assert!(ANIME.iter().all(|a| ok(a.rating)));
        assert!(BOOKS.iter().all(|b| ok(b.rating)));
        assert!(ALBUMS.iter().all(|m| ok(m.rating)));
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&WatchStatus::PlanToWatch).unwrap();
        assert_eq!(json, "\"plan-to-watch\"");
        let json = serde_json::to_string(&ReadStatus::ToRead).unwrap();
        assert_eq!(json, "\"to-read\"");
    }

    #[test]
    fn unrated_book_serializes_without_rating() {
        let pragmatic = BOOKS.iter().find(|b| b.rating.is_none()).unwrap();
        let json = serde_json::to_string(pragmatic).unwrap();
        assert!(!json.contains("rating"));
    }
}
