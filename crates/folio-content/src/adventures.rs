//! Outdoor adventure log.

use serde::Serialize;

/// A logged adventure, newest first.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Adventure {
    pub title: &'static str,
    /// ISO date the adventure happened.
    pub date: &'static str,
    pub activity: &'static str,
}

pub static ADVENTURES: &[Adventure] = &[
    Adventure {
        title: "Boulder Canyon: First 5.11c Send",
        date: "2024-03-15",
        activity: "rock-climbing",
    },
    Adventure {
        title: "Arkansas River: Numbers Section",
        date: "2024-02-28",
        activity: "kayaking",
    },
    Adventure {
        title: "Quandary Peak Winter Ascent",
        date: "2024-01-20",
        activity: "hiking",
    },
    Adventure {
        title: "Eldorado Canyon: Bastille Crack",
        date: "2023-12-10",
        activity: "rock-climbing",
    },
    Adventure {
        title: "Clear Creek: Technical Practice",
        date: "2023-11-25",
        activity: "kayaking",
    },
    Adventure {
        title: "Mount Sanitas Dawn Trail Run",
        date: "2023-11-15",
        activity: "hiking",
    },
];
