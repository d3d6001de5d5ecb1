//! Life goals and their gold-coin rewards.

use serde::Serialize;

/// How urgently a goal is being pursued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Actively worked on.
    High,
    /// On the list, not the current focus.
    Medium,
}

/// A life goal / achievement entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Goal {
    pub title: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<&'static str>,
    /// Gold coins awarded on completion.
    pub coin_reward: u32,
    pub priority: Priority,
    pub tags: &'static [&'static str],
}

/// The full goals table, completed and open alike.
pub static LIFE_GOALS: &[Goal] = &[
    Goal {
        title: "Complete First 5.12a Climbing Route",
        completed: false,
        completed_date: None,
        coin_reward: 10,
        priority: Priority::High,
        tags: &["rock-climbing", "fitness", "challenge", "skill-development"],
    },
    Goal {
        title: "Read 50 Books This Year",
        completed: true,
        completed_date: Some("2023-12-28"),
        coin_reward: 5,
        priority: Priority::Medium,
        tags: &["reading", "learning", "personal-growth"],
    },
    Goal {
        title: "Master Class IV Whitewater Kayaking",
        completed: false,
        completed_date: None,
        coin_reward: 15,
        priority: Priority::High,
        tags: &["kayaking", "whitewater", "adrenaline", "skill-development"],
    },
    Goal {
        title: "Achieve 2000 Chess Rating",
        completed: true,
        completed_date: Some("2024-02-15"),
        coin_reward: 8,
        priority: Priority::Medium,
        tags: &["chess", "strategy", "mental-training", "competition"],
    },
    Goal {
        title: "Hike the John Muir Trail",
        completed: false,
        completed_date: None,
        coin_reward: 20,
        priority: Priority::High,
        tags: &["hiking", "backpacking", "endurance", "nature"],
    },
    Goal {
        title: "Reach N3 Level Japanese",
        completed: false,
        completed_date: None,
        coin_reward: 12,
        priority: Priority::Medium,
        tags: &["language", "japanese", "culture", "anime"],
    },
    Goal {
        title: "Launch a Profitable SaaS Product",
        completed: false,
        completed_date: None,
        coin_reward: 25,
        priority: Priority::High,
        tags: &["entrepreneurship", "software", "business", "passive-income"],
    },
    Goal {
        title: "Complete an Ironman Triathlon",
        completed: false,
        completed_date: None,
        coin_reward: 30,
        priority: Priority::Medium,
        tags: &["triathlon", "endurance", "fitness", "challenge"],
    },
];
