//! Prompt generation from the current form state
//!
//! A generation produces two renderings of the same snapshot: the JSON payload
//! and a natural-language summary prompt built from per-topic focus
//! descriptions.

use crate::constants::{DEFAULT_LOCATION, HIGH_FOCUS_THRESHOLD, RATING_MAX};
use crate::form::FormState;
use crate::snapshot::{PromptSnapshot, SnapshotError};
use chrono::{DateTime, Utc};

/// What to look for in a topic at high and low weight
pub struct TopicFocus {
    pub topic: &'static str,
    pub high: &'static str,
    pub low: &'static str,
}

pub static TOPIC_FOCUS: [TopicFocus; 9] = [
    TopicFocus {
        topic: "Technology",
        high: "major and minor developments, innovations, product releases, and tech trends",
        low: "only groundbreaking news or significant shifts in the tech landscape",
    },
    TopicFocus {
        topic: "Space",
        high: "all space-related activities including launches, discoveries, and ongoing missions",
        low: "significant events like successful missions or major astronomical discoveries",
    },
    TopicFocus {
        topic: "AI",
        high: "AI research, new AI applications, ethical debates, and policy changes",
        low: "pivotal AI advancements or regulatory news with wide impact",
    },
    TopicFocus {
        topic: "Science",
        high: "broad range of scientific news from various fields",
        low: "breakthroughs or findings that could shift scientific paradigms",
    },
    TopicFocus {
        topic: "Geopolitics",
        high: "international relations, policy changes, conflicts, and diplomatic events",
        low: "events that significantly alter international power dynamics or major policy shifts",
    },
    TopicFocus {
        topic: "Business",
        high: "market trends, corporate news, economic developments, and industry analysis",
        low: "major market shifts or significant corporate developments",
    },
    TopicFocus {
        topic: "Entrepreneurship",
        high: "startup news, funding rounds, entrepreneurial success stories, and business trends",
        low: "most impactful entrepreneurial activities or major business news",
    },
    TopicFocus {
        topic: "Sustainability",
        high: "environmental initiatives, clean energy, conservation efforts, and climate action",
        low: "major environmental breakthroughs or significant climate policy changes",
    },
    TopicFocus {
        topic: "UNSDG",
        high: "progress on UN Sustainable Development Goals, initiatives, and global development news",
        low: "significant milestones or major policy changes related to SDGs",
    },
];

const PROMPT_FOOTER: &str = "\nPlease structure the summary in bullet points, providing more depth and \
breadth for higher-weighted topics and limiting to the most critical news for \
lower-weighted ones.";

pub fn topic_focus(topic: &str) -> Option<&'static TopicFocus> {
    TOPIC_FOCUS.iter().find(|f| f.topic == topic)
}

/// Map a 0-10 weight onto 0.0-1.0, clamping anything outside
pub fn normalize_weight(weight: f64) -> f64 {
    (weight / RATING_MAX as f64).clamp(0.0, 1.0)
}

/// Focus description for a topic at the given weight, if the topic is known
pub fn focus_for(topic: &str, weight: u8) -> Option<&'static str> {
    let focus = topic_focus(topic)?;
    if normalize_weight(weight as f64) > HIGH_FOCUS_THRESHOLD {
        Some(focus.high)
    } else {
        Some(focus.low)
    }
}

/// Render a snapshot as a natural-language summarization prompt
pub fn build_summary_prompt(snapshot: &PromptSnapshot) -> String {
    let location = match snapshot.location.trim() {
        "" => DEFAULT_LOCATION,
        trimmed => trimmed,
    };

    let mut parts = vec![format!(
        "Please summarize today's news from X on the following topics with the specified weights, \
         focusing on how each relates to {}:\n\n",
        location
    )];

    for (topic, weight) in snapshot.ratings.iter() {
        if let Some(description) = focus_for(topic, weight) {
            parts.push(format!(
                "{} (Weight: {}/10):\n- Focus on {}",
                topic, weight, description
            ));
        }
    }

    parts.push(PROMPT_FOOTER.to_string());
    parts.join("\n")
}

/// Output of one "Generate Prompt" click
#[derive(Debug, Clone)]
pub struct GeneratedPrompt {
    pub snapshot: PromptSnapshot,
    pub json: String,
    pub summary: String,
}

/// Build the snapshot for the current form. Callers gate this on `is_ready`.
pub fn generate(form: &FormState, at: DateTime<Utc>) -> Result<GeneratedPrompt, SnapshotError> {
    let snapshot = PromptSnapshot::new(form.ratings().clone(), form.location(), at);
    let json = snapshot.to_pretty_json()?;
    let summary = build_summary_prompt(&snapshot);
    Ok(GeneratedPrompt {
        snapshot,
        json,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOPICS;
    use chrono::TimeZone;

    const EXAMPLE: [(&str, u8); 9] = [
        ("Technology", 5),
        ("Space", 3),
        ("AI", 10),
        ("Sustainability", 1),
        ("UNSDG", 7),
        ("Geopolitics", 2),
        ("Science", 9),
        ("Business", 4),
        ("Entrepreneurship", 6),
    ];

    fn example_form() -> FormState {
        let mut form = FormState::new();
        for (topic, value) in EXAMPLE {
            form.set_rating(topic, value);
        }
        form.set_location("Paris");
        form
    }

    #[test]
    fn every_topic_has_focus_descriptions() {
        for topic in TOPICS {
            assert!(topic_focus(topic).is_some(), "missing focus for {}", topic);
        }
    }

    #[test]
    fn normalize_clamps() {
        assert_eq!(normalize_weight(5.0), 0.5);
        assert_eq!(normalize_weight(-3.0), 0.0);
        assert_eq!(normalize_weight(25.0), 1.0);
    }

    #[test]
    fn high_focus_starts_above_seven() {
        let ai = topic_focus("AI").unwrap();
        for w in 1..=7 {
            assert_eq!(focus_for("AI", w), Some(ai.low));
        }
        for w in 8..=10 {
            assert_eq!(focus_for("AI", w), Some(ai.high));
        }
        assert_eq!(focus_for("Cooking", 10), None);
    }

    #[test]
    fn example_payload_parses_back() {
        let form = example_form();
        assert!(form.is_ready());

        let out = generate(&form, Utc::now()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out.json).unwrap();

        let ratings = parsed["ratings"].as_object().unwrap();
        assert_eq!(ratings.len(), 9);
        for (topic, value) in EXAMPLE {
            assert_eq!(ratings[topic], serde_json::json!(value));
        }
        assert_eq!(parsed["location"], "Paris");
        let ts = parsed["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn payload_keys_are_ordered() {
        let out = generate(&example_form(), Utc::now()).unwrap();
        let r = out.json.find("\"ratings\"").unwrap();
        let l = out.json.find("\"location\"").unwrap();
        let t = out.json.find("\"timestamp\"").unwrap();
        assert!(r < l && l < t);

        let positions: Vec<_> = EXAMPLE
            .iter()
            .map(|(topic, _)| out.json.find(&format!("\"{}\"", topic)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn raw_location_is_preserved() {
        let mut form = example_form();
        form.set_location("  Paris  ");
        let out = generate(&form, Utc::now()).unwrap();
        assert_eq!(out.snapshot.location, "  Paris  ");
        assert!(out.summary.contains("relates to Paris:"));
    }

    #[test]
    fn summary_prompt_layout() {
        let mut form = FormState::new();
        form.set_rating("AI", 9);
        form.set_rating("Space", 2);
        form.set_location("Oslo");
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
        let out = generate(&form, at).unwrap();

        let expected = "Please summarize today's news from X on the following topics with the specified weights, focusing on how each relates to Oslo:\n\n\n\
AI (Weight: 9/10):\n- Focus on AI research, new AI applications, ethical debates, and policy changes\n\
Space (Weight: 2/10):\n- Focus on significant events like successful missions or major astronomical discoveries\n\
\nPlease structure the summary in bullet points, providing more depth and breadth for higher-weighted topics and limiting to the most critical news for lower-weighted ones.";
        assert_eq!(out.summary, expected);
    }

    #[test]
    fn summary_defaults_location() {
        let snapshot = PromptSnapshot::new(Default::default(), "   ", Utc::now());
        assert!(build_summary_prompt(&snapshot).contains("relates to India:"));
    }

    #[test]
    fn summary_skips_unknown_topics() {
        let mut ratings = crate::types::RatingMap::new();
        ratings.set("Cooking", 10);
        ratings.set("Science", 10);
        let snapshot = PromptSnapshot::new(ratings, "Lima", Utc::now());
        let summary = build_summary_prompt(&snapshot);
        assert!(!summary.contains("Cooking"));
        assert!(summary.contains("Science (Weight: 10/10)"));
    }

    #[test]
    fn generating_twice_replaces_output() {
        let form = example_form();
        let first = generate(&form, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()).unwrap();
        let second = generate(&form, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 1).unwrap()).unwrap();
        assert_ne!(first.json, second.json);
        assert_eq!(first.snapshot.ratings, second.snapshot.ratings);
    }
}
