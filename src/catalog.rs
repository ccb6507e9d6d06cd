//! Static site content: the course itself, testimonials and FAQ copy.

use crate::models::course::{Challenge, Course, Scroll, Section, SectionKind, SubmissionFormat};

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub level_reached: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jonna K.",
        role: "Backend developer",
        quote: "The daily rituals sounded silly until week two. Now I can't start work without them.",
        level_reached: "Blaze",
    },
    Testimonial {
        name: "Marcus T.",
        role: "Career switcher",
        quote: "Every challenge came back with real feedback. The revision loop is where I actually learned.",
        level_reached: "Kindling",
    },
    Testimonial {
        name: "Priya S.",
        role: "Team lead",
        quote: "I bought it for myself and then enrolled my whole team. The certificate is on our wall.",
        level_reached: "Phoenix",
    },
];

pub const FAQ: &[(&str, &str)] = &[
    (
        "How long does the course take?",
        "Most students finish all four scrolls in three to five weeks at about thirty minutes a day.",
    ),
    (
        "What are FlameShards?",
        "Points you earn when a mentor approves a challenge. They move you up the level ladder from Spark to Phoenix.",
    ),
    (
        "What happens if my challenge needs revision?",
        "You get written feedback and can submit again. Approved and rejected submissions are final.",
    ),
    (
        "Do I get a certificate?",
        "Yes. Once every scroll is complete you can download your certificate from the course page.",
    ),
];

fn section(id: &str, title: &str, kind: SectionKind, body: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        body: body.to_string(),
    }
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn flame_course() -> Course {
    Course {
        id: "flameshard-foundations".to_string(),
        title: "FlameShard Foundations".to_string(),
        subtitle: "Four scrolls from first spark to finished project".to_string(),
        description: "A guided course on building focus and shipping real work. Each scroll pairs short readings and code with a daily ritual, and ends in a challenge reviewed by a mentor.".to_string(),
        instructor: Some("Mira Flint".to_string()),
        scrolls: vec![
            Scroll {
                id: 1,
                number: 1,
                title: "The First Spark".to_string(),
                summary: "Set your intention and prepare your workspace.".to_string(),
                sections: vec![
                    section("1-1", "Why most attempts burn out", SectionKind::Text,
                        "Motivation is a match, not a fire. This scroll is about building something that keeps burning after the first rush fades."),
                    section("1-2", "The morning ritual", SectionKind::Ritual,
                        "Before opening any app, write down the one thing you will build today. Keep the list; you will need it in Scroll 4."),
                    section("1-3", "Your forge", SectionKind::Interactive,
                        "Set up a project folder, a notes file and a timer. Take a screenshot of your setup."),
                ],
                challenge: Challenge {
                    id: "spark-intention".to_string(),
                    title: "Declare your intention".to_string(),
                    prompt: "Describe what you want to have built by the end of this course and why it matters to you.".to_string(),
                    required_fields: fields(&["Goal", "Why it matters", "First step"]),
                    reward_shards: 100,
                    submission_format: SubmissionFormat::Text,
                    max_length: Some(1_500),
                },
            },
            Scroll {
                id: 2,
                number: 2,
                title: "Kindling Habits".to_string(),
                summary: "Turn one good day into a streak.".to_string(),
                sections: vec![
                    section("2-1", "Streaks over sprints", SectionKind::Text,
                        "A five day streak of thirty minutes beats one heroic weekend. We will track both and compare."),
                    section("2-2", "Evening reflection", SectionKind::Ritual,
                        "At the end of each day, write three lines: what you did, what blocked you, what you will try tomorrow."),
                ],
                challenge: Challenge {
                    id: "kindling-log".to_string(),
                    title: "Five day ritual log".to_string(),
                    prompt: "Share five days of evening reflections and what changed between day one and day five.".to_string(),
                    required_fields: fields(&["Five daily entries", "What changed"]),
                    reward_shards: 150,
                    submission_format: SubmissionFormat::Text,
                    max_length: Some(3_000),
                },
            },
            Scroll {
                id: 3,
                number: 3,
                title: "Shaping the Flame".to_string(),
                summary: "Automate the boring parts of your practice.".to_string(),
                sections: vec![
                    section("3-1", "Small tools, big leverage", SectionKind::Text,
                        "The best tool is the one you write in an afternoon and use every day."),
                    section("3-2", "A streak counter", SectionKind::Code { language: "rust".to_string() },
                        "fn streak(days: &[bool]) -> usize {\n    days.iter().rev().take_while(|done| **done).count()\n}"),
                    section("3-3", "Extend it", SectionKind::Interactive,
                        "Change the counter so it also reports your longest streak ever."),
                ],
                challenge: Challenge {
                    id: "shaping-tool".to_string(),
                    title: "Build your streak tool".to_string(),
                    prompt: "Submit the code of your streak tool, including the longest-streak extension.".to_string(),
                    required_fields: fields(&["Source code", "Example output"]),
                    reward_shards: 250,
                    submission_format: SubmissionFormat::Code,
                    max_length: Some(6_000),
                },
            },
            Scroll {
                id: 4,
                number: 4,
                title: "The Forge Trial".to_string(),
                summary: "Ship the project you declared in Scroll 1.".to_string(),
                sections: vec![
                    section("4-1", "Finishing is a skill", SectionKind::Text,
                        "Cut scope, not quality. Pick the smallest version of your goal that you would still be proud of."),
                    section("4-2", "The closing ritual", SectionKind::Ritual,
                        "Read your Scroll 1 intention out loud. Write down what you kept, what you cut, and what you learned."),
                ],
                challenge: Challenge {
                    id: "forge-trial".to_string(),
                    title: "Show your work".to_string(),
                    prompt: "Link to your finished project: a repository, a demo or a write-up.".to_string(),
                    required_fields: fields(&["Public link"]),
                    reward_shards: 500,
                    submission_format: SubmissionFormat::Link,
                    max_length: Some(300),
                },
            },
        ],
    }
}
