use serde::{Deserialize, Serialize};

pub type ScrollId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFormat {
    Text,
    Code,
    Link,
}

impl SubmissionFormat {
    pub fn placeholder(&self) -> &'static str {
        match self {
            SubmissionFormat::Text => "Write your reflection here...",
            SubmissionFormat::Code => "Paste your code here...",
            SubmissionFormat::Link => "https://",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionFormat::Text => "Written response",
            SubmissionFormat::Code => "Code",
            SubmissionFormat::Link => "Link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Code { language: String },
    Ritual,
    Interactive,
}

impl SectionKind {
    pub fn badge(&self) -> &'static str {
        match self {
            SectionKind::Text => "📜 Reading",
            SectionKind::Code { .. } => "💻 Code",
            SectionKind::Ritual => "🕯️ Ritual",
            SectionKind::Interactive => "✋ Interactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub required_fields: Vec<String>,
    pub reward_shards: u32,
    pub submission_format: SubmissionFormat,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scroll {
    pub id: ScrollId,
    pub number: u32,
    pub title: String,
    pub summary: String,
    pub sections: Vec<Section>,
    pub challenge: Challenge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub instructor: Option<String>,
    pub scrolls: Vec<Scroll>,
}

impl Course {
    pub fn scroll(&self, id: ScrollId) -> Option<&Scroll> {
        self.scrolls.iter().find(|scroll| scroll.id == id)
    }

    /// Scroll preceding `id` in course order.
    pub fn previous_scroll(&self, id: ScrollId) -> Option<&Scroll> {
        let position = self.scrolls.iter().position(|scroll| scroll.id == id)?;
        position.checked_sub(1).and_then(|prev| self.scrolls.get(prev))
    }

    pub fn next_scroll(&self, id: ScrollId) -> Option<&Scroll> {
        let position = self.scrolls.iter().position(|scroll| scroll.id == id)?;
        self.scrolls.get(position + 1)
    }

    pub fn first_scroll_id(&self) -> Option<ScrollId> {
        self.scrolls.first().map(|scroll| scroll.id)
    }

    pub fn total_shards(&self) -> u32 {
        self.scrolls
            .iter()
            .map(|scroll| scroll.challenge.reward_shards)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::flame_course;

    #[test]
    fn scroll_navigation() {
        let course = flame_course();
        let first = course.first_scroll_id().unwrap();
        assert!(course.previous_scroll(first).is_none());

        let second = course.next_scroll(first).unwrap();
        assert_eq!(course.previous_scroll(second.id).map(|s| s.id), Some(first));

        let last = course.scrolls.last().unwrap();
        assert!(course.next_scroll(last.id).is_none());
    }

    #[test]
    fn scroll_lookup_and_rewards() {
        let course = flame_course();
        assert_eq!(course.scroll(3).map(|s| s.number), Some(3));
        assert!(course.scroll(42).is_none());
        assert_eq!(course.total_shards(), 1_000);
    }

    #[test]
    fn every_scroll_has_sections() {
        let course = flame_course();
        assert!(!course.scrolls.is_empty());
        for scroll in &course.scrolls {
            assert!(!scroll.sections.is_empty(), "scroll {} is empty", scroll.id);
            assert!(scroll.challenge.reward_shards > 0);
        }
    }
}
