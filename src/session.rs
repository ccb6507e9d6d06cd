use crate::storage::LeadStore;

const GUEST_NAME: &str = "Seeker";

/// Who is looking at the course pages. There are no accounts: whoever last
/// signed up through the lead form on this device is the student.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub student_name: Option<String>,
}

impl Session {
    pub fn from_store(store: &dyn LeadStore) -> Self {
        match store.latest() {
            Ok(lead) => Self {
                student_name: lead.map(|lead| lead.name),
            },
            Err(e) => {
                log::warn!("Could not restore session: {}", e);
                Self::default()
            }
        }
    }

    pub fn display_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or(GUEST_NAME)
    }

    pub fn is_enrolled(&self) -> bool {
        self.student_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lead::{capture_lead, LeadForm};
    use crate::storage::MemoryLeadStore;
    use chrono::Utc;

    #[test]
    fn guest_without_leads() {
        let session = Session::from_store(&MemoryLeadStore::default());
        assert!(!session.is_enrolled());
        assert_eq!(session.display_name(), "Seeker");
    }

    #[test]
    fn latest_lead_is_the_student() {
        let store = MemoryLeadStore::default();
        for name in ["Ada", "Grace"] {
            let form = LeadForm {
                name: name.to_string(),
                email: format!("{}@example.com", name),
                phone: String::new(),
            };
            capture_lead(&store, &form, Utc::now()).unwrap();
        }

        let session = Session::from_store(&store);
        assert!(session.is_enrolled());
        assert_eq!(session.display_name(), "Grace");
    }
}
