//! Course completion certificates, rendered as a fixed-layout SVG document.

use chrono::{Local, NaiveDate};

use crate::config;
use crate::models::course::Course;
use crate::models::progress::StudentProgress;

/// Completion date as the student sees it on their own calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub student_name: String,
    pub course_title: String,
    pub instructor: Option<String>,
    pub progress: u8,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    pub fn from_progress(course: &Course, progress: &StudentProgress, student_name: &str) -> Self {
        let status = if progress.is_course_complete(course) {
            EnrollmentStatus::Completed
        } else {
            EnrollmentStatus::Active
        };

        Self {
            student_name: student_name.to_string(),
            course_title: course.title.clone(),
            instructor: course.instructor.clone(),
            progress: progress.completion_percent(course),
            status,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress == 100 && self.status == EnrollmentStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub student_name: String,
    pub course_title: String,
    pub instructor: String,
    pub completed_on: NaiveDate,
}

impl Certificate {
    /// `None` unless the enrollment is fully complete.
    pub fn assemble(enrollment: &Enrollment, completed_on: NaiveDate) -> Option<Self> {
        if !enrollment.is_complete() {
            return None;
        }

        let instructor = enrollment
            .instructor
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(config::DEFAULT_INSTRUCTOR)
            .to_string();

        Some(Self {
            student_name: enrollment.student_name.trim().to_string(),
            course_title: enrollment.course_title.clone(),
            instructor,
            completed_on,
        })
    }

    pub fn completion_date_label(&self) -> String {
        self.completed_on.format("%B %d, %Y").to_string()
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.svg",
            config::CERTIFICATE_FILE_PREFIX,
            underscore_whitespace(&self.student_name),
            underscore_whitespace(&self.course_title)
        )
    }

    pub fn render_svg(&self) -> String {
        let student = escape_xml(&self.student_name);
        let course = escape_xml(&self.course_title);
        let instructor = escape_xml(&self.instructor);
        let date = escape_xml(&self.completion_date_label());

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="1100" height="850" viewBox="0 0 1100 850">
  <rect width="1100" height="850" fill="#1A1A1A"/>
  <rect x="30" y="30" width="1040" height="790" fill="none" stroke="#F4A261" stroke-width="6"/>
  <rect x="50" y="50" width="1000" height="750" fill="none" stroke="#E76F51" stroke-width="2"/>
  <text x="550" y="170" text-anchor="middle" font-family="Georgia, serif" font-size="56" fill="#F6C177">Certificate of Completion</text>
  <text x="550" y="250" text-anchor="middle" font-family="Georgia, serif" font-size="24" fill="#DDDDDD">This certifies that</text>
  <text x="550" y="340" text-anchor="middle" font-family="Georgia, serif" font-size="52" font-style="italic" fill="#FFFFFF">{student}</text>
  <line x1="250" y1="365" x2="850" y2="365" stroke="#F4A261" stroke-width="2"/>
  <text x="550" y="430" text-anchor="middle" font-family="Georgia, serif" font-size="24" fill="#DDDDDD">has completed every scroll and challenge of</text>
  <text x="550" y="500" text-anchor="middle" font-family="Georgia, serif" font-size="40" fill="#F6C177">{course}</text>
  <text x="550" y="560" text-anchor="middle" font-family="Georgia, serif" font-size="60">🔥</text>
  <text x="280" y="690" text-anchor="middle" font-family="Georgia, serif" font-size="22" fill="#FFFFFF">{date}</text>
  <line x1="160" y1="705" x2="400" y2="705" stroke="#888888" stroke-width="1"/>
  <text x="280" y="735" text-anchor="middle" font-family="Georgia, serif" font-size="16" fill="#999999">Date of completion</text>
  <text x="820" y="690" text-anchor="middle" font-family="Georgia, serif" font-size="22" fill="#FFFFFF">{instructor}</text>
  <line x1="700" y1="705" x2="940" y2="705" stroke="#888888" stroke-width="1"/>
  <text x="820" y="735" text-anchor="middle" font-family="Georgia, serif" font-size="16" fill="#999999">Instructor</text>
</svg>
"##
        )
    }
}

fn underscore_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("_")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::flame_course;
    use crate::models::progress::SubmissionStatus;
    use chrono::Utc;

    fn enrollment(progress: u8, status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            student_name: "Ada  Lovelace".to_string(),
            course_title: "The Way of\tFlame".to_string(),
            instructor: None,
            progress,
            status,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn today_follows_local_calendar() {
        let before = Local::now().date_naive();
        let issued = today();
        let after = Local::now().date_naive();
        assert!(issued == before || issued == after);

        let certificate = Certificate::assemble(&enrollment(100, EnrollmentStatus::Completed), issued).unwrap();
        assert_eq!(certificate.completion_date_label(), issued.format("%B %d, %Y").to_string());
    }

    #[test]
    fn only_complete_enrollments_assemble() {
        assert!(Certificate::assemble(&enrollment(100, EnrollmentStatus::Completed), date()).is_some());
        assert!(Certificate::assemble(&enrollment(99, EnrollmentStatus::Completed), date()).is_none());
        assert!(Certificate::assemble(&enrollment(100, EnrollmentStatus::Active), date()).is_none());
        assert!(Certificate::assemble(&enrollment(40, EnrollmentStatus::Active), date()).is_none());
    }

    #[test]
    fn instructor_defaults_when_missing_or_blank() {
        let certificate =
            Certificate::assemble(&enrollment(100, EnrollmentStatus::Completed), date()).unwrap();
        assert_eq!(certificate.instructor, config::DEFAULT_INSTRUCTOR);

        let mut with_blank = enrollment(100, EnrollmentStatus::Completed);
        with_blank.instructor = Some("   ".to_string());
        let certificate = Certificate::assemble(&with_blank, date()).unwrap();
        assert_eq!(certificate.instructor, config::DEFAULT_INSTRUCTOR);

        let mut named = enrollment(100, EnrollmentStatus::Completed);
        named.instructor = Some("Mira Flint".to_string());
        let certificate = Certificate::assemble(&named, date()).unwrap();
        assert_eq!(certificate.instructor, "Mira Flint");
    }

    #[test]
    fn file_name_replaces_whitespace_runs() {
        let certificate =
            Certificate::assemble(&enrollment(100, EnrollmentStatus::Completed), date()).unwrap();
        assert_eq!(
            certificate.file_name(),
            "FlameShard_Certificate_Ada_Lovelace_The_Way_of_Flame.svg"
        );
    }

    #[test]
    fn svg_contains_fields_and_escapes_markup() {
        let mut enrollment = enrollment(100, EnrollmentStatus::Completed);
        enrollment.student_name = "Tom & <Jerry>".to_string();
        let certificate = Certificate::assemble(&enrollment, date()).unwrap();
        let svg = certificate.render_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!svg.contains("<Jerry>"));
        assert!(svg.contains("The Way of\tFlame"));
        assert!(svg.contains("March 07, 2026"));
        assert!(svg.contains(config::DEFAULT_INSTRUCTOR));
    }

    #[test]
    fn rendering_is_deterministic() {
        let certificate =
            Certificate::assemble(&enrollment(100, EnrollmentStatus::Completed), date()).unwrap();
        assert_eq!(certificate.render_svg(), certificate.render_svg());
    }

    #[test]
    fn enrollment_follows_progress() {
        let course = flame_course();
        let mut progress = StudentProgress::new(&course);

        let partial = Enrollment::from_progress(&course, &progress, "Ada");
        assert_eq!(partial.status, EnrollmentStatus::Active);
        assert_eq!(partial.progress, 0);
        assert!(!partial.is_complete());

        for scroll in &course.scrolls {
            let id = progress
                .submit(scroll.id, &scroll.challenge, "done", Utc::now())
                .map(|s| s.id.clone())
                .unwrap();
            progress
                .review(&course, &id, SubmissionStatus::Approved, None)
                .unwrap();
        }

        let done = Enrollment::from_progress(&course, &progress, "Ada");
        assert!(done.is_complete());
        assert_eq!(done.course_title, course.title);
        assert_eq!(done.instructor, course.instructor);
    }
}
