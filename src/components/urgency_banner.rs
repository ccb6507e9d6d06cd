use chrono::{DateTime, Utc};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time left until `deadline`, `None` once it has passed.
    pub fn until(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Option<Self> {
        let left = (deadline - now).num_seconds();
        if left <= 0 {
            return None;
        }
        Some(Self {
            days: left / 86_400,
            hours: (left % 86_400) / 3_600,
            minutes: (left % 3_600) / 60,
            seconds: left % 60,
        })
    }

    pub fn label(&self) -> String {
        if self.days > 0 {
            format!("{}d {:02}h {:02}m {:02}s", self.days, self.hours, self.minutes, self.seconds)
        } else {
            format!("{:02}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
        }
    }
}

pub fn seats_left(total: u32, taken: u32) -> u32 {
    total.saturating_sub(taken)
}

fn enrollment_deadline() -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(config::ENROLLMENT_CLOSES_AT) {
        Ok(deadline) => Some(deadline.with_timezone(&Utc)),
        Err(e) => {
            log::error!("Bad enrollment deadline {}: {}", config::ENROLLMENT_CLOSES_AT, e);
            None
        }
    }
}

#[function_component(UrgencyBanner)]
pub fn urgency_banner() -> Html {
    let now = use_state(Utc::now);
    let deadline = use_memo(|_| enrollment_deadline(), ());

    {
        let now = now.clone();
        use_interval(move || now.set(Utc::now()), 1_000);
    }

    let Some(countdown) = (*deadline).and_then(|deadline| Countdown::until(*now, deadline)) else {
        return html! {};
    };

    let seats = seats_left(config::COHORT_SEATS_TOTAL, config::COHORT_SEATS_TAKEN);

    html! {
        <div class="urgency-banner">
            <style>
                {r#"
                    .urgency-banner {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem 2rem;
                        justify-content: center;
                        align-items: center;
                        padding: 0.9rem 1.5rem;
                        background: linear-gradient(90deg, rgba(231, 111, 81, 0.2), rgba(244, 162, 97, 0.2));
                        border-top: 1px solid rgba(244, 162, 97, 0.3);
                        border-bottom: 1px solid rgba(244, 162, 97, 0.3);
                        color: #fff;
                    }
                    .urgency-countdown {
                        font-family: monospace;
                        font-size: 1.2rem;
                        color: #F6C177;
                    }
                    .urgency-seats {
                        color: #E76F51;
                        font-weight: 600;
                    }
                "#}
            </style>
            <span>{"🔥 Enrollment for the next cohort closes in"}</span>
            <span class="urgency-countdown">{countdown.label()}</span>
            {
                if seats > 0 {
                    html! { <span class="urgency-seats">{format!("Only {} seats left", seats)}</span> }
                } else {
                    html! { <span class="urgency-seats">{"Cohort full, join the waitlist"}</span> }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn countdown_splits_units() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let deadline = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);

        let countdown = Countdown::until(now, deadline).unwrap();
        assert_eq!(
            countdown,
            Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
        assert_eq!(countdown.label(), "2d 03h 04m 05s");
    }

    #[test]
    fn under_a_day_drops_days() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let countdown = Countdown::until(now, now + Duration::seconds(61)).unwrap();
        assert_eq!(countdown.label(), "00h 01m 01s");
    }

    #[test]
    fn no_countdown_after_deadline() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(Countdown::until(now, now).is_none());
        assert!(Countdown::until(now, now - Duration::seconds(1)).is_none());
    }

    #[test]
    fn seats_never_underflow() {
        assert_eq!(seats_left(40, 31), 9);
        assert_eq!(seats_left(40, 45), 0);
    }

    #[test]
    fn configured_deadline_parses() {
        assert!(enrollment_deadline().is_some());
    }
}
