use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{flame_course, FAQ};
use crate::components::curriculum_preview::CurriculumPreview;
use crate::components::faq_item::FaqItem;
use crate::components::flameshard_card::LevelLadder;
use crate::components::hero_animation::HeroAnimation;
use crate::components::lead_form::LeadCaptureForm;
use crate::components::testimonials::Testimonials;
use crate::components::urgency_banner::UrgencyBanner;
use crate::models::lead::LeadRecord;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let course = use_memo(|_| flame_course(), ());
    let navigator = use_navigator();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_captured = Callback::from(move |lead: LeadRecord| {
        log::debug!("Lead {} captured, opening the course", lead.id);
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Course);
        }
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page { color: #fff; }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 1.5rem 3rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 70%, rgba(231, 111, 81, 0.35), rgba(26, 26, 26, 1) 65%);
                        z-index: -1;
                    }
                    .hero-content { max-width: 760px; }
                    .hero-subtitle { color: #ccc; font-size: 1.2rem; line-height: 1.6; margin: 1.5rem 0 2rem; }
                    .hero-cta-group { display: flex; gap: 1.5rem; justify-content: center; align-items: center; flex-wrap: wrap; }
                    .hero-cta {
                        padding: 1rem 2.2rem;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #E76F51, #F4A261);
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .faq-link { color: #F6C177; }
                    .ladder-section, .faq-section, .enroll-section { padding: 4rem 1.5rem; max-width: 900px; margin: 0 auto; text-align: center; }
                    .level-ladder { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; margin-top: 1.5rem; }
                    .ladder-rung { padding: 0.8rem 1.2rem; background: rgba(30, 30, 30, 0.7); border-radius: 8px; text-align: left; min-width: 120px; }
                    .ladder-rung.current { box-shadow: 0 0 0 2px #F4A261; }
                    .ladder-range { color: #999; font-size: 0.85rem; }
                    .faq-item { text-align: left; border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        padding: 1.2rem 0;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .faq-answer { color: #ccc; padding-bottom: 1rem; }
                    .enroll-note { margin-top: 1.5rem; color: #aaa; }
                    .footer { text-align: center; color: #777; padding: 2rem; }
                "#}
            </style>
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <HeroAnimation />
                    <p class="hero-subtitle">{&course.description}</p>
                    <div class="hero-cta-group">
                        <a href="#enroll" class="hero-cta">{"Start the journey"}</a>
                        <a href="#curriculum" class="faq-link">{"See the scrolls"}</a>
                    </div>
                </div>
            </header>

            <UrgencyBanner />

            <CurriculumPreview course={(*course).clone()} />

            <section class="ladder-section">
                <h2>{"Climb the FlameShard ladder"}</h2>
                <p>{"Every approved challenge earns shards. Shards raise your level."}</p>
                <LevelLadder />
            </section>

            <Testimonials />

            <section class="faq-section">
                <h2>{"Questions"}</h2>
                { for FAQ.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question}>
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </section>

            <section class="enroll-section" id="enroll">
                <LeadCaptureForm on_captured={on_captured} />
                <p class="enroll-note">
                    {"Already signed up? "}
                    <Link<Route> to={Route::Course}>{"Go to your course"}</Link<Route>>
                </p>
            </section>

            <footer class="footer">
                <p>{"© FlameShard Academy"}</p>
            </footer>
        </div>
    }
}
