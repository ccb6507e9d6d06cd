use yew::prelude::*;

use crate::catalog::TESTIMONIALS;
use crate::models::flameshard::FLAMESHARD_LEVELS;

fn level_color(name: &str) -> &'static str {
    FLAMESHARD_LEVELS
        .iter()
        .find(|level| level.name == name)
        .map(|level| level.color)
        .unwrap_or("#F4A261")
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials" id="testimonials">
            <style>
                {r#"
                    .testimonials { padding: 4rem 1.5rem; text-align: center; }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 2rem auto 0;
                    }
                    .testimonial-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: left;
                    }
                    .testimonial-quote { color: #ddd; font-style: italic; line-height: 1.6; }
                    .testimonial-author { margin-top: 1.25rem; color: #fff; font-weight: 600; }
                    .testimonial-role { color: #999; font-size: 0.9rem; }
                    .testimonial-level {
                        display: inline-block;
                        margin-top: 0.75rem;
                        padding: 0.2rem 0.7rem;
                        border-radius: 999px;
                        font-size: 0.8rem;
                        color: #1A1A1A;
                    }
                "#}
            </style>
            <h2>{"Forged in the fire"}</h2>
            <p>{"What past students say about the course."}</p>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div class="testimonial-card">
                        <p class="testimonial-quote">{format!("\u{201C}{}\u{201D}", t.quote)}</p>
                        <div class="testimonial-author">{t.name}</div>
                        <div class="testimonial-role">{t.role}</div>
                        <span class="testimonial-level" style={format!("background: {};", level_color(t.level_reached))}>
                            {format!("Reached {}", t.level_reached)}
                        </span>
                    </div>
                }) }
            </div>
        </section>
    }
}
