use yew::prelude::*;

use crate::models::course::Course;

#[derive(Properties, PartialEq)]
pub struct CurriculumPreviewProps {
    pub course: Course,
}

#[function_component(CurriculumPreview)]
pub fn curriculum_preview(props: &CurriculumPreviewProps) -> Html {
    let course = &props.course;

    html! {
        <section class="curriculum" id="curriculum">
            <style>
                {r#"
                    .curriculum { padding: 4rem 1.5rem; max-width: 900px; margin: 0 auto; }
                    .curriculum h2 { text-align: center; }
                    .curriculum-lead { text-align: center; color: #bbb; margin-bottom: 2rem; }
                    .curriculum-scroll {
                        display: flex;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        margin-bottom: 1rem;
                        background: rgba(30, 30, 30, 0.7);
                        border-left: 3px solid #F4A261;
                        border-radius: 12px;
                    }
                    .curriculum-number { font-size: 2rem; color: #F4A261; font-weight: 700; min-width: 2.5rem; }
                    .curriculum-scroll h3 { margin: 0 0 0.4rem; color: #fff; }
                    .curriculum-scroll p { margin: 0; color: #ccc; }
                    .curriculum-meta { margin-top: 0.6rem; display: flex; flex-wrap: wrap; gap: 0.5rem; font-size: 0.8rem; }
                    .curriculum-meta span {
                        padding: 0.15rem 0.6rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.07);
                        color: #ddd;
                    }
                "#}
            </style>
            <h2>{"What's inside"}</h2>
            <p class="curriculum-lead">
                {format!("{} scrolls, {} FlameShards to earn. {}", course.scrolls.len(), course.total_shards(), course.subtitle)}
            </p>
            { for course.scrolls.iter().map(|scroll| html! {
                <div class="curriculum-scroll">
                    <div class="curriculum-number">{scroll.number}</div>
                    <div>
                        <h3>{&scroll.title}</h3>
                        <p>{&scroll.summary}</p>
                        <div class="curriculum-meta">
                            { for scroll.sections.iter().map(|section| html! {
                                <span>{section.kind.badge()}</span>
                            }) }
                            <span>{format!("🏆 {}: +{} shards", scroll.challenge.title, scroll.challenge.reward_shards)}</span>
                        </div>
                    </div>
                </div>
            }) }
        </section>
    }
}
