use gloo_timers::callback::Timeout;
use yew::prelude::*;

const HEADLINES: &[&str] = &[
    "Light the first spark.",
    "Keep the ember glowing.",
    "Shape the flame into craft.",
    "Walk out of the forge finished.",
];

const HOLD_MS: u32 = 2_600;
const FADE_MS: u32 = 450;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeroStage {
    Showing(usize),
    Fading(usize),
}

impl HeroStage {
    /// Stage that follows this one, and how long to stay on this one first.
    pub fn advance(self, headline_count: usize) -> (HeroStage, u32) {
        match self {
            HeroStage::Showing(i) => (HeroStage::Fading(i), HOLD_MS),
            HeroStage::Fading(i) => (HeroStage::Showing((i + 1) % headline_count.max(1)), FADE_MS),
        }
    }

    fn headline(self) -> usize {
        match self {
            HeroStage::Showing(i) | HeroStage::Fading(i) => i,
        }
    }
}

#[function_component(HeroAnimation)]
pub fn hero_animation() -> Html {
    let stage = use_state(|| HeroStage::Showing(0));

    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |current: &HeroStage| {
                let (next, delay) = current.advance(HEADLINES.len());
                let timeout = Timeout::new(delay, move || stage_setter.set(next));
                move || drop(timeout)
            },
            *stage,
        );
    }

    let headline = HEADLINES[stage.headline() % HEADLINES.len()];
    let class = match *stage {
        HeroStage::Showing(_) => "hero-headline fade-in",
        HeroStage::Fading(_) => "hero-headline fade-out",
    };

    html! {
        <div class="hero-animation">
            <style>
                {r#"
                    .hero-animation {
                        min-height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero-headline {
                        font-size: 3rem;
                        font-weight: 700;
                        background: linear-gradient(45deg, #F6C177, #E76F51);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        transition: opacity 0.45s ease-in-out;
                    }
                    .hero-headline.fade-in {
                        animation: heroIn 0.6s ease-out forwards;
                    }
                    .hero-headline.fade-out {
                        opacity: 0;
                    }
                    .hero-dots {
                        display: flex;
                        gap: 0.5rem;
                        justify-content: center;
                        margin-top: 1rem;
                    }
                    .hero-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.25);
                    }
                    .hero-dot.active {
                        background: #F4A261;
                    }
                    @keyframes heroIn {
                        from { transform: translateY(12px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .hero-headline { font-size: 2rem; }
                    }
                "#}
            </style>
            <div>
                <h1 key={headline} class={class}>{headline}</h1>
                <div class="hero-dots">
                    { for (0..HEADLINES.len()).map(|i| html! {
                        <span class={classes!("hero-dot", (i == stage.headline()).then(|| "active"))}></span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_cycle_through_headlines() {
        let mut stage = HeroStage::Showing(0);
        let mut seen = Vec::new();
        for _ in 0..(HEADLINES.len() * 2) {
            if let HeroStage::Showing(i) = stage {
                seen.push(i);
            }
            stage = stage.advance(HEADLINES.len()).0;
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(stage, HeroStage::Showing(0));
    }

    #[test]
    fn hold_is_longer_than_fade() {
        let (_, hold) = HeroStage::Showing(1).advance(4);
        let (next, fade) = HeroStage::Fading(1).advance(4);
        assert!(hold > fade);
        assert_eq!(next, HeroStage::Showing(2));
    }
}
