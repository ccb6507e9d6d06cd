use yew::prelude::*;

use crate::models::flameshard::{
    level_for_shards, level_progress_percent, next_level, shards_to_next_level, FLAMESHARD_LEVELS,
};

#[derive(Properties, PartialEq)]
pub struct FlameShardCardProps {
    pub shards: u32,
}

#[function_component(FlameShardCard)]
pub fn flameshard_card(props: &FlameShardCardProps) -> Html {
    let level = level_for_shards(props.shards);
    let percent = level_progress_percent(props.shards);

    html! {
        <div class="flameshard-card" style={format!("border-color: {};", level.color)}>
            <div class="flameshard-header">
                <span class="flameshard-level" style={format!("color: {};", level.color)}>
                    {format!("Level {} · {}", level.level, level.name)}
                </span>
                <span class="flameshard-total">{format!("🔥 {} shards", props.shards)}</span>
            </div>
            <p class="flameshard-description">{level.description}</p>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%; background: {};", percent, level.color)}></div>
            </div>
            {
                match (next_level(level), shards_to_next_level(props.shards)) {
                    (Some(next), Some(missing)) => html! {
                        <p class="flameshard-next">{format!("{} more to reach {}", missing, next.name)}</p>
                    },
                    _ => html! {
                        <p class="flameshard-next">{"Top of the ladder. The flame is yours."}</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LevelLadderProps {
    #[prop_or_default]
    pub current_shards: Option<u32>,
}

#[function_component(LevelLadder)]
pub fn level_ladder(props: &LevelLadderProps) -> Html {
    let current = props.current_shards.map(|shards| level_for_shards(shards).level);

    html! {
        <div class="level-ladder">
            { for FLAMESHARD_LEVELS.iter().map(|level| html! {
                <div class={classes!("ladder-rung", (current == Some(level.level)).then(|| "current"))}
                    style={format!("border-left: 4px solid {};", level.color)}>
                    <div class="ladder-name">{level.name}</div>
                    <div class="ladder-range">{format!("{} shards", level.range_label())}</div>
                </div>
            }) }
        </div>
    }
}
