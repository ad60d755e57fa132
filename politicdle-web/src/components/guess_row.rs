//! One scored guess: name, distance, direction arrow, proximity.

use politicdle_game::{CompassDirection, DistanceUnit, Guess, format_distance, proximity_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuessRowProps {
    pub guess: Guess,
    pub unit: DistanceUnit,
}

#[function_component(GuessRow)]
pub fn guess_row(props: &GuessRowProps) -> Html {
    let direction = props
        .guess
        .direction
        .map_or("🎉", CompassDirection::arrow);
    html! {
        <div class="guess-row">
            <span class="guess-name">{ props.guess.name.to_uppercase() }</span>
            <span class="guess-distance">{ format_distance(props.guess.distance, props.unit) }</span>
            <span class="guess-direction">{ direction }</span>
            <span class="guess-proximity">{ format!("{}%", proximity_percent(props.guess.distance)) }</span>
        </div>
    }
}
