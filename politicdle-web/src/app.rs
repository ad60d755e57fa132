//! Application shell: session bootstrap and the minimal game view.

use politicdle_game::{GameSession, GameStatus, SettingsData, current_day_string, share_text};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{GuessRow, ResultsTable};
use crate::game::create_web_game_engine;
use crate::settings::{load_settings, save_settings};

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);
    let session = use_state(|| None::<GameSession>);
    let notice = use_state(String::new);
    let input_ref = use_node_ref();

    let day_string = current_day_string(settings.shift_day_count);

    {
        // Resynchronize on every day-string change: date rollover, 3-hour
        // bucket rollover, or a user day shift.
        let session = session.clone();
        let notice = notice.clone();
        use_effect_with(day_string.clone(), move |day: &String| {
            match create_web_game_engine().start_session(day) {
                Ok(next) => {
                    session.set(Some(next));
                    notice.set(String::new());
                }
                Err(err) => log::error!("failed to start session for {day}: {err}"),
            }
        });
    }

    let on_submit = {
        let session = session.clone();
        let notice = notice.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(current) = (*session).clone() else {
                return;
            };
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let mut next = current;
            match create_web_game_engine().submit_guess(&mut next, &input.value()) {
                Ok(_) => {
                    input.set_value("");
                    notice.set(String::new());
                }
                Err(err) => notice.set(err.to_string()),
            }
            session.set(Some(next));
        })
    };

    let shift_day = {
        let settings = settings.clone();
        Callback::from(move |delta: i64| {
            let mut next = *settings;
            next.shift_day(delta);
            save_settings(&next);
            settings.set(next);
        })
    };

    let Some(current) = (*session).clone() else {
        return html! { <main class="app">{ "Chargement…" }</main> };
    };

    let status = current.status();
    let unit = settings.distance_unit;

    html! {
        <main class="app">
            <header>
                <h1>{ "Politicdle" }</h1>
            </header>
            <ResultsTable title="Premier tour" results={current.city().round_one.clone()} />
            <ResultsTable title="Deuxième tour" results={current.city().round_two.clone()} />
            { day_shift_controls(&settings, &shift_day) }
            <section class="guesses">
                { for current.guesses().iter().map(|guess| html! {
                    <GuessRow guess={guess.clone()} {unit} />
                }) }
            </section>
            { if status == GameStatus::InProgress {
                html! {
                    <form onsubmit={on_submit}>
                        <input ref={input_ref} placeholder="Ville…" autocomplete="off" />
                        <button type="submit">{ "Deviner" }</button>
                    </form>
                }
            } else {
                round_summary(&current, status)
            } }
            { if notice.is_empty() {
                html! {}
            } else {
                html! { <p class="notice" role="alert">{ (*notice).clone() }</p> }
            } }
        </main>
    }
}

fn day_shift_controls(settings: &SettingsData, shift_day: &Callback<i64>) -> Html {
    if !settings.allow_shifting_day {
        return html! {};
    }
    let back = {
        let shift_day = shift_day.clone();
        Callback::from(move |_: MouseEvent| shift_day.emit(-1))
    };
    let forward = {
        let shift_day = shift_day.clone();
        Callback::from(move |_: MouseEvent| shift_day.emit(1))
    };
    html! {
        <div class="day-shift">
            { if settings.shift_day_count > 0 {
                html! { <button type="button" onclick={back}>{ "↪️" }</button> }
            } else {
                html! {}
            } }
            <button type="button" onclick={forward}>{ "↩️" }</button>
        </div>
    }
}

fn round_summary(session: &GameSession, status: GameStatus) -> Html {
    let headline = if status == GameStatus::Won {
        "Bien joué !".to_string()
    } else {
        // A lost round reveals the answer.
        session.city().name.to_uppercase()
    };
    html! {
        <div class="round-summary">
            <p>{ headline }</p>
            <pre>{ share_text(session.day_string(), session.guesses()) }</pre>
        </div>
    }
}
