use super::{arena_view::ArenaView, hud_panel::HudPanel, records_panel::RecordsPanel};
use crate::model::{ArenaMetrics, COUNTDOWN_PERIOD_MS, GameAction, GameState, Roll, SessionEvent};
use crate::state::Ticker;
use crate::util::{clog, log_event, now_ms};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);
    let session = game.session;
    let playing = game.is_playing();
    let interval_ms = game.relocation_interval_ms();

    // Countdown ticker: one per Playing session, dropped on any exit.
    {
        let dispatcher = game.dispatcher();
        use_effect_with((session, playing), move |&(session, playing)| {
            let ticker = if playing {
                Ticker::every(COUNTDOWN_PERIOD_MS, move || {
                    dispatcher.dispatch(GameAction::CountdownTick {
                        session,
                        roll: Roll::sample(),
                    })
                })
            } else {
                None
            };
            move || drop(ticker)
        });
    }
    // Relocation ticker: also re-established when the arena changes the cadence.
    {
        let dispatcher = game.dispatcher();
        use_effect_with(
            (session, playing, interval_ms),
            move |&(session, playing, interval_ms)| {
                let ticker = if playing {
                    Ticker::every(interval_ms, move || {
                        dispatcher.dispatch(GameAction::Relocate {
                            session,
                            roll: Roll::sample(),
                        })
                    })
                } else {
                    None
                };
                move || drop(ticker)
            },
        );
    }
    // Log phase transitions
    {
        let game = game.clone();
        use_effect_with((game.phase, game.session), move |_| {
            if let Some(event) = game.transition_event() {
                log_event(&event);
            }
            || ()
        });
    }
    {
        let scale = game.scale;
        use_effect_with(interval_ms, move |&interval_ms| {
            log_event(&SessionEvent::ArenaScaled { scale, interval_ms });
            || ()
        });
    }
    // Space/Enter start or reset, unless a control has focus and will handle it itself.
    {
        let dispatcher = game.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.repeat() || !matches!(e.code().as_str(), "Space" | "Enter") {
                    return;
                }
                let on_control = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map(|el| matches!(el.tag_name().as_str(), "BUTTON" | "INPUT" | "TEXTAREA"))
                    .unwrap_or(false);
                if on_control {
                    return;
                }
                e.prevent_default();
                dispatcher.dispatch(GameAction::Start {
                    now_ms: now_ms(),
                    roll: Roll::sample(),
                });
            }) as Box<dyn FnMut(_)>);
            if let Some(window) = &window {
                if let Err(err) = window
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                {
                    clog(&format!("keydown listener not installed: {:?}", err));
                }
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    let on_start = {
        let dispatcher = game.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(GameAction::Start {
                now_ms: now_ms(),
                roll: Roll::sample(),
            })
        })
    };
    let on_catch = {
        let dispatcher = game.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(GameAction::Catch { now_ms: now_ms() }))
    };
    let on_metrics = {
        let dispatcher = game.dispatcher();
        Callback::from(move |m: ArenaMetrics| dispatcher.dispatch(GameAction::ArenaResized(m)))
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:12px; width:100vw; height:100vh; padding:12px; box-sizing:border-box; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <HudPanel
                status={game.status_message()}
                time_left={game.record.time_left_secs}
                countdown_fraction={game.countdown_fraction()}
                action_label={game.action_label()}
                on_start={on_start}
            />
            <ArenaView
                phase={game.phase}
                position={game.position}
                show_target={game.target_visible()}
                on_catch={on_catch}
                on_metrics={on_metrics}
            />
            <RecordsPanel best_ms={game.record.best_time_ms} last_ms={game.record.last_time_ms} />
        </div>
    }
}
