mod option_form;
mod option_list;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use roulette_shared::wheel_option::{add_option, edit_option, initial_options, remove_option, OptionEdit};
use roulette_shared::{SpinEngine, SpinOutcome, WheelError, WheelOption};
use web_sys::window;
use yew::prelude::*;

use crate::accuracy::{run_accuracy_check, ACCURACY_TRIALS};
use crate::config::{now_ms, spin_config, RESULT_DELAY_MS};
use crate::hooks::{use_notice, use_options};
use crate::styles;

use option_form::OptionForm;
use option_list::OptionList;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

/// Drives the engine one display frame at a time until the spin completes.
#[derive(Clone)]
struct FrameLoop {
    engine: Rc<RefCell<SpinEngine>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    rotation: UseStateHandle<f64>,
    on_finished: Callback<SpinOutcome>,
}

impl FrameLoop {
    fn schedule(&self) {
        let next = self.clone();
        let handle = request_animation_frame(move |_| next.tick());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let update = self.engine.borrow_mut().advance(now_ms());
        let Some(frame) = update else { return };

        self.rotation.set(frame.orientation);
        match frame.finished {
            Some(outcome) => {
                self.frame.borrow_mut().take();
                self.on_finished.emit(outcome);
            }
            None => self.schedule(),
        }
    }
}

fn edit_error_message(err: &WheelError) -> String {
    match err {
        WheelError::TooFewOptions { min } => format!("At least {} options are required.", min),
        WheelError::Spinning => "Wait for the wheel to stop first.".to_string(),
        WheelError::InvalidField(field) if field.code == "total_weight_overflow" => {
            "The weights add up to too much. Use smaller numbers.".to_string()
        }
        other => other.to_string(),
    }
}

#[function_component(Roulette)]
pub fn roulette() -> Html {
    let options = use_options();
    let notice = use_notice();
    let engine = use_mut_ref(|| SpinEngine::new(spin_config()).unwrap_or_default());
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let result_timer = use_mut_ref(|| None::<Timeout>);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<WheelOption>);

    // Stop the frame loop and any pending result when the page goes away
    {
        let frame = frame.clone();
        let result_timer = result_timer.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
                result_timer.borrow_mut().take();
            }
        });
    }

    let on_finished = {
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let result_timer = result_timer.clone();
        Callback::from(move |outcome: SpinOutcome| {
            is_spinning.set(false);
            log::info!("Spin finished: {}", outcome.winner.display_label());
            let winner = winner.clone();
            let timer = Timeout::new(RESULT_DELAY_MS, move || winner.set(Some(outcome.winner)));
            *result_timer.borrow_mut() = Some(timer);
        })
    };

    let start_spin = {
        let options = options.clone();
        let engine = engine.clone();
        let frame = frame.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let result_timer = result_timer.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let started = engine
                .borrow_mut()
                .request_spin(&options, &mut rand::thread_rng(), now_ms());
            if let Err(reason) = started {
                log::info!("Spin request ignored: {:?}", reason);
                return;
            }

            // a result still waiting to be shown belongs to the previous spin
            result_timer.borrow_mut().take();
            is_spinning.set(true);
            winner.set(None);
            notice.clear.emit(());

            FrameLoop {
                engine: engine.clone(),
                frame: frame.clone(),
                rotation: rotation.clone(),
                on_finished: on_finished.clone(),
            }
            .schedule();
        })
    };

    // Option edits go through the same guard: nothing changes mid-spin.
    let mutate = {
        let options = options.clone();
        let engine = engine.clone();
        let notice = notice.clone();
        Rc::new(move |change: &dyn Fn(&mut Vec<WheelOption>) -> roulette_shared::Result<()>| {
            if engine.borrow().is_spinning() {
                notice.show_error.emit(edit_error_message(&WheelError::Spinning));
                return;
            }
            let mut next = (*options).clone();
            match change(&mut next) {
                Ok(()) => {
                    options.set(next);
                    notice.clear.emit(());
                }
                Err(e) => notice.show_error.emit(edit_error_message(&e)),
            }
        })
    };

    let on_add = {
        let mutate = mutate.clone();
        Callback::from(move |option: WheelOption| {
            mutate(&|list: &mut Vec<WheelOption>| add_option(list, option.clone()))
        })
    };

    let on_edit = {
        let mutate = mutate.clone();
        Callback::from(move |(index, edit): (usize, OptionEdit)| {
            mutate(&|list: &mut Vec<WheelOption>| edit_option(list, index, edit.clone()))
        })
    };

    let on_remove = {
        let mutate = mutate.clone();
        Callback::from(move |index: usize| {
            mutate(&|list: &mut Vec<WheelOption>| remove_option(list, index).map(|_| ()))
        })
    };

    let on_reset = {
        let options = options.clone();
        let engine = engine.clone();
        let rotation = rotation.clone();
        let winner = winner.clone();
        let result_timer = result_timer.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|w| w.confirm_with_message("Reset all options to the defaults?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            if !engine.borrow_mut().reset() {
                notice.show_error.emit(edit_error_message(&WheelError::Spinning));
                return;
            }
            result_timer.borrow_mut().take();
            options.set(initial_options());
            rotation.set(0.0);
            winner.set(None);
            notice.show_info.emit("Options reset.".to_string());
        })
    };

    let on_check_odds = {
        let options = options.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let rows = run_accuracy_check(&options, ACCURACY_TRIALS);
            let worst = rows
                .iter()
                .map(|row| (row.observed - row.expected).abs())
                .fold(0.0_f64, f64::max);
            notice.show_info.emit(format!(
                "{} test draws: largest gap from the expected odds was {:.2}%. Details are in the console.",
                ACCURACY_TRIALS,
                worst * 100.0
            ));
        })
    };

    let (segments, can_spin, pointer_angle) = {
        let engine = engine.borrow();
        let segments = engine.segments_for(&options).into_owned();
        let can_spin = options.len() >= engine.config().min_options && !segments.is_empty();
        (segments, can_spin, engine.config().pointer_angle)
    };

    html! {
        <div class={styles::CONTAINER_LG}>
            <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-6")}>{"Weighted Roulette"}</h1>
            <div class="grid gap-8 md:grid-cols-2">
                <div class={classes!(styles::CARD, "flex", "flex-col", "items-center")}>
                    <WheelCanvas
                        segments={segments}
                        rotation={*rotation}
                        pointer_angle={pointer_angle}
                        is_spinning={*is_spinning}
                    />
                    <div class="mt-6 w-full max-w-xs">
                        <SpinButton is_spinning={*is_spinning} can_spin={can_spin} onclick={start_spin} />
                    </div>
                    <ResultDisplay winner={(*winner).clone()} />
                </div>
                <div class={styles::CARD}>
                    <h2 class={styles::TEXT_H2}>{"Options"}</h2>
                    <OptionForm
                        options={(*options).clone()}
                        disabled={*is_spinning}
                        on_add={on_add}
                        on_error={notice.show_error.clone()}
                    />
                    if !notice.error.is_empty() {
                        <p class={classes!(styles::TEXT_ERROR, "mt-2")}>{notice.error.clone()}</p>
                    }
                    if !notice.info.is_empty() {
                        <p class={classes!(styles::TEXT_SUCCESS, "mt-2")}>{notice.info.clone()}</p>
                    }
                    <OptionList
                        options={(*options).clone()}
                        disabled={*is_spinning}
                        on_edit={on_edit}
                        on_remove={on_remove}
                        on_error={notice.show_error.clone()}
                    />
                    <div class="mt-6 flex justify-end gap-2">
                        <button class={styles::BUTTON_SECONDARY} onclick={on_check_odds} disabled={*is_spinning || !can_spin}>
                            {"Check odds"}
                        </button>
                        <button class={styles::BUTTON_SECONDARY} onclick={on_reset} disabled={*is_spinning}>
                            {"Reset"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
