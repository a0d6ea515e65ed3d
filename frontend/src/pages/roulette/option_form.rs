use roulette_shared::palette::unique_color;
use roulette_shared::validation::parse_weight;
use roulette_shared::WheelOption;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionFormProps {
    pub options: Vec<WheelOption>,
    pub disabled: bool,
    pub on_add: Callback<WheelOption>,
    pub on_error: Callback<String>,
}

#[function_component(OptionForm)]
pub fn option_form(props: &OptionFormProps) -> Html {
    let label = use_state(String::new);
    let weight = use_state(|| "1".to_string());
    let color = {
        let options = props.options.clone();
        use_state(move || unique_color(&options, &mut rand::thread_rng()))
    };

    let on_label = {
        let label = label.clone();
        Callback::from(move |e: InputEvent| label.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_weight = {
        let weight = weight.clone();
        Callback::from(move |e: InputEvent| weight.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_color = {
        let color = color.clone();
        Callback::from(move |e: InputEvent| color.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let label = label.clone();
        let weight = weight.clone();
        let color = color.clone();
        let options = props.options.clone();
        let on_add = props.on_add.clone();
        let on_error = props.on_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_weight = match parse_weight(&weight) {
                Ok(w) => w,
                Err(_) => {
                    on_error.emit("Please enter an option name and a weight above 0.".to_string());
                    return;
                }
            };
            let option = match WheelOption::new(&label, parsed_weight, &color) {
                Ok(option) => option,
                Err(_) => {
                    on_error.emit("Please enter an option name and a weight above 0.".to_string());
                    return;
                }
            };

            let mut next = options.clone();
            next.push(option.clone());
            on_add.emit(option);

            label.set(String::new());
            weight.set("1".to_string());
            color.set(unique_color(&next, &mut rand::thread_rng()));
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex flex-wrap items-end gap-2">
            <div class="flex-1 min-w-[8rem]">
                <label class={styles::TEXT_LABEL}>{"Option"}</label>
                <input
                    type="text"
                    class={styles::INPUT}
                    placeholder="e.g. Pizza"
                    value={(*label).clone()}
                    oninput={on_label}
                    disabled={props.disabled}
                />
            </div>
            <div class="w-24">
                <label class={styles::TEXT_LABEL}>{"Weight"}</label>
                <input
                    type="number"
                    min="0.1"
                    step="0.1"
                    class={styles::INPUT}
                    value={(*weight).clone()}
                    oninput={on_weight}
                    disabled={props.disabled}
                />
            </div>
            <div>
                <label class={styles::TEXT_LABEL}>{"Color"}</label>
                <input
                    type="color"
                    class="mt-2 h-10 w-12 cursor-pointer rounded"
                    value={(*color).clone()}
                    oninput={on_color}
                    disabled={props.disabled}
                />
            </div>
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={props.disabled}>
                {"Add"}
            </button>
        </form>
    }
}
