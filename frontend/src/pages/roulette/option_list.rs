use roulette_shared::validation::{parse_weight, validate_label};
use roulette_shared::wheel_option::{color_in_use, OptionEdit};
use roulette_shared::WheelOption;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::styles;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Label,
    Weight,
}

#[derive(Properties, PartialEq)]
pub struct OptionListProps {
    pub options: Vec<WheelOption>,
    pub disabled: bool,
    pub on_edit: Callback<(usize, OptionEdit)>,
    pub on_remove: Callback<usize>,
    pub on_error: Callback<String>,
}

fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(OptionList)]
pub fn option_list(props: &OptionListProps) -> Html {
    let editing = use_state(|| None::<(usize, Field)>);
    // Read by the input's handlers, which may fire after the edit has already ended.
    let live_edit = use_mut_ref(|| None::<(usize, Field)>);
    let draft = use_state(String::new);

    let start_edit = {
        let editing = editing.clone();
        let live_edit = live_edit.clone();
        let draft = draft.clone();
        let disabled = props.disabled;
        let options = props.options.clone();
        Callback::from(move |(index, field): (usize, Field)| {
            if disabled || editing.is_some() {
                return;
            }
            let Some(option) = options.get(index) else { return };
            draft.set(match field {
                Field::Label => option.label.clone(),
                Field::Weight => option.weight.to_string(),
            });
            *live_edit.borrow_mut() = Some((index, field));
            editing.set(Some((index, field)));
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        let live_edit = live_edit.clone();
        Callback::from(move |_: ()| {
            live_edit.borrow_mut().take();
            editing.set(None);
        })
    };

    let commit_edit = {
        let editing = editing.clone();
        let live_edit = live_edit.clone();
        let on_edit = props.on_edit.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |value: String| {
            let Some((index, field)) = *live_edit.borrow() else { return };
            let edit = match field {
                Field::Label => match validate_label(&value) {
                    Ok(()) => OptionEdit::Label(value),
                    Err(_) => {
                        on_error.emit("Please enter an option name.".to_string());
                        return;
                    }
                },
                Field::Weight => match parse_weight(&value) {
                    Ok(weight) => OptionEdit::Weight(weight),
                    Err(_) => {
                        on_error.emit("Please enter a weight above 0.".to_string());
                        return;
                    }
                },
            };
            live_edit.borrow_mut().take();
            editing.set(None);
            on_edit.emit((index, edit));
        })
    };

    let render_editor = |field: Field| {
        let on_input = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| draft.set(e.target_unchecked_into::<HtmlInputElement>().value()))
        };
        let on_keydown = {
            let commit_edit = commit_edit.clone();
            let cancel_edit = cancel_edit.clone();
            Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                "Enter" => {
                    e.prevent_default();
                    commit_edit.emit(e.target_unchecked_into::<HtmlInputElement>().value());
                }
                "Escape" => {
                    e.prevent_default();
                    cancel_edit.emit(());
                }
                _ => {}
            })
        };
        let on_blur = {
            let commit_edit = commit_edit.clone();
            Callback::from(move |e: FocusEvent| {
                commit_edit.emit(e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };
        let (input_type, width) = match field {
            Field::Label => ("text", "w-full"),
            Field::Weight => ("number", "w-20"),
        };
        html! {
            <input
                type={input_type}
                min="0.1"
                step="0.1"
                class={classes!(styles::INPUT_INLINE, width)}
                value={(*draft).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                onblur={on_blur}
                autofocus={true}
            />
        }
    };

    let rows = props.options.iter().enumerate().map(|(index, option)| {
        let is_editing = |field: Field| *editing == Some((index, field));

        let on_color = {
            let options = props.options.clone();
            let current = option.color.clone();
            let on_edit = props.on_edit.clone();
            Callback::from(move |e: Event| {
                let input = e.target_unchecked_into::<HtmlInputElement>();
                let color = input.value();
                if color_in_use(&options, &color, Some(index))
                    && !confirm("This color is already in use. Use it anyway?")
                {
                    // the props did not change, so yew will not put the old value back
                    input.set_value(&current);
                    return;
                }
                on_edit.emit((index, OptionEdit::Color(color)));
            })
        };
        let on_remove = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(index))
        };
        let edit_label = {
            let start_edit = start_edit.clone();
            Callback::from(move |_: MouseEvent| start_edit.emit((index, Field::Label)))
        };
        let edit_weight = {
            let start_edit = start_edit.clone();
            Callback::from(move |_: MouseEvent| start_edit.emit((index, Field::Weight)))
        };

        html! {
            <li key={index} class={styles::OPTION_ROW}>
                <input
                    type="color"
                    class={styles::COLOR_SWATCH}
                    value={option.color.clone()}
                    onchange={on_color}
                    disabled={props.disabled}
                    title="Change color"
                />
                <div class="flex-1 min-w-0">
                    if is_editing(Field::Label) {
                        { render_editor(Field::Label) }
                    } else {
                        <span class="block truncate cursor-text font-medium text-gray-900 dark:text-white" onclick={edit_label}>
                            { option.display_label().to_string() }
                        </span>
                    }
                    if is_editing(Field::Weight) {
                        { render_editor(Field::Weight) }
                    } else {
                        <span class="text-xs cursor-text text-gray-500 dark:text-gray-400" onclick={edit_weight}>
                            { format!("Weight: {}", option.weight) }
                        </span>
                    }
                </div>
                <button
                    class="p-2 text-gray-500 hover:text-red-600 disabled:opacity-40"
                    onclick={on_remove}
                    disabled={props.disabled}
                    aria-label="Delete"
                >
                    {"🗑️"}
                </button>
            </li>
        }
    });

    html! {
        <ul class="mt-4 space-y-2">
            { for rows }
        </ul>
    }
}
