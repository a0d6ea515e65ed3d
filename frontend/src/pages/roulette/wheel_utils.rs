use roulette_shared::WheelOption;
use yew::prelude::*;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<WheelOption>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class="mt-6 mb-2 flex flex-col items-center justify-center">
            <div
                class={classes!(
                    "flex",
                    "items-center",
                    "gap-3",
                    "px-6",
                    "py-4",
                    "rounded-xl",
                    "bg-white",
                    "dark:bg-gray-800",
                    "text-gray-900",
                    "dark:text-white",
                    "font-bold",
                    "text-xl",
                    "shadow-lg",
                    "border-4",
                    "animate-bounce",
                )}
                style={format!("border-color: {};", winner.color)}
            >
                <span class="inline-block w-4 h-4 rounded-full" style={format!("background-color: {};", winner.color)}></span>
                <span>{format!("🎉 Winner: {} 🎉", winner.display_label())}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else if !props.can_spin {
        "Add at least 2 options"
    } else {
        "Spin"
    };

    let is_disabled = props.is_spinning || !props.can_spin;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}
