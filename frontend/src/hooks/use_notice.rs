use yew::prelude::*;

/// A single line of feedback shown under the controls: either an error or
/// an informational message, never both.
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub error: String,
    pub info: String,
    pub show_error: Callback<String>,
    pub show_info: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_notice() -> Notice {
    let error = use_state(String::new);
    let info = use_state(String::new);

    let show_error = {
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |msg: String| {
            log::warn!("{}", msg);
            error.set(msg);
            info.set(String::new());
        })
    };

    let show_info = {
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |msg: String| {
            info.set(msg);
            error.set(String::new());
        })
    };

    let clear = {
        let error = error.clone();
        let info = info.clone();
        Callback::from(move |_| {
            error.set(String::new());
            info.set(String::new());
        })
    };

    Notice {
        error: (*error).clone(),
        info: (*info).clone(),
        show_error,
        show_info,
        clear,
    }
}
