use dioxus::prelude::*;

/// Dialog shown while `show` is true. Escape, the close button and the backdrop all
/// hide it.
#[component]
pub fn Modal(show: Signal<bool>, title: String, children: Element) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let mut close = move || show.set(false);

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 max-w-sm",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| close(),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
