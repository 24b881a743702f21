//! Corner handle that drag-resizes the chat window.
//!
//! ARCHITECTURE
//! ============
//! Pointer-move and pointer-up are observed on `window` so the drag keeps
//! tracking when the pointer leaves the handle. Those listeners exist only
//! for the duration of one gesture and are owned by a `DragListeners` guard:
//! dropping the guard detaches them. The guard is dropped on release, when a
//! new gesture replaces a stale one, and when the component is disposed.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
struct DragListeners {
    handles: Vec<WindowListenerHandle>,
}

#[cfg(feature = "hydrate")]
impl Drop for DragListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

/// Resize grip rendered in the bottom-right corner of the chat window.
#[component]
pub fn ResizeHandle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    let listeners = StoredValue::new_local(None::<DragListeners>);

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let _ = listeners.try_update_value(Option::take);
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        ui.update(|u| u.begin_resize(f64::from(ev.client_x()), f64::from(ev.client_y())));

        #[cfg(feature = "hydrate")]
        {
            let finish = move || {
                ui.update(UiState::end_resize);
                listeners.set_value(None);
            };
            let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
                ui.update(|u| {
                    u.resize_to(f64::from(ev.client_x()), f64::from(ev.client_y()));
                });
            });
            let on_up = window_event_listener(leptos::ev::pointerup, move |_| finish());
            let on_cancel = window_event_listener(leptos::ev::pointercancel, move |_| finish());

            // Replacing a guard left over from a missed release detaches its listeners.
            listeners.set_value(Some(DragListeners { handles: vec![on_move, on_up, on_cancel] }));
        }
    };

    view! {
        <div
            class="chat-window__resize-handle"
            class:chat-window__resize-handle--active=move || ui.with(|u| u.resize.is_dragging())
            title="크기 조절"
            on:pointerdown=on_pointer_down
        ></div>
    }
}
