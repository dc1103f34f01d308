//! Main module for the Coach's Colour reaction trainer using Yew.
//! Wires the three screens, preset storage, and the flash/preview loops.

use gloo_timers::callback::Timeout;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use coach_colour::flash::{self, FlashLoop, FrameSink, LoopRegistry};
use coach_colour::store::{self, PresetStore};
use coach_colour::{defaults, draw_delay_ms, draw_frame, FlashFrame, NumMode, Preset, SplitDir};

mod components;
mod config;
mod utils;

use components::{
    digits_html, fill_css, render_toast, DeleteOverlay, ExportOverlay, PresetTile, Toast,
};
use config::{
    NEUTRAL_SCREEN, TOAST_EXPORT, TOAST_INFO, TOAST_MS, TOAST_SUCCESS, TOAST_WARN,
};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Show a toast and (re)arm the timer that clears it, cancelling any
/// previous pending clear.
fn show_toast(
    toast: &UseStateHandle<Option<Toast>>,
    timer: &UseStateHandle<Option<Timeout>>,
    next: Toast,
) {
    toast.set(Some(next));

    let toast_clear = toast.clone();
    let handle = Timeout::new(TOAST_MS, move || toast_clear.set(None));
    timer.set(Some(handle));
}

/// Checkbox handler that applies one boolean field change to the draft.
fn toggle_field(
    draft: &UseStateHandle<Preset>,
    apply: impl Fn(&mut Preset, bool) + 'static,
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut preset = (*draft).clone();
        apply(&mut preset, input.checked());
        draft.set(preset);
    })
}

/// Which of the three screens is visible.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Setup,
    Session,
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component owning screen state, the preset map, the
/// session loop, and the preview loop registry.
#[function_component(Main)]
fn main_component() -> Html {
    let screen = use_state(|| Screen::Home);
    let presets = use_state(|| PresetStore::browser().ensure_default());
    // Names added by the latest import; shown with a NEW badge on home tiles.
    let new_names = use_state(|| Rc::new(Vec::<String>::new()));

    // Setup form state
    let draft = use_state(Preset::default);
    let selected_preset = use_state(String::new);
    let min_text = use_state(|| defaults::MIN_SECS.to_string());
    let max_text = use_state(|| defaults::MAX_SECS.to_string());
    let min_error = use_state(|| None::<String>);
    let max_error = use_state(|| None::<String>);

    // Live session state
    let session_loop = use_mut_ref(|| None::<FlashLoop>);
    let session_preset = use_state(|| None::<Preset>);
    let session_frame = use_state(|| None::<FlashFrame>);

    // Preview loops and their latest frames. Frames live in a mut ref so
    // timer callbacks can write them; tick_version forces the re-render.
    let previews = use_mut_ref(LoopRegistry::new);
    let preview_frames = use_mut_ref(HashMap::<String, FlashFrame>::new);
    let tick_counter = use_mut_ref(|| 0u64);
    let tick_version = use_state(|| 0u64);

    // Overlays and toasts
    let toast = use_state(|| None::<Toast>);
    let toast_timer = use_state(|| None::<Timeout>);
    let pending_delete = use_state(|| None::<String>);
    let export_open = use_state(|| false);
    let export_selection = use_state(String::new);
    let import_input = use_node_ref();

    // Ensure re-render on preview ticks by reading tick_version
    let _ = *tick_version;

    // Preview loop lifecycle: one loop per tile while the home screen is
    // visible, all cancelled together on any screen or preset change.
    {
        let previews = previews.clone();
        let preview_frames = preview_frames.clone();
        let tick_counter = tick_counter.clone();
        let tick_version = tick_version.clone();
        use_effect_with((*screen, (*presets).clone()), move |(screen, presets)| {
            previews.borrow_mut().stop_all();
            preview_frames.borrow_mut().clear();

            if *screen == Screen::Home {
                let mut rng = rand::rng();
                for (name, preset) in presets.iter() {
                    let sink: FrameSink = Rc::new({
                        let name = name.clone();
                        let preview_frames = preview_frames.clone();
                        let tick_counter = tick_counter.clone();
                        let tick_version = tick_version.clone();
                        move |frame| {
                            preview_frames.borrow_mut().insert(name.clone(), frame);
                            let next = {
                                let mut counter = tick_counter.borrow_mut();
                                *counter += 1;
                                *counter
                            };
                            tick_version.set(next);
                        }
                    });
                    let first = flash::preview_start_delay_ms(&mut rng);
                    previews
                        .borrow_mut()
                        .insert(name.clone(), FlashLoop::start(preset.clone(), sink, first));
                }
            }

            let previews_cleanup = previews.clone();
            move || previews_cleanup.borrow_mut().stop_all()
        });
    }

    // NEW badges only live on the home screen they were imported into.
    {
        let new_names = new_names.clone();
        use_effect_with(*screen, move |screen| {
            if *screen != Screen::Home && !new_names.is_empty() {
                new_names.set(Rc::new(Vec::new()));
            }
            || ()
        });
    }

    // Keep the interval text fields in sync when the draft changes
    // programmatically (preset load, committed parse).
    {
        let min_text = min_text.clone();
        let min_error = min_error.clone();
        use_effect_with(draft.min, move |&value| {
            let as_string = value.to_string();
            if *min_text != as_string {
                min_text.set(as_string);
                min_error.set(None);
            }
            || ()
        });
    }
    {
        let max_text = max_text.clone();
        let max_error = max_error.clone();
        use_effect_with(draft.max, move |&value| {
            let as_string = value.to_string();
            if *max_text != as_string {
                max_text.set(as_string);
                max_error.set(None);
            }
            || ()
        });
    }

    // --- Session control ---

    let start_session = {
        let session_loop = session_loop.clone();
        let session_preset = session_preset.clone();
        let session_frame = session_frame.clone();
        let screen = screen.clone();
        Callback::from(move |preset: Preset| {
            // First frame immediately, then the randomized chain.
            let mut rng = rand::rng();
            session_frame.set(Some(draw_frame(&preset, &mut rng)));

            let sink: FrameSink = Rc::new({
                let session_frame = session_frame.clone();
                move |frame| session_frame.set(Some(frame))
            });
            let first = draw_delay_ms(preset.min, preset.max, &mut rng);
            *session_loop.borrow_mut() = Some(FlashLoop::start(preset.clone(), sink, first));
            session_preset.set(Some(preset));
            screen.set(Screen::Session);
        })
    };

    let stop_session = {
        let session_loop = session_loop.clone();
        let session_preset = session_preset.clone();
        let session_frame = session_frame.clone();
        let screen = screen.clone();
        Callback::from(move |_: ()| {
            // Dropping the loop cancels its pending tick.
            session_loop.borrow_mut().take();
            session_frame.set(None);
            session_preset.set(None);
            screen.set(Screen::Home);
        })
    };

    let run_preset = {
        let presets = presets.clone();
        let start_session = start_session.clone();
        Callback::from(move |name: String| {
            if let Some(preset) = presets.get(&name) {
                start_session.emit(preset.clone());
            }
        })
    };

    // --- Setup form ---

    let load_named = {
        let presets = presets.clone();
        let draft = draft.clone();
        let selected_preset = selected_preset.clone();
        let min_text = min_text.clone();
        let max_text = max_text.clone();
        let min_error = min_error.clone();
        let max_error = max_error.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |name: String| {
            let Some(preset) = presets.get(&name).cloned() else {
                return;
            };
            min_text.set(preset.min.to_string());
            max_text.set(preset.max.to_string());
            min_error.set(None);
            max_error.set(None);
            draft.set(preset);
            selected_preset.set(name.clone());
            show_toast(
                &toast,
                &toast_timer,
                Toast::new(format!("Preset \"{}\" loaded", name), TOAST_INFO),
            );
        })
    };

    let edit_preset = {
        let load_named = load_named.clone();
        let screen = screen.clone();
        Callback::from(move |name: String| {
            load_named.emit(name);
            screen.set(Screen::Setup);
        })
    };

    let on_red = toggle_field(&draft, |p, v| p.red = v);
    let on_green = toggle_field(&draft, |p, v| p.green = v);
    let on_blue = toggle_field(&draft, |p, v| p.blue = v);
    let on_yellow = toggle_field(&draft, |p, v| p.yellow = v);
    let on_numbers = toggle_field(&draft, |p, v| p.numbers = v);
    let on_split = toggle_field(&draft, |p, v| p.split = v);

    let set_num_mode = {
        let draft = draft.clone();
        Callback::from(move |mode: NumMode| {
            let mut preset = (*draft).clone();
            preset.num_mode = mode;
            draft.set(preset);
        })
    };

    let set_dir = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut preset = (*draft).clone();
            preset.dir = match select.value().as_str() {
                "bottom" => SplitDir::Bottom,
                _ => SplitDir::Right,
            };
            draft.set(preset);
        })
    };

    // --- OnInput handlers for the interval text fields ---
    let min_text_oninput = {
        let min_text_setter = min_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_text_setter.set(input.value());
        })
    };
    let max_text_oninput = {
        let max_text_setter = max_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            max_text_setter.set(input.value());
        })
    };

    let commit_min = {
        let min_text = min_text.clone();
        let min_error = min_error.clone();
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            match utils::validate_interval_secs(min_text.as_str(), "Min interval") {
                Ok(secs) => {
                    min_error.set(None);
                    min_text.set(secs.to_string());
                    let mut preset = (*draft).clone();
                    preset.min = secs;
                    draft.set(preset);
                }
                Err(err) => min_error.set(Some(err)),
            }
        })
    };
    let commit_max = {
        let max_text = max_text.clone();
        let max_error = max_error.clone();
        let draft = draft.clone();
        Callback::from(move |_: ()| {
            match utils::validate_interval_secs(max_text.as_str(), "Max interval") {
                Ok(secs) => {
                    max_error.set(None);
                    max_text.set(secs.to_string());
                    let mut preset = (*draft).clone();
                    preset.max = secs;
                    draft.set(preset);
                }
                Err(err) => max_error.set(Some(err)),
            }
        })
    };

    let min_onkeydown = {
        let commit = commit_min.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let max_onkeydown = {
        let commit = commit_max.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    let save_preset = {
        let draft = draft.clone();
        let presets = presets.clone();
        let selected_preset = selected_preset.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let preset = (*draft).clone();
            if let Err(err) = preset.validate() {
                show_toast(&toast, &toast_timer, Toast::error(err.to_string()));
                return;
            }

            let window = gloo_utils::window();
            let Some(name) = window
                .prompt_with_message("Enter name for this preset:")
                .ok()
                .flatten()
            else {
                return;
            };
            let name = name.trim().to_string();
            if name.is_empty() {
                return;
            }

            let mut store = PresetStore::browser();
            if store.contains(&name) && name != defaults::PRESET_NAME {
                let overwrite = window
                    .confirm_with_message(&format!("Preset \"{}\" exists. Overwrite?", name))
                    .unwrap_or(false);
                if !overwrite {
                    return;
                }
            }
            match store.save(&name, &preset) {
                Ok(()) => {
                    presets.set(store.list());
                    selected_preset.set(name.clone());
                    show_toast(
                        &toast,
                        &toast_timer,
                        Toast::new(format!("Preset \"{}\" saved", name), TOAST_SUCCESS),
                    );
                }
                Err(err) => show_toast(&toast, &toast_timer, Toast::error(err.to_string())),
            }
        })
    };

    let delete_selected = {
        let presets = presets.clone();
        let selected_preset = selected_preset.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let name = (*selected_preset).clone();
            if name.is_empty() {
                show_toast(&toast, &toast_timer, Toast::new("Select a preset", TOAST_WARN));
                return;
            }
            let mut store = PresetStore::browser();
            match store.delete(&name) {
                Ok(()) => {
                    presets.set(store.list());
                    selected_preset.set(String::new());
                    show_toast(
                        &toast,
                        &toast_timer,
                        Toast::new(format!("Preset \"{}\" deleted", name), TOAST_WARN),
                    );
                }
                Err(err) => {
                    show_toast(&toast, &toast_timer, Toast::new(err.to_string(), TOAST_WARN))
                }
            }
        })
    };

    let select_existing = {
        let load_named = load_named.clone();
        let selected_preset = selected_preset.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if value.is_empty() {
                selected_preset.set(String::new());
            } else {
                load_named.emit(value);
            }
        })
    };

    let start_from_setup = {
        let draft = draft.clone();
        let start_session = start_session.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let preset = (*draft).clone();
            if let Err(err) = preset.validate() {
                show_toast(&toast, &toast_timer, Toast::error(err.to_string()));
                return;
            }
            start_session.emit(preset);
        })
    };

    // --- Home-screen delete confirmation ---

    let request_delete = {
        let pending_delete = pending_delete.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |name: String| {
            if name == defaults::PRESET_NAME {
                show_toast(
                    &toast,
                    &toast_timer,
                    Toast::new("Cannot delete default preset", TOAST_WARN),
                );
                return;
            }
            pending_delete.set(Some(name));
        })
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let presets = presets.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: ()| {
            let Some(name) = (*pending_delete).clone() else {
                return;
            };
            let mut store = PresetStore::browser();
            match store.delete(&name) {
                Ok(()) => {
                    presets.set(store.list());
                    show_toast(
                        &toast,
                        &toast_timer,
                        Toast::error(format!("Preset \"{}\" deleted", name)),
                    );
                }
                Err(err) => show_toast(&toast, &toast_timer, Toast::new(err.to_string(), TOAST_WARN)),
            }
            pending_delete.set(None);
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_: ()| pending_delete.set(None))
    };

    // --- Import / export ---

    let open_export = {
        let presets = presets.clone();
        let export_selection = export_selection.clone();
        let export_open = export_open.clone();
        Callback::from(move |_: MouseEvent| {
            let first = presets.keys().next().cloned().unwrap_or_default();
            export_selection.set(first);
            export_open.set(true);
        })
    };

    let select_export = {
        let export_selection = export_selection.clone();
        Callback::from(move |name: String| export_selection.set(name))
    };

    let cancel_export = {
        let export_open = export_open.clone();
        Callback::from(move |_: ()| export_open.set(false))
    };

    let confirm_export = {
        let export_selection = export_selection.clone();
        let export_open = export_open.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |_: ()| {
            let name = (*export_selection).clone();
            if name.is_empty() {
                return;
            }
            let store = PresetStore::browser();
            match store.export_document(&name) {
                Ok(document) => {
                    let filename = store::export_filename(&name, &utils::today_iso_date());
                    utils::download_json(&filename, &document);
                    show_toast(
                        &toast,
                        &toast_timer,
                        Toast::new(format!("Preset \"{}\" exported", name), TOAST_EXPORT),
                    );
                }
                Err(err) => show_toast(&toast, &toast_timer, Toast::error(err.to_string())),
            }
            export_open.set(false);
        })
    };

    let open_import = {
        let import_input = import_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = import_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_import_file = {
        let presets = presets.clone();
        let new_names = new_names.clone();
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Reset so picking the same file again re-triggers the event.
            input.set_value("");

            let presets = presets.clone();
            let new_names = new_names.clone();
            let toast = toast.clone();
            let toast_timer = toast_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let text = match JsFuture::from(file.text()).await {
                    Ok(value) => value.as_string().unwrap_or_default(),
                    Err(_) => {
                        show_toast(&toast, &toast_timer, Toast::error("Invalid file"));
                        return;
                    }
                };
                let mut store = PresetStore::browser();
                let result = store.import(&text, |name| {
                    gloo_utils::window()
                        .confirm_with_message(&format!("Preset \"{}\" exists. Overwrite?", name))
                        .unwrap_or(false)
                });
                match result {
                    Ok(added) => {
                        new_names.set(Rc::new(added));
                        presets.set(store.list());
                        show_toast(
                            &toast,
                            &toast_timer,
                            Toast::new("Presets imported", TOAST_EXPORT),
                        );
                    }
                    Err(_) => show_toast(&toast, &toast_timer, Toast::error("Invalid file")),
                }
            });
        })
    };

    // --- Screen navigation ---

    let go_setup = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(Screen::Setup))
    };
    let go_home = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(Screen::Home))
    };

    // ──────────────────────────────────────────────────────────────────────

    let body = match *screen {
        Screen::Home => {
            let tiles: Html = presets
                .iter()
                .map(|(name, preset)| {
                    let frame = preview_frames.borrow().get(name).copied();
                    html! {
                        <PresetTile
                            key={name.clone()}
                            name={name.clone()}
                            preset={preset.clone()}
                            {frame}
                            is_new={new_names.contains(name)}
                            on_run={run_preset.clone()}
                            on_edit={edit_preset.clone()}
                            on_delete={request_delete.clone()}
                        />
                    }
                })
                .collect();

            html! {
                <div class="screen home">
                    <h1>{ "Coach's Colour Tool" }</h1>
                    <div class="home-actions">
                        <button onclick={go_setup.clone()}>{ "Create New Session" }</button>
                        <button class="btn-secondary" onclick={open_import}>{ "Import" }</button>
                        <button class="btn-secondary" onclick={open_export}>{ "Export" }</button>
                    </div>
                    <div class="tile-grid">{ tiles }</div>
                </div>
            }
        }
        Screen::Setup => html! {
            <div class="screen setup">
                <h1>{ "Session Setup" }</h1>

                <div class="form-group">
                    <label>{ "Colours:" }</label>
                    <label><input type="checkbox" checked={draft.red} onchange={on_red} /> { "Red" }</label>
                    <label><input type="checkbox" checked={draft.green} onchange={on_green} /> { "Green" }</label>
                    <label><input type="checkbox" checked={draft.blue} onchange={on_blue} /> { "Blue" }</label>
                    <label><input type="checkbox" checked={draft.yellow} onchange={on_yellow} /> { "Yellow" }</label>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="min_interval">{ "Min interval (s):" }</label>
                        <input
                            type="text"
                            id="min_interval"
                            value={(*min_text).clone()}
                            class={if min_error.is_some() { "invalid" } else { "" }}
                            oninput={min_text_oninput}
                            onchange={commit_min.reform(|_| ())}
                            onkeydown={min_onkeydown}
                        />
                        if let Some(ref err) = *min_error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                    <div class="form-group">
                        <label for="max_interval">{ "Max interval (s):" }</label>
                        <input
                            type="text"
                            id="max_interval"
                            value={(*max_text).clone()}
                            class={if max_error.is_some() { "invalid" } else { "" }}
                            oninput={max_text_oninput}
                            onchange={commit_max.reform(|_| ())}
                            onkeydown={max_onkeydown}
                        />
                        if let Some(ref err) = *max_error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                </div>

                <div class="form-group checkbox-group">
                    <label>
                        <input type="checkbox" checked={draft.numbers} onchange={on_numbers} />
                        { "Show numbers (1–9)" }
                    </label>
                    if draft.numbers {
                        <div class="number-options">
                            <label>
                                <input type="radio" name="numMode"
                                    checked={draft.num_mode == NumMode::One}
                                    onchange={set_num_mode.reform(|_: Event| NumMode::One)} />
                                { "One number" }
                            </label>
                            if draft.split {
                                <label>
                                    <input type="radio" name="numMode"
                                        checked={draft.num_mode == NumMode::Two}
                                        onchange={set_num_mode.reform(|_: Event| NumMode::Two)} />
                                    { "Two numbers (one per region)" }
                                </label>
                            }
                        </div>
                    }
                </div>

                <div class="form-group checkbox-group">
                    <label>
                        <input type="checkbox" checked={draft.split} onchange={on_split} />
                        { "Split screen into two regions" }
                    </label>
                    if draft.split {
                        <div class="split-direction">
                            <label for="split_dir">{ "Split direction:" }</label>
                            <select id="split_dir" onchange={set_dir}>
                                <option value="right" selected={draft.dir == SplitDir::Right}>
                                    { "Left / Right" }
                                </option>
                                <option value="bottom" selected={draft.dir == SplitDir::Bottom}>
                                    { "Top / Bottom" }
                                </option>
                            </select>
                        </div>
                    }
                </div>

                <div class="form-group">
                    <label for="preset_select">{ "Presets:" }</label>
                    <select id="preset_select" onchange={select_existing}>
                        <option value="" selected={selected_preset.is_empty()}>{ "Select..." }</option>
                        { presets.keys().map(|name| html! {
                            <option value={name.clone()} selected={*name == *selected_preset}>
                                { name }
                            </option>
                        }).collect::<Html>() }
                    </select>
                    <button onclick={save_preset}>{ "Save Preset" }</button>
                    <button class="btn-secondary" onclick={delete_selected}>{ "Delete Preset" }</button>
                </div>

                <div class="setup-actions">
                    <button class="btn-primary" onclick={start_from_setup}>{ "Start" }</button>
                    <button class="btn-secondary" onclick={go_home.clone()}>{ "Home" }</button>
                </div>
            </div>
        },
        Screen::Session => {
            let background = (*session_frame)
                .map(|frame| fill_css(&frame.fill, NEUTRAL_SCREEN))
                .unwrap_or_else(|| NEUTRAL_SCREEN.to_string());
            let dir = session_preset
                .as_ref()
                .map(|preset| preset.dir)
                .unwrap_or_default();
            html! {
                <div class="screen flash" style={format!("background:{}", background)}>
                    if let Some(frame) = session_frame.as_ref() {
                        { digits_html(frame, dir, "flash") }
                    }
                    <button class="stop-btn" onclick={stop_session.reform(|_: MouseEvent| ())}>
                        { "■ Stop" }
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="container">
            { render_toast(toast.as_ref()) }
            { body }
            if let Some(name) = pending_delete.as_ref() {
                <DeleteOverlay
                    name={name.clone()}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
            if *export_open {
                <ExportOverlay
                    names={presets.keys().cloned().collect::<Vec<_>>()}
                    selected={(*export_selection).clone()}
                    on_select={select_export}
                    on_confirm={confirm_export}
                    on_cancel={cancel_export}
                />
            }
            <input
                ref={import_input}
                type="file"
                accept=".json,application/json"
                style="display:none"
                onchange={on_import_file}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
