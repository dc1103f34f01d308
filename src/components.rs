//! Stateless Yew view components for the Coach's Colour UI.
//!
//! Everything here renders from props; screen state and storage access stay
//! in `main.rs`.

use crate::config::{NEUTRAL_TILE, TOAST_ERROR};
use crate::utils::contrast_text;
use coach_colour::{Colour, Digits, FlashFill, FlashFrame, Preset, SplitDir};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// CSS background for a tick's fill; `neutral` is used for a blank fill.
pub fn fill_css(fill: &FlashFill, neutral: &str) -> String {
    match fill {
        FlashFill::Blank => neutral.to_string(),
        FlashFill::Solid(colour) => colour.css().to_string(),
        FlashFill::Split { first, second, dir } => {
            let towards = match dir {
                SplitDir::Right => "to right",
                SplitDir::Bottom => "to bottom",
            };
            format!(
                "linear-gradient({},{} 50%,{} 50%)",
                towards,
                first.css(),
                second.css()
            )
        }
    }
}

/// Static tile background showing every active colour at once.
pub fn tile_background(active: &[Colour]) -> String {
    let css: Vec<&str> = active.iter().map(Colour::css).collect();
    match css.as_slice() {
        [] => NEUTRAL_TILE.to_string(),
        [c] => (*c).to_string(),
        [a, b] => format!("linear-gradient(135deg,{} 50%,{} 50%)", a, b),
        [a, b, c] => format!("linear-gradient(135deg,{},{},{})", a, b, c),
        [a, b, c, d] => format!(
            "linear-gradient(135deg,{a} 25%,{b} 25%,{b} 50%,{c} 50%,{c} 75%,{d} 75%)"
        ),
        _ => NEUTRAL_TILE.to_string(),
    }
}

fn primary_colour(fill: &FlashFill) -> Option<Colour> {
    match fill {
        FlashFill::Blank => None,
        FlashFill::Solid(colour) => Some(*colour),
        FlashFill::Split { first, .. } => Some(*first),
    }
}

fn secondary_colour(fill: &FlashFill) -> Option<Colour> {
    match fill {
        FlashFill::Split { second, .. } => Some(*second),
        other => primary_colour(other),
    }
}

/// Digit overlay for a frame. `scale` selects the CSS family ("flash" for
/// the session screen, "tile" for previews); `dir` places the two-digit
/// variant, following the preset even when the fill fell back to solid.
pub fn digits_html(frame: &FlashFrame, dir: SplitDir, scale: &'static str) -> Html {
    match frame.digits {
        Digits::None => html! {},
        Digits::One(n) => html! {
            <div class={classes!(format!("{}-num", scale), "one")}
                style={format!("color:{}", contrast_text(primary_colour(&frame.fill)))}>
                { n }
            </div>
        },
        Digits::Two(a, b) => {
            let (slot_a, slot_b, stacked) = match dir {
                SplitDir::Right => ("left", "right", false),
                SplitDir::Bottom => ("top", "bottom", true),
            };
            html! {
                <div class={classes!(format!("{}-num", scale), "two", stacked.then_some("tb"))}>
                    <span class={slot_a}
                        style={format!("color:{}", contrast_text(primary_colour(&frame.fill)))}>
                        { a }
                    </span>
                    <span class={slot_b}
                        style={format!("color:{}", contrast_text(secondary_colour(&frame.fill)))}>
                        { b }
                    </span>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PresetTileProps {
    pub name: AttrValue,
    pub preset: Preset,
    /// Latest preview frame, once the tile's loop has ticked.
    pub frame: Option<FlashFrame>,
    pub is_new: bool,
    pub on_run: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

/// One home-screen preset tile with live preview and edit/delete actions.
#[function_component(PresetTile)]
pub fn preset_tile(props: &PresetTileProps) -> Html {
    let background = match &props.frame {
        Some(frame) => fill_css(&frame.fill, NEUTRAL_TILE),
        None => tile_background(&props.preset.active_colours()),
    };

    let run = {
        let name = props.name.to_string();
        let on_run = props.on_run.clone();
        Callback::from(move |_: MouseEvent| on_run.emit(name.clone()))
    };
    let edit = {
        let name = props.name.to_string();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_edit.emit(name.clone());
        })
    };
    let delete = {
        let name = props.name.to_string();
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(name.clone());
        })
    };

    html! {
        <div class="tile" style={format!("background:{}", background)} onclick={run}>
            if props.is_new {
                <div class="tile-new">{ "NEW" }</div>
            }
            <div class="tile-action tile-edit" onclick={edit}>{ "✎" }</div>
            <div class="tile-action tile-delete" onclick={delete}>{ "×" }</div>
            <div class="tile-prev-wrap">
                if let Some(frame) = &props.frame {
                    { digits_html(frame, props.preset.dir, "tile") }
                }
            </div>
            <div class="tile-name">{ props.name.clone() }</div>
            <div class="tile-time">{ props.preset.interval_label() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DeleteOverlayProps {
    pub name: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation overlay shown before a preset is deleted.
#[function_component(DeleteOverlay)]
pub fn delete_overlay(props: &DeleteOverlayProps) -> Html {
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());
    html! {
        <div class="overlay">
            <div class="overlay-box">
                <p>{ format!("Delete preset \"{}\"?", props.name) }</p>
                <div class="overlay-actions">
                    <button class="btn-danger" onclick={confirm}>{ "Delete" }</button>
                    <button class="btn-secondary" onclick={cancel}>{ "Cancel" }</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExportOverlayProps {
    pub names: Vec<String>,
    pub selected: AttrValue,
    pub on_select: Callback<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Overlay for choosing which preset to export.
#[function_component(ExportOverlay)]
pub fn export_overlay(props: &ExportOverlayProps) -> Html {
    let select = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());
    html! {
        <div class="overlay">
            <div class="overlay-box">
                <p>{ "Export which preset?" }</p>
                <select onchange={select}>
                    { props.names.iter().map(|name| html! {
                        <option value={name.clone()} selected={name.as_str() == &*props.selected}>
                            { name }
                        </option>
                    }).collect::<Html>() }
                </select>
                <div class="overlay-actions">
                    <button onclick={confirm}>{ "Export" }</button>
                    <button class="btn-secondary" onclick={cancel}>{ "Cancel" }</button>
                </div>
            </div>
        </div>
    }
}

/// Transient status message with a colour-coded background.
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub colour: &'static str,
}

impl Toast {
    pub fn new(text: impl Into<String>, colour: &'static str) -> Self {
        Toast {
            text: text.into(),
            colour,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Toast::new(text, TOAST_ERROR)
    }
}

pub fn render_toast(toast: Option<&Toast>) -> Html {
    match toast {
        Some(toast) => html! {
            <div class="toast show" style={format!("background:{}", toast.colour)}>
                { &toast.text }
            </div>
        },
        None => html! { <div class="toast"></div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_css_covers_all_variants() {
        assert_eq!(fill_css(&FlashFill::Blank, "#444"), "#444");
        assert_eq!(fill_css(&FlashFill::Solid(Colour::Red), "#444"), "#ff0000");
        assert_eq!(
            fill_css(
                &FlashFill::Split {
                    first: Colour::Red,
                    second: Colour::Blue,
                    dir: SplitDir::Bottom,
                },
                "#444"
            ),
            "linear-gradient(to bottom,#ff0000 50%,#0000ff 50%)"
        );
    }

    #[test]
    fn tile_background_scales_with_colour_count() {
        assert_eq!(tile_background(&[]), NEUTRAL_TILE);
        assert_eq!(tile_background(&[Colour::Red]), "#ff0000");
        assert_eq!(
            tile_background(&[Colour::Red, Colour::Green]),
            "linear-gradient(135deg,#ff0000 50%,#00ff00 50%)"
        );
        assert!(tile_background(&Colour::ALL).contains("75%"));
    }

    #[test]
    fn split_fill_reports_both_region_colours() {
        let fill = FlashFill::Split {
            first: Colour::Red,
            second: Colour::Yellow,
            dir: SplitDir::Right,
        };
        assert_eq!(primary_colour(&fill), Some(Colour::Red));
        assert_eq!(secondary_colour(&fill), Some(Colour::Yellow));
        // Solid fills reuse the one colour for both digit slots.
        let solid = FlashFill::Solid(Colour::Blue);
        assert_eq!(secondary_colour(&solid), Some(Colour::Blue));
    }
}
