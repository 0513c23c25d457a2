//! Main window: control panel, font list, and the preview column
//!
//! All algorithmic state lives in the core [`PreviewSession`]; this
//! module owns widgets and forwards signals. Rapid-fire control changes
//! are coalesced through the session's debounce generations and a glib
//! one-shot timer, so only the last state of a burst is rendered.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, Button, ColorButton, ComboBoxText,
          Frame, Label, ListBox, Orientation, Scale, ScrolledWindow, SearchEntry,
          SelectionMode, TextView};
use preview_core::{spawn_enumeration, Bounds, CatalogEvent, Color, FontWeight, LoadState,
                  PreviewConfig, PreviewMode, PreviewSession};
use tracing::debug;

use crate::catalog_source::pango_snapshot;
use crate::preview_area::PreviewArea;

/// Widgets and state the signal handlers share
#[derive(Clone)]
struct WindowParts {
    session: Rc<RefCell<PreviewSession>>,
    list: ListBox,
    previews: GtkBox,
    family_label: Label,
    style_label: Label,
    status_label: Label,
}

/// The previewer's main application window
pub struct PreviewWindow {
    window: ApplicationWindow,
}

impl PreviewWindow {
    pub fn new(app: &Application, config: PreviewConfig) -> Self {
        let session = Rc::new(RefCell::new(PreviewSession::new(config.clone())));

        // Font list
        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::Multiple);
        let list_scroll = ScrolledWindow::new();
        list_scroll.set_min_content_height(200);
        list_scroll.set_vexpand(true);
        list_scroll.set_child(Some(&list));

        // Preview column
        let previews = GtkBox::new(Orientation::Vertical, 8);
        let preview_scroll = ScrolledWindow::new();
        preview_scroll.set_vexpand(true);
        preview_scroll.set_child(Some(&previews));

        let family_label = Label::new(Some("Family: -"));
        let style_label = Label::new(Some("Style: -"));
        family_label.set_halign(gtk4::Align::Start);
        style_label.set_halign(gtk4::Align::Start);

        let status_label = Label::new(Some("Loading fonts..."));
        status_label.set_halign(gtk4::Align::Start);

        let parts = WindowParts {
            session: Rc::clone(&session),
            list: list.clone(),
            previews: previews.clone(),
            family_label: family_label.clone(),
            style_label: style_label.clone(),
            status_label: status_label.clone(),
        };

        // Control panel
        let panel = GtkBox::new(Orientation::Vertical, 12);
        panel.set_width_request(300);

        let search = SearchEntry::new();
        search.set_placeholder_text(Some("Search fonts..."));
        panel.append(&framed("Font Search", &search));
        panel.append(&framed("Font List", &list_scroll));
        panel.append(&Self::build_properties(&parts, &config));
        panel.append(&Self::build_preview_settings(&parts));

        let info_box = GtkBox::new(Orientation::Vertical, 4);
        info_box.append(&family_label);
        info_box.append(&style_label);
        panel.append(&framed("Font Info", &info_box));

        // Preview text entry
        let text_view = TextView::new();
        text_view.buffer().set_text(&config.preview_text);
        let text_scroll = ScrolledWindow::new();
        text_scroll.set_max_content_height(100);
        text_scroll.set_propagate_natural_height(true);
        text_scroll.set_child(Some(&text_view));

        let right = GtkBox::new(Orientation::Vertical, 12);
        right.set_hexpand(true);
        right.append(&framed("Preview Text", &text_scroll));
        right.append(&preview_scroll);
        right.append(&status_label);

        let root = GtkBox::new(Orientation::Horizontal, 12);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_margin_start(12);
        root.set_margin_end(12);
        root.append(&panel);
        root.append(&right);

        // Signal wiring
        {
            let parts = parts.clone();
            search.connect_search_changed(move |entry| {
                parts.session.borrow_mut().set_filter(entry.text().as_str());
                rebuild_list(&parts);
            });
        }

        {
            let parts = parts.clone();
            list.connect_selected_rows_changed(move |list| {
                let rows: Vec<usize> = list
                    .selected_rows()
                    .iter()
                    .map(|row| row.index())
                    .filter(|&index| index >= 0)
                    .map(|index| index as usize)
                    .collect();
                {
                    let mut session = parts.session.borrow_mut();
                    session.set_selected_rows(&rows);
                    if let Some(&first) = rows.first() {
                        session.select_row(first);
                    }
                }
                match parts.session.borrow().config().preview_mode {
                    // A single click should feel instant; bursts only
                    // happen on the debounced paths.
                    PreviewMode::Single => rebuild_previews(&parts),
                    PreviewMode::Multi | PreviewMode::Selected => schedule_refresh(&parts),
                }
            });
        }

        {
            let parts = parts.clone();
            text_view.buffer().connect_changed(move |buffer| {
                let text = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);
                parts.session.borrow_mut().set_preview_text(text.as_str());
                schedule_refresh(&parts);
            });
        }

        start_catalog_loading(&parts);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("fontpeek")
            .default_width(1200)
            .default_height(800)
            .build();
        window.set_child(Some(&root));

        PreviewWindow { window }
    }

    /// Size, color, and weight controls
    fn build_properties(parts: &WindowParts, config: &PreviewConfig) -> Frame {
        let box_ = GtkBox::new(Orientation::Vertical, 8);

        // Size slider
        let size_row = GtkBox::new(Orientation::Horizontal, 8);
        size_row.append(&Label::new(Some("Size:")));
        let size_scale = Scale::with_range(Orientation::Horizontal, 8.0, 72.0, 1.0);
        size_scale.set_value(f64::from(config.font_size));
        size_scale.set_hexpand(true);
        let size_label = Label::new(Some(&format!("{}px", config.font_size)));
        size_label.set_width_chars(5);
        size_row.append(&size_scale);
        size_row.append(&size_label);
        box_.append(&size_row);

        {
            let parts = parts.clone();
            size_scale.connect_value_changed(move |scale| {
                let size = scale.value() as i32;
                size_label.set_text(&format!("{size}px"));
                parts.session.borrow_mut().set_font_size(size);
                schedule_refresh(&parts);
            });
        }

        // Color picker
        let color_row = GtkBox::new(Orientation::Horizontal, 8);
        color_row.append(&Label::new(Some("Color:")));
        let color_button = ColorButton::new();
        color_button.set_rgba(&gtk4::gdk::RGBA::new(
            config.text_color.r as f32,
            config.text_color.g as f32,
            config.text_color.b as f32,
            config.text_color.a as f32,
        ));
        color_row.append(&color_button);
        box_.append(&color_row);

        {
            let parts = parts.clone();
            color_button.connect_color_set(move |button| {
                let rgba = button.rgba();
                parts.session.borrow_mut().set_text_color(Color::rgba(
                    f64::from(rgba.red()),
                    f64::from(rgba.green()),
                    f64::from(rgba.blue()),
                    f64::from(rgba.alpha()),
                ));
                schedule_refresh(&parts);
            });
        }

        // Weight slider
        let weight_row = GtkBox::new(Orientation::Horizontal, 8);
        weight_row.append(&Label::new(Some("Weight:")));
        let weight_scale = Scale::with_range(Orientation::Horizontal, 0.0, 99.0, 1.0);
        weight_scale.set_value(f64::from(config.weight_value));
        weight_scale.set_hexpand(true);
        let weight_label = Label::new(Some(config.weight().label()));
        weight_label.set_width_chars(10);
        weight_row.append(&weight_scale);
        weight_row.append(&weight_label);
        box_.append(&weight_row);

        {
            let parts = parts.clone();
            weight_scale.connect_value_changed(move |scale| {
                let value = scale.value() as u8;
                weight_label.set_text(FontWeight::from_slider(value).label());
                parts.session.borrow_mut().set_weight_value(value);
                schedule_refresh(&parts);
            });
        }

        framed("Font Properties", &box_)
    }

    /// Preview mode dropdown and the clear-selection button
    fn build_preview_settings(parts: &WindowParts) -> Frame {
        let box_ = GtkBox::new(Orientation::Vertical, 8);
        box_.append(&Label::new(Some("Preview mode:")));

        let mode_combo = ComboBoxText::new();
        mode_combo.append_text("Single preview");
        mode_combo.append_text("Multi preview");
        mode_combo.append_text("Selected fonts");
        mode_combo.set_active(Some(0));
        box_.append(&mode_combo);

        {
            let parts = parts.clone();
            mode_combo.connect_changed(move |combo| {
                let mode = match combo.active() {
                    Some(1) => PreviewMode::Multi,
                    Some(2) => PreviewMode::Selected,
                    _ => PreviewMode::Single,
                };
                parts.session.borrow_mut().set_preview_mode(mode);
                schedule_refresh(&parts);
            });
        }

        let clear_button = Button::with_label("Clear All Selections");
        clear_button.add_css_class("destructive-action");
        box_.append(&clear_button);

        {
            let parts = parts.clone();
            clear_button.connect_clicked(move |_| {
                parts.list.unselect_all();
                parts.session.borrow_mut().clear_selection();
                if parts.session.borrow().config().preview_mode == PreviewMode::Selected {
                    rebuild_previews(&parts);
                }
            });
        }

        framed("Preview Settings", &box_)
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn window(&self) -> &ApplicationWindow {
        &self.window
    }
}

/// Wrap a widget in a titled frame
fn framed(title: &str, child: &impl IsA<gtk4::Widget>) -> Frame {
    let frame = Frame::new(Some(title));
    frame.set_child(Some(child));
    frame
}

fn append_row(list: &ListBox, name: &str) {
    let label = Label::new(Some(name));
    label.set_halign(gtk4::Align::Start);
    list.append(&label);
}

/// Rebuild the font list from the session's filtered names and select
/// the first row, which cascades into a preview refresh.
fn rebuild_list(parts: &WindowParts) {
    while let Some(child) = parts.list.first_child() {
        parts.list.remove(&child);
    }
    let names = parts.session.borrow().filtered_names();
    for name in &names {
        append_row(&parts.list, name);
    }
    if let Some(row) = parts.list.row_at_index(0) {
        parts.list.select_row(Some(&row));
    } else {
        rebuild_previews(parts);
    }
}

/// Tear down and rebuild the preview column for the visible variants
fn rebuild_previews(parts: &WindowParts) {
    while let Some(child) = parts.previews.first_child() {
        parts.previews.remove(&child);
    }

    let (variants, current) = {
        let session = parts.session.borrow();
        (session.visible_variants(), session.current_variant().cloned())
    };

    for variant in &variants {
        let area = PreviewArea::new();
        let request = parts
            .session
            .borrow()
            .build_request(variant, Bounds::new(0, 0));
        area.set_request(request);
        if variants.len() > 1 && Some(variant) == current.as_ref() {
            area.widget().add_css_class("current");
        }
        parts.previews.append(area.widget());
    }

    update_info(parts);
}

/// Reflect the current selection in the info panel
fn update_info(parts: &WindowParts) {
    let session = parts.session.borrow();
    if session.config().preview_mode == PreviewMode::Selected {
        parts
            .family_label
            .set_text(&format!("Selected fonts: {}", session.selected_count()));
        match session.current_variant() {
            Some(variant) => parts
                .style_label
                .set_text(&format!("Current: {}", variant.display_name())),
            None => parts.style_label.set_text("Style: -"),
        }
    } else {
        match session.current_variant() {
            Some(variant) => {
                parts
                    .family_label
                    .set_text(&format!("Family: {}", variant.family));
                parts
                    .style_label
                    .set_text(&format!("Style: {}", variant.style_name));
            }
            None => {
                parts.family_label.set_text("Family: -");
                parts.style_label.set_text("Style: -");
            }
        }
    }
}

/// Arm a trailing debounce timer for the latest change.
///
/// Every change bumps the session generation; each timer remembers the
/// generation it was armed with and fires only if no newer change
/// arrived, so restarting the burst implicitly cancels the pending pass.
fn schedule_refresh(parts: &WindowParts) {
    let generation = parts.session.borrow_mut().note_change();
    let delay = parts.session.borrow().config().debounce_ms;

    let parts = parts.clone();
    glib::timeout_add_local_once(Duration::from_millis(delay), move || {
        if parts.session.borrow().is_current(generation) {
            rebuild_previews(&parts);
        } else {
            debug!("refresh generation {} superseded", generation);
        }
    });
}

/// Start background enumeration and consume its events on the main loop.
///
/// Variants stream into the list as they arrive; completion swaps in the
/// authoritative catalog and selects the first row.
fn start_catalog_loading(parts: &WindowParts) {
    let (tx, rx) = async_channel::unbounded();
    spawn_enumeration(pango_snapshot(), tx);

    let parts = parts.clone();
    glib::MainContext::default().spawn_local(async move {
        while let Ok(event) = rx.recv().await {
            match event {
                CatalogEvent::Progress { .. } => {
                    parts.session.borrow_mut().apply_event(event);
                    if let LoadState::Loading(percent) = parts.session.borrow().load_state() {
                        parts
                            .status_label
                            .set_text(&format!("Loading fonts... {percent}%"));
                    }
                }
                CatalogEvent::Variant(variant) => {
                    let name = variant.display_name();
                    let before = parts.session.borrow().filtered_len();
                    parts
                        .session
                        .borrow_mut()
                        .apply_event(CatalogEvent::Variant(variant));
                    if parts.session.borrow().filtered_len() > before {
                        append_row(&parts.list, &name);
                    }
                }
                CatalogEvent::Completed(_) => {
                    parts.session.borrow_mut().apply_event(event);
                    let count = parts.session.borrow().catalog().len();
                    parts.status_label.set_text(&format!("Loaded {count} fonts"));
                    rebuild_list(&parts);
                }
            }
        }
        debug!("catalog event stream ended");
    });
}
