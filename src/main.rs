// src/main.rs
use gtk4::prelude::*;
use gtk4::{gdk, Application, CssProvider};
use preview_core::PreviewConfig;
use preview_gtk4::PreviewWindow;
use tracing::info;

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = Application::builder()
        .application_id("com.example.fontpeek")
        .build();

    app.connect_activate(|app| {
        setup_styles();

        let window = PreviewWindow::new(app, PreviewConfig::default());
        window.present();
        info!("main window presented");
    });

    app.run()
}

fn setup_styles() {
    let css = CssProvider::new();
    css.load_from_data(
        "window {
             background-color: #f8f9fa;
         }

         frame {
             border: 2px solid #3498db;
             border-radius: 8px;
             background-color: #ffffff;
         }

         frame > label {
             color: #2c3e50;
             font-weight: bold;
         }

         button {
             background-color: #3498db;
             color: white;
             border-radius: 4px;
             font-weight: bold;
         }

         button:hover {
             background-color: #2980b9;
         }

         button.destructive-action {
             background-color: #e74c3c;
         }

         button.destructive-action:hover {
             background-color: #c0392b;
         }

         scale trough {
             background: #dddddd;
             border-radius: 4px;
         }

         scale slider {
             background: #3498db;
             border-radius: 9px;
         }

         entry, textview {
             border: 2px solid #bdc3c7;
             border-radius: 4px;
             background-color: white;
         }

         entry:focus-within, textview:focus-within {
             border-color: #3498db;
         }

         list {
             border: 2px solid #bdc3c7;
             border-radius: 4px;
             background-color: white;
         }

         list row:selected {
             background-color: #3498db;
             color: white;
         }

         list row:hover {
             background-color: #ecf0f1;
         }

         .preview-surface {
             background-color: white;
             border: 1px solid #bdc3c7;
         }

         .preview-surface.current {
             background-color: #add8e6;
         }",
    );

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &css,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
