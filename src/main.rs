#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Inkpad
//!
//! A minimal scratchpad editor with configurable per-document autosave.
//! Uses the wgpu renderer with automatic fallback to glow (OpenGL) for
//! older systems.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpad::app::InkpadApp;

fn main() -> Result<()> {
    // Initialize file logging
    let file_appender = tracing_appender::rolling::never(".", "inkpad.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Inkpad");

    // Log panics before the default hook runs
    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Application panic: {}", info);
        next(info);
    }));

    tracing::info!("Attempting to start with wgpu renderer");
    if let Err(wgpu_err) = run_with_renderer(eframe::Renderer::Wgpu) {
        tracing::warn!("wgpu renderer failed: {}. Trying glow (OpenGL) fallback...", wgpu_err);

        if let Err(glow_err) = run_with_renderer(eframe::Renderer::Glow) {
            tracing::error!("Both wgpu and glow renderers failed!");
            tracing::error!("wgpu error: {}", wgpu_err);
            tracing::error!("glow error: {}", glow_err);
            return Err(anyhow::anyhow!(
                "No graphics renderer could be initialized (wgpu: {}; glow: {})",
                wgpu_err,
                glow_err
            ));
        }
    }

    Ok(())
}

/// Run the application with the specified renderer
fn run_with_renderer(renderer: eframe::Renderer) -> Result<(), anyhow::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Inkpad"),
        renderer,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "Inkpad",
        native_options,
        Box::new(move |cc| {
            setup_egui_style(cc);
            tracing::info!("Renderer initialized");
            Ok(Box::new(InkpadApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Setup egui visual style
fn setup_egui_style(cc: &eframe::CreationContext<'_>) {
    egui_extras::install_image_loaders(&cc.egui_ctx);

    let mut style = (*cc.egui_ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    use egui::CornerRadius;
    style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);
    style.visuals.window_corner_radius = CornerRadius::same(8);

    cc.egui_ctx.set_style(style);
}
