#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config as DesktopConfig};

#[cfg(feature = "desktop")]
use crate::util::version::{APP_NAME, APP_TAGLINE};

fn main() {
    util::clock::capture_local_offset();
    util::logging::init();

    #[cfg(feature = "desktop")]
    prefer_gl_on_wayland();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("{APP_NAME} | {APP_TAGLINE}"))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0))
                    .with_min_inner_size(LogicalSize::new(420.0, 640.0))
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

/// WebKitGTK on Wayland crashes with explicit sync on some drivers. Both
/// overrides are skipped when the user has already set them.
#[cfg(feature = "desktop")]
fn prefer_gl_on_wayland() {
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if std::env::var(key).is_err() {
            tracing::debug!(key, value, "applying wayland render workaround");
            std::env::set_var(key, value);
        }
    }
}
