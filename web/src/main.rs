//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    use rdk_common::config::{self, Config};
    use rdk_web::app::{shell, App};
    use rdk_web::server::assets;

    // ── Configuration ────────────────────────────────────────────────────
    let config_path = Config::resolve_path();
    let config = config::load_or_default(&config_path)?;

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    let conf = get_configuration(None).context("Cannot load Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.site_addr {
        leptos_options.site_addr = addr;
    }
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().into();
    }
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // WASM bundle, stylesheet and logos
        .fallback_service(assets::static_files(&site_root))
        .with_state(leptos_options);

    tracing::info!("README Design Kit listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
