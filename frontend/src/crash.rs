use std::panic;

use web_sys::window;

const FALLBACK_HTML: &str = r#"
<div class="crash-screen">
    <div class="crash-card">
        <h2>Oups ! Une erreur s'est produite</h2>
        <p>Désolé, quelque chose s'est mal passé. Essayez de recharger la page.</p>
        <button class="crash-reload" onclick="window.location.reload()">Recharger la page</button>
        <p class="crash-hint">Si le problème persiste, contactez-moi via WhatsApp</p>
    </div>
</div>
<style>
    .crash-screen {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: linear-gradient(135deg, #f5efe6, #e8d8b8);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    .crash-card {
        background: #fff;
        border-radius: 16px;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
        padding: 2rem;
        max-width: 28rem;
        text-align: center;
        color: #2d3b2f;
    }
    .crash-reload {
        background: #4a7c59;
        color: #fff;
        border: none;
        border-radius: 8px;
        padding: 0.75rem 1.5rem;
        cursor: pointer;
    }
    .crash-hint {
        font-size: 0.85rem;
        opacity: 0.6;
        margin-top: 1rem;
    }
</style>
"#;

/// Replaces the page with a reload prompt after an unexpected panic.
pub fn render_fallback() {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    body.set_inner_html(FALLBACK_HTML);
}

/// Logs panics to the console, then swaps in the fallback screen.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        render_fallback();
    }));
}
