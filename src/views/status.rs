// Páginas de estado: carga, error y ruta desconocida

use crate::utils::html::escape;
use crate::views::layout::render_vertical_layout;

pub fn render_loading() -> String {
    format!(
        r#"<div class="layout">
             {}
             <div class="content" id="loading">Loading...</div>
           </div>"#,
        render_vertical_layout(120, true)
    )
}

pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="layout">
             {}
             <div class="content">
               <div class="content-header"><div class="content-title">Erreur</div></div>
               <div data-testid="error-message" id="error-message">{}</div>
             </div>
           </div>"#,
        render_vertical_layout(120, true),
        escape(message)
    )
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<div class="not-found" id="not-found" data-testid="not-found">
             <h1>404</h1>
             <p>Page introuvable : <code>{}</code></p>
             <a href="/">Retour à l'accueil</a>
           </div>"#,
        escape(path)
    )
}
