// SVG inline usados por las vistas

pub const WINDOW_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="6" width="24" height="20" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><line x1="4" y1="12" x2="28" y2="12" stroke="currentColor" stroke-width="2"/></svg>"#;

pub const MAIL_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="8" width="24" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><polyline points="4,8 16,18 28,8" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

pub const DISCONNECT_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg"><path d="M12 6H6v20h6" fill="none" stroke="currentColor" stroke-width="2"/><polyline points="20,10 26,16 20,22" fill="none" stroke="currentColor" stroke-width="2"/><line x1="12" y1="16" x2="26" y2="16" stroke="currentColor" stroke-width="2"/></svg>"#;

pub const EYE_ICON: &str = r#"<svg width="22" height="16" viewBox="0 0 22 16" xmlns="http://www.w3.org/2000/svg"><path d="M1 8s4-7 10-7 10 7 10 7-4 7-10 7S1 8 1 8z" fill="none" stroke="currentColor" stroke-width="2"/><circle cx="11" cy="8" r="3" fill="currentColor"/></svg>"#;

pub const ARROW_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg"><polyline points="4,6 8,10 12,6" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

pub const BIG_BILLED_ICON: &str = r##"<svg width="240" height="240" viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg"><rect x="12" y="6" width="40" height="52" rx="3" fill="none" stroke="#0D5AE5" stroke-width="3"/><line x1="20" y1="20" x2="44" y2="20" stroke="#0D5AE5" stroke-width="3"/><line x1="20" y1="30" x2="44" y2="30" stroke="#0D5AE5" stroke-width="3"/><line x1="20" y1="40" x2="36" y2="40" stroke="#0D5AE5" stroke-width="3"/></svg>"##;
