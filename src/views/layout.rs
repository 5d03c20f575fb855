// ============================================================================
// VERTICAL LAYOUT - Barra lateral común a las páginas autenticadas
// ============================================================================

use crate::views::icons::{DISCONNECT_ICON, MAIL_ICON, WINDOW_ICON};

pub const NAVBAR_ID: &str = "vertical-navbar";
pub const BILLS_ICON_ID: &str = "layout-icon1";
pub const NEW_BILL_ICON_ID: &str = "layout-icon2";
pub const DISCONNECT_ID: &str = "layout-disconnect";

/// `height` en vh
pub fn render_vertical_layout(height: u32, with_employee_icons: bool) -> String {
    let icons = if with_employee_icons {
        format!(
            r#"<div id="{}" data-testid="icon-window">{}</div>
               <div id="{}" data-testid="icon-mail">{}</div>"#,
            BILLS_ICON_ID, WINDOW_ICON, NEW_BILL_ICON_ID, MAIL_ICON
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="vertical-navbar" id="{navbar}" style="height: {height}vh;">
             <div class="layout-title"><span>Billed</span></div>
             {icons}
             <div id="{disconnect}" data-testid="layout-disconnect">{disconnect_icon}</div>
           </div>"#,
        navbar = NAVBAR_ID,
        height = height,
        icons = icons,
        disconnect = DISCONNECT_ID,
        disconnect_icon = DISCONNECT_ICON,
    )
}
