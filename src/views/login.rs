// ============================================================================
// LOGIN VIEW - Formularios empleado / administrador (solo markup)
// ============================================================================

pub fn render_login() -> String {
    r#"<div class="login-page" id="login-page">
         <div class="login-header"><h1>Billed</h1></div>
         <div class="login-forms">
           <form class="form-employee" id="form-employee" data-testid="form-employee">
             <h2>Employé</h2>
             <label for="employee-email-input">Votre email</label>
             <input type="email" id="employee-email-input" data-testid="employee-email-input" placeholder="johndoe@email.com" required />
             <label for="employee-password-input">Mot de passe</label>
             <input type="password" id="employee-password-input" data-testid="employee-password-input" placeholder="******" required />
             <button type="submit" class="btn btn-primary" id="employee-login-button">Se connecter</button>
           </form>
           <form class="form-admin" id="form-admin" data-testid="form-admin">
             <h2>Administration</h2>
             <label for="admin-email-input">Votre email</label>
             <input type="email" id="admin-email-input" data-testid="admin-email-input" placeholder="johndoe@email.com" required />
             <label for="admin-password-input">Mot de passe</label>
             <input type="password" id="admin-password-input" data-testid="admin-password-input" placeholder="******" required />
             <button type="submit" class="btn btn-primary" id="admin-login-button">Se connecter</button>
           </form>
         </div>
       </div>"#
        .to_string()
}
