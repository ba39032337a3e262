use super::*;

// =========================================================================
// Login validation
// =========================================================================

#[test]
fn login_requires_email() {
    assert_eq!(
        validate_login_input("", "segredo"),
        Err("Informe e-mail e senha.")
    );
    assert_eq!(
        validate_login_input("   ", "segredo"),
        Err("Informe e-mail e senha.")
    );
}

#[test]
fn login_requires_password() {
    assert_eq!(
        validate_login_input("thais@puff.eco", ""),
        Err("Informe e-mail e senha.")
    );
}

#[test]
fn login_accepts_filled_credentials() {
    assert_eq!(validate_login_input("thais@puff.eco", "segredo"), Ok(()));
}

// =========================================================================
// Registration validation
// =========================================================================

#[test]
fn signup_requires_name() {
    assert_eq!(
        validate_signup_input("  ", "thais@puff.eco", "segredo", true),
        Err("Informe seu nome completo.")
    );
}

#[test]
fn signup_requires_credentials() {
    assert_eq!(
        validate_signup_input("Thais", "", "segredo", true),
        Err("Informe e-mail e senha.")
    );
    assert_eq!(
        validate_signup_input("Thais", "thais@puff.eco", "", true),
        Err("Informe e-mail e senha.")
    );
}

#[test]
fn signup_rejects_short_password() {
    assert_eq!(
        validate_signup_input("Thais", "thais@puff.eco", "cinco", true),
        Err("A senha deve ter pelo menos 6 caracteres.")
    );
}

#[test]
fn signup_counts_password_characters_not_bytes() {
    // Six characters that span more than six bytes still pass.
    assert_eq!(
        validate_signup_input("Thais", "thais@puff.eco", "áéíóúã", true),
        Ok(())
    );
}

#[test]
fn signup_requires_terms_acceptance() {
    assert_eq!(
        validate_signup_input("Thais", "thais@puff.eco", "segredo", false),
        Err("É necessário aceitar os termos de uso.")
    );
}

#[test]
fn signup_accepts_complete_form() {
    assert_eq!(
        validate_signup_input("Thais", "thais@puff.eco", "segredo", true),
        Ok(())
    );
}
