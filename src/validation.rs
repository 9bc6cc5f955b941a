//! Client-side form checks. Every function here runs before any remote
//! call; a failure is surfaced inline and the request is never sent.

/// Recharges and signups both require a plain 10-digit Indian mobile number.
pub fn validate_mobile(mobile: &str) -> Result<(), String> {
    if mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Mobile number must be exactly 10 digits".to_string())
    }
}

pub const MIN_RECHARGE_AMOUNT: u32 = 10;

/// Parses the free-text amount field and enforces the minimum.
pub fn validate_amount(amount: &str) -> Result<u32, String> {
    match amount.trim().parse::<u32>() {
        Ok(value) if value >= MIN_RECHARGE_AMOUNT => Ok(value),
        _ => Err("Enter a valid recharge amount (minimum ₹10)".to_string()),
    }
}

/// Keeps only digits and caps the field at 10 characters, mirroring what
/// the mobile input does as the user types.
pub fn sanitize_mobile_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect()
}

pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
    pub admin_account: bool,
}

pub fn validate_signup(form: &SignupForm) -> Result<(), String> {
    if form.name.is_empty()
        || form.email.is_empty()
        || form.mobile_number.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err("Please fill in all fields".to_string());
    }

    if form.name.len() < 3 {
        return Err("Name must be at least 3 characters".to_string());
    }

    if !form.email.contains('@') || !form.email.contains('.') {
        return Err("Please enter a valid email".to_string());
    }

    validate_mobile(&form.mobile_number)?;

    if form.admin_account && !form.email.ends_with("@admin.com") {
        return Err("Admin accounts must use @admin.com email domain".to_string());
    }

    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }

    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            admin_account: false,
        }
    }

    #[test]
    fn eight_digit_mobile_is_rejected_with_explicit_message() {
        let err = validate_mobile("98765432").unwrap_err();
        assert!(err.contains("10 digits"), "message was: {err}");
    }

    #[test]
    fn mobile_with_letters_is_rejected() {
        assert!(validate_mobile("98765abc10").is_err());
        assert!(validate_mobile("9876543210").is_ok());
    }

    #[test]
    fn amount_below_minimum_is_rejected() {
        assert!(validate_amount("9").is_err());
        assert_eq!(validate_amount("10"), Ok(10));
        assert_eq!(validate_amount(" 999 "), Ok(999));
        assert!(validate_amount("").is_err());
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("abc").is_err());
    }

    #[test]
    fn mobile_input_is_sanitized_to_ten_digits() {
        assert_eq!(sanitize_mobile_input("98-76 54x321099"), "9876543210");
        assert_eq!(sanitize_mobile_input("abc"), "");
    }

    #[test]
    fn valid_user_signup_passes() {
        assert!(validate_signup(&valid_form()).is_ok());
    }

    #[test]
    fn admin_signup_requires_admin_domain() {
        let form = SignupForm {
            email: "x@gmail.com".to_string(),
            admin_account: true,
            ..valid_form()
        };
        let err = validate_signup(&form).unwrap_err();
        assert!(err.contains("@admin.com"), "message was: {err}");

        let form = SignupForm {
            email: "x@admin.com".to_string(),
            admin_account: true,
            ..valid_form()
        };
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn missing_fields_rejected_before_anything_else() {
        let form = SignupForm { email: String::new(), ..valid_form() };
        assert_eq!(validate_signup(&form).unwrap_err(), "Please fill in all fields");
    }

    #[test]
    fn short_name_and_password_rules() {
        let form = SignupForm { name: "Al".to_string(), ..valid_form() };
        assert!(validate_signup(&form).unwrap_err().contains("at least 3"));

        let form = SignupForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_form()
        };
        assert!(validate_signup(&form).unwrap_err().contains("at least 6"));
    }

    #[test]
    fn mismatched_passwords_rejected() {
        let form = SignupForm { confirm_password: "other1".to_string(), ..valid_form() };
        assert_eq!(validate_signup(&form).unwrap_err(), "Passwords do not match");
    }
}
