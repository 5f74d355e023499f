use super::ConsoleError;
use crate::api::ApiClient;

pub const PIN_LENGTH: usize = 4;

/// Keeps only the digits, like the PIN field does while typing.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn validate(pin: &str, confirm: &str) -> Result<String, ConsoleError> {
    let pin = sanitize(pin);
    let confirm = sanitize(confirm);
    if pin.len() != PIN_LENGTH {
        return Err(ConsoleError::Pin("PIN must be 4 digits".to_string()));
    }
    if pin != confirm {
        return Err(ConsoleError::Pin("PINs do not match".to_string()));
    }
    Ok(pin)
}

pub async fn create(api: &ApiClient, pin: &str, confirm: &str) -> Result<(), ConsoleError> {
    let pin = validate(pin, confirm)?;
    api.user()
        .set_transaction_pin(&pin)
        .await
        .map_err(|err| ConsoleError::from_api(err, "Failed to create PIN"))?;
    Ok(())
}
