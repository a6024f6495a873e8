use log::{info, warn};
use sha2::{Digest, Sha256};

use crate::error::{HangmanError, Result};
use crate::model::PlayerRecord;

pub const MIN_NAME_LENGTH: usize = 3;
pub const PASSWORD_SPECIAL_CHARS: [char; 3] = ['#', '=', '-'];

pub fn validate_player_name(name: &str) -> std::result::Result<String, String> {
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        Err(format!(
            "Invalid name, must be {} or more characters",
            MIN_NAME_LENGTH
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn validate_password(password: &str, min_length: usize) -> std::result::Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Invalid password, must be {} or more characters",
            min_length
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err("Invalid password, must have at least 1 upper case letter".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        return Err("Invalid password, must have at least 1 lower case letter".to_string());
    }
    if !password.chars().any(|ch| PASSWORD_SPECIAL_CHARS.contains(&ch)) {
        let specials: String = PASSWORD_SPECIAL_CHARS.iter().collect();
        return Err(format!(
            "Invalid password, must have at least 1 special character ({})",
            specials
        ));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Builds a fresh record. An empty password leaves the account open.
pub fn new_player(name: &str, password: &str) -> PlayerRecord {
    let password_hash = if password.is_empty() {
        None
    } else {
        Some(hash_password(password))
    };
    PlayerRecord::new(name, password_hash)
}

/// Adds a new player, refusing names already taken.
pub fn register_player(
    records: &mut Vec<PlayerRecord>,
    name: &str,
    password: &str,
) -> Result<()> {
    if records.iter().any(|record| record.name == name) {
        return Err(HangmanError::PreconditionViolation(format!(
            "a player named {} already exists",
            name
        )));
    }
    records.push(new_player(name, password));
    info!(target: "accounts", "Registered player {}", name);
    Ok(())
}

pub fn password_matches(record: &PlayerRecord, password: &str) -> bool {
    match &record.password_hash {
        None => true,
        Some(hash) => *hash == hash_password(password),
    }
}

/// Asks `read_password` for up to `attempts` passwords. The closure receives the number of
/// attempts still left, including the current one.
pub fn verify_login<P>(record: &PlayerRecord, attempts: u32, mut read_password: P) -> Result<()>
where
    P: FnMut(u32) -> Result<String>,
{
    if !record.has_password() {
        return Ok(());
    }
    for attempt in 0..attempts {
        let password = read_password(attempts - attempt)?;
        if password_matches(record, &password) {
            return Ok(());
        }
        warn!(
            target: "accounts",
            "Incorrect password for {} (attempt {})",
            record.name,
            attempt + 1
        );
    }
    Err(HangmanError::Authentication(format!(
        "too many incorrect password attempts for {}",
        record.name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_must_have_three_characters() {
        assert!(validate_player_name("ab").is_err());
        assert!(validate_player_name("  ab  ").is_err());
        assert_eq!(validate_player_name(" abc ").unwrap(), "abc");
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Short#1", 8).is_err());
        assert!(validate_password("alllower#", 8).unwrap_err().contains("upper"));
        assert!(validate_password("ALLUPPER#", 8).unwrap_err().contains("lower"));
        assert!(validate_password("NoSpecials", 8).unwrap_err().contains("special"));
        assert!(validate_password("Good-Pass", 8).is_ok());
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_password_creates_open_account() {
        assert!(!new_player("alice", "").has_password());
        assert!(new_player("alice", "Secret=1").has_password());
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut records = Vec::new();
        register_player(&mut records, "alice", "").unwrap();
        assert!(register_player(&mut records, "alice", "").is_err());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_login_succeeds_on_later_attempt() {
        let record = new_player("alice", "Secret=1");
        let mut inputs = vec!["wrong".to_string(), "Secret=1".to_string()].into_iter();
        let mut seen = Vec::new();
        verify_login(&record, 3, |left| {
            seen.push(left);
            Ok(inputs.next().unwrap_or_default())
        })
        .unwrap();
        assert_eq!(seen, vec![3, 2]);
    }

    #[test]
    fn test_login_fails_after_attempt_limit() {
        let record = new_player("alice", "Secret=1");
        let mut calls = 0;
        let error = verify_login(&record, 3, |_| {
            calls += 1;
            Ok("nope".to_string())
        })
        .unwrap_err();
        assert!(matches!(error, HangmanError::Authentication(_)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_open_account_never_prompts() {
        let record = new_player("alice", "");
        verify_login(&record, 3, |_| panic!("should not prompt")).unwrap();
    }
}
