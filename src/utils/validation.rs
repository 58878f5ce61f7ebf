use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 指令至少要有程式名稱
pub fn validate_command(field_name: &str, command: &[String]) -> Result<()> {
    match command.first() {
        Some(program) => validate_non_empty_string(field_name, program),
        None => Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_file", "/etc/icinga2/conf.d/iis.conf").is_ok());
        assert!(validate_path("output_file", "").is_err());
        assert!(validate_path("output_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("listing.txt".to_string());
        assert_eq!(
            validate_required_field("source.path", &present).unwrap(),
            "listing.txt"
        );
        assert!(validate_required_field::<String>("source.path", &None).is_err());
    }

    #[test]
    fn test_validate_command() {
        let command = vec!["systemctl".to_string(), "reload".to_string()];
        assert!(validate_command("reload_command", &command).is_ok());
        assert!(validate_command("reload_command", &[]).is_err());
        assert!(validate_command("reload_command", &[" ".to_string()]).is_err());
    }
}
