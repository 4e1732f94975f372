use crate::utils::error::{MatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MatchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 單一清單違反排列條件的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationFault {
    WrongLength { found: usize },
    OutOfRange { value: i64 },
    Duplicate { value: i64 },
}

/// Checks that `values` is a permutation of `1..=size`.
pub fn check_permutation(values: &[i64], size: usize) -> std::result::Result<(), PermutationFault> {
    if values.len() != size {
        return Err(PermutationFault::WrongLength {
            found: values.len(),
        });
    }

    let mut seen = vec![false; size];
    for &value in values {
        let slot = usize::try_from(value)
            .ok()
            .filter(|v| (1..=size).contains(v))
            .ok_or(PermutationFault::OutOfRange { value })?;

        if std::mem::replace(&mut seen[slot - 1], true) {
            return Err(PermutationFault::Duplicate { value });
        }
    }

    Ok(())
}
