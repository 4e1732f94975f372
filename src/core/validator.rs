use crate::domain::model::{PreferenceInput, Side};
use crate::utils::error::ValidationError;
use crate::utils::validation::{check_permutation, PermutationFault};

/// 確認兩邊的人數都等於 N，且每一條偏好清單都是 1..=N 的排列。
/// 引擎只接受通過這一步的資料。
pub fn validate(input: &PreferenceInput) -> Result<(), ValidationError> {
    let size = input.size;

    check_count(Side::Proposer, "names", size, input.proposer_names.len())?;
    check_count(Side::Proposer, "preference lists", size, input.proposer_lists.len())?;
    check_count(Side::Proposee, "names", size, input.proposee_names.len())?;
    check_count(Side::Proposee, "preference lists", size, input.proposee_lists.len())?;

    check_lists(Side::Proposer, &input.proposer_lists, size)?;
    check_lists(Side::Proposee, &input.proposee_lists, size)?;

    tracing::debug!("✅ Preferences validated for {} matches", size);
    Ok(())
}

fn check_count(
    side: Side,
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), ValidationError> {
    if expected != found {
        return Err(ValidationError::CountMismatch {
            side,
            what,
            expected,
            found,
        });
    }
    Ok(())
}

pub(crate) fn check_lists(side: Side, lists: &[Vec<i64>], size: usize) -> Result<(), ValidationError> {
    for (offset, list) in lists.iter().enumerate() {
        let index = offset + 1;
        check_permutation(list, size).map_err(|fault| match fault {
            PermutationFault::WrongLength { found } => ValidationError::WrongLength {
                side,
                index,
                expected: size,
                found,
            },
            PermutationFault::OutOfRange { value } => ValidationError::OutOfRange {
                side,
                index,
                value,
                size,
            },
            PermutationFault::Duplicate { value } => ValidationError::Duplicate { side, index, value },
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("agent{}", i)).collect()
    }

    fn input(proposer_lists: Vec<Vec<i64>>, proposee_lists: Vec<Vec<i64>>) -> PreferenceInput {
        PreferenceInput {
            size: 2,
            proposer_names: names(2),
            proposer_lists,
            proposee_names: names(2),
            proposee_lists,
        }
    }

    #[test]
    fn test_accepts_permutations() {
        let data = input(vec![vec![1, 2], vec![2, 1]], vec![vec![2, 1], vec![1, 2]]);
        assert_eq!(validate(&data), Ok(()));
    }

    #[test]
    fn test_accepts_empty_input() {
        assert_eq!(validate(&PreferenceInput::default()), Ok(()));
    }

    #[test]
    fn test_rejects_duplicate_proposer_preference() {
        let data = input(vec![vec![1, 2], vec![1, 1]], vec![vec![2, 1], vec![1, 2]]);
        assert_eq!(
            validate(&data),
            Err(ValidationError::Duplicate {
                side: Side::Proposer,
                index: 2,
                value: 1
            })
        );
    }

    #[test]
    fn test_rejects_out_of_range_proposee_preference() {
        let data = input(vec![vec![1, 2], vec![2, 1]], vec![vec![3, 1], vec![1, 2]]);
        assert_eq!(
            validate(&data),
            Err(ValidationError::OutOfRange {
                side: Side::Proposee,
                index: 1,
                value: 3,
                size: 2
            })
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        let data = input(vec![vec![1, 2], vec![2, 1]], vec![vec![2, 1], vec![1]]);
        assert_eq!(
            validate(&data),
            Err(ValidationError::WrongLength {
                side: Side::Proposee,
                index: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_rejects_count_mismatch() {
        let mut data = input(vec![vec![1, 2], vec![2, 1]], vec![vec![2, 1], vec![1, 2]]);
        data.proposee_names.pop();
        assert!(matches!(
            validate(&data),
            Err(ValidationError::CountMismatch {
                side: Side::Proposee,
                expected: 2,
                found: 1,
                ..
            })
        ));
    }
}
