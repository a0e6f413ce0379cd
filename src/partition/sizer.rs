use crate::error::{CohortError, CohortResult};

/// Splits `total_entities` across `num_groups`, left to right. Each group
/// takes the floor share of what is left, plus one while a remainder exists,
/// so earlier groups absorb the extra members: `(7, 3)` gives `[3, 2, 2]`.
pub fn compute_sizes(total_entities: usize, num_groups: usize) -> CohortResult<Vec<usize>> {
    if num_groups == 0 {
        return Err(CohortError::InvalidArgument(
            "num_groups must be at least 1".to_string(),
        ));
    }

    let mut sizes = Vec::with_capacity(num_groups);
    let mut remaining = total_entities;

    for i in 0..num_groups {
        let remaining_groups = num_groups - i;
        let mut size = remaining / remaining_groups;
        if remaining % remaining_groups > 0 {
            size += 1;
        }
        remaining -= size;
        sizes.push(size);
    }

    Ok(sizes)
}
