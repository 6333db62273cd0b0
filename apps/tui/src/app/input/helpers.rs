#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

/// Moves `index` one place through `len` items, wrapping at both ends.
pub const fn step_index(index: usize, len: usize, step: Step) -> usize {
    if len == 0 {
        return 0;
    }

    match step {
        Step::Forward => (index + 1) % len,
        Step::Back if index == 0 || index >= len => len - 1,
        Step::Back => index - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        assert_eq!(step_index(3, 4, Step::Forward), 0);
        assert_eq!(step_index(0, 4, Step::Back), 3);
        assert_eq!(step_index(1, 4, Step::Back), 0);
        assert_eq!(step_index(1, 4, Step::Forward), 2);
    }

    #[test]
    fn empty_lists_stay_at_zero() {
        assert_eq!(step_index(0, 0, Step::Forward), 0);
        assert_eq!(step_index(5, 0, Step::Back), 0);
    }
}
