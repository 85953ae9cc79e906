use lib::prelude::*;

#[entry(input = "d02.txt", expect = (2, 4))]
fn main(mut input: IStr) -> Result<(u32, u32)> {
    count(&mut input)
}

/// Count reports which are safe as-is and with the dampener. A blank line is
/// an empty report, which is trivially safe.
fn count(input: &mut IStr) -> Result<(u32, u32)> {
    let mut safe = 0;
    let mut dampened = 0;

    while let Some(levels) = input.try_line::<Vec<i32>>()? {
        if is_safe(levels.iter().copied()) {
            safe += 1;
            dampened += 1;
        } else if is_safe_dampened(&levels) {
            dampened += 1;
        }
    }

    Ok((safe, dampened))
}

/// A report is safe if it's strictly monotonic, with every step being at
/// least one and at most three.
fn is_safe(levels: impl IntoIterator<Item = i32>) -> bool {
    let mut it = levels.into_iter();

    let Some(mut last) = it.next() else {
        return true;
    };

    let mut sign = 0;

    for level in it {
        let delta = level - last;

        if !(1..=3).contains(&delta.abs()) {
            return false;
        }

        if sign != 0 && sign != delta.signum() {
            return false;
        }

        sign = delta.signum();
        last = level;
    }

    true
}

/// Test if the report is safe with any single level removed.
fn is_safe_dampened(levels: &[i32]) -> bool {
    (0..levels.len()).any(|skip| {
        let it = levels
            .iter()
            .enumerate()
            .filter(|&(n, _)| n != skip)
            .map(|(_, &level)| level);

        is_safe(it)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety() {
        assert!(is_safe([7, 6, 4, 2, 1]));
        assert!(!is_safe([1, 2, 7, 8, 9]));
        assert!(!is_safe([1, 3, 2, 4, 5]));
        assert!(!is_safe([8, 6, 4, 4, 1]));
        assert!(is_safe([4]));
        assert!(is_safe([]));
    }

    #[test]
    fn test_dampener() {
        assert!(is_safe_dampened(&[1, 3, 2, 4, 5]));
        assert!(is_safe_dampened(&[8, 6, 4, 4, 1]));
        assert!(!is_safe_dampened(&[9, 7, 6, 2, 1]));
        // Removing the first level fixes the direction.
        assert!(is_safe_dampened(&[5, 1, 2, 3]));
    }

    #[test]
    fn test_sample() {
        let mut input = IStr::from_static(include_bytes!("../../inputs/d02.txt"));
        let mut reports = Vec::new();

        while let Some(levels) = input.try_line::<Vec<i32>>().unwrap() {
            reports.push(levels);
        }

        assert_eq!(reports.len(), 6);
        assert_eq!(reports.iter().filter(|r| is_safe(r.iter().copied())).count(), 2);
        assert_eq!(reports.iter().filter(|r| is_safe_dampened(r)).count(), 4);
    }

    #[test]
    fn test_blank_line_is_safe() {
        let mut input = IStr::from_static(b"1 2 3\n\n9 1\n");
        assert_eq!(count(&mut input).unwrap(), (2, 3));
    }
}
